pub mod header;
pub mod upload_area;
pub mod data_table;
pub mod action_buttons;
