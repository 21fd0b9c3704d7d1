pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod export;
pub mod presenter;
pub mod scanner;
