//! 抽出サーバーとの通信

mod server;

pub use server::{BrowserFile, FetchCollaborator};
