//! Card Extract Common Library
//!
//! CLIとWeb(WASM)で共有される型・状態・コントローラー

pub mod types;
pub mod error;
pub mod preview;
pub mod state;
pub mod controller;

pub use types::{
    DownloadRequest, ExtractionRow, TableRow, UploadReply, COLUMNS, COLUMN_LABELS,
    CSV_FILE_NAME, PLACEHOLDER, UPLOAD_FIELD,
};
pub use error::{Action, Error, Notice, NoticeKind, Result, Severity};
pub use preview::{decode_thumbnail, Thumbnail};
pub use state::{Generation, RequestToken, ViewState};
pub use controller::{
    ClearOutcome, Collaborator, Controller, DownloadOutcome, Presenter, SelectedFile,
    UploadOutcome,
};
