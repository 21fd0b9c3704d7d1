//! エラー型定義と通知ポリシー
//!
//! 通知の重大度はエラーの種類だけで決まり、どの操作で発生したかには依存しない。

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("Please select at least one image")]
    NoFilesSelected,

    /// サーバーが `error` フィールドで返した論理エラー
    #[error("{0}")]
    Rejected(String),

    #[error("Transport error: {0}")]
    Transport(String),

    /// レスポンス本文が期待した形式でない
    #[error("Protocol error: {0}")]
    Protocol(String),

    #[error("Preview decode error: {0}")]
    PreviewDecode(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

/// 通知の重大度
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// ユーザーに提示して確認させる（ブラウザではalert）
    Blocking,
    /// ログのみ
    Logged,
}

/// 通知の分類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Input,
    Rejected,
    Transport,
    Protocol,
    Local,
    Decode,
    Stale,
}

/// 通知の発生元となった操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Preview,
    Upload,
    Download,
    Clear,
}

impl Action {
    /// 通信・解析失敗時にユーザーへ出す汎用メッセージ
    pub fn failure_message(&self) -> &'static str {
        match self {
            Action::Preview => "An error occurred while reading an image",
            Action::Upload => "An error occurred during upload",
            Action::Download => "An error occurred during download",
            Action::Clear => "An error occurred while clearing",
        }
    }
}

impl Error {
    pub fn kind(&self) -> NoticeKind {
        match self {
            Error::NoFilesSelected => NoticeKind::Input,
            Error::Rejected(_) => NoticeKind::Rejected,
            Error::Transport(_) => NoticeKind::Transport,
            Error::Protocol(_) | Error::Json(_) => NoticeKind::Protocol,
            Error::PreviewDecode(_) => NoticeKind::Decode,
            Error::Io(_) | Error::Config(_) => NoticeKind::Local,
        }
    }
}

impl NoticeKind {
    pub fn severity(&self) -> Severity {
        match self {
            NoticeKind::Decode | NoticeKind::Stale => Severity::Logged,
            _ => Severity::Blocking,
        }
    }
}

/// プレゼンターに渡される通知
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub severity: Severity,
    pub kind: NoticeKind,
    /// ユーザー向けメッセージ
    pub message: String,
    /// ログ用の詳細
    pub detail: Option<String>,
}

impl Notice {
    pub fn from_error(action: Action, error: &Error) -> Self {
        let kind = error.kind();
        let (message, detail) = match kind {
            // 入力エラーとサーバーのエラー文言はそのまま見せる
            NoticeKind::Input | NoticeKind::Rejected => (error.to_string(), None),
            _ => (action.failure_message().to_string(), Some(error.to_string())),
        };

        Self {
            severity: kind.severity(),
            kind,
            message,
            detail,
        }
    }

    /// 後発のリクエストに追い越されたレスポンスを破棄したことを示す
    pub fn stale(request: u64) -> Self {
        Self {
            severity: Severity::Logged,
            kind: NoticeKind::Stale,
            message: format!("Discarded response for superseded upload #{}", request),
            detail: None,
        }
    }

    pub fn is_blocking(&self) -> bool {
        self.severity == Severity::Blocking
    }
}
