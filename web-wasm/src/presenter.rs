//! ブラウザへの反映
//!
//! コントローラーの状態を Leptos の signal に写し、通知は console と alert に出す。

use card_extract_common::{
    Notice, Presenter, Result, Severity, TableRow, Thumbnail, ViewState,
};
use leptos::html;
use leptos::prelude::*;

use crate::api::BrowserFile;
use crate::download::save_bytes;

/// 画面描画用のスナップショット
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViewSnapshot {
    pub previews: Vec<Thumbnail>,
    pub rows: Vec<TableRow>,
    pub download_visible: bool,
    pub uploading: bool,
    pub selected: usize,
}

impl ViewSnapshot {
    pub fn from_view<F>(view: &ViewState<F>) -> Self {
        Self {
            previews: view.previews().to_vec(),
            rows: view.table().to_vec(),
            download_visible: view.download_visible(),
            uploading: view.is_uploading(),
            selected: view.files().len(),
        }
    }
}

pub struct BrowserPresenter {
    snapshot: RwSignal<ViewSnapshot>,
    file_input: NodeRef<html::Input>,
}

impl BrowserPresenter {
    pub fn new(snapshot: RwSignal<ViewSnapshot>, file_input: NodeRef<html::Input>) -> Self {
        Self {
            snapshot,
            file_input,
        }
    }
}

impl Presenter<BrowserFile> for BrowserPresenter {
    fn render(&self, view: &ViewState<BrowserFile>) {
        let next = ViewSnapshot::from_view(view);

        // クリア後はファイル入力の選択も外す
        if next.selected == 0 {
            if let Some(input) = self.file_input.get_untracked() {
                input.set_value("");
            }
        }
        self.snapshot.set(next);
    }

    fn notify(&self, notice: &Notice) {
        let detail = notice.detail.clone().unwrap_or_default();
        match notice.severity {
            Severity::Blocking => {
                gloo::console::error!(notice.message.clone(), detail);
                gloo::dialogs::alert(&notice.message);
            }
            Severity::Logged => {
                gloo::console::warn!(notice.message.clone(), detail);
            }
        }
    }

    fn save_file(&self, file_name: &str, bytes: &[u8]) -> Result<()> {
        gloo::console::log!(format!("saving {} ({} bytes)", file_name, bytes.len()));
        save_bytes(bytes, file_name, "text/csv")
    }
}
