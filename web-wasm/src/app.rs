//! メインアプリケーションコンポーネント

use std::rc::Rc;

use card_extract_common::Controller;
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{BrowserFile, FetchCollaborator};
use crate::components::{
    action_buttons::ActionButtons,
    data_table::DataTable,
    header::Header,
    upload_area::UploadArea,
};
use crate::presenter::{BrowserPresenter, ViewSnapshot};

type BrowserController = Controller<FetchCollaborator, BrowserPresenter>;

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let snapshot = RwSignal::new(ViewSnapshot::default());
    let file_input = NodeRef::<html::Input>::new();

    // 状態はコントローラーが所有し、画面は snapshot 経由で追従する
    let controller = StoredValue::new_local(Rc::new(BrowserController::new(
        FetchCollaborator::same_origin(),
        BrowserPresenter::new(snapshot, file_input),
    )));

    let on_files_selected = move |files: Vec<BrowserFile>| {
        let controller = controller.get_value();
        spawn_local(async move {
            controller.select_files(files).await;
        });
    };

    let on_upload = move |_| {
        let controller = controller.get_value();
        spawn_local(async move {
            controller.upload().await;
        });
    };

    let on_download = move |_| {
        let controller = controller.get_value();
        spawn_local(async move {
            controller.download().await;
        });
    };

    let on_clear = move |_| {
        let controller = controller.get_value();
        spawn_local(async move {
            controller.clear().await;
        });
    };

    let snapshot = snapshot.read_only();

    view! {
        <div class="container">
            <Header />

            <UploadArea
                file_input=file_input
                snapshot=snapshot
                on_files_selected=on_files_selected
            />

            <ActionButtons
                snapshot=snapshot
                on_upload=on_upload
                on_download=on_download
                on_clear=on_clear
            />

            <DataTable snapshot=snapshot />
        </div>
    }
}
