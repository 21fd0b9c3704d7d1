//! ファイル選択とプレビュー

use leptos::html;
use leptos::prelude::*;
use web_sys::HtmlInputElement;

use crate::api::BrowserFile;
use crate::presenter::ViewSnapshot;

#[component]
pub fn UploadArea<F>(
    file_input: NodeRef<html::Input>,
    snapshot: ReadSignal<ViewSnapshot>,
    on_files_selected: F,
) -> impl IntoView
where
    F: Fn(Vec<BrowserFile>) + 'static + Clone + Send,
{
    let on_change = move |ev: web_sys::Event| {
        let input: HtmlInputElement = event_target(&ev);
        let files = input
            .files()
            .map(|list| BrowserFile::from_list(&list))
            .unwrap_or_default();
        on_files_selected(files);
    };

    view! {
        <div class="upload-area">
            <label for="file-upload" class="upload-label">
                <div class="upload-icon">"📇"</div>
                <p>"Select business card images"</p>
            </label>
            <input
                type="file"
                id="file-upload"
                accept="image/*"
                multiple=true
                node_ref=file_input
                on:change=on_change
            />
            <div id="image-preview" class="image-preview">
                {move || {
                    snapshot
                        .get()
                        .previews
                        .into_iter()
                        .map(|thumb| {
                            view! { <img src=thumb.data_url alt=thumb.file_name /> }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
        </div>
    }
}
