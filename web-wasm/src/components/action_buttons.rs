//! 抽出・ダウンロード・クリアのボタン

use leptos::prelude::*;

use crate::presenter::ViewSnapshot;

#[component]
pub fn ActionButtons<FU, FD, FC>(
    snapshot: ReadSignal<ViewSnapshot>,
    on_upload: FU,
    on_download: FD,
    on_clear: FC,
) -> impl IntoView
where
    FU: Fn(()) + 'static + Clone + Send,
    FD: Fn(()) + 'static + Clone + Send,
    FC: Fn(()) + 'static + Clone + Send,
{
    view! {
        <div class="action-buttons">
            <button
                id="upload-btn"
                class="btn btn-primary"
                on:click={
                    let on_upload = on_upload.clone();
                    move |_| on_upload(())
                }
            >
                {move || if snapshot.get().uploading { "Extracting..." } else { "Extract Data" }}
            </button>

            <button
                id="download-btn"
                class="btn btn-secondary"
                style:display=move || if snapshot.get().download_visible { "block" } else { "none" }
                on:click={
                    let on_download = on_download.clone();
                    move |_| on_download(())
                }
            >
                "Download CSV"
            </button>

            <button
                id="clear-btn"
                class="btn btn-tertiary"
                on:click={
                    let on_clear = on_clear.clone();
                    move |_| on_clear(())
                }
            >
                "Clear"
            </button>
        </div>
    }
}
