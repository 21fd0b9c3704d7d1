//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"Business Card Extractor"</h1>
            <p class="text-muted">"Upload business card images to extract contact details"</p>
        </header>
    }
}
