//! 抽出結果テーブル

use card_extract_common::COLUMN_LABELS;
use leptos::prelude::*;

use crate::presenter::ViewSnapshot;

#[component]
pub fn DataTable(snapshot: ReadSignal<ViewSnapshot>) -> impl IntoView {
    view! {
        <table class="data-table">
            <thead>
                <tr>
                    {COLUMN_LABELS
                        .into_iter()
                        .map(|label| view! { <th>{label}</th> })
                        .collect::<Vec<_>>()}
                </tr>
            </thead>
            <tbody id="data-body">
                {move || {
                    snapshot
                        .get()
                        .rows
                        .into_iter()
                        .map(|row| {
                            view! {
                                <tr>
                                    {row
                                        .cells
                                        .into_iter()
                                        .map(|cell| view! { <td>{cell}</td> })
                                        .collect::<Vec<_>>()}
                                </tr>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </tbody>
        </table>
    }
}
