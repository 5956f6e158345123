//! 論文詳細モーダル
//!
//! 表示状態は `active` クラスで切り替える。閉じるボタン以外では閉じない。

use leptos::prelude::*;
use thesis_search_common::{AbstractPanel, DetailModal, ModalContent, NO_ABSTRACT_MESSAGE};

#[component]
pub fn DetailPanel<F>(modal: Memo<DetailModal>, on_close: F) -> impl IntoView
where
    F: Fn(()) + 'static,
{
    view! {
        <div
            id="detail-modal"
            class="modal"
            class:active=move || modal.with(|m| m.is_visible())
        >
            <div class="modal-content">
                <button id="close-modal" class="close-btn" on:click=move |_| on_close(())>
                    "×"
                </button>
                <h2 id="modal-title">{content_text(modal, |c| &c.title)}</h2>
                <p>
                    <strong>"Authors: "</strong>
                    <span id="modal-authors">{content_text(modal, |c| &c.authors)}</span>
                </p>
                <p>
                    <strong>"Course: "</strong>
                    <span id="modal-course">{content_text(modal, |c| &c.course)}</span>
                </p>
                <p>
                    <strong>"Year: "</strong>
                    <span id="modal-year">{content_text(modal, |c| &c.year)}</span>
                </p>
                <p>
                    <strong>"Keywords: "</strong>
                    <span id="modal-keywords">{content_text(modal, |c| &c.keywords)}</span>
                </p>
                <div id="modal-abstract-container">
                    {move || abstract_view(modal.with(|m| m.content().map(|c| c.abstract_panel.clone())))}
                </div>
            </div>
        </div>
    }
}

fn content_text(
    modal: Memo<DetailModal>,
    pick: fn(&ModalContent) -> &String,
) -> impl Fn() -> String + Copy + Send + Sync + 'static {
    move || modal.with(|m| m.content().map(|c| pick(c).clone()).unwrap_or_default())
}

fn abstract_view(panel: Option<AbstractPanel>) -> AnyView {
    match panel {
        Some(AbstractPanel::Images(urls)) => urls
            .into_iter()
            .map(|src| {
                view! {
                    <img
                        src=src
                        alt="Abstract page"
                        style="width:100%;margin-bottom:10px;"
                    />
                }
            })
            .collect_view()
            .into_any(),
        Some(AbstractPanel::Placeholder) => {
            view! { <p style="color:gray;">{NO_ABSTRACT_MESSAGE}</p> }.into_any()
        }
        Some(AbstractPanel::Cleared) | None => ().into_any(),
    }
}
