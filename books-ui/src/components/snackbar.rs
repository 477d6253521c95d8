use dioxus::prelude::*;

use crate::library::state::{Notice, NoticeKind};

#[component]
pub fn Snackbar(notice: Notice, on_dismiss: Callback<()>) -> Element {
    let background = match notice.kind {
        NoticeKind::Success => "var(--success-bg, #43a047)",
        NoticeKind::Failure => "var(--danger-bg, #d32f2f)",
    };

    rsx! {
        div {
            class: "snackbar",
            role: "status",
            style: "position: fixed; left: 50%; bottom: 1.5rem; transform: translateX(-50%); display: flex; align-items: center; gap: 1rem; padding: 0.75rem 1rem; min-width: 288px; background: {background}; color: white; border-radius: 4px; box-shadow: 0 3px 5px rgba(0,0,0,0.2); font-size: 0.875rem;",
            span { style: "flex: 1;", "{notice.message}" }
            button {
                class: "snackbar-close",
                style: "background: none; border: none; color: white; cursor: pointer; font-size: 1rem;",
                title: "Dismiss",
                onclick: move |_| on_dismiss.call(()),
                "✕"
            }
        }
    }
}
