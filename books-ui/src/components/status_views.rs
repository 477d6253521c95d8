use dioxus::prelude::*;

#[component]
pub fn LoadingState() -> Element {
    rsx! {
        style { {SPINNER_STYLES} }
        div {
            class: "library-loading",
            style: "display: grid; justify-content: center; align-items: center; height: 100vh;",
            div { class: "library-spinner", role: "progressbar" }
        }
    }
}

/// Replaces the whole page when the initial load fails. No retry affordance.
#[component]
pub fn ErrorState(error: String) -> Element {
    rsx! {
        div {
            class: "library-error",
            style: "display: grid; justify-content: center; align-items: center; height: 100vh; text-align: center; color: var(--danger-text, #f50057);",
            h2 { style: "font-size: 3.75rem; font-weight: 300; margin: 0;", "{error}" }
        }
    }
}

const SPINNER_STYLES: &str = r#"
.library-spinner {
    width: 40px;
    height: 40px;
    border: 4px solid var(--border-color, #c5cae9);
    border-top-color: var(--accent-bg, #3f51b5);
    border-radius: 50%;
    animation: library-spin 1s linear infinite;
}

@keyframes library-spin {
    from { transform: rotate(0deg); }
    to { transform: rotate(360deg); }
}
"#;
