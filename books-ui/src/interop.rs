//! Blocking browser dialogs used by the table

/// `window.alert`. Logs instead when there is no window (tests, SSR).
pub fn alert(message: &str) {
    let Some(window) = web_sys::window() else {
        dioxus_logger::tracing::warn!("No window for alert: {}", message);
        return;
    };

    if let Err(e) = window.alert_with_message(message) {
        dioxus_logger::tracing::warn!("alert failed: {:?}", e);
    }
}

/// `window.confirm`. Anything but an explicit OK counts as a refusal.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}
