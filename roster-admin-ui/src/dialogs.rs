use dioxus::prelude::warn;
use roster::page::Dialogs;

/// The browser's own `confirm()` and `alert()`, which block until dismissed.
///
/// Outside a wasm build there is no browser to ask: confirmations answer
/// `false` and alerts only reach the log.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserDialogs;

#[cfg(target_arch = "wasm32")]
impl Dialogs for BrowserDialogs {
    fn confirm(&self, message: &str) -> bool {
        let Some(window) = web_sys::window() else {
            warn!("No window available, treating confirm as cancelled");
            return false;
        };
        window.confirm_with_message(message).unwrap_or_else(|e| {
            warn!("confirm() failed: {:?}", e);
            false
        })
    }

    fn alert(&self, message: &str) {
        let Some(window) = web_sys::window() else {
            warn!("No window available, dropping alert: {}", message);
            return;
        };
        if let Err(e) = window.alert_with_message(message) {
            warn!("alert() failed: {:?}", e);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl Dialogs for BrowserDialogs {
    fn confirm(&self, message: &str) -> bool {
        warn!("No browser to confirm '{}', treating as cancelled", message);
        false
    }

    fn alert(&self, message: &str) {
        warn!("No browser to show alert: {}", message);
    }
}
