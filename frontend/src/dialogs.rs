/// Blocking confirmations shown to the user.
pub trait Dialogs {
    fn alert(&self, message: &str);
}

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserDialogs;

impl Dialogs for BrowserDialogs {
    fn alert(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
}
