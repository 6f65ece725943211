#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use canvas::board::Tray;

/// View state for the workspace and tray chrome.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UiState {
    /// CSS cursor for the workspace element.
    pub cursor: &'static str,
    /// Tray currently under an in-flight drag, for drop highlighting.
    pub drop_target: Option<Tray>,
}

impl Default for UiState {
    fn default() -> Self {
        Self { cursor: "default", drop_target: None }
    }
}

impl UiState {
    /// CSS class for a tray container, adding the highlight modifier while a
    /// drag hovers over it.
    #[must_use]
    pub fn tray_class(&self, base: &'static str, tray: Tray) -> String {
        if self.drop_target == Some(tray) {
            format!("{base} {base}--drop-target")
        } else {
            base.to_owned()
        }
    }
}
