use crate::state::Tab;

#[derive(uniffi::Enum, Debug, Clone)]
pub enum AppAction {
    // Tab bar
    SelectTab { tab: Tab },

    // Web view callbacks
    WebViewLoadStarted,
    WebViewLoadFinished,

    // Lifecycle
    Foregrounded,
}

impl AppAction {
    /// Short action tag for logs.
    pub fn tag(&self) -> &'static str {
        match self {
            // Tab bar
            AppAction::SelectTab { .. } => "SelectTab",

            // Web view callbacks
            AppAction::WebViewLoadStarted => "WebViewLoadStarted",
            AppAction::WebViewLoadFinished => "WebViewLoadFinished",

            // Lifecycle
            AppAction::Foregrounded => "Foregrounded",
        }
    }
}
