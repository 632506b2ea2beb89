use serde::{Deserialize, Serialize};

/// The three site sections reachable from the bottom tab bar.
#[derive(
    uniffi::Enum, Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Tab {
    #[default]
    Places,
    Chat,
    Profile,
}

impl Tab {
    pub fn all() -> [Tab; 3] {
        [Tab::Places, Tab::Chat, Tab::Profile]
    }

    /// Query string appended to the server address when this tab is pressed.
    pub fn query_suffix(&self) -> &'static str {
        match self {
            Tab::Places => "?app=1",
            Tab::Chat => "?view=chat&app=1",
            Tab::Profile => "?view=account&app=1",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Places => "places",
            Tab::Chat => "chat",
            Tab::Profile => "profile",
        }
    }

    /// Material icon name rendered on the tab button.
    pub fn icon_name(&self) -> &'static str {
        match self {
            Tab::Places => "place",
            Tab::Chat => "forum",
            Tab::Profile => "person",
        }
    }
}

#[derive(uniffi::Record, Clone, Debug, PartialEq, Eq)]
pub struct TabItem {
    pub tab: Tab,
    pub label: String,
    pub icon_name: String,
}

impl From<Tab> for TabItem {
    fn from(tab: Tab) -> Self {
        Self {
            tab,
            label: tab.label().to_string(),
            icon_name: tab.icon_name().to_string(),
        }
    }
}

#[derive(uniffi::Enum, Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TabBarStyle {
    #[default]
    Plain,
    /// Translucent bar over a blurred copy of the page.
    Blurred,
}

#[derive(uniffi::Enum, Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusBarStyle {
    #[default]
    Dark,
    Light,
}

/// Flags handed to the embedded browser view verbatim.
#[derive(uniffi::Record, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebViewConfig {
    pub java_script_enabled: bool,
    pub dom_storage_enabled: bool,
    pub start_in_loading_state: bool,
    pub scales_page_to_fit: bool,
    pub allows_inline_media_playback: bool,
    pub media_playback_requires_user_action: bool,
}

impl Default for WebViewConfig {
    fn default() -> Self {
        Self {
            java_script_enabled: true,
            dom_storage_enabled: true,
            start_in_loading_state: true,
            scales_page_to_fit: true,
            allows_inline_media_playback: true,
            media_playback_requires_user_action: false,
        }
    }
}

/// What native should draw for the full-screen loading overlay.
///
/// `visible` mirrors the loading flag. Native animates the overlay's opacity toward
/// `target_opacity` over `fade_duration_ms`, retargeting any animation already running.
#[derive(uniffi::Record, Clone, Debug, PartialEq)]
pub struct LoadingOverlayState {
    pub visible: bool,
    pub target_opacity: f32,
    pub fade_duration_ms: u32,
}

impl LoadingOverlayState {
    pub fn hidden() -> Self {
        Self {
            visible: false,
            target_opacity: 0.0,
            fade_duration_ms: 0,
        }
    }
}

#[derive(uniffi::Record, Clone, Debug, PartialEq)]
pub struct AppState {
    pub rev: u64,
    /// Address the web view renders. Native keys the web view on this value, so a change
    /// tears the old instance down.
    pub current_url: String,
    pub active_tab: Tab,
    pub is_loading: bool,
    pub overlay: LoadingOverlayState,
    pub web_view: WebViewConfig,
    pub tab_bar_style: TabBarStyle,
    pub status_bar_style: StatusBarStyle,
}

impl AppState {
    pub fn initial(
        base_url: String,
        active_tab: Tab,
        web_view: WebViewConfig,
        tab_bar_style: TabBarStyle,
        status_bar_style: StatusBarStyle,
    ) -> Self {
        Self {
            rev: 0,
            current_url: base_url,
            active_tab,
            is_loading: false,
            overlay: LoadingOverlayState::hidden(),
            web_view,
            tab_bar_style,
            status_bar_style,
        }
    }
}
