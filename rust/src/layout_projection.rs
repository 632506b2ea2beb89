#[derive(uniffi::Enum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlatformFamily {
    Ios,
    Android,
}

/// Safe-area insets as reported by the platform at render time.
#[derive(uniffi::Record, Clone, Copy, Debug, PartialEq)]
pub struct SafeAreaInsets {
    pub top: f32,
    pub bottom: f32,
}

/// Offsets applied to the web view, loading overlay and tab bar so they clear
/// notches and home indicators.
#[derive(uniffi::Record, Clone, Copy, Debug, PartialEq)]
pub struct ShellLayout {
    pub web_view_margin_top: f32,
    pub web_view_margin_bottom: f32,
    pub overlay_margin_top: f32,
    pub tab_bar_bottom: f32,
}

/// Maps safe-area insets to chrome offsets shared by iOS and Android.
///
/// The bottom inset only applies on Android: on iOS the tab bar sits on top of the
/// home indicator area and the web view runs under it.
#[uniffi::export]
pub fn project_layout(insets: SafeAreaInsets, platform: PlatformFamily) -> ShellLayout {
    let top = insets.top.max(0.0);
    let bottom = match platform {
        PlatformFamily::Android => insets.bottom.max(0.0),
        PlatformFamily::Ios => 0.0,
    };
    ShellLayout {
        web_view_margin_top: top,
        web_view_margin_bottom: bottom,
        overlay_margin_top: top,
        tab_bar_bottom: bottom,
    }
}
