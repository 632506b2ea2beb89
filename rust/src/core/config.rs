use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::state::{StatusBarStyle, Tab, TabBarStyle, WebViewConfig};

pub(crate) const CONFIG_FILE_NAME: &str = "webshell_config.json";

// Emulators reach the dev machine at different loopback addresses, so local builds
// point the shell elsewhere without touching the config file.
const SERVER_URL_ENV: &str = "WEBSHELL_SERVER_URL";

const DEFAULT_SERVER_URL: &str = "https://myaou.atract.me";
const DEFAULT_SERVER_PATH: &str = "/index.php";
const DEFAULT_FADE_IN_MS: u32 = 50;
const DEFAULT_FADE_OUT_MS: u32 = 10;

fn default_server_url() -> String {
    DEFAULT_SERVER_URL.to_string()
}

/// Server the shell renders. `path` is optional; an absent path means no prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_server_url")]
    pub url: String,
    #[serde(default)]
    pub path: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            url: default_server_url(),
            path: Some(DEFAULT_SERVER_PATH.to_string()),
        }
    }
}

impl ServerConfig {
    pub fn base_url(&self) -> String {
        server_url(&self.url, self.path.as_deref())
    }
}

/// `url + path`, concatenated as-is.
pub fn server_url(url: &str, path: Option<&str>) -> String {
    format!("{url}{}", path.unwrap_or(""))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub web_view: WebViewConfig,
    pub fade_in_ms: u32,
    pub fade_out_ms: u32,
    pub tab_bar_style: TabBarStyle,
    pub status_bar_style: StatusBarStyle,
    pub default_tab: Tab,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            web_view: WebViewConfig::default(),
            fade_in_ms: DEFAULT_FADE_IN_MS,
            fade_out_ms: DEFAULT_FADE_OUT_MS,
            tab_bar_style: TabBarStyle::default(),
            status_bar_style: StatusBarStyle::default(),
            default_tab: Tab::default(),
        }
    }
}

/// Read `<data_dir>/webshell_config.json`, falling back to defaults when the file is
/// missing or broken.
pub(crate) fn load_app_config(data_dir: &str) -> AppConfig {
    let path = Path::new(data_dir).join(CONFIG_FILE_NAME);
    let config = match read_app_config(&path) {
        Ok(Some(config)) => config,
        Ok(None) => AppConfig::default(),
        Err(e) => {
            tracing::warn!(path = %path.display(), err = %format!("{e:#}"), "config unreadable, using defaults");
            AppConfig::default()
        }
    };
    apply_server_url_override(config, std::env::var(SERVER_URL_ENV).ok())
}

fn read_app_config(path: &Path) -> anyhow::Result<Option<AppConfig>> {
    if !path.exists() {
        return Ok(None);
    }
    let bytes =
        std::fs::read(path).with_context(|| format!("read config {}", path.display()))?;
    let config = serde_json::from_slice::<AppConfig>(&bytes)
        .with_context(|| format!("parse config {}", path.display()))?;
    Ok(Some(config))
}

fn apply_server_url_override(mut config: AppConfig, url: Option<String>) -> AppConfig {
    if let Some(url) = url.as_deref().map(str::trim).filter(|u| !u.is_empty()) {
        tracing::info!(url, "server url overridden from environment");
        config.server.url = url.to_string();
    }
    config
}

pub(crate) fn default_app_config_json() -> String {
    serde_json::to_string_pretty(&AppConfig::default()).unwrap_or_else(|_| "{}".to_string())
}

/// Replace the `server` block with defaults, keeping every other key as written.
pub(crate) fn server_reset_config_json(existing_json: Option<&str>) -> String {
    let mut root = existing_json
        .and_then(|s| serde_json::from_str::<serde_json::Value>(s).ok())
        .filter(serde_json::Value::is_object)
        .unwrap_or_else(|| serde_json::json!({}));
    let server = match serde_json::to_value(ServerConfig::default()) {
        Ok(v) => v,
        Err(_) => return default_app_config_json(),
    };
    if let Some(obj) = root.as_object_mut() {
        obj.insert("server".to_string(), server);
    }
    serde_json::to_string_pretty(&root).unwrap_or_else(|_| default_app_config_json())
}
