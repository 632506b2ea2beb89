#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use webshell_core::{AppReconciler, AppState, AppUpdate, WebViewBridge};

pub fn wait_until(what: &str, timeout: Duration, f: impl FnMut() -> bool) {
    wait_until_with_poll(what, timeout, Duration::from_millis(10), f);
}

pub fn wait_until_with_poll(
    what: &str,
    timeout: Duration,
    poll: Duration,
    mut f: impl FnMut() -> bool,
) {
    let start = Instant::now();
    while start.elapsed() < timeout {
        if f() {
            return;
        }
        std::thread::sleep(poll);
    }
    panic!("{what}: condition not met within {timeout:?}");
}

/// Config pointing at `https://example.com/index.php` with the given fade timings.
pub fn write_config(data_dir: &str, fade_in_ms: u32, fade_out_ms: u32) {
    let path = std::path::Path::new(data_dir).join("webshell_config.json");
    let v = serde_json::json!({
        "server": {
            "url": "https://example.com",
            "path": "/index.php",
        },
        "fade_in_ms": fade_in_ms,
        "fade_out_ms": fade_out_ms,
    });
    std::fs::write(path, serde_json::to_vec(&v).unwrap()).unwrap();
}

#[derive(Clone)]
pub struct Collector(pub Arc<Mutex<Vec<AppUpdate>>>);

impl Collector {
    pub fn new() -> Self {
        Self(Arc::new(Mutex::new(Vec::new())))
    }

    pub fn len(&self) -> usize {
        self.0.lock().unwrap().len()
    }

    pub fn snapshot(&self) -> Vec<AppUpdate> {
        self.0.lock().unwrap().clone()
    }

    /// Full-state updates received after the first `skip` updates.
    pub fn states_after(&self, skip: usize) -> Vec<AppState> {
        self.0
            .lock()
            .unwrap()
            .iter()
            .skip(skip)
            .filter_map(|u| match u {
                AppUpdate::FullState(s) => Some(s.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn reloaded_urls(&self) -> Vec<String> {
        self.0
            .lock()
            .unwrap()
            .iter()
            .filter_map(|u| match u {
                AppUpdate::Reloaded { url, .. } => Some(url.clone()),
                _ => None,
            })
            .collect()
    }
}

impl AppReconciler for Collector {
    fn reconcile(&self, update: AppUpdate) {
        self.0.lock().unwrap().push(update);
    }
}

#[derive(Clone, Default)]
pub struct MockWebView {
    reloads: Arc<AtomicUsize>,
}

impl MockWebView {
    pub fn reloads(&self) -> usize {
        self.reloads.load(Ordering::SeqCst)
    }
}

impl WebViewBridge for MockWebView {
    fn reload(&self) {
        self.reloads.fetch_add(1, Ordering::SeqCst);
    }
}
