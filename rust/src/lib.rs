mod actions;
mod core;
mod layout_projection;
mod logging;
mod state;
mod updates;
mod web_view;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};
use std::thread;

use flume::{Receiver, Sender};

pub use actions::AppAction;
pub use layout_projection::*;
pub use state::*;
pub use updates::*;
pub use web_view::{SharedWebViewBridge, WebViewBridge};

/// Return the default `webshell_config.json` payload used when no config file exists.
#[uniffi::export]
pub fn default_config_json() -> String {
    core::default_app_config_json()
}

/// Reset only the server keys to defaults while preserving unrelated keys.
#[uniffi::export]
pub fn reset_server_config_json(existing_json: Option<String>) -> String {
    core::server_reset_config_json(existing_json.as_deref())
}

/// Full address of the site root: `url` followed by the optional `path`.
#[uniffi::export]
pub fn server_url(url: String, path: Option<String>) -> String {
    core::config::server_url(&url, path.as_deref())
}

/// Tab bar buttons in display order.
#[uniffi::export]
pub fn tab_items() -> Vec<TabItem> {
    Tab::all().into_iter().map(TabItem::from).collect()
}

uniffi::setup_scaffolding!();

#[uniffi::export(callback_interface)]
pub trait AppReconciler: Send + Sync + 'static {
    fn reconcile(&self, update: AppUpdate);
}

#[derive(uniffi::Object)]
pub struct FfiApp {
    core_tx: Sender<CoreMsg>,
    update_rx: Receiver<AppUpdate>,
    listening: AtomicBool,
    shared_state: Arc<RwLock<AppState>>,
    web_view_bridge: SharedWebViewBridge,
}

#[uniffi::export]
impl FfiApp {
    #[uniffi::constructor]
    pub fn new(data_dir: String) -> Arc<Self> {
        logging::init_logging(&data_dir);
        tracing::info!(data_dir = %data_dir, "FfiApp::new() starting");

        // Config is read once here and handed to the core; it never changes afterwards.
        let config = core::load_app_config(&data_dir);

        let (update_tx, update_rx) = flume::unbounded();
        let (core_tx, core_rx) = flume::unbounded::<CoreMsg>();
        let shared_state = Arc::new(RwLock::new(core::initial_state(&config)));
        let web_view_bridge: SharedWebViewBridge = Arc::new(RwLock::new(None));

        // Actor loop thread (single threaded "app actor").
        let core_tx_for_core = core_tx.downgrade();
        let shared_for_core = shared_state.clone();
        let bridge_for_core = web_view_bridge.clone();
        thread::spawn(move || {
            let mut core = crate::core::AppCore::new(
                update_tx,
                core_tx_for_core,
                config,
                shared_for_core,
                bridge_for_core,
            );
            while let Ok(msg) = core_rx.recv() {
                core.handle_message(msg);
            }
            tracing::debug!("app core stopped");
        });

        Arc::new(Self {
            core_tx,
            update_rx,
            listening: AtomicBool::new(false),
            shared_state,
            web_view_bridge,
        })
    }

    pub fn state(&self) -> AppState {
        match self.shared_state.read() {
            Ok(g) => g.clone(),
            Err(poison) => poison.into_inner().clone(),
        }
    }

    pub fn dispatch(&self, action: AppAction) {
        // Contract: never block caller.
        let _ = self.core_tx.send(CoreMsg::Action(action));
    }

    pub fn listen_for_updates(&self, reconciler: Box<dyn AppReconciler>) {
        if self
            .listening
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            // Avoid multiple listeners that would split messages.
            return;
        }

        let rx = self.update_rx.clone();
        thread::spawn(move || {
            while let Ok(update) = rx.recv() {
                reconciler.reconcile(update);
            }
        });
    }

    pub fn set_web_view_bridge(&self, bridge: Box<dyn WebViewBridge>) {
        let bridge: Arc<dyn WebViewBridge> = Arc::from(bridge);
        match self.web_view_bridge.write() {
            Ok(mut slot) => {
                *slot = Some(bridge);
            }
            Err(poison) => {
                *poison.into_inner() = Some(bridge);
            }
        }
    }
}
