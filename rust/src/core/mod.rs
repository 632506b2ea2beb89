pub(crate) mod config;
mod navigation;
mod overlay;

use std::sync::{Arc, RwLock};

use flume::{Sender, WeakSender};

use crate::actions::AppAction;
use crate::state::AppState;
use crate::updates::{AppUpdate, CoreMsg, InternalEvent};
use crate::web_view::{current_bridge, SharedWebViewBridge};

use config::AppConfig;
use navigation::{FadeOutcome, NavigationController, TabPress};
use overlay::FadeTicket;

pub(crate) use config::{default_app_config_json, load_app_config, server_reset_config_json};

/// Initial snapshot for a freshly mounted screen.
pub(crate) fn initial_state(config: &AppConfig) -> AppState {
    AppState::initial(
        config.server.base_url(),
        config.default_tab,
        config.web_view.clone(),
        config.tab_bar_style,
        config.status_bar_style,
    )
}

pub struct AppCore {
    pub state: AppState,
    rev: u64,

    update_sender: Sender<AppUpdate>,
    // Weak so the actor loop ends once the owning `FfiApp` drops its sender.
    core_sender: WeakSender<CoreMsg>,
    shared_state: Arc<RwLock<AppState>>,

    navigation: NavigationController,
    web_view_bridge: SharedWebViewBridge,
    // Only drives fade timers.
    runtime: tokio::runtime::Runtime,
}

impl AppCore {
    pub fn new(
        update_sender: Sender<AppUpdate>,
        core_sender: WeakSender<CoreMsg>,
        config: AppConfig,
        shared_state: Arc<RwLock<AppState>>,
        web_view_bridge: SharedWebViewBridge,
    ) -> Self {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_time()
            .build()
            .expect("tokio runtime");

        tracing::info!(
            base_url = %config.server.base_url(),
            default_tab = config.default_tab.label(),
            "app core starting"
        );

        let this = Self {
            state: initial_state(&config),
            rev: 0,
            update_sender,
            core_sender,
            shared_state,
            navigation: NavigationController::new(&config),
            web_view_bridge,
            runtime,
        };

        // Ensure FfiApp.state() has an immediately-available snapshot.
        let snapshot = this.state.clone();
        this.commit_state_snapshot(&snapshot);
        this
    }

    fn next_rev(&mut self) -> u64 {
        self.rev += 1;
        self.state.rev = self.rev;
        self.rev
    }

    fn commit_state_snapshot(&self, snapshot: &AppState) {
        match self.shared_state.write() {
            Ok(mut g) => *g = snapshot.clone(),
            Err(poison) => *poison.into_inner() = snapshot.clone(),
        }
    }

    fn emit_state(&mut self) {
        self.next_rev();
        let snapshot = self.state.clone();
        self.commit_state_snapshot(&snapshot);
        let _ = self.update_sender.send(AppUpdate::FullState(snapshot));
    }

    fn emit_reloaded(&mut self, url: String) {
        let rev = self.next_rev();
        // Keep snapshot rev in sync with the update stream even though this is a side-effect update.
        let snapshot = self.state.clone();
        self.commit_state_snapshot(&snapshot);
        let _ = self.update_sender.send(AppUpdate::Reloaded { rev, url });
    }

    /// Copy controller state into the snapshot; emit only when something visible moved.
    fn sync_from_navigation(&mut self) {
        let mut next = self.state.clone();
        next.current_url = self.navigation.current_url().to_string();
        next.active_tab = self.navigation.active_tab();
        next.is_loading = self.navigation.is_loading();
        next.overlay = self.navigation.overlay();
        if next != self.state {
            self.state = next;
            self.emit_state();
        }
    }

    fn schedule_fade(&self, ticket: FadeTicket) {
        let tx = self.core_sender.clone();
        self.runtime.spawn(async move {
            tokio::time::sleep(ticket.duration).await;
            let Some(tx) = tx.upgrade() else {
                return;
            };
            let _ = tx.send(CoreMsg::Internal(Box::new(InternalEvent::FadeCompleted {
                token: ticket.token,
            })));
        });
    }

    fn reload_web_view(&mut self, url: String) {
        match current_bridge(&self.web_view_bridge) {
            Some(bridge) => bridge.reload(),
            None => tracing::warn!(url = %url, "reload requested before web view bridge was set"),
        }
        self.emit_reloaded(url);
    }

    pub fn handle_message(&mut self, msg: CoreMsg) {
        match msg {
            CoreMsg::Action(action) => {
                tracing::info!(action = action.tag(), "dispatch");
                self.handle_action(action);
            }
            CoreMsg::Internal(internal) => self.handle_internal(*internal),
        }
    }

    fn handle_internal(&mut self, internal: InternalEvent) {
        match internal {
            InternalEvent::FadeCompleted { token } => {
                match self.navigation.fade_completed(token) {
                    FadeOutcome::Stale => {
                        tracing::debug!(token, "ignoring retargeted overlay fade");
                    }
                    FadeOutcome::FadedIn => {}
                    FadeOutcome::Hidden => {
                        tracing::debug!(token, "overlay hidden");
                    }
                }
                self.sync_from_navigation();
            }
        }
    }

    fn handle_action(&mut self, action: AppAction) {
        match action {
            // Tab bar
            AppAction::SelectTab { tab } => match self.navigation.select_tab(tab) {
                TabPress::Reload { url } => {
                    tracing::info!(tab = tab.label(), url = %url, "same address, reloading in place");
                    // Publish the indicator change before the reload side effect.
                    self.sync_from_navigation();
                    self.reload_web_view(url);
                }
                TabPress::Navigate { url, fade } => {
                    tracing::info!(tab = tab.label(), url = %url, "navigating");
                    self.schedule_fade(fade);
                    self.sync_from_navigation();
                }
            },

            // Web view callbacks
            AppAction::WebViewLoadStarted => {
                self.navigation.load_started();
                self.sync_from_navigation();
            }
            AppAction::WebViewLoadFinished => {
                let fade = self.navigation.load_finished();
                self.schedule_fade(fade);
                self.sync_from_navigation();
            }

            // Lifecycle
            AppAction::Foregrounded => {
                // Resumed shells resync from a fresh snapshot.
                self.emit_state();
            }
        }
    }
}
