//! Tab / address / loading-overlay state machine.
//!
//! Pure bookkeeping: no threads, no I/O. `AppCore` turns the returned decisions into
//! side effects (bridge reloads, fade timers, update emission).

use super::config::AppConfig;
use super::overlay::{FadeDirection, FadeTicket, OverlayFade};
use crate::state::{LoadingOverlayState, Tab};

/// What a tab press asks of the web view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum TabPress {
    /// Address unchanged: refresh the existing view, no overlay.
    Reload { url: String },
    /// Address changed: the view is rebuilt and the overlay fades in.
    Navigate { url: String, fade: FadeTicket },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FadeOutcome {
    /// Superseded by a later fade.
    Stale,
    FadedIn,
    /// Fade-out finished and the loading flag dropped.
    Hidden,
}

#[derive(Debug)]
pub(crate) struct NavigationController {
    base_url: String,
    fade_in_ms: u32,
    fade_out_ms: u32,

    current_url: String,
    active_tab: Tab,
    is_loading: bool,
    fade: OverlayFade,
}

impl NavigationController {
    pub(crate) fn new(config: &AppConfig) -> Self {
        let base_url = config.server.base_url();
        Self {
            current_url: base_url.clone(),
            base_url,
            fade_in_ms: config.fade_in_ms,
            fade_out_ms: config.fade_out_ms,
            active_tab: config.default_tab,
            is_loading: false,
            fade: OverlayFade::default(),
        }
    }

    pub(crate) fn target_url(&self, tab: Tab) -> String {
        format!("{}{}", self.base_url, tab.query_suffix())
    }

    pub(crate) fn select_tab(&mut self, tab: Tab) -> TabPress {
        // The indicator follows the press even when the address does not move.
        self.active_tab = tab;

        let url = self.target_url(tab);
        if url == self.current_url {
            return TabPress::Reload { url };
        }

        self.current_url = url.clone();
        self.is_loading = true;
        let fade = self.fade.begin(FadeDirection::In, self.fade_in_ms);
        TabPress::Navigate { url, fade }
    }

    /// The web view began loading, possibly from a link inside the page.
    pub(crate) fn load_started(&mut self) {
        self.is_loading = true;
    }

    pub(crate) fn load_finished(&mut self) -> FadeTicket {
        self.fade.begin(FadeDirection::Out, self.fade_out_ms)
    }

    pub(crate) fn fade_completed(&mut self, token: u64) -> FadeOutcome {
        match self.fade.complete(token) {
            None => FadeOutcome::Stale,
            Some(FadeDirection::In) => FadeOutcome::FadedIn,
            Some(FadeDirection::Out) => {
                self.is_loading = false;
                FadeOutcome::Hidden
            }
        }
    }

    pub(crate) fn current_url(&self) -> &str {
        &self.current_url
    }

    pub(crate) fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub(crate) fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub(crate) fn overlay(&self) -> LoadingOverlayState {
        LoadingOverlayState {
            visible: self.is_loading,
            target_opacity: self.fade.target_opacity(),
            fade_duration_ms: self.fade.duration_ms(),
        }
    }
}
