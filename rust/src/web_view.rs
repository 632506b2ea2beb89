use std::sync::{Arc, RwLock};

/// Imperative side of the embedded browser view.
///
/// The address itself is bound declaratively through `AppState::current_url`; this
/// bridge only covers commands that must not change the view's identity.
#[uniffi::export(callback_interface)]
pub trait WebViewBridge: Send + Sync + 'static {
    /// Re-fetch the currently displayed address without rebuilding the view.
    fn reload(&self);
}

pub type SharedWebViewBridge = Arc<RwLock<Option<Arc<dyn WebViewBridge>>>>;

/// Clone the installed bridge out of its slot, tolerating a poisoned lock.
pub(crate) fn current_bridge(slot: &SharedWebViewBridge) -> Option<Arc<dyn WebViewBridge>> {
    match slot.read() {
        Ok(g) => g.clone(),
        Err(poison) => poison.into_inner().clone(),
    }
}
