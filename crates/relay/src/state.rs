//! Application state shared across handlers.

use std::sync::Arc;

use crate::relay::Relay;

/// Application state shared across all handlers.
#[derive(Clone, Debug)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

#[derive(Debug)]
struct AppStateInner {
    relay: Relay,
}

impl AppState {
    /// Create application state around a configured relay.
    #[must_use]
    pub fn new(relay: Relay) -> Self {
        Self {
            inner: Arc::new(AppStateInner { relay }),
        }
    }

    /// Get the relay.
    #[must_use]
    pub fn relay(&self) -> &Relay {
        &self.inner.relay
    }
}
