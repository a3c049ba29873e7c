//! Application state.

use std::sync::Arc;

use nc_backend::CredibilityBackend;

/// Application state shared across handlers.
///
/// The tools keep no state of their own between submissions; the only
/// shared handle is the backend client.
#[derive(Clone)]
pub struct AppState {
    pub backend: Arc<dyn CredibilityBackend>,
}

impl AppState {
    pub fn new(backend: Arc<dyn CredibilityBackend>) -> Self {
        Self { backend }
    }
}
