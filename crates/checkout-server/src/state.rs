//! Application State

use std::sync::Arc;

use checkout_gateway::CrossmintClient;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Crossmint order client (always present; missing secrets surface per request)
    pub crossmint: Arc<CrossmintClient>,
}

impl AppState {
    pub fn new(crossmint: CrossmintClient) -> Self {
        Self {
            crossmint: Arc::new(crossmint),
        }
    }
}
