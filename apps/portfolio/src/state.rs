use std::sync::Arc;

use crate::config::Config;
use crate::contact::ContactInbox;
use crate::gallery::Catalog;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub catalog: Arc<Catalog>,
    /// Contact messages received since startup; never written to disk.
    pub inbox: ContactInbox,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            catalog: Arc::new(Catalog::builtin()),
            inbox: ContactInbox::default(),
        }
    }
}
