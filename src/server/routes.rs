//! Router construction.
//!
//! The whole path space is handled by one fallback handler; when a
//! credential store is configured, a Basic-auth middleware layer gates
//! every request before the handler runs.

use std::path::PathBuf;
use std::sync::Arc;

use axum::{middleware, Router};
use tower_http::trace::TraceLayer;

use crate::auth::CredentialStore;

use super::basic::require_basic_auth;
use super::handlers::{serve_request, AppState};

/// Configuration for the HTTP router.
#[derive(Clone)]
pub struct RouterConfig {
    /// Theme name forwarded to rendered listings.
    pub theme: String,

    /// Credentials for Basic authentication. `None` disables
    /// authentication entirely; this is a valid configuration, not an
    /// error.
    pub credentials: Option<Arc<CredentialStore>>,

    /// Whether to enable request tracing.
    pub enable_tracing: bool,
}

impl RouterConfig {
    /// Create a configuration with the given theme, no authentication,
    /// and tracing enabled.
    pub fn new(theme: impl Into<String>) -> Self {
        Self {
            theme: theme.into(),
            credentials: None,
            enable_tracing: true,
        }
    }

    /// Require Basic authentication against the given store.
    pub fn with_credentials(mut self, store: CredentialStore) -> Self {
        self.credentials = Some(Arc::new(store));
        self
    }

    /// Enable or disable request tracing.
    pub fn with_tracing(mut self, enabled: bool) -> Self {
        self.enable_tracing = enabled;
        self
    }
}

/// Create the application router serving `root`.
///
/// `root` must be absolute and canonicalized; [`crate::config`] takes
/// care of that for the CLI path.
pub fn create_router(root: PathBuf, config: RouterConfig) -> Router {
    let state = AppState::new(root, config.theme);

    let mut router = Router::new().fallback(serve_request).with_state(state);

    if let Some(store) = config.credentials {
        router = router.layer(middleware::from_fn_with_state(store, require_basic_auth));
    }

    if config.enable_tracing {
        router.layer(TraceLayer::new_for_http())
    } else {
        router
    }
}
