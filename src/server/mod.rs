//! HTTP server layer.
//!
//! ```text
//! request ── basic (Basic auth, optional) ── handlers (dispatch)
//!                                               │
//!                        directory ── fs::listing ── views (HTML)
//!                        file      ── streamed body
//! ```

pub mod basic;
pub mod handlers;
pub mod routes;
pub mod views;

pub use basic::{require_basic_auth, WWW_AUTHENTICATE_VALUE};
pub use handlers::{serve_request, AppState};
pub use routes::{create_router, RouterConfig};
pub use views::render_listing;
