//! # srvdir
//!
//! A themed directory server: exposes a single filesystem subtree over
//! HTTP with safe path containment, sorted directory listings, raw file
//! streaming, and optional HTTP Basic authentication backed by
//! bcrypt-hashed credentials.
//!
//! ## Architecture
//!
//! - [`fs`] - Path resolution (containment inside the served root) and
//!   directory listings
//! - [`auth`] - Credential store, bcrypt verification, htpasswd files
//! - [`server`] - Axum router, Basic-auth middleware, request dispatch,
//!   and HTML views
//! - [`config`] - CLI and configuration types
//!
//! ## Example
//!
//! ```rust,no_run
//! use srvdir::server::{create_router, RouterConfig};
//!
//! #[tokio::main]
//! async fn main() {
//!     let root = std::fs::canonicalize(".").unwrap();
//!     let router = create_router(root, RouterConfig::new("auto"));
//!
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:8080")
//!         .await
//!         .unwrap();
//!     axum::serve(listener, router).await.unwrap();
//! }
//! ```

pub mod auth;
pub mod config;
pub mod error;
pub mod fs;
pub mod server;

// Re-export commonly used types
pub use auth::CredentialStore;
pub use config::{Cli, Command, HtpasswdConfig, ServeConfig};
pub use error::RequestError;
pub use fs::{format_size, list_directory, resolve, ListingEntry, ListingResult, ResolvedPath};
pub use server::{create_router, render_listing, AppState, RouterConfig};
