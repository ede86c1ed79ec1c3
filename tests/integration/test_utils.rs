//! Test utilities for integration tests.

use std::fs;
use std::path::Path;

use axum::body::Body;
use axum::http::{header, Request, Response};
use axum::Router;
use base64::{engine::general_purpose::STANDARD, Engine};
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;

use srvdir::{create_router, CredentialStore, RouterConfig};

// Low bcrypt cost keeps the tests fast; verification is cost-agnostic.
pub const TEST_BCRYPT_COST: u32 = 4;

/// A small served tree:
///
/// ```text
/// a.txt        (10 bytes)
/// b/
/// b/nested.md
/// ```
pub fn sample_tree() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), b"0123456789").unwrap();
    fs::create_dir(dir.path().join("b")).unwrap();
    fs::write(dir.path().join("b").join("nested.md"), b"# nested").unwrap();
    dir
}

/// Router serving `root` without authentication.
pub fn test_router(root: &Path) -> Router {
    create_router(
        root.canonicalize().unwrap(),
        RouterConfig::new("auto").with_tracing(false),
    )
}

/// Router serving `root` behind Basic auth with a single user.
pub fn auth_router(root: &Path, user: &str, password: &str) -> Router {
    let mut store = CredentialStore::new();
    store.insert(user, bcrypt::hash(password, TEST_BCRYPT_COST).unwrap());

    create_router(
        root.canonicalize().unwrap(),
        RouterConfig::new("auto")
            .with_credentials(store)
            .with_tracing(false),
    )
}

pub async fn get(router: Router, path: &str) -> Response<Body> {
    let request = Request::builder().uri(path).body(Body::empty()).unwrap();
    router.oneshot(request).await.unwrap()
}

pub async fn get_with_auth(
    router: Router,
    path: &str,
    user: &str,
    password: &str,
) -> Response<Body> {
    let value = format!("Basic {}", STANDARD.encode(format!("{user}:{password}")));
    let request = Request::builder()
        .uri(path)
        .header(header::AUTHORIZATION, value)
        .body(Body::empty())
        .unwrap();
    router.oneshot(request).await.unwrap()
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}
