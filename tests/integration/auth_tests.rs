//! Basic authentication integration tests.
//!
//! Tests verify:
//! - Requests without credentials are challenged
//! - Wrong passwords and unknown usernames are denied
//! - Valid credentials pass through to dispatch
//! - A server without a credential store requires no authentication

use axum::http::{header, StatusCode};

use srvdir::server::WWW_AUTHENTICATE_VALUE;

use super::test_utils::{get, get_with_auth, auth_router, sample_tree, test_router};

#[tokio::test]
async fn test_missing_credentials_are_challenged() {
    let tree = sample_tree();
    let response = get(auth_router(tree.path(), "alice", "secret"), "/").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.headers().get(header::WWW_AUTHENTICATE).unwrap(),
        WWW_AUTHENTICATE_VALUE
    );
}

#[tokio::test]
async fn test_wrong_password_is_denied() {
    let tree = sample_tree();
    let router = auth_router(tree.path(), "alice", "secret");
    let response = get_with_auth(router, "/", "alice", "wrong").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(response.headers().contains_key(header::WWW_AUTHENTICATE));
}

#[tokio::test]
async fn test_unknown_username_is_denied() {
    let tree = sample_tree();
    let router = auth_router(tree.path(), "alice", "secret");
    let response = get_with_auth(router, "/", "mallory", "secret").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_valid_credentials_pass() {
    let tree = sample_tree();
    let router = auth_router(tree.path(), "alice", "secret");
    let response = get_with_auth(router, "/a.txt", "alice", "secret").await;

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_auth_gates_every_outcome() {
    // Even 404s and 403s require credentials first.
    let tree = sample_tree();

    let router = auth_router(tree.path(), "alice", "secret");
    let response = get(router, "/missing.txt").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let router = auth_router(tree.path(), "alice", "secret");
    let response = get(router, "/../x").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_authorized_requests_still_hit_dispatch_errors() {
    let tree = sample_tree();

    let router = auth_router(tree.path(), "alice", "secret");
    let response = get_with_auth(router, "/missing.txt", "alice", "secret").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let router = auth_router(tree.path(), "alice", "secret");
    let response = get_with_auth(router, "/../x", "alice", "secret").await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_no_credential_store_means_no_auth() {
    let tree = sample_tree();
    let response = get(test_router(tree.path()), "/a.txt").await;
    assert_eq!(response.status(), StatusCode::OK);
}
