//! Request dispatch tests: redirects, file streaming, and error
//! outcomes.

use axum::http::{header, StatusCode};

use super::test_utils::{body_string, get, sample_tree, test_router};

// =============================================================================
// Trailing-Slash Redirects
// =============================================================================

#[tokio::test]
async fn test_directory_without_slash_redirects() {
    let tree = sample_tree();
    let response = get(test_router(tree.path()), "/b").await;

    assert_eq!(response.status(), StatusCode::MOVED_PERMANENTLY);
    assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/b/");
}

#[tokio::test]
async fn test_directory_with_slash_lists() {
    let tree = sample_tree();
    let response = get(test_router(tree.path()), "/b/").await;

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers().get(header::CONTENT_TYPE).unwrap();
    assert!(content_type.to_str().unwrap().starts_with("text/html"));
}

#[tokio::test]
async fn test_root_lists_without_redirect() {
    let tree = sample_tree();
    let response = get(test_router(tree.path()), "/").await;
    assert_eq!(response.status(), StatusCode::OK);
}

// =============================================================================
// File Streaming
// =============================================================================

#[tokio::test]
async fn test_file_bytes_and_content_type() {
    let tree = sample_tree();
    let response = get(test_router(tree.path()), "/a.txt").await;

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers().get(header::CONTENT_TYPE).unwrap();
    assert!(content_type.to_str().unwrap().starts_with("text/plain"));
    assert_eq!(response.headers().get(header::CONTENT_LENGTH).unwrap(), "10");

    assert_eq!(body_string(response).await, "0123456789");
}

#[tokio::test]
async fn test_nested_file_is_served() {
    let tree = sample_tree();
    let response = get(test_router(tree.path()), "/b/nested.md").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "# nested");
}

#[tokio::test]
async fn test_percent_encoded_path_is_decoded() {
    let tree = sample_tree();
    std::fs::write(tree.path().join("with space.txt"), b"spaced").unwrap();

    let response = get(test_router(tree.path()), "/with%20space.txt").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "spaced");
}

// =============================================================================
// Error Outcomes
// =============================================================================

#[tokio::test]
async fn test_missing_path_is_404() {
    let tree = sample_tree();
    let response = get(test_router(tree.path()), "/missing.txt").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_traversal_is_403() {
    let tree = sample_tree();
    let response = get(test_router(tree.path()), "/../secret").await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_traversal_is_403_even_for_missing_target() {
    let tree = sample_tree();
    let response = get(test_router(tree.path()), "/../../does/not/exist").await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_encoded_traversal_is_403() {
    let tree = sample_tree();
    let response = get(test_router(tree.path()), "/%2e%2e/secret").await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_dotdot_inside_root_is_served() {
    let tree = sample_tree();
    let response = get(test_router(tree.path()), "/b/../a.txt").await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_error_bodies_are_minimal() {
    let tree = sample_tree();

    let response = get(test_router(tree.path()), "/missing.txt").await;
    assert_eq!(body_string(response).await, "Not Found");

    let response = get(test_router(tree.path()), "/../x").await;
    assert_eq!(body_string(response).await, "Forbidden");
}
