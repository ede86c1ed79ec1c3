//! Directory listing tests: ordering, labels, escaping, themes.

use axum::http::StatusCode;

use srvdir::{create_router, RouterConfig};

use super::test_utils::{body_string, get, sample_tree, test_router};

#[tokio::test]
async fn test_root_listing_orders_directories_first() {
    let tree = sample_tree();
    let html = body_string(get(test_router(tree.path()), "/").await).await;

    let dir_pos = html.find(r#"href="/b/""#).expect("b/ missing");
    let file_pos = html.find(r#"href="/a.txt""#).expect("a.txt missing");
    assert!(dir_pos < file_pos, "directory should be listed before file");
}

#[tokio::test]
async fn test_root_listing_has_no_parent_link() {
    let tree = sample_tree();
    let html = body_string(get(test_router(tree.path()), "/").await).await;
    assert!(!html.contains(">..</a>"));
}

#[tokio::test]
async fn test_subdirectory_listing_has_parent_link_first() {
    let tree = sample_tree();
    let html = body_string(get(test_router(tree.path()), "/b/").await).await;

    let parent_pos = html.find(">..</a>").expect("parent link missing");
    let file_pos = html.find("nested.md").expect("nested.md missing");
    assert!(parent_pos < file_pos, "parent link should come first");
    assert!(html.contains(r#"href="/""#));
}

#[tokio::test]
async fn test_listing_shows_size_labels() {
    let tree = sample_tree();
    let html = body_string(get(test_router(tree.path()), "/").await).await;
    assert!(html.contains("10 B"));
}

#[tokio::test]
async fn test_listing_escapes_entry_names() {
    let tree = sample_tree();
    std::fs::write(tree.path().join("<i>.txt"), b"x").unwrap();

    let html = body_string(get(test_router(tree.path()), "/").await).await;
    assert!(html.contains("&lt;i&gt;.txt"));
    assert!(!html.contains("<i>.txt"));
}

#[tokio::test]
async fn test_listing_links_round_trip_for_reserved_names() {
    let tree = sample_tree();
    std::fs::write(tree.path().join("a#b.txt"), b"hashed").unwrap();

    let html = body_string(get(test_router(tree.path()), "/").await).await;
    assert!(html.contains(r##"href="/a%23b.txt""##));

    // Following the emitted link reaches the file.
    let response = get(test_router(tree.path()), "/a%23b.txt").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "hashed");
}

#[tokio::test]
async fn test_listing_carries_configured_theme() {
    let tree = sample_tree();
    let router = create_router(
        tree.path().canonicalize().unwrap(),
        RouterConfig::new("nord").with_tracing(false),
    );

    let response = get(router, "/").await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_string(response).await;
    assert!(html.contains(r#"<body data-theme="nord">"#));
}

#[tokio::test]
async fn test_empty_directory_lists_fine() {
    let tree = tempfile::tempdir().unwrap();
    let response = get(test_router(tree.path()), "/").await;
    assert_eq!(response.status(), StatusCode::OK);
}
