mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::json;
use std::fs;
use tempfile::TempDir;

fn server_for(dir: &TempDir) -> TestServer {
    common::make_server(common::create_test_state(dir.path()))
}

#[tokio::test]
async fn test_list_images_filters_by_extension() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.png"), b"png").unwrap();
    fs::write(dir.path().join("b.txt"), b"text").unwrap();
    fs::write(dir.path().join("c.JPG"), b"jpg").unwrap();

    let response = server_for(&dir).get("/api/images").await;

    response.assert_status_ok();
    response.assert_json(&json!(["a.png", "c.JPG"]));
}

#[tokio::test]
async fn test_list_images_missing_directory() {
    let dir = TempDir::new().unwrap();
    let server = common::make_server(common::create_test_state(&dir.path().join("absent")));

    let response = server.get("/api/images").await;

    response.assert_status_ok();
    response.assert_json(&json!([]));
}

#[tokio::test]
async fn test_serve_image_bytes_and_content_type() {
    let dir = TempDir::new().unwrap();
    let png = b"\x89PNG\r\n\x1a\nfake";
    fs::write(dir.path().join("logo.png"), png).unwrap();
    fs::write(dir.path().join("vector.svg"), b"<svg/>").unwrap();

    let server = server_for(&dir);

    let response = server.get("/images/logo.png").await;
    response.assert_status_ok();
    assert_eq!(response.header("content-type"), "image/png");
    assert_eq!(response.as_bytes().as_ref(), png);

    let response = server.get("/images/vector.svg").await;
    response.assert_status_ok();
    assert_eq!(response.header("content-type"), "image/svg+xml");
}

#[tokio::test]
async fn test_serve_missing_image() {
    let dir = TempDir::new().unwrap();

    let response = server_for(&dir).get("/images/ghost.png").await;

    response.assert_status_not_found();
    assert!(response.json::<serde_json::Value>()["error"].is_string());
}

#[tokio::test]
async fn test_serve_non_image_file_is_hidden() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("notes.txt"), b"private").unwrap();

    let response = server_for(&dir).get("/images/notes.txt").await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_serve_image_rejects_traversal() {
    let root = TempDir::new().unwrap();
    let images = root.path().join("images");
    fs::create_dir(&images).unwrap();
    fs::write(root.path().join("secret.png"), b"outside").unwrap();

    let server = common::make_server(common::create_test_state(&images));

    let response = server.get("/images/..%2Fsecret.png").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_ne!(response.as_bytes().as_ref(), b"outside");
}

#[tokio::test]
async fn test_serve_image_invalid_utf8_name() {
    let dir = TempDir::new().unwrap();

    let response = server_for(&dir).get("/images/%FF.png").await;

    response.assert_status_bad_request();
    assert!(response.json::<serde_json::Value>()["error"].is_string());
}
