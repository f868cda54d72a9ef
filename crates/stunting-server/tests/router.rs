use std::fs;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use stunting_common::config::{ClientConfig, ServerConfig};
use stunting_server::build_router;
use tempfile::TempDir;
use tower::ServiceExt;

fn site() -> (TempDir, ServerConfig) {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("website");
    let assets = dir.path().join("assets");
    fs::create_dir_all(root.join("pkg")).unwrap();
    fs::create_dir_all(&assets).unwrap();
    fs::write(root.join("index.html"), "<html>app</html>").unwrap();
    fs::write(root.join("pkg/stunting_web.js"), "export default 1;").unwrap();
    fs::write(assets.join("cirebon_boundary.geojson"), r#"{"type":"FeatureCollection","features":[]}"#).unwrap();

    let mut config = ServerConfig::default();
    config.site.root = root;
    config.site.static_dir = assets;
    config.client.api_base_url = "https://api.example.com".to_string();
    (dir, config)
}

async fn get(config: &ServerConfig, uri: &str) -> (StatusCode, String) {
    let response = build_router(config)
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn test_serves_client_config() {
    let (_dir, config) = site();
    let (status, body) = get(&config, "/config.json").await;
    assert_eq!(status, StatusCode::OK);

    let served: ClientConfig = serde_json::from_str(&body).unwrap();
    assert_eq!(served, config.client);
}

#[tokio::test]
async fn test_serves_static_assets() {
    let (_dir, config) = site();
    let (status, body) = get(&config, "/static/cirebon_boundary.geojson").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("FeatureCollection"));

    let (status, _) = get(&config, "/static/missing.geojson").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_client_routes_fall_back_to_index() {
    let (_dir, config) = site();

    let (status, body) = get(&config, "/pkg/stunting_web.js").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "export default 1;");

    for path in ["/", "/admin/keluarga", "/auth/login?redirect=%2Fadmin"] {
        let (status, body) = get(&config, path).await;
        assert_eq!(status, StatusCode::OK, "{}", path);
        assert_eq!(body, "<html>app</html>");
    }
}

#[tokio::test]
async fn test_without_fallback_unknown_paths_are_missing() {
    let (_dir, mut config) = site();
    config.site.spa_fallback = false;

    let (status, _) = get(&config, "/admin/keluarga").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
