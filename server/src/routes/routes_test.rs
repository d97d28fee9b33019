use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use super::*;

fn test_config() -> ServerConfig {
    ServerConfig {
        bind_addr: crate::config::DEFAULT_BIND_ADDR,
        port: 0,
        public_dir: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../public"),
    }
}

const NOT_FOUND_PAGE: &str = "rendered not-found page";

fn test_router() -> Router {
    let site_root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../target/site");
    let not_found = Router::new().fallback(|| async { (StatusCode::NOT_FOUND, NOT_FOUND_PAGE) });
    asset_routes(&site_root, &test_config(), not_found)
}

async fn fetch(router: Router, uri: &str) -> (StatusCode, String) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8_lossy(&bytes).into_owned())
}

async fn status_of(router: Router, uri: &str) -> StatusCode {
    fetch(router, uri).await.0
}

#[tokio::test]
async fn healthz_returns_ok() {
    assert_eq!(status_of(test_router(), "/healthz").await, StatusCode::OK);
}

#[tokio::test]
async fn public_files_are_served_from_fallback() {
    assert_eq!(status_of(test_router(), "/favicon.svg").await, StatusCode::OK);
}

#[tokio::test]
async fn unknown_path_renders_not_found_page() {
    let (status, body) = fetch(test_router(), "/no-such-page").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, NOT_FOUND_PAGE);
}

#[tokio::test]
async fn public_file_is_served_instead_of_not_found_page() {
    let (_, body) = fetch(test_router(), "/favicon.svg").await;
    assert!(body.contains("<svg"));
    assert_ne!(body, NOT_FOUND_PAGE);
}

#[tokio::test]
async fn missing_pkg_asset_is_not_found_without_page() {
    let (status, body) = fetch(test_router(), "/pkg/does-not-exist.wasm").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_ne!(body, NOT_FOUND_PAGE);
}
