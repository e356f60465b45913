use super::*;

use axum::body::Body;
use axum::http::Request;
use tower::ServiceExt;

async fn status_of(router: Router, uri: &str) -> StatusCode {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    router.oneshot(request).await.unwrap().status()
}

#[tokio::test]
async fn healthz_returns_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[tokio::test]
async fn api_routes_serve_healthz() {
    assert_eq!(status_of(api_routes(), "/healthz").await, StatusCode::OK);
}

#[tokio::test]
async fn api_routes_reject_unknown_paths() {
    assert_eq!(status_of(api_routes(), "/api/catalog").await, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn healthz_rejects_post() {
    let request = Request::builder()
        .method("POST")
        .uri("/healthz")
        .body(Body::empty())
        .unwrap();
    let status = api_routes().oneshot(request).await.unwrap().status();
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

fn site() -> Router {
    // Rendering spawns onto the reactive executor; a second init is harmless.
    any_spawner::Executor::init_tokio().ok();
    app(LeptosOptions::builder().output_name("wanderlens").build())
}

#[tokio::test(flavor = "multi_thread")]
async fn app_serves_healthz_through_merged_router() {
    assert_eq!(status_of(site(), "/healthz").await, StatusCode::OK);
}

#[tokio::test(flavor = "multi_thread")]
async fn app_renders_map_page_as_html() {
    let request = Request::builder().uri("/map").body(Body::empty()).unwrap();
    let response = site().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let content_type = response
        .headers()
        .get(axum::http::header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_owned();
    assert!(content_type.starts_with("text/html"), "content-type was {content_type:?}");

    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let html = String::from_utf8_lossy(&body);
    assert!(html.contains("Explore the map"));
}

#[tokio::test(flavor = "multi_thread")]
async fn app_falls_through_to_static_files_for_unknown_paths() {
    assert_eq!(status_of(site(), "/no-such-page").await, StatusCode::NOT_FOUND);
}

#[tokio::test(flavor = "multi_thread")]
async fn app_reports_missing_pkg_assets() {
    assert_eq!(status_of(site(), "/pkg/missing.wasm").await, StatusCode::NOT_FOUND);
}
