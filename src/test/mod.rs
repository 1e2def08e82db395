// This module contains crate-level tests, such as whole-router request tests,
// as well as shared test utilities.

pub mod util;

use axum::{
    body::Body,
    extract::State,
    http::{header, Request, StatusCode},
};
use tower::ServiceExt;

use crate::{
    config::Config, state::InnerAppState, template::BaseRenderInfo, AppState, HandlerResult,
};

async fn body_string(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn index_renders_upstream_categories() {
    let url = util::spawn_upstream(util::CATEGORIES_BODY).await;
    let state = InnerAppState::test(Config::test(url));
    let router = crate::router::build(state);
    let response = router
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("General Knowledge"));
    assert!(body.contains("Entertainment: Film"));
}

#[tokio::test]
async fn index_renders_with_upstream_down() {
    let state = InnerAppState::test(Config::test(util::DEAD_UPSTREAM.to_string()));
    let router = crate::router::build(state);
    let response = router
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    // The page must still render, just with nothing to list.
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(!body.contains("General Knowledge"));
}

#[tokio::test]
async fn index_compresses_when_requested() {
    let url = util::spawn_upstream(util::CATEGORIES_BODY).await;
    let state = InnerAppState::test(Config::test(url));
    let router = crate::router::build(state);
    let response = router
        .oneshot(
            Request::builder()
                .uri("/")
                .header(header::ACCEPT_ENCODING, "gzip")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_ENCODING).unwrap(),
        "gzip"
    );
}

async fn render_missing_template(
    State(state): State<AppState>,
    base: BaseRenderInfo,
) -> HandlerResult {
    state.render("missing.jinja", base)
}

#[tokio::test]
async fn failed_render_goes_through_error_page() {
    let url = util::spawn_upstream(util::CATEGORIES_BODY).await;
    let state = InnerAppState::test(Config::test(url));
    let router = axum::Router::new()
        .route("/", axum::routing::get(render_missing_template))
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            crate::error::error_middleware,
        ))
        .with_state(state);
    let response = router
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.headers().get(header::CACHE_CONTROL).unwrap(),
        "private"
    );
    let body = body_string(response).await;
    assert!(body.contains("Tera error"));
}

#[tokio::test]
async fn unknown_route_renders_notfound() {
    let url = util::spawn_upstream(util::CATEGORIES_BODY).await;
    let state = InnerAppState::test(Config::test(url));
    let router = crate::router::build(state);
    let response = router
        .oneshot(
            Request::builder()
                .uri("/nonexistent")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_string(response).await;
    assert!(body.contains("/nonexistent"));
}
