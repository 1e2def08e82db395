use axum::{routing::get, Router};
use tower_http::{compression::CompressionLayer, decompression::DecompressionLayer};

use crate::{routes, AppState};

pub fn build(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::index::get))
        .layer(
            tower::ServiceBuilder::new()
                .layer(axum::middleware::from_fn_with_state(
                    state.clone(),
                    crate::error::error_middleware,
                ))
                .layer(CompressionLayer::new())
                .layer(DecompressionLayer::new()),
        )
        .fallback(routes::notfound_handler)
        .with_state(state)
}
