//! Router assembly.

mod api;
mod common;

use axum::Router;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

const MAX_BODY_BYTES: usize = 1024 * 1024;

/// The full application: operational routes at the root, the resource API
/// under `/api/v1`.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(common::common_routes(state.clone()))
        .nest("/api/v1", api::api_routes(state))
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
}
