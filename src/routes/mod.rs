//! Router: one fallback handler does the prefix dispatch, so no axum path patterns are registered.

use crate::config::BODY_LIMIT_BYTES;
use crate::handlers::dispatch;
use crate::state::AppState;
use axum::Router;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};

pub fn movie_routes(state: AppState) -> Router {
    Router::new()
        .fallback(dispatch)
        .with_state(state)
        .layer(RequestBodyLimitLayer::new(BODY_LIMIT_BYTES))
        .layer(TraceLayer::new_for_http())
}
