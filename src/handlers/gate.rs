//! Two-stage gate for mutating requests: path must be allowed, then the token must be known.

use crate::config::{AUTH_HEADER, MOVIES_PREFIX};
use crate::error::{AppError, AppResult};
use crate::state::AppState;
use axum::http::HeaderMap;

pub fn check_allowed(path: &str) -> bool {
    path.starts_with(MOVIES_PREFIX)
}

pub async fn check_auth(state: &AppState, headers: &HeaderMap) -> AppResult<bool> {
    let Some(token) = headers.get(AUTH_HEADER).and_then(|v| v.to_str().ok()) else {
        return Ok(false);
    };
    state.store.token_exists(token).await
}

/// Allowed is checked first; an unauthenticated request to a disallowed path gets 405.
pub async fn allow_and_auth(state: &AppState, path: &str, headers: &HeaderMap) -> AppResult<()> {
    if !check_allowed(path) {
        tracing::warn!(path = %path, "mutation outside movies path");
        return Err(AppError::NotAllowed);
    }
    if !check_auth(state, headers).await? {
        tracing::warn!(path = %path, "missing or unknown auth token");
        return Err(AppError::Forbidden);
    }
    Ok(())
}
