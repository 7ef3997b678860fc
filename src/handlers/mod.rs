//! HTTP handlers. A single entry point dispatches on method and path prefix.

pub mod body;
pub mod gate;
pub mod movies;
pub mod pages;
pub mod query;

use crate::error::{AppError, AppResult};
use crate::response::respond;
use crate::state::AppState;
use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, Method, StatusCode, Uri},
    response::Response,
};

pub async fn dispatch(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> AppResult<Response> {
    let path = uri.path();
    let query = uri.query();
    match method {
        Method::GET => pages::get(&state, path, query).await,
        Method::HEAD => Ok(respond(StatusCode::OK, None)),
        Method::POST => {
            gate::allow_and_auth(&state, path, &headers).await?;
            movies::create(&state, &headers, &body).await
        }
        Method::PUT => {
            gate::allow_and_auth(&state, path, &headers).await?;
            movies::update(&state, query, &headers, &body).await
        }
        Method::DELETE => {
            gate::allow_and_auth(&state, path, &headers).await?;
            movies::delete(&state, query).await
        }
        _ => Err(AppError::NotAllowed),
    }
}
