//! Mutating handlers for `/movies`. Callers have already passed the allow/auth gate.

use crate::error::{AppError, AppResult};
use crate::handlers::body::json_body;
use crate::handlers::query::{parse_query, QueryMap};
use crate::model::{MovieChanges, NewMovie};
use crate::response::{created, message, no_content};
use crate::state::AppState;
use axum::body::Bytes;
use axum::http::{HeaderMap, StatusCode};
use axum::response::Response;
use uuid::Uuid;

const ID_KEY: &str = "id";

fn query_id(query: &QueryMap) -> Option<String> {
    query.get(ID_KEY).map(|v| v.to_text())
}

pub async fn create(state: &AppState, headers: &HeaderMap, body: &Bytes) -> AppResult<Response> {
    let movie = NewMovie::from_json(json_body(headers, body)?)?;
    match state.store.insert_movie(&movie).await {
        Ok(Some(id)) => {
            tracing::info!(id = %id, title = %movie.title, "movie created");
            Ok(created(id))
        }
        Ok(None) => Ok(message(
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("failed to create record movie={}", movie.title),
        )),
        Err(e) => {
            if matches!(e, AppError::Conflict(_)) {
                tracing::info!(title = %movie.title, "duplicate title");
            }
            Err(e)
        }
    }
}

pub async fn delete(state: &AppState, query: Option<&str>) -> AppResult<Response> {
    let query = parse_query(query)?;
    let Some(raw_id) = query_id(&query) else {
        return Err(AppError::BadRequest("you should have provided movie in query".into()));
    };
    let ids = state.store.movie_ids().await?;
    let known = Uuid::parse_str(&raw_id).ok().filter(|id| ids.contains(id));
    let Some(id) = known else {
        return Ok(message(
            StatusCode::ACCEPTED,
            format!("movie {} is not present in database", raw_id),
        ));
    };
    if state.store.delete_movie(id).await? {
        tracing::info!(id = %id, "movie deleted");
        Ok(no_content())
    } else {
        Ok(message(StatusCode::INTERNAL_SERVER_ERROR, format!("movie {} was not deleted", id)))
    }
}

/// A missing, malformed or unknown id turns the request into a create with the same body.
pub async fn update(
    state: &AppState,
    query: Option<&str>,
    headers: &HeaderMap,
    body: &Bytes,
) -> AppResult<Response> {
    let query = parse_query(query)?;
    let mut target = query_id(&query).and_then(|s| Uuid::parse_str(&s).ok());
    if let Some(id) = target {
        if !state.store.movie_exists(id).await? {
            target = None;
        }
    }
    let Some(id) = target else {
        tracing::info!("update target missing, handling as create");
        return create(state, headers, body).await;
    };
    let changes = MovieChanges::from_json(json_body(headers, body)?)?;
    if state.store.update_movie(id, &changes).await? {
        tracing::info!(id = %id, "movie updated");
        Ok(message(StatusCode::OK, format!("movie {} was updated", id)))
    } else {
        Ok(message(StatusCode::INTERNAL_SERVER_ERROR, format!("movie {} was not updated", id)))
    }
}
