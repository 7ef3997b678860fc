//! GET handlers: prefix routing to the rendered pages.

use crate::error::{AppError, AppResult};
use crate::handlers::query::parse_query;
use crate::response::ok_page;
use crate::state::AppState;
use crate::views::RatingView;
use axum::response::Response;

/// `/actors` is checked on its own, so its page is followed by whatever the
/// remaining chain (`/rating`, `/movies`, main) renders for the same path.
pub async fn get(state: &AppState, path: &str, query: Option<&str>) -> AppResult<Response> {
    let mut body = String::new();
    if path.starts_with("/actors") {
        body.push_str(&actors_page(state).await?);
    }
    if path.starts_with("/rating") {
        body.push_str(&rating_page(state, query).await?);
    } else if path.starts_with("/movies") {
        body.push_str(&movies_page(state).await?);
    } else {
        body.push_str(&main_page(state).await?);
    }
    Ok(ok_page(body))
}

pub async fn main_page(state: &AppState) -> AppResult<String> {
    let movies = state.store.movies().await?;
    state.views.main_page(&movies, None).await
}

pub async fn movies_page(state: &AppState) -> AppResult<String> {
    let movies = state.store.movies().await?;
    state.views.movies_page(&movies).await
}

pub async fn actors_page(state: &AppState) -> AppResult<String> {
    let actors = state.store.actors().await?;
    state.views.actors_page(&actors).await
}

pub async fn rating_page(state: &AppState, query: Option<&str>) -> AppResult<String> {
    let query = parse_query(query)?;
    let movies = state.store.movies().await?;
    let title = match query.get("title") {
        Some(v) if !v.is_blank() => v.to_text(),
        _ => return Err(AppError::BadRequest("Movie title is required".into())),
    };
    let payload = state.rating.rating(&title).await.map_err(|e| {
        tracing::warn!(title = %title, error = %e, "rating lookup failed");
        AppError::Rating(e)
    })?;
    let local = state.store.movie_by_title(&title).await?;
    let view = RatingView { title: &title, payload: &payload, local: local.as_ref() };
    state.views.main_page(&movies, Some(view)).await
}
