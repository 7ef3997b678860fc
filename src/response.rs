//! Response helpers: every reply carries the fixed content type and an optional text body.

use crate::config::CONTENT_TYPE;
use axum::{
    body::Body,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};

pub fn respond(status: StatusCode, body: Option<String>) -> Response {
    let mut resp = match body {
        Some(b) if !b.is_empty() => (status, b).into_response(),
        _ => (status, Body::empty()).into_response(),
    };
    resp.headers_mut()
        .insert(header::CONTENT_TYPE, HeaderValue::from_static(CONTENT_TYPE));
    resp
}

pub fn ok_page(html: String) -> Response {
    respond(StatusCode::OK, Some(html))
}

/// 201 with the new identifier as the whole body.
pub fn created(id: uuid::Uuid) -> Response {
    respond(StatusCode::CREATED, Some(id.to_string()))
}

pub fn no_content() -> Response {
    respond(StatusCode::NO_CONTENT, None)
}

pub fn message(status: StatusCode, text: impl Into<String>) -> Response {
    respond(status, Some(text.into()))
}
