//! JSON request bodies, sized by an explicit numeric Content-Length.

use crate::error::AppError;
use axum::body::Bytes;
use axum::http::{header, HeaderMap};
use serde_json::Value;

pub fn json_body(headers: &HeaderMap, body: &Bytes) -> Result<Value, AppError> {
    let len = headers
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .filter(|s| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()))
        .and_then(|s| s.parse::<usize>().ok())
        .ok_or_else(|| AppError::BadRequest("should have provided Content-Length".into()))?;
    let Some(raw) = body.get(..len) else {
        return Err(AppError::BadRequest("body is shorter than Content-Length".into()));
    };
    serde_json::from_slice(raw).map_err(|e| AppError::BadRequest(format!("failed parsing json: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(len: &str) -> HeaderMap {
        let mut h = HeaderMap::new();
        h.insert(header::CONTENT_LENGTH, HeaderValue::from_str(len).unwrap());
        h
    }

    #[test]
    fn reads_exactly_content_length_bytes() {
        let body = Bytes::from_static(br#"{"year": 2021}trailing"#);
        let v = json_body(&headers("14"), &body).unwrap();
        assert_eq!(v["year"], 2021);
    }

    #[test]
    fn missing_or_bad_length_is_bad_request() {
        let body = Bytes::from_static(b"{}");
        assert!(json_body(&HeaderMap::new(), &body).is_err());
        assert!(json_body(&headers("-1"), &body).is_err());
        assert!(json_body(&headers("10"), &body).is_err());
    }

    #[test]
    fn malformed_json_reports_parser_error() {
        let body = Bytes::from_static(b"{nope");
        match json_body(&headers("5"), &body) {
            Err(AppError::BadRequest(m)) => assert!(m.starts_with("failed parsing json: ")),
            other => panic!("unexpected: {:?}", other),
        }
    }
}
