//! Query-string parsing: `&`-separated `key=value` pairs, digits become integers.
//! No percent-decoding; `+` in text values stands for a space.

use crate::error::AppError;
use std::collections::HashMap;

#[derive(Clone, Debug, PartialEq)]
pub enum QueryValue {
    Int(i64),
    Text(String),
}

impl QueryValue {
    pub fn to_text(&self) -> String {
        match self {
            QueryValue::Int(n) => n.to_string(),
            QueryValue::Text(s) => s.clone(),
        }
    }

    /// Empty text and zero carry no value.
    pub fn is_blank(&self) -> bool {
        match self {
            QueryValue::Int(n) => *n == 0,
            QueryValue::Text(s) => s.is_empty(),
        }
    }
}

pub type QueryMap = HashMap<String, QueryValue>;

/// Parse the part after `?`. Absent or empty input gives an empty map.
/// A pair without exactly one `=` makes the whole query malformed.
pub fn parse_query(query: Option<&str>) -> Result<QueryMap, AppError> {
    let mut out = QueryMap::new();
    let Some(query) = query.filter(|q| !q.is_empty()) else {
        return Ok(out);
    };
    for pair in query.split('&') {
        let mut parts = pair.split('=');
        let (Some(key), Some(value), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(AppError::BadRequest(format!("malformed query pair '{}'", pair)));
        };
        out.insert(key.to_string(), parse_value(value));
    }
    Ok(out)
}

fn parse_value(raw: &str) -> QueryValue {
    if !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit()) {
        if let Ok(n) = raw.parse() {
            return QueryValue::Int(n);
        }
    }
    QueryValue::Text(pluses_to_spaces(raw))
}

pub fn pluses_to_spaces(text: &str) -> String {
    text.replace('+', " ")
}
