//! Lookup of external rating data by movie title (OMDb-compatible API).

use crate::config::{RATING_API_NAME, RATING_TIMEOUT};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RatingError {
    #[error("API {api} failed with status code {status}")]
    ForeignApi { api: &'static str, status: u16 },
    #[error("API {api} has no entry for '{title}': {reason}")]
    NotFound { api: &'static str, title: String, reason: String },
    #[error("API {api} returned an unexpected payload: {detail}")]
    Decode { api: &'static str, detail: String },
    #[error("API {api} unreachable: {source}")]
    Transport {
        api: &'static str,
        #[source]
        source: reqwest::Error,
    },
}

pub type RatingPayload = Map<String, Value>;

#[async_trait]
pub trait RatingSource: Send + Sync {
    async fn rating(&self, title: &str) -> Result<RatingPayload, RatingError>;
}

pub struct OmdbClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl OmdbClient {
    pub fn new(base_url: String, api_key: String) -> Result<Self, RatingError> {
        if api_key.trim().is_empty() {
            tracing::warn!("no API_KEY configured; rating lookups will be rejected upstream");
        }
        let client = reqwest::Client::builder()
            .timeout(RATING_TIMEOUT)
            .build()
            .map_err(transport)?;
        Ok(Self { client, base_url, api_key })
    }
}

#[async_trait]
impl RatingSource for OmdbClient {
    async fn rating(&self, title: &str) -> Result<RatingPayload, RatingError> {
        let resp = self
            .client
            .get(&self.base_url)
            .query(&[("apikey", self.api_key.as_str()), ("t", title)])
            .send()
            .await
            .map_err(transport)?;
        let status = resp.status();
        if status != StatusCode::OK {
            return classify(status.as_u16(), Value::Null, title);
        }
        let body: Value = resp.json().await.map_err(|e| RatingError::Decode {
            api: RATING_API_NAME,
            detail: e.to_string(),
        })?;
        classify(status.as_u16(), body, title)
    }
}

fn transport(source: reqwest::Error) -> RatingError {
    RatingError::Transport { api: RATING_API_NAME, source }
}

/// Any status other than 200 is a failure. OMDb also answers 200 with
/// `"Response": "False"` for titles it does not know.
fn classify(status: u16, body: Value, title: &str) -> Result<RatingPayload, RatingError> {
    if status != 200 {
        return Err(RatingError::ForeignApi { api: RATING_API_NAME, status });
    }
    let Value::Object(map) = body else {
        return Err(RatingError::Decode {
            api: RATING_API_NAME,
            detail: "expected a JSON object".into(),
        });
    };
    if map.get("Response").and_then(Value::as_str) == Some("False") {
        let reason = map
            .get("Error")
            .and_then(Value::as_str)
            .unwrap_or("no details")
            .to_string();
        return Err(RatingError::NotFound {
            api: RATING_API_NAME,
            title: title.to_string(),
            reason,
        });
    }
    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn non_ok_status_names_api_and_code() {
        let err = classify(401, Value::Null, "Heat").unwrap_err();
        assert_eq!(err.to_string(), "API OMDB.Ratings failed with status code 401");
    }

    #[test]
    fn negative_lookup_is_not_found() {
        let body = json!({"Response": "False", "Error": "Movie not found!"});
        let err = classify(200, body, "Nope").unwrap_err();
        assert!(matches!(err, RatingError::NotFound { ref reason, .. } if reason == "Movie not found!"));
    }

    #[test]
    fn payload_is_returned_as_map() {
        let body = json!({"Title": "Heat", "Ratings": [{"Source": "IMDb", "Value": "8.3/10"}], "Response": "True"});
        let map = classify(200, body, "Heat").unwrap();
        assert_eq!(map["Title"], "Heat");
    }

    #[test]
    fn non_object_payload_is_decode_error() {
        assert!(matches!(classify(200, json!([1, 2]), "x"), Err(RatingError::Decode { .. })));
    }
}
