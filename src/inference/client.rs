//! HTTP client for the sketch retrieval endpoint

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::errors::{InferenceError, InferenceResult};
use super::sketch::SketchImage;
use crate::config::Config;
use crate::gallery::ImageId;
use crate::version;

#[derive(Debug, Serialize)]
struct PredictRequest<'a> {
    image: &'a str,
}

/// Accepted response bodies: a bare ranked list, or the `{"data": [[...]]}` wrapper
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PredictResponse {
    Ranked(Vec<i64>),
    Wrapped { data: Vec<Vec<i64>> },
}

/// Single-shot client: one POST per sketch, ranked identifiers back
#[derive(Debug, Clone)]
pub struct InferenceClient {
    client: Client,
    endpoint: String,
}

impl InferenceClient {
    pub fn new(config: &Config) -> InferenceResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .user_agent(version::user_agent())
            .build()
            .map_err(|e| {
                InferenceError::Config(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            endpoint: config.api_url.clone(),
        })
    }

    /// Send the sketch and return image identifiers, best match first
    pub async fn predict(&self, sketch: &SketchImage) -> InferenceResult<Vec<ImageId>> {
        let data_uri = sketch.data_uri();
        info!(
            "Submitting {}x{} sketch to {}",
            sketch.width(),
            sketch.height(),
            self.endpoint
        );

        let response = self
            .client
            .post(&self.endpoint)
            .json(&PredictRequest { image: &data_uri })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(InferenceError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let ids = parse_response(&body)?;
        debug!("Endpoint returned {} identifiers", ids.len());
        Ok(ids)
    }
}

/// Decode a response body into ranked identifiers.
///
/// Every entry must be a non-negative integer; the list is used as returned.
pub fn parse_response(body: &str) -> InferenceResult<Vec<ImageId>> {
    let raw = match serde_json::from_str::<PredictResponse>(body) {
        Ok(PredictResponse::Ranked(ids)) => ids,
        Ok(PredictResponse::Wrapped { data }) => data
            .into_iter()
            .next()
            .ok_or_else(|| {
                InferenceError::UnexpectedResponse("empty \"data\" list".to_string())
            })?,
        Err(_) => {
            // A JSON syntax error stays a syntax error; valid JSON of another shape is unexpected
            let value: serde_json::Value = serde_json::from_str(body)?;
            return Err(InferenceError::UnexpectedResponse(format!(
                "expected a list of image ids, got {}",
                truncate(&value.to_string(), 80)
            )));
        }
    };

    raw.into_iter()
        .map(|id| {
            u64::try_from(id).map(ImageId).map_err(|_| {
                InferenceError::UnexpectedResponse(format!("invalid image id {}", id))
            })
        })
        .collect()
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        format!("{}...", text.chars().take(max_chars).collect::<String>())
    }
}
