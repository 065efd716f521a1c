//! # API Response Policy
//!
//! Decides whether an API response is usable. Responses are judged on their
//! raw text: the presence of `401`, `403`, `404` or `400` anywhere in the text
//! is treated as that status, checked in that order. A `404` becomes the empty
//! JSON object so that "not found" reads as an absent repository. Anything
//! else must be valid JSON.
//!
//! Matching on substrings over-matches: a successful body that happens to
//! contain one of those numbers (an id, a timestamp) is misclassified. The
//! client narrows this by classifying real status codes first, but bodies are
//! still judged by this policy.

use reqwest::StatusCode;
use thiserror::Error;

/// Text substituted for a not-found response
pub const EMPTY_OBJECT: &str = "{}";

/// Failures reported by the API client
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("Authentication failed: the token was rejected")]
  Unauthorized,

  #[error("Permission denied: the token lacks the required scopes or access")]
  Forbidden,

  #[error("The API rejected the request: {body}")]
  BadRequest { body: String },

  #[error("The API returned a response that is not valid JSON: {body}")]
  InvalidJson { body: String },

  #[error("The API response has no usable '{field}': {body}")]
  MissingField { field: &'static str, body: String },

  #[error("Request to {url} failed: {source}")]
  Transport {
    url: String,
    #[source]
    source: reqwest::Error,
  },
}

/// Classify raw response text.
///
/// Returns the text to hand to the caller: the input itself, or
/// [`EMPTY_OBJECT`] for a not-found response.
pub fn classify_response(raw: &str) -> Result<String, ApiError> {
  if raw.contains("401") {
    return Err(ApiError::Unauthorized);
  }
  if raw.contains("403") {
    return Err(ApiError::Forbidden);
  }
  if raw.contains("404") {
    return Ok(EMPTY_OBJECT.to_string());
  }
  if raw.contains("400") {
    return Err(ApiError::BadRequest { body: raw.to_string() });
  }

  match serde_json::from_str::<serde_json::Value>(raw) {
    Ok(_) => Ok(raw.to_string()),
    Err(_) => Err(ApiError::InvalidJson { body: raw.to_string() }),
  }
}

/// Classify a response whose status code is known.
///
/// The four statuses the text policy knows about are decided from the status
/// code alone; every other response falls through to [`classify_response`]
/// on its body.
pub fn classify_status(status: StatusCode, body: &str) -> Result<String, ApiError> {
  match status {
    StatusCode::UNAUTHORIZED => Err(ApiError::Unauthorized),
    StatusCode::FORBIDDEN => Err(ApiError::Forbidden),
    StatusCode::NOT_FOUND => Ok(EMPTY_OBJECT.to_string()),
    StatusCode::BAD_REQUEST => Err(ApiError::BadRequest { body: body.to_string() }),
    _ => classify_response(body),
  }
}
