//! # Hosting Providers
//!
//! A [`HostingProvider`] knows how to address one hosting platform: where to
//! look a repository up, how to ask for a new one, and where the connection
//! URLs live in the creation response. One provider is selected per run and
//! drives both remote stages.

use reqwest::StatusCode;
use serde_json::Value;

use crate::client::ApiRequest;
use crate::platform::Platform;
use crate::response::{ApiError, classify_status};

/// Connection details of a freshly created repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteRepository {
  /// SSH clone URL, registered as the `origin` remote
  pub ssh_url: String,
  /// Browser URL shown to the user
  pub web_url: String,
}

/// Platform-specific addressing for repository lookup and creation
pub trait HostingProvider {
  /// Platform the requests are tagged with
  fn platform(&self) -> Platform;

  /// Request that fetches the repository called `name`
  fn lookup_request(&self, name: &str) -> ApiRequest;

  /// Request that creates a private repository called `name`
  fn create_request(&self, name: &str) -> ApiRequest;

  /// SSH clone URL from a creation response
  fn clone_url(&self, response: &Value) -> Option<String>;

  /// Web URL from a creation response
  fn web_url(&self, response: &Value) -> Option<String>;

  /// Decide whether a response is usable; see [`classify_status`]
  fn classify_response(&self, status: StatusCode, body: &str) -> Result<String, ApiError> {
    classify_status(status, body)
  }
}

/// First non-null string among `fields` of a JSON object
pub fn first_string_field(response: &Value, fields: &[&str]) -> Option<String> {
  fields
    .iter()
    .filter_map(|field| response.get(*field))
    .find_map(|value| value.as_str().map(str::to_string))
}

/// Whether a lookup response describes an existing repository
pub fn has_identifier(response: &Value) -> bool {
  response.get("id").is_some_and(|id| !id.is_null())
}
