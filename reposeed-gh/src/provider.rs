//! # GitHub Provider
//!
//! Repositories live under an owner: the authenticated user in personal mode
//! or an organization in organization mode. Creation always requests a
//! private repository.

use std::env;

use reposeed_core::provider::first_string_field;
use reposeed_core::{ApiRequest, HostingProvider, Platform};
use serde_json::{Value, json};
use url::Url;

use crate::consts::{API_BASE_URL, ENV_GITHUB_API_URL, SSH_URL_FIELDS, WEB_URL_FIELDS};

/// Account that owns the new repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Owner {
  /// Personal account, identified by login
  User(String),
  /// Organization, identified by name
  Organization(String),
}

impl Owner {
  pub fn name(&self) -> &str {
    match self {
      Owner::User(login) => login,
      Owner::Organization(org) => org,
    }
  }
}

/// [`HostingProvider`] for github.com and GitHub Enterprise
#[derive(Debug, Clone)]
pub struct GitHubProvider {
  base_url: Url,
  owner: Owner,
}

impl GitHubProvider {
  pub fn new(base_url: Url, owner: Owner) -> Self {
    Self { base_url, owner }
  }
}

impl HostingProvider for GitHubProvider {
  fn platform(&self) -> Platform {
    Platform::GitHub
  }

  fn lookup_request(&self, name: &str) -> ApiRequest {
    let url = endpoint(&self.base_url, &["repos", self.owner.name(), name]);
    ApiRequest::get(Platform::GitHub, url)
  }

  fn create_request(&self, name: &str) -> ApiRequest {
    let url = match &self.owner {
      Owner::User(_) => endpoint(&self.base_url, &["user", "repos"]),
      Owner::Organization(org) => endpoint(&self.base_url, &["orgs", org, "repos"]),
    };
    ApiRequest::post(Platform::GitHub, url, json!({ "name": name, "private": true }))
  }

  fn clone_url(&self, response: &Value) -> Option<String> {
    first_string_field(response, &SSH_URL_FIELDS)
  }

  fn web_url(&self, response: &Value) -> Option<String> {
    first_string_field(response, &WEB_URL_FIELDS)
  }
}

/// API base URL, honouring `GITHUB_API_URL` when set
pub fn api_base_url() -> Result<Url, url::ParseError> {
  match env::var(ENV_GITHUB_API_URL) {
    Ok(value) if !value.trim().is_empty() => Url::parse(value.trim()),
    _ => Url::parse(API_BASE_URL),
  }
}

/// Append path segments to the API base URL
pub(crate) fn endpoint(base_url: &Url, segments: &[&str]) -> Url {
  let mut url = base_url.clone();
  if let Ok(mut path) = url.path_segments_mut() {
    path.pop_if_empty().extend(segments);
  }
  url
}
