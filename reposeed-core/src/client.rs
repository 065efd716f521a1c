//! # API Client
//!
//! One HTTP client for every hosting platform. Requests are described by an
//! [`ApiRequest`] carrying the platform tag; the client attaches the
//! authentication headers that platform expects and runs the response through
//! the shared response policy.

pub use reqwest::Method;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde_json::Value;
use tracing::{debug, instrument, trace};
use url::Url;

use crate::consts::{GITHUB_ACCEPT, GITHUB_API_VERSION, GITHUB_API_VERSION_HEADER, USER_AGENT};
use crate::platform::{Credential, Platform};
use crate::provider::HostingProvider;
use crate::response::{ApiError, classify_status};

/// A single request against a hosting platform's REST API
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
  pub method: Method,
  pub url: Url,
  pub body: Option<Value>,
  pub platform: Platform,
}

impl ApiRequest {
  pub fn get(platform: Platform, url: Url) -> Self {
    Self {
      method: Method::GET,
      url,
      body: None,
      platform,
    }
  }

  pub fn post(platform: Platform, url: Url, body: Value) -> Self {
    Self {
      method: Method::POST,
      url,
      body: Some(body),
      platform,
    }
  }
}

/// Authenticated client for the hosting platform APIs
pub struct ApiClient {
  client: Client,
  credential: Credential,
}

impl ApiClient {
  /// Create a new client that authenticates with `credential`
  pub fn new(credential: Credential) -> Self {
    Self {
      client: Client::new(),
      credential,
    }
  }

  /// Send `request` and return the accepted response text.
  ///
  /// A not-found response is returned as `{}`.
  pub async fn send(&self, request: &ApiRequest) -> Result<String, ApiError> {
    let (status, body) = self.execute(request).await?;
    classify_status(status, &body)
  }

  /// Send `request` and let `provider` decide whether the response is usable
  pub async fn send_with(&self, provider: &dyn HostingProvider, request: &ApiRequest) -> Result<String, ApiError> {
    let (status, body) = self.execute(request).await?;
    provider.classify_response(status, &body)
  }

  #[instrument(skip(self, request), fields(method = %request.method, url = %request.url), level = "debug")]
  async fn execute(&self, request: &ApiRequest) -> Result<(StatusCode, String), ApiError> {
    let mut builder = self
      .client
      .request(request.method.clone(), request.url.clone())
      .header("User-Agent", USER_AGENT);
    builder = self.authorize(builder, request.platform);

    if let Some(body) = &request.body {
      trace!(%body, "Request body");
      builder = builder.json(body);
    }

    let response = builder.send().await.map_err(|source| ApiError::Transport {
      url: request.url.to_string(),
      source,
    })?;

    let status = response.status();
    let body = response.text().await.map_err(|source| ApiError::Transport {
      url: request.url.to_string(),
      source,
    })?;
    debug!(%status, bytes = body.len(), "Received response");

    Ok((status, body))
  }

  fn authorize(&self, builder: RequestBuilder, platform: Platform) -> RequestBuilder {
    let token = self.credential.token();
    match platform {
      Platform::AzureDevOps => builder.basic_auth("", Some(token)),
      Platform::GitHub => builder
        .header("Authorization", format!("token {token}"))
        .header("Accept", GITHUB_ACCEPT)
        .header(GITHUB_API_VERSION_HEADER, GITHUB_API_VERSION),
    }
  }
}

#[cfg(test)]
mod tests {
  use serde_json::json;
  use wiremock::matchers::{body_json, header, method, path};
  use wiremock::{Mock, MockServer, ResponseTemplate};

  use super::*;

  fn url(server: &MockServer, route: &str) -> Url {
    Url::parse(&format!("{}{route}", server.uri())).unwrap()
  }

  #[tokio::test]
  async fn test_azure_requests_use_basic_auth_with_empty_user() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = ApiClient::new(Credential::new(Platform::AzureDevOps, "abc123")?);

    // ":abc123" in base64
    Mock::given(method("GET"))
      .and(path("/org/_apis/projects"))
      .and(header("Authorization", "Basic OmFiYzEyMw=="))
      .and(header("User-Agent", USER_AGENT))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "count": 0 })))
      .expect(1)
      .mount(&mock_server)
      .await;

    let body = client
      .send(&ApiRequest::get(Platform::AzureDevOps, url(&mock_server, "/org/_apis/projects")))
      .await?;
    assert_eq!(serde_json::from_str::<Value>(&body)?, json!({ "count": 0 }));

    Ok(())
  }

  #[tokio::test]
  async fn test_github_requests_use_token_and_version_headers() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = ApiClient::new(Credential::new(Platform::GitHub, "ghp_abc123")?);

    Mock::given(method("POST"))
      .and(path("/user/repos"))
      .and(header("Authorization", "token ghp_abc123"))
      .and(header("Accept", GITHUB_ACCEPT))
      .and(header(GITHUB_API_VERSION_HEADER, GITHUB_API_VERSION))
      .and(body_json(json!({ "name": "demo", "private": true })))
      .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "id": 7 })))
      .expect(1)
      .mount(&mock_server)
      .await;

    let request = ApiRequest::post(
      Platform::GitHub,
      url(&mock_server, "/user/repos"),
      json!({ "name": "demo", "private": true }),
    );
    let body = client.send(&request).await?;
    assert_eq!(serde_json::from_str::<Value>(&body)?["id"], json!(7));

    Ok(())
  }

  #[tokio::test]
  async fn test_not_found_becomes_empty_object() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = ApiClient::new(Credential::new(Platform::GitHub, "ghp_abc123")?);

    Mock::given(method("GET"))
      .and(path("/repos/octo/missing"))
      .respond_with(ResponseTemplate::new(404).set_body_json(json!({
          "message": "Not Found",
          "documentation_url": "https://docs.github.com/rest/repos/repos#get-a-repository",
          "status": "404"
      })))
      .mount(&mock_server)
      .await;

    let body = client
      .send(&ApiRequest::get(Platform::GitHub, url(&mock_server, "/repos/octo/missing")))
      .await?;
    assert_eq!(body, "{}");

    Ok(())
  }

  #[tokio::test]
  async fn test_unauthorized_and_forbidden() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = ApiClient::new(Credential::new(Platform::GitHub, "ghp_expired")?);

    Mock::given(method("GET"))
      .and(path("/user"))
      .respond_with(ResponseTemplate::new(401).set_body_json(json!({ "message": "Bad credentials" })))
      .mount(&mock_server)
      .await;
    Mock::given(method("POST"))
      .and(path("/orgs/acme/repos"))
      .respond_with(ResponseTemplate::new(403).set_body_string("forbidden"))
      .mount(&mock_server)
      .await;

    let result = client
      .send(&ApiRequest::get(Platform::GitHub, url(&mock_server, "/user")))
      .await;
    assert!(matches!(result, Err(ApiError::Unauthorized)));

    let result = client
      .send(&ApiRequest::post(
        Platform::GitHub,
        url(&mock_server, "/orgs/acme/repos"),
        json!({}),
      ))
      .await;
    assert!(matches!(result, Err(ApiError::Forbidden)));

    Ok(())
  }

  #[tokio::test]
  async fn test_non_json_success_is_rejected() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = ApiClient::new(Credential::new(Platform::AzureDevOps, "abc123")?);

    Mock::given(method("GET"))
      .and(path("/org/_apis/git/repositories/demo"))
      .respond_with(ResponseTemplate::new(200).set_body_string("<html>Sign in</html>"))
      .mount(&mock_server)
      .await;

    let result = client
      .send(&ApiRequest::get(
        Platform::AzureDevOps,
        url(&mock_server, "/org/_apis/git/repositories/demo"),
      ))
      .await;
    match result {
      Err(ApiError::InvalidJson { body }) => assert!(body.contains("Sign in")),
      other => panic!("expected InvalidJson, got {other:?}"),
    }

    Ok(())
  }

  #[tokio::test]
  async fn test_transport_failure_names_url() -> anyhow::Result<()> {
    let client = ApiClient::new(Credential::new(Platform::GitHub, "ghp_abc123")?);
    // Port 9 (discard) is not expected to accept HTTP connections.
    let target = Url::parse("http://127.0.0.1:9/user")?;

    let result = client.send(&ApiRequest::get(Platform::GitHub, target)).await;
    match result {
      Err(ApiError::Transport { url, .. }) => assert_eq!(url, "http://127.0.0.1:9/user"),
      other => panic!("expected Transport, got {other:?}"),
    }

    Ok(())
  }
}
