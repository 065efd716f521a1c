//! # Azure DevOps Provider
//!
//! Repositories live in one project of one organization. Requests are
//! addressed by project id and pinned to a single REST API version.

use reposeed_core::provider::first_string_field;
use reposeed_core::{ApiRequest, HostingProvider, Platform};
use serde_json::{Value, json};
use url::Url;

use crate::consts::{API_VERSION, SSH_URL_FIELDS, WEB_URL_FIELDS};
use crate::models::CreateRepositoryParams;

/// [`HostingProvider`] for an Azure DevOps organization and project
#[derive(Debug, Clone)]
pub struct AzureDevOpsProvider {
  org_url: Url,
  project_id: String,
}

impl AzureDevOpsProvider {
  pub fn new(org_url: Url, project_id: impl Into<String>) -> Self {
    Self {
      org_url,
      project_id: project_id.into(),
    }
  }

  /// `{org_url}/{project}/_apis/git/repositories[/{name}]?api-version=...`
  fn repositories_url(&self, name: Option<&str>) -> Url {
    let mut url = self.org_url.clone();
    if let Ok(mut path) = url.path_segments_mut() {
      path
        .pop_if_empty()
        .extend([self.project_id.as_str(), "_apis", "git", "repositories"]);
      if let Some(name) = name {
        path.push(name);
      }
    }
    url.query_pairs_mut().append_pair("api-version", API_VERSION);
    url
  }
}

impl HostingProvider for AzureDevOpsProvider {
  fn platform(&self) -> Platform {
    Platform::AzureDevOps
  }

  fn lookup_request(&self, name: &str) -> ApiRequest {
    ApiRequest::get(Platform::AzureDevOps, self.repositories_url(Some(name)))
  }

  fn create_request(&self, name: &str) -> ApiRequest {
    let params = CreateRepositoryParams::new(name, &self.project_id);
    ApiRequest::post(Platform::AzureDevOps, self.repositories_url(None), json!(params))
  }

  fn clone_url(&self, response: &Value) -> Option<String> {
    first_string_field(response, &SSH_URL_FIELDS)
  }

  fn web_url(&self, response: &Value) -> Option<String> {
    first_string_field(response, &WEB_URL_FIELDS)
  }
}

#[cfg(test)]
mod tests {
  use reposeed_core::client::Method;
  use reposeed_core::{ApiClient, Credential};
  use wiremock::matchers::{body_json, header, method, path, query_param};
  use wiremock::{Mock, MockServer, ResponseTemplate};

  use super::*;

  fn provider(org_url: &str) -> AzureDevOpsProvider {
    AzureDevOpsProvider::new(Url::parse(org_url).unwrap(), "6ce954b1-ce1f-45d1-b94d-e6bf2464ba2c")
  }

  #[test]
  fn test_lookup_request() {
    let request = provider("https://dev.azure.com/fabrikam").lookup_request("my-test-repo");
    assert_eq!(request.method, Method::GET);
    assert_eq!(
      request.url.as_str(),
      "https://dev.azure.com/fabrikam/6ce954b1-ce1f-45d1-b94d-e6bf2464ba2c/_apis/git/repositories/my-test-repo?api-version=7.1"
    );
    assert_eq!(request.platform, Platform::AzureDevOps);
  }

  #[test]
  fn test_create_request() {
    let request = provider("https://dev.azure.com/fabrikam/").create_request("my-test-repo");
    assert_eq!(request.method, Method::POST);
    assert_eq!(
      request.url.as_str(),
      "https://dev.azure.com/fabrikam/6ce954b1-ce1f-45d1-b94d-e6bf2464ba2c/_apis/git/repositories?api-version=7.1"
    );
    assert_eq!(
      request.body,
      Some(json!({
          "name": "my-test-repo",
          "project": { "id": "6ce954b1-ce1f-45d1-b94d-e6bf2464ba2c" }
      }))
    );
  }

  #[test]
  fn test_url_extraction() {
    let azure = provider("https://dev.azure.com/fabrikam");
    let response = json!({
        "id": "5febef5a-833d-4e14-b9c0-14cb638f91e6",
        "name": "my-test-repo",
        "sshUrl": "git@ssh.dev.azure.com:v3/fabrikam/Fabrikam/my-test-repo",
        "webUrl": "https://dev.azure.com/fabrikam/Fabrikam/_git/my-test-repo"
    });
    assert_eq!(
      azure.clone_url(&response),
      Some("git@ssh.dev.azure.com:v3/fabrikam/Fabrikam/my-test-repo".to_string())
    );
    assert_eq!(
      azure.web_url(&response),
      Some("https://dev.azure.com/fabrikam/Fabrikam/_git/my-test-repo".to_string())
    );

    let snake_case = json!({ "ssh_url": "git@example.com:r.git", "html_url": "https://example.com/r" });
    assert_eq!(azure.clone_url(&snake_case), Some("git@example.com:r.git".to_string()));
    assert_eq!(azure.web_url(&snake_case), Some("https://example.com/r".to_string()));

    assert_eq!(azure.clone_url(&json!({ "sshUrl": null })), None);
    assert_eq!(azure.web_url(&json!({})), None);
  }

  #[tokio::test]
  async fn test_missing_repository_reads_as_empty_object() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let azure = provider(&format!("{}/fabrikam", mock_server.uri()));
    let client = ApiClient::new(Credential::new(Platform::AzureDevOps, "abc123")?);

    Mock::given(method("GET"))
      .and(path(
        "/fabrikam/6ce954b1-ce1f-45d1-b94d-e6bf2464ba2c/_apis/git/repositories/my-test-repo",
      ))
      .and(query_param("api-version", "7.1"))
      .respond_with(ResponseTemplate::new(404).set_body_json(json!({
          "message": "TF401019: The Git repository with name or identifier my-test-repo does not exist or you do not have permissions for the operation you are attempting.",
          "typeKey": "GitRepositoryNotFoundException",
          "errorCode": 0
      })))
      .expect(1)
      .mount(&mock_server)
      .await;

    let body = client.send_with(&azure, &azure.lookup_request("my-test-repo")).await?;
    assert_eq!(body, "{}");

    Ok(())
  }

  #[tokio::test]
  async fn test_create_round_trip() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let azure = provider(&format!("{}/fabrikam", mock_server.uri()));
    let client = ApiClient::new(Credential::new(Platform::AzureDevOps, "abc123")?);

    Mock::given(method("POST"))
      .and(path("/fabrikam/6ce954b1-ce1f-45d1-b94d-e6bf2464ba2c/_apis/git/repositories"))
      .and(query_param("api-version", "7.1"))
      .and(header("Authorization", "Basic OmFiYzEyMw=="))
      .and(body_json(json!({
          "name": "my-test-repo",
          "project": { "id": "6ce954b1-ce1f-45d1-b94d-e6bf2464ba2c" }
      })))
      .respond_with(ResponseTemplate::new(201).set_body_json(json!({
          "id": "5febef5a-833d-4e14-b9c0-14cb638f91e6",
          "name": "my-test-repo",
          "sshUrl": "git@ssh.dev.azure.com:v3/fabrikam/Fabrikam/my-test-repo",
          "webUrl": "https://dev.azure.com/fabrikam/Fabrikam/_git/my-test-repo"
      })))
      .expect(1)
      .mount(&mock_server)
      .await;

    let body = client.send_with(&azure, &azure.create_request("my-test-repo")).await?;
    let response: Value = serde_json::from_str(&body)?;
    assert_eq!(
      azure.clone_url(&response).as_deref(),
      Some("git@ssh.dev.azure.com:v3/fabrikam/Fabrikam/my-test-repo")
    );

    Ok(())
  }
}
