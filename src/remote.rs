//! # Remote Stages
//!
//! Choosing the hosting provider, checking that the repository does not exist
//! yet, and creating it. Each stage blocks the pipeline until its request has
//! been answered.

use reposeed_ado::AzureDevOpsProvider;
use reposeed_core::provider::has_identifier;
use reposeed_core::{ApiClient, ApiError, HostingProvider, RemoteRepository};
use reposeed_gh::{GitHubProvider, Owner, api_base_url, get_current_user};
use serde_json::Value;
use tracing::{debug, info};
use url::Url;

use crate::config::HostSelection;
use crate::errors::{ErrorCategory, SeedError};

/// Pick the provider for `host`, resolving the GitHub login in personal mode
pub async fn select_provider(host: &HostSelection, client: &ApiClient) -> Result<Box<dyn HostingProvider>, SeedError> {
  let github_api = match host {
    HostSelection::AzureDevOps { .. } => None,
    _ => Some(api_base_url().map_err(|err| {
      SeedError::usage("Invalid GitHub API URL")
        .with_details(err.to_string())
        .with_suggestion("Unset GITHUB_API_URL or set it to a full URL such as https://api.github.com")
    })?),
  };
  provider_for(host, client, github_api).await
}

/// Build the provider for `host` against an explicit GitHub API base
pub async fn provider_for(
  host: &HostSelection,
  client: &ApiClient,
  github_api: Option<Url>,
) -> Result<Box<dyn HostingProvider>, SeedError> {
  let provider: Box<dyn HostingProvider> = match (host, github_api) {
    (HostSelection::AzureDevOps { org_url, project_id }, _) => {
      Box::new(AzureDevOpsProvider::new(org_url.clone(), project_id.as_str()))
    }
    (HostSelection::GitHubOrg { org }, Some(base_url)) => {
      Box::new(GitHubProvider::new(base_url, Owner::Organization(org.clone())))
    }
    (HostSelection::GitHubUser, Some(base_url)) => {
      let user = get_current_user(client, &base_url).await?;
      Box::new(GitHubProvider::new(base_url, Owner::User(user.login)))
    }
    (_, None) => return Err(SeedError::usage("GitHub API URL is not configured")),
  };

  debug!(platform = %provider.platform(), "Selected hosting provider");
  Ok(provider)
}

/// Fail if a repository called `name` already exists
pub async fn ensure_remote_absent(
  client: &ApiClient,
  provider: &dyn HostingProvider,
  name: &str,
) -> Result<(), SeedError> {
  info!(name, "Checking whether the remote repository exists");

  let body = client.send_with(provider, &provider.lookup_request(name)).await?;
  let response = parse_json(body)?;

  if has_identifier(&response) {
    return Err(
      SeedError::new(
        ErrorCategory::RemoteState,
        format!("Repository '{name}' already exists on {}", provider.platform()),
      )
      .with_suggestion("Choose a different project name"),
    );
  }

  Ok(())
}

/// Create the repository and read its connection URLs from the response
pub async fn create_remote_repository(
  client: &ApiClient,
  provider: &dyn HostingProvider,
  name: &str,
) -> Result<RemoteRepository, SeedError> {
  info!(name, "Creating the remote repository");

  let body = client.send_with(provider, &provider.create_request(name)).await?;
  let response = parse_json(body.clone())?;

  let ssh_url = provider
    .clone_url(&response)
    .ok_or_else(|| missing_url("SSH URL", &body))?;
  let web_url = provider.web_url(&response).ok_or_else(|| missing_url("web URL", &body))?;

  debug!(%ssh_url, %web_url, "Remote repository created");
  Ok(RemoteRepository { ssh_url, web_url })
}

fn parse_json(body: String) -> Result<Value, SeedError> {
  match serde_json::from_str(&body) {
    Ok(value) => Ok(value),
    Err(_) => Err(ApiError::InvalidJson { body }.into()),
  }
}

fn missing_url(what: &str, body: &str) -> SeedError {
  SeedError::api(format!("The creation response has no {what}"))
    .with_details(body.to_string())
    .with_suggestion("The remote repository may have been created; check the hosting platform before retrying")
}
