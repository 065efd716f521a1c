//! # Run Configuration
//!
//! The immutable [`Config`] every stage reads. It is built once from the
//! parsed command line (which already folded in environment fallbacks) and
//! then passed explicitly through the pipeline.

use std::path::PathBuf;

use reposeed_ado::consts::{ENV_AZURE_DEVOPS_ORG_URL, ENV_AZURE_DEVOPS_PROJECT_ID};
use reposeed_core::Platform;
use reposeed_gh::consts::ENV_GITHUB_ORG;
use url::Url;

use crate::cli::Cli;
use crate::errors::SeedError;

/// Hosting platform and the addressing it needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostSelection {
  AzureDevOps { org_url: Url, project_id: String },
  GitHubUser,
  GitHubOrg { org: String },
}

impl HostSelection {
  pub fn platform(&self) -> Platform {
    match self {
      HostSelection::AzureDevOps { .. } => Platform::AzureDevOps,
      HostSelection::GitHubUser | HostSelection::GitHubOrg { .. } => Platform::GitHub,
    }
  }
}

/// Everything a run needs to know, fixed before the first stage starts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
  pub host: HostSelection,
  pub project_name: String,
  pub autocommit: bool,
  /// Directory the project directory is created in
  pub workdir: PathBuf,
}

impl Config {
  /// Build the configuration from parsed flags.
  ///
  /// Fails when the selected platform is missing its addressing values.
  pub fn from_cli(cli: &Cli, workdir: PathBuf) -> Result<Self, SeedError> {
    let host = if cli.github {
      HostSelection::GitHubUser
    } else if cli.github_org {
      let org = cli.org.clone().ok_or_else(|| {
        SeedError::usage("GitHub organization mode requires an organization")
          .with_suggestion(format!("Pass --org <ORG> or set {ENV_GITHUB_ORG}"))
      })?;
      HostSelection::GitHubOrg { org }
    } else {
      let org_url = cli.org_url.as_deref().ok_or_else(|| {
        SeedError::usage("Azure DevOps requires an organization URL")
          .with_suggestion(format!("Pass --org-url <URL> or set {ENV_AZURE_DEVOPS_ORG_URL}"))
      })?;
      let org_url = parse_org_url(org_url)?;
      let project_id = cli.project_id.clone().ok_or_else(|| {
        SeedError::usage("Azure DevOps requires a project id")
          .with_suggestion(format!("Pass --project-id <ID> or set {ENV_AZURE_DEVOPS_PROJECT_ID}"))
      })?;
      HostSelection::AzureDevOps { org_url, project_id }
    };

    Ok(Self {
      host,
      project_name: cli.project_name.clone(),
      autocommit: cli.autocommit,
      workdir,
    })
  }

  /// Where the project directory will be created
  pub fn project_dir(&self) -> PathBuf {
    self.workdir.join(&self.project_name)
  }
}

fn parse_org_url(raw: &str) -> Result<Url, SeedError> {
  let url = Url::parse(raw.trim()).map_err(|err| {
    SeedError::usage(format!("Invalid organization URL '{raw}'"))
      .with_details(err.to_string())
      .with_suggestion("Use the full URL, e.g. https://dev.azure.com/fabrikam")
  })?;

  if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
    return Err(
      SeedError::usage(format!("Invalid organization URL '{raw}'"))
        .with_details("The organization URL must be an http or https URL")
        .with_suggestion("Use the full URL, e.g. https://dev.azure.com/fabrikam"),
    );
  }

  Ok(url)
}
