//! # Azure DevOps Data Models
//!
//! Request payloads for the Git repositories API.

use serde::Serialize;

/// Body of a repository creation request
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct CreateRepositoryParams {
  pub name: String,
  pub project: ProjectReference,
}

/// Project the repository is created in
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct ProjectReference {
  pub id: String,
}

impl CreateRepositoryParams {
  pub fn new(name: &str, project_id: &str) -> Self {
    Self {
      name: name.to_string(),
      project: ProjectReference {
        id: project_id.to_string(),
      },
    }
  }
}
