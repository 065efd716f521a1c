//! # GitHub Data Models
//!
//! Data structures for the GitHub API payloads reposeed reads.

use serde::Deserialize;

/// The authenticated GitHub user
#[derive(Debug, Deserialize, Clone)]
pub struct GitHubUser {
  pub login: String,
  pub id: u64,
  pub name: Option<String>,
}
