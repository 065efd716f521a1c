//! Git fixtures for testing
//!
//! A bare repository in a temporary directory plays the part of the remote
//! that the API would have created, so pushes can be verified locally.

use std::path::Path;

use anyhow::{Context, Result};
use git2::Repository;
use tempfile::TempDir;

/// A bare git repository that accepts pushes from bootstrapped projects
pub struct BareRemoteGuard {
  /// The temporary directory containing the bare repository
  pub temp_dir: TempDir,
  /// The bare repository
  pub repo: Repository,
}

impl Default for BareRemoteGuard {
  fn default() -> Self {
    Self::new()
  }
}

impl BareRemoteGuard {
  pub fn new() -> Self {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let repo = Repository::init_bare(temp_dir.path()).expect("Failed to initialize bare repository");
    Self { temp_dir, repo }
  }

  /// Location usable as a git remote URL
  pub fn url(&self) -> String {
    self.temp_dir.path().display().to_string()
  }

  /// Whether `branch` has been pushed to this remote
  pub fn has_branch(&self, branch: &str) -> bool {
    self.repo.find_reference(&format!("refs/heads/{branch}")).is_ok()
  }
}

/// Name of the branch HEAD points at, even before the first commit
pub fn head_branch(repo_path: &Path) -> Result<String> {
  let repo = Repository::open(repo_path)
    .with_context(|| format!("Failed to open git repository at {}", repo_path.display()))?;
  let head = repo.find_reference("HEAD")?;
  let target = head.symbolic_target().context("HEAD is detached")?;
  Ok(target.trim_start_matches("refs/heads/").to_string())
}

/// URL configured for remote `name`
pub fn remote_url(repo_path: &Path, name: &str) -> Result<String> {
  let repo = Repository::open(repo_path)
    .with_context(|| format!("Failed to open git repository at {}", repo_path.display()))?;
  let remote = repo.find_remote(name)?;
  Ok(remote.url().context("Remote has no URL")?.to_string())
}

/// Message of the commit HEAD points at
pub fn head_commit_message(repo_path: &Path) -> Result<String> {
  let repo = Repository::open(repo_path)
    .with_context(|| format!("Failed to open git repository at {}", repo_path.display()))?;
  let commit = repo.head()?.peel_to_commit()?;
  Ok(commit.message().unwrap_or_default().trim().to_string())
}
