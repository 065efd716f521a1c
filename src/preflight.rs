//! # Preflight Checks
//!
//! Local checks that must pass before any network call: required executables
//! on `PATH`, project name shape, target directory absent, and a shape-valid
//! credential for the selected platform. They run in that order and stop at
//! the first failure.

use std::path::Path;

use reposeed_core::{Credential, validate_project_name};
use tracing::{debug, info};

use crate::commands::REQUIRED_EXECUTABLES;
use crate::config::Config;
use crate::errors::SeedError;

/// Run every preflight check and return the credential for the run
pub fn run_preflight(config: &Config) -> Result<Credential, SeedError> {
  info!("Running preflight checks");

  check_required_tools(&REQUIRED_EXECUTABLES)?;
  validate_project_name(&config.project_name)?;
  ensure_target_absent(&config.project_dir())?;

  let credential = Credential::from_env(config.host.platform())?;
  debug!(platform = %credential.platform(), "Credential loaded");

  Ok(credential)
}

/// Fail naming the first tool that does not resolve on `PATH`
pub fn check_required_tools(tools: &[&str]) -> Result<(), SeedError> {
  for tool in tools {
    match which::which(tool) {
      Ok(path) => debug!(tool, path = %path.display(), "Found executable"),
      Err(err) => {
        return Err(
          SeedError::environment(format!("Required tool '{tool}' was not found on PATH"))
            .with_details(err.to_string())
            .with_suggestion(format!("Install {tool} and make sure it is on your PATH")),
        );
      }
    }
  }
  Ok(())
}

/// Fail if anything already exists at the project path
pub fn ensure_target_absent(project_dir: &Path) -> Result<(), SeedError> {
  // symlink_metadata also catches dangling symlinks
  if project_dir.symlink_metadata().is_ok() {
    return Err(
      SeedError::environment(format!("'{}' already exists", project_dir.display()))
        .with_suggestion("Choose a different project name or remove the existing entry"),
    );
  }
  Ok(())
}
