//! # Pipeline
//!
//! Runs the stages of a seed in order: preflight, provider selection, remote
//! existence check, remote creation and local bootstrap. The first failure
//! stops the run and is returned to `main`.

use anyhow::Context;
use reposeed_core::output::format_url;
use reposeed_core::{ApiClient, RemoteRepository, print_warning};
use tokio::runtime::Runtime;
use tracing::{info, warn};

use crate::bootstrap::bootstrap_local;
use crate::config::Config;
use crate::errors::SeedError;
use crate::preflight::run_preflight;
use crate::remote::{create_remote_repository, ensure_remote_absent, select_provider};

/// What a successful run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
  pub project_name: String,
  pub remote: RemoteRepository,
}

/// Execute every stage for `config`
pub fn run(config: &Config) -> Result<RunSummary, SeedError> {
  let credential = run_preflight(config)?;
  let client = ApiClient::new(credential);

  let rt = create_runtime()?;
  let remote = rt.block_on(async {
    let provider = select_provider(&config.host, &client).await?;
    ensure_remote_absent(&client, provider.as_ref(), &config.project_name).await?;
    create_remote_repository(&client, provider.as_ref(), &config.project_name).await
  })?;
  info!(ssh_url = %remote.ssh_url, "Remote repository ready");

  if let Err(err) = bootstrap_local(config, &remote) {
    warn!(web_url = %remote.web_url, "Remote repository left in place after a failed bootstrap");
    print_warning(&format!(
      "The remote repository was created and left in place: {}",
      format_url(&remote.web_url)
    ));
    return Err(err);
  }
  info!(project = %config.project_name, "Local project bootstrapped");

  Ok(RunSummary {
    project_name: config.project_name.clone(),
    remote,
  })
}

fn create_runtime() -> Result<Runtime, SeedError> {
  Runtime::new()
    .context("Failed to create async runtime")
    .map_err(|err| SeedError::environment(err.to_string()).with_details(format!("{err:#}")))
}
