//! # Local Bootstrap
//!
//! Scaffolds the Cargo project next to the other projects in the working
//! directory and wires it to the new remote. Steps run one after another and
//! the first failing step ends the run; nothing is rolled back.

use std::borrow::Cow;
use std::fmt;
use std::path::Path;

use reposeed_core::consts::{DEFAULT_BRANCH, INITIAL_COMMIT_MESSAGE, REMOTE_NAME};
use reposeed_core::{RemoteRepository, package_name, print_info};
use tracing::{debug, info};

use crate::commands::{CARGO_EXECUTABLE, GIT_EXECUTABLE, execute_command};
use crate::config::Config;
use crate::errors::{ErrorCategory, SeedError};

/// One local command of the bootstrap sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapStep {
  Scaffold,
  RenameBranch,
  AddRemote,
  StageAll,
  Commit,
  Push,
}

impl BootstrapStep {
  /// Steps for a run, in execution order
  pub fn sequence(autocommit: bool) -> Vec<BootstrapStep> {
    let mut steps = vec![BootstrapStep::Scaffold, BootstrapStep::RenameBranch, BootstrapStep::AddRemote];
    if autocommit {
      steps.extend([BootstrapStep::StageAll, BootstrapStep::Commit, BootstrapStep::Push]);
    }
    steps
  }

  /// Program and arguments for this step
  pub fn command<'a>(self, target: &'a ScaffoldTarget<'a>, remote: &'a RemoteRepository) -> (&'static str, Vec<&'a str>) {
    match self {
      BootstrapStep::Scaffold => (
        CARGO_EXECUTABLE,
        vec!["new", "--vcs", "git", "--name", target.package_name.as_ref(), target.project_name],
      ),
      BootstrapStep::RenameBranch => (GIT_EXECUTABLE, vec!["branch", "-M", DEFAULT_BRANCH]),
      BootstrapStep::AddRemote => (GIT_EXECUTABLE, vec!["remote", "add", REMOTE_NAME, remote.ssh_url.as_str()]),
      BootstrapStep::StageAll => (GIT_EXECUTABLE, vec!["add", "--all"]),
      BootstrapStep::Commit => (GIT_EXECUTABLE, vec!["commit", "-m", INITIAL_COMMIT_MESSAGE]),
      BootstrapStep::Push => (GIT_EXECUTABLE, vec!["push", "--set-upstream", REMOTE_NAME, DEFAULT_BRANCH]),
    }
  }

  /// Scaffolding runs in the working directory, everything else inside the
  /// new project
  fn runs_in_project(self) -> bool {
    !matches!(self, BootstrapStep::Scaffold)
  }
}

impl fmt::Display for BootstrapStep {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let label = match self {
      BootstrapStep::Scaffold => "scaffold the project",
      BootstrapStep::RenameBranch => "rename the branch to main",
      BootstrapStep::AddRemote => "add the origin remote",
      BootstrapStep::StageAll => "stage the project files",
      BootstrapStep::Commit => "create the initial commit",
      BootstrapStep::Push => "push to origin",
    };
    write!(f, "{label}")
  }
}

/// Directory and Cargo package name of the scaffolded project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldTarget<'a> {
  pub project_name: &'a str,
  pub package_name: Cow<'a, str>,
}

impl<'a> ScaffoldTarget<'a> {
  pub fn new(project_name: &'a str) -> Self {
    Self {
      project_name,
      package_name: package_name(project_name),
    }
  }
}

/// Run the bootstrap sequence for `config` against `remote`
pub fn bootstrap_local(config: &Config, remote: &RemoteRepository) -> Result<(), SeedError> {
  let project_dir = config.project_dir();
  let target = ScaffoldTarget::new(&config.project_name);

  if target.package_name != target.project_name {
    debug!(package = %target.package_name, "Project name is not a valid package name");
    print_info(&format!(
      "Cargo package will be named '{}' since '{}' is not a valid package name",
      target.package_name, target.project_name
    ));
  }

  for step in BootstrapStep::sequence(config.autocommit) {
    let dir = if step.runs_in_project() {
      project_dir.as_path()
    } else {
      config.workdir.as_path()
    };
    run_step(step, &target, remote, dir)?;
  }

  Ok(())
}

fn run_step(step: BootstrapStep, target: &ScaffoldTarget<'_>, remote: &RemoteRepository, dir: &Path) -> Result<(), SeedError> {
  info!(%step, dir = %dir.display(), "Running bootstrap step");
  let (program, args) = step.command(target, remote);

  let result = execute_command(program, &args, dir).map_err(|err| {
    SeedError::new(ErrorCategory::LocalExecution, format!("Failed to {step}"))
      .with_details(format!("{err:#}"))
      .with_suggestion(format!("Check that {program} is installed and runnable"))
  })?;

  if !result.success {
    return Err(
      SeedError::new(
        ErrorCategory::LocalExecution,
        format!("Failed to {step}: '{program} {}' exited unsuccessfully", args.join(" ")),
      )
      .with_details(result.output),
    );
  }

  Ok(())
}
