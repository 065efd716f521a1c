//! # External Command Helpers
//!
//! Spawning `git` and `cargo` sub-processes and capturing their output.
//! Commands always run with an explicit working directory; the process's own
//! current directory is never changed.

use std::path::Path;
use std::process::Command;

use anyhow::{Context, Result};
use tracing::{debug, trace};

pub const GIT_EXECUTABLE: &str = "git";
pub const CARGO_EXECUTABLE: &str = "cargo";

/// Executables a run cannot do without, checked before any remote call
pub const REQUIRED_EXECUTABLES: [&str; 2] = [GIT_EXECUTABLE, CARGO_EXECUTABLE];

/// Output from a command, including both the combined stdout/stderr text
/// and whether the process exited successfully.
#[derive(Debug, Clone)]
pub struct CommandOutput {
  /// Combined stdout and stderr text.
  pub output: String,
  /// Whether the command exited with status code 0.
  pub success: bool,
}

/// Execute `program` with `args` in `dir` and return its combined output along
/// with the exit status.
///
/// Only a failure to spawn is an `Err`; a non-zero exit is reported through
/// [`CommandOutput::success`].
pub fn execute_command(program: &str, args: &[&str], dir: &Path) -> Result<CommandOutput> {
  debug!(program, ?args, dir = %dir.display(), "Running command");

  let output = Command::new(program)
    .args(args)
    .current_dir(dir)
    .output()
    .with_context(|| format!("Failed to execute {program} {args:?}"))?;

  let success = output.status.success();
  let stdout = String::from_utf8_lossy(&output.stdout);
  let stderr = String::from_utf8_lossy(&output.stderr);

  let mut combined = String::new();
  if !stdout.is_empty() {
    combined.push_str(stdout.trim_end());
  }
  if !stderr.is_empty() {
    if !combined.is_empty() {
      combined.push('\n');
    }
    combined.push_str(stderr.trim_end());
  }

  trace!(program, success, output = %combined, "Command finished");

  Ok(CommandOutput {
    output: combined,
    success,
  })
}
