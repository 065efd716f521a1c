//! # reposeed CLI Entry Point
//!
//! Parses flags, sets up tracing and runs the pipeline. This is the only place
//! the process exits.

use std::env;
use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;
use reposeed::{Cli, Config, SeedError, run};
use reposeed_core::output::{format_label, format_project_name, format_url, print_info, print_success};
use tracing::debug;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> ExitCode {
  let cmd = match Cli::try_parse() {
    Ok(cmd) => cmd,
    Err(err) => {
      // Help and version go to stdout and succeed; every other parse error fails with 1
      let _ = err.print();
      return match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
        _ => ExitCode::FAILURE,
      };
    }
  };

  let level = match cmd.verbose {
    0 => tracing::Level::WARN,  // Default: warnings and errors
    1 => tracing::Level::INFO,  // -v: info, warnings, and errors
    2 => tracing::Level::DEBUG, // -vv: debug, info, warnings, and errors
    _ => tracing::Level::TRACE, // -vvv or more: trace and everything else
  };

  tracing_subscriber::registry()
    .with(fmt::layer().with_writer(std::io::stderr))
    .with(EnvFilter::from_default_env().add_directive(level.into()))
    .init();

  debug!(
    version = env!("CARGO_PKG_VERSION"),
    git_hash = option_env!("GIT_HASH").unwrap_or("unknown"),
    built_at = option_env!("BUILD_TIMESTAMP").unwrap_or("unknown"),
    "Tracing initialized with level: {}",
    level
  );

  cmd.colors.apply();

  match seed(&cmd) {
    Ok(()) => ExitCode::SUCCESS,
    Err(err) => {
      err.display_enhanced();
      ExitCode::from(err.exit_code)
    }
  }
}

fn seed(cmd: &Cli) -> Result<(), SeedError> {
  let workdir = env::current_dir().map_err(|err| {
    SeedError::environment("Unable to determine the current directory").with_details(err.to_string())
  })?;
  let config = Config::from_cli(cmd, workdir)?;
  debug!(?config, "Configuration resolved");

  let summary = run(&config)?;

  print_success(&format!(
    "Created {} and wired it to its new remote",
    format_project_name(&summary.project_name)
  ));
  print_info(&format!("{} {}", format_label("SSH URL:"), summary.remote.ssh_url));
  print_info(&format!("{} {}", format_label("Web URL:"), format_url(&summary.remote.web_url)));

  Ok(())
}
