//! # Command Line Interface
//!
//! Flag definitions for the `reposeed` binary. Parsing is done by clap;
//! turning the parsed flags into a validated [`Config`](crate::config::Config)
//! happens in [`crate::config`].

use clap::builder::styling::AnsiColor;
use clap::builder::{NonEmptyStringValueParser, Styles};
use clap::{ArgAction, ArgGroup, Parser};
use reposeed_ado::consts::{ENV_AZURE_DEVOPS_ORG_URL, ENV_AZURE_DEVOPS_PROJECT_ID};
use reposeed_core::ColorMode;
use reposeed_gh::consts::ENV_GITHUB_ORG;

/// Create a remote repository and bootstrap a local project wired to it
#[derive(Parser, Debug)]
#[command(name = "reposeed")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(about = "Create a private remote repository and bootstrap a local Cargo project wired to it")]
#[command(
  long_about = "Creates a private repository on Azure DevOps or GitHub, scaffolds a new Cargo\n\
        project with 'cargo new', renames its branch to 'main' and registers the new\n\
        repository as 'origin'. With --autocommit the skeleton is also committed and pushed.\n\n\
        Tokens are read from AZURE_DEVOPS_PAT (Azure DevOps) or GITHUB_TOKEN (GitHub)."
)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(max_term_width = 120)]
#[command(group(
  ArgGroup::new("platform")
    .args(["azure", "github", "github_org"])
    .multiple(false)
))]
#[command(styles = Styles::styled()
    .header(AnsiColor::BrightGreen.on_default().bold().underline())
    .usage(AnsiColor::Green.on_default().bold())
    .literal(AnsiColor::BrightGreen.on_default().bold())
    .placeholder(AnsiColor::BrightWhite.on_default().italic())
    .valid(AnsiColor::Green.on_default())
    .invalid(AnsiColor::BrightRed.on_default().bold())
)]
pub struct Cli {
  /// Sets the level of verbosity (can be used multiple times)
  #[arg(
    short = 'v',
    long = "verbose",
    action = ArgAction::Count,
    long_help = "Sets the level of verbosity for tracing and logging output.\n\n\
             -v: Show info level messages\n\
             -vv: Show debug level messages\n\
             -vvv: Show trace level messages"
  )]
  pub verbose: u8,

  /// Controls when colored output is used
  #[arg(
    long,
    value_enum,
    ignore_case = true,
    default_value_t = ColorMode::Auto,
  )]
  pub colors: ColorMode,

  /// Create the repository on Azure DevOps (default)
  #[arg(long)]
  pub azure: bool,

  /// Create the repository under your personal GitHub account
  #[arg(long)]
  pub github: bool,

  /// Create the repository under a GitHub organization (see --org)
  #[arg(long = "github-org")]
  pub github_org: bool,

  /// Name of the repository and of the local project directory
  #[arg(long, value_name = "NAME", required = true, value_parser = NonEmptyStringValueParser::new())]
  pub project_name: String,

  /// Azure DevOps organization URL, e.g. https://dev.azure.com/fabrikam
  #[arg(long, value_name = "URL", env = ENV_AZURE_DEVOPS_ORG_URL, value_parser = NonEmptyStringValueParser::new())]
  pub org_url: Option<String>,

  /// Azure DevOps project id or name
  #[arg(long, value_name = "ID", env = ENV_AZURE_DEVOPS_PROJECT_ID, value_parser = NonEmptyStringValueParser::new())]
  pub project_id: Option<String>,

  /// GitHub organization that owns the repository
  #[arg(long, value_name = "ORG", env = ENV_GITHUB_ORG, value_parser = NonEmptyStringValueParser::new())]
  pub org: Option<String>,

  /// Stage, commit and push the generated project
  #[arg(long)]
  pub autocommit: bool,
}

#[cfg(test)]
mod tests {
  use clap::CommandFactory;
  use clap::error::ErrorKind;

  use super::*;

  fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
    Cli::try_parse_from(std::iter::once("reposeed").chain(args.iter().copied()))
  }

  #[test]
  fn test_cli_definition_is_valid() {
    Cli::command().debug_assert();
  }

  #[test]
  fn test_parses_github_flags() {
    let cli = parse(&["--github", "--project-name", "my-test-repo", "--autocommit", "-vv"]).unwrap();
    assert!(cli.github);
    assert!(!cli.azure);
    assert!(cli.autocommit);
    assert_eq!(cli.project_name, "my-test-repo");
    assert_eq!(cli.verbose, 2);
  }

  #[test]
  fn test_platform_flags_are_exclusive() {
    let err = parse(&["--github", "--github-org", "--project-name", "demo"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
  }

  #[test]
  fn test_value_flags_require_a_value() {
    let err = parse(&["--project-name"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidValue);

    let err = parse(&["--project-name", ""]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidValue);
  }

  #[test]
  fn test_project_name_is_required() {
    let err = parse(&["--github"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
  }

  #[test]
  fn test_unknown_flag_is_rejected() {
    let err = parse(&["--project-name", "demo", "--private"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnknownArgument);
  }

  #[test]
  fn test_help_and_version_short_circuit() {
    assert_eq!(parse(&["--help"]).unwrap_err().kind(), ErrorKind::DisplayHelp);
    assert_eq!(parse(&["--version"]).unwrap_err().kind(), ErrorKind::DisplayVersion);
  }
}
