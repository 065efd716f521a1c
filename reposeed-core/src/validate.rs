//! Project name validation and the Cargo package name derived from it.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// Lowercase alphanumeric first and last character, 2 to 64 characters in
/// total, interior characters may also be `-` or `_`.
static PROJECT_NAME: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"^[a-z0-9][a-z0-9_-]{0,62}[a-z0-9]$").expect("valid project name pattern"));

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NameError {
  #[error("Project name cannot be empty")]
  Empty,

  #[error(
    "Invalid project name '{0}': use 2-64 lowercase letters, digits, '-' or '_', starting and ending with a letter or digit"
  )]
  InvalidShape(String),
}

/// Check that `name` is usable as both a repository and a directory name
pub fn validate_project_name(name: &str) -> Result<(), NameError> {
  if name.is_empty() {
    return Err(NameError::Empty);
  }
  if !PROJECT_NAME.is_match(name) {
    return Err(NameError::InvalidShape(name.to_string()));
  }
  Ok(())
}

/// Names `cargo new` refuses for a binary package: Rust keywords, the built-in
/// `test` crate, build directory names, and Windows device names.
const RESERVED_PACKAGE_NAMES: &[&str] = &[
  "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "crate", "do", "dyn", "else",
  "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl", "in", "let", "loop", "macro", "match", "mod",
  "move", "mut", "override", "priv", "pub", "ref", "return", "self", "static", "struct", "super", "trait", "true",
  "try", "type", "typeof", "unsafe", "unsized", "use", "virtual", "where", "while", "yield", "test", "deps",
  "examples", "build", "incremental", "con", "prn", "aux", "nul", "com1", "com2", "com3", "com4", "com5", "com6",
  "com7", "com8", "com9", "lpt1", "lpt2", "lpt3", "lpt4", "lpt5", "lpt6", "lpt7", "lpt8", "lpt9",
];

/// Cargo package name for a validated project name.
///
/// The directory and repository keep the project name; only the package name
/// in `Cargo.toml` changes. A leading digit gets a `_` prefix and a reserved
/// name gets a `-rs` suffix.
pub fn package_name(project_name: &str) -> Cow<'_, str> {
  if project_name.starts_with(|c: char| c.is_ascii_digit()) {
    Cow::Owned(format!("_{project_name}"))
  } else if RESERVED_PACKAGE_NAMES.contains(&project_name) {
    Cow::Owned(format!("{project_name}-rs"))
  } else {
    Cow::Borrowed(project_name)
  }
}
