//! # Error Reporting
//!
//! Every stage of a run returns [`SeedError`]. It carries a category, a one
//! line message, optional details and suggested fixes, and is rendered once by
//! `main`, which is the only place the process exits.

use std::fmt;

use reposeed_core::output::{print_error, print_info};
use reposeed_core::{ApiError, CredentialError, NameError};
use tracing::{debug, error};

/// Kinds of failure a run can end with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
  /// Bad or missing flags, invalid project name
  Usage,
  /// Required executables missing, local directory already present
  Environment,
  /// Missing, malformed or rejected token
  Authentication,
  /// The repository already exists on the hosting platform
  RemoteState,
  /// Unexpected API responses and transport failures
  Api,
  /// An external command exited unsuccessfully
  LocalExecution,
}

/// A failed run, with context for the user
#[derive(Debug, Clone)]
pub struct SeedError {
  /// The error category
  pub category: ErrorCategory,
  /// Primary error message
  pub message: String,
  /// Detailed description, such as captured command output
  pub details: Option<String>,
  /// Suggested actions to resolve the error
  pub suggestions: Vec<String>,
  /// Exit code to use when this error ends the process
  pub exit_code: u8,
}

impl fmt::Display for SeedError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.message)
  }
}

impl std::error::Error for SeedError {}

impl SeedError {
  pub fn new(category: ErrorCategory, message: impl Into<String>) -> Self {
    Self {
      category,
      message: message.into(),
      details: None,
      suggestions: Vec::new(),
      exit_code: 1,
    }
  }

  pub fn usage(message: impl Into<String>) -> Self {
    Self::new(ErrorCategory::Usage, message)
  }

  pub fn environment(message: impl Into<String>) -> Self {
    Self::new(ErrorCategory::Environment, message)
  }

  pub fn api(message: impl Into<String>) -> Self {
    Self::new(ErrorCategory::Api, message)
  }

  /// Add detailed context information
  pub fn with_details(mut self, details: impl Into<String>) -> Self {
    self.details = Some(details.into());
    self
  }

  /// Add a suggested action to resolve the error
  pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
    self.suggestions.push(suggestion.into());
    self
  }

  /// Add multiple suggestions
  pub fn with_suggestions<I, S>(mut self, suggestions: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.suggestions.extend(suggestions.into_iter().map(|s| s.into()));
    self
  }

  /// Display this error with its details and suggestions on stderr
  pub fn display_enhanced(&self) {
    error!(category = ?self.category, message = %self.message, "Run failed");

    print_error(&format!("Error: {}", self.message));

    if let Some(details) = &self.details {
      debug!("Error details: {}", details);
      print_info(&format!("Details: {}", details));
    }

    if !self.suggestions.is_empty() {
      print_info("Suggested solutions:");
      for (i, suggestion) in self.suggestions.iter().enumerate() {
        print_info(&format!("  {}. {}", i + 1, suggestion));
      }
    }
  }
}

impl From<ApiError> for SeedError {
  fn from(err: ApiError) -> Self {
    match err {
      ApiError::Unauthorized => SeedError::new(ErrorCategory::Authentication, err.to_string()).with_suggestions([
        "Check that the token has not expired or been revoked",
        "Create a new token and export it again",
      ]),
      ApiError::Forbidden => SeedError::new(ErrorCategory::Authentication, err.to_string()).with_suggestions([
        "Grant the token permission to read and create repositories",
        "Check that your account can create repositories in the target organization or project",
      ]),
      ApiError::BadRequest { body } => SeedError::api("The API rejected the request").with_details(body),
      ApiError::InvalidJson { body } => SeedError::api("The API returned a response that is not valid JSON")
        .with_details(body)
        .with_suggestion("Check that the organization URL or API URL points at the right server"),
      ApiError::MissingField { field, body } => {
        SeedError::api(format!("The API response has no usable '{field}'")).with_details(body)
      }
      ApiError::Transport { ref url, ref source } => SeedError::api(format!("Request to {url} failed"))
        .with_details(source.to_string())
        .with_suggestion("Check your network connection and the configured URLs"),
    }
  }
}

impl From<CredentialError> for SeedError {
  fn from(err: CredentialError) -> Self {
    let var = match &err {
      CredentialError::Missing { var, .. } | CredentialError::Empty { var, .. } | CredentialError::Malformed { var, .. } => {
        *var
      }
    };
    SeedError::new(ErrorCategory::Authentication, err.to_string())
      .with_suggestion(format!("Export a valid token, e.g. 'export {var}=<token>'"))
  }
}

impl From<NameError> for SeedError {
  fn from(err: NameError) -> Self {
    SeedError::usage(err.to_string()).with_suggestion("Example of a valid name: 'my-test-repo'")
  }
}
