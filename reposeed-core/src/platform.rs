//! # Hosting Platforms and Credentials
//!
//! Identifies the supported hosting platforms and loads the token each one
//! authenticates with. Tokens come from the environment only and are checked
//! for a plausible shape before any request is made; the check is syntactic
//! and never contacts the provider.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::consts::{ENV_AZURE_DEVOPS_PAT, ENV_GITHUB_TOKEN};

static AZURE_PAT_SHAPE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]+$").expect("valid Azure DevOps PAT pattern"));

static GITHUB_TOKEN_SHAPE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"^(ghp|gho)_[A-Za-z0-9]+$").expect("valid GitHub token pattern"));

/// A hosting platform reposeed can create repositories on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
  AzureDevOps,
  GitHub,
}

impl Platform {
  /// Environment variable the platform's token is read from
  pub const fn token_env_var(self) -> &'static str {
    match self {
      Platform::AzureDevOps => ENV_AZURE_DEVOPS_PAT,
      Platform::GitHub => ENV_GITHUB_TOKEN,
    }
  }

  /// Human readable description of the accepted token shape
  pub const fn token_shape_hint(self) -> &'static str {
    match self {
      Platform::AzureDevOps => "an alphanumeric personal access token",
      Platform::GitHub => "a token starting with 'ghp_' or 'gho_' followed by letters and digits",
    }
  }

  /// Whether `token` has the shape this platform issues
  pub fn accepts_token_shape(self, token: &str) -> bool {
    match self {
      Platform::AzureDevOps => AZURE_PAT_SHAPE.is_match(token),
      Platform::GitHub => GITHUB_TOKEN_SHAPE.is_match(token),
    }
  }
}

impl fmt::Display for Platform {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Platform::AzureDevOps => write!(f, "Azure DevOps"),
      Platform::GitHub => write!(f, "GitHub"),
    }
  }
}

/// Reasons a credential could not be loaded
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CredentialError {
  #[error("{platform} token not found: environment variable '{var}' is not set")]
  Missing { platform: Platform, var: &'static str },

  #[error("{platform} token in '{var}' is empty")]
  Empty { platform: Platform, var: &'static str },

  #[error("{platform} token in '{var}' is malformed: expected {hint}")]
  Malformed {
    platform: Platform,
    var: &'static str,
    hint: &'static str,
  },
}

/// An API token scoped to one platform
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
  platform: Platform,
  token: String,
}

impl Credential {
  /// Build a credential after checking the token shape
  pub fn new(platform: Platform, token: impl Into<String>) -> Result<Self, CredentialError> {
    let token = token.into();
    let var = platform.token_env_var();

    if token.is_empty() {
      return Err(CredentialError::Empty { platform, var });
    }
    if !platform.accepts_token_shape(&token) {
      return Err(CredentialError::Malformed {
        platform,
        var,
        hint: platform.token_shape_hint(),
      });
    }

    Ok(Self { platform, token })
  }

  /// Load the platform's token from its environment variable
  pub fn from_env(platform: Platform) -> Result<Self, CredentialError> {
    let var = platform.token_env_var();
    match std::env::var(var) {
      Ok(token) => Self::new(platform, token),
      Err(_) => Err(CredentialError::Missing { platform, var }),
    }
  }

  pub fn platform(&self) -> Platform {
    self.platform
  }

  pub fn token(&self) -> &str {
    &self.token
  }
}

impl fmt::Debug for Credential {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Credential")
      .field("platform", &self.platform)
      .field("token", &"<redacted>")
      .finish()
  }
}

#[cfg(test)]
mod tests {
  use reposeed_test_utils::EnvVarGuard;
  use test_case::test_case;

  use super::*;

  #[test_case("abc123" ; "lowercase and digits")]
  #[test_case("ABCdef0123456789" ; "mixed case")]
  #[test_case("7" ; "single digit")]
  fn azure_accepts_alphanumeric_pat(token: &str) {
    assert!(Platform::AzureDevOps.accepts_token_shape(token));
  }

  #[test_case("" ; "empty")]
  #[test_case("abc-123" ; "hyphen")]
  #[test_case("abc 123" ; "space")]
  #[test_case("ghp_abc" ; "underscore")]
  #[test_case("abc123\n" ; "trailing newline")]
  fn azure_rejects_other_shapes(token: &str) {
    assert!(!Platform::AzureDevOps.accepts_token_shape(token));
  }

  #[test_case("ghp_abc123" ; "personal token")]
  #[test_case("gho_XYZ789" ; "oauth token")]
  fn github_accepts_known_prefixes(token: &str) {
    assert!(Platform::GitHub.accepts_token_shape(token));
  }

  #[test_case("" ; "empty")]
  #[test_case("ghp_" ; "prefix only")]
  #[test_case("ghs_abc123" ; "unknown prefix")]
  #[test_case("github_pat_abc123" ; "fine grained prefix")]
  #[test_case("abc123" ; "no prefix")]
  #[test_case("ghp_abc-123" ; "hyphen in body")]
  #[test_case(" ghp_abc123" ; "leading space")]
  fn github_rejects_other_shapes(token: &str) {
    assert!(!Platform::GitHub.accepts_token_shape(token));
  }

  #[test]
  fn test_credential_new_reports_empty_token() {
    let err = Credential::new(Platform::GitHub, "").unwrap_err();
    assert_eq!(
      err,
      CredentialError::Empty {
        platform: Platform::GitHub,
        var: ENV_GITHUB_TOKEN
      }
    );
  }

  #[test]
  fn test_credential_new_reports_malformed_token() {
    let err = Credential::new(Platform::AzureDevOps, "not a pat").unwrap_err();
    assert!(matches!(err, CredentialError::Malformed { .. }));
    assert!(err.to_string().contains(ENV_AZURE_DEVOPS_PAT));
  }

  #[test]
  fn test_credential_debug_redacts_token() {
    let credential = Credential::new(Platform::GitHub, "ghp_secret123").unwrap();
    let rendered = format!("{credential:?}");
    assert!(!rendered.contains("ghp_secret123"));
    assert!(rendered.contains("<redacted>"));
  }

  #[test]
  fn test_credential_from_env() {
    let guard = EnvVarGuard::new(ENV_GITHUB_TOKEN);

    guard.remove();
    assert!(matches!(
      Credential::from_env(Platform::GitHub),
      Err(CredentialError::Missing { .. })
    ));

    guard.set("ghp_fromenv42");
    let credential = Credential::from_env(Platform::GitHub).unwrap();
    assert_eq!(credential.token(), "ghp_fromenv42");
    assert_eq!(credential.platform(), Platform::GitHub);
  }
}
