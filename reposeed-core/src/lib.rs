//! # Reposeed Core Library
//!
//! Shared building blocks for reposeed: the platform-aware API client and its
//! response policy, the [`HostingProvider`] abstraction implemented by each
//! hosting platform crate, credential loading, input validation, and terminal
//! output helpers.

pub mod client;
pub mod consts;
pub mod output;
pub mod platform;
pub mod provider;
pub mod response;
pub mod validate;

pub use client::{ApiClient, ApiRequest};
pub use output::{ColorMode, print_error, print_info, print_success, print_warning};
pub use platform::{Credential, CredentialError, Platform};
pub use provider::{HostingProvider, RemoteRepository};
pub use response::{ApiError, classify_response};
pub use validate::{NameError, package_name, validate_project_name};
