//! Test utilities shared across the reposeed workspace
//!
//! This crate provides common testing infrastructure including:
//! - Environment variable isolation ([`EnvVarGuard`])
//! - Scratch parent directories for new projects ([`WorkspaceGuard`])
//! - Bare git repositories standing in for the created remote
//!   ([`BareRemoteGuard`])
//!
//! The clippy dead_code lint is disabled for this crate because test utilities
//! may not be used by all tests, and the compiler cannot detect usage across
//! crate boundaries in development dependencies.

#![allow(dead_code)]

pub mod env;
pub mod git;
pub mod workspace;

// Re-export commonly used items
pub use env::EnvVarGuard;
pub use git::{BareRemoteGuard, head_branch, head_commit_message, remote_url};
pub use workspace::WorkspaceGuard;
