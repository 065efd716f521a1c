//! # reposeed
//!
//! Creates a private repository on Azure DevOps or GitHub and bootstraps a
//! local Cargo project wired to it. The binary is a thin wrapper around
//! [`pipeline::run`]; the stages are exposed for testing.

pub mod bootstrap;
pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;
pub mod pipeline;
pub mod preflight;
pub mod remote;

pub use cli::Cli;
pub use config::{Config, HostSelection};
pub use errors::{ErrorCategory, SeedError};
pub use pipeline::{RunSummary, run};
