//! # Azure DevOps Hosting Provider
//!
//! Repository lookup and creation against the Azure DevOps Git REST API,
//! scoped to one organization and project.

pub mod consts;
pub mod models;
mod provider;

pub use models::{CreateRepositoryParams, ProjectReference};
pub use provider::AzureDevOpsProvider;
