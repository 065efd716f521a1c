//! # GitHub Hosting Provider
//!
//! Repository lookup and creation against the GitHub REST API, for personal
//! accounts and organizations alike.

pub mod consts;
pub mod endpoints;
pub mod models;
pub mod provider;

pub use endpoints::users::get_current_user;
pub use models::GitHubUser;
pub use provider::{GitHubProvider, Owner, api_base_url};
