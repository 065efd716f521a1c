//! # GitHub API Endpoints
//!
//! Endpoints called outside the provider's lookup and creation requests.

pub mod users;
