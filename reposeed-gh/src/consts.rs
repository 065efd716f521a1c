//! Constants for the reposeed-gh provider

/// Base URL for the official SaaS GitHub API
pub const API_BASE_URL: &str = "https://api.github.com";

/// Environment variable overriding the API base URL (GitHub Enterprise)
pub const ENV_GITHUB_API_URL: &str = "GITHUB_API_URL";

/// Environment variable naming the organization for organization mode
pub const ENV_GITHUB_ORG: &str = "GITHUB_ORG";

/// Field names holding the SSH clone URL, preferred spelling first
pub const SSH_URL_FIELDS: [&str; 2] = ["ssh_url", "sshUrl"];

/// Field names holding the browser URL, preferred spelling first
pub const WEB_URL_FIELDS: [&str; 2] = ["html_url", "webUrl"];
