//! Constants shared by the reposeed crates.

/// User-Agent header value sent with every API request
pub const USER_AGENT: &str = concat!("reposeed/", env!("CARGO_PKG_VERSION"));

/// Environment variable holding the Azure DevOps personal access token
pub const ENV_AZURE_DEVOPS_PAT: &str = "AZURE_DEVOPS_PAT";

/// Environment variable holding the GitHub token
pub const ENV_GITHUB_TOKEN: &str = "GITHUB_TOKEN";

/// Accept header value for the GitHub REST API
pub const GITHUB_ACCEPT: &str = "application/vnd.github+json";

/// Header naming the GitHub REST API version
pub const GITHUB_API_VERSION_HEADER: &str = "X-GitHub-Api-Version";

/// GitHub REST API version requested on every call
pub const GITHUB_API_VERSION: &str = "2022-11-28";

/// Branch name the bootstrapped project is moved to
pub const DEFAULT_BRANCH: &str = "main";

/// Remote name registered for the created repository
pub const REMOTE_NAME: &str = "origin";

/// Commit message used by `--autocommit`
pub const INITIAL_COMMIT_MESSAGE: &str = "Initial commit";
