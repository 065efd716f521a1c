//! Constants for the reposeed-ado provider.

/// REST API version requested on every call
pub const API_VERSION: &str = "7.1";

/// Environment variable holding the organization URL
pub const ENV_AZURE_DEVOPS_ORG_URL: &str = "AZURE_DEVOPS_ORG_URL";

/// Environment variable holding the project id
pub const ENV_AZURE_DEVOPS_PROJECT_ID: &str = "AZURE_DEVOPS_PROJECT_ID";

/// Field names holding the SSH clone URL, preferred spelling first
pub const SSH_URL_FIELDS: [&str; 2] = ["sshUrl", "ssh_url"];

/// Field names holding the browser URL, preferred spelling first
pub const WEB_URL_FIELDS: [&str; 2] = ["webUrl", "html_url"];
