use reposeed_core::{ApiClient, ApiError, ApiRequest, Platform};
use tracing::{debug, instrument};
use url::Url;

use crate::models::GitHubUser;
use crate::provider::endpoint;

/// Get the user the token belongs to
#[instrument(skip(client), level = "debug")]
pub async fn get_current_user(client: &ApiClient, base_url: &Url) -> Result<GitHubUser, ApiError> {
  let request = ApiRequest::get(Platform::GitHub, endpoint(base_url, &["user"]));
  let body = client.send(&request).await?;

  let user = serde_json::from_str::<GitHubUser>(&body).map_err(|err| {
    debug!(error = %err, "Unexpected GitHub user payload");
    ApiError::MissingField { field: "login", body }
  })?;
  debug!(login = %user.login, "Resolved authenticated GitHub user");

  Ok(user)
}
