use crate::domain_model::DirectoryUser;
use crate::domain_port::{DirectoryError, UserDirectory};
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct ListUsersResponse {
    #[serde(default)]
    users: Vec<DirectoryUser>,
}

/// Admin user listing on a GoTrue-compatible auth server
/// (`GET /auth/v1/admin/users`). Authenticated with the service-role
/// key; this key never leaves the directory-scanning path.
pub struct GoTrueUserDirectory {
    http: Client,
    base_url: String,
    service_role_key: String,
}

impl GoTrueUserDirectory {
    pub fn new(http: Client, base_url: &str, service_role_key: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            service_role_key: service_role_key.to_string(),
        }
    }
}

#[async_trait::async_trait]
impl UserDirectory for GoTrueUserDirectory {
    async fn list_users(
        &self,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<DirectoryUser>, DirectoryError> {
        let url = format!("{}/auth/v1/admin/users", self.base_url);
        debug!(page, per_page, "fetching directory page");

        // No retries: a retried fetch could straddle a page-boundary
        // change mid-scan and yield inconsistent partial results.
        let response = self
            .http
            .get(&url)
            .query(&[("page", page), ("per_page", per_page)])
            .header("apikey", &self.service_role_key)
            .bearer_auth(&self.service_role_key)
            .send()
            .await
            .map_err(|e| DirectoryError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DirectoryError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body: ListUsersResponse = response
            .json()
            .await
            .map_err(|e| DirectoryError::Malformed(e.to_string()))?;
        Ok(body.users)
    }
}
