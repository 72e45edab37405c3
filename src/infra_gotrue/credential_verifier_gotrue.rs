use crate::domain_model::Session;
use crate::domain_port::{CredentialVerifier, VerifyError};
use reqwest::Client;

/// Password grant on a GoTrue-compatible auth server
/// (`POST /auth/v1/token?grant_type=password`). Authenticated with the
/// public anon key only; the privileged key is never used here.
pub struct GoTrueCredentialVerifier {
    http: Client,
    base_url: String,
    anon_key: String,
}

impl GoTrueCredentialVerifier {
    pub fn new(http: Client, base_url: &str, anon_key: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            anon_key: anon_key.to_string(),
        }
    }
}

#[async_trait::async_trait]
impl CredentialVerifier for GoTrueCredentialVerifier {
    async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Session, VerifyError> {
        let url = format!("{}/auth/v1/token", self.base_url);
        let response = self
            .http
            .post(&url)
            .query(&[("grant_type", "password")])
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await
            .map_err(|e| VerifyError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_client_error() {
            let body = response.text().await.unwrap_or_default();
            return Err(VerifyError::Rejected {
                detail: rejection_detail(&body),
            });
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(VerifyError::Transport(format!(
                "status {}: {}",
                status.as_u16(),
                body
            )));
        }

        let session: serde_json::Value = response
            .json()
            .await
            .map_err(|e| VerifyError::Transport(e.to_string()))?;

        // A 200 without a token is still not a session.
        if session.get("access_token").is_none() {
            return Err(VerifyError::Rejected {
                detail: Some("response carried no session".to_string()),
            });
        }

        Ok(Session(session))
    }
}

/// Pull the human-readable reason out of a GoTrue error body. The field
/// name varies across server versions.
fn rejection_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    for key in ["error_description", "msg", "message", "error"] {
        if let Some(text) = value.get(key).and_then(|v| v.as_str()) {
            return Some(text.to_string());
        }
    }
    None
}
