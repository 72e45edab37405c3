use crate::domain_model::Session;

#[derive(Debug, thiserror::Error)]
pub enum VerifyError {
    /// The provider rejected the credentials (or returned no session).
    /// Any provider-side detail stays in `detail` for logging and is
    /// never forwarded to callers.
    #[error("credentials rejected")]
    Rejected { detail: Option<String> },
    #[error("verification request failed: {0}")]
    Transport(String),
}

/// The identity provider's standard email+password sign-in, invoked
/// with the public (anon) key. The returned session is opaque.
#[async_trait::async_trait]
pub trait CredentialVerifier: Send + Sync {
    async fn sign_in_with_password(&self, email: &str, password: &str)
    -> Result<Session, VerifyError>;
}
