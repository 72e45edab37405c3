use crate::domain_model::Session;

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// Unresolvable username (absent or ambiguous) and rejected
    /// passwords collapse into this one variant so the API cannot be
    /// used to enumerate accounts.
    #[error("invalid credentials")]
    InvalidCredentials,
    /// Could not find out: the directory could not be scanned. Distinct
    /// from `InvalidCredentials` because it reports service health, not
    /// account state.
    #[error("identity provider unavailable: {0}")]
    Provider(String),
}

#[derive(Debug, Clone)]
pub struct LoginInput {
    pub username: String,
    pub password: String,
}

#[async_trait::async_trait]
pub trait AuthService: Send + Sync {
    async fn login(&self, request: LoginInput) -> Result<Session, AuthError>;
}
