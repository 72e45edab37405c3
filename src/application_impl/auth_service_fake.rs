use crate::application_port::{AuthError, AuthService, LoginInput};
use crate::domain_model::Session;

#[derive(Debug)]
pub struct FakeAuthService;

impl FakeAuthService {
    pub fn new() -> Self {
        Self
    }
}

// Minimal fake implementation for local development without a
// reachable identity provider: any non-empty credential pair logs in.
#[async_trait::async_trait]
impl AuthService for FakeAuthService {
    async fn login(&self, request: LoginInput) -> Result<Session, AuthError> {
        let username = request.username.trim();
        if username.is_empty() || request.password.is_empty() {
            return Err(AuthError::InvalidCredentials);
        }
        Ok(Session(serde_json::json!({
            "access_token": format!("fake-access-token:{}", username),
            "token_type": "bearer",
            "expires_in": 3600,
            "user": {
                "id": get_fake_id(username),
                "email": format!("{}@fake.invalid", username),
            },
        })))
    }
}

fn get_fake_id(username: &str) -> uuid::Uuid {
    uuid::Uuid::new_v5(&uuid::Uuid::NAMESPACE_OID, username.as_bytes())
}
