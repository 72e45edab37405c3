use crate::application_port::{AuthError, AuthService, LoginInput};
use crate::domain_model::{NormalizedUsername, ResolutionResult, Session};
use crate::domain_port::{CredentialVerifier, DirectoryError, UserDirectory, VerifyError};
use std::sync::Arc;
use tracing::{debug, warn};

/// Bounds on a single directory scan. With the defaults at most
/// 200 * 50 = 10_000 records are examined per login attempt.
#[derive(Debug, Clone, Copy)]
pub struct ScanPolicy {
    pub per_page: u32,
    pub max_pages: u32,
}

impl Default for ScanPolicy {
    fn default() -> Self {
        Self {
            per_page: 200,
            max_pages: 50,
        }
    }
}

/// Username login against a provider that only verifies email+password:
/// resolve the username to exactly one account via the admin directory,
/// then delegate the password check for that account's email.
pub struct RealAuthService {
    directory: Arc<dyn UserDirectory>,
    verifier: Arc<dyn CredentialVerifier>,
    scan: ScanPolicy,
}

impl RealAuthService {
    pub fn new(
        directory: Arc<dyn UserDirectory>,
        verifier: Arc<dyn CredentialVerifier>,
        scan: ScanPolicy,
    ) -> Self {
        Self {
            directory,
            verifier,
            scan,
        }
    }

    /// Walk the directory page by page, accumulating every account
    /// whose normalized username equals the normalized query.
    ///
    /// Stops at the first short page (directory exhausted), as soon as
    /// a second match is seen (ambiguity cannot be resolved by reading
    /// further), or at the page ceiling. A page fetch error aborts the
    /// scan; partial results are never returned.
    pub async fn resolve(&self, username: &str) -> Result<ResolutionResult, DirectoryError> {
        let target = NormalizedUsername::new(username);
        if target.is_empty() {
            // An empty name can never match; do not spend a single call.
            return Ok(ResolutionResult::NoMatch);
        }

        let mut matches = Vec::new();
        for page in 1..=self.scan.max_pages {
            let users = self.directory.list_users(page, self.scan.per_page).await?;
            let exhausted = (users.len() as u32) < self.scan.per_page;

            for user in users {
                let stored = match user.stored_username() {
                    Some(s) => NormalizedUsername::new(s),
                    None => continue,
                };
                if stored == target {
                    matches.push(user);
                }
            }

            if exhausted || matches.len() > 1 {
                break;
            }
        }

        Ok(match matches.len() {
            0 => ResolutionResult::NoMatch,
            1 => ResolutionResult::Unique(matches.remove(0)),
            n => {
                debug!(username = %target, count = n, "username is ambiguous");
                ResolutionResult::Ambiguous
            }
        })
    }
}

#[async_trait::async_trait]
impl AuthService for RealAuthService {
    async fn login(&self, request: LoginInput) -> Result<Session, AuthError> {
        let LoginInput { username, password } = request;

        let resolved = self
            .resolve(&username)
            .await
            .map_err(|e| AuthError::Provider(e.to_string()))?;

        let user = match resolved {
            ResolutionResult::Unique(user) => user,
            ResolutionResult::NoMatch | ResolutionResult::Ambiguous => {
                return Err(AuthError::InvalidCredentials);
            }
        };

        // An account with no email cannot be delegated to the provider's
        // password grant; indistinguishable from a bad password.
        let email = match user.email.as_deref() {
            Some(email) => email,
            None => {
                debug!(user_id = %user.id, "resolved account has no email");
                return Err(AuthError::InvalidCredentials);
            }
        };

        match self.verifier.sign_in_with_password(email, &password).await {
            Ok(session) => Ok(session),
            Err(VerifyError::Rejected { detail }) => {
                if let Some(detail) = detail {
                    debug!(user_id = %user.id, %detail, "provider rejected credentials");
                }
                Err(AuthError::InvalidCredentials)
            }
            Err(VerifyError::Transport(e)) => {
                warn!(user_id = %user.id, error = %e, "verification call failed");
                Err(AuthError::InvalidCredentials)
            }
        }
    }
}
