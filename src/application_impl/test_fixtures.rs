//! In-memory stand-ins for the identity-provider ports, shared by the
//! service and API tests.

use crate::domain_model::{DirectoryUser, Session, UserId, UserMetadata};
use crate::domain_port::{
    CredentialVerifier, DirectoryError, UserDirectory, VerifyError,
};
use std::sync::atomic::{AtomicU32, Ordering};

pub fn account(username: &str, email: &str) -> DirectoryUser {
    DirectoryUser {
        id: UserId(uuid::Uuid::new_v4()),
        email: Some(email.to_string()),
        raw_user_meta_data: Some(UserMetadata {
            username: Some(username.to_string()),
        }),
        user_metadata: None,
    }
}

/// Same account shape as `account` but with the username stored in the
/// self-service metadata location.
pub fn account_in_user_metadata(username: &str, email: &str) -> DirectoryUser {
    DirectoryUser {
        id: UserId(uuid::Uuid::new_v4()),
        email: Some(email.to_string()),
        raw_user_meta_data: None,
        user_metadata: Some(UserMetadata {
            username: Some(username.to_string()),
        }),
    }
}

enum DirectoryMode {
    Pages(Vec<Vec<DirectoryUser>>),
    /// Every page is a full page of unrelated filler accounts.
    EndlessFull(u32),
    Failing,
}

pub struct FakeDirectory {
    mode: DirectoryMode,
    fetched: AtomicU32,
}

impl FakeDirectory {
    pub fn with_pages(pages: Vec<Vec<DirectoryUser>>) -> Self {
        Self {
            mode: DirectoryMode::Pages(pages),
            fetched: AtomicU32::new(0),
        }
    }

    pub fn endless_full_pages(per_page: u32) -> Self {
        Self {
            mode: DirectoryMode::EndlessFull(per_page),
            fetched: AtomicU32::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            mode: DirectoryMode::Failing,
            fetched: AtomicU32::new(0),
        }
    }

    pub fn pages_fetched(&self) -> u32 {
        self.fetched.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl UserDirectory for FakeDirectory {
    async fn list_users(
        &self,
        page: u32,
        _per_page: u32,
    ) -> Result<Vec<DirectoryUser>, DirectoryError> {
        self.fetched.fetch_add(1, Ordering::SeqCst);
        match &self.mode {
            DirectoryMode::Pages(pages) => {
                let idx = (page - 1) as usize;
                match pages.get(idx) {
                    Some(users) => Ok(users.clone()),
                    None => panic!("scanned past the end of the directory: page {page}"),
                }
            }
            DirectoryMode::EndlessFull(per_page) => Ok((0..*per_page)
                .map(|i| account(&format!("filler-{page}-{i}"), "filler@x.io"))
                .collect()),
            DirectoryMode::Failing => {
                Err(DirectoryError::Transport("connection refused".to_string()))
            }
        }
    }
}

enum VerifierMode {
    /// Accept exactly this email+password pair, reject everything else.
    Accepting { email: String, password: String },
    Rejecting,
    Unreachable,
}

pub struct FakeVerifier {
    mode: VerifierMode,
}

impl FakeVerifier {
    pub fn accepting(email: &str, password: &str) -> Self {
        Self {
            mode: VerifierMode::Accepting {
                email: email.to_string(),
                password: password.to_string(),
            },
        }
    }

    pub fn rejecting() -> Self {
        Self {
            mode: VerifierMode::Rejecting,
        }
    }

    pub fn unreachable() -> Self {
        Self {
            mode: VerifierMode::Unreachable,
        }
    }
}

#[async_trait::async_trait]
impl CredentialVerifier for FakeVerifier {
    async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Session, VerifyError> {
        match &self.mode {
            VerifierMode::Accepting {
                email: expected_email,
                password: expected_password,
            } if email == expected_email && password == expected_password => {
                Ok(Session(serde_json::json!({
                    "access_token": "fake-access-token",
                    "token_type": "bearer",
                    "user": { "email": email },
                })))
            }
            VerifierMode::Accepting { .. } | VerifierMode::Rejecting => {
                Err(VerifyError::Rejected {
                    detail: Some("Invalid login credentials".to_string()),
                })
            }
            VerifierMode::Unreachable => {
                Err(VerifyError::Transport("connection refused".to_string()))
            }
        }
    }
}
