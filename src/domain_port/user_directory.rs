use crate::domain_model::DirectoryUser;

/// A failed page fetch aborts the whole resolution; it is never
/// interpreted as "no match".
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("directory request failed: {0}")]
    Transport(String),
    #[error("directory returned status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("directory response malformed: {0}")]
    Malformed(String),
}

/// Paginated, privileged view of the identity provider's user
/// directory. Pages are 1-indexed; a page shorter than `per_page`
/// means the directory is exhausted.
#[async_trait::async_trait]
pub trait UserDirectory: Send + Sync {
    async fn list_users(&self, page: u32, per_page: u32) -> Result<Vec<DirectoryUser>, DirectoryError>;
}
