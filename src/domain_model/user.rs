use serde::Deserialize;
use std::fmt;

#[derive(Debug, Clone, Copy, Ord, PartialOrd, Eq, PartialEq, Hash, Deserialize)]
pub struct UserId(pub uuid::Uuid);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for UserId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        uuid::Uuid::from_str(s).map(UserId)
    }
}

/// Username-bearing metadata attached to a provider account. Only the
/// attribute we resolve on is modeled; everything else in the blob is
/// ignored on deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserMetadata {
    #[serde(default)]
    pub username: Option<String>,
}

/// One account as returned by the identity provider's admin listing.
/// Read-only on our side; the provider is the system of record.
///
/// The username attribute lives in `raw_user_meta_data` for accounts
/// provisioned through the admin API and in `user_metadata` for
/// self-service signups, so both locations are carried.
#[derive(Debug, Clone, Deserialize)]
pub struct DirectoryUser {
    pub id: UserId,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub raw_user_meta_data: Option<UserMetadata>,
    #[serde(default)]
    pub user_metadata: Option<UserMetadata>,
}

impl DirectoryUser {
    /// Preference-ordered accessor over the two metadata locations:
    /// `raw_user_meta_data.username` wins, `user_metadata.username` is
    /// the fallback.
    pub fn stored_username(&self) -> Option<&str> {
        self.raw_user_meta_data
            .as_ref()
            .and_then(|m| m.username.as_deref())
            .or_else(|| {
                self.user_metadata
                    .as_ref()
                    .and_then(|m| m.username.as_deref())
            })
    }
}

/// Outcome of resolving a username against the directory. Only
/// `Unique` may proceed to credential verification; `NoMatch` and
/// `Ambiguous` are indistinguishable to callers of the login API.
#[derive(Debug, Clone)]
pub enum ResolutionResult {
    NoMatch,
    Unique(DirectoryUser),
    Ambiguous,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta(username: &str) -> Option<UserMetadata> {
        Some(UserMetadata {
            username: Some(username.to_string()),
        })
    }

    fn user(raw: Option<UserMetadata>, meta: Option<UserMetadata>) -> DirectoryUser {
        DirectoryUser {
            id: UserId(uuid::Uuid::nil()),
            email: None,
            raw_user_meta_data: raw,
            user_metadata: meta,
        }
    }

    #[test]
    fn raw_metadata_wins_over_user_metadata() {
        let u = user(meta("from-raw"), meta("from-meta"));
        assert_eq!(u.stored_username(), Some("from-raw"));
    }

    #[test]
    fn falls_back_to_user_metadata() {
        let u = user(None, meta("from-meta"));
        assert_eq!(u.stored_username(), Some("from-meta"));

        let u = user(
            Some(UserMetadata { username: None }),
            meta("from-meta"),
        );
        assert_eq!(u.stored_username(), Some("from-meta"));
    }

    #[test]
    fn absent_everywhere_is_none() {
        let u = user(None, None);
        assert_eq!(u.stored_username(), None);
    }

    #[test]
    fn deserializes_admin_listing_record() {
        let u: DirectoryUser = serde_json::from_str(
            r#"{
                "id": "7f7c58f5-92b6-4d3e-9c42-6a2d5d2c1c11",
                "email": "trader1@example.com",
                "raw_user_meta_data": {"username": "Trader1", "level": 3},
                "created_at": "2026-01-01T00:00:00Z"
            }"#,
        )
        .unwrap();
        assert_eq!(u.email.as_deref(), Some("trader1@example.com"));
        assert_eq!(u.stored_username(), Some("Trader1"));
    }
}
