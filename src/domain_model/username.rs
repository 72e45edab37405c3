use std::fmt;

/// Canonical form of a username: trimmed and lower-cased. Two usernames
/// are the same account name iff their normalized forms are byte-equal.
///
/// Normalization is total (every string has one, the empty string
/// normalizes to itself) and idempotent. An empty normalized form never
/// matches any account.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct NormalizedUsername(String);

impl NormalizedUsername {
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_lowercase())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NormalizedUsername {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
