use serde::{Deserialize, Serialize};

/// Opaque session artifact issued by the identity provider on a
/// successful password grant. Passed through to the caller verbatim;
/// never parsed, stored, or extended here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Session(pub serde_json::Value);
