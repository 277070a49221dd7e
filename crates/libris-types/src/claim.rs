//! Token claim types

use serde::{Deserialize, Serialize};

/// A single key/value claim carried by an issued token.
///
/// Claim sequences are ordered and may contain the same key more than
/// once (one `role` claim per assigned role, for example). Duplicates are
/// never merged at this level; how repeats serialize is the token
/// encoder's concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
    /// Claim name
    pub key: String,
    /// Claim value
    pub value: String,
}

impl Claim {
    /// Create a new claim
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl std::fmt::Display for Claim {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

/// Claim names used in issued tokens
pub mod claim_names {
    /// Subject (the user's login name)
    pub const SUB: &str = "sub";
    /// Unique token identifier, fresh per issued token
    pub const JTI: &str = "jti";
    /// Email address
    pub const EMAIL: &str = "email";
    /// Internal user identifier
    pub const UID: &str = "uid";
    /// Role membership, one claim per assigned role
    pub const ROLE: &str = "role";
}
