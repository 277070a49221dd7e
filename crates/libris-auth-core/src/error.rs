//! Auth errors

use thiserror::Error;

/// A single violated registration rule.
///
/// `code` is machine-readable: store rules use a rule code
/// ("DuplicateEmail", "PasswordTooShort"), field-shape rules use the
/// wire spelling of the offending field ("email", "firstName"). The
/// HTTP layer groups violations by code into the error map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyViolation {
    /// Machine-readable code
    pub code: String,
    /// Human-readable description
    pub message: String,
}

impl PolicyViolation {
    /// Create a new violation
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Authentication errors
#[derive(Error, Debug)]
pub enum AuthError {
    /// One or more registration rules were violated
    #[error("validation failed")]
    Validation(Vec<PolicyViolation>),

    /// Unknown email or wrong password; deliberately carries no detail
    /// so the two cases cannot be told apart
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Invalid token (malformed, bad signature, wrong issuer/audience)
    #[error("invalid token")]
    InvalidToken,

    /// Token has expired
    #[error("token expired")]
    TokenExpired,

    /// Database error
    #[error("database error: {0}")]
    Database(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<libris_db::DbError> for AuthError {
    fn from(err: libris_db::DbError) -> Self {
        tracing::error!("Database error: {}", err);
        Self::Database(err.to_string())
    }
}

impl From<crate::config::AuthConfigError> for AuthError {
    fn from(err: crate::config::AuthConfigError) -> Self {
        Self::Configuration(err.to_string())
    }
}
