//! Token issuance configuration

use chrono::{DateTime, Duration, Utc};
use thiserror::Error;

/// Minimum accepted signing secret length, in bytes.
///
/// HMAC-SHA256 keys shorter than the hash output weaken the MAC, so
/// anything under 32 bytes is rejected outright.
pub const MIN_SECRET_LENGTH: usize = 32;

/// Configuration error for token issuance.
#[derive(Debug, Error)]
pub enum AuthConfigError {
    /// The signing secret is shorter than [`MIN_SECRET_LENGTH`] bytes.
    #[error("signing secret must be at least {MIN_SECRET_LENGTH} bytes")]
    SecretTooShort,
    /// The issuer string is empty.
    #[error("token issuer must not be empty")]
    EmptyIssuer,
    /// The audience string is empty.
    #[error("token audience must not be empty")]
    EmptyAudience,
    /// The duration in hours yields no representable expiry instant.
    #[error("token duration in hours is out of range")]
    DurationOutOfRange,
}

/// Settings for signing and validating tokens.
#[derive(Clone)]
pub struct AuthConfig {
    /// HMAC-SHA256 signing secret.
    pub secret: String,
    /// Value of the `iss` claim stamped into every token.
    pub issuer: String,
    /// Value of the `aud` claim stamped into every token.
    pub audience: String,
    /// Token lifetime in hours, relative to issuance time.
    pub duration_hours: i64,
}

impl AuthConfig {
    /// Build a config, rejecting weak or empty settings.
    ///
    /// A zero or negative duration is accepted and produces tokens
    /// that are already expired, which the validation path reports as
    /// such. Durations whose expiry instant chrono cannot represent
    /// are rejected here so issuance never has to.
    pub fn try_new(
        secret: impl Into<String>,
        issuer: impl Into<String>,
        audience: impl Into<String>,
        duration_hours: i64,
    ) -> Result<Self, AuthConfigError> {
        let secret = secret.into();
        if secret.len() < MIN_SECRET_LENGTH {
            return Err(AuthConfigError::SecretTooShort);
        }
        let issuer = issuer.into();
        if issuer.is_empty() {
            return Err(AuthConfigError::EmptyIssuer);
        }
        let audience = audience.into();
        if audience.is_empty() {
            return Err(AuthConfigError::EmptyAudience);
        }
        if expiry_after(duration_hours).is_none() {
            return Err(AuthConfigError::DurationOutOfRange);
        }
        Ok(Self { secret, issuer, audience, duration_hours })
    }
}

/// Expiry instant `duration_hours` from now, if chrono can represent it.
///
/// `None` covers both an hour count too large for [`Duration`] and a
/// representable one that still lands past the calendar range.
pub(crate) fn expiry_after(duration_hours: i64) -> Option<DateTime<Utc>> {
    let lifetime = Duration::try_hours(duration_hours)?;
    Utc::now().checked_add_signed(lifetime)
}

// The signing secret stays out of Debug output
impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("issuer", &self.issuer)
            .field("audience", &self.audience)
            .field("duration_hours", &self.duration_hours)
            .finish_non_exhaustive()
    }
}
