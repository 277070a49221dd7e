//! Token issuance and validation
//!
//! Serializes an ordered claim sequence into a signed HS256 token and
//! validates inbound tokens against the configured issuer, audience,
//! and expiry.

use std::fmt;

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use libris_types::Claim;
use serde_json::map::Entry;
use serde_json::{json, Map, Value};

use crate::config::{expiry_after, AuthConfig};
use crate::error::AuthError;

/// Signs and validates HS256 tokens.
#[derive(Clone)]
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    issuer: String,
    audience: String,
    duration_hours: i64,
}

impl TokenIssuer {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            issuer: config.issuer.clone(),
            audience: config.audience.clone(),
            duration_hours: config.duration_hours,
        }
    }

    /// Issue a signed token carrying the given claim sequence.
    ///
    /// Claims fold into a JSON payload in sequence order: the first
    /// occurrence of a key becomes a string member, and every later
    /// occurrence promotes the member to an array and appends. Two
    /// `role` claims therefore serialize as `"role": ["Admin","User"]`
    /// while a single one stays `"role": "User"`.
    ///
    /// The registered `iss`, `aud`, and `exp` members are stamped after
    /// folding and overwrite any claim that used those keys.
    pub fn issue(&self, claims: &[Claim]) -> Result<String, AuthError> {
        let mut payload = Map::new();
        for claim in claims {
            fold_claim(&mut payload, claim);
        }

        // Out of reach for configs built with `AuthConfig::try_new`,
        // which rejects unrepresentable durations up front.
        let expires_at = expiry_after(self.duration_hours)
            .ok_or_else(|| AuthError::Configuration("token duration out of range".into()))?;
        payload.insert("iss".to_string(), Value::String(self.issuer.clone()));
        payload.insert("aud".to_string(), Value::String(self.audience.clone()));
        payload.insert("exp".to_string(), json!(expires_at.timestamp()));

        encode(&Header::default(), &Value::Object(payload), &self.encoding_key)
            .map_err(|err| AuthError::Internal(err.to_string()))
    }

    /// Validate a token and return its payload.
    ///
    /// The signature, `iss`, `aud`, and `exp` members are all checked;
    /// expiry is exact, with no clock leeway.
    pub fn verify(&self, token: &str) -> Result<Map<String, Value>, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_issuer(&[&self.issuer]);
        validation.set_audience(&[&self.audience]);

        let data = decode::<Value>(token, &self.decoding_key, &validation).map_err(|err| {
            match err.kind() {
                ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => AuthError::InvalidToken,
            }
        })?;

        match data.claims {
            Value::Object(payload) => Ok(payload),
            _ => Err(AuthError::InvalidToken),
        }
    }
}

impl fmt::Debug for TokenIssuer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenIssuer")
            .field("issuer", &self.issuer)
            .field("audience", &self.audience)
            .field("duration_hours", &self.duration_hours)
            .finish()
    }
}

/// Fold one claim into the payload, promoting repeated keys to arrays.
fn fold_claim(payload: &mut Map<String, Value>, claim: &Claim) {
    match payload.entry(claim.key.clone()) {
        Entry::Vacant(slot) => {
            slot.insert(Value::String(claim.value.clone()));
        }
        Entry::Occupied(mut slot) => match slot.get_mut() {
            Value::Array(items) => items.push(Value::String(claim.value.clone())),
            other => {
                let first = other.take();
                *other = Value::Array(vec![first, Value::String(claim.value.clone())]);
            }
        },
    }
}
