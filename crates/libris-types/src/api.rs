//! Auth API request/response types

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Registration request
///
/// `role` is deserialized and required to be present for wire
/// compatibility, but registration never applies it; every new account
/// receives [`crate::DEFAULT_ROLE`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct RegisterRequest {
    /// Email address, doubles as the login name
    #[validate(email(message = "email must be a valid e-mail address."))]
    pub email: String,
    /// Plaintext password, checked against the strength policy
    #[validate(length(min = 1, message = "password is required."))]
    pub password: String,
    /// First name
    #[validate(length(
        min = 1,
        max = 50,
        message = "firstName must be between 1 and 50 characters."
    ))]
    pub first_name: String,
    /// Last name
    #[validate(length(
        min = 1,
        max = 50,
        message = "lastName must be between 1 and 50 characters."
    ))]
    pub last_name: String,
    /// Requested role, accepted but never applied
    #[validate(length(min = 1, message = "role is required."))]
    pub role: String,
}

/// Login request
///
/// Carries no field rules on purpose: an empty or malformed email cannot
/// match a stored account and falls through to the uniform unauthorized
/// outcome, so nothing is learned from the response shape.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoginRequest {
    /// Email address
    pub email: String,
    /// Plaintext password
    pub password: String,
}

/// Successful login response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    /// User identifier
    pub user_id: String,
    /// Signed bearer token
    pub token: String,
    /// Email address
    pub email: String,
}
