//! Password hashing and strength policy
//!
//! Argon2id in PHC string format for storage. The strength policy is the
//! rule set every new registration is checked against; each failed rule
//! yields its own coded violation so callers see the full list at once.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::error::{AuthError, PolicyViolation};

/// Hash a password with Argon2id.
///
/// Returns the PHC string format hash that includes algorithm parameters
/// and salt.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AuthError::Internal(format!("password hashing failed: {e}")))
}

/// Verify a password against a stored PHC hash.
///
/// Returns false for a wrong password and for an unparseable hash alike;
/// callers treat both as a failed credential check.
pub fn verify_password(password: &str, hash: &str) -> bool {
    match PasswordHash::new(hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(_) => false,
    }
}

/// Password strength requirements
#[derive(Debug, Clone)]
pub struct PasswordPolicy {
    /// Minimum password length
    pub min_length: usize,
    /// Require an uppercase letter
    pub require_uppercase: bool,
    /// Require a lowercase letter
    pub require_lowercase: bool,
    /// Require a digit
    pub require_digit: bool,
    /// Require a non-alphanumeric character
    pub require_non_alphanumeric: bool,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: 6,
            require_uppercase: true,
            require_lowercase: true,
            require_digit: true,
            require_non_alphanumeric: true,
        }
    }
}

impl PasswordPolicy {
    /// Check a password against the policy, returning one coded
    /// violation per failed rule. An empty vec means the password is
    /// acceptable.
    pub fn check(&self, password: &str) -> Vec<PolicyViolation> {
        let mut violations = Vec::new();

        if password.chars().count() < self.min_length {
            violations.push(PolicyViolation::new(
                "PasswordTooShort",
                format!("Passwords must be at least {} characters.", self.min_length),
            ));
        }

        if self.require_non_alphanumeric && password.chars().all(char::is_alphanumeric) {
            violations.push(PolicyViolation::new(
                "PasswordRequiresNonAlphanumeric",
                "Passwords must have at least one non alphanumeric character.",
            ));
        }

        if self.require_digit && !password.chars().any(|c| c.is_ascii_digit()) {
            violations.push(PolicyViolation::new(
                "PasswordRequiresDigit",
                "Passwords must have at least one digit ('0'-'9').",
            ));
        }

        if self.require_lowercase && !password.chars().any(char::is_lowercase) {
            violations.push(PolicyViolation::new(
                "PasswordRequiresLower",
                "Passwords must have at least one lowercase ('a'-'z').",
            ));
        }

        if self.require_uppercase && !password.chars().any(char::is_uppercase) {
            violations.push(PolicyViolation::new(
                "PasswordRequiresUpper",
                "Passwords must have at least one uppercase ('A'-'Z').",
            ));
        }

        violations
    }
}
