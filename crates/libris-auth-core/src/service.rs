//! Auth service - ties together password policy, claim composition, and token issuance

use std::sync::Arc;

use libris_db::{CreateUser, DbError, RoleRepository, UserRepository};
use libris_types::{AuthResponse, LoginRequest, RegisterRequest, UserId, DEFAULT_ROLE};
use uuid::Uuid;
use validator::Validate;

use crate::{
    claims::compose_claims,
    config::AuthConfig,
    error::{AuthError, PolicyViolation},
    password::{hash_password, verify_password, PasswordPolicy},
    token::TokenIssuer,
};

/// Credential service
///
/// Provides the two account operations exposed over HTTP:
/// - registration (request validation, password hashing, default role assignment)
/// - login (lookup, password verification, token issuance)
pub struct AuthService<U: UserRepository, R: RoleRepository> {
    issuer: TokenIssuer,
    policy: PasswordPolicy,
    users: Arc<U>,
    roles: Arc<R>,
}

impl<U: UserRepository, R: RoleRepository> AuthService<U, R> {
    /// Create a new auth service
    pub fn new(config: &AuthConfig, users: Arc<U>, roles: Arc<R>) -> Self {
        Self {
            issuer: TokenIssuer::new(config),
            policy: PasswordPolicy::default(),
            users,
            roles,
        }
    }

    /// Register a new account.
    ///
    /// Validation runs in stages: request shape first (violations keyed
    /// by field name), then the password policy (all violated rules
    /// together), then the duplicate-email rule. Every new account is
    /// assigned the fixed "User" role; the `role` field of the request
    /// is required but never applied.
    pub async fn register(&self, req: &RegisterRequest) -> Result<UserId, AuthError> {
        tracing::info!(email = %req.email, "Registration attempt");

        let shape = shape_violations(req);
        if !shape.is_empty() {
            return Err(AuthError::Validation(shape));
        }

        let password_faults = self.policy.check(&req.password);
        if !password_faults.is_empty() {
            return Err(AuthError::Validation(password_faults));
        }

        if self.users.find_by_email(&req.email).await?.is_some() {
            return Err(AuthError::Validation(vec![duplicate_email(&req.email)]));
        }

        let password_hash = hash_password(&req.password)?;
        let create = CreateUser {
            id: Uuid::new_v4(),
            email: req.email.clone(),
            password_hash,
            first_name: req.first_name.clone(),
            last_name: req.last_name.clone(),
        };

        let user = match self.users.create(create).await {
            Ok(user) => user,
            // A concurrent registration won the race after the pre-check
            Err(DbError::Duplicate) => {
                return Err(AuthError::Validation(vec![duplicate_email(&req.email)]));
            }
            Err(e) => return Err(e.into()),
        };

        let role = self
            .roles
            .find_by_name(DEFAULT_ROLE)
            .await?
            .ok_or_else(|| AuthError::Internal(format!("default role {DEFAULT_ROLE:?} missing")))?;
        self.users.add_role(user.id, role.id).await?;

        tracing::info!(user_id = %user.id, "User registered");
        Ok(user.user_id())
    }

    /// Authenticate a user and issue a signed token.
    ///
    /// Unknown email and wrong password are indistinguishable to the
    /// caller: both produce [`AuthError::InvalidCredentials`]. The
    /// rejection reason is kept to the debug log.
    pub async fn login(&self, req: &LoginRequest) -> Result<AuthResponse, AuthError> {
        tracing::info!(email = %req.email, "Login attempt");

        let Some(user) = self.users.find_by_email(&req.email).await? else {
            tracing::debug!("Login rejected: unknown email");
            return Err(AuthError::InvalidCredentials);
        };

        if !verify_password(&req.password, &user.password_hash) {
            tracing::debug!(user_id = %user.id, "Login rejected: password mismatch");
            return Err(AuthError::InvalidCredentials);
        }

        let custom = self.users.claims_for_user(user.id).await?;
        let roles = self.users.roles_for_user(user.id).await?;
        let claims = compose_claims(&user, custom, &roles);
        let token = self.issuer.issue(&claims)?;

        tracing::info!(user_id = %user.id, "Login succeeded");

        Ok(AuthResponse {
            user_id: user.id.to_string(),
            token,
            email: user.email,
        })
    }

    /// Token issuer configured for this service
    pub fn token_issuer(&self) -> &TokenIssuer {
        &self.issuer
    }
}

/// Map request-shape failures to field-keyed violations.
fn shape_violations(req: &RegisterRequest) -> Vec<PolicyViolation> {
    let Err(errors) = req.validate() else {
        return Vec::new();
    };

    let mut violations = Vec::new();
    for (field, faults) in errors.field_errors() {
        let key = wire_field_name(field.as_ref());
        for fault in faults {
            let message = fault
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("{key} is invalid."));
            violations.push(PolicyViolation::new(key, message));
        }
    }
    violations
}

/// Wire names for request fields, matching the camelCase body.
fn wire_field_name(field: &str) -> &'static str {
    match field {
        "email" => "email",
        "password" => "password",
        "first_name" => "firstName",
        "last_name" => "lastName",
        "role" => "role",
        _ => "request",
    }
}

/// The store-level duplicate-email violation.
fn duplicate_email(email: &str) -> PolicyViolation {
    PolicyViolation::new("DuplicateEmail", format!("Email '{email}' is already taken."))
}

impl<U: UserRepository, R: RoleRepository> std::fmt::Debug for AuthService<U, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthService")
            .field("issuer", &self.issuer)
            .field("policy", &self.policy)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_field_name_mapping() {
        assert_eq!(wire_field_name("first_name"), "firstName");
        assert_eq!(wire_field_name("last_name"), "lastName");
        assert_eq!(wire_field_name("email"), "email");
        assert_eq!(wire_field_name("unexpected"), "request");
    }

    #[test]
    fn test_duplicate_email_violation() {
        let violation = duplicate_email("reader@example.com");
        assert_eq!(violation.code, "DuplicateEmail");
        assert_eq!(violation.message, "Email 'reader@example.com' is already taken.");
    }

    #[test]
    fn test_shape_violations_for_blank_request() {
        let req = RegisterRequest::default();
        let violations = shape_violations(&req);

        let mut codes: Vec<&str> = violations.iter().map(|v| v.code.as_str()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes, vec!["email", "firstName", "lastName", "password", "role"]);
    }

    #[test]
    fn test_shape_violations_pass_for_valid_request() {
        let req = RegisterRequest {
            email: "reader@example.com".to_string(),
            password: "Passw0rd!".to_string(),
            first_name: "Avid".to_string(),
            last_name: "Reader".to_string(),
            role: "User".to_string(),
        };
        assert!(shape_violations(&req).is_empty());
    }

    #[test]
    fn test_shape_violations_bound_name_length() {
        let req = RegisterRequest {
            email: "reader@example.com".to_string(),
            password: "Passw0rd!".to_string(),
            first_name: "a".repeat(51),
            last_name: "Reader".to_string(),
            role: "User".to_string(),
        };

        let violations = shape_violations(&req);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].code, "firstName");
    }
}
