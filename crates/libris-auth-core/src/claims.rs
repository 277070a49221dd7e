//! Claim composition
//!
//! Builds the ordered claim sequence embedded in issued tokens.

use libris_db::{UserClaimRow, UserRow};
use libris_types::{claim_names, Claim};
use uuid::Uuid;

/// Compose the full claim sequence for a user.
///
/// The result is the concatenation of three blocks, in order:
///
/// 1. a fixed block: `sub` (the login name), a fresh `jti`, `email`,
///    and the internal `uid` identifier;
/// 2. the user's stored custom claims, in stored order;
/// 3. one `role` claim per assigned role, in enumeration order.
///
/// Nothing is dropped or deduplicated: a stored claim may repeat a
/// fixed key and still appears as its own entry, and every role yields
/// a separate `role` claim. `jti` is generated on every call, so two
/// tokens for the same user never share one.
pub fn compose_claims(user: &UserRow, custom: Vec<UserClaimRow>, roles: &[String]) -> Vec<Claim> {
    let mut claims = Vec::with_capacity(4 + custom.len() + roles.len());

    claims.push(Claim::new(claim_names::SUB, user.email.clone()));
    claims.push(Claim::new(claim_names::JTI, Uuid::new_v4().to_string()));
    claims.push(Claim::new(claim_names::EMAIL, user.email.clone()));
    claims.push(Claim::new(claim_names::UID, user.id.to_string()));

    claims.extend(custom.into_iter().map(UserClaimRow::into_claim));
    claims.extend(roles.iter().map(|role| Claim::new(claim_names::ROLE, role.clone())));

    claims
}
