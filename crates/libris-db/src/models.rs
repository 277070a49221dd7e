//! Database row models
//!
//! These types map directly to database rows using SQLx's FromRow derive.

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// User row from the database
#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Role row from the database
#[derive(Debug, Clone, FromRow)]
pub struct RoleRow {
    pub id: Uuid,
    pub name: String,
}

/// Stored custom claim row from the database
///
/// `id` is a serial column; ordering by it reproduces insertion order,
/// which is the order claims appear in issued tokens.
#[derive(Debug, Clone, FromRow)]
pub struct UserClaimRow {
    pub id: i64,
    pub user_id: Uuid,
    pub claim_key: String,
    pub claim_value: String,
}

// Conversion implementations from row types to libris-types domain types
impl UserRow {
    /// Convert to domain UserId
    pub fn user_id(&self) -> libris_types::UserId {
        libris_types::UserId(self.id)
    }
}

impl RoleRow {
    /// Convert to domain RoleId
    pub fn role_id(&self) -> libris_types::RoleId {
        libris_types::RoleId(self.id)
    }
}

impl UserClaimRow {
    /// Convert to a domain claim, consuming the row
    pub fn into_claim(self) -> libris_types::Claim {
        libris_types::Claim {
            key: self.claim_key,
            value: self.claim_value,
        }
    }
}
