//! Repository traits
//!
//! Define async repository interfaces for credential store operations.

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::DbResult;
use crate::models::*;

/// User repository trait
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by ID
    async fn find_by_id(&self, id: Uuid) -> DbResult<Option<UserRow>>;

    /// Find a user by email
    ///
    /// Lookups fold case; stored casing is preserved.
    async fn find_by_email(&self, email: &str) -> DbResult<Option<UserRow>>;

    /// Create a new user
    ///
    /// A duplicate email yields [`crate::DbError::Duplicate`] and leaves
    /// no record behind.
    async fn create(&self, user: CreateUser) -> DbResult<UserRow>;

    /// Assign a role to a user; a no-op when already assigned
    async fn add_role(&self, user_id: Uuid, role_id: Uuid) -> DbResult<()>;

    /// Role names assigned to a user, in enumeration order
    async fn roles_for_user(&self, user_id: Uuid) -> DbResult<Vec<String>>;

    /// Stored custom claims for a user, in insertion order
    async fn claims_for_user(&self, user_id: Uuid) -> DbResult<Vec<UserClaimRow>>;
}

/// Create user input
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
}

/// Role repository trait
#[async_trait]
pub trait RoleRepository: Send + Sync {
    /// Find a role by name
    async fn find_by_name(&self, name: &str) -> DbResult<Option<RoleRow>>;

    /// Insert a role unless one with the same ID already exists
    async fn upsert(&self, role: CreateRole) -> DbResult<()>;
}

/// Create role input
#[derive(Debug, Clone)]
pub struct CreateRole {
    pub id: Uuid,
    pub name: String,
}
