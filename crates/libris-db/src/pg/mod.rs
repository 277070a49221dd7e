//! PostgreSQL repository implementations

mod role;
mod user;

pub use role::PgRoleRepository;
pub use user::PgUserRepository;

use crate::DbPool;

/// All repositories bundled together
#[derive(Clone)]
pub struct Repositories {
    pub users: PgUserRepository,
    pub roles: PgRoleRepository,
}

impl Repositories {
    /// Create all repositories from a database pool
    pub fn new(pool: DbPool) -> Self {
        Self {
            users: PgUserRepository::new(pool.clone()),
            roles: PgRoleRepository::new(pool),
        }
    }
}
