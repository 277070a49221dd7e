//! Libris DB - Credential store
//!
//! SQLx-based persistence layer for users, roles, role assignments, and
//! stored custom claims. Schema management happens outside this crate;
//! the expected tables are `users`, `roles`, `user_roles`, and
//! `user_claims`.
//!
//! # Example
//!
//! ```rust,ignore
//! use libris_db::{create_pool, Repositories};
//!
//! let pool = create_pool("postgres://localhost/libris").await?;
//! let repos = Repositories::new(pool);
//!
//! let user = repos.users.find_by_email("user@bookstore.com").await?;
//! ```

pub mod error;
pub mod models;
pub mod pg;
pub mod pool;
pub mod repo;

pub use error::{DbError, DbResult};
pub use models::*;
pub use pg::Repositories;
pub use pool::{create_pool, create_pool_with_options, DbPool, PoolOptions};
pub use repo::*;
