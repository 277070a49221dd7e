//! Common test utilities for libris-auth-core integration tests

pub mod mock_repos;

#[allow(unused_imports)]
pub use mock_repos::{mock_store, MockRoleRepository, MockUserRepository};
