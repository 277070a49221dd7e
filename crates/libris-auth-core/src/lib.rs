//! Libris Auth Core - Credential and token issuance logic
//!
//! Core functionality for the identity service: password hashing and the
//! strength policy, ordered claim composition, HS256 token issuance and
//! verification, and the bootstrap seed.

pub mod claims;
pub mod config;
pub mod error;
pub mod password;
pub mod seed;
pub mod service;
pub mod token;

pub use claims::*;
pub use config::*;
pub use error::*;
pub use password::*;
pub use service::*;
pub use token::*;
