//! Libris Types - Shared domain types
//!
//! This crate contains domain types used across Libris services:
//! - User and role identity
//! - Token claims
//! - Auth API request/response types

pub mod api;
pub mod claim;
pub mod role;
pub mod user;

pub use api::*;
pub use claim::*;
pub use role::*;
pub use user::*;
