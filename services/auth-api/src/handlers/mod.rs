//! HTTP handlers

mod auth;
mod health;

pub use auth::{login, register};
pub use health::{health, ready};
