//! Role names
//!
//! The role set is fixed at bootstrap; these constants are the only
//! role names the system knows about.

/// Administrator role
pub const ROLE_ADMIN: &str = "Admin";

/// Standard user role
pub const ROLE_USER: &str = "User";

/// Role assigned to every self-registered account.
///
/// Registration never honors a caller-supplied role; new accounts always
/// receive this one.
pub const DEFAULT_ROLE: &str = ROLE_USER;
