//! Business logic services for the console.
//!
//! # Services
//!
//! - `auth` - Shared-password login, access logging and staff registration

pub mod auth;

pub use auth::{AuthError, AuthService};
