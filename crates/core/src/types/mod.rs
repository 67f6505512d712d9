//! Core types for the loyalty console.
//!
//! Type-safe wrappers for the concepts every record shares.

pub mod brand;
pub mod email;
pub mod id;
pub mod money;
pub mod role;
pub mod status;

pub use brand::{Brand, BrandScope, ParseBrandError};
pub use email::{Email, EmailError};
pub use id::*;
pub use money::Kes;
pub use role::{ParseRoleError, Role};
pub use status::*;
