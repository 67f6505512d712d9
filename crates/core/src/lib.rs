//! Loyalty Console Core - Domain types and rules.
//!
//! This crate holds everything the console knows about the loyalty program
//! that does not need I/O. It is shared by:
//! - `admin` - HTTP console service (sessions, in-memory tables, handlers)
//! - `cli` - Operator tooling over the seed catalog
//!
//! # Architecture
//!
//! Types, validation and pure view-model functions only. No HTTP, no
//! storage, no clocks beyond what callers pass in.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, emails, money, brands, roles and statuses
//! - [`identity`] - The logged-in account and its brand/role invariant
//! - [`records`] - Customers, orders, reservations, campaigns and the loyalty catalog
//! - [`forms`] - Validation for the add-record and staff-registration forms
//! - [`scope`] - Brand/role filtering and summary counters
//! - [`navigation`] - Role-to-screen table
//! - [`catalog`] - Seed data loaded at boot

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod forms;
pub mod identity;
pub mod navigation;
pub mod records;
pub mod scope;
pub mod types;

pub use identity::{Identity, IdentityError};
pub use types::*;
