//! Multi-brand loyalty console library.
//!
//! Serves the staff console for the Amka, Mawimbi and Kasa venues as an
//! HTTP/JSON API. Records live in an in-memory store seeded at boot; every
//! list is scoped to the caller's role and active brand.
//!
//! The binary in `main.rs` adds Sentry and the listener; everything else is
//! here so the router can be driven from tests.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
