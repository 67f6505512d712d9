//! HTTP middleware and extractors for the console.
//!
//! # Middleware Order (outermost first, as layered in `routes::app`)
//!
//! 1. Sentry layers (added by the binary)
//! 2. `TraceLayer` (request tracing with status and latency)
//! 3. Session layer (tower-sessions with an in-memory store)
//!
//! Authentication is enforced per handler through [`auth::RequireAuth`].

pub mod auth;
pub mod client_ip;
pub mod json;
pub mod session;

pub use auth::{RequireAuth, end_session, require_screen, set_active_brand, start_session};
pub use client_ip::ClientIp;
pub use json::AppJson;
pub use session::create_session_layer;
