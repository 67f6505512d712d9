//! HTTP route handlers for the console.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                       - Liveness
//! GET  /health/ready                 - Readiness
//!
//! # Session
//! POST /api/auth/login               - Log in with email and shared password
//! POST /api/auth/logout              - Log out
//! GET  /api/auth/me                  - Current identity
//! PUT  /api/session/brand            - Switch active brand (super admin)
//! GET  /api/navigation               - Sidebar and quick actions for the role
//!
//! # Screens
//! GET  /api/dashboard                - Dashboard view model
//! GET  /api/customers?search=        - Customers and stats
//! POST /api/customers                - Add customer
//! GET  /api/orders?search=&status=   - Orders and stats
//! POST /api/orders                   - Add order
//! POST /api/orders/{id}/status       - Advance order status
//! GET  /api/reservations             - Reservations and stats
//! POST /api/reservations             - Add reservation
//! GET  /api/campaigns                - Campaigns and stats
//! POST /api/campaigns                - Add campaign
//! GET  /api/loyalty                  - Tiers, rewards and program stats
//! GET  /api/security/access-log      - Access log
//! GET  /api/staff                    - Account directory
//! POST /api/staff                    - Register staff account
//! ```

pub mod auth;
pub mod campaigns;
pub mod customers;
pub mod dashboard;
pub mod health;
pub mod loyalty;
pub mod navigation;
pub mod orders;
pub mod reservations;
pub mod security;
pub mod session;
pub mod staff;

use axum::Router;
use chrono::{Local, NaiveDateTime};
use tower_http::trace::{DefaultOnResponse, OnResponse, TraceLayer};
use tracing::Span;

use crate::middleware::create_session_layer;
use crate::state::AppState;

/// Every route, without layers.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(auth::router())
        .merge(session::router())
        .merge(navigation::router())
        .merge(dashboard::router())
        .merge(customers::router())
        .merge(orders::router())
        .merge(reservations::router())
        .merge(campaigns::router())
        .merge(loyalty::router())
        .merge(security::router())
        .merge(staff::router())
}

/// The complete application: routes, sessions and request tracing.
///
/// Sentry layers are added by the binary so tests run without a client.
pub fn app(state: AppState) -> Router {
    let session_layer = create_session_layer(state.config());

    routes()
        .layer(session_layer)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        status = tracing::field::Empty,
                        latency_ms = tracing::field::Empty,
                    )
                })
                .on_response(
                    |response: &axum::http::Response<_>,
                     latency: std::time::Duration,
                     span: &Span| {
                        span.record("status", response.status().as_u16());
                        span.record(
                            "latency_ms",
                            u64::try_from(latency.as_millis()).unwrap_or(u64::MAX),
                        );
                        DefaultOnResponse::default().on_response(response, latency, span);
                    },
                ),
        )
        .with_state(state)
}

/// Wall-clock time in the console's local zone.
fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
pub(crate) mod test_support {
    //! Helpers for driving the router in unit tests.

    use std::time::Duration;

    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode, header};
    use axum::response::Response;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use crate::config::ConsoleConfig;
    use crate::db::Store;
    use crate::state::AppState;

    pub fn test_app() -> axum::Router {
        let config = ConsoleConfig {
            login_delay: Duration::ZERO,
            registration_delay: Duration::ZERO,
            ..ConsoleConfig::default()
        };
        super::app(AppState::new(config, Store::seeded()))
    }

    pub async fn send(
        app: &axum::Router,
        method: Method,
        uri: &str,
        cookie: Option<&str>,
        body: Option<Value>,
    ) -> Response {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        app.clone().oneshot(request).await.unwrap()
    }

    /// Log in and return the session cookie pair.
    pub async fn login(app: &axum::Router, email: &str) -> String {
        let response = send(
            app,
            Method::POST,
            "/api/auth/login",
            None,
            Some(json!({ "email": email, "password": "loyalty123" })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let set_cookie = response.headers()[header::SET_COOKIE].to_str().unwrap();
        set_cookie.split(';').next().unwrap().to_owned()
    }

    pub async fn json_body(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }
}
