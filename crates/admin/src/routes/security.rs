//! Security screen: the access log.

use axum::{Json, Router, extract::State, routing::get};
use tracing::instrument;

use loyalty_core::navigation::Screen;
use loyalty_core::records::AccessLogEntry;

use crate::db::AccessLogRepository;
use crate::error::AppError;
use crate::middleware::{RequireAuth, require_screen};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/security/access-log", get(access_log))
}

/// GET /api/security/access-log
///
/// Newest first. Includes every login attempt and staff registration made
/// since boot on top of the seeded history.
#[instrument(skip(current, state))]
async fn access_log(
    RequireAuth(current): RequireAuth,
    State(state): State<AppState>,
) -> Result<Json<Vec<AccessLogEntry>>, AppError> {
    require_screen(&current, Screen::Security)?;
    Ok(Json(AccessLogRepository::new(state.store()).list().await))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::http::{Method, StatusCode};
    use serde_json::json;

    use super::super::test_support::{json_body, login, send, test_app};

    #[tokio::test]
    async fn test_logins_are_recorded_newest_first() {
        let app = test_app();
        let failed = send(
            &app,
            Method::POST,
            "/api/auth/login",
            None,
            Some(json!({ "email": "admin@kasa.com", "password": "wrong" })),
        )
        .await;
        assert_eq!(failed.status(), StatusCode::UNAUTHORIZED);

        let cookie = login(&app, "admin@kasa.com").await;
        let log = json_body(
            send(&app, Method::GET, "/api/security/access-log", Some(&cookie), None).await,
        )
        .await;
        let log = log.as_array().unwrap();

        assert_eq!(log.len(), 6);
        assert_eq!(log[0]["event"], "User Login");
        assert_eq!(log[0]["status"], "success");
        assert_eq!(log[1]["event"], "Failed Login");
        assert_eq!(log[1]["user"], "admin@kasa.com");
    }

    #[tokio::test]
    async fn test_manager_is_forbidden() {
        let app = test_app();
        let cookie = login(&app, "manager@amka.com").await;
        let response =
            send(&app, Method::GET, "/api/security/access-log", Some(&cookie), None).await;
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }
}
