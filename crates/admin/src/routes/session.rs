//! Active-brand switching.

use axum::{Json, Router, routing::put};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use loyalty_core::Brand;

use super::auth::SessionView;
use crate::error::AppError;
use crate::middleware::{AppJson, RequireAuth, set_active_brand};
use crate::models::CurrentUser;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/session/brand", put(switch_brand))
}

#[derive(Debug, Deserialize)]
pub struct SwitchBrandInput {
    pub brand: Brand,
}

/// Make `brand` the active brand.
///
/// Only super admins may move off their home brand; asking for the brand
/// you are already pinned to is a no-op.
///
/// PUT /api/session/brand
#[instrument(skip(current, session), fields(account_id = %current.identity.id))]
async fn switch_brand(
    RequireAuth(current): RequireAuth,
    session: Session,
    AppJson(input): AppJson<SwitchBrandInput>,
) -> Result<Json<SessionView>, AppError> {
    if !current.identity.may_activate(input.brand) {
        return Err(AppError::Forbidden(format!(
            "{} accounts cannot switch to {}",
            current.identity.role.label(),
            input.brand.display_name()
        )));
    }

    set_active_brand(&session, input.brand).await?;
    tracing::info!(brand = %input.brand, "Active brand switched");

    let current = CurrentUser {
        active_brand: input.brand,
        ..current
    };
    Ok(Json(SessionView::from(&current)))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::http::{Method, StatusCode};
    use serde_json::json;

    use super::super::test_support::{json_body, login, send, test_app};

    #[tokio::test]
    async fn test_super_admin_switches() {
        let app = test_app();
        let cookie = login(&app, "super@loyaltysystem.com").await;

        let response = send(
            &app,
            Method::PUT,
            "/api/session/brand",
            Some(&cookie),
            Some(json!({ "brand": "kasa" })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["activeBrandName"], "Kasa Resort");

        let me = send(&app, Method::GET, "/api/auth/me", Some(&cookie), None).await;
        assert_eq!(json_body(me).await["activeBrand"], "kasa");
    }

    #[tokio::test]
    async fn test_admin_cannot_switch() {
        let app = test_app();
        let cookie = login(&app, "admin@mawimbi.com").await;

        let response = send(
            &app,
            Method::PUT,
            "/api/session/brand",
            Some(&cookie),
            Some(json!({ "brand": "amka" })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }
}
