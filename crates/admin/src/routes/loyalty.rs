//! Loyalty program screen: tier ladder, rewards catalog and program figures.

use axum::{Json, Router, extract::State, routing::get};
use tracing::instrument;

use loyalty_core::navigation::Screen;

use crate::db::{CatalogRepository, LoyaltyCatalog};
use crate::error::AppError;
use crate::middleware::{RequireAuth, require_screen};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/loyalty", get(show))
}

/// GET /api/loyalty
#[instrument(skip(current, state))]
async fn show(
    RequireAuth(current): RequireAuth,
    State(state): State<AppState>,
) -> Result<Json<LoyaltyCatalog>, AppError> {
    require_screen(&current, Screen::Loyalty)?;
    Ok(Json(CatalogRepository::new(state.store()).loyalty().await))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::http::{Method, StatusCode};

    use super::super::test_support::{json_body, login, send, test_app};

    #[tokio::test]
    async fn test_manager_sees_program() {
        let app = test_app();
        let cookie = login(&app, "manager@kasa.com").await;
        let response = send(&app, Method::GET, "/api/loyalty", Some(&cookie), None).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["tiers"].as_array().unwrap().len(), 3);
        assert_eq!(body["rewards"][0]["name"], "Free Coffee");
        assert_eq!(body["stats"]["totalMembers"], 268);
    }

    #[tokio::test]
    async fn test_waiter_is_forbidden() {
        let app = test_app();
        let cookie = login(&app, "waiter@kasa.com").await;
        let response = send(&app, Method::GET, "/api/loyalty", Some(&cookie), None).await;
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }
}
