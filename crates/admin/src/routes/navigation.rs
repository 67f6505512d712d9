//! Sidebar and quick actions.

use axum::{Json, Router, routing::get};
use serde::Serialize;

use loyalty_core::navigation::{NavItem, QuickAction, navigation_for, quick_actions_for};

use crate::middleware::RequireAuth;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/navigation", get(index))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationView {
    pub items: Vec<NavItem>,
    pub quick_actions: Vec<QuickAction>,
}

/// GET /api/navigation
async fn index(RequireAuth(current): RequireAuth) -> Json<NavigationView> {
    let role = current.identity.role;
    Json(NavigationView {
        items: navigation_for(role),
        quick_actions: quick_actions_for(role),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::http::{Method, StatusCode};

    use super::super::test_support::{json_body, login, send, test_app};

    #[tokio::test]
    async fn test_waiter_navigation() {
        let app = test_app();
        let cookie = login(&app, "waiter@amka.com").await;
        let response = send(&app, Method::GET, "/api/navigation", Some(&cookie), None).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        let routes: Vec<&str> = body["items"]
            .as_array()
            .unwrap()
            .iter()
            .map(|item| item["route"].as_str().unwrap())
            .collect();
        assert_eq!(routes, ["/orders"]);
        assert_eq!(body["quickActions"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_requires_login() {
        let app = test_app();
        let response = send(&app, Method::GET, "/api/navigation", None, None).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
