//! Customer (user management) route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    routing::get,
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use loyalty_core::forms::NewCustomerForm;
use loyalty_core::navigation::Screen;
use loyalty_core::records::Customer;
use loyalty_core::scope::CustomerStats;

use crate::db::CustomerRepository;
use crate::error::AppError;
use crate::middleware::{AppJson, RequireAuth, require_screen};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/customers", get(index).post(create))
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CustomersQuery {
    pub search: String,
}

#[derive(Debug, Serialize)]
pub struct CustomersView {
    pub customers: Vec<Customer>,
    pub stats: CustomerStats,
}

/// GET /api/customers
#[instrument(skip(current, state))]
async fn index(
    RequireAuth(current): RequireAuth,
    State(state): State<AppState>,
    Query(query): Query<CustomersQuery>,
) -> Result<Json<CustomersView>, AppError> {
    require_screen(&current, Screen::Users)?;

    let customers = CustomerRepository::new(state.store())
        .list(&current.scope(), &query.search)
        .await;
    let stats = CustomerStats::collect(&customers.iter().collect::<Vec<_>>());

    Ok(Json(CustomersView { customers, stats }))
}

/// POST /api/customers
#[instrument(skip(current, state, form))]
async fn create(
    RequireAuth(current): RequireAuth,
    State(state): State<AppState>,
    AppJson(form): AppJson<NewCustomerForm>,
) -> Result<(StatusCode, Json<Customer>), AppError> {
    require_screen(&current, Screen::Users)?;

    let valid = form.validate()?;
    let customer = CustomerRepository::new(state.store())
        .create(valid, current.active_brand, super::now().date())
        .await;
    tracing::info!(customer_id = %customer.id, brand = %customer.brand, "Customer added");

    Ok((StatusCode::CREATED, Json(customer)))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::http::{Method, StatusCode};
    use serde_json::json;

    use super::super::test_support::{json_body, login, send, test_app};

    #[tokio::test]
    async fn test_list_with_search_and_stats() {
        let app = test_app();
        let cookie = login(&app, "super@loyaltysystem.com").await;

        let body = json_body(send(&app, Method::GET, "/api/customers", Some(&cookie), None).await).await;
        assert_eq!(body["stats"]["total"], 5);
        assert_eq!(body["stats"]["gold"], 2);
        assert_eq!(body["stats"]["totalPoints"], 33_690);

        let body = json_body(
            send(&app, Method::GET, "/api/customers?search=chen", Some(&cookie), None).await,
        )
        .await;
        assert_eq!(body["customers"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_create_then_invalid_create() {
        let app = test_app();
        let cookie = login(&app, "admin@kasa.com").await;

        let created = send(
            &app,
            Method::POST,
            "/api/customers",
            Some(&cookie),
            Some(json!({
                "name": "Grace Wanjiru",
                "email": "grace@email.com",
                "phone": "+254 700 111 222",
            })),
        )
        .await;
        assert_eq!(created.status(), StatusCode::CREATED);
        let created = json_body(created).await;
        assert_eq!(created["id"], 6);
        assert_eq!(created["brand"], "kasa");
        assert_eq!(created["tier"], "Bronze");

        let rejected = send(
            &app,
            Method::POST,
            "/api/customers",
            Some(&cookie),
            Some(json!({ "name": "", "email": "grace", "phone": "1" })),
        )
        .await;
        assert_eq!(rejected.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body = json_body(send(&app, Method::GET, "/api/customers", Some(&cookie), None).await).await;
        assert_eq!(body["stats"]["total"], 2);
        assert_eq!(body["customers"][0]["name"], "Grace Wanjiru");
    }

    #[tokio::test]
    async fn test_waiter_is_forbidden() {
        let app = test_app();
        let cookie = login(&app, "waiter@amka.com").await;
        let response = send(&app, Method::GET, "/api/customers", Some(&cookie), None).await;
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }
}
