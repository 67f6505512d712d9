//! Dashboard view model.

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;
use tracing::instrument;

use loyalty_core::navigation::{QuickAction, Screen, quick_actions_for};
use loyalty_core::records::{Activity, BrandMetrics, Customer, PerformancePoint};
use loyalty_core::scope::top_customers;
use loyalty_core::Brand;

use crate::db::{CatalogRepository, CustomerRepository};
use crate::error::AppError;
use crate::middleware::{RequireAuth, require_screen};
use crate::state::AppState;

/// Members shown in the top-customers card.
const TOP_CUSTOMERS: usize = 5;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/dashboard", get(index))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub welcome: String,
    pub active_brand: Brand,
    pub brand_name: &'static str,
    /// Headline numbers for everything the viewer can see.
    pub metrics: Option<BrandMetrics>,
    /// The active brand's own card, for super admins browsing one brand.
    pub brand_metrics: Option<BrandMetrics>,
    pub top_customers: Vec<Customer>,
    pub recent_activity: Vec<Activity>,
    pub quick_actions: Vec<QuickAction>,
    /// Only for roles that see performance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performance: Option<Vec<PerformancePoint>>,
}

/// GET /api/dashboard
#[instrument(skip(current, state), fields(role = %current.identity.role))]
async fn index(
    RequireAuth(current): RequireAuth,
    State(state): State<AppState>,
) -> Result<Json<DashboardView>, AppError> {
    require_screen(&current, Screen::Analytics)?;

    let role = current.identity.role;
    let scope = current.scope();
    let catalog = CatalogRepository::new(state.store());
    let customers = CustomerRepository::new(state.store())
        .list(&scope, "")
        .await;

    let performance = if role.sees_performance() {
        Some(catalog.performance().await)
    } else {
        None
    };

    Ok(Json(DashboardView {
        welcome: role.welcome_message(current.active_brand),
        active_brand: current.active_brand,
        brand_name: current.active_brand.display_name(),
        metrics: catalog.metrics(&scope).await,
        brand_metrics: catalog.brand_metrics(current.active_brand).await,
        top_customers: top_customers(customers.iter().collect(), TOP_CUSTOMERS)
            .into_iter()
            .cloned()
            .collect(),
        recent_activity: catalog.activities().await,
        quick_actions: quick_actions_for(role),
        performance,
    }))
}
