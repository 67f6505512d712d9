//! Order route handlers.
//!
//! Every role can list and add orders and move them through the kitchen
//! workflow. Rows outside the caller's scope behave as if absent.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use loyalty_core::forms::NewOrderForm;
use loyalty_core::navigation::Screen;
use loyalty_core::records::Order;
use loyalty_core::scope::OrderStats;
use loyalty_core::{OrderId, OrderStatus};

use crate::db::OrderRepository;
use crate::error::AppError;
use crate::middleware::{AppJson, RequireAuth, require_screen};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/orders", get(index).post(create))
        .route("/api/orders/{id}/status", post(update_status))
}

/// Query parameters for the order list.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct OrdersQuery {
    /// Matches customer name or order code.
    pub search: String,
    /// `all` or one order status.
    pub status: String,
}

impl OrdersQuery {
    fn status_filter(&self) -> Result<Option<OrderStatus>, AppError> {
        match self.status.trim() {
            "" | "all" => Ok(None),
            raw => raw.parse().map(Some).map_err(AppError::BadRequest),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct OrdersView {
    pub orders: Vec<Order>,
    pub stats: OrderStats,
}

#[derive(Debug, Deserialize)]
pub struct StatusInput {
    pub status: OrderStatus,
}

/// GET /api/orders
#[instrument(skip(current, state))]
async fn index(
    RequireAuth(current): RequireAuth,
    State(state): State<AppState>,
    Query(query): Query<OrdersQuery>,
) -> Result<Json<OrdersView>, AppError> {
    require_screen(&current, Screen::Orders)?;

    let orders = OrderRepository::new(state.store())
        .list(&current.scope(), &query.search, query.status_filter()?)
        .await;
    let stats = OrderStats::collect(&orders.iter().collect::<Vec<_>>());

    Ok(Json(OrdersView { orders, stats }))
}

/// POST /api/orders
#[instrument(skip(current, state, form))]
async fn create(
    RequireAuth(current): RequireAuth,
    State(state): State<AppState>,
    AppJson(form): AppJson<NewOrderForm>,
) -> Result<(StatusCode, Json<Order>), AppError> {
    require_screen(&current, Screen::Orders)?;

    let valid = form.validate()?;
    let order = OrderRepository::new(state.store())
        .create(valid, current.active_brand, super::now())
        .await;
    tracing::info!(order = %order.id.code(), brand = %order.brand, total = %order.total, "Order added");

    Ok((StatusCode::CREATED, Json(order)))
}

/// POST /api/orders/{id}/status
#[instrument(skip(current, state))]
async fn update_status(
    RequireAuth(current): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<OrderId>,
    AppJson(input): AppJson<StatusInput>,
) -> Result<Json<Order>, AppError> {
    require_screen(&current, Screen::Orders)?;

    let order = OrderRepository::new(state.store())
        .update_status(&current.scope(), id, input.status, super::now())
        .await?;
    tracing::info!(order = %order.id.code(), status = %order.status, "Order status changed");

    Ok(Json(order))
}
