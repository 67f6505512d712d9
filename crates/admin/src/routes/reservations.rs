//! Reservation route handlers. Listed on the bookings and orders screen.

use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use serde::Serialize;
use tracing::instrument;

use loyalty_core::forms::NewReservationForm;
use loyalty_core::navigation::Screen;
use loyalty_core::records::Reservation;
use loyalty_core::scope::ReservationStats;

use crate::db::ReservationRepository;
use crate::error::AppError;
use crate::middleware::{AppJson, RequireAuth, require_screen};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/reservations", get(index).post(create))
}

#[derive(Debug, Serialize)]
pub struct ReservationsView {
    pub reservations: Vec<Reservation>,
    pub stats: ReservationStats,
}

/// GET /api/reservations
#[instrument(skip(current, state))]
async fn index(
    RequireAuth(current): RequireAuth,
    State(state): State<AppState>,
) -> Result<Json<ReservationsView>, AppError> {
    require_screen(&current, Screen::Orders)?;

    let reservations = ReservationRepository::new(state.store())
        .list(&current.scope())
        .await;
    let stats = ReservationStats::collect(&reservations.iter().collect::<Vec<_>>());

    Ok(Json(ReservationsView {
        reservations,
        stats,
    }))
}

/// POST /api/reservations
#[instrument(skip(current, state, form))]
async fn create(
    RequireAuth(current): RequireAuth,
    State(state): State<AppState>,
    AppJson(form): AppJson<NewReservationForm>,
) -> Result<(StatusCode, Json<Reservation>), AppError> {
    require_screen(&current, Screen::Orders)?;
    if !current.identity.role.can_manage_records() {
        return Err(AppError::Forbidden(
            "Waiters cannot add reservations".to_string(),
        ));
    }

    let valid = form.validate()?;
    let reservation = ReservationRepository::new(state.store())
        .create(valid, current.active_brand)
        .await;
    tracing::info!(reservation_id = %reservation.id, guests = reservation.guests, "Reservation added");

    Ok((StatusCode::CREATED, Json(reservation)))
}
