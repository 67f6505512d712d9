//! Staff directory and registration, reached from the settings screen.
//!
//! Super admins see and register staff for any brand. Admins are held to
//! their own brand.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    routing::get,
};
use serde::Deserialize;
use tracing::instrument;

use loyalty_core::forms::StaffRegistrationForm;
use loyalty_core::navigation::Screen;
use loyalty_core::{Brand, Identity};

use crate::db::AccountRepository;
use crate::error::AppError;
use crate::middleware::{AppJson, ClientIp, RequireAuth, require_screen};
use crate::models::CurrentUser;
use crate::services::AuthService;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/staff", get(index).post(register))
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct StaffQuery {
    pub brand: Option<Brand>,
}

fn require_registrar(current: &CurrentUser) -> Result<(), AppError> {
    require_screen(current, Screen::Settings)?;
    if current.identity.role.can_register_staff() {
        Ok(())
    } else {
        Err(AppError::Forbidden(
            "Only administrators can manage staff".to_string(),
        ))
    }
}

/// GET /api/staff
#[instrument(skip(current, state))]
async fn index(
    RequireAuth(current): RequireAuth,
    State(state): State<AppState>,
    Query(query): Query<StaffQuery>,
) -> Result<Json<Vec<Identity>>, AppError> {
    require_registrar(&current)?;

    let brand = if current.identity.role.can_switch_brands() {
        query.brand
    } else {
        Some(current.identity.home_brand())
    };
    Ok(Json(AccountRepository::new(state.store()).list(brand).await))
}

/// POST /api/staff
#[instrument(skip(current, state, form))]
async fn register(
    RequireAuth(current): RequireAuth,
    State(state): State<AppState>,
    ClientIp(ip): ClientIp,
    AppJson(form): AppJson<StaffRegistrationForm>,
) -> Result<(StatusCode, Json<Identity>), AppError> {
    require_registrar(&current)?;

    let account = AuthService::new(state.store(), state.config())
        .register(&current, form, &ip, super::now())
        .await?;
    Ok((StatusCode::CREATED, Json(account)))
}
