//! Authentication route handlers.
//!
//! Login, logout and the current identity. Every login answer carries the
//! view the client needs to draw its shell: identity, active brand,
//! navigation and permissions.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use tracing::instrument;

use loyalty_core::navigation::{NavItem, navigation_for};
use loyalty_core::{Brand, Identity};

use crate::error::{AppError, clear_sentry_user, set_sentry_user};
use crate::middleware::{AppJson, ClientIp, RequireAuth, end_session, start_session};
use crate::models::CurrentUser;
use crate::services::AuthService;
use crate::state::AppState;

/// Build the auth router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/auth/login", post(login))
        .route("/api/auth/logout", post(logout))
        .route("/api/auth/me", get(me))
}

/// Login form body.
#[derive(Deserialize, Default)]
#[serde(default)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for LoginInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginInput")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Role affordances beyond the navigation table.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Permissions {
    pub can_switch_brands: bool,
    pub can_register_staff: bool,
    pub can_manage_records: bool,
    pub sees_performance: bool,
}

/// The logged-in shell: who, which brand, and what they can reach.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    pub user: Identity,
    pub active_brand: Brand,
    pub active_brand_name: &'static str,
    pub welcome: String,
    pub navigation: Vec<NavItem>,
    pub permissions: Permissions,
}

impl From<&CurrentUser> for SessionView {
    fn from(current: &CurrentUser) -> Self {
        let role = current.identity.role;
        Self {
            user: current.identity.clone(),
            active_brand: current.active_brand,
            active_brand_name: current.active_brand.display_name(),
            welcome: role.welcome_message(current.active_brand),
            navigation: navigation_for(role),
            permissions: Permissions {
                can_switch_brands: role.can_switch_brands(),
                can_register_staff: role.can_register_staff(),
                can_manage_records: role.can_manage_records(),
                sees_performance: role.sees_performance(),
            },
        }
    }
}

/// Log in with an email from the directory and the shared password.
///
/// POST /api/auth/login
#[instrument(skip(session, state, input), fields(email = %input.email))]
async fn login(
    session: Session,
    ClientIp(ip): ClientIp,
    State(state): State<AppState>,
    AppJson(input): AppJson<LoginInput>,
) -> Result<Json<SessionView>, AppError> {
    let service = AuthService::new(state.store(), state.config());

    let identity = match service
        .login(&input.email, &input.password, &ip, super::now())
        .await
    {
        Ok(identity) => identity,
        Err(e) => {
            // a failed attempt never leaves an identity behind
            end_session(&session).await?;
            return Err(e.into());
        }
    };

    let current = CurrentUser::new(identity);
    start_session(&session, &current).await?;
    set_sentry_user(&current.identity);

    Ok(Json(SessionView::from(&current)))
}

/// Log out and delete the session.
///
/// POST /api/auth/logout
#[instrument(skip(session))]
async fn logout(session: Session) -> Result<StatusCode, AppError> {
    end_session(&session).await?;
    clear_sentry_user();
    Ok(StatusCode::NO_CONTENT)
}

/// The current identity.
///
/// GET /api/auth/me
async fn me(RequireAuth(current): RequireAuth) -> Json<SessionView> {
    Json(SessionView::from(&current))
}
