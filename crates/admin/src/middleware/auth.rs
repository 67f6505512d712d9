//! Authentication middleware and extractors for the console.
//!
//! Provides the extractor for requiring a logged-in identity in route
//! handlers, plus helpers that write the session.

use axum::{
    Json,
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use serde_json::json;
use tower_sessions::Session;

use loyalty_core::navigation::Screen;
use loyalty_core::{Brand, Identity};

use crate::error::AppError;
use crate::models::{CurrentUser, session_keys};

/// Extractor that requires a logged-in identity.
///
/// If nobody is logged in, returns 401 Unauthorized.
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(
///     RequireAuth(user): RequireAuth,
/// ) -> impl IntoResponse {
///     format!("Hello, {}!", user.identity.full_name())
/// }
/// ```
pub struct RequireAuth(pub CurrentUser);

/// Error returned when authentication is required but nobody is logged in.
pub enum AuthRejection {
    /// No session layer, or no identity in the session.
    Unauthorized,
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        match self {
            Self::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "error": "Not logged in" })),
            )
                .into_response(),
        }
    }
}

impl<S> FromRequestParts<S> for RequireAuth
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Get the session from extensions (set by SessionManagerLayer)
        let session = parts
            .extensions
            .get::<Session>()
            .ok_or(AuthRejection::Unauthorized)?;

        let identity: Identity = session
            .get(session_keys::CURRENT_USER)
            .await
            .ok()
            .flatten()
            .ok_or(AuthRejection::Unauthorized)?;

        let stored_brand: Option<Brand> = session
            .get(session_keys::ACTIVE_BRAND)
            .await
            .ok()
            .flatten();

        Ok(Self(CurrentUser::restore(identity, stored_brand)))
    }
}

/// Reject the request unless the navigation table lists `screen` for the user.
///
/// # Errors
///
/// Returns `AppError::Forbidden` naming the screen.
pub fn require_screen(user: &CurrentUser, screen: Screen) -> Result<(), AppError> {
    if user.can_view(screen) {
        Ok(())
    } else {
        Err(AppError::Forbidden(format!(
            "{} is not available to {}",
            screen.title(),
            user.identity.role.label()
        )))
    }
}

/// Store a freshly authenticated identity, replacing any previous one.
///
/// The session id is cycled so a pre-login cookie cannot be reused.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn start_session(
    session: &Session,
    user: &CurrentUser,
) -> Result<(), tower_sessions::session::Error> {
    session.cycle_id().await?;
    session
        .insert(session_keys::CURRENT_USER, &user.identity)
        .await?;
    session
        .insert(session_keys::ACTIVE_BRAND, user.active_brand)
        .await
}

/// Record a super admin's brand switch.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn set_active_brand(
    session: &Session,
    brand: Brand,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(session_keys::ACTIVE_BRAND, brand).await
}

/// Drop the identity and delete the session from the store (logout).
///
/// # Errors
///
/// Returns an error if the store cannot delete the session.
pub async fn end_session(session: &Session) -> Result<(), tower_sessions::session::Error> {
    session.flush().await
}
