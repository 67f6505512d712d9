//! JSON body extractor whose rejections use the console's error body.

use axum::extract::FromRequest;

use crate::error::AppError;

/// `axum::Json` for request bodies, rejecting with [`AppError`] so malformed
/// input answers with the same `{ "error": ... }` shape as every other failure.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
