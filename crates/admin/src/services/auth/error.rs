//! Console authentication error types.

use thiserror::Error;

use loyalty_core::forms::FieldErrors;

use crate::db::RepositoryError;

/// Errors that can occur during login and staff registration.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Unknown email or wrong password. Deliberately does not say which.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// The email is already in the account directory.
    #[error("An admin with this email already exists")]
    EmailTaken,

    /// The caller may not perform this registration.
    #[error("{0}")]
    Forbidden(String),

    /// Registration form failed validation.
    #[error("validation failed: {0}")]
    Validation(#[from] FieldErrors),

    /// Repository error.
    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),
}
