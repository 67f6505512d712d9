//! Console authentication service.
//!
//! Every directory account logs in with the configured shared password.
//! Attempts are answered after a fixed simulated latency and recorded in
//! the access log whatever the outcome.

mod error;

pub use error::AuthError;

use chrono::NaiveDateTime;
use secrecy::ExposeSecret;

use loyalty_core::forms::StaffRegistrationForm;
use loyalty_core::records::AccessLogEntry;
use loyalty_core::{AccessOutcome, Email, Identity};

use crate::config::ConsoleConfig;
use crate::db::{AccessLogRepository, AccountRepository, RepositoryError, Store};
use crate::models::CurrentUser;

/// Email that is always treated as already registered.
pub const RESERVED_EMAIL: &str = "existing@admin.com";

/// Console authentication service.
pub struct AuthService<'a> {
    accounts: AccountRepository<'a>,
    access_log: AccessLogRepository<'a>,
    config: &'a ConsoleConfig,
}

impl<'a> AuthService<'a> {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(store: &'a Store, config: &'a ConsoleConfig) -> Self {
        Self {
            accounts: AccountRepository::new(store),
            access_log: AccessLogRepository::new(store),
            config,
        }
    }

    // =========================================================================
    // Login
    // =========================================================================

    /// Check an email/password pair against the directory.
    ///
    /// Waits the configured login delay first. The attempt is appended to the
    /// access log as `User Login` or `Failed Login`.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` if the email is not in the
    /// directory or the password is not the shared password.
    pub async fn login(
        &self,
        email: &str,
        password: &str,
        ip: &str,
        now: NaiveDateTime,
    ) -> Result<Identity, AuthError> {
        tokio::time::sleep(self.config.login_delay).await;

        let identity = match Email::parse(email) {
            Ok(parsed) => self.accounts.find_by_email(&parsed).await,
            Err(_) => None,
        };
        let password_ok = password == self.config.shared_password.expose_secret();

        match identity {
            Some(identity) if password_ok => {
                self.record(email, ip, now, AccessOutcome::Success, "User Login")
                    .await;
                tracing::info!(account_id = %identity.id, role = %identity.role, "Login succeeded");
                Ok(identity)
            }
            _ => {
                self.record(email, ip, now, AccessOutcome::Failure, "Failed Login")
                    .await;
                tracing::warn!(email, ip, "Login failed");
                Err(AuthError::InvalidCredentials)
            }
        }
    }

    async fn record(
        &self,
        user: &str,
        ip: &str,
        time: NaiveDateTime,
        status: AccessOutcome,
        event: &str,
    ) {
        self.access_log
            .record(AccessLogEntry {
                event: event.to_owned(),
                user: user.to_owned(),
                ip: ip.to_owned(),
                time,
                status,
            })
            .await;
    }

    // =========================================================================
    // Staff registration
    // =========================================================================

    /// Register a new staff account on behalf of `registrar`.
    ///
    /// The form is validated before the simulated registration delay; the
    /// email uniqueness check runs after it. The password is checked for
    /// length but not stored: the new account logs in with the shared password.
    ///
    /// # Errors
    ///
    /// - `AuthError::Forbidden` if the registrar's role cannot register staff,
    ///   or an admin targets another brand
    /// - `AuthError::Validation` if the form is invalid
    /// - `AuthError::EmailTaken` if the email is reserved or already registered
    pub async fn register(
        &self,
        registrar: &CurrentUser,
        form: StaffRegistrationForm,
        ip: &str,
        now: NaiveDateTime,
    ) -> Result<Identity, AuthError> {
        let role = registrar.identity.role;
        if !role.can_register_staff() {
            return Err(AuthError::Forbidden(format!(
                "{} accounts cannot register staff",
                role.label()
            )));
        }

        let staff = form.validate()?;
        if !registrar.identity.may_activate(staff.brand) {
            return Err(AuthError::Forbidden(format!(
                "{} can only register staff for their own brand",
                role.label()
            )));
        }

        tokio::time::sleep(self.config.registration_delay).await;

        if staff.email.as_str().eq_ignore_ascii_case(RESERVED_EMAIL) {
            return Err(AuthError::EmailTaken);
        }
        let account = self.accounts.create(staff).await.map_err(|e| match e {
            RepositoryError::Conflict(_) => AuthError::EmailTaken,
            other => AuthError::Repository(other),
        })?;

        self.record(
            account.email.as_str(),
            ip,
            now,
            AccessOutcome::Success,
            "Account Created",
        )
        .await;
        tracing::info!(
            account_id = %account.id,
            role = %account.role,
            brand = %account.brand,
            registered_by = %registrar.identity.email,
            "Staff account registered"
        );

        Ok(account)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::time::Duration;

    use chrono::NaiveDate;
    use loyalty_core::{Brand, BrandScope, Role};

    use super::*;

    fn instant_config() -> ConsoleConfig {
        ConsoleConfig {
            login_delay: Duration::ZERO,
            registration_delay: Duration::ZERO,
            ..ConsoleConfig::default()
        }
    }

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 14)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap()
    }

    fn form(email: &str, role: &str, brand: &str) -> StaffRegistrationForm {
        StaffRegistrationForm {
            first_name: "Ann".to_owned(),
            last_name: "Mwangi".to_owned(),
            email: email.to_owned(),
            password: "correct horse".to_owned(),
            role: role.to_owned(),
            brand: brand.to_owned(),
        }
    }

    async fn logged_in(service: &AuthService<'_>, email: &str) -> CurrentUser {
        CurrentUser::new(
            service
                .login(email, "loyalty123", "127.0.0.1", now())
                .await
                .unwrap(),
        )
    }

    #[tokio::test]
    async fn test_login_with_shared_password() {
        let store = Store::seeded();
        let config = instant_config();
        let service = AuthService::new(&store, &config);

        let identity = service
            .login("admin@amka.com", "loyalty123", "127.0.0.1", now())
            .await
            .unwrap();
        assert_eq!(identity.role, Role::Admin);
        assert_eq!(identity.brand, BrandScope::Brand(Brand::Amka));

        let log = AccessLogRepository::new(&store).list().await;
        assert_eq!(log[0].event, "User Login");
        assert_eq!(log[0].status, AccessOutcome::Success);
    }

    #[tokio::test]
    async fn test_login_does_not_trim_email() {
        let store = Store::seeded();
        let config = instant_config();
        let service = AuthService::new(&store, &config);

        let err = service
            .login(" admin@amka.com ", "loyalty123", "127.0.0.1", now())
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));

        let log = AccessLogRepository::new(&store).list().await;
        assert_eq!(log[0].event, "Failed Login");
        assert_eq!(log[0].user, " admin@amka.com ");
    }

    #[tokio::test]
    async fn test_login_failures_are_indistinguishable() {
        let store = Store::seeded();
        let config = instant_config();
        let service = AuthService::new(&store, &config);

        let wrong_password = service
            .login("admin@amka.com", "nope", "10.0.0.5", now())
            .await
            .unwrap_err();
        let unknown_user = service
            .login("ghost@amka.com", "loyalty123", "10.0.0.5", now())
            .await
            .unwrap_err();
        let garbage = service
            .login("not an email", "loyalty123", "10.0.0.5", now())
            .await
            .unwrap_err();

        for err in [wrong_password, unknown_user, garbage] {
            assert_eq!(err.to_string(), "Invalid email or password");
        }

        let log = AccessLogRepository::new(&store).list().await;
        assert_eq!(log[0].event, "Failed Login");
        assert_eq!(log[0].user, "not an email");
    }

    #[tokio::test]
    async fn test_admin_registers_into_own_brand_only() {
        let store = Store::seeded();
        let config = instant_config();
        let service = AuthService::new(&store, &config);
        let admin = logged_in(&service, "admin@kasa.com").await;

        let created = service
            .register(&admin, form("ann@kasa.com", "waiter", "kasa"), "127.0.0.1", now())
            .await
            .unwrap();
        assert_eq!(created.brand, BrandScope::Brand(Brand::Kasa));

        let err = service
            .register(&admin, form("bob@amka.com", "waiter", "amka"), "127.0.0.1", now())
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::Forbidden(_)));

        // the new account logs in with the shared password
        let again = logged_in(&service, "ann@kasa.com").await;
        assert_eq!(again.identity.role, Role::Waiter);
    }

    #[tokio::test]
    async fn test_registration_conflicts() {
        let store = Store::seeded();
        let config = instant_config();
        let service = AuthService::new(&store, &config);
        let root = logged_in(&service, "super@loyaltysystem.com").await;

        let reserved = service
            .register(&root, form(RESERVED_EMAIL, "admin", "amka"), "127.0.0.1", now())
            .await
            .unwrap_err();
        assert!(matches!(reserved, AuthError::EmailTaken));

        let existing = service
            .register(&root, form("manager@mawimbi.com", "manager", "mawimbi"), "127.0.0.1", now())
            .await
            .unwrap_err();
        assert_eq!(existing.to_string(), "An admin with this email already exists");
    }

    #[tokio::test]
    async fn test_managers_cannot_register() {
        let store = Store::seeded();
        let config = instant_config();
        let service = AuthService::new(&store, &config);
        let manager = logged_in(&service, "manager@amka.com").await;

        let err = service
            .register(&manager, form("ann@amka.com", "waiter", "amka"), "127.0.0.1", now())
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::Forbidden(_)));
    }
}
