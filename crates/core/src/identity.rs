//! The logged-in account.
//!
//! An [`Identity`] is what the session stores after a successful login and
//! what every handler reads to decide which rows and screens are visible.

use serde::{Deserialize, Serialize};

use crate::types::{AccountId, Brand, BrandScope, Email, Role};

/// Errors raised when building an [`Identity`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum IdentityError {
    /// Global scope was given to a branded role, or a super admin was tied to one brand.
    #[error("role {role} cannot have brand scope {scope}")]
    BrandScopeMismatch {
        /// The role requested.
        role: Role,
        /// The scope requested.
        scope: BrandScope,
    },
}

/// A console account, as stored in the session.
///
/// Invariant: `brand` is [`BrandScope::All`] exactly when `role` is
/// [`Role::SuperAdmin`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub id: AccountId,
    pub email: Email,
    pub role: Role,
    pub brand: BrandScope,
    pub first_name: String,
    pub last_name: String,
}

impl Identity {
    /// Build an identity, enforcing the role/brand invariant.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::BrandScopeMismatch`] when the scope does not
    /// fit the role.
    pub fn new(
        id: AccountId,
        email: Email,
        role: Role,
        brand: BrandScope,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Result<Self, IdentityError> {
        let is_global = matches!(brand, BrandScope::All);
        if is_global != (role == Role::SuperAdmin) {
            return Err(IdentityError::BrandScopeMismatch { role, scope: brand });
        }

        Ok(Self {
            id,
            email,
            role,
            brand,
            first_name: first_name.into(),
            last_name: last_name.into(),
        })
    }

    /// `First Last`.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// The brand this account starts on: its own, or the default for global accounts.
    #[must_use]
    pub fn home_brand(&self) -> Brand {
        self.brand.brand().unwrap_or(Brand::DEFAULT)
    }

    /// Whether this account may make `brand` its active brand.
    #[must_use]
    pub fn may_activate(&self, brand: Brand) -> bool {
        self.role.can_switch_brands() || self.brand.covers(brand)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn email(s: &str) -> Email {
        Email::parse(s).unwrap()
    }

    #[test]
    fn test_super_admin_must_be_global() {
        let err = Identity::new(
            AccountId::new(1),
            email("super@loyaltysystem.com"),
            Role::SuperAdmin,
            BrandScope::Brand(Brand::Amka),
            "Global",
            "Administrator",
        )
        .unwrap_err();
        assert!(matches!(err, IdentityError::BrandScopeMismatch { .. }));
    }

    #[test]
    fn test_branded_roles_cannot_be_global() {
        for role in [Role::Admin, Role::Manager, Role::Waiter] {
            assert!(
                Identity::new(
                    AccountId::new(2),
                    email("staff@amka.com"),
                    role,
                    BrandScope::All,
                    "A",
                    "B",
                )
                .is_err()
            );
        }
    }

    #[test]
    fn test_home_brand_and_activation() {
        let waiter = Identity::new(
            AccountId::new(9),
            email("waiter@mawimbi.com"),
            Role::Waiter,
            Brand::Mawimbi.into(),
            "Mawimbi",
            "Waiter",
        )
        .unwrap();
        assert_eq!(waiter.home_brand(), Brand::Mawimbi);
        assert!(waiter.may_activate(Brand::Mawimbi));
        assert!(!waiter.may_activate(Brand::Kasa));
        assert_eq!(waiter.full_name(), "Mawimbi Waiter");
    }

    #[test]
    fn test_serialized_shape() {
        let admin = Identity::new(
            AccountId::new(2),
            email("admin@amka.com"),
            Role::Admin,
            Brand::Amka.into(),
            "Amka",
            "Admin",
        )
        .unwrap();
        let json = serde_json::to_value(&admin).unwrap();
        assert_eq!(json["email"], "admin@amka.com");
        assert_eq!(json["role"], "admin");
        assert_eq!(json["brand"], "amka");
        assert_eq!(json["firstName"], "Amka");
        assert_eq!(json["lastName"], "Admin");
    }
}
