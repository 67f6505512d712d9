//! Session-related types for console authentication.
//!
//! Session keys, and the per-request user rebuilt from them.

use loyalty_core::navigation::Screen;
use loyalty_core::scope::ViewScope;
use loyalty_core::{Brand, Identity};

/// The logged-in account together with the brand it is looking at.
///
/// Non-global accounts are always pinned to their own brand; only a super
/// admin's active brand can differ from its home brand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    pub identity: Identity,
    pub active_brand: Brand,
}

impl CurrentUser {
    /// A freshly logged-in user, starting on their home brand.
    #[must_use]
    pub fn new(identity: Identity) -> Self {
        let active_brand = identity.home_brand();
        Self {
            identity,
            active_brand,
        }
    }

    /// Rebuild from stored session values, ignoring a stored brand the
    /// identity may not look at.
    #[must_use]
    pub fn restore(identity: Identity, stored_brand: Option<Brand>) -> Self {
        let active_brand = stored_brand
            .filter(|brand| identity.may_activate(*brand))
            .unwrap_or_else(|| identity.home_brand());
        Self {
            identity,
            active_brand,
        }
    }

    /// Row visibility for this user.
    #[must_use]
    pub fn scope(&self) -> ViewScope {
        ViewScope::for_identity(&self.identity, Some(self.active_brand))
    }

    /// Whether the navigation table lists `screen` for this user.
    #[must_use]
    pub fn can_view(&self, screen: Screen) -> bool {
        screen.allows(self.identity.role)
    }
}

/// Session keys for console authentication data.
pub mod keys {
    /// Key for storing the current logged-in identity.
    pub const CURRENT_USER: &str = "current_user";

    /// Key for the brand a super admin has switched to.
    pub const ACTIVE_BRAND: &str = "active_brand";
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use loyalty_core::catalog;
    use loyalty_core::Role;

    use super::*;

    fn account(email: &str) -> Identity {
        catalog::accounts()
            .into_iter()
            .find(|a| a.email.as_str() == email)
            .unwrap()
    }

    #[test]
    fn test_super_admin_starts_on_default_brand() {
        let user = CurrentUser::new(account("super@loyaltysystem.com"));
        assert_eq!(user.active_brand, Brand::Amka);
        assert_eq!(user.scope().role, Role::SuperAdmin);
    }

    #[test]
    fn test_restore_ignores_foreign_brand_for_pinned_roles() {
        let user = CurrentUser::restore(account("manager@kasa.com"), Some(Brand::Amka));
        assert_eq!(user.active_brand, Brand::Kasa);

        let user = CurrentUser::restore(account("super@loyaltysystem.com"), Some(Brand::Kasa));
        assert_eq!(user.active_brand, Brand::Kasa);
    }

    #[test]
    fn test_waiter_cannot_view_analytics() {
        let user = CurrentUser::new(account("waiter@amka.com"));
        assert!(!user.can_view(Screen::Analytics));
        assert!(user.can_view(Screen::Orders));
    }
}
