//! Console account directory.

use loyalty_core::forms::ValidStaff;
use loyalty_core::{AccountId, Brand, BrandScope, Email, Identity, next_id};

use super::{RepositoryError, Store};

/// Repository for console accounts.
pub struct AccountRepository<'a> {
    store: &'a Store,
}

impl<'a> AccountRepository<'a> {
    #[must_use]
    pub const fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Find an account by exact email.
    pub async fn find_by_email(&self, email: &Email) -> Option<Identity> {
        let tables = self.store.read().await;
        tables.accounts.iter().find(|a| a.email == *email).cloned()
    }

    /// Accounts belonging to `brand`, or every account when `brand` is `None`.
    pub async fn list(&self, brand: Option<Brand>) -> Vec<Identity> {
        let tables = self.store.read().await;
        tables
            .accounts
            .iter()
            .filter(|a| brand.is_none_or(|b| a.brand == BrandScope::Brand(b)))
            .cloned()
            .collect()
    }

    /// Append a new account to the directory.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the email is already registered.
    pub async fn create(&self, staff: ValidStaff) -> Result<Identity, RepositoryError> {
        let mut tables = self.store.write().await;
        if tables.accounts.iter().any(|a| a.email == staff.email) {
            return Err(RepositoryError::Conflict(format!(
                "email {} already registered",
                staff.email
            )));
        }

        let id: AccountId = next_id(tables.accounts.iter().map(|a| a.id));
        let account = Identity {
            id,
            email: staff.email,
            role: staff.role,
            brand: BrandScope::Brand(staff.brand),
            first_name: staff.first_name,
            last_name: staff.last_name,
        };
        tables.accounts.push(account.clone());
        Ok(account)
    }
}
