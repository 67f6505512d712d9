//! Account directory listing.

use loyalty_core::catalog;
use loyalty_core::{Brand, BrandScope, Identity};

use super::{CommandError, emit};

/// Print one line per account, optionally limited to `brand`.
///
/// # Errors
///
/// Returns `CommandError::Io` if stdout cannot be written.
pub fn list(brand: Option<Brand>) -> Result<(), CommandError> {
    let accounts = catalog::accounts();
    let rows = directory(&accounts, brand);
    tracing::debug!(count = rows.len(), "Listing accounts");
    emit(&rows)
}

fn directory(accounts: &[Identity], brand: Option<Brand>) -> Vec<String> {
    accounts
        .iter()
        .filter(|a| brand.is_none_or(|b| a.brand == BrandScope::Brand(b)))
        .map(|a| {
            format!(
                "{:>3}  {:<26} {:<12} {:<8} {}",
                a.id.to_string(),
                a.email.as_str(),
                a.role.to_string(),
                a.brand.to_string(),
                a.full_name()
            )
        })
        .collect()
}
