//! Brand-scoped stats as JSON.

use serde::Serialize;

use loyalty_core::catalog;
use loyalty_core::scope::{CampaignStats, CustomerStats, OrderStats, ViewScope};
use loyalty_core::{Brand, Role};

use super::{CommandError, emit};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Summary {
    role: Role,
    active_brand: Brand,
    orders: OrderStats,
    customers: CustomerStats,
    campaigns: CampaignStats,
}

/// Print the stats `role` would see with `brand` active.
///
/// # Errors
///
/// Returns `CommandError::Json` if encoding fails, or `CommandError::Io` if
/// stdout cannot be written.
pub fn print(role: Role, brand: Brand) -> Result<(), CommandError> {
    let json = serde_json::to_string_pretty(&summarize(role, brand))?;
    emit(&[json])
}

fn summarize(role: Role, active_brand: Brand) -> Summary {
    let scope = ViewScope { role, active_brand };
    let orders = catalog::orders();
    let customers = catalog::customers();
    let campaigns = catalog::campaigns();

    Summary {
        role,
        active_brand,
        orders: OrderStats::collect(&scope.filter(&orders)),
        customers: CustomerStats::collect(&scope.filter(&customers)),
        campaigns: CampaignStats::collect(&scope.filter(&campaigns)),
    }
}
