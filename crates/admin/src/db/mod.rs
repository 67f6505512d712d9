//! In-memory tables for the console.
//!
//! # Tables
//!
//! - `accounts` - Console account directory (seeded, registration appends)
//! - `customers` - Loyalty members
//! - `orders` - Table and counter orders
//! - `reservations` - Table bookings
//! - `campaigns` - Marketing campaigns
//! - `access_log` - Login attempts and other security events
//! - loyalty tiers, rewards, program stats, brand metrics, activity feed and
//!   the performance series, all read-only
//!
//! Every table is loaded from `loyalty_core::catalog` at boot and lives only
//! as long as the process. Writers hold the lock across id allocation and the
//! insert so ids stay unique under concurrent requests.

pub mod access_log;
pub mod accounts;
pub mod campaigns;
pub mod catalog;
pub mod customers;
pub mod orders;
pub mod reservations;

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use loyalty_core::catalog as seed;
use loyalty_core::records::{
    AccessLogEntry, Activity, BrandMetrics, Campaign, Customer, LoyaltyTier, Order,
    PerformancePoint, ProgramStats, Reservation, Reward,
};
use loyalty_core::{Brand, Identity, TransitionError};

pub use access_log::AccessLogRepository;
pub use accounts::AccountRepository;
pub use campaigns::CampaignRepository;
pub use catalog::{CatalogRepository, LoyaltyCatalog};
pub use customers::CustomerRepository;
pub use orders::OrderRepository;
pub use reservations::ReservationRepository;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Requested entity was not found.
    #[error("not found")]
    NotFound,

    /// Constraint violation (e.g., unique email).
    #[error("constraint violation: {0}")]
    Conflict(String),

    /// Requested status change is not allowed from the current status.
    #[error(transparent)]
    InvalidTransition(#[from] TransitionError),
}

/// Every table the console serves.
#[derive(Debug, Clone)]
pub struct Tables {
    pub accounts: Vec<Identity>,
    pub customers: Vec<Customer>,
    pub orders: Vec<Order>,
    pub reservations: Vec<Reservation>,
    pub campaigns: Vec<Campaign>,
    pub access_log: Vec<AccessLogEntry>,
    pub loyalty_tiers: Vec<LoyaltyTier>,
    pub rewards: Vec<Reward>,
    pub program_stats: ProgramStats,
    pub brand_metrics: Vec<(Brand, BrandMetrics)>,
    pub activities: Vec<Activity>,
    pub performance: Vec<PerformancePoint>,
}

impl Tables {
    /// Tables loaded from the seed catalog.
    #[must_use]
    pub fn seeded() -> Self {
        Self {
            accounts: seed::accounts(),
            customers: seed::customers(),
            orders: seed::orders(),
            reservations: seed::reservations(),
            campaigns: seed::campaigns(),
            access_log: seed::access_log(),
            loyalty_tiers: seed::loyalty_tiers(),
            rewards: seed::rewards(),
            program_stats: seed::program_stats(),
            brand_metrics: seed::brand_metrics(),
            activities: seed::activities(),
            performance: seed::performance(),
        }
    }
}

/// Shared handle to the tables.
#[derive(Debug, Clone)]
pub struct Store {
    tables: Arc<RwLock<Tables>>,
}

impl Store {
    #[must_use]
    pub fn new(tables: Tables) -> Self {
        Self {
            tables: Arc::new(RwLock::new(tables)),
        }
    }

    /// A store loaded from the seed catalog.
    #[must_use]
    pub fn seeded() -> Self {
        Self::new(Tables::seeded())
    }

    pub(crate) async fn read(&self) -> RwLockReadGuard<'_, Tables> {
        self.tables.read().await
    }

    pub(crate) async fn write(&self) -> RwLockWriteGuard<'_, Tables> {
        self.tables.write().await
    }

    /// Whether the account directory is loaded. Used by the readiness probe.
    pub async fn is_ready(&self) -> bool {
        !self.read().await.accounts.is_empty()
    }
}

/// Newest rows go first.
fn prepend<T>(rows: &mut Vec<T>, row: T) {
    rows.insert(0, row);
}
