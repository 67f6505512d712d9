//! Read-only program catalog: tiers, rewards, headline metrics and feeds.

use loyalty_core::records::{
    Activity, BrandMetrics, LoyaltyTier, PerformancePoint, ProgramStats, Reward,
};
use loyalty_core::scope::{ViewScope, dashboard_metrics};
use loyalty_core::Brand;
use serde::Serialize;

use super::Store;

/// Tiers, rewards and program-wide numbers for the loyalty screen.
#[derive(Debug, Clone, Serialize)]
pub struct LoyaltyCatalog {
    pub tiers: Vec<LoyaltyTier>,
    pub rewards: Vec<Reward>,
    pub stats: ProgramStats,
}

/// Repository over the static catalog tables.
pub struct CatalogRepository<'a> {
    store: &'a Store,
}

impl<'a> CatalogRepository<'a> {
    #[must_use]
    pub const fn new(store: &'a Store) -> Self {
        Self { store }
    }

    pub async fn loyalty(&self) -> LoyaltyCatalog {
        let tables = self.store.read().await;
        LoyaltyCatalog {
            tiers: tables.loyalty_tiers.clone(),
            rewards: tables.rewards.clone(),
            stats: tables.program_stats.clone(),
        }
    }

    /// Headline metrics for the scope; the union of every brand for super admins.
    pub async fn metrics(&self, scope: &ViewScope) -> Option<BrandMetrics> {
        let tables = self.store.read().await;
        dashboard_metrics(scope, &tables.brand_metrics)
    }

    /// Headline metrics for one brand.
    pub async fn brand_metrics(&self, brand: Brand) -> Option<BrandMetrics> {
        let tables = self.store.read().await;
        tables
            .brand_metrics
            .iter()
            .find(|(b, _)| *b == brand)
            .map(|(_, metrics)| metrics.clone())
    }

    pub async fn activities(&self) -> Vec<Activity> {
        self.store.read().await.activities.clone()
    }

    pub async fn performance(&self) -> Vec<PerformancePoint> {
        self.store.read().await.performance.clone()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use loyalty_core::Role;

    use super::*;

    #[tokio::test]
    async fn test_metrics_per_scope() {
        let store = Store::seeded();
        let repo = CatalogRepository::new(&store);

        let kasa = repo
            .metrics(&ViewScope {
                role: Role::Admin,
                active_brand: Brand::Kasa,
            })
            .await
            .unwrap();
        assert_eq!(kasa.total_users, 3156);

        let global = repo
            .metrics(&ViewScope {
                role: Role::SuperAdmin,
                active_brand: Brand::Kasa,
            })
            .await
            .unwrap();
        assert_eq!(global.total_users, 2847 + 1923 + 3156);
        assert_eq!(global.today_orders, 127 + 89 + 156);
    }

    #[tokio::test]
    async fn test_loyalty_catalog() {
        let store = Store::seeded();
        let loyalty = CatalogRepository::new(&store).loyalty().await;
        assert_eq!(loyalty.tiers.len(), 3);
        assert_eq!(loyalty.rewards.len(), 4);
        assert_eq!(loyalty.stats.total_members, 268);
    }
}
