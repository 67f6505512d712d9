//! Brand/role scoping and the summary counters built on it.
//!
//! Every list screen follows the same rule: a row is visible when the viewer
//! is a super admin, or when the row belongs to the viewer's active brand.
//! Counters are plain folds over the visible rows.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::identity::Identity;
use crate::records::{BrandMetrics, Campaign, Customer, Order, Reservation};
use crate::types::{Brand, CampaignStatus, Kes, OrderStatus, Role, Tier};

/// A record that belongs to exactly one brand.
pub trait Branded {
    /// The owning brand.
    fn brand(&self) -> Brand;
}

macro_rules! impl_branded {
    ($($ty:ty),* $(,)?) => {
        $(impl Branded for $ty {
            fn brand(&self) -> Brand {
                self.brand
            }
        })*
    };
}

impl_branded!(Customer, Order, Reservation, Campaign);

/// Who is looking and at which brand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewScope {
    pub role: Role,
    pub active_brand: Brand,
}

impl ViewScope {
    /// Build a scope, pinning non-global roles to their own brand.
    ///
    /// `requested` is honoured only for roles that may switch brands.
    #[must_use]
    pub fn for_identity(identity: &Identity, requested: Option<Brand>) -> Self {
        let active_brand = match (identity.role.can_switch_brands(), requested) {
            (true, Some(brand)) => brand,
            _ => identity.home_brand(),
        };
        Self {
            role: identity.role,
            active_brand,
        }
    }

    /// Whether a row owned by `brand` is visible.
    #[must_use]
    pub fn admits(&self, brand: Brand) -> bool {
        self.role == Role::SuperAdmin || brand == self.active_brand
    }

    /// Visible rows, in their stored order.
    pub fn filter<'a, T: Branded>(&self, rows: &'a [T]) -> Vec<&'a T> {
        rows.iter().filter(|row| self.admits(row.brand())).collect()
    }
}

/// Case-insensitive substring match; an empty needle matches everything.
fn contains_ci(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Customers whose name or email contains `search`.
#[must_use]
pub fn search_customers<'a>(rows: Vec<&'a Customer>, search: &str) -> Vec<&'a Customer> {
    let search = search.trim();
    rows.into_iter()
        .filter(|c| contains_ci(&c.name, search) || contains_ci(c.email.as_str(), search))
        .collect()
}

/// Orders whose customer name or order code contains `search`, optionally
/// narrowed to one status.
#[must_use]
pub fn search_orders<'a>(
    rows: Vec<&'a Order>,
    search: &str,
    status: Option<OrderStatus>,
) -> Vec<&'a Order> {
    let search = search.trim();
    rows.into_iter()
        .filter(|o| contains_ci(&o.customer_name, search) || contains_ci(&o.id.code(), search))
        .filter(|o| status.is_none_or(|s| o.status == s))
        .collect()
}

/// Headline numbers for the customer screen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerStats {
    pub total: usize,
    pub gold: usize,
    pub silver: usize,
    pub bronze: usize,
    pub total_points: u64,
    pub total_spent: Kes,
}

impl CustomerStats {
    #[must_use]
    pub fn collect(rows: &[&Customer]) -> Self {
        let tier_count = |tier: Tier| rows.iter().filter(|c| c.tier == tier).count();
        Self {
            total: rows.len(),
            gold: tier_count(Tier::Gold),
            silver: tier_count(Tier::Silver),
            bronze: tier_count(Tier::Bronze),
            total_points: rows.iter().map(|c| u64::from(c.points)).sum(),
            total_spent: rows.iter().map(|c| c.spent).sum(),
        }
    }
}

/// Headline numbers for the orders screen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderStats {
    pub total: usize,
    pub completed: usize,
    pub preparing: usize,
    pub pending: usize,
    pub cancelled: usize,
    pub total_revenue: Kes,
    pub total_points: u64,
}

impl OrderStats {
    #[must_use]
    pub fn collect(rows: &[&Order]) -> Self {
        let status_count = |status: OrderStatus| rows.iter().filter(|o| o.status == status).count();
        Self {
            total: rows.len(),
            completed: status_count(OrderStatus::Completed),
            preparing: status_count(OrderStatus::Preparing),
            pending: status_count(OrderStatus::Pending),
            cancelled: status_count(OrderStatus::Cancelled),
            total_revenue: rows.iter().map(|o| o.total).sum(),
            total_points: rows.iter().map(|o| u64::from(o.points_earned)).sum(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationStats {
    pub total: usize,
    pub guests: u64,
}

impl ReservationStats {
    #[must_use]
    pub fn collect(rows: &[&Reservation]) -> Self {
        Self {
            total: rows.len(),
            guests: rows.iter().map(|r| u64::from(r.guests)).sum(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignStats {
    pub total: usize,
    pub active: usize,
    pub scheduled: usize,
    pub completed: usize,
    pub total_reach: u64,
    pub total_conversions: u64,
}

impl CampaignStats {
    #[must_use]
    pub fn collect(rows: &[&Campaign]) -> Self {
        let status_count =
            |status: CampaignStatus| rows.iter().filter(|c| c.status == status).count();
        Self {
            total: rows.len(),
            active: status_count(CampaignStatus::Active),
            scheduled: status_count(CampaignStatus::Scheduled),
            completed: status_count(CampaignStatus::Completed),
            total_reach: rows.iter().map(|c| u64::from(c.reach)).sum(),
            total_conversions: rows.iter().map(|c| u64::from(c.conversions)).sum(),
        }
    }
}

/// The `limit` customers with the most points, highest first.
///
/// Ties keep their stored order.
#[must_use]
pub fn top_customers<'a>(mut rows: Vec<&'a Customer>, limit: usize) -> Vec<&'a Customer> {
    rows.sort_by(|a, b| b.points.cmp(&a.points));
    rows.truncate(limit);
    rows
}

/// Dashboard metrics for a scope.
///
/// Super admins see the union of every brand: counts and money are summed,
/// rates are averaged. Everyone else sees their active brand's row.
#[must_use]
pub fn dashboard_metrics(
    scope: &ViewScope,
    per_brand: &[(Brand, BrandMetrics)],
) -> Option<BrandMetrics> {
    let visible: Vec<&BrandMetrics> = per_brand
        .iter()
        .filter(|(brand, _)| scope.admits(*brand))
        .map(|(_, metrics)| metrics)
        .collect();

    match visible.as_slice() {
        [] => None,
        [single] => Some((*single).clone()),
        many => Some(combine_metrics(many)),
    }
}

fn combine_metrics(rows: &[&BrandMetrics]) -> BrandMetrics {
    let count = Decimal::from(rows.len());
    let mean = |pick: fn(&BrandMetrics) -> Decimal| {
        (rows.iter().map(|m| pick(*m)).sum::<Decimal>() / count).round_dp(2)
    };

    BrandMetrics {
        total_users: rows.iter().map(|m| m.total_users).sum(),
        revenue: rows.iter().map(|m| m.revenue).sum(),
        points_redeemed: rows.iter().map(|m| m.points_redeemed).sum(),
        growth_percent: mean(|m| m.growth_percent),
        today_orders: rows.iter().map(|m| m.today_orders).sum(),
        average_spend: Kes::new(mean(|m| m.average_spend.amount())),
        satisfaction: mean(|m| m.satisfaction),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::types::{AccountId, BrandScope, Email};

    fn identity(role: Role, scope: BrandScope) -> Identity {
        Identity::new(
            AccountId::new(1),
            Email::parse("someone@amka.com").unwrap(),
            role,
            scope,
            "Some",
            "One",
        )
        .unwrap()
    }

    #[test]
    fn test_branded_roles_see_only_their_brand() {
        let orders = catalog::orders();
        for brand in Brand::ALL {
            for role in [Role::Admin, Role::Manager, Role::Waiter] {
                let scope = ViewScope::for_identity(&identity(role, brand.into()), None);
                let visible = scope.filter(&orders);
                assert!(!visible.is_empty());
                assert!(visible.iter().all(|o| o.brand == brand));
            }
        }
    }

    #[test]
    fn test_branded_roles_cannot_request_another_brand() {
        let admin = identity(Role::Admin, Brand::Amka.into());
        let scope = ViewScope::for_identity(&admin, Some(Brand::Kasa));
        assert_eq!(scope.active_brand, Brand::Amka);
    }

    #[test]
    fn test_super_admin_sees_union() {
        let orders = catalog::orders();
        let scope = ViewScope::for_identity(&identity(Role::SuperAdmin, BrandScope::All), None);
        assert_eq!(scope.active_brand, Brand::Amka);
        assert_eq!(scope.filter(&orders).len(), orders.len());

        let switched =
            ViewScope::for_identity(&identity(Role::SuperAdmin, BrandScope::All), Some(Brand::Kasa));
        assert_eq!(switched.active_brand, Brand::Kasa);
        assert_eq!(switched.filter(&orders).len(), orders.len());
    }

    #[test]
    fn test_order_stats_for_amka() {
        let orders = catalog::orders();
        let scope = ViewScope {
            role: Role::Admin,
            active_brand: Brand::Amka,
        };
        let stats = OrderStats::collect(&scope.filter(&orders));
        assert_eq!(stats.total, 2);
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.cancelled, 1);
        assert_eq!(stats.total_revenue, Kes::whole(1_300));
        assert_eq!(stats.total_points, 130);
    }

    #[test]
    fn test_order_stats_saturate_on_huge_totals() {
        let mut orders = catalog::orders();
        for order in &mut orders {
            order.total = Kes::new(Decimal::MAX);
            order.points_earned = u32::MAX;
        }
        let rows: Vec<&Order> = orders.iter().collect();
        let stats = OrderStats::collect(&rows);
        assert_eq!(stats.total_revenue, Kes::new(Decimal::MAX));
        assert_eq!(stats.total_points, u64::from(u32::MAX) * 5);
    }

    #[test]
    fn test_customer_stats_union() {
        let customers = catalog::customers();
        let all: Vec<&Customer> = customers.iter().collect();
        let stats = CustomerStats::collect(&all);
        assert_eq!(stats.total, 5);
        assert_eq!((stats.gold, stats.silver, stats.bronze), (2, 2, 1));
        assert_eq!(stats.total_points, 33_690);
        assert_eq!(stats.total_spent, Kes::whole(187_300));
    }

    #[test]
    fn test_search_customers_by_name_or_email() {
        let customers = catalog::customers();
        let all: Vec<&Customer> = customers.iter().collect();
        assert_eq!(search_customers(all.clone(), "SARAH").len(), 1);
        assert_eq!(search_customers(all.clone(), "chen@").len(), 1);
        assert_eq!(search_customers(all.clone(), "").len(), 5);
        assert!(search_customers(all, "nobody").is_empty());
    }

    #[test]
    fn test_search_orders_by_code_and_status() {
        let orders = catalog::orders();
        let all: Vec<&Order> = orders.iter().collect();
        let by_code = search_orders(all.clone(), "ord-003", None);
        assert_eq!(by_code.len(), 1);
        assert_eq!(by_code[0].customer_name, "Emma Davis");

        let completed = search_orders(all, "", Some(OrderStatus::Completed));
        assert_eq!(completed.len(), 2);
    }

    #[test]
    fn test_top_customers_orders_by_points() {
        let customers = catalog::customers();
        let top = top_customers(customers.iter().collect(), 3);
        let names: Vec<&str> = top.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Sarah Johnson", "Michael Chen", "Emma Davis"]);
    }

    #[test]
    fn test_dashboard_metrics_single_brand() {
        let metrics = catalog::brand_metrics();
        let scope = ViewScope {
            role: Role::Manager,
            active_brand: Brand::Mawimbi,
        };
        let view = dashboard_metrics(&scope, &metrics).unwrap();
        assert_eq!(view.total_users, 1_923);
        assert_eq!(view.today_orders, 89);
    }

    #[test]
    fn test_dashboard_metrics_union_sums_and_averages() {
        let metrics = catalog::brand_metrics();
        let scope = ViewScope {
            role: Role::SuperAdmin,
            active_brand: Brand::Amka,
        };
        let view = dashboard_metrics(&scope, &metrics).unwrap();
        assert_eq!(view.total_users, 2_847 + 1_923 + 3_156);
        assert_eq!(view.today_orders, 127 + 89 + 156);
        assert_eq!(view.revenue, Kes::whole(45_230 + 38_750 + 67_890));
        assert_eq!(view.satisfaction, Decimal::new(480, 2));
    }
}
