//! Order repository.

use chrono::NaiveDateTime;

use loyalty_core::forms::ValidOrder;
use loyalty_core::records::Order;
use loyalty_core::scope::{ViewScope, search_orders};
use loyalty_core::{Brand, OrderId, OrderStatus, next_id};

use super::{RepositoryError, Store, prepend};

/// Repository for orders.
pub struct OrderRepository<'a> {
    store: &'a Store,
}

impl<'a> OrderRepository<'a> {
    #[must_use]
    pub const fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Orders visible in `scope`, filtered by customer name or order code and
    /// optionally by status.
    pub async fn list(
        &self,
        scope: &ViewScope,
        search: &str,
        status: Option<OrderStatus>,
    ) -> Vec<Order> {
        let tables = self.store.read().await;
        search_orders(scope.filter(&tables.orders), search, status)
            .into_iter()
            .cloned()
            .collect()
    }

    pub async fn create(&self, order: ValidOrder, brand: Brand, now: NaiveDateTime) -> Order {
        let mut tables = self.store.write().await;
        let id: OrderId = next_id(tables.orders.iter().map(|o| o.id));
        let order = order.into_order(id, brand, now);
        prepend(&mut tables.orders, order.clone());
        order
    }

    /// Move an order to `status`. Completing an order stamps its completion time.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no order with `id` is visible in
    /// `scope`, or `RepositoryError::InvalidTransition` if the move is not allowed.
    pub async fn update_status(
        &self,
        scope: &ViewScope,
        id: OrderId,
        status: OrderStatus,
        now: NaiveDateTime,
    ) -> Result<Order, RepositoryError> {
        let mut tables = self.store.write().await;
        let order = tables
            .orders
            .iter_mut()
            .find(|o| o.id == id && scope.admits(o.brand))
            .ok_or(RepositoryError::NotFound)?;

        order.status = order.status.transition(status)?;
        if order.status == OrderStatus::Completed {
            order.completed_time = Some(now);
        }
        Ok(order.clone())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::NaiveDate;
    use loyalty_core::Role;

    use super::*;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 14)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn manager(brand: Brand) -> ViewScope {
        ViewScope {
            role: Role::Manager,
            active_brand: brand,
        }
    }

    #[tokio::test]
    async fn test_status_filter() {
        let store = Store::seeded();
        let repo = OrderRepository::new(&store);
        let global = ViewScope {
            role: Role::SuperAdmin,
            active_brand: Brand::Amka,
        };
        let completed = repo.list(&global, "", Some(OrderStatus::Completed)).await;
        assert_eq!(completed.len(), 2);
        let by_code = repo.list(&global, "ord-003", None).await;
        assert_eq!(by_code.len(), 1);
    }

    #[tokio::test]
    async fn test_pending_order_moves_through_to_completed() {
        let store = Store::seeded();
        let repo = OrderRepository::new(&store);
        let kasa = manager(Brand::Kasa);

        let preparing = repo
            .update_status(&kasa, OrderId::new(3), OrderStatus::Preparing, now())
            .await
            .unwrap();
        assert_eq!(preparing.status, OrderStatus::Preparing);
        assert!(preparing.completed_time.is_none());

        let completed = repo
            .update_status(&kasa, OrderId::new(3), OrderStatus::Completed, now())
            .await
            .unwrap();
        assert_eq!(completed.completed_time, Some(now()));
    }

    #[tokio::test]
    async fn test_invalid_transition_leaves_order_unchanged() {
        let store = Store::seeded();
        let repo = OrderRepository::new(&store);
        let amka = manager(Brand::Amka);

        let err = repo
            .update_status(&amka, OrderId::new(1), OrderStatus::Pending, now())
            .await
            .unwrap_err();
        assert!(matches!(err, RepositoryError::InvalidTransition(_)));

        let orders = repo.list(&amka, "ORD-001", None).await;
        assert_eq!(orders[0].status, OrderStatus::Completed);
    }

    #[tokio::test]
    async fn test_other_brands_orders_are_not_found() {
        let store = Store::seeded();
        let repo = OrderRepository::new(&store);
        let err = repo
            .update_status(&manager(Brand::Amka), OrderId::new(2), OrderStatus::Completed, now())
            .await
            .unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound));
    }
}
