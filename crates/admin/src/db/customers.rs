//! Customer repository.

use chrono::NaiveDate;

use loyalty_core::forms::ValidCustomer;
use loyalty_core::records::Customer;
use loyalty_core::scope::{ViewScope, search_customers};
use loyalty_core::{Brand, CustomerId, next_id};

use super::{Store, prepend};

/// Repository for loyalty members.
pub struct CustomerRepository<'a> {
    store: &'a Store,
}

impl<'a> CustomerRepository<'a> {
    #[must_use]
    pub const fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Customers visible in `scope` whose name or email contains `search`.
    pub async fn list(&self, scope: &ViewScope, search: &str) -> Vec<Customer> {
        let tables = self.store.read().await;
        search_customers(scope.filter(&tables.customers), search)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Insert a validated customer at the head of the table.
    pub async fn create(&self, customer: ValidCustomer, brand: Brand, today: NaiveDate) -> Customer {
        let mut tables = self.store.write().await;
        let id: CustomerId = next_id(tables.customers.iter().map(|c| c.id));
        let customer = customer.into_customer(id, brand, today);
        prepend(&mut tables.customers, customer.clone());
        customer
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use loyalty_core::forms::NewCustomerForm;
    use loyalty_core::{Role, Tier};

    use super::*;

    fn scope(role: Role, active_brand: Brand) -> ViewScope {
        ViewScope { role, active_brand }
    }

    #[tokio::test]
    async fn test_list_is_brand_scoped() {
        let store = Store::seeded();
        let repo = CustomerRepository::new(&store);

        let amka = repo.list(&scope(Role::Manager, Brand::Amka), "").await;
        assert_eq!(amka.len(), 2);
        assert!(amka.iter().all(|c| c.brand == Brand::Amka));

        let all = repo.list(&scope(Role::SuperAdmin, Brand::Amka), "").await;
        assert_eq!(all.len(), 5);
    }

    #[tokio::test]
    async fn test_search_matches_email() {
        let store = Store::seeded();
        let repo = CustomerRepository::new(&store);
        let found = repo.list(&scope(Role::SuperAdmin, Brand::Amka), "LISA.BROWN").await;
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Lisa Brown");
    }

    #[tokio::test]
    async fn test_create_prepends_with_next_id() {
        let store = Store::seeded();
        let repo = CustomerRepository::new(&store);
        let valid = NewCustomerForm {
            name: "Grace Wanjiru".to_owned(),
            email: "grace@email.com".to_owned(),
            phone: "+254 700 111 222".to_owned(),
        }
        .validate()
        .unwrap();
        let today = NaiveDate::from_ymd_opt(2024, 6, 14).unwrap();

        let created = repo.create(valid, Brand::Kasa, today).await;
        assert_eq!(created.id, CustomerId::new(6));
        assert_eq!(created.tier, Tier::Bronze);

        let all = repo.list(&scope(Role::SuperAdmin, Brand::Amka), "").await;
        assert_eq!(all.len(), 6);
        assert_eq!(all[0].id, CustomerId::new(6));
    }
}
