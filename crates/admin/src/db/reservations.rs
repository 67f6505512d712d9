//! Reservation repository.

use loyalty_core::forms::ValidReservation;
use loyalty_core::records::Reservation;
use loyalty_core::scope::ViewScope;
use loyalty_core::{Brand, ReservationId, next_id};

use super::{Store, prepend};

/// Repository for table bookings. Bookings are only ever added.
pub struct ReservationRepository<'a> {
    store: &'a Store,
}

impl<'a> ReservationRepository<'a> {
    #[must_use]
    pub const fn new(store: &'a Store) -> Self {
        Self { store }
    }

    pub async fn list(&self, scope: &ViewScope) -> Vec<Reservation> {
        let tables = self.store.read().await;
        scope.filter(&tables.reservations).into_iter().cloned().collect()
    }

    pub async fn create(&self, reservation: ValidReservation, brand: Brand) -> Reservation {
        let mut tables = self.store.write().await;
        let id: ReservationId = next_id(tables.reservations.iter().map(|r| r.id));
        let reservation = reservation.into_reservation(id, brand);
        prepend(&mut tables.reservations, reservation.clone());
        reservation
    }
}
