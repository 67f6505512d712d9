//! Security access log.

use loyalty_core::records::AccessLogEntry;

use super::{Store, prepend};

/// Repository for security events. Newest entries come first.
pub struct AccessLogRepository<'a> {
    store: &'a Store,
}

impl<'a> AccessLogRepository<'a> {
    #[must_use]
    pub const fn new(store: &'a Store) -> Self {
        Self { store }
    }

    pub async fn record(&self, entry: AccessLogEntry) {
        let mut tables = self.store.write().await;
        prepend(&mut tables.access_log, entry);
    }

    pub async fn list(&self) -> Vec<AccessLogEntry> {
        self.store.read().await.access_log.clone()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::NaiveDate;
    use loyalty_core::AccessOutcome;

    use super::*;

    #[tokio::test]
    async fn test_record_prepends() {
        let store = Store::seeded();
        let repo = AccessLogRepository::new(&store);
        let before = repo.list().await.len();

        repo.record(AccessLogEntry {
            event: "Failed Login".to_owned(),
            user: "intruder@test.com".to_owned(),
            ip: "10.0.0.9".to_owned(),
            time: NaiveDate::from_ymd_opt(2024, 6, 15)
                .unwrap()
                .and_hms_opt(8, 0, 0)
                .unwrap(),
            status: AccessOutcome::Failure,
        })
        .await;

        let log = repo.list().await;
        assert_eq!(log.len(), before + 1);
        assert_eq!(log[0].user, "intruder@test.com");
    }
}
