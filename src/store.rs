use std::{sync::Arc, time::Duration};

use moka::future::Cache;
use tracing::{debug, info};

use crate::{
    auth::credentials::Credentials,
    error::ServiceResult,
    model::{holiday::PublicHoliday, leave::Leave, submission::LeaveSubmission},
    remote::LeaveSource,
};

/// Upper bound on users whose collections are held at once.
const MAX_USERS: u64 = 10_000;

/// A fetched collection and the password the sheet accepted for it.
///
/// Credentials are never checked locally, so a cached copy is only served
/// back to the same username/password pair.
#[derive(Clone)]
struct Snapshot<T> {
    password: String,
    items: Arc<Vec<T>>,
}

impl<T> Snapshot<T> {
    fn usable_by(&self, credentials: &Credentials) -> bool {
        self.password == credentials.password && !self.items.is_empty()
    }
}

/// Per-user snapshots of the remote collections.
///
/// Owned by the application and handed to handlers through `web::Data`;
/// nothing here is global. Each fetch replaces a user's collection
/// wholesale.
pub struct LeaveStore {
    source: Arc<dyn LeaveSource>,
    leaves: Cache<String, Snapshot<Leave>>,
    holidays: Cache<String, Snapshot<PublicHoliday>>,
}

impl LeaveStore {
    pub fn new(source: Arc<dyn LeaveSource>, ttl: Duration) -> Self {
        Self {
            source,
            leaves: Cache::builder()
                .max_capacity(MAX_USERS)
                .time_to_live(ttl)
                .build(),
            holidays: Cache::builder()
                .max_capacity(MAX_USERS)
                .time_to_live(ttl)
                .build(),
        }
    }

    /// Cached leaves unless `force` is set or nothing useful is cached.
    ///
    /// An empty cached list counts as "nothing cached" and is refetched, as
    /// does one fetched with a different password.
    pub async fn leaves(&self, credentials: &Credentials, force: bool) -> ServiceResult<Arc<Vec<Leave>>> {
        let key = credentials.cache_key();
        if !force {
            if let Some(cached) = self.leaves.get(&key).await.filter(|s| s.usable_by(credentials)) {
                return Ok(cached.items);
            }
        }

        let fresh = Arc::new(self.source.fetch_leaves(credentials).await?);
        debug!(username = %credentials.username, count = fresh.len(), "Leaves refreshed");
        self.leaves
            .insert(key, Snapshot { password: credentials.password.clone(), items: fresh.clone() })
            .await;
        Ok(fresh)
    }

    pub async fn holidays(
        &self,
        credentials: &Credentials,
        force: bool,
    ) -> ServiceResult<Arc<Vec<PublicHoliday>>> {
        let key = credentials.cache_key();
        if !force {
            if let Some(cached) = self.holidays.get(&key).await.filter(|s| s.usable_by(credentials)) {
                return Ok(cached.items);
            }
        }

        let fresh = Arc::new(self.source.fetch_holidays(credentials).await?);
        debug!(username = %credentials.username, count = fresh.len(), "Holidays refreshed");
        self.holidays
            .insert(key, Snapshot { password: credentials.password.clone(), items: fresh.clone() })
            .await;
        Ok(fresh)
    }

    /// Forwards a validated submission and drops the user's cached leaves so
    /// the new request shows up on the next read.
    pub async fn submit(&self, credentials: &Credentials, submission: &LeaveSubmission) -> ServiceResult<()> {
        self.source.submit_leave(credentials, submission).await?;
        self.leaves.invalidate(&credentials.cache_key()).await;
        Ok(())
    }

    /// Forgets everything held for `username` (logout).
    pub async fn reset(&self, username: &str) {
        self.leaves.invalidate(username).await;
        self.holidays.invalidate(username).await;
        info!(username, "Cached state reset");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use chrono::NaiveDate;

    use crate::model::leave::{Department, LeaveCategory, LeaveType};

    #[derive(Default)]
    struct CountingSource {
        leave_fetches: AtomicUsize,
        holiday_fetches: AtomicUsize,
        empty: bool,
    }

    fn leave() -> Leave {
        let day = NaiveDate::from_ymd_opt(2024, 12, 24).unwrap();
        Leave {
            id: "0".into(),
            name: "Lisa Anderson".into(),
            department: Department::from("Customer Support"),
            role: "Support Specialist".into(),
            leave_reason: "Christmas Eve".into(),
            leave_type: LeaveType::from("Full Day"),
            leave_category: LeaveCategory::from("Vacation"),
            start_date: day,
            end_date: day,
        }
    }

    #[async_trait]
    impl LeaveSource for CountingSource {
        async fn fetch_leaves(&self, _: &Credentials) -> ServiceResult<Vec<Leave>> {
            self.leave_fetches.fetch_add(1, Ordering::SeqCst);
            Ok(if self.empty { vec![] } else { vec![leave()] })
        }

        async fn fetch_holidays(&self, _: &Credentials) -> ServiceResult<Vec<PublicHoliday>> {
            self.holiday_fetches.fetch_add(1, Ordering::SeqCst);
            Ok(vec![])
        }

        async fn submit_leave(&self, _: &Credentials, _: &LeaveSubmission) -> ServiceResult<()> {
            Ok(())
        }
    }

    fn store(source: Arc<CountingSource>) -> LeaveStore {
        LeaveStore::new(source, Duration::from_secs(60))
    }

    #[actix_web::test]
    async fn caches_until_forced() {
        let source = Arc::new(CountingSource::default());
        let store = store(source.clone());
        let creds = Credentials::new("lisa", "pw");

        store.leaves(&creds, false).await.unwrap();
        store.leaves(&creds, false).await.unwrap();
        assert_eq!(source.leave_fetches.load(Ordering::SeqCst), 1);

        store.leaves(&creds, true).await.unwrap();
        assert_eq!(source.leave_fetches.load(Ordering::SeqCst), 2);
    }

    #[actix_web::test]
    async fn empty_collections_are_refetched() {
        let source = Arc::new(CountingSource {
            empty: true,
            ..CountingSource::default()
        });
        let store = store(source.clone());
        let creds = Credentials::new("lisa", "pw");

        store.holidays(&creds, false).await.unwrap();
        store.holidays(&creds, false).await.unwrap();
        assert_eq!(source.holiday_fetches.load(Ordering::SeqCst), 2);
    }

    #[actix_web::test]
    async fn other_password_is_not_served_from_cache() {
        let source = Arc::new(CountingSource::default());
        let store = store(source.clone());

        store.leaves(&Credentials::new("lisa", "pw"), false).await.unwrap();
        store.leaves(&Credentials::new("lisa", "guess"), false).await.unwrap();
        assert_eq!(source.leave_fetches.load(Ordering::SeqCst), 2);
    }

    #[actix_web::test]
    async fn usernames_are_cached_exactly() {
        let source = Arc::new(CountingSource::default());
        let store = store(source.clone());

        store.leaves(&Credentials::new("lisa", "pw"), false).await.unwrap();
        store.leaves(&Credentials::new("LISA", "pw"), false).await.unwrap();
        assert_eq!(source.leave_fetches.load(Ordering::SeqCst), 2);

        store.reset("LISA").await;
        store.leaves(&Credentials::new("lisa", "pw"), false).await.unwrap();
        assert_eq!(source.leave_fetches.load(Ordering::SeqCst), 2);
    }

    #[actix_web::test]
    async fn reset_and_submit_invalidate() {
        let source = Arc::new(CountingSource::default());
        let store = store(source.clone());
        let creds = Credentials::new("Lisa", "pw");

        store.leaves(&creds, false).await.unwrap();
        store.reset("Lisa").await;
        store.leaves(&creds, false).await.unwrap();
        assert_eq!(source.leave_fetches.load(Ordering::SeqCst), 2);

        let submission: LeaveSubmission = serde_json::from_value(serde_json::json!({
            "name": "Lisa Anderson",
            "email": "lisa@example.com",
            "department": "Engineering",
            "role": "Support Specialist",
            "leave_start_date": "2024-12-24",
            "leave_end_date": "2024-12-24",
            "reason_for_leave": "Christmas Eve",
            "leave_type": "Full Day",
            "leave_category": "Vacation"
        }))
        .unwrap();
        store.submit(&creds, &submission).await.unwrap();
        store.leaves(&creds, false).await.unwrap();
        assert_eq!(source.leave_fetches.load(Ordering::SeqCst), 3);
    }
}
