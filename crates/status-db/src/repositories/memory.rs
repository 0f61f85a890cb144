//! In-memory implementation of UserStatusRepository
//!
//! Records are kept in insertion order behind a single lock, so the uniqueness
//! check and the insert happen as one atomic step.

use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::{debug, instrument};

use status_core::{PageRequest, RepoResult, UserStatus, UserStatusRepository};

use super::error::{status_already_exists, status_not_found};
use super::USER_STATUS_TABLE;

/// In-process status storage for tests and local development
#[derive(Default)]
pub struct InMemoryUserStatusRepository {
    records: RwLock<Vec<UserStatus>>,
}

impl InMemoryUserStatusRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

#[async_trait]
impl UserStatusRepository for InMemoryUserStatusRepository {
    fn table_name(&self) -> &'static str {
        USER_STATUS_TABLE
    }

    #[instrument(skip(self, status), fields(user_id = %status.user_id))]
    async fn insert(&self, status: &UserStatus) -> RepoResult<UserStatus> {
        let mut records = self.records.write();
        if records.iter().any(|r| r.user_id == status.user_id) {
            return Err(status_already_exists(&status.user_id));
        }
        records.push(status.clone());
        Ok(status.clone())
    }

    #[instrument(skip(self, status), fields(user_id = %status.user_id))]
    async fn update(&self, status: &UserStatus) -> RepoResult<UserStatus> {
        let mut records = self.records.write();
        let record = records
            .iter_mut()
            .find(|r| r.user_id == status.user_id)
            .ok_or_else(|| status_not_found(&status.user_id))?;
        *record = status.clone();
        Ok(status.clone())
    }

    async fn find_by_user_id(&self, user_id: &str) -> RepoResult<UserStatus> {
        self.records
            .read()
            .iter()
            .find(|r| r.user_id == user_id)
            .cloned()
            .ok_or_else(|| status_not_found(user_id))
    }

    async fn find_all(&self, page: PageRequest) -> RepoResult<Vec<UserStatus>> {
        Ok(self
            .records
            .read()
            .iter()
            .skip(page.skip())
            .take(page.take())
            .cloned()
            .collect())
    }

    #[instrument(skip(self))]
    async fn clear_older_than(&self, threshold: i64) -> RepoResult<u64> {
        let mut cleared = 0;
        for record in self.records.write().iter_mut() {
            if record.is_message_expired(threshold) {
                record.clear_message();
                cleared += 1;
            }
        }
        debug!(cleared, "Cleared expired status messages");
        Ok(cleared)
    }

    #[instrument(skip(self))]
    async fn delete_by_user_id(&self, user_id: &str) -> RepoResult<()> {
        let mut records = self.records.write();
        let index = records
            .iter()
            .position(|r| r.user_id == user_id)
            .ok_or_else(|| status_not_found(user_id))?;
        records.remove(index);
        Ok(())
    }

    async fn ping(&self) -> RepoResult<()> {
        Ok(())
    }
}
