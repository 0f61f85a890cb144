//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::UserStatus;
use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Pagination
// ============================================================================

/// Limit/offset window for listing queries
///
/// Both bounds are optional and applied independently. Negative values are
/// clamped to zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageRequest {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl PageRequest {
    pub fn new(limit: Option<i64>, offset: Option<i64>) -> Self {
        Self {
            limit: limit.map(|l| l.max(0)),
            offset: offset.map(|o| o.max(0)),
        }
    }

    /// No limit, no offset
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_limit(limit: i64) -> Self {
        Self::new(Some(limit), None)
    }

    /// Offset as a slice index (0 when unset)
    pub fn skip(&self) -> usize {
        self.offset.map_or(0, |o| o as usize)
    }

    /// Limit as a slice length (`usize::MAX` when unset)
    pub fn take(&self) -> usize {
        self.limit.map_or(usize::MAX, |l| l as usize)
    }
}

// ============================================================================
// User Status Repository
// ============================================================================

/// Storage for the single current status of each user
///
/// Implementations must enforce uniqueness of `user_id` atomically: `insert`
/// either stores the record or fails with [`DomainError::StatusAlreadyExists`],
/// never both and never a partial write.
#[async_trait]
pub trait UserStatusRepository: Send + Sync {
    /// Storage namespace (table) name
    fn table_name(&self) -> &'static str;

    /// Insert a new status record
    async fn insert(&self, status: &UserStatus) -> RepoResult<UserStatus>;

    /// Update the record with the same `user_id`
    async fn update(&self, status: &UserStatus) -> RepoResult<UserStatus>;

    /// Find the status of a user, failing with `StatusNotFound` if none exists
    async fn find_by_user_id(&self, user_id: &str) -> RepoResult<UserStatus>;

    /// List records in insertion order
    async fn find_all(&self, page: PageRequest) -> RepoResult<Vec<UserStatus>>;

    /// Null the custom message fields of every record whose `clear_at` is
    /// strictly before `threshold`. Returns the number of records cleared.
    async fn clear_older_than(&self, threshold: i64) -> RepoResult<u64>;

    /// Delete the status of a user
    async fn delete_by_user_id(&self, user_id: &str) -> RepoResult<()>;

    /// Check that the backing store is reachable
    async fn ping(&self) -> RepoResult<()>;
}
