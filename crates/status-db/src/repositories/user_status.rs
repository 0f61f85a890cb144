//! PostgreSQL implementation of UserStatusRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, instrument};

use status_core::{PageRequest, RepoResult, UserStatus, UserStatusRepository};

use crate::mappers::UserStatusParams;
use crate::models::UserStatusModel;

use super::error::{map_db_error, map_unique_violation, status_already_exists, status_not_found};
use super::USER_STATUS_TABLE;

/// PostgreSQL implementation of UserStatusRepository
#[derive(Clone)]
pub struct PgUserStatusRepository {
    pool: PgPool,
}

impl PgUserStatusRepository {
    /// Create a new PgUserStatusRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Underlying connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl UserStatusRepository for PgUserStatusRepository {
    fn table_name(&self) -> &'static str {
        USER_STATUS_TABLE
    }

    #[instrument(skip(self, status), fields(user_id = %status.user_id))]
    async fn insert(&self, status: &UserStatus) -> RepoResult<UserStatus> {
        let params = UserStatusParams::new(status);

        let row = sqlx::query_as::<_, UserStatusModel>(
            r"
            INSERT INTO user_status (user_id, status, status_timestamp, is_user_defined,
                                     message_id, custom_icon, custom_message, clear_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, user_id, status, status_timestamp, is_user_defined,
                      message_id, custom_icon, custom_message, clear_at
            ",
        )
        .bind(params.user_id)
        .bind(params.status)
        .bind(params.status_timestamp)
        .bind(params.is_user_defined)
        .bind(params.message_id)
        .bind(params.custom_icon)
        .bind(params.custom_message)
        .bind(params.clear_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || status_already_exists(params.user_id)))?;

        Ok(UserStatus::from(row))
    }

    #[instrument(skip(self, status), fields(user_id = %status.user_id))]
    async fn update(&self, status: &UserStatus) -> RepoResult<UserStatus> {
        let params = UserStatusParams::new(status);

        let row = sqlx::query_as::<_, UserStatusModel>(
            r"
            UPDATE user_status
            SET status = $2, status_timestamp = $3, is_user_defined = $4,
                message_id = $5, custom_icon = $6, custom_message = $7, clear_at = $8
            WHERE user_id = $1
            RETURNING id, user_id, status, status_timestamp, is_user_defined,
                      message_id, custom_icon, custom_message, clear_at
            ",
        )
        .bind(params.user_id)
        .bind(params.status)
        .bind(params.status_timestamp)
        .bind(params.is_user_defined)
        .bind(params.message_id)
        .bind(params.custom_icon)
        .bind(params.custom_message)
        .bind(params.clear_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        row.map(UserStatus::from)
            .ok_or_else(|| status_not_found(params.user_id))
    }

    #[instrument(skip(self))]
    async fn find_by_user_id(&self, user_id: &str) -> RepoResult<UserStatus> {
        let row = sqlx::query_as::<_, UserStatusModel>(
            r"
            SELECT id, user_id, status, status_timestamp, is_user_defined,
                   message_id, custom_icon, custom_message, clear_at
            FROM user_status
            WHERE user_id = $1
            ",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        row.map(UserStatus::from)
            .ok_or_else(|| status_not_found(user_id))
    }

    #[instrument(skip(self))]
    async fn find_all(&self, page: PageRequest) -> RepoResult<Vec<UserStatus>> {
        // NULL limit means no limit, NULL offset means 0
        let rows = sqlx::query_as::<_, UserStatusModel>(
            r"
            SELECT id, user_id, status, status_timestamp, is_user_defined,
                   message_id, custom_icon, custom_message, clear_at
            FROM user_status
            ORDER BY id ASC
            LIMIT $1 OFFSET $2
            ",
        )
        .bind(page.limit)
        .bind(page.offset)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(UserStatus::from).collect())
    }

    #[instrument(skip(self))]
    async fn clear_older_than(&self, threshold: i64) -> RepoResult<u64> {
        let result = sqlx::query(
            r"
            UPDATE user_status
            SET message_id = NULL, custom_icon = NULL, custom_message = NULL, clear_at = NULL
            WHERE clear_at IS NOT NULL AND clear_at < $1
            ",
        )
        .bind(threshold)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        let cleared = result.rows_affected();
        debug!(cleared, "Cleared expired status messages");
        Ok(cleared)
    }

    #[instrument(skip(self))]
    async fn delete_by_user_id(&self, user_id: &str) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM user_status WHERE user_id = $1")
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(status_not_found(user_id));
        }

        Ok(())
    }

    async fn ping(&self) -> RepoResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;
        Ok(())
    }
}
