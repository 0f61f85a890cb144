//! Status projection
//!
//! Read-only view of the caller's own status. Absence of a caller and absence
//! of a record are both expected states; any other storage failure is
//! returned to the caller.

use tracing::instrument;

use crate::dto::{StatusView, UserStatusView};

use super::context::{ServiceContext, UserContext};
use super::error::ServiceResult;

/// Projects stored status records into the client-facing view
pub struct StatusProjectionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> StatusProjectionService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// View of the caller's status
    ///
    /// - no caller: [`StatusView::Anonymous`], serialized as `{}`
    /// - caller without a record: offline, not user-defined, no message
    /// - otherwise: the stored record
    #[instrument(skip(self))]
    pub async fn project(&self, user: &UserContext) -> ServiceResult<StatusView> {
        let Some(user_id) = user.user_id() else {
            return Ok(StatusView::Anonymous {});
        };

        match self.ctx.status_repo().find_by_user_id(user_id).await {
            Ok(record) => Ok(UserStatusView::from(&record).into()),
            Err(e) if e.is_not_found() => Ok(UserStatusView::offline(user_id).into()),
            Err(e) => Err(e.into()),
        }
    }
}
