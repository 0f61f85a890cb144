//! Status service
//!
//! Write use cases for a user's own status and public reads of other users'
//! statuses. Writes are upserts: the first action of a user creates the
//! record, later actions update it in place.

use status_core::{DomainError, PageRequest, PredefinedStatus, StatusType, UserStatus};
use tracing::{debug, info, instrument};
use unicode_segmentation::UnicodeSegmentation;

use crate::dto::requests::MAX_MESSAGE_LENGTH;
use crate::dto::{
    PublicStatusResponse, SetCustomMessageRequest, SetPredefinedMessageRequest, UserStatusView,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Status service
pub struct StatusService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> StatusService<'a> {
    /// Create a new StatusService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Change the availability status of a user
    #[instrument(skip(self))]
    pub async fn set_status(
        &self,
        user_id: &str,
        status_type: &str,
        is_user_defined: bool,
    ) -> ServiceResult<UserStatusView> {
        let status_type: StatusType = status_type
            .parse()
            .map_err(|_| DomainError::InvalidStatusType(status_type.to_string()))?;
        let now = self.ctx.now();

        let saved = self
            .upsert(user_id, |record| {
                record.set_status(status_type, now, is_user_defined);
            })
            .await?;

        info!(user_id, status = %status_type, "Status updated");
        Ok(UserStatusView::from(saved))
    }

    /// Replace the message with an entry of the predefined catalog
    ///
    /// Without an explicit `clear_at` the entry's own clear-at policy applies.
    #[instrument(skip(self, request), fields(message_id = %request.message_id))]
    pub async fn set_predefined_message(
        &self,
        user_id: &str,
        request: SetPredefinedMessageRequest,
    ) -> ServiceResult<UserStatusView> {
        let predefined = PredefinedStatus::find(&request.message_id)
            .ok_or_else(|| DomainError::PredefinedStatusNotFound(request.message_id.clone()))?;
        let now = self.ctx.now();

        let clear_at = match request.clear_at {
            Some(clear_at) => Some(validate_clear_at(clear_at, now)?),
            None => predefined.clear_at.resolve(now),
        };

        let saved = self
            .upsert(user_id, |record| {
                record.set_predefined_message(predefined, clear_at);
            })
            .await?;

        info!(user_id, message_id = predefined.id, "Predefined message set");
        Ok(UserStatusView::from(saved))
    }

    /// Replace the message with free text and/or an icon
    #[instrument(skip(self, request))]
    pub async fn set_custom_message(
        &self,
        user_id: &str,
        request: SetCustomMessageRequest,
    ) -> ServiceResult<UserStatusView> {
        let now = self.ctx.now();

        let icon = request.status_icon.map(|icon| validate_icon(&icon)).transpose()?;
        let message = request
            .message
            .map(|message| message.trim().to_string())
            .filter(|message| !message.is_empty());
        if let Some(message) = &message {
            validate_message(message)?;
        }
        if icon.is_none() && message.is_none() {
            return Err(ServiceError::validation(
                "Either a status icon or a message is required",
            ));
        }
        let clear_at = request
            .clear_at
            .map(|clear_at| validate_clear_at(clear_at, now))
            .transpose()?;

        let saved = self
            .upsert(user_id, |record| {
                record.set_custom_message(icon.clone(), message.clone(), clear_at);
            })
            .await?;

        info!(user_id, "Custom message set");
        Ok(UserStatusView::from(saved))
    }

    /// Remove message, icon and expiry; the status itself is kept
    #[instrument(skip(self))]
    pub async fn clear_message(&self, user_id: &str) -> ServiceResult<UserStatusView> {
        let repo = self.ctx.status_repo();
        let mut record = match repo.find_by_user_id(user_id).await {
            Ok(record) => record,
            // Nothing stored means nothing to clear
            Err(e) if e.is_not_found() => return Ok(UserStatusView::offline(user_id)),
            Err(e) => return Err(e.into()),
        };

        record.clear_message();
        let saved = repo.update(&record).await?;

        info!(user_id, "Message cleared");
        Ok(UserStatusView::from(saved))
    }

    /// Delete the status record of a user
    #[instrument(skip(self))]
    pub async fn remove_status(&self, user_id: &str) -> ServiceResult<()> {
        self.ctx.status_repo().delete_by_user_id(user_id).await?;
        info!(user_id, "Status removed");
        Ok(())
    }

    /// Public status of one user
    #[instrument(skip(self))]
    pub async fn find_by_user_id(&self, user_id: &str) -> ServiceResult<PublicStatusResponse> {
        let status = self.ctx.status_repo().find_by_user_id(user_id).await?;
        Ok(PublicStatusResponse::from(status))
    }

    /// Public statuses of all users, in storage order
    #[instrument(skip(self))]
    pub async fn find_all(&self, page: PageRequest) -> ServiceResult<Vec<PublicStatusResponse>> {
        let statuses = self.ctx.status_repo().find_all(page).await?;
        Ok(statuses.into_iter().map(PublicStatusResponse::from).collect())
    }

    /// Apply `change` to the user's record, creating an offline record first
    /// if the user has none
    ///
    /// A concurrent insert for the same user surfaces as a uniqueness
    /// conflict, which is resolved by re-reading and updating the winner's
    /// record.
    async fn upsert<F>(&self, user_id: &str, change: F) -> ServiceResult<UserStatus>
    where
        F: Fn(&mut UserStatus),
    {
        let repo = self.ctx.status_repo();

        match repo.find_by_user_id(user_id).await {
            Ok(mut record) => {
                change(&mut record);
                return Ok(repo.update(&record).await?);
            }
            Err(e) if e.is_not_found() => {}
            Err(e) => return Err(e.into()),
        }

        let mut record = UserStatus::offline(user_id, self.ctx.now());
        change(&mut record);

        match repo.insert(&record).await {
            Ok(inserted) => Ok(inserted),
            Err(e) if e.is_conflict() => {
                debug!(user_id, "Status created concurrently, updating instead");
                let mut record = repo.find_by_user_id(user_id).await?;
                change(&mut record);
                Ok(repo.update(&record).await?)
            }
            Err(e) => Err(e.into()),
        }
    }
}

/// Icons are a single user-perceived character outside plain ASCII
fn validate_icon(icon: &str) -> Result<String, DomainError> {
    let icon = icon.trim();
    if icon.is_ascii() || icon.graphemes(true).count() != 1 {
        return Err(DomainError::InvalidIcon);
    }
    Ok(icon.to_string())
}

fn validate_message(message: &str) -> Result<(), DomainError> {
    if message.chars().count() > MAX_MESSAGE_LENGTH {
        return Err(DomainError::MessageTooLong {
            max: MAX_MESSAGE_LENGTH,
        });
    }
    Ok(())
}

fn validate_clear_at(clear_at: i64, now: i64) -> Result<i64, DomainError> {
    if clear_at <= now {
        return Err(DomainError::ClearAtInPast);
    }
    Ok(clear_at)
}
