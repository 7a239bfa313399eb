use medialog_domain::id::{NotificationId, UserId};

use crate::domain::repository::NotificationRepository;
use crate::domain::types::Notification;
use crate::error::TrackerError;

// ── CreateNotification ───────────────────────────────────────────────────────

pub struct CreateNotificationInput {
    pub user_id: UserId,
    pub message: String,
    pub kind: String,
}

pub struct CreateNotificationUseCase<R: NotificationRepository> {
    pub repo: R,
}

impl<R: NotificationRepository> CreateNotificationUseCase<R> {
    pub async fn execute(
        &self,
        input: CreateNotificationInput,
    ) -> Result<Notification, TrackerError> {
        self.repo
            .create(input.user_id, &input.message, &input.kind)
            .await
    }
}

// ── GetUnreadNotifications ───────────────────────────────────────────────────

pub struct GetUnreadNotificationsUseCase<R: NotificationRepository> {
    pub repo: R,
}

impl<R: NotificationRepository> GetUnreadNotificationsUseCase<R> {
    pub async fn execute(&self, user_id: UserId) -> Result<Vec<Notification>, TrackerError> {
        self.repo.list_unread(user_id).await
    }
}

// ── MarkNotificationRead ─────────────────────────────────────────────────────

pub struct MarkNotificationReadUseCase<R: NotificationRepository> {
    pub repo: R,
}

impl<R: NotificationRepository> MarkNotificationReadUseCase<R> {
    /// Idempotent: marking an already-read notification succeeds.
    pub async fn execute(&self, id: NotificationId) -> Result<(), TrackerError> {
        if !self.repo.mark_read(id).await? {
            return Err(TrackerError::NotificationNotFound);
        }
        Ok(())
    }
}
