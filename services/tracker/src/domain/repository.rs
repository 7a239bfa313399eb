#![allow(async_fn_in_trait)]

use medialog_domain::id::{
    BookId, MovieId, NotificationId, ReadingListId, UserId, WatchingListId,
};

use crate::domain::types::{
    Book, LedgerEntry, Movie, NewBook, NewLedgerEntry, NewMovie, NewReadingListEntry, NewReward,
    NewWatchingListEntry, Notification, ReadingListEntry, Reward, RewardSummary, UnreadBook, User,
    WatchingListEntry,
};
use crate::error::TrackerError;

/// Repository for user accounts.
pub trait UserRepository: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, TrackerError>;

    async fn exists_by_email(&self, email: &str) -> Result<bool, TrackerError>;

    /// Insert a user. Fails with `UserAlreadyExists` when the email is taken.
    async fn create(&self, email: &str, name: &str) -> Result<User, TrackerError>;

    /// Overwrite name and avatar of the user with `email`. Returns `None` if
    /// no such user exists.
    async fn update_profile(
        &self,
        email: &str,
        name: &str,
        avatar: Option<&str>,
    ) -> Result<Option<User>, TrackerError>;

    /// Delete the user's reading list, watching list, rewards, notifications
    /// and ledger rows, then the user row, in one transaction. Returns `true`
    /// if the user row was deleted.
    async fn delete_with_dependents(&self, id: UserId) -> Result<bool, TrackerError>;
}

/// Repository for the book catalog.
pub trait BookRepository: Send + Sync {
    /// Insert with status `"unread"`.
    async fn create(&self, book: &NewBook) -> Result<Book, TrackerError>;

    async fn update_status(&self, id: BookId, status: &str)
    -> Result<Option<Book>, TrackerError>;

    /// Newest first by `created_at`, then by id.
    async fn list_recent(&self, limit: u64) -> Result<Vec<Book>, TrackerError>;
}

/// Repository for the movie catalog.
pub trait MovieRepository: Send + Sync {
    /// Insert with status `"unwatched"`.
    async fn create(&self, movie: &NewMovie) -> Result<Movie, TrackerError>;

    async fn update_status(
        &self,
        id: MovieId,
        status: &str,
    ) -> Result<Option<Movie>, TrackerError>;

    /// Newest first by `created_at`, then by id.
    async fn list_recent(&self, limit: u64) -> Result<Vec<Movie>, TrackerError>;
}

/// Repository for reading lists.
pub trait ReadingListRepository: Send + Sync {
    /// Insert with status `"uncompleted"`. Fails with `InvalidReference` when
    /// the user or book does not exist.
    async fn create(&self, entry: &NewReadingListEntry) -> Result<ReadingListEntry, TrackerError>;

    async fn update_status(
        &self,
        id: ReadingListId,
        status: &str,
    ) -> Result<Option<ReadingListEntry>, TrackerError>;

    async fn list_by_user(&self, user_id: UserId) -> Result<Vec<ReadingListEntry>, TrackerError>;

    /// Books on the user's reading list whose catalog status is `"unread"`.
    async fn list_unread_books(&self, user_id: UserId) -> Result<Vec<UnreadBook>, TrackerError>;
}

/// Repository for watching lists.
pub trait WatchingListRepository: Send + Sync {
    /// Insert with status `"uncompleted"`. Fails with `InvalidReference` when
    /// the user or movie does not exist.
    async fn create(
        &self,
        entry: &NewWatchingListEntry,
    ) -> Result<WatchingListEntry, TrackerError>;

    async fn update_status(
        &self,
        id: WatchingListId,
        status: &str,
    ) -> Result<Option<WatchingListEntry>, TrackerError>;

    async fn list_by_user(&self, user_id: UserId)
    -> Result<Vec<WatchingListEntry>, TrackerError>;
}

/// Repository for user notifications.
pub trait NotificationRepository: Send + Sync {
    async fn create(
        &self,
        user_id: UserId,
        message: &str,
        kind: &str,
    ) -> Result<Notification, TrackerError>;

    /// Unread notifications, oldest first.
    async fn list_unread(&self, user_id: UserId) -> Result<Vec<Notification>, TrackerError>;

    /// Set `is_read`. Returns `true` if a row was updated.
    async fn mark_read(&self, id: NotificationId) -> Result<bool, TrackerError>;
}

/// Repository for reward rows.
pub trait RewardRepository: Send + Sync {
    /// First reward of the user with exactly this name.
    async fn find_by_name(
        &self,
        user_id: UserId,
        name: &str,
    ) -> Result<Option<Reward>, TrackerError>;

    /// Insert a reward and its ledger entry atomically (same transaction).
    async fn create_with_ledger(
        &self,
        reward: &NewReward,
        entry: &NewLedgerEntry,
    ) -> Result<Reward, TrackerError>;

    async fn list_summaries(&self) -> Result<Vec<RewardSummary>, TrackerError>;
}

/// Repository for the points ledger (`transactions` table).
pub trait LedgerRepository: Send + Sync {
    async fn create(&self, entry: &NewLedgerEntry) -> Result<LedgerEntry, TrackerError>;
}
