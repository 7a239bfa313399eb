use medialog_domain::content::ListType;
use medialog_domain::id::{ReadingListId, UserId, WatchingListId};

use crate::domain::repository::{ReadingListRepository, WatchingListRepository};
use crate::domain::types::{
    ListEntry, NewReadingListEntry, NewWatchingListEntry, ReadingListEntry, UnreadBook,
    WatchingListEntry,
};
use crate::error::TrackerError;

// ── CreateReadingList ────────────────────────────────────────────────────────

pub struct CreateReadingListUseCase<R: ReadingListRepository> {
    pub repo: R,
}

impl<R: ReadingListRepository> CreateReadingListUseCase<R> {
    pub async fn execute(
        &self,
        entry: NewReadingListEntry,
    ) -> Result<ReadingListEntry, TrackerError> {
        self.repo.create(&entry).await
    }
}

// ── CreateWatchingList ───────────────────────────────────────────────────────

pub struct CreateWatchingListUseCase<R: WatchingListRepository> {
    pub repo: R,
}

impl<R: WatchingListRepository> CreateWatchingListUseCase<R> {
    pub async fn execute(
        &self,
        entry: NewWatchingListEntry,
    ) -> Result<WatchingListEntry, TrackerError> {
        self.repo.create(&entry).await
    }
}

// ── UpdateListStatus ─────────────────────────────────────────────────────────

pub struct UpdateListStatusUseCase<R: ReadingListRepository, W: WatchingListRepository> {
    pub reading: R,
    pub watching: W,
}

impl<R: ReadingListRepository, W: WatchingListRepository> UpdateListStatusUseCase<R, W> {
    pub async fn execute(
        &self,
        list_id: i32,
        status: &str,
        list_type: ListType,
    ) -> Result<ListEntry, TrackerError> {
        let entry = match list_type {
            ListType::Reading => self
                .reading
                .update_status(ReadingListId(list_id), status)
                .await?
                .map(ListEntry::Reading),
            ListType::Watching => self
                .watching
                .update_status(WatchingListId(list_id), status)
                .await?
                .map(ListEntry::Watching),
        };
        entry.ok_or(TrackerError::ListNotFound)
    }
}

// ── GetReadingList ───────────────────────────────────────────────────────────

pub struct GetReadingListUseCase<R: ReadingListRepository> {
    pub repo: R,
}

impl<R: ReadingListRepository> GetReadingListUseCase<R> {
    pub async fn execute(&self, user_id: UserId) -> Result<Vec<ReadingListEntry>, TrackerError> {
        self.repo.list_by_user(user_id).await
    }
}

// ── GetWatchingList ──────────────────────────────────────────────────────────

pub struct GetWatchingListUseCase<R: WatchingListRepository> {
    pub repo: R,
}

impl<R: WatchingListRepository> GetWatchingListUseCase<R> {
    pub async fn execute(
        &self,
        user_id: UserId,
    ) -> Result<Vec<WatchingListEntry>, TrackerError> {
        self.repo.list_by_user(user_id).await
    }
}

// ── GetUnreadBooks ───────────────────────────────────────────────────────────

pub struct GetUnreadBooksUseCase<R: ReadingListRepository> {
    pub repo: R,
}

impl<R: ReadingListRepository> GetUnreadBooksUseCase<R> {
    pub async fn execute(&self, user_id: UserId) -> Result<Vec<UnreadBook>, TrackerError> {
        self.repo.list_unread_books(user_id).await
    }
}
