//! Caller-facing access API.
//!
//! Each method keeps the failure contract its callers rely on: most read and
//! create paths swallow failures into `None`, `false` or an empty `Vec`, while
//! profile updates and reward writes hand the error back. Every failure is
//! logged under the method name before it is swallowed or returned.

use medialog_domain::content::{ContentType, ListType};
use medialog_domain::id::{BookId, MovieId, NotificationId, UserId};

use crate::domain::types::{
    Book, Content, DEFAULT_RECENT_LIMIT, LedgerEntry, ListEntry, Movie, NewBook,
    NewLedgerEntry, NewMovie, NewReadingListEntry, NewWatchingListEntry, Notification,
    ReadingListEntry, RecentContent, Reward, RewardSummary, UnreadBook, User, WatchingListEntry,
};
use crate::error::TrackerError;
use crate::state::Store;
use crate::usecase::account::{
    CheckUserExistsUseCase, CreateUserInput, CreateUserUseCase, DeleteUserUseCase,
    GetUserUseCase, UpdateUserInput, UpdateUserUseCase,
};
use crate::usecase::catalog::{
    AddBookUseCase, AddMovieUseCase, GetRecentContentsUseCase, UpdateContentStatusUseCase,
};
use crate::usecase::list::{
    CreateReadingListUseCase, CreateWatchingListUseCase, GetReadingListUseCase,
    GetUnreadBooksUseCase, GetWatchingListUseCase, UpdateListStatusUseCase,
};
use crate::usecase::notification::{
    CreateNotificationInput, CreateNotificationUseCase, GetUnreadNotificationsUseCase,
    MarkNotificationReadUseCase,
};
use crate::usecase::reward::{
    CreateLedgerEntryUseCase, GetAllRewardsUseCase, SaveNotificationRewardUseCase,
    SaveRewardUseCase,
};

fn or_none<T>(op: &'static str, result: Result<T, TrackerError>) -> Option<T> {
    result.map_err(|e| e.log(op)).ok()
}

fn or_empty<T>(op: &'static str, result: Result<Vec<T>, TrackerError>) -> Vec<T> {
    result.map_err(|e| e.log(op)).unwrap_or_default()
}

fn logged<T>(op: &'static str, result: Result<T, TrackerError>) -> Result<T, TrackerError> {
    result.inspect_err(|e| e.log(op))
}

fn parse_content_type(content_type: &str) -> Result<ContentType, TrackerError> {
    content_type
        .parse()
        .map_err(|_| TrackerError::UnknownContentType(content_type.to_owned()))
}

fn parse_list_type(list_type: &str) -> Result<ListType, TrackerError> {
    list_type
        .parse()
        .map_err(|_| TrackerError::UnknownListType(list_type.to_owned()))
}

#[derive(Clone)]
pub struct Tracker {
    store: Store,
}

impl Tracker {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    // ── Accounts ─────────────────────────────────────────────────────────────

    /// `None` on duplicate email or store failure.
    pub async fn create_user(&self, email: &str, name: &str) -> Option<User> {
        let usecase = CreateUserUseCase {
            repo: self.store.user_repo(),
        };
        let input = CreateUserInput {
            email: email.to_owned(),
            name: name.to_owned(),
        };
        or_none("create_user", usecase.execute(input).await)
    }

    /// Store failures read as "does not exist".
    pub async fn check_if_user_exists(&self, email: &str) -> bool {
        let usecase = CheckUserExistsUseCase {
            repo: self.store.user_repo(),
        };
        or_none("check_if_user_exists", usecase.execute(email).await).unwrap_or(false)
    }

    pub async fn get_user_by_email(&self, email: &str) -> Option<User> {
        let usecase = GetUserUseCase {
            repo: self.store.user_repo(),
        };
        match usecase.execute(email).await {
            Ok(user) => Some(user),
            Err(TrackerError::UserNotFound) => None,
            Err(e) => {
                e.log("get_user_by_email");
                None
            }
        }
    }

    /// Propagates failure, including `UserNotFound`.
    pub async fn update_user_by_email(
        &self,
        email: &str,
        name: &str,
        avatar: Option<&str>,
    ) -> Result<User, TrackerError> {
        let usecase = UpdateUserUseCase {
            repo: self.store.user_repo(),
        };
        let input = UpdateUserInput {
            name: name.to_owned(),
            avatar: avatar.map(str::to_owned),
        };
        logged("update_user_by_email", usecase.execute(email, input).await)
    }

    /// Tear the account down together with its lists, rewards, notifications
    /// and ledger rows. `false` if the user does not exist or the teardown
    /// was rolled back.
    pub async fn delete_user(&self, email: &str) -> bool {
        let usecase = DeleteUserUseCase {
            repo: self.store.user_repo(),
        };
        or_none("delete_user", usecase.execute(email).await).is_some()
    }

    // ── Catalog ──────────────────────────────────────────────────────────────

    /// New books always start as `"unread"`; `_status` is accepted for
    /// caller compatibility and ignored.
    pub async fn add_book(&self, book: NewBook, _status: &str) -> Option<Book> {
        let usecase = AddBookUseCase {
            repo: self.store.book_repo(),
        };
        or_none("add_book", usecase.execute(book).await)
    }

    /// New movies always start as `"unwatched"`; `_status` is ignored.
    pub async fn add_movie(&self, movie: NewMovie, _status: &str) -> Option<Movie> {
        let usecase = AddMovieUseCase {
            repo: self.store.movie_repo(),
        };
        or_none("add_movie", usecase.execute(movie).await)
    }

    /// `content_type` is `"book"` or `"movie"`; anything else yields `None`.
    pub async fn update_content_status(
        &self,
        content_id: i32,
        status: &str,
        content_type: &str,
    ) -> Option<Content> {
        let usecase = UpdateContentStatusUseCase {
            books: self.store.book_repo(),
            movies: self.store.movie_repo(),
        };
        let result = match parse_content_type(content_type) {
            Ok(content_type) => usecase.execute(content_id, status, content_type).await,
            Err(e) => Err(e),
        };
        or_none("update_content_status", result)
    }

    /// Newest `limit` (default 20) rows of one catalog.
    pub async fn get_recent_contents(
        &self,
        content_type: &str,
        limit: Option<u64>,
    ) -> Vec<RecentContent> {
        let usecase = GetRecentContentsUseCase {
            books: self.store.book_repo(),
            movies: self.store.movie_repo(),
        };
        let limit = limit.unwrap_or(DEFAULT_RECENT_LIMIT);
        let result = match parse_content_type(content_type) {
            Ok(content_type) => usecase.execute(content_type, limit).await,
            Err(e) => Err(e),
        };
        or_empty("get_recent_contents", result)
    }

    // ── Lists ────────────────────────────────────────────────────────────────

    /// Entries always start as `"uncompleted"`; `_status` is ignored.
    pub async fn create_reading_list(
        &self,
        user_id: UserId,
        book_id: BookId,
        title: &str,
        _status: &str,
    ) -> Option<ReadingListEntry> {
        let usecase = CreateReadingListUseCase {
            repo: self.store.reading_list_repo(),
        };
        let entry = NewReadingListEntry {
            user_id,
            book_id,
            title: title.to_owned(),
        };
        or_none("create_reading_list", usecase.execute(entry).await)
    }

    /// Entries always start as `"uncompleted"`; `_status` is ignored.
    pub async fn create_watching_list(
        &self,
        user_id: UserId,
        movie_id: MovieId,
        title: &str,
        _status: &str,
    ) -> Option<WatchingListEntry> {
        let usecase = CreateWatchingListUseCase {
            repo: self.store.watching_list_repo(),
        };
        let entry = NewWatchingListEntry {
            user_id,
            movie_id,
            title: title.to_owned(),
        };
        or_none("create_watching_list", usecase.execute(entry).await)
    }

    /// `list_type` is `"reading"` or `"watching"`; anything else yields `None`.
    pub async fn update_list_status(
        &self,
        list_id: i32,
        status: &str,
        list_type: &str,
    ) -> Option<ListEntry> {
        let usecase = UpdateListStatusUseCase {
            reading: self.store.reading_list_repo(),
            watching: self.store.watching_list_repo(),
        };
        let result = match parse_list_type(list_type) {
            Ok(list_type) => usecase.execute(list_id, status, list_type).await,
            Err(e) => Err(e),
        };
        or_none("update_list_status", result)
    }

    pub async fn get_all_reading_list_by_user(&self, user_id: UserId) -> Vec<ReadingListEntry> {
        let usecase = GetReadingListUseCase {
            repo: self.store.reading_list_repo(),
        };
        or_empty("get_all_reading_list_by_user", usecase.execute(user_id).await)
    }

    pub async fn get_all_watching_list_by_user(&self, user_id: UserId) -> Vec<WatchingListEntry> {
        let usecase = GetWatchingListUseCase {
            repo: self.store.watching_list_repo(),
        };
        or_empty("get_all_watching_list_by_user", usecase.execute(user_id).await)
    }

    pub async fn get_unread_books(&self, user_id: UserId) -> Vec<UnreadBook> {
        let usecase = GetUnreadBooksUseCase {
            repo: self.store.reading_list_repo(),
        };
        or_empty("get_unread_books", usecase.execute(user_id).await)
    }

    // ── Notifications ────────────────────────────────────────────────────────

    pub async fn create_notification(
        &self,
        user_id: UserId,
        message: &str,
        kind: &str,
    ) -> Option<Notification> {
        let usecase = CreateNotificationUseCase {
            repo: self.store.notification_repo(),
        };
        let input = CreateNotificationInput {
            user_id,
            message: message.to_owned(),
            kind: kind.to_owned(),
        };
        or_none("create_notification", usecase.execute(input).await)
    }

    pub async fn get_unread_notifications(&self, user_id: UserId) -> Vec<Notification> {
        let usecase = GetUnreadNotificationsUseCase {
            repo: self.store.notification_repo(),
        };
        or_empty("get_unread_notifications", usecase.execute(user_id).await)
    }

    /// Failures, including an unknown id, are only logged.
    pub async fn mark_notification_as_read(&self, id: NotificationId) {
        let usecase = MarkNotificationReadUseCase {
            repo: self.store.notification_repo(),
        };
        if let Err(e) = usecase.execute(id).await {
            e.log("mark_notification_as_read");
        }
    }

    // ── Rewards ──────────────────────────────────────────────────────────────

    /// Grant the completion reward at most once per user. Propagates failure.
    pub async fn save_reward(&self, user_id: UserId, amount: i32) -> Result<Reward, TrackerError> {
        let usecase = SaveRewardUseCase {
            repo: self.store.reward_repo(),
        };
        logged("save_reward", usecase.execute(user_id, amount).await)
    }

    /// Propagates failure.
    pub async fn save_notification_reward(
        &self,
        user_id: UserId,
        amount: i32,
    ) -> Result<Reward, TrackerError> {
        let usecase = SaveNotificationRewardUseCase {
            repo: self.store.reward_repo(),
        };
        logged(
            "save_notification_reward",
            usecase.execute(user_id, amount).await,
        )
    }

    /// Append one row to the points ledger. Propagates failure.
    pub async fn create_transaction(
        &self,
        user_id: UserId,
        kind: &str,
        amount: i32,
        description: &str,
    ) -> Result<LedgerEntry, TrackerError> {
        let usecase = CreateLedgerEntryUseCase {
            repo: self.store.ledger_repo(),
        };
        let entry = NewLedgerEntry {
            user_id,
            kind: kind.to_owned(),
            amount,
            description: description.to_owned(),
        };
        logged("create_transaction", usecase.execute(entry).await)
    }

    /// Every reward as `(id, user_id, points, level, created_at)` in id
    /// order; the projection is reconstructed from a truncated query.
    pub async fn get_all_rewards(&self) -> Vec<RewardSummary> {
        let usecase = GetAllRewardsUseCase {
            repo: self.store.reward_repo(),
        };
        or_empty("get_all_rewards", usecase.execute().await)
    }
}
