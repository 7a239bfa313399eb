use chrono::{DateTime, Utc};
use serde::Serialize;

use medialog_core::serde::{to_rfc3339_ms, to_rfc3339_ms_opt};
use medialog_domain::id::{
    BookId, LedgerEntryId, MovieId, NotificationId, ReadingListId, RewardId, UserId,
    WatchingListId,
};

/// Name of the deduplicated content-completion reward. Lookups match it
/// byte for byte, so it must stay identical to what existing rows hold.
pub const COMPLETION_REWARD_NAME: &str = "İçerik Tamamlama Ödülü";
pub const COMPLETION_REWARD_DESCRIPTION: &str = "İçerik tamamlamadan kazandığınız puanlar";
pub const COMPLETION_LEDGER_DESCRIPTION: &str = "İçerik tamamlamadan kazanılan puanlar";

pub const NOTIFICATION_REWARD_NAME: &str = "İçerik tamamlama ödül";
pub const NOTIFICATION_REWARD_DESCRIPTION: &str = "içerik tamamladıgınız için kazandıgınız odul";
pub const NOTIFICATION_LEDGER_DESCRIPTION: &str =
    "İçerikleri tamamladıgınız için kazandıgınız oduller";

/// Ledger type recorded alongside every reward.
pub const LEDGER_KIND_EARNED_COMPLETED: &str = "earned_completed";
/// Width of the `transactions.type` column.
pub const LEDGER_KIND_MAX_LEN: usize = 20;

/// Default page size of recent-content reads.
pub const DEFAULT_RECENT_LIMIT: u64 = 20;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub name: String,
    pub avatar: Option<String>,
    #[serde(serialize_with = "to_rfc3339_ms")]
    pub created_at: DateTime<Utc>,
    #[serde(serialize_with = "to_rfc3339_ms")]
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub isbn: String,
    pub author: Option<String>,
    pub cover_image: Option<String>,
    pub published_year: Option<String>,
    pub status: String,
    #[serde(serialize_with = "to_rfc3339_ms_opt")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(serialize_with = "to_rfc3339_ms_opt")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Catalog fields supplied by the caller; status and timestamps are
/// assigned on insert.
#[derive(Debug, Clone, Default)]
pub struct NewBook {
    pub title: String,
    pub isbn: String,
    pub author: Option<String>,
    pub cover_image: Option<String>,
    pub published_year: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub poster_image: Option<String>,
    pub release_year: Option<String>,
    pub overview: Option<String>,
    pub status: String,
    #[serde(serialize_with = "to_rfc3339_ms_opt")]
    pub added_at: Option<DateTime<Utc>>,
    #[serde(serialize_with = "to_rfc3339_ms_opt")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(serialize_with = "to_rfc3339_ms_opt")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default)]
pub struct NewMovie {
    pub title: String,
    pub kind: String,
    pub poster_image: Option<String>,
    pub release_year: Option<String>,
    pub overview: Option<String>,
}

/// A catalog row of either kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Content {
    Book(Book),
    Movie(Movie),
}

impl Content {
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Book(book) => book.created_at,
            Self::Movie(movie) => movie.created_at,
        }
    }

    pub fn status(&self) -> &str {
        match self {
            Self::Book(book) => &book.status,
            Self::Movie(movie) => &movie.status,
        }
    }
}

/// A catalog row annotated with the calendar date it was added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecentContent {
    #[serde(flatten)]
    pub content: Content,
    /// `YYYY-MM-DD` of `created_at` in UTC.
    pub date: Option<String>,
}

impl From<Content> for RecentContent {
    fn from(content: Content) -> Self {
        let date = content.created_at().map(|at| calendar_date(&at));
        Self { content, date }
    }
}

pub fn calendar_date(at: &DateTime<Utc>) -> String {
    at.format("%Y-%m-%d").to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadingListEntry {
    pub id: ReadingListId,
    pub title: String,
    pub user_id: UserId,
    pub book_id: BookId,
    pub status: String,
    #[serde(serialize_with = "to_rfc3339_ms")]
    pub created_at: DateTime<Utc>,
    #[serde(serialize_with = "to_rfc3339_ms")]
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewReadingListEntry {
    pub user_id: UserId,
    pub book_id: BookId,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchingListEntry {
    pub id: WatchingListId,
    pub title: String,
    pub user_id: UserId,
    pub movie_id: MovieId,
    pub status: String,
    #[serde(serialize_with = "to_rfc3339_ms_opt")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(serialize_with = "to_rfc3339_ms_opt")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub struct NewWatchingListEntry {
    pub user_id: UserId,
    pub movie_id: MovieId,
    pub title: String,
}

/// A list row of either kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ListEntry {
    Reading(ReadingListEntry),
    Watching(WatchingListEntry),
}

impl ListEntry {
    pub fn status(&self) -> &str {
        match self {
            Self::Reading(entry) => &entry.status,
            Self::Watching(entry) => &entry.status,
        }
    }
}

/// Projection of a reading-list row joined to its still-unread book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnreadBook {
    pub book_id: BookId,
    pub title: String,
    pub author: Option<String>,
    pub status: String,
    pub cover_image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: NotificationId,
    pub user_id: UserId,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub is_read: bool,
    #[serde(serialize_with = "to_rfc3339_ms")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reward {
    pub id: RewardId,
    pub user_id: UserId,
    pub name: String,
    pub points: i32,
    pub level: i32,
    pub description: Option<String>,
    pub is_available: bool,
    #[serde(serialize_with = "to_rfc3339_ms")]
    pub created_at: DateTime<Utc>,
    #[serde(serialize_with = "to_rfc3339_ms")]
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewReward {
    pub user_id: UserId,
    pub name: String,
    pub description: Option<String>,
    pub points: i32,
    pub level: i32,
    pub is_available: bool,
}

/// Reward columns returned by the all-rewards listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RewardSummary {
    pub id: RewardId,
    pub user_id: UserId,
    pub points: i32,
    pub level: i32,
    #[serde(serialize_with = "to_rfc3339_ms")]
    pub created_at: DateTime<Utc>,
}

/// A row of the `transactions` ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerEntry {
    pub id: LedgerEntryId,
    pub user_id: UserId,
    #[serde(rename = "type")]
    pub kind: String,
    pub amount: i32,
    pub description: String,
    #[serde(serialize_with = "to_rfc3339_ms")]
    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewLedgerEntry {
    pub user_id: UserId,
    pub kind: String,
    pub amount: i32,
    pub description: String,
}

/// Whether `kind` fits the ledger's `type` column.
pub fn validate_ledger_kind(kind: &str) -> bool {
    !kind.is_empty() && kind.chars().count() <= LEDGER_KIND_MAX_LEN
}
