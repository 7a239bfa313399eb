use anyhow::Context as _;
use chrono::{NaiveDateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DatabaseTransaction,
    DbErr, EntityTrait, FromQueryResult, IntoActiveModel as _, JoinType, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait, TransactionError, TransactionTrait,
    sea_query::Expr,
};

use medialog_core::sea_ext::DbErrExt as _;
use medialog_domain::content::{
    BOOK_STATUS_UNREAD, LIST_STATUS_UNCOMPLETED, MOVIE_STATUS_UNWATCHED,
};
use medialog_domain::id::{
    BookId, LedgerEntryId, MovieId, NotificationId, ReadingListId, RewardId, UserId,
    WatchingListId,
};
use medialog_tracker_schema::{
    books, movies, notifications, reading_list, rewards, transactions, users, watching_list,
};

use crate::domain::repository::{
    BookRepository, LedgerRepository, MovieRepository, NotificationRepository,
    ReadingListRepository, RewardRepository, UserRepository, WatchingListRepository,
};
use crate::domain::types::{
    Book, LedgerEntry, Movie, NewBook, NewLedgerEntry, NewMovie, NewReadingListEntry, NewReward,
    NewWatchingListEntry, Notification, ReadingListEntry, Reward, RewardSummary, UnreadBook, User,
    WatchingListEntry,
};
use crate::error::TrackerError;

fn now() -> NaiveDateTime {
    Utc::now().naive_utc()
}

/// Foreign-key violations become `InvalidReference`; anything else is internal.
fn reference_error(err: DbErr, context: &'static str) -> TrackerError {
    if err.is_foreign_key_violation() {
        TrackerError::InvalidReference
    } else {
        anyhow::Error::new(err).context(context).into()
    }
}

fn transaction_error(err: TransactionError<DbErr>, context: &'static str) -> TrackerError {
    match err {
        TransactionError::Transaction(err) => reference_error(err, context),
        other => anyhow::Error::new(other).context(context).into(),
    }
}

// ── User repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
}

impl UserRepository for DbUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, TrackerError> {
        let model = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(&self.db)
            .await
            .context("find user by email")?;
        Ok(model.map(user_from_model))
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, TrackerError> {
        let count = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .count(&self.db)
            .await
            .context("count users by email")?;
        Ok(count > 0)
    }

    async fn create(&self, email: &str, name: &str) -> Result<User, TrackerError> {
        let now = now();
        let model = users::ActiveModel {
            email: Set(email.to_owned()),
            name: Set(name.to_owned()),
            avatar: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(|e| {
            if e.is_unique_violation() {
                TrackerError::UserAlreadyExists
            } else {
                anyhow::Error::new(e).context("create user").into()
            }
        })?;
        Ok(user_from_model(model))
    }

    async fn update_profile(
        &self,
        email: &str,
        name: &str,
        avatar: Option<&str>,
    ) -> Result<Option<User>, TrackerError> {
        let Some(row) = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(&self.db)
            .await
            .context("find user for profile update")?
        else {
            return Ok(None);
        };
        let mut user = row.into_active_model();
        user.name = Set(name.to_owned());
        user.avatar = Set(avatar.map(str::to_owned));
        user.updated_at = Set(now());
        let model = user
            .update(&self.db)
            .await
            .context("update user profile")?;
        Ok(Some(user_from_model(model)))
    }

    async fn delete_with_dependents(&self, id: UserId) -> Result<bool, TrackerError> {
        let user_id = id.0;
        let deleted = self
            .db
            .transaction::<_, u64, DbErr>(|txn| {
                Box::pin(async move {
                    // Children first: rewards, notifications and transactions
                    // have no ON DELETE CASCADE.
                    reading_list::Entity::delete_many()
                        .filter(reading_list::Column::UserId.eq(user_id))
                        .exec(txn)
                        .await?;
                    watching_list::Entity::delete_many()
                        .filter(watching_list::Column::UserId.eq(user_id))
                        .exec(txn)
                        .await?;
                    rewards::Entity::delete_many()
                        .filter(rewards::Column::UserId.eq(user_id))
                        .exec(txn)
                        .await?;
                    notifications::Entity::delete_many()
                        .filter(notifications::Column::UserId.eq(user_id))
                        .exec(txn)
                        .await?;
                    transactions::Entity::delete_many()
                        .filter(transactions::Column::UserId.eq(user_id))
                        .exec(txn)
                        .await?;
                    let result = users::Entity::delete_by_id(user_id).exec(txn).await?;
                    Ok(result.rows_affected)
                })
            })
            .await
            .context("delete user with dependents")?;
        Ok(deleted > 0)
    }
}

fn user_from_model(model: users::Model) -> User {
    User {
        id: UserId(model.id),
        email: model.email,
        name: model.name,
        avatar: model.avatar,
        created_at: model.created_at.and_utc(),
        updated_at: model.updated_at.and_utc(),
    }
}

// ── Book repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbBookRepository {
    pub db: DatabaseConnection,
}

impl BookRepository for DbBookRepository {
    async fn create(&self, book: &NewBook) -> Result<Book, TrackerError> {
        let now = now();
        let model = books::ActiveModel {
            title: Set(book.title.clone()),
            isbn: Set(book.isbn.clone()),
            author: Set(book.author.clone()),
            cover_image: Set(book.cover_image.clone()),
            published_year: Set(book.published_year.clone()),
            status: Set(BOOK_STATUS_UNREAD.to_owned()),
            created_at: Set(Some(now)),
            updated_at: Set(Some(now)),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .context("insert book")?;
        Ok(book_from_model(model))
    }

    async fn update_status(
        &self,
        id: BookId,
        status: &str,
    ) -> Result<Option<Book>, TrackerError> {
        let Some(row) = books::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .context("find book for status update")?
        else {
            return Ok(None);
        };
        let mut book = row.into_active_model();
        book.status = Set(status.to_owned());
        book.updated_at = Set(Some(now()));
        let model = book
            .update(&self.db)
            .await
            .context("update book status")?;
        Ok(Some(book_from_model(model)))
    }

    async fn list_recent(&self, limit: u64) -> Result<Vec<Book>, TrackerError> {
        let models = books::Entity::find()
            .order_by_desc(books::Column::CreatedAt)
            .order_by_desc(books::Column::Id)
            .limit(limit)
            .all(&self.db)
            .await
            .context("list recent books")?;
        Ok(models.into_iter().map(book_from_model).collect())
    }
}

fn book_from_model(model: books::Model) -> Book {
    Book {
        id: BookId(model.id),
        title: model.title,
        isbn: model.isbn,
        author: model.author,
        cover_image: model.cover_image,
        published_year: model.published_year,
        status: model.status,
        created_at: model.created_at.map(|at| at.and_utc()),
        updated_at: model.updated_at.map(|at| at.and_utc()),
    }
}

// ── Movie repository ─────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbMovieRepository {
    pub db: DatabaseConnection,
}

impl MovieRepository for DbMovieRepository {
    async fn create(&self, movie: &NewMovie) -> Result<Movie, TrackerError> {
        let now = now();
        let model = movies::ActiveModel {
            title: Set(movie.title.clone()),
            kind: Set(movie.kind.clone()),
            poster_image: Set(movie.poster_image.clone()),
            release_year: Set(movie.release_year.clone()),
            overview: Set(movie.overview.clone()),
            status: Set(MOVIE_STATUS_UNWATCHED.to_owned()),
            added_at: Set(Some(now)),
            created_at: Set(Some(now)),
            updated_at: Set(Some(now)),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .context("insert movie")?;
        Ok(movie_from_model(model))
    }

    async fn update_status(
        &self,
        id: MovieId,
        status: &str,
    ) -> Result<Option<Movie>, TrackerError> {
        let Some(row) = movies::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .context("find movie for status update")?
        else {
            return Ok(None);
        };
        let mut movie = row.into_active_model();
        movie.status = Set(status.to_owned());
        movie.updated_at = Set(Some(now()));
        let model = movie
            .update(&self.db)
            .await
            .context("update movie status")?;
        Ok(Some(movie_from_model(model)))
    }

    async fn list_recent(&self, limit: u64) -> Result<Vec<Movie>, TrackerError> {
        let models = movies::Entity::find()
            .order_by_desc(movies::Column::CreatedAt)
            .order_by_desc(movies::Column::Id)
            .limit(limit)
            .all(&self.db)
            .await
            .context("list recent movies")?;
        Ok(models.into_iter().map(movie_from_model).collect())
    }
}

fn movie_from_model(model: movies::Model) -> Movie {
    Movie {
        id: MovieId(model.id),
        title: model.title,
        kind: model.kind,
        poster_image: model.poster_image,
        release_year: model.release_year,
        overview: model.overview,
        status: model.status,
        added_at: model.added_at.map(|at| at.and_utc()),
        created_at: model.created_at.map(|at| at.and_utc()),
        updated_at: model.updated_at.map(|at| at.and_utc()),
    }
}

// ── Reading list repository ──────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbReadingListRepository {
    pub db: DatabaseConnection,
}

#[derive(Debug, FromQueryResult)]
struct UnreadBookRow {
    book_id: i32,
    title: String,
    author: Option<String>,
    status: String,
    cover_image: Option<String>,
}

impl ReadingListRepository for DbReadingListRepository {
    async fn create(&self, entry: &NewReadingListEntry) -> Result<ReadingListEntry, TrackerError> {
        let now = now();
        let model = reading_list::ActiveModel {
            title: Set(entry.title.clone()),
            user_id: Set(entry.user_id.0),
            book_id: Set(entry.book_id.0),
            status: Set(LIST_STATUS_UNCOMPLETED.to_owned()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(|e| reference_error(e, "insert reading list entry"))?;
        Ok(reading_list_from_model(model))
    }

    async fn update_status(
        &self,
        id: ReadingListId,
        status: &str,
    ) -> Result<Option<ReadingListEntry>, TrackerError> {
        let Some(row) = reading_list::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .context("find reading list entry for status update")?
        else {
            return Ok(None);
        };
        let mut entry = row.into_active_model();
        entry.status = Set(status.to_owned());
        entry.updated_at = Set(now());
        let model = entry
            .update(&self.db)
            .await
            .context("update reading list status")?;
        Ok(Some(reading_list_from_model(model)))
    }

    async fn list_by_user(&self, user_id: UserId) -> Result<Vec<ReadingListEntry>, TrackerError> {
        let models = reading_list::Entity::find()
            .filter(reading_list::Column::UserId.eq(user_id.0))
            .order_by_asc(reading_list::Column::Id)
            .all(&self.db)
            .await
            .context("list reading list by user")?;
        Ok(models.into_iter().map(reading_list_from_model).collect())
    }

    async fn list_unread_books(&self, user_id: UserId) -> Result<Vec<UnreadBook>, TrackerError> {
        let rows = reading_list::Entity::find()
            .select_only()
            .column_as(reading_list::Column::BookId, "book_id")
            .column_as(books::Column::Title, "title")
            .column_as(books::Column::Author, "author")
            .column_as(books::Column::Status, "status")
            .column_as(books::Column::CoverImage, "cover_image")
            .join(JoinType::LeftJoin, reading_list::Relation::Book.def())
            .filter(reading_list::Column::UserId.eq(user_id.0))
            .filter(books::Column::Status.eq(BOOK_STATUS_UNREAD))
            .order_by_asc(reading_list::Column::Id)
            .into_model::<UnreadBookRow>()
            .all(&self.db)
            .await
            .context("list unread books by user")?;
        Ok(rows
            .into_iter()
            .map(|row| UnreadBook {
                book_id: BookId(row.book_id),
                title: row.title,
                author: row.author,
                status: row.status,
                cover_image: row.cover_image,
            })
            .collect())
    }
}

fn reading_list_from_model(model: reading_list::Model) -> ReadingListEntry {
    ReadingListEntry {
        id: ReadingListId(model.id),
        title: model.title,
        user_id: UserId(model.user_id),
        book_id: BookId(model.book_id),
        status: model.status,
        created_at: model.created_at.and_utc(),
        updated_at: model.updated_at.and_utc(),
    }
}

// ── Watching list repository ─────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbWatchingListRepository {
    pub db: DatabaseConnection,
}

impl WatchingListRepository for DbWatchingListRepository {
    async fn create(
        &self,
        entry: &NewWatchingListEntry,
    ) -> Result<WatchingListEntry, TrackerError> {
        let now = now();
        let model = watching_list::ActiveModel {
            title: Set(entry.title.clone()),
            user_id: Set(entry.user_id.0),
            movie_id: Set(entry.movie_id.0),
            status: Set(LIST_STATUS_UNCOMPLETED.to_owned()),
            created_at: Set(Some(now)),
            updated_at: Set(Some(now)),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(|e| reference_error(e, "insert watching list entry"))?;
        Ok(watching_list_from_model(model))
    }

    async fn update_status(
        &self,
        id: WatchingListId,
        status: &str,
    ) -> Result<Option<WatchingListEntry>, TrackerError> {
        let Some(row) = watching_list::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .context("find watching list entry for status update")?
        else {
            return Ok(None);
        };
        let mut entry = row.into_active_model();
        entry.status = Set(status.to_owned());
        entry.updated_at = Set(Some(now()));
        let model = entry
            .update(&self.db)
            .await
            .context("update watching list status")?;
        Ok(Some(watching_list_from_model(model)))
    }

    async fn list_by_user(
        &self,
        user_id: UserId,
    ) -> Result<Vec<WatchingListEntry>, TrackerError> {
        let models = watching_list::Entity::find()
            .filter(watching_list::Column::UserId.eq(user_id.0))
            .order_by_asc(watching_list::Column::Id)
            .all(&self.db)
            .await
            .context("list watching list by user")?;
        Ok(models.into_iter().map(watching_list_from_model).collect())
    }
}

fn watching_list_from_model(model: watching_list::Model) -> WatchingListEntry {
    WatchingListEntry {
        id: WatchingListId(model.id),
        title: model.title,
        user_id: UserId(model.user_id),
        movie_id: MovieId(model.movie_id),
        status: model.status,
        created_at: model.created_at.map(|at| at.and_utc()),
        updated_at: model.updated_at.map(|at| at.and_utc()),
    }
}

// ── Notification repository ──────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbNotificationRepository {
    pub db: DatabaseConnection,
}

impl NotificationRepository for DbNotificationRepository {
    async fn create(
        &self,
        user_id: UserId,
        message: &str,
        kind: &str,
    ) -> Result<Notification, TrackerError> {
        let model = notifications::ActiveModel {
            user_id: Set(user_id.0),
            message: Set(message.to_owned()),
            kind: Set(kind.to_owned()),
            is_read: Set(false),
            created_at: Set(now()),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(|e| reference_error(e, "insert notification"))?;
        Ok(notification_from_model(model))
    }

    async fn list_unread(&self, user_id: UserId) -> Result<Vec<Notification>, TrackerError> {
        let models = notifications::Entity::find()
            .filter(notifications::Column::UserId.eq(user_id.0))
            .filter(notifications::Column::IsRead.eq(false))
            .order_by_asc(notifications::Column::CreatedAt)
            .order_by_asc(notifications::Column::Id)
            .all(&self.db)
            .await
            .context("list unread notifications")?;
        Ok(models.into_iter().map(notification_from_model).collect())
    }

    async fn mark_read(&self, id: NotificationId) -> Result<bool, TrackerError> {
        let result = notifications::Entity::update_many()
            .col_expr(notifications::Column::IsRead, Expr::value(true))
            .filter(notifications::Column::Id.eq(id.0))
            .exec(&self.db)
            .await
            .context("mark notification read")?;
        Ok(result.rows_affected > 0)
    }
}

fn notification_from_model(model: notifications::Model) -> Notification {
    Notification {
        id: NotificationId(model.id),
        user_id: UserId(model.user_id),
        message: model.message,
        kind: model.kind,
        is_read: model.is_read,
        created_at: model.created_at.and_utc(),
    }
}

// ── Reward repository ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbRewardRepository {
    pub db: DatabaseConnection,
}

#[derive(Debug, FromQueryResult)]
struct RewardSummaryRow {
    id: i32,
    user_id: i32,
    points: i32,
    level: i32,
    created_at: NaiveDateTime,
}

impl RewardRepository for DbRewardRepository {
    async fn find_by_name(
        &self,
        user_id: UserId,
        name: &str,
    ) -> Result<Option<Reward>, TrackerError> {
        let model = rewards::Entity::find()
            .filter(rewards::Column::UserId.eq(user_id.0))
            .filter(rewards::Column::Name.eq(name))
            .order_by_asc(rewards::Column::Id)
            .one(&self.db)
            .await
            .context("find reward by name")?;
        Ok(model.map(reward_from_model))
    }

    async fn create_with_ledger(
        &self,
        reward: &NewReward,
        entry: &NewLedgerEntry,
    ) -> Result<Reward, TrackerError> {
        let model = self
            .db
            .transaction::<_, rewards::Model, DbErr>(|txn| {
                let reward = reward.clone();
                let entry = entry.clone();
                Box::pin(async move {
                    let model = insert_reward(txn, &reward).await?;
                    insert_ledger_entry(txn, &entry).await?;
                    Ok(model)
                })
            })
            .await
            .map_err(|e| transaction_error(e, "create reward with ledger entry"))?;
        Ok(reward_from_model(model))
    }

    async fn list_summaries(&self) -> Result<Vec<RewardSummary>, TrackerError> {
        let rows = rewards::Entity::find()
            .select_only()
            .columns([
                rewards::Column::Id,
                rewards::Column::UserId,
                rewards::Column::Points,
                rewards::Column::Level,
                rewards::Column::CreatedAt,
            ])
            .order_by_asc(rewards::Column::Id)
            .into_model::<RewardSummaryRow>()
            .all(&self.db)
            .await
            .context("list reward summaries")?;
        Ok(rows
            .into_iter()
            .map(|row| RewardSummary {
                id: RewardId(row.id),
                user_id: UserId(row.user_id),
                points: row.points,
                level: row.level,
                created_at: row.created_at.and_utc(),
            })
            .collect())
    }
}

async fn insert_reward(
    txn: &DatabaseTransaction,
    reward: &NewReward,
) -> Result<rewards::Model, DbErr> {
    let now = now();
    rewards::ActiveModel {
        user_id: Set(reward.user_id.0),
        name: Set(reward.name.clone()),
        points: Set(reward.points),
        level: Set(reward.level),
        created_at: Set(now),
        updated_at: Set(now),
        description: Set(reward.description.clone()),
        is_available: Set(reward.is_available),
        ..Default::default()
    }
    .insert(txn)
    .await
}

fn reward_from_model(model: rewards::Model) -> Reward {
    Reward {
        id: RewardId(model.id),
        user_id: UserId(model.user_id),
        name: model.name,
        points: model.points,
        level: model.level,
        description: model.description,
        is_available: model.is_available,
        created_at: model.created_at.and_utc(),
        updated_at: model.updated_at.and_utc(),
    }
}

// ── Ledger repository ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbLedgerRepository {
    pub db: DatabaseConnection,
}

impl LedgerRepository for DbLedgerRepository {
    async fn create(&self, entry: &NewLedgerEntry) -> Result<LedgerEntry, TrackerError> {
        let model = ledger_entry_model(entry)
            .insert(&self.db)
            .await
            .map_err(|e| reference_error(e, "insert ledger entry"))?;
        Ok(ledger_entry_from_model(model))
    }
}

fn ledger_entry_model(entry: &NewLedgerEntry) -> transactions::ActiveModel {
    transactions::ActiveModel {
        user_id: Set(entry.user_id.0),
        kind: Set(entry.kind.clone()),
        amount: Set(entry.amount),
        description: Set(entry.description.clone()),
        date: Set(now()),
        ..Default::default()
    }
}

async fn insert_ledger_entry(
    txn: &DatabaseTransaction,
    entry: &NewLedgerEntry,
) -> Result<transactions::Model, DbErr> {
    ledger_entry_model(entry).insert(txn).await
}

fn ledger_entry_from_model(model: transactions::Model) -> LedgerEntry {
    LedgerEntry {
        id: LedgerEntryId(model.id),
        user_id: UserId(model.user_id),
        kind: model.kind,
        amount: model.amount,
        description: model.description,
        date: model.date.and_utc(),
    }
}
