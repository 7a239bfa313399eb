use medialog_domain::content::ContentType;
use medialog_domain::id::{BookId, MovieId};

use crate::domain::repository::{BookRepository, MovieRepository};
use crate::domain::types::{Book, Content, Movie, NewBook, NewMovie, RecentContent};
use crate::error::TrackerError;

// ── AddBook ──────────────────────────────────────────────────────────────────

pub struct AddBookUseCase<R: BookRepository> {
    pub repo: R,
}

impl<R: BookRepository> AddBookUseCase<R> {
    pub async fn execute(&self, book: NewBook) -> Result<Book, TrackerError> {
        self.repo.create(&book).await
    }
}

// ── AddMovie ─────────────────────────────────────────────────────────────────

pub struct AddMovieUseCase<R: MovieRepository> {
    pub repo: R,
}

impl<R: MovieRepository> AddMovieUseCase<R> {
    pub async fn execute(&self, movie: NewMovie) -> Result<Movie, TrackerError> {
        self.repo.create(&movie).await
    }
}

// ── UpdateContentStatus ──────────────────────────────────────────────────────

pub struct UpdateContentStatusUseCase<B: BookRepository, M: MovieRepository> {
    pub books: B,
    pub movies: M,
}

impl<B: BookRepository, M: MovieRepository> UpdateContentStatusUseCase<B, M> {
    /// Overwrite the status of a book or movie. The status value is free-form.
    pub async fn execute(
        &self,
        content_id: i32,
        status: &str,
        content_type: ContentType,
    ) -> Result<Content, TrackerError> {
        match content_type {
            ContentType::Book => self
                .books
                .update_status(BookId(content_id), status)
                .await?
                .map(Content::Book)
                .ok_or(TrackerError::BookNotFound),
            ContentType::Movie => self
                .movies
                .update_status(MovieId(content_id), status)
                .await?
                .map(Content::Movie)
                .ok_or(TrackerError::MovieNotFound),
        }
    }
}

// ── GetRecentContents ────────────────────────────────────────────────────────

pub struct GetRecentContentsUseCase<B: BookRepository, M: MovieRepository> {
    pub books: B,
    pub movies: M,
}

impl<B: BookRepository, M: MovieRepository> GetRecentContentsUseCase<B, M> {
    /// Newest `limit` rows of one catalog, each tagged with its calendar date.
    pub async fn execute(
        &self,
        content_type: ContentType,
        limit: u64,
    ) -> Result<Vec<RecentContent>, TrackerError> {
        let contents: Vec<Content> = match content_type {
            ContentType::Book => self
                .books
                .list_recent(limit)
                .await?
                .into_iter()
                .map(Content::Book)
                .collect(),
            ContentType::Movie => self
                .movies
                .list_recent(limit)
                .await?
                .into_iter()
                .map(Content::Movie)
                .collect(),
        };
        Ok(contents.into_iter().map(RecentContent::from).collect())
    }
}
