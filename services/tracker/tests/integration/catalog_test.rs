use medialog_domain::content::{BOOK_STATUS_UNREAD, MOVIE_STATUS_UNWATCHED};
use medialog_tracker::domain::types::{Content, calendar_date};

use crate::helpers::{backdate, db, new_book, new_movie, seed_book, seed_movie, tracker};

// ── add ──────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_force_initial_book_status() {
    let tracker = tracker().await;
    let book = tracker.add_book(new_book("dune"), "read").await.unwrap();

    assert_eq!(book.status, BOOK_STATUS_UNREAD);
    assert_eq!(book.title, "dune");
    assert_eq!(book.author.as_deref(), Some("Frank Herbert"));
    assert!(book.created_at.is_some());
}

#[tokio::test]
async fn should_force_initial_movie_status() {
    let tracker = tracker().await;
    let movie = tracker.add_movie(new_movie("matrix"), "watched").await.unwrap();

    assert_eq!(movie.status, MOVIE_STATUS_UNWATCHED);
    assert_eq!(movie.kind, "film");
    assert!(movie.added_at.is_some());
}

// ── status ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_update_status_of_selected_catalog() {
    let tracker = tracker().await;
    let book = seed_book(&tracker, "dune").await;
    let movie = seed_movie(&tracker, "matrix").await;
    let stale = backdate(db(&tracker), "books", book.id.0).await;
    backdate(db(&tracker), "movies", movie.id.0).await;

    let updated = tracker
        .update_content_status(book.id.0, "read", "book")
        .await
        .unwrap();
    let Content::Book(updated) = updated else {
        panic!("expected a book");
    };
    assert_eq!(updated.status, "read");
    assert_eq!(updated.created_at, book.created_at);
    assert!(updated.updated_at.is_some_and(|at| at > stale));

    let updated = tracker
        .update_content_status(movie.id.0, "watched", "movie")
        .await
        .unwrap();
    let Content::Movie(updated) = updated else {
        panic!("expected a movie");
    };
    assert_eq!(updated.status, "watched");
    assert!(updated.updated_at.is_some_and(|at| at > stale));
}

#[tokio::test]
async fn should_return_none_for_unknown_content() {
    let tracker = tracker().await;
    let book = seed_book(&tracker, "dune").await;

    assert!(tracker.update_content_status(999, "read", "book").await.is_none());
    assert!(
        tracker
            .update_content_status(book.id.0, "read", "series")
            .await
            .is_none()
    );
}

// ── recent ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_return_newest_books_first_up_to_limit() {
    let tracker = tracker().await;
    seed_book(&tracker, "first").await;
    let second = seed_book(&tracker, "second").await;
    let third = seed_book(&tracker, "third").await;

    let recent = tracker.get_recent_contents("book", Some(2)).await;
    let titles: Vec<_> = recent
        .iter()
        .map(|r| match &r.content {
            Content::Book(b) => b.title.as_str(),
            Content::Movie(m) => m.title.as_str(),
        })
        .collect();
    assert_eq!(titles, ["third", "second"]);

    let expected_date = third.created_at.map(|at| calendar_date(&at));
    assert_eq!(recent[0].date, expected_date);
    assert_eq!(recent[1].date, second.created_at.map(|at| calendar_date(&at)));
}

#[tokio::test]
async fn should_default_recent_limit_to_twenty() {
    let tracker = tracker().await;
    for i in 0..21 {
        seed_movie(&tracker, &format!("movie {i}")).await;
    }
    let recent = tracker.get_recent_contents("movie", None).await;
    assert_eq!(recent.len(), 20);
    assert!(recent.iter().all(|r| matches!(r.content, Content::Movie(_))));
}

#[tokio::test]
async fn should_return_empty_for_unknown_catalog() {
    let tracker = tracker().await;
    seed_book(&tracker, "dune").await;
    assert!(tracker.get_recent_contents("podcast", None).await.is_empty());
}
