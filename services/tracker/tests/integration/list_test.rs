use medialog_domain::content::LIST_STATUS_UNCOMPLETED;
use medialog_domain::id::{BookId, MovieId, UserId};
use medialog_tracker::domain::types::ListEntry;

use crate::helpers::{backdate, db, seed_book, seed_movie, seed_user, tracker};

// ── create ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_force_uncompleted_status_on_new_entries() {
    let tracker = tracker().await;
    let user = seed_user(&tracker, "alice@example.com").await;
    let book = seed_book(&tracker, "dune").await;
    let movie = seed_movie(&tracker, "matrix").await;

    let reading = tracker
        .create_reading_list(user.id, book.id, "summer", "completed")
        .await
        .unwrap();
    assert_eq!(reading.status, LIST_STATUS_UNCOMPLETED);
    assert_eq!(reading.title, "summer");
    assert_eq!(reading.book_id, book.id);

    let watching = tracker
        .create_watching_list(user.id, movie.id, "weekend", "completed")
        .await
        .unwrap();
    assert_eq!(watching.status, LIST_STATUS_UNCOMPLETED);
    assert_eq!(watching.movie_id, movie.id);
}

#[tokio::test]
async fn should_reject_entries_with_dangling_references() {
    let tracker = tracker().await;
    let user = seed_user(&tracker, "alice@example.com").await;
    let book = seed_book(&tracker, "dune").await;

    assert!(
        tracker
            .create_reading_list(UserId(999), book.id, "x", "uncompleted")
            .await
            .is_none()
    );
    assert!(
        tracker
            .create_reading_list(user.id, BookId(999), "x", "uncompleted")
            .await
            .is_none()
    );
    assert!(
        tracker
            .create_watching_list(user.id, MovieId(999), "x", "uncompleted")
            .await
            .is_none()
    );
    assert!(tracker.get_all_reading_list_by_user(user.id).await.is_empty());
}

// ── status ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_update_status_of_selected_list() {
    let tracker = tracker().await;
    let user = seed_user(&tracker, "alice@example.com").await;
    let book = seed_book(&tracker, "dune").await;
    let movie = seed_movie(&tracker, "matrix").await;
    let reading = tracker
        .create_reading_list(user.id, book.id, "summer", "uncompleted")
        .await
        .unwrap();
    let watching = tracker
        .create_watching_list(user.id, movie.id, "weekend", "uncompleted")
        .await
        .unwrap();
    let stale = backdate(db(&tracker), "reading_list", reading.id.0).await;
    backdate(db(&tracker), "watching_list", watching.id.0).await;

    let updated = tracker
        .update_list_status(reading.id.0, "completed", "reading")
        .await
        .unwrap();
    let ListEntry::Reading(updated) = updated else {
        panic!("expected a reading entry");
    };
    assert_eq!(updated.status, "completed");
    assert_eq!(updated.created_at, reading.created_at);
    assert!(updated.updated_at > stale);

    let updated = tracker
        .update_list_status(watching.id.0, "completed", "watching")
        .await
        .unwrap();
    let ListEntry::Watching(updated) = updated else {
        panic!("expected a watching entry");
    };
    assert_eq!(updated.status, "completed");
    assert!(updated.updated_at.is_some_and(|at| at > stale));
}

#[tokio::test]
async fn should_return_none_for_unknown_list() {
    let tracker = tracker().await;
    assert!(tracker.update_list_status(1, "completed", "reading").await.is_none());
    assert!(tracker.update_list_status(1, "completed", "listening").await.is_none());
}

// ── reads ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_list_entries_owned_by_user() {
    let tracker = tracker().await;
    let alice = seed_user(&tracker, "alice@example.com").await;
    let bob = seed_user(&tracker, "bob@example.com").await;
    let book = seed_book(&tracker, "dune").await;
    let movie = seed_movie(&tracker, "matrix").await;

    tracker
        .create_reading_list(alice.id, book.id, "a1", "uncompleted")
        .await
        .unwrap();
    tracker
        .create_reading_list(bob.id, book.id, "b1", "uncompleted")
        .await
        .unwrap();
    tracker
        .create_reading_list(alice.id, book.id, "a2", "uncompleted")
        .await
        .unwrap();
    tracker
        .create_watching_list(bob.id, movie.id, "b2", "uncompleted")
        .await
        .unwrap();

    let titles: Vec<_> = tracker
        .get_all_reading_list_by_user(alice.id)
        .await
        .into_iter()
        .map(|e| e.title)
        .collect();
    assert_eq!(titles, ["a1", "a2"]);
    assert!(tracker.get_all_watching_list_by_user(alice.id).await.is_empty());
    assert_eq!(tracker.get_all_watching_list_by_user(bob.id).await.len(), 1);
}

#[tokio::test]
async fn should_return_only_unread_books_on_users_list() {
    let tracker = tracker().await;
    let alice = seed_user(&tracker, "alice@example.com").await;
    let bob = seed_user(&tracker, "bob@example.com").await;
    let unread = seed_book(&tracker, "unread").await;
    let finished = seed_book(&tracker, "finished").await;
    let bobs = seed_book(&tracker, "bobs").await;

    tracker
        .update_content_status(finished.id.0, "read", "book")
        .await
        .unwrap();
    for (user, book) in [(alice.id, unread.id), (alice.id, finished.id), (bob.id, bobs.id)] {
        tracker
            .create_reading_list(user, book, "list", "uncompleted")
            .await
            .unwrap();
    }

    let books = tracker.get_unread_books(alice.id).await;
    assert_eq!(books.len(), 1);
    assert_eq!(books[0].book_id, unread.id);
    assert_eq!(books[0].title, "unread");
    assert_eq!(books[0].author.as_deref(), Some("Frank Herbert"));
    assert_eq!(books[0].status, "unread");
    assert_eq!(books[0].cover_image, unread.cover_image);
}
