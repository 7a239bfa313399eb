use medialog_domain::id::UserId;
use medialog_tracker::error::TrackerError;

use crate::helpers::{
    backdate, db, exec, owned_row_counts, seed_book, seed_movie, seed_user, tracker,
};

// ── create / read ────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_create_and_fetch_user_by_email() {
    let tracker = tracker().await;

    let created = seed_user(&tracker, "alice@example.com").await;
    assert_eq!(created.name, "alice");
    assert!(created.avatar.is_none());

    let fetched = tracker.get_user_by_email("alice@example.com").await.unwrap();
    assert_eq!(fetched, created);
    assert!(tracker.check_if_user_exists("alice@example.com").await);
}

#[tokio::test]
async fn should_reject_duplicate_email_and_keep_single_row() {
    let tracker = tracker().await;
    let first = seed_user(&tracker, "alice@example.com").await;

    let duplicate = tracker.create_user("alice@example.com", "impostor").await;
    assert!(duplicate.is_none());

    let stored = tracker.get_user_by_email("alice@example.com").await.unwrap();
    assert_eq!(stored.id, first.id);
    assert_eq!(stored.name, "alice");
}

#[tokio::test]
async fn should_report_unknown_email_as_absent() {
    let tracker = tracker().await;
    assert!(!tracker.check_if_user_exists("ghost@example.com").await);
    assert!(tracker.get_user_by_email("ghost@example.com").await.is_none());
}

// ── update ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_update_profile_and_bump_updated_at() {
    let tracker = tracker().await;
    let created = seed_user(&tracker, "alice@example.com").await;
    let stale = backdate(db(&tracker), "users", created.id.0).await;

    let updated = tracker
        .update_user_by_email("alice@example.com", "Alice", Some("https://a.example.com/1.png"))
        .await
        .unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "Alice");
    assert_eq!(updated.avatar.as_deref(), Some("https://a.example.com/1.png"));
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at > stale);
    assert!(updated.updated_at >= created.updated_at);

    let cleared = tracker
        .update_user_by_email("alice@example.com", "Alice", None)
        .await
        .unwrap();
    assert!(cleared.avatar.is_none());
}

#[tokio::test]
async fn should_propagate_update_of_unknown_email() {
    let tracker = tracker().await;
    let result = tracker
        .update_user_by_email("ghost@example.com", "ghost", None)
        .await;
    assert!(matches!(result, Err(TrackerError::UserNotFound)));
}

// ── delete ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_delete_user_and_every_owned_row() {
    let tracker = tracker().await;
    let user = seed_user(&tracker, "alice@example.com").await;
    let book = seed_book(&tracker, "dune").await;
    let movie = seed_movie(&tracker, "matrix").await;

    tracker
        .create_reading_list(user.id, book.id, "to read", "uncompleted")
        .await
        .unwrap();
    tracker
        .create_watching_list(user.id, movie.id, "to watch", "uncompleted")
        .await
        .unwrap();
    tracker.save_reward(user.id, 50).await.unwrap();
    tracker
        .create_notification(user.id, "welcome", "info")
        .await
        .unwrap();
    tracker
        .create_transaction(user.id, "bonus", 5, "signup bonus")
        .await
        .unwrap();
    assert_eq!(owned_row_counts(db(&tracker), user.id).await, [1, 1, 1, 1, 2, 1]);

    assert!(tracker.delete_user("alice@example.com").await);

    assert_eq!(owned_row_counts(db(&tracker), user.id).await, [0; 6]);
    assert!(tracker.get_user_by_email("alice@example.com").await.is_none());
    // Catalog rows are not owned by the user.
    assert!(
        tracker
            .update_content_status(book.id.0, "unread", "book")
            .await
            .is_some()
    );
}

#[tokio::test]
async fn should_leave_other_users_untouched_on_delete() {
    let tracker = tracker().await;
    let alice = seed_user(&tracker, "alice@example.com").await;
    let bob = seed_user(&tracker, "bob@example.com").await;
    tracker.save_reward(alice.id, 10).await.unwrap();
    tracker.save_reward(bob.id, 20).await.unwrap();

    assert!(tracker.delete_user("alice@example.com").await);

    assert_eq!(owned_row_counts(db(&tracker), bob.id).await, [0, 0, 1, 0, 1, 1]);
}

#[tokio::test]
async fn should_report_failure_deleting_unknown_user() {
    let tracker = tracker().await;
    assert!(!tracker.delete_user("ghost@example.com").await);
    assert_eq!(owned_row_counts(db(&tracker), UserId(1)).await, [0; 6]);
}

#[tokio::test]
async fn should_roll_back_teardown_when_user_row_cannot_be_deleted() {
    let tracker = tracker().await;
    let user = seed_user(&tracker, "alice@example.com").await;
    let book = seed_book(&tracker, "dune").await;
    let movie = seed_movie(&tracker, "matrix").await;
    tracker
        .create_reading_list(user.id, book.id, "to read", "uncompleted")
        .await
        .unwrap();
    tracker
        .create_watching_list(user.id, movie.id, "to watch", "uncompleted")
        .await
        .unwrap();
    tracker.save_reward(user.id, 50).await.unwrap();
    tracker
        .create_notification(user.id, "welcome", "info")
        .await
        .unwrap();
    // Children go first, so the failure hits after every child delete ran.
    exec(
        db(&tracker),
        "CREATE TRIGGER block_user_delete BEFORE DELETE ON users \
         BEGIN SELECT RAISE(ABORT, 'user delete blocked'); END",
    )
    .await;

    assert!(!tracker.delete_user("alice@example.com").await);

    assert_eq!(owned_row_counts(db(&tracker), user.id).await, [1, 1, 1, 1, 1, 1]);
    assert_eq!(
        tracker.get_user_by_email("alice@example.com").await,
        Some(user)
    );
}

// ── store failures ───────────────────────────────────────────────────────────

#[tokio::test]
async fn should_map_store_failures_to_each_callers_sentinel() {
    let tracker = tracker().await;
    let user = seed_user(&tracker, "alice@example.com").await;
    exec(db(&tracker), "DROP TABLE reading_list").await;
    exec(db(&tracker), "ALTER TABLE users RENAME TO retired_users").await;

    assert!(!tracker.check_if_user_exists("alice@example.com").await);
    assert!(tracker.get_user_by_email("alice@example.com").await.is_none());
    assert!(tracker.get_all_reading_list_by_user(user.id).await.is_empty());
    assert!(tracker.get_unread_books(user.id).await.is_empty());
    assert!(tracker.create_user("bob@example.com", "bob").await.is_none());
    assert!(!tracker.delete_user("alice@example.com").await);

    let result = tracker
        .update_user_by_email("alice@example.com", "Alice", None)
        .await;
    assert!(
        matches!(result, Err(TrackerError::Internal(_))),
        "expected Internal, got {result:?}"
    );
}
