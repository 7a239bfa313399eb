use medialog_domain::id::{NotificationId, UserId};

use crate::helpers::{seed_user, tracker};

#[tokio::test]
async fn should_create_unread_notification() {
    let tracker = tracker().await;
    let user = seed_user(&tracker, "alice@example.com").await;

    let notification = tracker
        .create_notification(user.id, "You earned a reward", "reward")
        .await
        .unwrap();
    assert_eq!(notification.user_id, user.id);
    assert_eq!(notification.kind, "reward");
    assert!(!notification.is_read);
}

#[tokio::test]
async fn should_return_none_for_unknown_recipient() {
    let tracker = tracker().await;
    assert!(
        tracker
            .create_notification(UserId(999), "hello", "info")
            .await
            .is_none()
    );
}

#[tokio::test]
async fn should_list_unread_oldest_first_and_drop_read_ones() {
    let tracker = tracker().await;
    let alice = seed_user(&tracker, "alice@example.com").await;
    let bob = seed_user(&tracker, "bob@example.com").await;

    let first = tracker.create_notification(alice.id, "first", "info").await.unwrap();
    let second = tracker.create_notification(alice.id, "second", "info").await.unwrap();
    tracker.create_notification(bob.id, "other", "info").await.unwrap();

    let unread = tracker.get_unread_notifications(alice.id).await;
    assert_eq!(unread, [first.clone(), second.clone()]);

    tracker.mark_notification_as_read(first.id).await;
    // Marking twice is harmless.
    tracker.mark_notification_as_read(first.id).await;

    let unread = tracker.get_unread_notifications(alice.id).await;
    assert_eq!(unread, [second]);
    assert_eq!(tracker.get_unread_notifications(bob.id).await.len(), 1);
}

#[tokio::test]
async fn should_ignore_marking_unknown_notification() {
    let tracker = tracker().await;
    let user = seed_user(&tracker, "alice@example.com").await;
    tracker.create_notification(user.id, "hello", "info").await.unwrap();

    tracker.mark_notification_as_read(NotificationId(999)).await;

    assert_eq!(tracker.get_unread_notifications(user.id).await.len(), 1);
}
