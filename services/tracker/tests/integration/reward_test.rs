use medialog_domain::id::UserId;
use medialog_tracker::domain::repository::RewardRepository;
use medialog_tracker::domain::types::{
    COMPLETION_REWARD_DESCRIPTION, COMPLETION_REWARD_NAME, LEDGER_KIND_EARNED_COMPLETED,
    NOTIFICATION_REWARD_NAME,
};
use medialog_tracker::error::TrackerError;

use crate::helpers::{db, exec, ledger_count, seed_user, tracker};

// ── save_reward ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_grant_completion_reward_once() {
    let tracker = tracker().await;
    let user = seed_user(&tracker, "alice@example.com").await;

    let first = tracker.save_reward(user.id, 50).await.unwrap();
    assert_eq!(first.name, COMPLETION_REWARD_NAME);
    assert_eq!(first.description.as_deref(), Some(COMPLETION_REWARD_DESCRIPTION));
    assert_eq!(first.points, 50);
    assert_eq!(first.level, 1);
    assert!(first.is_available);

    let second = tracker.save_reward(user.id, 50).await.unwrap();
    assert_eq!(second, first);
    assert_eq!(ledger_count(db(&tracker), user.id).await, 1);

    // A different amount still does not accumulate.
    let third = tracker.save_reward(user.id, 80).await.unwrap();
    assert_eq!(third.points, 50);
    assert_eq!(tracker.get_all_rewards().await.len(), 1);
}

#[tokio::test]
async fn should_propagate_reward_for_unknown_user_without_ledger_row() {
    let tracker = tracker().await;
    let result = tracker.save_reward(UserId(999), 50).await;
    assert!(matches!(result, Err(TrackerError::InvalidReference)));
    assert_eq!(ledger_count(db(&tracker), UserId(999)).await, 0);
    assert!(tracker.get_all_rewards().await.is_empty());
}

#[tokio::test]
async fn should_find_completion_reward_through_repository() {
    let tracker = tracker().await;
    let user = seed_user(&tracker, "alice@example.com").await;
    let reward = tracker.save_reward(user.id, 50).await.unwrap();

    let repo = tracker.store().reward_repo();
    let found = repo
        .find_by_name(user.id, COMPLETION_REWARD_NAME)
        .await
        .unwrap();
    assert_eq!(found, Some(reward));
    assert!(
        repo.find_by_name(user.id, NOTIFICATION_REWARD_NAME)
            .await
            .unwrap()
            .is_none()
    );
}

#[tokio::test]
async fn should_not_keep_reward_when_ledger_insert_fails() {
    let tracker = tracker().await;
    let user = seed_user(&tracker, "alice@example.com").await;
    exec(db(&tracker), "DROP TABLE transactions").await;

    let result = tracker.save_reward(user.id, 50).await;
    assert!(
        matches!(result, Err(TrackerError::Internal(_))),
        "expected Internal, got {result:?}"
    );
    let result = tracker.save_notification_reward(user.id, 10).await;
    assert!(matches!(result, Err(TrackerError::Internal(_))));

    assert!(tracker.get_all_rewards().await.is_empty());
}

// ── save_notification_reward ─────────────────────────────────────────────────

#[tokio::test]
async fn should_insert_notification_reward_every_time() {
    let tracker = tracker().await;
    let user = seed_user(&tracker, "alice@example.com").await;

    let first = tracker.save_notification_reward(user.id, 10).await.unwrap();
    let second = tracker.save_notification_reward(user.id, 15).await.unwrap();
    assert_ne!(first.id, second.id);
    assert_eq!(second.name, NOTIFICATION_REWARD_NAME);
    assert_eq!(second.points, 15);
    assert_eq!(ledger_count(db(&tracker), user.id).await, 2);
}

// ── create_transaction ───────────────────────────────────────────────────────

#[tokio::test]
async fn should_record_ledger_entry() {
    let tracker = tracker().await;
    let user = seed_user(&tracker, "alice@example.com").await;

    let entry = tracker
        .create_transaction(user.id, LEDGER_KIND_EARNED_COMPLETED, 25, "manual grant")
        .await
        .unwrap();
    assert_eq!(entry.user_id, user.id);
    assert_eq!(entry.kind, LEDGER_KIND_EARNED_COMPLETED);
    assert_eq!(entry.amount, 25);
    assert_eq!(entry.description, "manual grant");
    assert_eq!(ledger_count(db(&tracker), user.id).await, 1);
}

#[tokio::test]
async fn should_reject_invalid_ledger_entries() {
    let tracker = tracker().await;
    let user = seed_user(&tracker, "alice@example.com").await;

    let result = tracker
        .create_transaction(user.id, "a_type_that_is_far_too_long", 1, "x")
        .await;
    assert!(matches!(result, Err(TrackerError::InvalidLedgerType(_))));

    let result = tracker
        .create_transaction(UserId(999), "bonus", 1, "x")
        .await;
    assert!(matches!(result, Err(TrackerError::InvalidReference)));
    assert_eq!(ledger_count(db(&tracker), user.id).await, 0);
}

// ── get_all_rewards ──────────────────────────────────────────────────────────

#[tokio::test]
async fn should_list_reward_projection_in_id_order() {
    let tracker = tracker().await;
    let alice = seed_user(&tracker, "alice@example.com").await;
    let bob = seed_user(&tracker, "bob@example.com").await;

    let a = tracker.save_reward(alice.id, 50).await.unwrap();
    let b = tracker.save_notification_reward(bob.id, 10).await.unwrap();

    let rewards = tracker.get_all_rewards().await;
    assert_eq!(rewards.len(), 2);
    assert_eq!(rewards[0].id, a.id);
    assert_eq!(rewards[0].user_id, alice.id);
    assert_eq!(rewards[0].points, 50);
    assert_eq!(rewards[0].created_at, a.created_at);
    assert_eq!(rewards[1].id, b.id);
    assert_eq!(rewards[1].level, 1);
}
