use medialog_domain::id::UserId;

use crate::domain::repository::{LedgerRepository, RewardRepository};
use crate::domain::types::{
    COMPLETION_LEDGER_DESCRIPTION, COMPLETION_REWARD_DESCRIPTION, COMPLETION_REWARD_NAME,
    LEDGER_KIND_EARNED_COMPLETED, LedgerEntry, NOTIFICATION_LEDGER_DESCRIPTION,
    NOTIFICATION_REWARD_DESCRIPTION, NOTIFICATION_REWARD_NAME, NewLedgerEntry, NewReward, Reward,
    RewardSummary, validate_ledger_kind,
};
use crate::error::TrackerError;

/// A level-1, available reward worth `amount` points and its matching
/// `earned_completed` ledger row.
fn reward_with_entry(
    user_id: UserId,
    amount: i32,
    name: &str,
    description: &str,
    ledger_description: &str,
) -> (NewReward, NewLedgerEntry) {
    let reward = NewReward {
        user_id,
        name: name.to_owned(),
        description: Some(description.to_owned()),
        points: amount,
        level: 1,
        is_available: true,
    };
    let entry = NewLedgerEntry {
        user_id,
        kind: LEDGER_KIND_EARNED_COMPLETED.to_owned(),
        amount,
        description: ledger_description.to_owned(),
    };
    (reward, entry)
}

// ── SaveReward ───────────────────────────────────────────────────────────────

pub struct SaveRewardUseCase<R: RewardRepository> {
    pub repo: R,
}

impl<R: RewardRepository> SaveRewardUseCase<R> {
    /// Grant the content-completion reward once per user. An existing reward
    /// is returned as is; points do not accumulate.
    pub async fn execute(&self, user_id: UserId, amount: i32) -> Result<Reward, TrackerError> {
        if let Some(existing) = self
            .repo
            .find_by_name(user_id, COMPLETION_REWARD_NAME)
            .await?
        {
            tracing::debug!(%user_id, reward_id = %existing.id, "completion reward already granted");
            return Ok(existing);
        }

        let (reward, entry) = reward_with_entry(
            user_id,
            amount,
            COMPLETION_REWARD_NAME,
            COMPLETION_REWARD_DESCRIPTION,
            COMPLETION_LEDGER_DESCRIPTION,
        );
        self.repo.create_with_ledger(&reward, &entry).await
    }
}

// ── SaveNotificationReward ───────────────────────────────────────────────────

pub struct SaveNotificationRewardUseCase<R: RewardRepository> {
    pub repo: R,
}

impl<R: RewardRepository> SaveNotificationRewardUseCase<R> {
    /// Always inserts a new reward and ledger row.
    pub async fn execute(&self, user_id: UserId, amount: i32) -> Result<Reward, TrackerError> {
        let (reward, entry) = reward_with_entry(
            user_id,
            amount,
            NOTIFICATION_REWARD_NAME,
            NOTIFICATION_REWARD_DESCRIPTION,
            NOTIFICATION_LEDGER_DESCRIPTION,
        );
        self.repo.create_with_ledger(&reward, &entry).await
    }
}

// ── CreateLedgerEntry ────────────────────────────────────────────────────────

pub struct CreateLedgerEntryUseCase<R: LedgerRepository> {
    pub repo: R,
}

impl<R: LedgerRepository> CreateLedgerEntryUseCase<R> {
    pub async fn execute(&self, entry: NewLedgerEntry) -> Result<LedgerEntry, TrackerError> {
        if !validate_ledger_kind(&entry.kind) {
            return Err(TrackerError::InvalidLedgerType(entry.kind));
        }
        self.repo.create(&entry).await
    }
}

// ── GetAllRewards ────────────────────────────────────────────────────────────

pub struct GetAllRewardsUseCase<R: RewardRepository> {
    pub repo: R,
}

impl<R: RewardRepository> GetAllRewardsUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<RewardSummary>, TrackerError> {
        self.repo.list_summaries().await
    }
}
