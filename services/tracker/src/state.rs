use sea_orm::{Database, DatabaseConnection, DbErr};

use crate::config::TrackerConfig;
use crate::infra::db::{
    DbBookRepository, DbLedgerRepository, DbMovieRepository, DbNotificationRepository,
    DbReadingListRepository, DbRewardRepository, DbUserRepository, DbWatchingListRepository,
};

/// Handle to the relational store. Every repository is built from it; there
/// is no process-wide connection.
#[derive(Clone)]
pub struct Store {
    pub db: DatabaseConnection,
}

impl Store {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn connect(config: &TrackerConfig) -> Result<Self, DbErr> {
        let db = Database::connect(config.connect_options()).await?;
        Ok(Self { db })
    }

    pub fn user_repo(&self) -> DbUserRepository {
        DbUserRepository {
            db: self.db.clone(),
        }
    }

    pub fn book_repo(&self) -> DbBookRepository {
        DbBookRepository {
            db: self.db.clone(),
        }
    }

    pub fn movie_repo(&self) -> DbMovieRepository {
        DbMovieRepository {
            db: self.db.clone(),
        }
    }

    pub fn reading_list_repo(&self) -> DbReadingListRepository {
        DbReadingListRepository {
            db: self.db.clone(),
        }
    }

    pub fn watching_list_repo(&self) -> DbWatchingListRepository {
        DbWatchingListRepository {
            db: self.db.clone(),
        }
    }

    pub fn notification_repo(&self) -> DbNotificationRepository {
        DbNotificationRepository {
            db: self.db.clone(),
        }
    }

    pub fn reward_repo(&self) -> DbRewardRepository {
        DbRewardRepository {
            db: self.db.clone(),
        }
    }

    pub fn ledger_repo(&self) -> DbLedgerRepository {
        DbLedgerRepository {
            db: self.db.clone(),
        }
    }
}
