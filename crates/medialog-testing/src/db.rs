//! Throwaway stores for integration tests.

use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;

use medialog_tracker_migration::Migrator;

const MEMORY_URL: &str = "sqlite::memory:";

/// Open a private in-memory SQLite database with every tracker migration
/// applied.
///
/// The pool is pinned to a single connection: each SQLite connection to
/// `:memory:` owns a separate database.
///
/// Panics if the database cannot be opened or migrated.
pub async fn test_db() -> DatabaseConnection {
    medialog_core::tracing::init_test_tracing();

    let mut opts = ConnectOptions::new(MEMORY_URL);
    opts.max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);
    let db = Database::connect(opts)
        .await
        .expect("failed to open in-memory sqlite");
    db.execute_unprepared("PRAGMA foreign_keys = ON")
        .await
        .expect("failed to enable foreign keys");
    Migrator::up(&db, None)
        .await
        .expect("failed to apply tracker migrations");
    db
}
