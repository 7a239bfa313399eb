use sea_orm_migration::prelude::*;

mod m20260101_000001_create_users;
mod m20260101_000002_create_books;
mod m20260101_000003_create_movies;
mod m20260101_000004_create_reading_list;
mod m20260101_000005_create_watching_list;
mod m20260101_000006_create_rewards;
mod m20260101_000007_create_notifications;
mod m20260101_000008_create_transactions;
mod m20260101_000009_add_lookup_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260101_000001_create_users::Migration),
            Box::new(m20260101_000002_create_books::Migration),
            Box::new(m20260101_000003_create_movies::Migration),
            Box::new(m20260101_000004_create_reading_list::Migration),
            Box::new(m20260101_000005_create_watching_list::Migration),
            Box::new(m20260101_000006_create_rewards::Migration),
            Box::new(m20260101_000007_create_notifications::Migration),
            Box::new(m20260101_000008_create_transactions::Migration),
            Box::new(m20260101_000009_add_lookup_indexes::Migration),
        ]
    }
}
