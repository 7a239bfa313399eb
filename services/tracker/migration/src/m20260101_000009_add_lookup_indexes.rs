use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

const INDEX_NAMES: [&str; 7] = [
    "idx_reading_list_user_id",
    "idx_watching_list_user_id",
    "idx_rewards_user_id_name",
    "idx_notifications_user_id_is_read",
    "idx_transactions_user_id",
    "idx_books_created_at",
    "idx_movies_created_at",
];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .table(ReadingList::Table)
                    .col(ReadingList::UserId)
                    .name(INDEX_NAMES[0])
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(WatchingList::Table)
                    .col(WatchingList::UserId)
                    .name(INDEX_NAMES[1])
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(Rewards::Table)
                    .col(Rewards::UserId)
                    .col(Rewards::Name)
                    .name(INDEX_NAMES[2])
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(Notifications::Table)
                    .col(Notifications::UserId)
                    .col(Notifications::IsRead)
                    .name(INDEX_NAMES[3])
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(Transactions::Table)
                    .col(Transactions::UserId)
                    .name(INDEX_NAMES[4])
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(Books::Table)
                    .col((Books::CreatedAt, IndexOrder::Desc))
                    .name(INDEX_NAMES[5])
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(Movies::Table)
                    .col((Movies::CreatedAt, IndexOrder::Desc))
                    .name(INDEX_NAMES[6])
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for name in INDEX_NAMES.iter().rev() {
            manager
                .drop_index(Index::drop().name(*name).to_owned())
                .await?;
        }
        Ok(())
    }
}

#[derive(Iden)]
enum ReadingList {
    Table,
    UserId,
}

#[derive(Iden)]
enum WatchingList {
    Table,
    UserId,
}

#[derive(Iden)]
enum Rewards {
    Table,
    UserId,
    Name,
}

#[derive(Iden)]
enum Notifications {
    Table,
    UserId,
    IsRead,
}

#[derive(Iden)]
enum Transactions {
    Table,
    UserId,
}

#[derive(Iden)]
enum Books {
    Table,
    CreatedAt,
}

#[derive(Iden)]
enum Movies {
    Table,
    CreatedAt,
}
