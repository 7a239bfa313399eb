use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WatchingList::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(WatchingList::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(WatchingList::Name)
                            .string_len(250)
                            .not_null(),
                    )
                    .col(ColumnDef::new(WatchingList::UserId).integer().not_null())
                    .col(ColumnDef::new(WatchingList::MovieId).integer().not_null())
                    .col(
                        ColumnDef::new(WatchingList::CreatedAt)
                            .timestamp()
                            .null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(WatchingList::Status)
                            .text()
                            .not_null()
                            .default("uncompleted"),
                    )
                    .col(
                        ColumnDef::new(WatchingList::UpdatedAt)
                            .timestamp()
                            .null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(WatchingList::Table, WatchingList::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(WatchingList::Table, WatchingList::MovieId)
                            .to(Movies::Table, Movies::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(WatchingList::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum WatchingList {
    Table,
    Id,
    Name,
    UserId,
    MovieId,
    CreatedAt,
    Status,
    UpdatedAt,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}

#[derive(Iden)]
enum Movies {
    Table,
    Id,
}
