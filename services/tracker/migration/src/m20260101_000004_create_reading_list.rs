use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ReadingList::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ReadingList::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ReadingList::Name).string_len(250).not_null())
                    .col(ColumnDef::new(ReadingList::UserId).integer().not_null())
                    .col(ColumnDef::new(ReadingList::BookId).integer().not_null())
                    .col(
                        ColumnDef::new(ReadingList::Status)
                            .text()
                            .not_null()
                            .default("uncompleted"),
                    )
                    .col(
                        ColumnDef::new(ReadingList::CreatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(ReadingList::UpdatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ReadingList::Table, ReadingList::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ReadingList::Table, ReadingList::BookId)
                            .to(Books::Table, Books::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ReadingList::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum ReadingList {
    Table,
    Id,
    Name,
    UserId,
    BookId,
    Status,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}

#[derive(Iden)]
enum Books {
    Table,
    Id,
}
