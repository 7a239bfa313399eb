use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Books::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Books::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Books::Title).string_len(300).not_null())
                    .col(ColumnDef::new(Books::Isbn).string_len(13).not_null())
                    .col(ColumnDef::new(Books::Author).string_len(300).null())
                    .col(ColumnDef::new(Books::CoverImage).text().null())
                    .col(ColumnDef::new(Books::PublishedYear).string_len(4).null())
                    .col(
                        ColumnDef::new(Books::Status)
                            .text()
                            .not_null()
                            .default("unread"),
                    )
                    .col(
                        ColumnDef::new(Books::CreatedAt)
                            .timestamp()
                            .null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Books::UpdatedAt)
                            .timestamp()
                            .null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Books::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Books {
    Table,
    Id,
    Title,
    Isbn,
    Author,
    CoverImage,
    PublishedYear,
    Status,
    CreatedAt,
    UpdatedAt,
}
