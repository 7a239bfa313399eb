use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Movies::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Movies::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Movies::Title).string().not_null())
                    .col(ColumnDef::new(Movies::Type).string().not_null())
                    .col(ColumnDef::new(Movies::PosterImage).text().null())
                    .col(ColumnDef::new(Movies::ReleaseYear).string_len(4).null())
                    .col(ColumnDef::new(Movies::Overview).string_len(500).null())
                    .col(
                        ColumnDef::new(Movies::Status)
                            .text()
                            .not_null()
                            .default("unwatched"),
                    )
                    .col(
                        ColumnDef::new(Movies::AddedAt)
                            .timestamp()
                            .null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Movies::CreatedAt)
                            .timestamp()
                            .null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Movies::UpdatedAt)
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
            .drop_table(Table::drop().table(Movies::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Movies {
    Table,
    Id,
    Title,
    Type,
    PosterImage,
    ReleaseYear,
    Overview,
    Status,
    AddedAt,
    CreatedAt,
    UpdatedAt,
}
