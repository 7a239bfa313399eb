use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Rewards::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Rewards::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Rewards::UserId).integer().not_null())
                    .col(ColumnDef::new(Rewards::Name).string_len(255).not_null())
                    .col(
                        ColumnDef::new(Rewards::Points)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Rewards::Level)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .col(
                        ColumnDef::new(Rewards::CreatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Rewards::UpdatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(Rewards::Description).text().null())
                    .col(
                        ColumnDef::new(Rewards::IsAvailable)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    // No cascade: rows are removed explicitly before the user.
                    .foreign_key(
                        ForeignKey::create()
                            .from(Rewards::Table, Rewards::UserId)
                            .to(Users::Table, Users::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Rewards::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Rewards {
    Table,
    Id,
    UserId,
    Name,
    Points,
    Level,
    CreatedAt,
    UpdatedAt,
    Description,
    IsAvailable,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}
