use sea_orm::entity::prelude::*;

/// Catalog book. `status` is free text, `"unread"` on insert.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "books")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub isbn: String,
    pub author: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub cover_image: Option<String>,
    pub published_year: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub status: String,
    pub created_at: Option<chrono::NaiveDateTime>,
    pub updated_at: Option<chrono::NaiveDateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::reading_list::Entity")]
    ReadingList,
}

impl Related<super::reading_list::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ReadingList.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
