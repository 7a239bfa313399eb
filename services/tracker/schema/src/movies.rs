use sea_orm::entity::prelude::*;

/// Catalog movie or series. `status` is free text, `"unwatched"` on insert.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "movies")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    #[sea_orm(column_name = "type")]
    pub kind: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub poster_image: Option<String>,
    pub release_year: Option<String>,
    pub overview: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub status: String,
    pub added_at: Option<chrono::NaiveDateTime>,
    pub created_at: Option<chrono::NaiveDateTime>,
    pub updated_at: Option<chrono::NaiveDateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::watching_list::Entity")]
    WatchingList,
}

impl Related<super::watching_list::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WatchingList.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
