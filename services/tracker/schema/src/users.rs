use sea_orm::entity::prelude::*;

/// Account record; `email` is the external identifier.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub email: String,
    pub name: String,
    pub created_at: chrono::NaiveDateTime,
    #[sea_orm(column_type = "Text", nullable)]
    pub avatar: Option<String>,
    pub updated_at: chrono::NaiveDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::reading_list::Entity")]
    ReadingList,
    #[sea_orm(has_many = "super::watching_list::Entity")]
    WatchingList,
    #[sea_orm(has_many = "super::rewards::Entity")]
    Rewards,
    #[sea_orm(has_many = "super::notifications::Entity")]
    Notifications,
    #[sea_orm(has_many = "super::transactions::Entity")]
    Transactions,
}

impl Related<super::reading_list::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ReadingList.def()
    }
}

impl Related<super::watching_list::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WatchingList.def()
    }
}

impl Related<super::rewards::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Rewards.def()
    }
}

impl Related<super::notifications::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Notifications.def()
    }
}

impl Related<super::transactions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Transactions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
