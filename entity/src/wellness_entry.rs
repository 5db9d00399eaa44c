use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "wellness_entry")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub entry_date: Date,
    pub sleep_hours: f64,
    pub stress_level: i16,
    pub caffeine_intake: i32,
    pub alcohol_intake: i32,
    pub wellness_score: f64,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::wellspring_user::Entity",
        from = "Column::UserId",
        to = "super::wellspring_user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    WellspringUser,
}

impl Related<super::wellspring_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WellspringUser.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
