use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "answer_cards")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_name = "expansion_id")]
    pub expansion_id: i64,
    pub text: String,
    #[sea_orm(column_name = "created_at")]
    pub created_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::expansions::Entity",
        from = "Column::ExpansionId",
        to = "super::expansions::Column::Id"
    )]
    Expansion,
    #[sea_orm(has_many = "super::player_cards::Entity")]
    PlayerCards,
}

impl Related<super::expansions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Expansion.def()
    }
}

impl Related<super::player_cards::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PlayerCards.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
