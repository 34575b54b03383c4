use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "expansions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    #[sea_orm(column_name = "created_at")]
    pub created_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::question_cards::Entity")]
    QuestionCards,
    #[sea_orm(has_many = "super::answer_cards::Entity")]
    AnswerCards,
    #[sea_orm(has_many = "super::expansion_pools::Entity")]
    ExpansionPools,
}

impl Related<super::question_cards::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::QuestionCards.def()
    }
}

impl Related<super::answer_cards::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AnswerCards.def()
    }
}

impl Related<super::expansion_pools::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ExpansionPools.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
