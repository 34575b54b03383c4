use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "games")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Owner player id. Nullable at the column level only to break the
    /// game/player insert cycle; always set by the time a create
    /// transaction commits.
    #[sea_orm(column_name = "owner_id")]
    pub owner_id: Option<i64>,
    #[sea_orm(column_name = "czar_id")]
    pub czar_id: Option<i64>,
    #[sea_orm(column_name = "winner_id")]
    pub winner_id: Option<i64>,
    pub started: bool,
    #[sea_orm(column_name = "text_channel_id")]
    pub text_channel_id: Option<i64>,
    #[sea_orm(column_name = "voice_channel_id")]
    pub voice_channel_id: Option<i64>,
    #[sea_orm(column_name = "created_at")]
    pub created_at: OffsetDateTime,
    #[sea_orm(column_name = "updated_at")]
    pub updated_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::players::Entity")]
    Players,
    #[sea_orm(has_many = "super::rounds::Entity")]
    Rounds,
    #[sea_orm(has_many = "super::expansion_pools::Entity")]
    ExpansionPools,
}

impl Related<super::players::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Players.def()
    }
}

impl Related<super::rounds::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Rounds.def()
    }
}

impl Related<super::expansion_pools::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ExpansionPools.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
