//! SeaORM adapter for dealt player cards - generic over ConnectionTrait.

use sea_orm::{
    ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder, Set,
};

use crate::entities::player_cards;

/// One card assignment produced by a deal.
#[derive(Debug, Clone)]
pub struct PlayerCardCreate {
    pub player_id: i64,
    pub answer_card_id: i64,
}

/// Bulk-insert dealt cards. A deal assigns the whole deck at once, so
/// this is the only write path for player cards.
pub async fn create_many<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dtos: Vec<PlayerCardCreate>,
) -> Result<(), sea_orm::DbErr> {
    if dtos.is_empty() {
        return Ok(());
    }

    let now = time::OffsetDateTime::now_utc();
    let models = dtos.into_iter().map(|dto| player_cards::ActiveModel {
        id: NotSet,
        player_id: Set(dto.player_id),
        answer_card_id: Set(dto.answer_card_id),
        created_at: Set(now),
    });

    player_cards::Entity::insert_many(models).exec(conn).await?;
    Ok(())
}

/// A player's hand in deal order.
pub async fn find_by_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: i64,
) -> Result<Vec<player_cards::Model>, sea_orm::DbErr> {
    player_cards::Entity::find()
        .filter(player_cards::Column::PlayerId.eq(player_id))
        .order_by_asc(player_cards::Column::Id)
        .all(conn)
        .await
}

pub async fn delete_by_players<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_ids: Vec<i64>,
) -> Result<u64, sea_orm::DbErr> {
    if player_ids.is_empty() {
        return Ok(0);
    }
    let res = player_cards::Entity::delete_many()
        .filter(player_cards::Column::PlayerId.is_in(player_ids))
        .exec(conn)
        .await?;
    Ok(res.rows_affected)
}
