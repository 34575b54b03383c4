//! SeaORM adapter for the player repository - generic over ConnectionTrait.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder,
    Set,
};

use crate::entities::players;

/// DTO for creating a player.
#[derive(Debug, Clone)]
pub struct PlayerCreate {
    pub game_id: i64,
    pub discord_id: i64,
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: i64,
) -> Result<Option<players::Model>, sea_orm::DbErr> {
    players::Entity::find()
        .filter(players::Column::Id.eq(player_id))
        .one(conn)
        .await
}

/// Players of a game in insertion order.
pub async fn find_all_by_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Vec<players::Model>, sea_orm::DbErr> {
    players::Entity::find()
        .filter(players::Column::GameId.eq(game_id))
        .order_by_asc(players::Column::Id)
        .all(conn)
        .await
}

pub async fn create_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: PlayerCreate,
) -> Result<players::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let player = players::ActiveModel {
        id: NotSet,
        game_id: Set(dto.game_id),
        discord_id: Set(dto.discord_id),
        created_at: Set(now),
        updated_at: Set(now),
    };

    player.insert(conn).await
}

pub async fn delete_by_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    let res = players::Entity::delete_many()
        .filter(players::Column::GameId.eq(game_id))
        .exec(conn)
        .await?;
    Ok(res.rows_affected)
}
