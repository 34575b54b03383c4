//! SeaORM adapter for the game repository - generic over ConnectionTrait.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, IntoActiveModel, NotSet,
    QueryFilter, QueryOrder, Set,
};

use crate::entities::games;

pub mod dto;

pub use dto::GameCreate;

// Adapter functions return DbErr; the repos layer maps to DomainError via From<DbErr>.

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Option<games::Model>, sea_orm::DbErr> {
    games::Entity::find()
        .filter(games::Column::Id.eq(game_id))
        .one(conn)
        .await
}

/// Find game by ID or return RecordNotFound error.
///
/// This is a convenience helper that converts `None` into a
/// DbErr::RecordNotFound, eliminating the repetitive `ok_or_else` pattern
/// when a game must exist.
pub async fn require_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<games::Model, sea_orm::DbErr> {
    find_by_id(conn, game_id)
        .await?
        .ok_or_else(|| sea_orm::DbErr::RecordNotFound("Game not found".to_string()))
}

/// All games in creation order. Used by the owner lookup scan; there is
/// deliberately no index on owners.
pub async fn find_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<games::Model>, sea_orm::DbErr> {
    games::Entity::find()
        .order_by_asc(games::Column::Id)
        .all(conn)
        .await
}

pub async fn create_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: GameCreate,
) -> Result<games::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let game_active = games::ActiveModel {
        id: NotSet,
        owner_id: Set(None),
        czar_id: Set(None),
        winner_id: Set(None),
        started: Set(false),
        text_channel_id: Set(dto.text_channel_id),
        voice_channel_id: Set(dto.voice_channel_id),
        created_at: Set(now),
        updated_at: Set(now),
    };

    game_active.insert(conn).await
}

pub async fn set_owner<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    owner_player_id: i64,
) -> Result<games::Model, sea_orm::DbErr> {
    let game = require_game(conn, game_id).await?;
    let mut active = game.into_active_model();
    active.owner_id = Set(Some(owner_player_id));
    active.updated_at = Set(time::OffsetDateTime::now_utc());
    active.update(conn).await
}

pub async fn mark_started<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<games::Model, sea_orm::DbErr> {
    let game = require_game(conn, game_id).await?;
    let mut active = game.into_active_model();
    active.started = Set(true);
    active.updated_at = Set(time::OffsetDateTime::now_utc());
    active.update(conn).await
}

pub async fn set_winner<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    winner_player_id: Option<i64>,
) -> Result<games::Model, sea_orm::DbErr> {
    let game = require_game(conn, game_id).await?;
    let mut active = game.into_active_model();
    active.winner_id = Set(winner_player_id);
    active.updated_at = Set(time::OffsetDateTime::now_utc());
    active.update(conn).await
}

pub async fn set_czar<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    czar_player_id: Option<i64>,
) -> Result<games::Model, sea_orm::DbErr> {
    let game = require_game(conn, game_id).await?;
    let mut active = game.into_active_model();
    active.czar_id = Set(czar_player_id);
    active.updated_at = Set(time::OffsetDateTime::now_utc());
    active.update(conn).await
}

/// Delete the game row itself. Owned children are removed explicitly by
/// the repos layer before this is called.
pub async fn delete_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<(), sea_orm::DbErr> {
    games::Entity::delete_many()
        .filter(games::Column::Id.eq(game_id))
        .exec(conn)
        .await?;
    Ok(())
}
