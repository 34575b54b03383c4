//! Player repository functions for the domain layer (generic over ConnectionTrait).

use sea_orm::ConnectionTrait;

use crate::adapters::players_sea as players_adapter;
use crate::entities::players;
use crate::errors::domain::DomainError;

/// Player domain model
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub id: i64,
    pub game_id: i64,
    pub discord_id: i64,
    pub created_at: time::OffsetDateTime,
}

impl From<players::Model> for Player {
    fn from(model: players::Model) -> Self {
        Player {
            id: model.id,
            game_id: model.game_id,
            discord_id: model.discord_id,
            created_at: model.created_at,
        }
    }
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: i64,
) -> Result<Option<Player>, DomainError> {
    let player = players_adapter::find_by_id(conn, player_id).await?;
    Ok(player.map(Player::from))
}

/// Roster of a game in stored insertion order. Dealing depends on this
/// order being stable.
pub async fn list_by_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Vec<Player>, DomainError> {
    let players = players_adapter::find_all_by_game(conn, game_id).await?;
    Ok(players.into_iter().map(Player::from).collect())
}

pub async fn create_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    discord_id: i64,
) -> Result<Player, DomainError> {
    let player = players_adapter::create_player(
        conn,
        players_adapter::PlayerCreate {
            game_id,
            discord_id,
        },
    )
    .await?;
    Ok(Player::from(player))
}
