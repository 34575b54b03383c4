//! Game repository functions for the domain layer.

use sea_orm::ConnectionTrait;
use tracing::debug;

use crate::adapters::{
    expansions_sea, games_sea as games_adapter, player_cards_sea, players_sea, rounds_sea,
};
use crate::entities::games;
use crate::errors::domain::{DomainError, StoreErrorKind};

/// Game session domain model
///
/// This represents a game session in the domain layer, with all fields
/// needed for lifecycle logic. It's converted from the database model
/// (games::Model) when loaded through repos functions.
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    pub id: i64,
    pub owner_id: i64,
    pub czar_id: Option<i64>,
    pub winner_id: Option<i64>,
    pub started: bool,
    pub text_channel_id: Option<i64>,
    pub voice_channel_id: Option<i64>,
    pub created_at: time::OffsetDateTime,
    pub updated_at: time::OffsetDateTime,
}

impl TryFrom<games::Model> for Game {
    type Error = DomainError;

    fn try_from(model: games::Model) -> Result<Self, Self::Error> {
        // A NULL owner can only exist mid-creation; seeing one here means
        // a broken create path or manual tampering.
        let owner_id = model.owner_id.ok_or_else(|| {
            DomainError::store(
                StoreErrorKind::DataCorruption,
                format!("game {} has no owner", model.id),
            )
        })?;

        Ok(Game {
            id: model.id,
            owner_id,
            czar_id: model.czar_id,
            winner_id: model.winner_id,
            started: model.started,
            text_channel_id: model.text_channel_id,
            voice_channel_id: model.voice_channel_id,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

// Free functions (generic) mirroring trait methods

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Option<Game>, DomainError> {
    let game = games_adapter::find_by_id(conn, game_id).await?;
    game.map(Game::try_from).transpose()
}

/// Find game by ID or return error if not found.
pub async fn require_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Game, DomainError> {
    let game = games_adapter::require_game(conn, game_id).await?;
    Game::try_from(game)
}

/// Create a game together with its owner player in one sequence of
/// writes: game row first, then the owner player, then the owner
/// reference. Callers run this inside a transaction so a failure leaves
/// nothing behind.
pub async fn create_with_owner<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    owner_discord_id: i64,
    dto: games_adapter::GameCreate,
) -> Result<Game, DomainError> {
    let created = games_adapter::create_game(conn, dto).await?;
    let owner = players_sea::create_player(
        conn,
        players_sea::PlayerCreate {
            game_id: created.id,
            discord_id: owner_discord_id,
        },
    )
    .await?;
    let wired = games_adapter::set_owner(conn, created.id, owner.id).await?;
    Game::try_from(wired)
}

/// Find the game owned by the given external (Discord) user id.
///
/// A linear scan over all sessions comparing each owner's external id;
/// O(N) in total session count, no index assumed.
pub async fn find_by_owner_discord_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    discord_id: i64,
) -> Result<Option<Game>, DomainError> {
    let all = games_adapter::find_all(conn).await?;
    for model in all {
        let Some(owner_id) = model.owner_id else {
            continue;
        };
        let Some(owner) = players_sea::find_by_id(conn, owner_id).await? else {
            continue;
        };
        if owner.discord_id == discord_id {
            return Game::try_from(model).map(Some);
        }
    }
    Ok(None)
}

pub async fn set_started<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Game, DomainError> {
    let game = games_adapter::mark_started(conn, game_id).await?;
    Game::try_from(game)
}

pub async fn set_winner<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    winner_player_id: Option<i64>,
) -> Result<Game, DomainError> {
    let game = games_adapter::set_winner(conn, game_id, winner_player_id).await?;
    Game::try_from(game)
}

pub async fn set_czar<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    czar_player_id: Option<i64>,
) -> Result<Game, DomainError> {
    let game = games_adapter::set_czar(conn, game_id, czar_player_id).await?;
    Game::try_from(game)
}

/// Delete a game and everything it owns.
///
/// Children are removed as explicit steps (player cards, players, rounds,
/// expansion pools, then the game row) rather than relying on implicit
/// lifecycle callbacks.
pub async fn delete_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<(), DomainError> {
    let roster = players_sea::find_all_by_game(conn, game_id).await?;
    let player_ids: Vec<i64> = roster.iter().map(|p| p.id).collect();

    let cards = player_cards_sea::delete_by_players(conn, player_ids).await?;
    let players = players_sea::delete_by_game(conn, game_id).await?;
    let rounds = rounds_sea::delete_by_game(conn, game_id).await?;
    let pools = expansions_sea::delete_pools_by_game(conn, game_id).await?;
    games_adapter::delete_game(conn, game_id).await?;

    debug!(game_id, cards, players, rounds, pools, "game deleted with owned rows");
    Ok(())
}
