//! Round repository functions for the domain layer (generic over ConnectionTrait).

use sea_orm::ConnectionTrait;

use crate::adapters::rounds_sea as rounds_adapter;
use crate::entities::rounds;
use crate::errors::domain::DomainError;

/// Round domain model. A round is created empty at game start; its
/// internal question/judging mechanics live elsewhere.
#[derive(Debug, Clone, PartialEq)]
pub struct Round {
    pub id: i64,
    pub game_id: i64,
    pub round_no: i16,
    pub created_at: time::OffsetDateTime,
}

impl From<rounds::Model> for Round {
    fn from(model: rounds::Model) -> Self {
        Round {
            id: model.id,
            game_id: model.game_id,
            round_no: model.round_no,
            created_at: model.created_at,
        }
    }
}

pub async fn list_by_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Vec<Round>, DomainError> {
    let rounds = rounds_adapter::find_all_by_game(conn, game_id).await?;
    Ok(rounds.into_iter().map(Round::from).collect())
}

pub async fn count_by_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<u64, DomainError> {
    Ok(rounds_adapter::count_by_game(conn, game_id).await?)
}

pub async fn create_round<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    round_no: i16,
) -> Result<Round, DomainError> {
    let round = rounds_adapter::create_round(
        conn,
        rounds_adapter::RoundCreate { game_id, round_no },
    )
    .await?;
    Ok(Round::from(round))
}
