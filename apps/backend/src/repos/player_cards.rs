//! Dealt-card repository functions for the domain layer (generic over ConnectionTrait).

use sea_orm::ConnectionTrait;

use crate::adapters::player_cards_sea as player_cards_adapter;
use crate::entities::player_cards;
use crate::errors::domain::DomainError;

/// One answer card held in one player's hand.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerCard {
    pub id: i64,
    pub player_id: i64,
    pub answer_card_id: i64,
}

impl From<player_cards::Model> for PlayerCard {
    fn from(model: player_cards::Model) -> Self {
        PlayerCard {
            id: model.id,
            player_id: model.player_id,
            answer_card_id: model.answer_card_id,
        }
    }
}

/// Persist a full deal in one bulk write.
pub async fn create_many<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    assignments: Vec<(i64, i64)>,
) -> Result<(), DomainError> {
    let dtos = assignments
        .into_iter()
        .map(
            |(player_id, answer_card_id)| player_cards_adapter::PlayerCardCreate {
                player_id,
                answer_card_id,
            },
        )
        .collect();
    player_cards_adapter::create_many(conn, dtos).await?;
    Ok(())
}

/// A player's hand in deal order.
pub async fn hand_for_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: i64,
) -> Result<Vec<PlayerCard>, DomainError> {
    let cards = player_cards_adapter::find_by_player(conn, player_id).await?;
    Ok(cards.into_iter().map(PlayerCard::from).collect())
}
