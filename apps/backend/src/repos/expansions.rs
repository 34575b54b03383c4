//! Expansion content repository functions for the domain layer.
//!
//! Covers expansions, their question/answer cards and per-game expansion
//! pools. The per-game views here back the session's derived projections:
//! collect each pool's expansion, then flatten that expansion's content.

use std::collections::HashMap;

use sea_orm::ConnectionTrait;

use crate::adapters::expansions_sea as expansions_adapter;
use crate::entities::{answer_cards, expansions, question_cards};
use crate::errors::domain::DomainError;

/// Expansion domain model (a named content pack)
#[derive(Debug, Clone, PartialEq)]
pub struct Expansion {
    pub id: i64,
    pub name: String,
}

impl From<expansions::Model> for Expansion {
    fn from(model: expansions::Model) -> Self {
        Expansion {
            id: model.id,
            name: model.name,
        }
    }
}

/// Question card domain model
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionCard {
    pub id: i64,
    pub expansion_id: i64,
    pub text: String,
}

impl From<question_cards::Model> for QuestionCard {
    fn from(model: question_cards::Model) -> Self {
        QuestionCard {
            id: model.id,
            expansion_id: model.expansion_id,
            text: model.text,
        }
    }
}

/// Answer card domain model
#[derive(Debug, Clone, PartialEq)]
pub struct AnswerCard {
    pub id: i64,
    pub expansion_id: i64,
    pub text: String,
}

impl From<answer_cards::Model> for AnswerCard {
    fn from(model: answer_cards::Model) -> Self {
        AnswerCard {
            id: model.id,
            expansion_id: model.expansion_id,
            text: model.text,
        }
    }
}

/// The expansions linked into a game through its pools, one entry per
/// pool in pool insertion order.
pub async fn expansions_for_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Vec<Expansion>, DomainError> {
    let pools = expansions_adapter::find_pools_by_game(conn, game_id).await?;
    let expansion_ids: Vec<i64> = pools.iter().map(|p| p.expansion_id).collect();

    let mut by_id: HashMap<i64, expansions::Model> =
        expansions_adapter::find_expansions_by_ids(conn, expansion_ids)
            .await?
            .into_iter()
            .map(|e| (e.id, e))
            .collect();

    Ok(pools
        .iter()
        .filter_map(|pool| by_id.remove(&pool.expansion_id))
        .map(Expansion::from)
        .collect())
}

/// All question cards available through a game's expansion pools,
/// flattened into one sequence.
pub async fn questions_for_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Vec<QuestionCard>, DomainError> {
    let expansion_ids: Vec<i64> = expansions_for_game(conn, game_id)
        .await?
        .into_iter()
        .map(|e| e.id)
        .collect();
    let questions = expansions_adapter::find_questions_by_expansions(conn, expansion_ids).await?;
    Ok(questions.into_iter().map(QuestionCard::from).collect())
}

/// All answer cards available through a game's expansion pools,
/// flattened into one sequence.
pub async fn answers_for_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Vec<AnswerCard>, DomainError> {
    let expansion_ids: Vec<i64> = expansions_for_game(conn, game_id)
        .await?
        .into_iter()
        .map(|e| e.id)
        .collect();
    let answers = expansions_adapter::find_answers_by_expansions(conn, expansion_ids).await?;
    Ok(answers.into_iter().map(AnswerCard::from).collect())
}

/// The full answer deck in the store, used when dealing a game.
pub async fn find_all_answer_cards<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<AnswerCard>, DomainError> {
    let answers = expansions_adapter::find_all_answers(conn).await?;
    Ok(answers.into_iter().map(AnswerCard::from).collect())
}

pub async fn create_expansion<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    name: &str,
) -> Result<Expansion, DomainError> {
    let expansion = expansions_adapter::create_expansion(conn, name).await?;
    Ok(Expansion::from(expansion))
}

pub async fn create_question_card<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    expansion_id: i64,
    text: &str,
) -> Result<QuestionCard, DomainError> {
    let card = expansions_adapter::create_question_card(conn, expansion_id, text).await?;
    Ok(QuestionCard::from(card))
}

pub async fn create_answer_card<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    expansion_id: i64,
    text: &str,
) -> Result<AnswerCard, DomainError> {
    let card = expansions_adapter::create_answer_card(conn, expansion_id, text).await?;
    Ok(AnswerCard::from(card))
}

/// Activate an expansion for a game.
pub async fn add_to_pool<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    expansion_id: i64,
) -> Result<(), DomainError> {
    expansions_adapter::create_pool(conn, game_id, expansion_id).await?;
    Ok(())
}
