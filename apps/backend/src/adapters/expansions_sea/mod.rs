//! SeaORM adapter for expansion content: expansions, their question and
//! answer cards, and per-game expansion pools. Generic over ConnectionTrait.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder,
    Set,
};

use crate::entities::{answer_cards, expansion_pools, expansions, question_cards};

pub async fn find_expansions_by_ids<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    ids: Vec<i64>,
) -> Result<Vec<expansions::Model>, sea_orm::DbErr> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }
    expansions::Entity::find()
        .filter(expansions::Column::Id.is_in(ids))
        .all(conn)
        .await
}

/// Pools of a game in insertion order.
pub async fn find_pools_by_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Vec<expansion_pools::Model>, sea_orm::DbErr> {
    expansion_pools::Entity::find()
        .filter(expansion_pools::Column::GameId.eq(game_id))
        .order_by_asc(expansion_pools::Column::Id)
        .all(conn)
        .await
}

pub async fn find_questions_by_expansions<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    expansion_ids: Vec<i64>,
) -> Result<Vec<question_cards::Model>, sea_orm::DbErr> {
    if expansion_ids.is_empty() {
        return Ok(Vec::new());
    }
    question_cards::Entity::find()
        .filter(question_cards::Column::ExpansionId.is_in(expansion_ids))
        .order_by_asc(question_cards::Column::Id)
        .all(conn)
        .await
}

pub async fn find_answers_by_expansions<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    expansion_ids: Vec<i64>,
) -> Result<Vec<answer_cards::Model>, sea_orm::DbErr> {
    if expansion_ids.is_empty() {
        return Ok(Vec::new());
    }
    answer_cards::Entity::find()
        .filter(answer_cards::Column::ExpansionId.is_in(expansion_ids))
        .order_by_asc(answer_cards::Column::Id)
        .all(conn)
        .await
}

/// The full answer deck across every expansion in the store.
pub async fn find_all_answers<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<answer_cards::Model>, sea_orm::DbErr> {
    answer_cards::Entity::find()
        .order_by_asc(answer_cards::Column::Id)
        .all(conn)
        .await
}

pub async fn create_expansion<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    name: &str,
) -> Result<expansions::Model, sea_orm::DbErr> {
    let expansion = expansions::ActiveModel {
        id: NotSet,
        name: Set(name.to_string()),
        created_at: Set(time::OffsetDateTime::now_utc()),
    };
    expansion.insert(conn).await
}

pub async fn create_question_card<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    expansion_id: i64,
    text: &str,
) -> Result<question_cards::Model, sea_orm::DbErr> {
    let card = question_cards::ActiveModel {
        id: NotSet,
        expansion_id: Set(expansion_id),
        text: Set(text.to_string()),
        created_at: Set(time::OffsetDateTime::now_utc()),
    };
    card.insert(conn).await
}

pub async fn create_answer_card<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    expansion_id: i64,
    text: &str,
) -> Result<answer_cards::Model, sea_orm::DbErr> {
    let card = answer_cards::ActiveModel {
        id: NotSet,
        expansion_id: Set(expansion_id),
        text: Set(text.to_string()),
        created_at: Set(time::OffsetDateTime::now_utc()),
    };
    card.insert(conn).await
}

pub async fn create_pool<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    expansion_id: i64,
) -> Result<expansion_pools::Model, sea_orm::DbErr> {
    let pool = expansion_pools::ActiveModel {
        id: NotSet,
        game_id: Set(game_id),
        expansion_id: Set(expansion_id),
        created_at: Set(time::OffsetDateTime::now_utc()),
    };
    pool.insert(conn).await
}

pub async fn delete_pools_by_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    let res = expansion_pools::Entity::delete_many()
        .filter(expansion_pools::Column::GameId.eq(game_id))
        .exec(conn)
        .await?;
    Ok(res.rows_affected)
}
