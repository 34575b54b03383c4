//! Game session lifecycle service.
//!
//! Owns the not-started -> active -> ended transitions: dealing the
//! answer deck at start, and destroying or archiving the session at end.

use tracing::{debug, info, warn};

use crate::adapters::games_sea::GameCreate;
use crate::channels::Channel;
use crate::db::txn::with_txn;
use crate::domain::dealing;
use crate::error::AppError;
use crate::errors::domain::{ChannelErrorKind, DomainError, InvalidStateKind};
use crate::repos::{expansions, games, player_cards, players, rounds};
use crate::services::locks::GameLocks;
use crate::state::app_state::AppState;

/// Game session service. One instance is shared across callers; it holds
/// the per-session lock registry.
pub struct GameService {
    locks: GameLocks,
}

impl GameService {
    pub fn new() -> Self {
        Self {
            locks: GameLocks::new(),
        }
    }

    /// Create a game session together with its owner player.
    ///
    /// The owner is part of the session from the moment it exists; both
    /// rows are written in one transaction.
    pub async fn create_game(
        &self,
        state: &AppState,
        owner_discord_id: i64,
        text_channel_id: Option<i64>,
        voice_channel_id: Option<i64>,
    ) -> Result<games::Game, AppError> {
        let game = with_txn(state, |txn| {
            Box::pin(async move {
                let mut dto = GameCreate::new();
                if let Some(id) = text_channel_id {
                    dto = dto.with_text_channel(id);
                }
                if let Some(id) = voice_channel_id {
                    dto = dto.with_voice_channel(id);
                }
                Ok(games::create_with_owner(txn, owner_discord_id, dto).await?)
            })
        })
        .await?;

        info!(game_id = game.id, owner_discord_id, "game created");
        Ok(game)
    }

    /// Start a game: shuffle the full answer deck, deal it round-robin
    /// across the roster, and open round 1.
    ///
    /// Calling `start` on a session that is already started is a no-op.
    /// An empty roster fails with `InvalidState` before any store
    /// mutation; everything else runs in one transaction.
    pub async fn start(&self, state: &AppState, game_id: i64) -> Result<(), AppError> {
        let lock = self.locks.lock_for(game_id);
        let _guard = lock.lock().await;

        with_txn(state, |txn| {
            Box::pin(async move {
                let game = games::require_game(txn, game_id).await?;
                if game.started {
                    debug!(game_id, "game already started, ignoring");
                    return Ok(());
                }

                let roster = players::list_by_game(txn, game_id).await?;
                if roster.is_empty() {
                    return Err(DomainError::invalid_state(
                        InvalidStateKind::EmptyRoster,
                        format!("game {game_id} has no players to deal to"),
                    )
                    .into());
                }

                // Shuffle deck
                let deck = expansions::find_all_answer_cards(txn).await?;
                let deck_size = deck.len();

                // Distribute cards
                let hands = dealing::deal(deck, roster.len())?;
                let mut assignments = Vec::with_capacity(deck_size);
                for (player, hand) in roster.iter().zip(hands.into_iter()) {
                    for card in hand {
                        assignments.push((player.id, card.id));
                    }
                }
                player_cards::create_many(txn, assignments).await?;

                // Create the first round
                rounds::create_round(txn, game_id, 1).await?;

                games::set_started(txn, game_id).await?;

                info!(
                    game_id,
                    players = roster.len(),
                    cards = deck_size,
                    "game started"
                );
                Ok(())
            })
        })
        .await
    }

    /// End a game. Destroys the session if it has no decided winner,
    /// otherwise keeps the record for history and just cleans up the
    /// channels. Channel failures are logged and never block the
    /// state transition.
    pub async fn end(&self, state: &AppState, game_id: i64) -> Result<(), AppError> {
        let lock = self.locks.lock_for(game_id);
        let _guard = lock.lock().await;

        let game = games::require_game(&state.db, game_id).await?;

        // Channel cleanup always precedes destruction or archival.
        self.delete_channels(state, &game).await;

        if game.winner_id.is_none() {
            with_txn(state, |txn| {
                Box::pin(async move { Ok(games::delete_game(txn, game_id).await?) })
            })
            .await?;
            // Entry removed while the guard is still held; stale holders
            // of the old lock fail NotFound on the deleted row.
            self.locks.forget(game_id);
            info!(game_id, "game ended without winner, session deleted");
        } else {
            info!(game_id, winner_id = ?game.winner_id, "game ended, session archived");
        }
        Ok(())
    }

    /// Find the game owned by the given external user id (linear scan).
    pub async fn find_by_owner_discord_id(
        &self,
        state: &AppState,
        discord_id: i64,
    ) -> Result<Option<games::Game>, AppError> {
        Ok(games::find_by_owner_discord_id(&state.db, discord_id).await?)
    }

    /// The expansions currently included in the game.
    pub async fn expansions(
        &self,
        state: &AppState,
        game_id: i64,
    ) -> Result<Vec<expansions::Expansion>, AppError> {
        Ok(expansions::expansions_for_game(&state.db, game_id).await?)
    }

    /// Flattened view of the questions available through the game's
    /// expansion pools. Recomputed on every call.
    pub async fn questions(
        &self,
        state: &AppState,
        game_id: i64,
    ) -> Result<Vec<expansions::QuestionCard>, AppError> {
        Ok(expansions::questions_for_game(&state.db, game_id).await?)
    }

    /// Flattened view of the answers available through the game's
    /// expansion pools. Recomputed on every call.
    pub async fn answers(
        &self,
        state: &AppState,
        game_id: i64,
    ) -> Result<Vec<expansions::AnswerCard>, AppError> {
        Ok(expansions::answers_for_game(&state.db, game_id).await?)
    }

    /// Resolve the game's text channel through the channel service.
    pub async fn text_channel(
        &self,
        state: &AppState,
        game_id: i64,
    ) -> Result<Option<Channel>, AppError> {
        let game = games::require_game(&state.db, game_id).await?;
        match game.text_channel_id {
            Some(id) => Ok(state.channels.get_channel(id).await?),
            None => Ok(None),
        }
    }

    /// Resolve the game's voice channel through the channel service.
    pub async fn voice_channel(
        &self,
        state: &AppState,
        game_id: i64,
    ) -> Result<Option<Channel>, AppError> {
        let game = games::require_game(&state.db, game_id).await?;
        match game.voice_channel_id {
            Some(id) => Ok(state.channels.get_channel(id).await?),
            None => Ok(None),
        }
    }

    /// Delete both chat-platform channels for a game. Missing ids and
    /// already-gone channels are tolerated; other failures are logged
    /// and swallowed - the session-level outcome never depends on the
    /// chat platform.
    async fn delete_channels(&self, state: &AppState, game: &games::Game) {
        let targets = [
            ("text", game.text_channel_id),
            ("voice", game.voice_channel_id),
        ];
        for (kind, id) in targets {
            let Some(id) = id else {
                debug!(game_id = game.id, kind, "no channel recorded, skipping");
                continue;
            };
            match state.channels.delete_channel(id).await {
                Ok(()) => debug!(game_id = game.id, kind, channel_id = id, "channel deleted"),
                Err(DomainError::NotFound(_, _)) => {
                    warn!(game_id = game.id, kind, channel_id = id, "channel already gone")
                }
                Err(err) => {
                    let err = DomainError::channel(
                        ChannelErrorKind::DeleteFailed,
                        format!("deleting {kind} channel {id}: {err}"),
                    );
                    warn!(
                        game_id = game.id,
                        kind,
                        channel_id = id,
                        error = %err,
                        "channel delete failed"
                    );
                }
            }
        }
    }
}

impl Default for GameService {
    fn default() -> Self {
        Self::new()
    }
}
