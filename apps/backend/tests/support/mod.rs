//! Shared helpers for integration tests: in-memory state construction,
//! seeding factories, and a recording channel-service double.
#![allow(dead_code)] // each test binary uses a different subset

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use backend::channels::{Channel, ChannelKind, ChannelService};
use backend::errors::domain::{ChannelErrorKind, DomainError, NotFoundKind};
use backend::repos::expansions;
use backend::state::app_state::AppState;
use backend::{build_state, DbProfile};

/// Channel service double that remembers which channels exist and records
/// every delete call. Deleting an unknown channel fails with `NotFound`,
/// matching the real platform.
pub struct RecordingChannels {
    known: Mutex<HashMap<i64, Channel>>,
    deleted: Mutex<Vec<i64>>,
    outage: bool,
}

impl RecordingChannels {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            known: Mutex::new(HashMap::new()),
            deleted: Mutex::new(Vec::new()),
            outage: false,
        })
    }

    /// Double whose deletes always fail as if the chat platform is down.
    pub fn with_outage() -> Arc<Self> {
        Arc::new(Self {
            known: Mutex::new(HashMap::new()),
            deleted: Mutex::new(Vec::new()),
            outage: true,
        })
    }

    pub fn with_channels(entries: &[(i64, ChannelKind)]) -> Arc<Self> {
        let svc = Self::new();
        {
            let mut known = svc.known.lock().unwrap();
            for (id, kind) in entries {
                known.insert(
                    *id,
                    Channel {
                        id: *id,
                        name: format!("channel-{id}"),
                        kind: *kind,
                    },
                );
            }
        }
        svc
    }

    /// How many times `delete_channel` was invoked for this id.
    pub fn delete_count(&self, id: i64) -> usize {
        self.deleted.lock().unwrap().iter().filter(|d| **d == id).count()
    }
}

#[async_trait]
impl ChannelService for RecordingChannels {
    async fn get_channel(&self, id: i64) -> Result<Option<Channel>, DomainError> {
        Ok(self.known.lock().unwrap().get(&id).cloned())
    }

    async fn delete_channel(&self, id: i64) -> Result<(), DomainError> {
        self.deleted.lock().unwrap().push(id);
        if self.outage {
            return Err(DomainError::channel(
                ChannelErrorKind::Other("platform unavailable".to_string()),
                format!("cannot delete channel {id}"),
            ));
        }
        match self.known.lock().unwrap().remove(&id) {
            Some(_) => Ok(()),
            None => Err(DomainError::not_found(
                NotFoundKind::Channel,
                format!("channel {id} does not exist"),
            )),
        }
    }
}

/// Fresh in-memory state wired to the given channel double.
pub async fn test_state(channels: Arc<RecordingChannels>) -> AppState {
    build_state()
        .with_db(DbProfile::InMemory)
        .with_channels(channels)
        .build()
        .await
        .expect("in-memory state should build")
}

/// Seed one expansion with numbered question and answer cards, linked
/// into no game. Returns the expansion.
pub async fn seed_expansion(
    state: &AppState,
    name: &str,
    questions: usize,
    answers: usize,
) -> expansions::Expansion {
    let expansion = expansions::create_expansion(&state.db, name)
        .await
        .expect("create expansion");
    for i in 0..questions {
        expansions::create_question_card(&state.db, expansion.id, &format!("{name} question {i}"))
            .await
            .expect("create question card");
    }
    for i in 0..answers {
        expansions::create_answer_card(&state.db, expansion.id, &format!("{name} answer {i}"))
            .await
            .expect("create answer card");
    }
    expansion
}
