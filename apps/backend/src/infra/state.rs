use std::sync::Arc;

use crate::channels::{ChannelService, NoopChannels};
use crate::config::db::DbProfile;
use crate::error::AppError;
use crate::infra::db::bootstrap_db;
use crate::state::app_state::AppState;

/// Builder for creating AppState instances (used in both tests and bootstrap)
pub struct StateBuilder {
    db_profile: Option<DbProfile>,
    channels: Option<Arc<dyn ChannelService>>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            db_profile: None,
            channels: None,
        }
    }

    pub fn with_db(mut self, profile: DbProfile) -> Self {
        self.db_profile = Some(profile);
        self
    }

    pub fn with_channels(mut self, channels: Arc<dyn ChannelService>) -> Self {
        self.channels = Some(channels);
        self
    }

    pub async fn build(self) -> Result<AppState, AppError> {
        let profile = self
            .db_profile
            .ok_or_else(|| AppError::config("no database profile configured"))?;

        // single entrypoint: build + migrate
        let conn = bootstrap_db(&profile).await?;

        let channels = self
            .channels
            .unwrap_or_else(|| Arc::new(NoopChannels));

        Ok(AppState::new(conn, channels))
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_build_fails_without_db_profile() {
        let result = build_state().build().await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_build_succeeds_with_in_memory_db() {
        let state = build_state().with_db(DbProfile::InMemory).build().await;
        assert!(state.is_ok());
    }
}
