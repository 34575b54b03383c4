use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::channels::ChannelService;

/// Application state containing shared resources
#[derive(Clone)]
pub struct AppState {
    /// Database connection
    pub db: DatabaseConnection,
    /// Chat-platform channel service (injected, never ambient global state)
    pub channels: Arc<dyn ChannelService>,
}

impl AppState {
    /// Create a new AppState with the given database connection and channel service
    pub fn new(db: DatabaseConnection, channels: Arc<dyn ChannelService>) -> Self {
        Self { db, channels }
    }
}
