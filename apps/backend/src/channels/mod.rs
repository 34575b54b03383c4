//! Chat-platform channel access port.
//!
//! The original bot resolved channels through a process-wide cache; here
//! the dependency is injected explicitly so the core never touches
//! ambient global state.

use async_trait::async_trait;
use tracing::debug;

use crate::errors::domain::DomainError;

/// Kind of chat-platform channel owned by a game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelKind {
    Text,
    Voice,
}

/// A chat-platform channel as reported by the external service.
#[derive(Debug, Clone, PartialEq)]
pub struct Channel {
    pub id: i64,
    pub name: String,
    pub kind: ChannelKind,
}

/// Trait for the external chat-platform channel service.
///
/// Implementations talk to the actual platform (or a test double). Both
/// methods are idempotent from the caller's point of view: a lookup of a
/// missing channel yields `Ok(None)`, and deleting one may yield a
/// `NotFound` the caller is expected to tolerate.
#[async_trait]
pub trait ChannelService: Send + Sync {
    /// Resolve a channel id to the channel, if the platform still knows it.
    async fn get_channel(&self, id: i64) -> Result<Option<Channel>, DomainError>;

    /// Delete a channel on the platform.
    async fn delete_channel(&self, id: i64) -> Result<(), DomainError>;
}

/// Channel service for environments without a chat platform attached.
/// Lookups find nothing and deletions succeed silently.
pub struct NoopChannels;

#[async_trait]
impl ChannelService for NoopChannels {
    async fn get_channel(&self, _id: i64) -> Result<Option<Channel>, DomainError> {
        Ok(None)
    }

    async fn delete_channel(&self, id: i64) -> Result<(), DomainError> {
        debug!(channel_id = id, "noop channel delete");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn noop_channels_find_nothing_and_delete_quietly() {
        let svc = NoopChannels;
        assert_eq!(svc.get_channel(42).await.unwrap(), None);
        assert!(svc.delete_channel(42).await.is_ok());
    }
}
