//! Domain-level error type used across services, repos and adapters.
//!
//! This error type is DB-agnostic. Callers at the outer edge should return
//! `Result<T, crate::error::AppError>` and convert from `DomainError`
//! using the provided `From<DomainError> for AppError` implementation.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Invalid game-state transitions (extend as needed)
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InvalidStateKind {
    /// Dealing requires at least one player in the roster
    EmptyRoster,
    Other(String),
}

/// Domain-level not found entities (minimal set; extend as needed)
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NotFoundKind {
    Game,
    Player,
    Channel,
    Other(String),
}

/// Persistence error kinds to distinguish operational failures
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum StoreErrorKind {
    Timeout,
    Unavailable,
    DataCorruption,
    Other(String),
}

/// Chat-platform channel service failures
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ChannelErrorKind {
    DeleteFailed,
    Other(String),
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Operation not valid in the session's current state
    InvalidState(InvalidStateKind, String),
    /// Missing resource in domain terms
    NotFound(NotFoundKind, String),
    /// Persistence failures
    Store(StoreErrorKind, String),
    /// External chat-platform channel failures
    Channel(ChannelErrorKind, String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::InvalidState(kind, d) => write!(f, "invalid state {kind:?}: {d}"),
            DomainError::NotFound(kind, d) => write!(f, "not found {kind:?}: {d}"),
            DomainError::Store(kind, d) => write!(f, "store {kind:?}: {d}"),
            DomainError::Channel(kind, d) => write!(f, "channel {kind:?}: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn invalid_state(kind: InvalidStateKind, detail: impl Into<String>) -> Self {
        Self::InvalidState(kind, detail.into())
    }
    pub fn not_found(kind: NotFoundKind, detail: impl Into<String>) -> Self {
        Self::NotFound(kind, detail.into())
    }
    pub fn store(kind: StoreErrorKind, detail: impl Into<String>) -> Self {
        Self::Store(kind, detail.into())
    }
    pub fn channel(kind: ChannelErrorKind, detail: impl Into<String>) -> Self {
        Self::Channel(kind, detail.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_kind_and_detail() {
        let err = DomainError::invalid_state(InvalidStateKind::EmptyRoster, "no players");
        let rendered = err.to_string();
        assert!(rendered.contains("EmptyRoster"));
        assert!(rendered.contains("no players"));
    }

    #[test]
    fn constructors_build_matching_variants() {
        assert!(matches!(
            DomainError::not_found(NotFoundKind::Game, "game 1"),
            DomainError::NotFound(NotFoundKind::Game, _)
        ));
        assert!(matches!(
            DomainError::store(StoreErrorKind::Unavailable, "down"),
            DomainError::Store(StoreErrorKind::Unavailable, _)
        ));
    }
}
