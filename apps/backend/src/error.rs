use thiserror::Error;

use crate::errors::domain::DomainError;

/// Outer application error for bootstrap, configuration and service entry
/// points. Domain logic itself works in terms of `DomainError`.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {detail}")]
    Config { detail: String },
    #[error("Database error: {detail}")]
    Db { detail: String },
    #[error("Internal error: {detail}")]
    Internal { detail: String },
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl AppError {
    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }

    pub fn db(detail: impl Into<String>) -> Self {
        Self::Db {
            detail: detail.into(),
        }
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal {
            detail: detail.into(),
        }
    }
}

impl From<sea_orm::DbErr> for AppError {
    fn from(err: sea_orm::DbErr) -> Self {
        AppError::db(err.to_string())
    }
}

impl From<std::env::VarError> for AppError {
    fn from(err: std::env::VarError) -> Self {
        AppError::config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::domain::{DomainError, NotFoundKind};

    #[test]
    fn domain_error_converts_transparently() {
        let domain = DomainError::not_found(NotFoundKind::Game, "game 42");
        let app: AppError = domain.clone().into();
        assert_eq!(app.to_string(), domain.to_string());
    }

    #[test]
    fn db_err_converts_to_db_variant() {
        let app: AppError = sea_orm::DbErr::Custom("broken".into()).into();
        assert!(matches!(app, AppError::Db { .. }));
    }
}
