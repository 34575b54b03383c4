//! SeaORM -> DomainError translation helpers.
//!
//! Adapters return `sea_orm::DbErr`; repos convert into
//! `crate::errors::domain::DomainError` here, and higher layers can then
//! map `DomainError` to `AppError` via `From`.

use sea_orm::DbErr;
use tracing::warn;

use crate::errors::domain::{DomainError, NotFoundKind, StoreErrorKind};

pub fn map_db_err(err: DbErr) -> DomainError {
    match err {
        DbErr::RecordNotFound(msg) => DomainError::not_found(NotFoundKind::Other(msg.clone()), msg),
        DbErr::ConnectionAcquire(source) => {
            warn!(error = %source, "database connection acquire failed");
            DomainError::store(StoreErrorKind::Unavailable, source.to_string())
        }
        DbErr::Conn(runtime_err) => {
            warn!(error = %runtime_err, "database connection failed");
            DomainError::store(StoreErrorKind::Unavailable, runtime_err.to_string())
        }
        other => DomainError::store(StoreErrorKind::Other("DbErr".into()), other.to_string()),
    }
}

impl From<DbErr> for DomainError {
    fn from(err: DbErr) -> Self {
        map_db_err(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::domain::DomainError;

    #[test]
    fn record_not_found_maps_to_not_found() {
        let err = map_db_err(DbErr::RecordNotFound("Game not found".into()));
        assert!(matches!(err, DomainError::NotFound(_, _)));
    }

    #[test]
    fn custom_maps_to_store() {
        let err = map_db_err(DbErr::Custom("boom".into()));
        assert!(matches!(err, DomainError::Store(_, _)));
    }
}
