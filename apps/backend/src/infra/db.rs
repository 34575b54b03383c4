//! Database connection and bootstrap.

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

use crate::config::db::{database_url, DbProfile};
use crate::error::AppError;

/// Unified database connector that supports different profiles.
/// This function does NOT run any migrations.
pub async fn connect_db(profile: &DbProfile) -> Result<DatabaseConnection, AppError> {
    let url = database_url(profile)?;

    let mut opts = ConnectOptions::new(url);
    if *profile == DbProfile::InMemory {
        // A pooled in-memory SQLite would hand each connection its own
        // empty database; pin the pool to a single connection.
        opts.max_connections(1);
    }

    let conn = Database::connect(opts).await?;
    Ok(conn)
}

/// Run database migrations (idempotent)
pub async fn run_migrations(conn: &DatabaseConnection) -> Result<(), sea_orm::DbErr> {
    use migration::{Migrator, MigratorTrait};

    Migrator::up(conn, None).await?;
    Ok(())
}

/// Single entrypoint used by `build_state`: connect, then migrate where
/// the profile owns its schema. Prod schema changes go through the
/// migration CLI, never through service bootstrap.
pub async fn bootstrap_db(profile: &DbProfile) -> Result<DatabaseConnection, AppError> {
    let conn = connect_db(profile).await?;

    match profile {
        DbProfile::InMemory | DbProfile::Test => {
            run_migrations(&conn).await?;
            info!(?profile, "database connected and migrated");
        }
        DbProfile::Prod => {
            info!(?profile, "database connected");
        }
    }

    Ok(conn)
}

#[cfg(test)]
mod tests {
    use migration::MigratorTrait;

    use super::*;

    #[tokio::test]
    async fn bootstrap_applies_every_defined_migration() {
        let conn = bootstrap_db(&DbProfile::InMemory).await.unwrap();
        let applied = migration::count_applied_migrations(&conn).await.unwrap();
        assert_eq!(applied, migration::Migrator::migrations().len());
    }

    #[tokio::test]
    async fn unmigrated_connection_counts_zero_applied() {
        let conn = connect_db(&DbProfile::InMemory).await.unwrap();
        let applied = migration::count_applied_migrations(&conn).await.unwrap();
        assert_eq!(applied, 0);
    }
}
