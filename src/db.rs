use std::{future::Future, time::Duration};

use anyhow::Context;
use sqlx::{migrate::Migrator, PgPool};
use tracing::{info, warn};

use crate::error::AppError;

/// Upper bound for a single query round-trip. Not retried.
pub const QUERY_TIMEOUT: Duration = Duration::from_secs(5);

pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Applies pending migrations; the server refuses to start if this fails.
pub async fn run_migrations(db: &PgPool) -> anyhow::Result<()> {
    MIGRATOR.run(db).await.context("apply migrations")?;
    info!("migrations applied");
    Ok(())
}

#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("{op}: query timed out")]
    Timeout { op: &'static str },
    #[error("{op}: unique constraint violated")]
    UniqueViolation { op: &'static str },
    #[error("{op}: referenced row does not exist")]
    ForeignKeyViolation { op: &'static str },
    #[error("{op}: {source}")]
    Sqlx {
        op: &'static str,
        #[source]
        source: sqlx::Error,
    },
}

impl DbError {
    fn classify(op: &'static str, e: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db) = &e {
            if db.is_unique_violation() {
                return DbError::UniqueViolation { op };
            }
            if db.is_foreign_key_violation() {
                return DbError::ForeignKeyViolation { op };
            }
        }
        DbError::Sqlx { op, source: e }
    }
}

impl From<DbError> for AppError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::UniqueViolation { .. } => AppError::Conflict("Resource already exists".into()),
            DbError::ForeignKeyViolation { .. } => {
                AppError::NotFound("Referenced resource not found".into())
            }
            other => AppError::Internal(other.into()),
        }
    }
}

/// Runs one query under [`QUERY_TIMEOUT`] and classifies its failure.
pub async fn timed<T, F>(op: &'static str, fut: F) -> Result<T, DbError>
where
    F: Future<Output = Result<T, sqlx::Error>>,
{
    match tokio::time::timeout(QUERY_TIMEOUT, fut).await {
        Ok(res) => res.map_err(|e| DbError::classify(op, e)),
        Err(_) => {
            warn!(op, "query timed out");
            Err(DbError::Timeout { op })
        }
    }
}
