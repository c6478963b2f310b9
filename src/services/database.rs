//! Database access: the single liveness query behind `db_time`.

use crate::config::DatabaseConfig;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{
    PgPool,
    postgres::{PgConnectOptions, PgPoolOptions},
};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error(transparent)]
    Query(#[from] sqlx::Error),
}

/// Source of the database server's current time.
#[async_trait]
pub trait DatabaseClock: Send + Sync {
    /// Run `SELECT NOW()` and return the server timestamp.
    async fn now(&self) -> Result<DateTime<Utc>, DatabaseError>;
}

/// PostgreSQL-backed clock sharing one pool across all requests.
#[derive(Clone)]
pub struct PgDatabase {
    pub pool: Arc<PgPool>,
}

impl PgDatabase {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool: Arc::new(pool),
        }
    }

    /// Build a pool that opens connections on first use, so the service can
    /// start while the database is still unreachable.
    pub fn connect_lazy(cfg: &DatabaseConfig) -> Self {
        let options = PgConnectOptions::new()
            .host(&cfg.host)
            .port(cfg.port)
            .username(&cfg.user)
            .password(&cfg.password)
            .database(&cfg.name);

        Self::new(PgPoolOptions::new().max_connections(10).connect_lazy_with(options))
    }
}

#[async_trait]
impl DatabaseClock for PgDatabase {
    async fn now(&self) -> Result<DateTime<Utc>, DatabaseError> {
        let now = sqlx::query_scalar::<_, DateTime<Utc>>("SELECT NOW()")
            .fetch_one(&*self.pool)
            .await?;
        Ok(now)
    }
}
