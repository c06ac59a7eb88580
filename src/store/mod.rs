// src/store/mod.rs

//! Relational store access.
//!
//! Handlers only see the [`TriviaStore`] trait; the backend is picked from the
//! scheme of `DATABASE_URL` when the application state is built.

mod postgres;
mod sqlite;

use std::{sync::Arc, time::Duration};

use async_trait::async_trait;

pub use postgres::PgStore;
pub use sqlite::SqliteStore;

use crate::{
    config::Config,
    models::{
        category::Category,
        question::{NewQuestion, Question},
    },
};

const CONNECT_RETRIES: u32 = 5;
const CONNECT_RETRY_DELAY: Duration = Duration::from_secs(2);

/// Shared handle held by the application state.
pub type DynStore = Arc<dyn TriviaStore>;

#[async_trait]
pub trait TriviaStore: Send + Sync {
    /// All categories, ordered by id.
    async fn categories(&self) -> Result<Vec<Category>, sqlx::Error>;

    /// All questions, ordered by id.
    async fn questions(&self) -> Result<Vec<Question>, sqlx::Error>;

    async fn question(&self, id: i64) -> Result<Option<Question>, sqlx::Error>;

    async fn questions_in_category(&self, category_id: i64) -> Result<Vec<Question>, sqlx::Error>;

    /// Inserts the question and returns the stored row, including its new id.
    async fn insert_question(&self, new: NewQuestion) -> Result<Question, sqlx::Error>;

    /// Returns `false` when no row had that id.
    async fn delete_question(&self, id: i64) -> Result<bool, sqlx::Error>;

    /// One question picked at random among those whose id is not in `exclude`,
    /// restricted to `category` when given.
    async fn random_question(
        &self,
        exclude: &[i64],
        category: Option<i64>,
    ) -> Result<Option<Question>, sqlx::Error>;

    async fn close(&self);
}

/// Opens the store named by `config.database_url` and applies its migrations.
///
/// Connection attempts are retried a few times so the service can start
/// before the database container is ready.
pub async fn connect(config: &Config) -> Result<DynStore, sqlx::Error> {
    let mut retry_count = 0;
    loop {
        match open(config).await {
            Ok(store) => return Ok(store),
            Err(e @ (sqlx::Error::Io(_) | sqlx::Error::PoolTimedOut)) if retry_count < CONNECT_RETRIES => {
                retry_count += 1;
                tracing::warn!(
                    "Database not ready ({}), retrying in {}s... (Attempt {})",
                    e,
                    CONNECT_RETRY_DELAY.as_secs(),
                    retry_count
                );
                tokio::time::sleep(CONNECT_RETRY_DELAY).await;
            }
            Err(e) => return Err(e),
        }
    }
}

async fn open(config: &Config) -> Result<DynStore, sqlx::Error> {
    let url = config.database_url.as_str();

    if url.starts_with("postgres://") || url.starts_with("postgresql://") {
        let store = PgStore::connect(url, config.max_connections).await?;
        Ok(Arc::new(store))
    } else if url.starts_with("sqlite:") {
        let store = SqliteStore::connect(url, config.max_connections).await?;
        Ok(Arc::new(store))
    } else {
        Err(sqlx::Error::Configuration(
            format!("unsupported database url scheme: {url}").into(),
        ))
    }
}
