// src/state.rs

use axum::extract::FromRef;

use crate::{
    config::Config,
    store::{self, DynStore},
};

/// Everything a request handler can reach. Built explicitly; there is no global state,
/// so several instances can run side by side (as the integration tests do).
#[derive(Clone)]
pub struct AppState {
    pub store: DynStore,
    pub config: Config,
}

impl AppState {
    /// Connects the store named by `config.database_url` and applies migrations.
    pub async fn init(config: Config) -> Result<Self, sqlx::Error> {
        let store = store::connect(&config).await?;
        Ok(Self::with_store(store, config))
    }

    /// Wraps an already-open store.
    pub fn with_store(store: DynStore, config: Config) -> Self {
        Self { store, config }
    }

    /// Closes the store's connection pool. Clones of this state stop working afterwards.
    pub async fn teardown(self) {
        self.store.close().await;
        tracing::info!("Store closed.");
    }
}

impl FromRef<AppState> for DynStore {
    fn from_ref(state: &AppState) -> Self {
        state.store.clone()
    }
}

impl FromRef<AppState> for Config {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}
