use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::SqlitePool;
use tera::Tera;

use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub config: Config,
    pub templates: Arc<Tera>,
}

impl FromRef<AppState> for SqlitePool {
    fn from_ref(state: &AppState) -> Self {
        state.pool.clone()
    }
}

impl FromRef<AppState> for Config {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}

impl FromRef<AppState> for Arc<Tera> {
    fn from_ref(state: &AppState) -> Self {
        state.templates.clone()
    }
}

impl AppState {
    /// Bundles a connected pool and config with the compiled page templates.
    pub fn new(pool: SqlitePool, config: Config) -> Result<Self, tera::Error> {
        let templates = crate::templates::load()?;
        Ok(Self {
            pool,
            config,
            templates: Arc::new(templates),
        })
    }
}
