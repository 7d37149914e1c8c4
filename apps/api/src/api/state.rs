use std::sync::Arc;

use sqlx::PgPool;

use crate::config::Config;
use crate::domain::repositories::{CategoryRepository, PickmeRepository, UserRepository};
use crate::infrastructure::repositories::{
    PostgresCategoryRepository, PostgresPickmeRepository, PostgresUserRepository,
};

/// Shared handler state
///
/// Handlers only see the repository traits, so any store can sit behind them.
#[derive(Clone)]
pub struct AppState {
    pub categories: Arc<dyn CategoryRepository>,
    pub pickmes: Arc<dyn PickmeRepository>,
    pub users: Arc<dyn UserRepository>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(
        categories: Arc<dyn CategoryRepository>,
        pickmes: Arc<dyn PickmeRepository>,
        users: Arc<dyn UserRepository>,
        config: Config,
    ) -> Self {
        Self {
            categories,
            pickmes,
            users,
            config: Arc::new(config),
        }
    }

    /// State backed by PostgreSQL repositories sharing one pool
    pub fn postgres(pool: PgPool, config: Config) -> Self {
        Self::new(
            Arc::new(PostgresCategoryRepository::new(pool.clone())),
            Arc::new(PostgresPickmeRepository::new(pool.clone())),
            Arc::new(PostgresUserRepository::new(pool)),
            config,
        )
    }
}
