use std::sync::Arc;
use std::time::Duration;

use crate::{
    auth::JwtService,
    config::Config,
    db::Database,
    errors::AppResult,
    repositories::{MongoUserRepository, UserRepository},
    services::{MatchEngine, PersonaMatcher, UserService},
};

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService>,
    pub match_engine: Arc<dyn MatchEngine>,
    pub jwt_service: JwtService,
    pub config: Arc<Config>,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let db = Database::connect(&config).await?;

        let user_repository = Arc::new(MongoUserRepository::new(&db, &config.users_collection));
        user_repository.ensure_indexes().await?;

        Ok(Self::from_parts(config, user_repository))
    }

    /// Wires the state from an already-built user store. `new` goes
    /// through here; the test suite injects its in-memory store.
    pub fn from_parts(config: Config, user_repository: Arc<dyn UserRepository>) -> Self {
        let store_timeout = Duration::from_secs(config.user_store_timeout_secs);
        let user_service = Arc::new(UserService::new(user_repository, store_timeout));
        let match_engine: Arc<dyn MatchEngine> = Arc::new(PersonaMatcher::new());
        let jwt_service = JwtService::new(&config.jwt_secret, config.jwt_expiration_hours);

        Self {
            user_service,
            match_engine,
            jwt_service,
            config: Arc::new(config),
        }
    }
}
