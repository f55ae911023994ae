use std::sync::Arc;

use fitness_auth::TokenCodec;
use fitness_config::{CorsConfig, DatabaseConfig, JwtConfig};
use fitness_db::{PgPool, init_db_pool, run_migrations};

#[derive(Clone, Debug)]
pub struct AppState {
    pub db: PgPool,
    pub token_codec: Arc<TokenCodec>,
    pub cors_config: CorsConfig,
}

impl AppState {
    pub fn new(db: PgPool, jwt_config: &JwtConfig, cors_config: CorsConfig) -> Self {
        Self {
            db,
            token_codec: Arc::new(TokenCodec::new(jwt_config)),
            cors_config,
        }
    }
}

/// Connects to the database, applies pending migrations and builds the state
/// from the environment.
pub async fn init_app_state() -> anyhow::Result<AppState> {
    let db = init_db_pool(&DatabaseConfig::from_env()?).await?;

    run_migrations(&db).await?;

    Ok(AppState::new(db, &JwtConfig::from_env(), CorsConfig::from_env()))
}
