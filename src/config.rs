use crate::{
    error::{SeedResult, SeedStep, StepContext},
    seed::{self, SeedReport},
    store::PgStore,
};
use envconfig::Envconfig;

#[derive(Envconfig)]
pub struct Config {
    #[envconfig(from = "DATABASE_URL")]
    pub db_url: String,
    #[envconfig(from = "DB_POOL_SIZE", default = "1")]
    pub pool_size: usize,
}

/// Reads the configuration from the process environment and seeds the
/// database it names.
pub async fn seed_from_env() -> SeedResult<SeedReport> {
    let config = Config::init_from_env().step(SeedStep::Configure)?;
    seed_with_config(&config).await
}

pub async fn seed_with_config(config: &Config) -> SeedResult<SeedReport> {
    let mut store =
        PgStore::connect(&config.db_url, config.pool_size).step(SeedStep::Configure)?;

    seed::run(&mut store).await
}
