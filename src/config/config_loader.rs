use anyhow::{Context, Result};

use super::{
    config_model::{Database, DotEnvyConfig},
    stage::Stage,
};

const DEFAULT_MAX_CONNECTIONS: u32 = 10;

pub fn load() -> Result<DotEnvyConfig> {
    dotenvy::dotenv().ok();

    from_lookup(|key| std::env::var(key).ok())
}

/// Builds the config from any key lookup, so parsing can be exercised without the
/// process environment.
pub fn from_lookup<F>(lookup: F) -> Result<DotEnvyConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let database = Database {
        url: lookup("DATABASE_URL").context("DATABASE_URL is invalid")?,
        max_connections: match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("DATABASE_MAX_CONNECTIONS is invalid: {raw}"))?,
            None => DEFAULT_MAX_CONNECTIONS,
        },
    };

    let stage = lookup("STAGE")
        .and_then(|raw| Stage::try_from(&raw).ok())
        .unwrap_or_default();

    Ok(DotEnvyConfig { database, stage })
}
