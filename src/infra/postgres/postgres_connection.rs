use anyhow::{Context, Result};
use diesel::{
    Connection, PgConnection,
    connection::CacheSize,
    r2d2::{ConnectionManager, CustomizeConnection, Error as R2d2Error, Pool},
};
use tracing::debug;

use crate::config::config_model::Database;

pub type PgPoolSquad = Pool<ConnectionManager<PgConnection>>;

/// Transaction-mode poolers reject named prepared statements, so every pooled
/// connection runs with the statement cache off.
#[derive(Debug)]
struct NoStatementCache;

impl CustomizeConnection<PgConnection, R2d2Error> for NoStatementCache {
    fn on_acquire(&self, conn: &mut PgConnection) -> std::result::Result<(), R2d2Error> {
        conn.set_prepared_statement_cache_size(CacheSize::Disabled);
        Ok(())
    }
}

/// Builds the pool. Blocks until the first connections are open or r2d2 gives up.
pub fn establish_connection(database: &Database) -> Result<PgPoolSquad> {
    debug!(
        max_connections = database.max_connections,
        "postgres_connection: building pool"
    );

    Pool::builder()
        .max_size(database.max_connections)
        .connection_customizer(Box::new(NoStatementCache))
        .build(ConnectionManager::<PgConnection>::new(&database.url))
        .context("failed to build the Postgres connection pool")
}
