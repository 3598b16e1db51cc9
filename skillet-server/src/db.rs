use diesel::prelude::*;
use diesel::r2d2::{self, ConnectionManager};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use std::time::Duration;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("../migrations");

pub type DbPool = r2d2::Pool<ConnectionManager<PgConnection>>;
pub type DbConn = r2d2::PooledConnection<ConnectionManager<PgConnection>>;

/// Build the connection pool without probing the database.
///
/// An unreachable server is surfaced per-operation as store errors, not as a
/// startup crash, and operations recover once the database comes back.
/// Pending migrations run at startup when the database is reachable.
pub fn create_pool(database_url: &str) -> DbPool {
    let manager = ConnectionManager::<PgConnection>::new(database_url);
    let pool = r2d2::Pool::builder()
        .connection_timeout(Duration::from_secs(5))
        .build_unchecked(manager);

    match pool.get() {
        Ok(mut conn) => {
            if let Err(e) = conn.run_pending_migrations(MIGRATIONS) {
                tracing::warn!("Failed to run database migrations: {}", e);
            }
        }
        Err(e) => {
            tracing::warn!(
                "Database unreachable at startup ({}); operations will fail until it recovers",
                e
            );
        }
    }

    pool
}
