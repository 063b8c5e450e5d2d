//! SQLite connection pool used by the Diesel repository.

use std::time::Duration;

use diesel::connection::SimpleConnection;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool, PoolError, PooledConnection};
use diesel::sqlite::SqliteConnection;
use log::error;

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;
pub type DbConnection = PooledConnection<ConnectionManager<SqliteConnection>>;

/// Pragmas applied every time a connection is handed out by the pool.
#[derive(Debug, Clone)]
pub struct ConnectionOptions {
    /// Write-ahead logging, so catalog reads never wait on an admin write.
    pub enable_wal: bool,
    pub enable_foreign_keys: bool,
    /// How long a statement waits on a locked database before failing.
    pub busy_timeout: Option<Duration>,
}

impl Default for ConnectionOptions {
    fn default() -> Self {
        Self {
            enable_wal: true,
            enable_foreign_keys: true,
            busy_timeout: Some(Duration::from_secs(30)),
        }
    }
}

impl ConnectionOptions {
    fn pragmas(&self) -> String {
        let mut pragmas = String::new();
        if self.enable_wal {
            pragmas.push_str("PRAGMA journal_mode = WAL; PRAGMA synchronous = NORMAL; ");
        }
        if self.enable_foreign_keys {
            pragmas.push_str("PRAGMA foreign_keys = ON; ");
        }
        if let Some(timeout) = self.busy_timeout {
            pragmas.push_str(&format!("PRAGMA busy_timeout = {};", timeout.as_millis()));
        }
        pragmas
    }
}

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for ConnectionOptions {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        let pragmas = self.pragmas();
        if pragmas.is_empty() {
            return Ok(());
        }
        conn.batch_execute(&pragmas)
            .map_err(diesel::r2d2::Error::QueryError)
    }
}

/// Builds the pool for `database_url` with the default connection options.
///
/// The catalog facade holds two connections per request (page and count
/// queries), so the pool must allow at least two.
pub fn establish_connection_pool(database_url: &str) -> Result<DbPool, PoolError> {
    establish_connection_pool_with(database_url, ConnectionOptions::default())
}

pub fn establish_connection_pool_with(
    database_url: &str,
    options: ConnectionOptions,
) -> Result<DbPool, PoolError> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    Pool::builder()
        .connection_customizer(Box::new(options))
        .build(manager)
}

/// Checks a connection out of the pool, logging failures.
pub fn get_connection(pool: &DbPool) -> Result<DbConnection, PoolError> {
    pool.get().inspect_err(|e| {
        error!("Failed to get connection from pool: {e}");
    })
}
