//! Repository layer for database operations
//!
//! Lookups return `Option`/`Vec`: absence is not an error here, only store
//! failures are. Every query takes an explicit connection so services can run
//! a read-validate-write sequence inside one transaction.

pub mod authors;
pub mod books;
pub mod borrows;
pub mod users;

use std::ops::{Deref, DerefMut};
use std::str::FromStr;
use std::sync::Arc;

use sqlx::{
    pool::PoolConnection,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    Pool, Sqlite, SqliteConnection, Transaction,
};
use tokio::sync::{Mutex, OwnedMutexGuard};

use crate::{config::DatabaseConfig, error::AppResult};

/// Open a connection pool for the configured SQLite database
pub async fn connect(config: &DatabaseConfig) -> AppResult<Pool<Sqlite>> {
    // Orphaned references are legal: deleting a user or book leaves its borrows in place
    let options = SqliteConnectOptions::from_str(&config.url)?
        .create_if_missing(true)
        .foreign_keys(false);

    let mut pool_options = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections);

    // An in-memory database lives and dies with its single connection
    if config.is_in_memory() {
        pool_options = pool_options
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None);
    }

    Ok(pool_options.connect_with(options).await?)
}

/// Main repository struct holding the database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Sqlite>,
    write_lock: Arc<Mutex<()>>,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self {
            pool,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Apply embedded schema migrations
    pub async fn migrate(&self) -> AppResult<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }

    /// Check database connectivity
    pub async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Borrow a pooled connection for single-statement reads
    pub async fn acquire(&self) -> AppResult<PoolConnection<Sqlite>> {
        Ok(self.pool.acquire().await?)
    }

    /// Start a read-only transaction for reads that must agree with each other
    pub async fn begin_read(&self) -> AppResult<Transaction<'static, Sqlite>> {
        Ok(self.pool.begin().await?)
    }

    /// Start a mutating transaction.
    ///
    /// Writers are serialized: the returned transaction holds the repository's
    /// write lock until it is committed or dropped, so checks made inside it
    /// (email uniqueness, reference existence) still hold at commit time.
    pub async fn begin_write(&self) -> AppResult<WriteTransaction> {
        let guard = self.write_lock.clone().lock_owned().await;
        let tx = self.pool.begin().await?;
        Ok(WriteTransaction { tx, _guard: guard })
    }
}

/// A transaction holding the repository write lock. Rolled back on drop.
pub struct WriteTransaction {
    // Dropped before the guard, so the rollback is queued while still locked
    tx: Transaction<'static, Sqlite>,
    _guard: OwnedMutexGuard<()>,
}

impl WriteTransaction {
    pub async fn commit(self) -> AppResult<()> {
        self.tx.commit().await?;
        Ok(())
    }
}

impl Deref for WriteTransaction {
    type Target = SqliteConnection;

    fn deref(&self) -> &SqliteConnection {
        &self.tx
    }
}

impl DerefMut for WriteTransaction {
    fn deref_mut(&mut self) -> &mut SqliteConnection {
        &mut self.tx
    }
}

#[cfg(test)]
pub(crate) async fn test_repository() -> Repository {
    let pool = connect(&DatabaseConfig::in_memory())
        .await
        .expect("Failed to open in-memory database");
    let repository = Repository::new(pool);
    repository.migrate().await.expect("Failed to run migrations");
    repository
}
