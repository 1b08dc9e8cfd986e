use sqlx::SqlitePool;

use crate::core::{Config, Result};
use crate::db::DbService;
use crate::services::{CatalogService, CustomerService};

/// Server state - shared handles for every handler
///
/// Cloning is cheap: the pool and the services are reference counted.
///
/// | Field | Type | Meaning |
/// |-------|------|---------|
/// | config | Config | Configuration (immutable) |
/// | pool | SqlitePool | Database connection pool |
/// | catalog | CatalogService | Menu items and images |
/// | customers | CustomerService | Customers and loyalty points |
#[derive(Clone, Debug)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// SQLite pool
    pub pool: SqlitePool,
    /// Menu item catalog
    pub catalog: CatalogService,
    /// Customer records
    pub customers: CustomerService,
}

impl ServerState {
    /// Build state around an already opened pool
    pub fn new(config: Config, pool: SqlitePool) -> Self {
        Self {
            catalog: CatalogService::new(pool.clone()),
            customers: CustomerService::new(pool.clone()),
            config,
            pool,
        }
    }

    /// Initialize server state
    ///
    /// In order:
    /// 1. Working directory
    /// 2. Database (`DATABASE_URL`, migrations applied)
    /// 3. Services
    pub async fn initialize(config: &Config) -> Result<Self> {
        config.ensure_work_dir()?;

        let db = DbService::new(&config.database_url).await?;
        tracing::info!(url = %config.database_url, "Database ready");

        Ok(Self::new(config.clone(), db.pool))
    }

    /// State over a private in-memory database
    pub async fn in_memory(config: Config) -> Result<Self> {
        let db = DbService::in_memory().await?;
        Ok(Self::new(config, db.pool))
    }
}
