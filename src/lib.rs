pub mod ai;
pub mod analytics;
pub mod commands;
pub mod config;
pub mod db;
pub mod error;
pub mod logger;
pub mod models;
pub mod seed;
pub mod store;


use commands::reports::{DashboardView, StatsCache};
use config::Config;
use db::Database;
use error::AppResult;
use models::DateRange;
use seed::Dataset;
use store::Store;

/// Application root: owns the store and the derived-statistics cache.
pub struct App {
    pub config: Config,
    pub store: Store,
    cache: StatsCache,
}

impl App {
    /// Open the configured database, seeding with the sample dataset whatever
    /// has not been persisted yet.
    pub fn open(config: Config) -> AppResult<Self> {
        let db = Database::open(&config.storage.path)?;
        tracing::info!(path = %config.storage.path.display(), "Opened store");
        Ok(Self::with_database(config, db, Dataset::sample()))
    }

    pub fn with_database(config: Config, db: Database, defaults: Dataset) -> Self {
        let store = Store::load(db, defaults).with_history_limit(config.history.limit);
        Self {
            config,
            store,
            cache: StatsCache::new(),
        }
    }

    /// Dashboard for `range` with the configured chart size; recomputed only
    /// after the store changes.
    pub fn dashboard(&mut self, range: &DateRange) -> &DashboardView {
        self.cache
            .get_or_derive(&self.store, range, self.config.dashboard.top_n)
    }
}
