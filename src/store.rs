//! The entity store: sole owner of the dashboard collections.
//!
//! Every mutation goes through [`Store`] and is written through to the
//! [`Database`] immediately. Each successful mutation bumps the revision so
//! derived statistics can be cached against it.

use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, warn};

use crate::db::{self, Database};
use crate::error::AppResult;
use crate::models::{AnalysisHistoryItem, Ingredient, MenuItem, Reservation, Sale};
use crate::seed::Dataset;

pub struct Store {
    db: Database,
    pub(crate) ingredients: Vec<Ingredient>,
    pub(crate) menu: Vec<MenuItem>,
    pub(crate) reservations: Vec<Reservation>,
    pub(crate) sales: Vec<Sale>,
    pub(crate) history: Vec<AnalysisHistoryItem>,
    pub(crate) history_limit: Option<usize>,
    revision: u64,
}

impl Store {
    /// Load every collection, substituting the matching part of `defaults`
    /// for a collection whose blob is missing or unreadable.
    pub fn load(db: Database, defaults: Dataset) -> Self {
        let ingredients = load_collection(&db, db::INGREDIENTS_KEY, defaults.ingredients);
        let menu = load_collection(&db, db::MENU_KEY, defaults.menu);
        let reservations = load_collection(&db, db::RESERVATIONS_KEY, defaults.reservations);
        let sales = load_collection(&db, db::SALES_KEY, defaults.sales);
        let history = load_collection(&db, db::HISTORY_KEY, Vec::new());

        Store {
            db,
            ingredients,
            menu,
            reservations,
            sales,
            history,
            history_limit: None,
            revision: 0,
        }
    }

    pub fn with_history_limit(mut self, limit: Option<usize>) -> Self {
        self.history_limit = limit;
        self
    }

    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    pub fn menu(&self) -> &[MenuItem] {
        &self.menu
    }

    pub fn reservations(&self) -> &[Reservation] {
        &self.reservations
    }

    pub fn sales(&self) -> &[Sale] {
        &self.sales
    }

    pub fn history(&self) -> &[AnalysisHistoryItem] {
        &self.history
    }

    /// Monotonic counter of applied mutations.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub(crate) fn save_ingredients(&mut self) -> AppResult<()> {
        self.touch();
        save_collection(&self.db, db::INGREDIENTS_KEY, &self.ingredients)
    }

    pub(crate) fn save_menu(&mut self) -> AppResult<()> {
        self.touch();
        save_collection(&self.db, db::MENU_KEY, &self.menu)
    }

    pub(crate) fn save_reservations(&mut self) -> AppResult<()> {
        self.touch();
        save_collection(&self.db, db::RESERVATIONS_KEY, &self.reservations)
    }

    pub(crate) fn save_sales(&mut self) -> AppResult<()> {
        self.touch();
        save_collection(&self.db, db::SALES_KEY, &self.sales)
    }

    pub(crate) fn save_history(&mut self) -> AppResult<()> {
        self.touch();
        save_collection(&self.db, db::HISTORY_KEY, &self.history)
    }

    // Bumped before the write: memory is already changed even if persisting fails.
    fn touch(&mut self) {
        self.revision += 1;
    }
}

fn load_collection<T: DeserializeOwned>(db: &Database, key: &str, default: Vec<T>) -> Vec<T> {
    match db.read(key) {
        Ok(Some(raw)) => match serde_json::from_str(&raw) {
            Ok(items) => items,
            Err(e) => {
                warn!(collection = key, error = %e, "Stored collection is unreadable, using defaults");
                default
            }
        },
        Ok(None) => {
            debug!(collection = key, "No stored collection, using defaults");
            default
        }
        Err(e) => {
            warn!(collection = key, error = %e, "Failed to read collection, using defaults");
            default
        }
    }
}

fn save_collection<T: Serialize>(db: &Database, key: &str, items: &[T]) -> AppResult<()> {
    let raw = serde_json::to_string(items)?;
    db.write(key, &raw)?;
    debug!(collection = key, count = items.len(), "Saved collection");
    Ok(())
}
