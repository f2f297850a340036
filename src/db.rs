use rusqlite::{Connection, OptionalExtension};
use std::path::Path;
use std::sync::Mutex;

use crate::error::{AppError, AppResult};

/// Logical keys of the independently persisted collections.
pub const INGREDIENTS_KEY: &str = "ingredients";
pub const MENU_KEY: &str = "menu";
pub const RESERVATIONS_KEY: &str = "reservations";
pub const SALES_KEY: &str = "sales";
pub const HISTORY_KEY: &str = "analysis-history";

/// Flat key/value blob store. Each collection is one JSON document under its key,
/// with no envelope or version.
pub struct Database {
    pub conn: Mutex<Connection>,
}

impl Database {
    pub fn open(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir)?;
        }

        let conn = Connection::open(path)?;
        let db = Database {
            conn: Mutex::new(conn),
        };
        db.initialize()?;
        Ok(db)
    }

    pub fn open_in_memory() -> AppResult<Self> {
        let db = Database {
            conn: Mutex::new(Connection::open_in_memory()?),
        };
        db.initialize()?;
        Ok(db)
    }

    pub fn initialize(&self) -> AppResult<()> {
        let conn = self.conn.lock().map_err(|_| AppError::LockPoisoned)?;

        conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS blobs (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL,
                updated_at DATETIME DEFAULT CURRENT_TIMESTAMP
            );
            ",
        )?;

        Ok(())
    }

    /// Raw document stored under `key`, if any.
    pub fn read(&self, key: &str) -> AppResult<Option<String>> {
        let conn = self.conn.lock().map_err(|_| AppError::LockPoisoned)?;

        let value = conn
            .query_row("SELECT value FROM blobs WHERE key = ?1", [key], |row| {
                row.get::<_, String>(0)
            })
            .optional()?;

        Ok(value)
    }

    pub fn write(&self, key: &str, value: &str) -> AppResult<()> {
        let conn = self.conn.lock().map_err(|_| AppError::LockPoisoned)?;

        conn.execute(
            "INSERT INTO blobs (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = CURRENT_TIMESTAMP",
            rusqlite::params![key, value],
        )?;

        Ok(())
    }
}
