//! SQLite-backed long-term preference store.
//!
//! One row per (user_id, key) with last-write-wins upsert semantics.
//! Schema creation and default seeding happen once at `open`, so the
//! per-request path is a pure read.

use chrono::Utc;
use hrdesk_core::error::{Error, Result};
use rusqlite::Connection;
use std::collections::BTreeMap;
use std::path::Path;

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS user_memory (
  user_id TEXT NOT NULL,
  key TEXT NOT NULL,
  value TEXT NOT NULL,
  last_updated TEXT NOT NULL,
  PRIMARY KEY (user_id, key)
)";

/// Demo preferences seeded at startup so a fresh database has something to
/// read. Seeding uses the same upsert as `set`.
const DEFAULT_MEMORIES: [(&str, &str, &str); 4] = [
    ("U001", "preferred_tone", "simple_friendly"),
    ("U001", "preferred_language", "english"),
    ("U002", "preferred_tone", "formal"),
    ("U002", "preferred_language", "english"),
];

pub struct MemoryStore {
    conn: Connection,
}

impl MemoryStore {
    /// Open the store at `path`, creating parent directories, the schema
    /// and the default rows as needed.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let conn = Connection::open(path).map_err(storage_err)?;
        let store = Self { conn };
        store.init()?;
        tracing::debug!("memory store ready at {}", path.display());
        Ok(store)
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(storage_err)?;
        let store = Self { conn };
        store.init()?;
        Ok(store)
    }

    fn init(&self) -> Result<()> {
        self.conn.execute(SCHEMA, []).map_err(storage_err)?;
        for (user_id, key, value) in DEFAULT_MEMORIES {
            self.set(user_id, key, value)?;
        }
        Ok(())
    }

    /// Upsert one preference; the previous value for (user_id, key) is
    /// replaced, other keys are untouched.
    pub fn set(&self, user_id: &str, key: &str, value: &str) -> Result<()> {
        self.conn
            .execute(
                "INSERT OR REPLACE INTO user_memory (user_id, key, value, last_updated)
                 VALUES (?1, ?2, ?3, ?4)",
                rusqlite::params![user_id, key, value, Utc::now().to_rfc3339()],
            )
            .map_err(storage_err)?;
        Ok(())
    }

    /// All stored preferences for one user. Unknown users get an empty map,
    /// not an error.
    pub fn get(&self, user_id: &str) -> Result<BTreeMap<String, String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT key, value FROM user_memory WHERE user_id = ?1")
            .map_err(storage_err)?;
        let rows = stmt
            .query_map([user_id], |row| {
                Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
            })
            .map_err(storage_err)?;
        let mut memory = BTreeMap::new();
        for row in rows {
            let (key, value) = row.map_err(storage_err)?;
            memory.insert(key, value);
        }
        Ok(memory)
    }
}

fn storage_err(e: rusqlite::Error) -> Error {
    Error::Operation(format!("memory store: {}", e))
}
