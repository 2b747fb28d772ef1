//! SQLite store for per-textbook custom prompts
//!
//! Reads the newest `prompt_text` for a textbook from `textbook_prompts`.
//! Writes exist for administration and tests; the answer pipeline only reads.

use chrono::{DateTime, SecondsFormat, Utc};
use parking_lot::Mutex;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use std::sync::Arc;
use uuid::Uuid;

use crate::error::{Error, Result};

/// Read access to custom prompts, keyed by textbook
pub trait PromptStore: Send + Sync {
    /// Most recently created prompt text for the textbook, if any
    fn latest_prompt(&self, textbook_id: &str) -> Result<Option<String>>;
}

/// SQLite-backed prompt store
pub struct SqlitePromptStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqlitePromptStore {
    /// Create or open the database at the given path
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let conn = Connection::open(path).map_err(|e| {
            Error::prompt_lookup(format!("Failed to open {}: {}", path.display(), e))
        })?;

        let store = Self {
            conn: Arc::new(Mutex::new(conn)),
        };

        store.migrate()?;
        tracing::info!("Prompt store opened at {}", path.display());
        Ok(store)
    }

    /// Create an in-memory store
    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;

        let store = Self {
            conn: Arc::new(Mutex::new(conn)),
        };

        store.migrate()?;
        Ok(store)
    }

    fn migrate(&self) -> Result<()> {
        let conn = self.conn.lock();

        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS textbook_prompts (
                id TEXT PRIMARY KEY,
                textbook_id TEXT NOT NULL,
                prompt_text TEXT NOT NULL,
                created_at TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_textbook_prompts_textbook_created
                ON textbook_prompts(textbook_id, created_at);
        "#,
        )?;

        Ok(())
    }

    /// Store a prompt created now
    pub fn insert_prompt(&self, textbook_id: &str, prompt_text: &str) -> Result<Uuid> {
        self.insert_prompt_at(textbook_id, prompt_text, Utc::now())
    }

    /// Store a prompt with an explicit creation time
    pub fn insert_prompt_at(
        &self,
        textbook_id: &str,
        prompt_text: &str,
        created_at: DateTime<Utc>,
    ) -> Result<Uuid> {
        let id = Uuid::new_v4();
        let conn = self.conn.lock();

        conn.execute(
            "INSERT INTO textbook_prompts (id, textbook_id, prompt_text, created_at)
             VALUES (?1, ?2, ?3, ?4)",
            params![
                id.to_string(),
                textbook_id,
                prompt_text,
                // Fixed width so text order matches time order
                created_at.to_rfc3339_opts(SecondsFormat::Micros, true),
            ],
        )?;

        Ok(id)
    }

    /// Number of prompts stored for a textbook
    pub fn count_prompts(&self, textbook_id: &str) -> Result<usize> {
        let conn = self.conn.lock();
        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM textbook_prompts WHERE textbook_id = ?1",
            params![textbook_id],
            |row| row.get(0),
        )?;
        Ok(count as usize)
    }
}

impl PromptStore for SqlitePromptStore {
    fn latest_prompt(&self, textbook_id: &str) -> Result<Option<String>> {
        let conn = self.conn.lock();

        let prompt = conn
            .query_row(
                "SELECT prompt_text FROM textbook_prompts
                 WHERE textbook_id = ?1
                 ORDER BY created_at DESC LIMIT 1",
                params![textbook_id],
                |row| row.get::<_, String>(0),
            )
            .optional()?;

        Ok(prompt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_latest_prompt_wins() {
        let store = SqlitePromptStore::in_memory().unwrap();
        let older = Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap();
        let newer = Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap();

        store.insert_prompt_at("bio-101", "newer prompt", newer).unwrap();
        store.insert_prompt_at("bio-101", "older prompt", older).unwrap();
        store.insert_prompt_at("chem-201", "other textbook", newer).unwrap();

        assert_eq!(
            store.latest_prompt("bio-101").unwrap().as_deref(),
            Some("newer prompt")
        );
        assert_eq!(store.count_prompts("bio-101").unwrap(), 2);
    }

    #[test]
    fn test_unknown_textbook_has_no_prompt() {
        let store = SqlitePromptStore::in_memory().unwrap();
        store.insert_prompt("bio-101", "custom").unwrap();

        assert_eq!(store.latest_prompt("geo-110").unwrap(), None);
    }

    #[test]
    fn test_reopen_file_keeps_prompts() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prompts.db");

        {
            let store = SqlitePromptStore::open(&path).unwrap();
            store.insert_prompt("bio-101", "persisted").unwrap();
        }

        let store = SqlitePromptStore::open(&path).unwrap();
        assert_eq!(store.latest_prompt("bio-101").unwrap().as_deref(), Some("persisted"));
    }

    #[test]
    fn test_lookup_against_broken_schema_errors() {
        let store = SqlitePromptStore::in_memory().unwrap();
        store
            .conn
            .lock()
            .execute_batch("DROP TABLE textbook_prompts;")
            .unwrap();

        assert!(matches!(store.latest_prompt("bio-101"), Err(Error::Database(_))));
    }
}
