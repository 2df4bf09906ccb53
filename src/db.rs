use crate::error::{Result, StoreError};
use crate::storage::KeyValueStore;
use rusqlite::{Connection, OptionalExtension};
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

/// SQLite-backed key-value storage for store snapshots.
pub struct Database {
    pub conn: Mutex<Connection>,
}

impl Database {
    pub fn open(db_path: &Path) -> Result<Self> {
        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(db_path)?;
        tracing::debug!(path = %db_path.display(), "Opened database");

        Ok(Database {
            conn: Mutex::new(conn),
        })
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Database {
            conn: Mutex::new(conn),
        })
    }

    pub fn initialize(&self) -> Result<()> {
        let conn = self.lock()?;

        conn.execute_batch(
            "
            -- One serialized document per store key
            CREATE TABLE IF NOT EXISTS kv_store (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );
            ",
        )?;

        // Run migrations for existing databases (pass connection to avoid deadlock)
        Self::migrate_conn(&conn)?;

        Ok(())
    }

    fn migrate_conn(conn: &Connection) -> Result<()> {
        let columns: Vec<String> = conn
            .prepare("PRAGMA table_info(kv_store)")?
            .query_map([], |row| row.get::<_, String>(1))?
            .filter_map(|r| r.ok())
            .collect();

        if !columns.contains(&"updated_at".to_string()) {
            // SQLite rejects non-constant defaults in ALTER TABLE, so the column
            // starts NULL and every write stamps it explicitly.
            conn.execute("ALTER TABLE kv_store ADD COLUMN updated_at DATETIME", [])?;
        }

        Ok(())
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| StoreError::LockPoisoned(e.to_string()))
    }
}

impl KeyValueStore for Database {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let conn = self.lock()?;

        let value = conn
            .query_row("SELECT value FROM kv_store WHERE key = ?1", [key], |row| {
                row.get(0)
            })
            .optional()?;

        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let conn = self.lock()?;

        conn.execute(
            "INSERT INTO kv_store (key, value, updated_at) VALUES (?1, ?2, CURRENT_TIMESTAMP)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            rusqlite::params![key, value],
        )?;

        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let conn = self.lock()?;

        conn.execute("DELETE FROM kv_store WHERE key = ?1", [key])?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_test_db() -> Database {
        let db = Database::open_in_memory().expect("Failed to create in-memory database");
        db.initialize().expect("Failed to create schema");
        db
    }

    #[test]
    fn test_initialize_is_idempotent() {
        let db = setup_test_db();
        db.initialize().unwrap();

        let columns: Vec<String> = db
            .conn
            .lock()
            .unwrap()
            .prepare("PRAGMA table_info(kv_store)")
            .unwrap()
            .query_map([], |row| row.get::<_, String>(1))
            .unwrap()
            .filter_map(|r| r.ok())
            .collect();

        assert_eq!(columns, vec!["key", "value", "updated_at"]);
    }

    #[test]
    fn test_set_overwrites_existing_value() {
        let db = setup_test_db();

        db.set("employeeData", "{\"employees\":[]}").unwrap();
        db.set("employeeData", "{\"salaryPayments\":[]}").unwrap();

        assert_eq!(
            db.get("employeeData").unwrap().as_deref(),
            Some("{\"salaryPayments\":[]}")
        );

        let rows: i64 = db
            .conn
            .lock()
            .unwrap()
            .query_row("SELECT COUNT(*) FROM kv_store", [], |row| row.get(0))
            .unwrap();
        assert_eq!(rows, 1);
    }

    #[test]
    fn test_missing_key_reads_none() {
        let db = setup_test_db();
        assert_eq!(db.get("restaurantData").unwrap(), None);

        db.remove("restaurantData").unwrap();
        assert_eq!(db.get("restaurantData").unwrap(), None);
    }

    #[test]
    fn test_migrates_legacy_table_without_timestamp() {
        let db = Database::open_in_memory().unwrap();
        db.conn
            .lock()
            .unwrap()
            .execute_batch("CREATE TABLE kv_store (key TEXT PRIMARY KEY, value TEXT NOT NULL);")
            .unwrap();

        db.initialize().unwrap();
        db.set("restaurantData", "{}").unwrap();

        let stamped: Option<String> = db
            .conn
            .lock()
            .unwrap()
            .query_row(
                "SELECT updated_at FROM kv_store WHERE key = 'restaurantData'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert!(stamped.is_some());
    }
}
