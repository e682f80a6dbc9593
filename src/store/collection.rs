//! Expense collection - SQLite-backed document store
//!
//! Records are stored as JSON documents in a single table. SQLite's
//! B-tree index on `created_at` keeps the newest-first listing cheap;
//! the JSON body keeps the document shape schema-flexible.
//!
//! The connection is wrapped in a `Mutex` because rusqlite connections
//! are not `Sync`; handlers clone an `Arc` of the collection and take
//! the lock per operation.

use crate::store::error::{StoreError, StoreResult};
use crate::store::record::{ExpenseRecord, NewExpense};
use rusqlite::{params, Connection, OpenFlags};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Configuration for the document store
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Path to the SQLite database file (the "connection string")
    pub path: PathBuf,
}

impl StoreConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("outlay_data/outlay.db"),
        }
    }
}

/// SQLite-backed collection of expense documents
pub struct ExpenseCollection {
    conn: Mutex<Connection>,
    path: PathBuf,
}

impl ExpenseCollection {
    /// Create or open the collection at the configured path
    pub fn open(config: StoreConfig) -> StoreResult<Self> {
        if let Some(parent) = config.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open_with_flags(
            &config.path,
            OpenFlags::SQLITE_OPEN_READ_WRITE
                | OpenFlags::SQLITE_OPEN_CREATE
                | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;

        // Configure for performance
        conn.execute_batch(
            "
            PRAGMA journal_mode = WAL;
            PRAGMA synchronous = NORMAL;
            PRAGMA cache_size = 10000;
            PRAGMA temp_store = MEMORY;
            ",
        )?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS expenses (
                id TEXT PRIMARY KEY,
                created_at INTEGER NOT NULL,
                document TEXT NOT NULL
            )",
            [],
        )?;

        // Index on created_at for the newest-first listing
        conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_created_at ON expenses(created_at)",
            [],
        )?;

        Ok(Self {
            conn: Mutex::new(conn),
            path: config.path,
        })
    }

    /// Insert a new expense, assigning id and creation time
    pub fn insert(&self, new: NewExpense) -> StoreResult<ExpenseRecord> {
        let record = ExpenseRecord::from_new(new);
        let document = serde_json::to_string(&record)?;

        let conn = self.lock()?;
        let mut stmt = conn.prepare_cached(
            "INSERT INTO expenses (id, created_at, document) VALUES (?, ?, ?)",
        )?;
        stmt.execute(params![record.id, record.created_at, document])?;

        Ok(record)
    }

    /// All records, ordered by descending creation time.
    ///
    /// Ties on `created_at` (same-millisecond inserts) are broken by
    /// insertion order so the listing is stable newest-first.
    pub fn all(&self) -> StoreResult<Vec<ExpenseRecord>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare_cached(
            "SELECT document FROM expenses ORDER BY created_at DESC, rowid DESC",
        )?;

        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

        let mut records = Vec::new();
        for row in rows {
            let document = row?;
            let record: ExpenseRecord = serde_json::from_str(&document)
                .map_err(|e| StoreError::Corruption(e.to_string()))?;
            records.push(record);
        }

        Ok(records)
    }

    /// Delete a record by id.
    ///
    /// Returns whether a row was actually removed; deleting an unknown
    /// id is not an error.
    pub fn delete(&self, id: &str) -> StoreResult<bool> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare_cached("DELETE FROM expenses WHERE id = ?")?;
        let removed = stmt.execute(params![id])?;

        Ok(removed > 0)
    }

    /// Number of stored records
    pub fn count(&self) -> StoreResult<u64> {
        let conn = self.lock()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM expenses", [], |row| row.get(0))?;
        Ok(count as u64)
    }

    /// Path to the underlying database file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock(&self) -> StoreResult<std::sync::MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| StoreError::Lock(format!("Failed to acquire store lock: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::tempdir;

    fn new_expense(title: &str, amount: f64, category: &str) -> NewExpense {
        NewExpense::new(
            title,
            amount,
            category,
            "note",
            NaiveDate::from_ymd_opt(2026, 8, 20).unwrap(),
        )
    }

    fn create_test_collection() -> (ExpenseCollection, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        let config = StoreConfig::new(dir.path().join("test.db"));
        let collection = ExpenseCollection::open(config).unwrap();
        (collection, dir)
    }

    #[test]
    fn test_open_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let config = StoreConfig::new(dir.path().join("nested").join("deep").join("test.db"));
        let collection = ExpenseCollection::open(config).unwrap();
        assert_eq!(collection.count().unwrap(), 0);
    }

    #[test]
    fn test_insert_and_list() {
        let (collection, _dir) = create_test_collection();

        let record = collection.insert(new_expense("Lunch", 12.0, "Food")).unwrap();
        assert!(!record.id.is_empty());

        let records = collection.all().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0], record);
    }

    #[test]
    fn test_list_is_newest_first() {
        let (collection, _dir) = create_test_collection();

        for i in 0..5 {
            collection
                .insert(new_expense(&format!("expense-{}", i), 10.0, "Food"))
                .unwrap();
        }

        let records = collection.all().unwrap();
        assert_eq!(records.len(), 5);

        // Newest first, even when several inserts land in the same millisecond
        assert_eq!(records[0].title, "expense-4");
        assert_eq!(records[4].title, "expense-0");
        for pair in records.windows(2) {
            assert!(pair[0].created_at >= pair[1].created_at);
        }
    }

    #[test]
    fn test_delete_existing() {
        let (collection, _dir) = create_test_collection();

        let record = collection.insert(new_expense("Lunch", 12.0, "Food")).unwrap();
        let kept = collection.insert(new_expense("Bus", 3.0, "Transport")).unwrap();

        assert!(collection.delete(&record.id).unwrap());

        let records = collection.all().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, kept.id);
    }

    #[test]
    fn test_delete_unknown_id_is_not_an_error() {
        let (collection, _dir) = create_test_collection();

        let removed = collection.delete("no-such-id").unwrap();
        assert!(!removed);
    }

    #[test]
    fn test_count() {
        let (collection, _dir) = create_test_collection();
        assert_eq!(collection.count().unwrap(), 0);

        collection.insert(new_expense("Lunch", 12.0, "Food")).unwrap();
        collection.insert(new_expense("Bus", 3.0, "Transport")).unwrap();
        assert_eq!(collection.count().unwrap(), 2);
    }

    #[test]
    fn test_persistence_across_reopen() {
        let dir = tempdir().unwrap();
        let config = StoreConfig::new(dir.path().join("test.db"));

        let id;
        {
            let collection = ExpenseCollection::open(config.clone()).unwrap();
            id = collection
                .insert(new_expense("Lunch", 12.0, "Food"))
                .unwrap()
                .id;
        }

        {
            let collection = ExpenseCollection::open(config).unwrap();
            let records = collection.all().unwrap();
            assert_eq!(records.len(), 1);
            assert_eq!(records[0].id, id);
        }
    }
}
