//! Relational record store used as a test oracle.
//!
//! # Design
//! Five fixed relations mirror the fixture schema; rows are append-only and
//! the store itself performs no validation, so a bad table or column name
//! surfaces the underlying `rusqlite` error unmodified. The connection sits
//! behind a `Mutex` so the store stays safe if a future caller goes
//! concurrent, even though the suite drives it from one thread.
//!
//! `global()` keeps the one-instance-per-run semantics: the first access
//! anywhere in the process creates the in-memory store and its schema exactly
//! once, later accesses return the same instance. Tests that want isolation
//! construct their own instance with `open_in_memory`.

use std::path::Path;
use std::sync::{Mutex, OnceLock};

use rusqlite::Connection;

pub use rusqlite::types::Value as SqlValue;

const SCHEMA: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS users (id INTEGER PRIMARY KEY, name TEXT, username TEXT, email TEXT)",
    "CREATE TABLE IF NOT EXISTS posts (id INTEGER PRIMARY KEY, userId INTEGER, title TEXT, body TEXT)",
    "CREATE TABLE IF NOT EXISTS comments (id INTEGER PRIMARY KEY, postId INTEGER, name TEXT, email TEXT, body TEXT)",
    "CREATE TABLE IF NOT EXISTS albums (id INTEGER PRIMARY KEY, userId INTEGER, title TEXT)",
    "CREATE TABLE IF NOT EXISTS todos (id INTEGER PRIMARY KEY, userId INTEGER, title TEXT, completed BOOLEAN)",
];

/// Append-only relational mirror of fetched API records.
pub struct RecordStore {
    conn: Mutex<Connection>,
}

impl RecordStore {
    /// In-memory store; nothing survives the process.
    pub fn open_in_memory() -> Result<Self, rusqlite::Error> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    /// File-backed store with the identical schema.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, rusqlite::Error> {
        Self::from_connection(Connection::open(path)?)
    }

    fn from_connection(conn: Connection) -> Result<Self, rusqlite::Error> {
        for statement in SCHEMA {
            conn.execute(statement, [])?;
        }
        Ok(Self { conn: Mutex::new(conn) })
    }

    /// The process-wide in-memory instance, created on first access.
    pub fn global() -> &'static RecordStore {
        static STORE: OnceLock<RecordStore> = OnceLock::new();
        STORE.get_or_init(|| {
            RecordStore::open_in_memory().expect("in-memory record store must open")
        })
    }

    /// Append one row; columns are taken in the order the slice gives them.
    pub fn insert(&self, table: &str, row: &[(&str, SqlValue)]) -> Result<(), rusqlite::Error> {
        let columns: Vec<&str> = row.iter().map(|(column, _)| *column).collect();
        let placeholders = vec!["?"; row.len()].join(",");
        let sql = format!(
            "INSERT INTO {table} ({}) VALUES ({placeholders})",
            columns.join(",")
        );
        let conn = self.conn.lock().expect("record store lock poisoned");
        conn.execute(&sql, rusqlite::params_from_iter(row.iter().map(|(_, value)| value)))?;
        Ok(())
    }

    /// All rows of `table` as fixed-width tuples.
    pub fn fetch_all(&self, table: &str) -> Result<Vec<Vec<SqlValue>>, rusqlite::Error> {
        let conn = self.conn.lock().expect("record store lock poisoned");
        let mut stmt = conn.prepare(&format!("SELECT * FROM {table}"))?;
        let width = stmt.column_count();
        let rows = stmt
            .query_map([], |row| {
                (0..width).map(|i| row.get::<_, SqlValue>(i)).collect::<Result<Vec<_>, _>>()
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }
}

/// Convert a JSON scalar into its store representation. Booleans map to
/// 0/1 integers, the way the engine stores them; non-scalar values fall back
/// to their JSON text.
pub fn sql_value(value: &serde_json::Value) -> SqlValue {
    match value {
        serde_json::Value::Null => SqlValue::Null,
        serde_json::Value::Bool(b) => SqlValue::Integer(i64::from(*b)),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                SqlValue::Integer(i)
            } else {
                SqlValue::Real(n.as_f64().unwrap_or(f64::NAN))
            }
        }
        serde_json::Value::String(s) => SqlValue::Text(s.clone()),
        other => SqlValue::Text(other.to_string()),
    }
}
