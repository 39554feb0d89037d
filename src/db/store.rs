//! Persistence of the attendance record collection.
//!
//! The whole collection lives as one JSON array under a single named slot.
//! Every mutation loads the array, changes it and writes it back in full.

use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::AttendanceRecord;
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, TransactionBehavior, params};
use tracing::debug;

/// Name of the slot holding the record array.
pub const RECORDS_SLOT: &str = "clockRecords";

pub trait RecordStore {
    /// Entire persisted collection; empty when nothing was ever saved.
    fn load_all(&self) -> AppResult<Vec<AttendanceRecord>>;

    /// Replace the entire persisted collection.
    fn save_all(&mut self, records: &[AttendanceRecord]) -> AppResult<()>;

    /// Read-modify-write cycle. Nothing is written when `f` fails.
    fn update<T, F>(&mut self, f: F) -> AppResult<T>
    where
        Self: Sized,
        F: FnOnce(&mut Vec<AttendanceRecord>) -> AppResult<T>,
    {
        let mut records = self.load_all()?;
        let out = f(&mut records)?;
        self.save_all(&records)?;
        Ok(out)
    }
}

fn decode(raw: &str) -> AppResult<Vec<AttendanceRecord>> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }
    Ok(serde_json::from_str(raw)?)
}

fn encode(records: &[AttendanceRecord]) -> AppResult<String> {
    Ok(serde_json::to_string(records)?)
}

// ------------------------------------------------
// SQLite
// ------------------------------------------------

/// Record store backed by the `storage` table of the local database.
pub struct SqliteStore {
    pool: DbPool,
}

impl SqliteStore {
    /// Open (or create) the database at `path` and bring its schema up to date.
    pub fn open(path: &str) -> AppResult<Self> {
        Self::from_pool(DbPool::new(path)?)
    }

    pub fn from_pool(pool: DbPool) -> AppResult<Self> {
        init_db(&pool.conn)?;
        Ok(Self { pool })
    }

    pub fn conn(&self) -> &Connection {
        &self.pool.conn
    }

    fn read_slot(conn: &Connection) -> AppResult<Vec<AttendanceRecord>> {
        let raw: Option<String> = conn
            .query_row(
                "SELECT value FROM storage WHERE key = ?1",
                [RECORDS_SLOT],
                |row| row.get(0),
            )
            .optional()?;

        match raw {
            Some(json) => decode(&json),
            None => Ok(Vec::new()),
        }
    }

    fn write_slot(conn: &Connection, records: &[AttendanceRecord]) -> AppResult<()> {
        let json = encode(records)?;
        conn.execute(
            r#"
            INSERT INTO storage (key, value, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(key) DO UPDATE
                SET value = excluded.value,
                    updated_at = excluded.updated_at
            "#,
            params![RECORDS_SLOT, json, Local::now().to_rfc3339()],
        )?;
        debug!(count = records.len(), "records saved");
        Ok(())
    }
}

impl RecordStore for SqliteStore {
    fn load_all(&self) -> AppResult<Vec<AttendanceRecord>> {
        Self::read_slot(&self.pool.conn)
    }

    fn save_all(&mut self, records: &[AttendanceRecord]) -> AppResult<()> {
        Self::write_slot(&self.pool.conn, records)
    }

    /// Holds an immediate write transaction for the whole cycle, so two
    /// overlapping invocations cannot interleave their load and save.
    fn update<T, F>(&mut self, f: F) -> AppResult<T>
    where
        F: FnOnce(&mut Vec<AttendanceRecord>) -> AppResult<T>,
    {
        let tx = self
            .pool
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        let mut records = Self::read_slot(&tx)?;
        let out = f(&mut records)?;
        Self::write_slot(&tx, &records)?;

        tx.commit()?;
        Ok(out)
    }
}

// ------------------------------------------------
// In-memory
// ------------------------------------------------

/// Store keeping the serialized slot in memory.
///
/// It holds the raw JSON rather than the records so corrupt contents can be
/// simulated with [`MemoryStore::with_raw`].
#[derive(Debug, Default)]
pub struct MemoryStore {
    raw: Option<String>,
    read_only: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: Some(raw.into()),
            read_only: false,
        }
    }

    /// Make every subsequent save fail.
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    pub fn raw(&self) -> Option<&str> {
        self.raw.as_deref()
    }
}

impl RecordStore for MemoryStore {
    fn load_all(&self) -> AppResult<Vec<AttendanceRecord>> {
        match &self.raw {
            Some(json) => decode(json),
            None => Ok(Vec::new()),
        }
    }

    fn save_all(&mut self, records: &[AttendanceRecord]) -> AppResult<()> {
        if self.read_only {
            return Err(AppError::Storage("store is read-only".into()));
        }
        self.raw = Some(encode(records)?);
        Ok(())
    }
}
