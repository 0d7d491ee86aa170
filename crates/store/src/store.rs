//! Flight record store - SQLite persistence
//!
//! This module provides a durable record store for flights with:
//! - SQLite backend with WAL mode for durability
//! - Rows keyed by flight code (non-unique: deduplication is a non-goal)
//! - No referential constraint against the in-memory sequence
//!
//! Timestamps are stored as RFC 3339 text, statuses as their canonical
//! names.

use std::path::Path;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use flightline_core::{FlightRecord, FlightStatus};
use rusqlite::{params, Connection, OpenFlags, OptionalExtension, Row};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur in store operations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid record: {0}")]
    InvalidRecord(String),
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// Flight record store with SQLite backend
pub struct FlightStore {
    conn: Connection,
}

impl FlightStore {
    /// Create or open a store at the specified path.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        info!(path = %path.display(), "Opening flight store");

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_WRITE
                | OpenFlags::SQLITE_OPEN_CREATE
                | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;

        // WAL mode for better concurrency and durability
        conn.pragma_update(None, "journal_mode", "WAL")?;
        conn.pragma_update(None, "synchronous", "NORMAL")?;

        Self::init_schema(&conn)?;

        Ok(Self { conn })
    }

    /// Open an in-memory store, for tests and ephemeral deployments.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Self::init_schema(&conn)?;
        Ok(Self { conn })
    }

    fn init_schema(conn: &Connection) -> Result<()> {
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS flights (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                code TEXT NOT NULL,
                status TEXT NOT NULL,
                scheduled_time TEXT NOT NULL,
                origin TEXT NOT NULL,
                destination TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_flights_code ON flights(code);
            "#,
        )?;

        Ok(())
    }

    /// Persist a flight record. Codes are not deduplicated; inserting the
    /// same code twice yields two rows.
    pub fn insert(&mut self, record: &FlightRecord) -> Result<i64> {
        self.conn.execute(
            r#"
            INSERT INTO flights (code, status, scheduled_time, origin, destination)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
            params![
                record.code,
                record.status.as_str(),
                record.scheduled_time.to_rfc3339(),
                record.origin,
                record.destination,
            ],
        )?;

        let id = self.conn.last_insert_rowid();
        debug!(code = %record.code, id = id, "Flight persisted");
        Ok(id)
    }

    /// Fetch the most recently inserted record for `code`, if any.
    pub fn get(&self, code: &str) -> Result<Option<FlightRecord>> {
        let record = self
            .conn
            .query_row(
                r#"
                SELECT code, status, scheduled_time, origin, destination
                FROM flights
                WHERE code = ?1
                ORDER BY id DESC
                LIMIT 1
                "#,
                params![code],
                Self::row_to_record,
            )
            .optional()?;

        record.map(Self::decode_record).transpose()
    }

    /// Delete every row stored under `code`. Returns whether any row was
    /// removed.
    pub fn delete(&mut self, code: &str) -> Result<bool> {
        let removed = self
            .conn
            .execute("DELETE FROM flights WHERE code = ?1", params![code])?;

        debug!(code = %code, rows = removed, "Flight rows deleted");
        Ok(removed > 0)
    }

    /// All stored records in insertion order.
    pub fn list_all(&self) -> Result<Vec<FlightRecord>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT code, status, scheduled_time, origin, destination
            FROM flights
            ORDER BY id ASC
            "#,
        )?;

        let rows = stmt.query_map([], Self::row_to_record)?;

        let mut records = Vec::new();
        for row in rows {
            records.push(Self::decode_record(row?)?);
        }
        Ok(records)
    }

    /// Number of stored rows.
    pub fn count(&self) -> Result<u64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM flights", [], |row| row.get(0))?;
        Ok(count as u64)
    }

    /// Raw column extraction; decoding of the text columns happens in
    /// `decode_record` so rusqlite errors stay separate from ours.
    fn row_to_record(row: &Row<'_>) -> rusqlite::Result<RawFlightRow> {
        Ok(RawFlightRow {
            code: row.get(0)?,
            status: row.get(1)?,
            scheduled_time: row.get(2)?,
            origin: row.get(3)?,
            destination: row.get(4)?,
        })
    }

    fn decode_record(raw: RawFlightRow) -> Result<FlightRecord> {
        let status = FlightStatus::from_str(&raw.status).map_err(StoreError::InvalidRecord)?;
        let scheduled_time = DateTime::parse_from_rfc3339(&raw.scheduled_time)
            .map_err(|e| StoreError::InvalidRecord(format!("bad timestamp: {e}")))?
            .with_timezone(&Utc);

        Ok(FlightRecord {
            code: raw.code,
            status,
            scheduled_time,
            origin: raw.origin,
            destination: raw.destination,
        })
    }
}

struct RawFlightRow {
    code: String,
    status: String,
    scheduled_time: String,
    origin: String,
    destination: String,
}
