//! Record store: the `time_tracking` table behind a small trait.

use crate::db::initialize::init_db;
use crate::db::log::ttlog_quiet;
use crate::errors::{AppError, AppResult};
use crate::models::record::TrackingRecord;
use rusqlite::{Connection, OptionalExtension, Row, params};
use std::path::Path;

/// Durable storage of tracking records.
///
/// Every operation touches a single row and is atomic on its own.
pub trait RecordStore {
    /// Insert a new row and return the id assigned to it.
    fn create(
        &mut self,
        activity_name: &str,
        start_time: f64,
        end_time: f64,
        total_time: i64,
    ) -> AppResult<i64>;

    /// Overwrite `total_time`; `NotFound` when the row does not exist.
    fn update_total_time(&mut self, id: i64, total_time: i64) -> AppResult<()>;

    /// Overwrite `total_time` and `end_time` in one statement; `NotFound`
    /// when the row does not exist.
    fn update_total_and_end_time(
        &mut self,
        id: i64,
        total_time: i64,
        end_time: f64,
    ) -> AppResult<()>;

    /// Remove a row. Missing rows are ignored.
    fn delete(&mut self, id: i64) -> AppResult<()>;

    fn get(&self, id: i64) -> AppResult<TrackingRecord>;

    /// Snapshot of all rows, most recently created first.
    fn list_all(&self) -> AppResult<Vec<TrackingRecord>>;
}

pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open (or create) the database file and make sure the schema exists.
    pub fn open<P: AsRef<Path>>(path: P) -> AppResult<Self> {
        let conn = Connection::open(path)?;
        init_db(&conn)?;
        Ok(Self { conn })
    }

    pub fn in_memory() -> AppResult<Self> {
        let conn = Connection::open_in_memory()?;
        init_db(&conn)?;
        Ok(Self { conn })
    }

    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Number of rows and sum of `total_time`.
    pub fn totals(&self) -> AppResult<(i64, i64)> {
        let (count, total): (i64, f64) = self.conn.query_row(
            "SELECT COUNT(*), IFNULL(SUM(total_time), 0) FROM time_tracking",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )?;
        Ok((count, total as i64))
    }
}

pub fn map_row(row: &Row) -> rusqlite::Result<TrackingRecord> {
    let total: f64 = row.get("total_time")?;
    Ok(TrackingRecord {
        id: row.get("id")?,
        activity_name: row.get("activity_name")?,
        start_time: row.get::<_, Option<f64>>("start_time")?.unwrap_or(0.0),
        end_time: row.get::<_, Option<f64>>("end_time")?.unwrap_or(0.0),
        total_time: total.max(0.0) as i64,
    })
}

impl RecordStore for SqliteStore {
    fn create(
        &mut self,
        activity_name: &str,
        start_time: f64,
        end_time: f64,
        total_time: i64,
    ) -> AppResult<i64> {
        self.conn.execute(
            "INSERT INTO time_tracking (activity_name, start_time, end_time, total_time)
             VALUES (?1, ?2, ?3, ?4)",
            params![activity_name, start_time, end_time, total_time as f64],
        )?;
        let id = self.conn.last_insert_rowid();

        ttlog_quiet(
            &self.conn,
            "create",
            &format!("#{}", id),
            &format!("Created record for '{}' ({}s)", activity_name, total_time),
        );

        Ok(id)
    }

    fn update_total_time(&mut self, id: i64, total_time: i64) -> AppResult<()> {
        let changed = self.conn.execute(
            "UPDATE time_tracking SET total_time = ?1 WHERE id = ?2",
            params![total_time as f64, id],
        )?;
        if changed == 0 {
            return Err(AppError::NotFound(id));
        }

        ttlog_quiet(
            &self.conn,
            "update",
            &format!("#{}", id),
            &format!("Total time set to {}s", total_time),
        );
        Ok(())
    }

    fn update_total_and_end_time(
        &mut self,
        id: i64,
        total_time: i64,
        end_time: f64,
    ) -> AppResult<()> {
        let changed = self.conn.execute(
            "UPDATE time_tracking SET total_time = ?1, end_time = ?2 WHERE id = ?3",
            params![total_time as f64, end_time, id],
        )?;
        if changed == 0 {
            return Err(AppError::NotFound(id));
        }

        ttlog_quiet(
            &self.conn,
            "update",
            &format!("#{}", id),
            &format!("Total time set to {}s", total_time),
        );
        Ok(())
    }

    fn delete(&mut self, id: i64) -> AppResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM time_tracking WHERE id = ?1", [id])?;

        if changed > 0 {
            ttlog_quiet(&self.conn, "del", &format!("#{}", id), "Record deleted");
        }
        Ok(())
    }

    fn get(&self, id: i64) -> AppResult<TrackingRecord> {
        let mut stmt = self
            .conn
            .prepare_cached("SELECT * FROM time_tracking WHERE id = ?1")?;

        stmt.query_row([id], map_row)
            .optional()?
            .ok_or(AppError::NotFound(id))
    }

    fn list_all(&self) -> AppResult<Vec<TrackingRecord>> {
        let mut stmt = self
            .conn
            .prepare_cached("SELECT * FROM time_tracking ORDER BY id DESC")?;

        let rows = stmt.query_map([], map_row)?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }
}
