use crate::errors::AppResult;
use rusqlite::Connection;

/// Initialize the database.
/// Creates the records table and the internal `log` table when missing.
/// Existing tables are left untouched and never dropped.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS time_tracking (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            activity_name TEXT NOT NULL,
            start_time    REAL,
            end_time      REAL,
            total_time    REAL NOT NULL DEFAULT 0 CHECK(total_time >= 0)
        );

        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}
