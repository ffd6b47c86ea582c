//! Schema manager for the three domain tables.

use crate::errors::AppResult;
use rusqlite::Connection;

/// Drop and recreate `city`, `location` and `event` together.
/// Destroys every persisted row; the audit `log` table is left alone so the
/// operation itself stays traceable. Children are dropped first to keep the
/// batch valid while foreign keys are enforced.
pub fn reset_schema(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        "
        DROP TABLE IF EXISTS event;
        DROP TABLE IF EXISTS location;
        DROP TABLE IF EXISTS city;

        CREATE TABLE city (
            id   INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL
        );

        CREATE TABLE location (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            name      TEXT NOT NULL,
            latitude  REAL NOT NULL,
            longitude REAL NOT NULL,
            city_id   INTEGER NOT NULL,
            FOREIGN KEY (city_id) REFERENCES city(id)
        );

        CREATE TABLE event (
            id                INTEGER PRIMARY KEY AUTOINCREMENT,
            name              TEXT NOT NULL,
            date              TEXT NOT NULL,          -- YYYY-MM-DD or YYYY-MM-DD HH:MM
            location_id       INTEGER NOT NULL,
            interested_people INTEGER NOT NULL DEFAULT 0,
            thumbnail_path    TEXT,
            description       TEXT,
            FOREIGN KEY (location_id) REFERENCES location(id)
        );
        ",
    )?;
    ensure_log_table(conn)?;
    Ok(())
}

/// Create the audit table if missing. Safe to call on every startup path;
/// never dropped by a reset.
pub fn ensure_log_table(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS log (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            date TEXT NOT NULL,
            operation TEXT NOT NULL,
            target TEXT DEFAULT '',
            message TEXT NOT NULL
        );
        ",
    )?;
    Ok(())
}
