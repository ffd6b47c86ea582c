//! Internal audit trail for state-changing operations.

use crate::errors::AppResult;
use chrono::Local;
use rusqlite::{Connection, params};

/// Append one line to the `log` table. Callers treat failures as
/// non-blocking; the operation itself has already succeeded.
pub fn record(conn: &Connection, operation: &str, target: &str, message: &str) -> AppResult<()> {
    let mut stmt = conn.prepare_cached(
        "INSERT INTO log (date, operation, target, message)
         VALUES (?1, ?2, ?3, ?4)",
    )?;

    stmt.execute(params![
        Local::now().to_rfc3339(),
        operation,
        target,
        message
    ])?;

    Ok(())
}
