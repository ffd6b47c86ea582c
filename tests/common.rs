#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn es() -> Command {
    cargo_bin_cmd!("eventscout")
}

/// Create a unique test DB path inside the system temp dir and remove any
/// leftovers from a previous run (database, state flag, images directory).
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_eventscout.sqlite", name));
    let db_path = path.to_string_lossy().to_string();

    fs::remove_file(&db_path).ok();
    fs::remove_file(format!("{}.state", db_path)).ok();
    fs::remove_dir_all(format!("{}.images", db_path)).ok();

    db_path
}

/// Initialize and seed a database for tests (runs the first-launch gate).
pub fn init_seeded_db(db_path: &str) {
    es().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

pub fn open(db_path: &str) -> rusqlite::Connection {
    rusqlite::Connection::open(db_path).expect("open db")
}

pub fn count_rows(conn: &rusqlite::Connection, table: &str) -> i64 {
    conn.query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |r| r.get(0))
        .expect("count rows")
}

/// Thumbnail path stored for one event, straight from the database.
pub fn thumbnail_of(conn: &rusqlite::Connection, event_id: i64) -> Option<String> {
    conn.query_row(
        "SELECT thumbnail_path FROM event WHERE id = ?1",
        [event_id],
        |r| r.get(0),
    )
    .expect("read thumbnail path")
}
