use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::images;
use crate::db::log::record;
use crate::db::pool::DbPool;
use crate::db::{schema, seed};
use crate::errors::AppResult;
use crate::state::AppState;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (unless running with --test)
///  - the SQLite database file
/// and runs the first-launch gate: schema creation plus demonstration seed,
/// exactly once per database. Subsequent runs are no-ops until a reset.
pub fn handle(cli: &Cli) -> AppResult<()> {
    Config::init_all(cli.db.clone(), cli.test)?;

    let mut cfg = Config::load();
    cfg.apply_db_override(cli.db.as_deref());

    let state = AppState::load(&cfg.database);
    if state.seeded {
        info("Already initialized. Run `eventscout reset` to start over.");
        return Ok(());
    }

    let pool = DbPool::new(&cfg.database)?;

    schema::reset_schema(&pool.conn)?;
    images::ensure_images_dir(&cfg.images_dir)?;
    seed::seed_database(&pool.conn, &cfg.images_dir)?;

    AppState::mark_seeded(&cfg.database)?;

    if let Err(e) = record(&pool.conn, "init", &cfg.database, "Database created and seeded") {
        eprintln!("⚠️ Failed to write internal log: {}", e);
    }

    success(format!("Database seeded at {}", cfg.database));
    Ok(())
}
