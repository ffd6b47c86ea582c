use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::images;
use crate::db::log::record;
use crate::db::pool::DbPool;
use crate::db::{schema, seed};
use crate::errors::AppResult;
use crate::state::AppState;
use crate::ui::messages::{confirm, info, success};

/// Destructive settings action: drop all three tables, recreate them and
/// reload the demonstration dataset.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Reset { yes } = cmd {
        if !*yes
            && !confirm("Delete ALL events, locations and cities and reload the demonstration data? This cannot be undone.")
        {
            info("Operation cancelled.");
            return Ok(());
        }

        let pool = DbPool::new(&cfg.database)?;

        schema::reset_schema(&pool.conn)?;
        images::ensure_images_dir(&cfg.images_dir)?;
        seed::seed_database(&pool.conn, &cfg.images_dir)?;

        AppState::mark_seeded(&cfg.database)?;

        let _ = record(&pool.conn, "reset", &cfg.database, "Database reset and reseeded");
        success("Database has been reset and reseeded.");
    }
    Ok(())
}
