use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::record;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{confirm, info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        //
        // Confirmation prompt
        //
        if !*yes {
            let prompt = format!(
                "Delete event #{}? Its stored thumbnail is removed as well. This action is irreversible.",
                id
            );
            if !confirm(&prompt) {
                info("Operation cancelled.");
                return Ok(());
            }
        }

        //
        // Execute deletion
        //
        let pool = DbPool::new(&cfg.database)?;

        let removed = queries::delete_event(&pool.conn, *id)?;
        if !removed {
            return Err(AppError::EventNotFound(*id));
        }

        let _ = record(&pool.conn, "del", &format!("event {}", id), "Event deleted");
        success(format!("Event #{} has been deleted.", id));
    }
    Ok(())
}
