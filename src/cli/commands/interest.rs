use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::record;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;

/// Set an event's interested-people counter to an exact value.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Interest { id, count } = cmd {
        if *count < 0 {
            return Err(AppError::Validation(format!(
                "interested count must not be negative: {}",
                count
            )));
        }

        let pool = DbPool::new(&cfg.database)?;

        let changed = queries::set_interested_people(&pool.conn, *id, *count)?;
        if changed == 0 {
            return Err(AppError::EventNotFound(*id));
        }

        let _ = record(
            &pool.conn,
            "interest",
            &format!("event {}", id),
            &format!("counter set to {}", count),
        );
        success(format!("Event {} now has {} interested people.", id, count));
    }
    Ok(())
}
