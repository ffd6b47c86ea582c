use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};

/// Print the detail view of one event, joined with its location and city.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { id } = cmd {
        let pool = DbPool::new(&cfg.database)?;

        let ev = queries::get_event(&pool.conn, *id)?.ok_or(AppError::EventNotFound(*id))?;

        println!("\n=== {} ===", ev.name);
        println!("Date:       {}", ev.date);
        println!("Where:      {}, {}", ev.location_name, ev.city_name);
        println!("Position:   {:.4}, {:.4}", ev.latitude, ev.longitude);
        println!("Interested: {} people", ev.interested_people);
        if let Some(description) = &ev.description {
            println!("\n{}", description);
        }
        if let Some(thumbnail) = &ev.thumbnail_path {
            println!("\nThumbnail:  {}", thumbnail);
        }
    }
    Ok(())
}
