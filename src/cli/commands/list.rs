use crate::cli::parser::{Commands, ListTarget};
use crate::config::Config;
use crate::core::browse;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::utils::date;
use crate::utils::table::Table;
use serde::Serialize;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { target, date, json } = cmd {
        let pool = DbPool::new(&cfg.database)?;

        match target {
            ListTarget::Events => list_events(&pool, date.as_deref(), *json)?,
            ListTarget::Cities => list_cities(&pool, *json)?,
            ListTarget::Locations => list_locations(&pool, *json)?,
        }
    }
    Ok(())
}

fn print_json<T: Serialize>(rows: &[T]) -> AppResult<()> {
    let json = serde_json::to_string_pretty(rows).map_err(|e| AppError::Other(e.to_string()))?;
    println!("{}", json);
    Ok(())
}

fn list_events(pool: &DbPool, day: Option<&str>, json: bool) -> AppResult<()> {
    let mut events = queries::list_events(&pool.conn)?;

    if let Some(day) = day {
        // Same day-prefix rule the browse view applies.
        let day = date::parse_day(day).ok_or_else(|| AppError::InvalidDate(day.to_string()))?;
        events = browse::on_day(&events, &date::iso_day(day));
    }

    if json {
        return print_json(&events);
    }

    if events.is_empty() {
        println!("No events found.");
        return Ok(());
    }

    let mut table = Table::new(&["ID", "NAME", "DATE", "LOCATION", "CITY", "INTERESTED"]);
    for ev in &events {
        table.add_row(vec![
            ev.id.to_string(),
            ev.name.clone(),
            ev.date.clone(),
            ev.location_name.clone(),
            ev.city_name.clone(),
            ev.interested_people.to_string(),
        ]);
    }
    print!("{}", table.render());
    Ok(())
}

fn list_cities(pool: &DbPool, json: bool) -> AppResult<()> {
    let cities = queries::list_cities(&pool.conn)?;

    if json {
        return print_json(&cities);
    }

    if cities.is_empty() {
        println!("No cities found.");
        return Ok(());
    }

    let mut table = Table::new(&["ID", "NAME"]);
    for city in &cities {
        table.add_row(vec![city.id.to_string(), city.name.clone()]);
    }
    print!("{}", table.render());
    Ok(())
}

fn list_locations(pool: &DbPool, json: bool) -> AppResult<()> {
    let locations = queries::list_locations(&pool.conn)?;

    if json {
        return print_json(&locations);
    }

    if locations.is_empty() {
        println!("No locations found.");
        return Ok(());
    }

    let mut table = Table::new(&["ID", "NAME", "CITY", "LATITUDE", "LONGITUDE"]);
    for loc in &locations {
        table.add_row(vec![
            loc.id.to_string(),
            loc.name.clone(),
            loc.city_name.clone(),
            format!("{:.4}", loc.latitude),
            format!("{:.4}", loc.longitude),
        ]);
    }
    print!("{}", table.render());
    Ok(())
}
