use crate::cli::parser::{AddEntity, Commands};
use crate::config::Config;
use crate::core::images;
use crate::db::log::record;
use crate::db::pool::DbPool;
use crate::db::queries::{self, NewEvent};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::{date, path};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add { entity } = cmd {
        match entity {
            AddEntity::Event {
                name,
                date,
                location_id,
                image,
                description,
            } => add_event(
                cfg,
                name,
                date,
                *location_id,
                image.as_deref(),
                description.as_deref(),
            )?,
            AddEntity::City { name } => add_city(cfg, name)?,
            AddEntity::Location {
                name,
                latitude,
                longitude,
                city_id,
            } => add_location(cfg, name, *latitude, *longitude, *city_id)?,
        }
    }
    Ok(())
}

fn add_event(
    cfg: &Config,
    name: &str,
    date_str: &str,
    location_id: i64,
    image: Option<&str>,
    description: Option<&str>,
) -> AppResult<()> {
    //
    // 1. Validate input before touching the store (the data layer does not).
    //
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::Validation("event name must not be empty".into()));
    }

    let date = date::parse_event_date(date_str)
        .ok_or_else(|| AppError::InvalidDate(date_str.to_string()))?;

    //
    // 2. Copy the picked image into durable storage, if one was given.
    //
    let thumbnail = match image {
        Some(p) => Some(images::import_image(&cfg.images_dir, &path::expand_tilde(p))?),
        None => None,
    };
    let thumbnail = thumbnail.map(|p| p.to_string_lossy().to_string());

    //
    // 3. Insert. A bad location id surfaces as a foreign-key error here.
    //
    let pool = DbPool::new(&cfg.database)?;
    let id = queries::add_event(
        &pool.conn,
        &NewEvent {
            name,
            date: &date,
            location_id,
            interested_people: 0,
            thumbnail_path: thumbnail.as_deref(),
            description,
        },
    )?;

    let _ = record(&pool.conn, "add", &format!("event {}", id), name);
    success(format!("Event '{}' added with id {}.", name, id));
    Ok(())
}

fn add_city(cfg: &Config, name: &str) -> AppResult<()> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::Validation("city name must not be empty".into()));
    }

    let pool = DbPool::new(&cfg.database)?;
    let id = queries::add_city(&pool.conn, name)?;

    let _ = record(&pool.conn, "add", &format!("city {}", id), name);
    success(format!("City '{}' added with id {}.", name, id));
    Ok(())
}

fn add_location(
    cfg: &Config,
    name: &str,
    latitude: f64,
    longitude: f64,
    city_id: i64,
) -> AppResult<()> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::Validation(
            "location name must not be empty".into(),
        ));
    }
    if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
        return Err(AppError::Validation(format!(
            "coordinates out of range: {}, {}",
            latitude, longitude
        )));
    }

    let pool = DbPool::new(&cfg.database)?;
    let id = queries::add_location(&pool.conn, name, latitude, longitude, city_id)?;

    let _ = record(&pool.conn, "add", &format!("location {}", id), name);
    success(format!("Location '{}' added with id {}.", name, id));
    Ok(())
}
