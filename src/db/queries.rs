use crate::core::images;
use crate::errors::{AppError, AppResult};
use crate::models::city::City;
use crate::models::event::Event;
use crate::models::location::Location;
use rusqlite::{Connection, OptionalExtension, Row, params};

/// Shared select for events: the join denormalizes location and city onto
/// every row for display convenience.
const EVENT_SELECT: &str = "SELECT e.id, e.name, e.date, e.location_id, e.interested_people,
            e.thumbnail_path, e.description,
            l.name AS location_name, l.latitude, l.longitude,
            c.name AS city_name
     FROM event e
     JOIN location l ON e.location_id = l.id
     JOIN city c ON l.city_id = c.id";

pub(crate) fn map_city(row: &Row) -> rusqlite::Result<City> {
    Ok(City {
        id: row.get("id")?,
        name: row.get("name")?,
    })
}

pub(crate) fn map_location(row: &Row) -> rusqlite::Result<Location> {
    Ok(Location {
        id: row.get("id")?,
        name: row.get("name")?,
        latitude: row.get("latitude")?,
        longitude: row.get("longitude")?,
        city_id: row.get("city_id")?,
        city_name: row.get("city_name")?,
    })
}

pub(crate) fn map_event(row: &Row) -> rusqlite::Result<Event> {
    Ok(Event {
        id: row.get("id")?,
        name: row.get("name")?,
        date: row.get("date")?,
        location_id: row.get("location_id")?,
        interested_people: row.get("interested_people")?,
        thumbnail_path: row.get("thumbnail_path")?,
        description: row.get("description")?,
        location_name: row.get("location_name")?,
        city_name: row.get("city_name")?,
        latitude: row.get("latitude")?,
        longitude: row.get("longitude")?,
    })
}

/// Map a constraint failure onto the typed foreign-key error; anything else
/// stays a plain database error.
fn fk_error(err: rusqlite::Error, what: &str) -> AppError {
    if let rusqlite::Error::SqliteFailure(e, _) = &err {
        if e.code == rusqlite::ErrorCode::ConstraintViolation {
            return AppError::ForeignKey(what.to_string());
        }
    }
    AppError::Db(err)
}

// City operations

pub fn add_city(conn: &Connection, name: &str) -> AppResult<i64> {
    conn.execute("INSERT INTO city (name) VALUES (?1)", params![name])?;
    Ok(conn.last_insert_rowid())
}

pub fn list_cities(conn: &Connection) -> AppResult<Vec<City>> {
    let mut stmt = conn.prepare_cached("SELECT id, name FROM city ORDER BY name ASC")?;
    let rows = stmt.query_map([], map_city)?;
    let cities = rows.collect::<Result<Vec<_>, _>>()?;
    Ok(cities)
}

// Location operations

pub fn add_location(
    conn: &Connection,
    name: &str,
    latitude: f64,
    longitude: f64,
    city_id: i64,
) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO location (name, latitude, longitude, city_id) VALUES (?1, ?2, ?3, ?4)",
        params![name, latitude, longitude, city_id],
    )
    .map_err(|e| fk_error(e, &format!("location references missing city {}", city_id)))?;
    Ok(conn.last_insert_rowid())
}

pub fn list_locations(conn: &Connection) -> AppResult<Vec<Location>> {
    let mut stmt = conn.prepare_cached(
        "SELECT l.id, l.name, l.latitude, l.longitude, l.city_id, c.name AS city_name
         FROM location l
         JOIN city c ON l.city_id = c.id
         ORDER BY c.name ASC, l.name ASC",
    )?;
    let rows = stmt.query_map([], map_location)?;
    let locations = rows.collect::<Result<Vec<_>, _>>()?;
    Ok(locations)
}

// Event operations

/// Field set for an event insert.
pub struct NewEvent<'a> {
    pub name: &'a str,
    pub date: &'a str,
    pub location_id: i64,
    pub interested_people: i64,
    pub thumbnail_path: Option<&'a str>,
    pub description: Option<&'a str>,
}

pub fn add_event(conn: &Connection, ev: &NewEvent) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO event (name, date, location_id, interested_people, thumbnail_path, description)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            ev.name,
            ev.date,
            ev.location_id,
            ev.interested_people,
            ev.thumbnail_path,
            ev.description,
        ],
    )
    .map_err(|e| {
        fk_error(
            e,
            &format!("event references missing location {}", ev.location_id),
        )
    })?;
    Ok(conn.last_insert_rowid())
}

pub fn list_events(conn: &Connection) -> AppResult<Vec<Event>> {
    let sql = format!("{} ORDER BY e.date ASC, e.interested_people DESC", EVENT_SELECT);
    let mut stmt = conn.prepare_cached(&sql)?;
    let rows = stmt.query_map([], map_event)?;
    let events = rows.collect::<Result<Vec<_>, _>>()?;
    Ok(events)
}

pub fn get_event(conn: &Connection, id: i64) -> AppResult<Option<Event>> {
    let sql = format!("{} WHERE e.id = ?1", EVENT_SELECT);
    let mut stmt = conn.prepare_cached(&sql)?;
    let event = stmt.query_row([id], map_event).optional()?;
    Ok(event)
}

/// Set the interested-people counter to an exact value.
/// Returns the number of rows changed (0 when the event does not exist).
pub fn set_interested_people(conn: &Connection, event_id: i64, count: i64) -> AppResult<usize> {
    let changed = conn.execute(
        "UPDATE event SET interested_people = ?1 WHERE id = ?2",
        params![count, event_id],
    )?;
    Ok(changed)
}

/// Delete an event row. The stored thumbnail file, if any, is removed
/// best-effort first; a file that is already gone is not an error.
/// Returns false when no row matched the id.
pub fn delete_event(conn: &Connection, event_id: i64) -> AppResult<bool> {
    let thumbnail: Option<Option<String>> = conn
        .query_row(
            "SELECT thumbnail_path FROM event WHERE id = ?1",
            [event_id],
            |row| row.get(0),
        )
        .optional()?;

    let Some(thumbnail) = thumbnail else {
        return Ok(false);
    };

    if let Some(path) = thumbnail {
        images::remove_thumbnail(&path);
    }

    let deleted = conn.execute("DELETE FROM event WHERE id = ?1", [event_id])?;
    Ok(deleted > 0)
}
