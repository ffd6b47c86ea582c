//! Demonstration dataset loaded on first launch.
//!
//! Eight cities, one landmark location each, and eight events spread across
//! today, tomorrow and next week (computed at seed time). Must run against
//! freshly created tables; a failing insert aborts midway and leaves partial
//! data, exactly like any other single-statement failure.

use crate::core::images;
use crate::db::queries::{self, NewEvent};
use crate::errors::AppResult;
use crate::utils::date;
use rusqlite::Connection;

struct SeedLocation {
    name: &'static str,
    latitude: f64,
    longitude: f64,
    city_index: usize,
}

enum SeedDay {
    Today,
    Tomorrow,
    NextWeek,
}

struct SeedEvent {
    name: &'static str,
    day: SeedDay,
    location_index: usize,
    interested_people: i64,
    description: &'static str,
}

const CITIES: [&str; 8] = [
    "Paris",
    "Berlin",
    "Madrid",
    "Rome",
    "Vienna",
    "Amsterdam",
    "Budapest",
    "Lisbon",
];

const LOCATIONS: [SeedLocation; 8] = [
    SeedLocation {
        name: "Eiffel Tower",
        latitude: 48.8584,
        longitude: 2.2945,
        city_index: 0,
    },
    SeedLocation {
        name: "Brandenburg Gate",
        latitude: 52.5163,
        longitude: 13.3777,
        city_index: 1,
    },
    SeedLocation {
        name: "Plaza Mayor",
        latitude: 40.4154,
        longitude: -3.7074,
        city_index: 2,
    },
    SeedLocation {
        name: "Colosseum",
        latitude: 41.8902,
        longitude: 12.4922,
        city_index: 3,
    },
    SeedLocation {
        name: "Schönbrunn Palace",
        latitude: 48.1845,
        longitude: 16.3122,
        city_index: 4,
    },
    SeedLocation {
        name: "Rijksmuseum",
        latitude: 52.3599,
        longitude: 4.8852,
        city_index: 5,
    },
    SeedLocation {
        name: "Buda Castle",
        latitude: 47.4969,
        longitude: 19.0399,
        city_index: 6,
    },
    SeedLocation {
        name: "Belém Tower",
        latitude: 38.6916,
        longitude: -9.2166,
        city_index: 7,
    },
];

const EVENTS: [SeedEvent; 8] = [
    SeedEvent {
        name: "Spring Festival",
        day: SeedDay::Today,
        location_index: 0,
        interested_people: 33,
        description: "An open-air celebration of the season with flower stalls and street music.",
    },
    SeedEvent {
        name: "Art Expo",
        day: SeedDay::Tomorrow,
        location_index: 1,
        interested_people: 420,
        description: "Contemporary galleries show their newest acquisitions under one roof.",
    },
    SeedEvent {
        name: "Food Carnival",
        day: SeedDay::Today,
        location_index: 2,
        interested_people: 72,
        description: "Street-food vendors from across the region, one plaza, far too many choices.",
    },
    SeedEvent {
        name: "Music Night",
        day: SeedDay::Tomorrow,
        location_index: 3,
        interested_people: 69,
        description: "Up-and-coming bands play short sets late into the evening.",
    },
    SeedEvent {
        name: "Film Gala",
        day: SeedDay::NextWeek,
        location_index: 4,
        interested_people: 88,
        description: "A week of independent cinema, with directors taking questions after each screening.",
    },
    SeedEvent {
        name: "Book Fair",
        day: SeedDay::NextWeek,
        location_index: 5,
        interested_people: 1312,
        description: "Publishers, antiquarians and small presses fill the museum halls.",
    },
    SeedEvent {
        name: "Wine Tasting",
        day: SeedDay::Today,
        location_index: 6,
        interested_people: 16,
        description: "Guided tastings of regional cellars on the castle terrace.",
    },
    SeedEvent {
        name: "Marathon",
        day: SeedDay::Tomorrow,
        location_index: 7,
        interested_people: 1213,
        description: "The riverside course starts at dawn; registration closes the evening before.",
    },
];

/// Insert the fixed demonstration rows and write one bundled thumbnail per
/// event into the durable images directory.
pub fn seed_database(conn: &Connection, images_dir: &str) -> AppResult<()> {
    let mut city_ids = Vec::with_capacity(CITIES.len());
    for name in CITIES {
        city_ids.push(queries::add_city(conn, name)?);
    }

    let mut location_ids = Vec::with_capacity(LOCATIONS.len());
    for loc in &LOCATIONS {
        location_ids.push(queries::add_location(
            conn,
            loc.name,
            loc.latitude,
            loc.longitude,
            city_ids[loc.city_index],
        )?);
    }

    for (i, ev) in EVENTS.iter().enumerate() {
        let day = match ev.day {
            SeedDay::Today => date::today(),
            SeedDay::Tomorrow => date::tomorrow(),
            SeedDay::NextWeek => date::next_week(),
        };
        let thumbnail = images::write_placeholder(images_dir, i, ev.name)?;
        let thumbnail = thumbnail.to_string_lossy();

        queries::add_event(
            conn,
            &NewEvent {
                name: ev.name,
                date: &date::iso_day(day),
                location_id: location_ids[ev.location_index],
                interested_people: ev.interested_people,
                thumbnail_path: Some(thumbnail.as_ref()),
                description: Some(ev.description),
            },
        )?;
    }

    Ok(())
}
