use serde::Serialize;

/// A scheduled happening at one location.
///
/// Rows come out of the join query already annotated with the parent
/// location and city (`location_name`, `city_name`, coordinates), matching
/// what the display layer needs without further lookups.
#[derive(Debug, Clone, Serialize)]
pub struct Event {
    pub id: i64,
    pub name: String,
    pub date: String, // "YYYY-MM-DD" or "YYYY-MM-DD HH:MM"
    pub location_id: i64,
    pub interested_people: i64,
    pub thumbnail_path: Option<String>,
    pub description: Option<String>,
    pub location_name: String,
    pub city_name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Event {
    /// Calendar day part of the stored date.
    pub fn day(&self) -> &str {
        self.date.get(..10).unwrap_or(&self.date)
    }
}
