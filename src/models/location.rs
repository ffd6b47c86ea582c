use serde::Serialize;

/// A point of interest where events take place. `city_name` is denormalized
/// by the select join so callers never have to look the parent up again.
#[derive(Debug, Clone, Serialize)]
pub struct Location {
    pub id: i64,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub city_id: i64,
    pub city_name: String,
}
