use serde::Serialize;

/// Top-level named place grouping locations.
#[derive(Debug, Clone, Serialize)]
pub struct City {
    pub id: i64,
    pub name: String,
}
