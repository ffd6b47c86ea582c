//! Derived views over a loaded event list.
//!
//! Sorting and day filtering happen in memory after the join query has run;
//! the data layer only hands back denormalized rows.

use crate::models::event::Event;

fn by_popularity(a: &Event, b: &Event) -> std::cmp::Ordering {
    b.interested_people.cmp(&a.interested_people)
}

/// Most popular events first, capped at `limit`.
pub fn popular(events: &[Event], limit: usize) -> Vec<Event> {
    let mut out: Vec<Event> = events.to_vec();
    out.sort_by(by_popularity);
    out.truncate(limit);
    out
}

/// Events falling on the given calendar day (`YYYY-MM-DD`), most popular
/// first. Stored dates may carry a time component; matching is on the day
/// prefix.
pub fn on_day(events: &[Event], day: &str) -> Vec<Event> {
    let mut out: Vec<Event> = events.iter().filter(|e| e.day() == day).cloned().collect();
    out.sort_by(by_popularity);
    out
}
