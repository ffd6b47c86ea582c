use crate::config::Config;
use crate::core::browse;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::models::event::Event;
use crate::utils::date;

/// The home view: Popular, Today and Tomorrow sections over one load.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let pool = DbPool::new(&cfg.database)?;
    let events = queries::list_events(&pool.conn)?;

    let today = date::iso_day(date::today());
    let tomorrow = date::iso_day(date::tomorrow());

    print_section("Popular", &browse::popular(&events, cfg.popular_limit));
    print_section(
        &format!("Today ({})", today),
        &browse::on_day(&events, &today),
    );
    print_section(
        &format!("Tomorrow ({})", tomorrow),
        &browse::on_day(&events, &tomorrow),
    );

    Ok(())
}

fn print_section(title: &str, events: &[Event]) {
    println!("\n=== {} ===", title);

    if events.is_empty() {
        println!("  No events found.");
        return;
    }

    for ev in events {
        println!(
            "  #{:<4} {}  |  {} — {}, {}  |  {} interested",
            ev.id, ev.name, ev.date, ev.location_name, ev.city_name, ev.interested_people
        );
    }
}
