use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{count_rows, es, init_seeded_db, open, setup_test_db};

#[test]
fn test_init_seeds_demo_data() {
    let db_path = setup_test_db("init_seeds");

    init_seeded_db(&db_path);

    let conn = open(&db_path);
    assert_eq!(count_rows(&conn, "city"), 8);
    assert_eq!(count_rows(&conn, "location"), 8);
    assert_eq!(count_rows(&conn, "event"), 8);
}

#[test]
fn test_init_runs_seed_only_once() {
    let db_path = setup_test_db("init_once");

    init_seeded_db(&db_path);

    // A user-created row must survive a second init.
    es().args(["--db", &db_path, "add", "city", "Ghent"])
        .assert()
        .success()
        .stdout(contains("added with id 9"));

    es().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Already initialized"));

    let conn = open(&db_path);
    assert_eq!(count_rows(&conn, "city"), 9);
    assert_eq!(count_rows(&conn, "event"), 8);
}

#[test]
fn test_reset_reloads_demo_data() {
    let db_path = setup_test_db("reset_reloads");

    init_seeded_db(&db_path);

    es().args(["--db", &db_path, "add", "city", "Ghent"])
        .assert()
        .success();
    es().args(["--db", &db_path, "del", "1", "--yes"])
        .assert()
        .success();

    es().args(["--db", &db_path, "reset", "--yes"])
        .assert()
        .success()
        .stdout(contains("reset"));

    let conn = open(&db_path);
    assert_eq!(count_rows(&conn, "city"), 8);
    assert_eq!(count_rows(&conn, "location"), 8);
    assert_eq!(count_rows(&conn, "event"), 8);

    es().args(["--db", &db_path, "list", "cities"])
        .assert()
        .success()
        .stdout(contains("Ghent").not());
}

#[test]
fn test_list_events_annotates_location_and_city() {
    let db_path = setup_test_db("join_names");

    init_seeded_db(&db_path);

    es().args(["--db", &db_path, "list", "events"])
        .assert()
        .success()
        .stdout(contains("Spring Festival"))
        .stdout(contains("Eiffel Tower"))
        .stdout(contains("Paris"));
}

#[test]
fn test_list_events_filter_today() {
    let db_path = setup_test_db("filter_today");

    init_seeded_db(&db_path);

    let today = eventscout::utils::date::iso_day(eventscout::utils::date::today());

    es().args(["--db", &db_path, "list", "events", "--date", &today])
        .assert()
        .success()
        .stdout(contains("Spring Festival"))
        .stdout(contains("Food Carnival"))
        .stdout(contains("Wine Tasting"))
        .stdout(contains("Art Expo").not())
        .stdout(contains("Film Gala").not())
        .stdout(contains("Marathon").not());
}

#[test]
fn test_list_events_rejects_bad_filter_date() {
    let db_path = setup_test_db("filter_bad_date");

    init_seeded_db(&db_path);

    es().args(["--db", &db_path, "list", "events", "--date", "next-friday"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));
}

#[test]
fn test_browse_shows_sections() {
    let db_path = setup_test_db("browse_sections");

    init_seeded_db(&db_path);

    es().args(["--db", &db_path, "browse"])
        .assert()
        .success()
        .stdout(contains("=== Popular ==="))
        .stdout(contains("Today"))
        .stdout(contains("Tomorrow"))
        // most popular seeded event always makes the Popular cut
        .stdout(contains("Book Fair"));
}

#[test]
fn test_db_info_and_check() {
    let db_path = setup_test_db("db_info");

    init_seeded_db(&db_path);

    es().args(["--db", &db_path, "db", "--info", "--check"])
        .assert()
        .success()
        .stdout(contains("Cities:"))
        .stdout(contains("Integrity check passed"))
        .stdout(contains("Foreign-key check passed"));
}
