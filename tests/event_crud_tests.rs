use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;
use std::path::Path;

mod common;
use common::{count_rows, es, init_seeded_db, open, setup_test_db, thumbnail_of};

#[test]
fn test_add_event_then_list_returns_it() {
    let db_path = setup_test_db("add_then_list");

    init_seeded_db(&db_path);

    es().args([
        "--db",
        &db_path,
        "add",
        "event",
        "--name",
        "Night Market",
        "--date",
        "2026-09-12",
        "--location",
        "3",
    ])
    .assert()
    .success()
    .stdout(contains("added with id 9"));

    es().args(["--db", &db_path, "list", "events"])
        .assert()
        .success()
        .stdout(contains("Night Market"))
        .stdout(contains("2026-09-12"));
}

#[test]
fn test_add_event_accepts_datetime() {
    let db_path = setup_test_db("add_datetime");

    init_seeded_db(&db_path);

    es().args([
        "--db",
        &db_path,
        "add",
        "event",
        "--name",
        "Midnight Run",
        "--date",
        "2026-09-12 23:30",
        "--location",
        "8",
    ])
    .assert()
    .success();

    es().args(["--db", &db_path, "list", "events", "--date", "2026-09-12"])
        .assert()
        .success()
        .stdout(contains("Midnight Run"));
}

#[test]
fn test_add_event_rejects_empty_name() {
    let db_path = setup_test_db("add_empty_name");

    init_seeded_db(&db_path);

    es().args([
        "--db", &db_path, "add", "event", "--name", "   ", "--date", "2026-09-12",
        "--location", "1",
    ])
    .assert()
    .failure()
    .stderr(contains("Validation failed"));
}

#[test]
fn test_add_event_rejects_bad_date() {
    let db_path = setup_test_db("add_bad_date");

    init_seeded_db(&db_path);

    es().args([
        "--db",
        &db_path,
        "add",
        "event",
        "--name",
        "Night Market",
        "--date",
        "sometime soon",
        "--location",
        "1",
    ])
    .assert()
    .failure()
    .stderr(contains("Invalid date format"));
}

#[test]
fn test_add_event_rejects_unknown_location() {
    let db_path = setup_test_db("add_bad_location");

    init_seeded_db(&db_path);

    es().args([
        "--db",
        &db_path,
        "add",
        "event",
        "--name",
        "Night Market",
        "--date",
        "2026-09-12",
        "--location",
        "99",
    ])
    .assert()
    .failure()
    .stderr(contains("Referential integrity violation"));

    let conn = open(&db_path);
    assert_eq!(count_rows(&conn, "event"), 8);
}

#[test]
fn test_add_location_rejects_unknown_city() {
    let db_path = setup_test_db("add_loc_bad_city");

    init_seeded_db(&db_path);

    es().args([
        "--db",
        &db_path,
        "add",
        "location",
        "--name",
        "Gravensteen",
        "--latitude",
        "51.0573",
        "--longitude",
        "3.7208",
        "--city",
        "42",
    ])
    .assert()
    .failure()
    .stderr(contains("Referential integrity violation"));
}

#[test]
fn test_show_prints_event_details() {
    let db_path = setup_test_db("show_details");

    init_seeded_db(&db_path);

    es().args(["--db", &db_path, "show", "1"])
        .assert()
        .success()
        .stdout(contains("Spring Festival"))
        .stdout(contains("Eiffel Tower, Paris"))
        .stdout(contains("48.8584"))
        .stdout(contains("33 people"));
}

#[test]
fn test_show_unknown_event_fails() {
    let db_path = setup_test_db("show_unknown");

    init_seeded_db(&db_path);

    es().args(["--db", &db_path, "show", "999"])
        .assert()
        .failure()
        .stderr(contains("Event 999 not found"));
}

#[test]
fn test_interest_update_roundtrip() {
    let db_path = setup_test_db("interest_roundtrip");

    init_seeded_db(&db_path);

    es().args(["--db", &db_path, "interest", "1", "500"])
        .assert()
        .success();

    es().args(["--db", &db_path, "show", "1"])
        .assert()
        .success()
        .stdout(contains("Interested: 500 people"));
}

#[test]
fn test_interest_rejects_negative_count() {
    let db_path = setup_test_db("interest_negative");

    init_seeded_db(&db_path);

    es().args(["--db", &db_path, "interest", "1", "--", "-5"])
        .assert()
        .failure()
        .stderr(contains("Validation failed"));
}

#[test]
fn test_interest_unknown_event_fails() {
    let db_path = setup_test_db("interest_unknown");

    init_seeded_db(&db_path);

    es().args(["--db", &db_path, "interest", "999", "5"])
        .assert()
        .failure()
        .stderr(contains("Event 999 not found"));
}

#[test]
fn test_del_removes_stored_thumbnail() {
    let db_path = setup_test_db("del_thumbnail");

    init_seeded_db(&db_path);

    let conn = open(&db_path);
    let thumb = thumbnail_of(&conn, 1).expect("seeded event has a thumbnail");
    assert!(Path::new(&thumb).is_file());

    es().args(["--db", &db_path, "del", "1", "--yes"])
        .assert()
        .success()
        .stdout(contains("deleted"));

    assert!(!Path::new(&thumb).exists());
    assert_eq!(count_rows(&conn, "event"), 7);
}

#[test]
fn test_del_event_without_thumbnail_succeeds() {
    let db_path = setup_test_db("del_no_thumbnail");

    init_seeded_db(&db_path);

    es().args([
        "--db",
        &db_path,
        "add",
        "event",
        "--name",
        "Pop-up Reading",
        "--date",
        "2026-10-01",
        "--location",
        "6",
    ])
    .assert()
    .success();

    es().args(["--db", &db_path, "del", "9", "--yes"])
        .assert()
        .success();

    let conn = open(&db_path);
    assert_eq!(count_rows(&conn, "event"), 8);
}

#[test]
fn test_del_event_with_already_missing_thumbnail_succeeds() {
    let db_path = setup_test_db("del_missing_file");

    init_seeded_db(&db_path);

    let conn = open(&db_path);
    let thumb = thumbnail_of(&conn, 2).expect("seeded event has a thumbnail");
    fs::remove_file(&thumb).expect("remove thumbnail up front");

    es().args(["--db", &db_path, "del", "2", "--yes"])
        .assert()
        .success();
}

#[test]
fn test_del_unknown_event_fails() {
    let db_path = setup_test_db("del_unknown");

    init_seeded_db(&db_path);

    es().args(["--db", &db_path, "del", "999", "--yes"])
        .assert()
        .failure()
        .stderr(contains("Event 999 not found"));
}

#[test]
fn test_add_event_with_image_copies_file() {
    let db_path = setup_test_db("add_with_image");

    init_seeded_db(&db_path);

    // A picked "image" is just a file to copy; content does not matter here.
    let mut source = std::env::temp_dir();
    source.push("add_with_image_poster.jpg");
    fs::write(&source, b"not really a jpeg").expect("write source image");

    es().args([
        "--db",
        &db_path,
        "add",
        "event",
        "--name",
        "Poster Night",
        "--date",
        "2026-10-02",
        "--location",
        "2",
        "--image",
        &source.to_string_lossy(),
    ])
    .assert()
    .success();

    let conn = open(&db_path);
    let stored = thumbnail_of(&conn, 9).expect("imported image path stored");
    assert!(stored.starts_with(&format!("{}.images", db_path)));
    assert!(Path::new(&stored).is_file());
    // The original stays where the user picked it from.
    assert!(source.is_file());

    es().args(["--db", &db_path, "del", "9", "--yes"])
        .assert()
        .success();
    assert!(!Path::new(&stored).exists());
}

#[test]
fn test_add_event_with_missing_image_fails() {
    let db_path = setup_test_db("add_missing_image");

    init_seeded_db(&db_path);

    es().args([
        "--db",
        &db_path,
        "add",
        "event",
        "--name",
        "Poster Night",
        "--date",
        "2026-10-02",
        "--location",
        "2",
        "--image",
        "/nonexistent/poster.jpg",
    ])
    .assert()
    .failure()
    .stderr(contains("image file not found"));

    let conn = open(&db_path);
    assert_eq!(count_rows(&conn, "event"), 8);
}

#[test]
fn test_list_events_json_output() {
    let db_path = setup_test_db("list_json");

    init_seeded_db(&db_path);

    es().args(["--db", &db_path, "list", "events", "--json"])
        .assert()
        .success()
        .stdout(contains("\"interested_people\": 1312"))
        .stdout(contains("\"city_name\": \"Paris\""))
        .stdout(contains("NAME").not());
}

#[test]
fn test_list_locations_shows_city_names() {
    let db_path = setup_test_db("list_locations");

    init_seeded_db(&db_path);

    es().args(["--db", &db_path, "list", "locations"])
        .assert()
        .success()
        .stdout(contains("Eiffel Tower"))
        .stdout(contains("Paris"))
        .stdout(contains("-3.7074"));
}
