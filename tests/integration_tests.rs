use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{add_event, init_db, rcal, setup_test_db};

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("init_creates");

    rcal()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn test_list_shows_added_events_in_order() {
    let db_path = setup_test_db("list_in_order");
    init_db(&db_path);

    add_event(&db_path, "2025-03-11", "Second", "09:00", "10:00");
    add_event(&db_path, "2025-03-10", "First", "09:00", "10:00");

    let out = rcal()
        .args(["--db", &db_path, "list"])
        .output()
        .expect("run list");
    let stdout = String::from_utf8_lossy(&out.stdout);

    let first = stdout.find("First").expect("First listed");
    let second = stdout.find("Second").expect("Second listed");
    assert!(first < second);
    assert!(stdout.contains("2 event(s)"));
}

#[test]
fn test_list_filters_by_day_and_search() {
    let db_path = setup_test_db("list_filters");
    init_db(&db_path);

    add_event(&db_path, "2025-03-10", "Code review", "09:00", "10:00");
    add_event(&db_path, "2025-03-10", "Lunch", "12:00", "13:00");
    add_event(&db_path, "2025-03-11", "Design review", "09:00", "10:00");

    rcal()
        .args(["--db", &db_path, "list", "--day", "2025-03-10", "--search", "REVIEW"])
        .assert()
        .success()
        .stdout(
            contains("Code review")
                .and(contains("Lunch").not())
                .and(contains("Design review").not()),
        );
}

#[test]
fn test_list_empty_database() {
    let db_path = setup_test_db("list_empty");
    init_db(&db_path);

    rcal()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("No events found."));
}

#[test]
fn test_day_view_places_overlaps_side_by_side() {
    let db_path = setup_test_db("day_overlaps");
    init_db(&db_path);

    add_event(&db_path, "2025-03-10", "Alpha", "09:00", "10:00");
    add_event(&db_path, "2025-03-10", "Bravo", "09:30", "10:30");
    add_event(&db_path, "2025-03-10", "Charlie", "10:15", "11:00");

    rcal()
        .args(["--db", &db_path, "day", "2025-03-10"])
        .assert()
        .success()
        .stdout(
            contains("Alpha")
                .and(contains("Bravo"))
                .and(contains("Charlie"))
                .and(contains("47.5%"))
                .and(contains("95.0%"))
                .and(contains("720.0")),
        );
}

#[test]
fn test_day_view_filter_without_matches() {
    let db_path = setup_test_db("day_filter_none");
    init_db(&db_path);
    add_event(&db_path, "2025-03-10", "Alpha", "09:00", "10:00");

    rcal()
        .args(["--db", &db_path, "day", "2025-03-10", "--filter", "zzz"])
        .assert()
        .success()
        .stdout(contains("No events matching 'zzz' on 2025-03-10."));
}

#[test]
fn test_move_keeps_clock_times_by_default() {
    let db_path = setup_test_db("move_default_times");
    init_db(&db_path);
    let id = add_event(&db_path, "2025-03-10", "Planning", "14:00", "15:30");

    rcal()
        .args(["--db", &db_path, "move", &id, "2025-03-13"])
        .assert()
        .success()
        .stdout(contains("Moved event"));

    rcal()
        .args(["--db", &db_path, "list", "--day", "2025-03-13"])
        .assert()
        .success()
        .stdout(contains("Planning").and(contains("14:00 - 15:30")));

    rcal()
        .args(["--db", &db_path, "list", "--day", "2025-03-10"])
        .assert()
        .success()
        .stdout(contains("No events found."));
}

#[test]
fn test_move_with_confirmed_times() {
    let db_path = setup_test_db("move_new_times");
    init_db(&db_path);
    let id = add_event(&db_path, "2025-03-10", "Planning", "14:00", "15:30");

    rcal()
        .args([
            "--db", &db_path, "move", &id, "2025-03-13", "--start", "08:00", "--end", "08:45",
        ])
        .assert()
        .success();

    rcal()
        .args(["--db", &db_path, "show", &id])
        .assert()
        .success()
        .stdout(contains("2025-03-13 08:00").and(contains("2025-03-13 08:45")));
}

#[test]
fn test_move_unknown_event_fails() {
    let db_path = setup_test_db("move_unknown");
    init_db(&db_path);

    rcal()
        .args(["--db", &db_path, "move", "12345", "2025-03-13"])
        .assert()
        .failure()
        .stderr(contains("No event with id 12345"));
}

#[test]
fn test_del_with_yes_removes_event() {
    let db_path = setup_test_db("del_yes");
    init_db(&db_path);
    let id = add_event(&db_path, "2025-03-10", "Temporary", "09:00", "10:00");

    rcal()
        .args(["--db", &db_path, "del", &id, "--yes"])
        .assert()
        .success();

    rcal()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("No events found."));
}

#[test]
fn test_del_declined_keeps_event() {
    let db_path = setup_test_db("del_declined");
    init_db(&db_path);
    let id = add_event(&db_path, "2025-03-10", "Keeper", "09:00", "10:00");

    rcal()
        .args(["--db", &db_path, "del", &id])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Operation cancelled."));

    rcal()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("Keeper"));
}

#[test]
fn test_edit_updates_fields() {
    let db_path = setup_test_db("edit_fields");
    init_db(&db_path);
    let id = add_event(&db_path, "2025-03-10", "Draft", "09:00", "10:00");

    rcal()
        .args([
            "--db", &db_path, "edit", &id, "--name", "Final", "--desc", "agenda attached", "--type",
            "work",
        ])
        .assert()
        .success();

    rcal()
        .args(["--db", &db_path, "show", &id])
        .assert()
        .success()
        .stdout(contains("Final").and(contains("agenda attached")).and(contains("work")));
}

#[test]
fn test_add_rejects_bad_time() {
    let db_path = setup_test_db("add_bad_time");
    init_db(&db_path);

    rcal()
        .args(["--db", &db_path, "add", "2025-03-10", "--start", "9h"])
        .assert()
        .failure()
        .stderr(contains("Invalid time format"));
}

#[test]
fn test_month_view_shows_title_and_counts() {
    let db_path = setup_test_db("month_view");
    init_db(&db_path);
    add_event(&db_path, "2025-03-10", "Alpha", "09:00", "10:00");
    add_event(&db_path, "2025-03-10", "Bravo", "11:00", "12:00");

    rcal()
        .args(["--db", &db_path, "month", "2025-03"])
        .assert()
        .success()
        .stdout(contains("March 2025").and(contains("•2")).and(contains("Alpha")));
}

#[test]
fn test_log_records_operations() {
    let db_path = setup_test_db("log_ops");
    init_db(&db_path);
    add_event(&db_path, "2025-03-10", "Alpha", "09:00", "10:00");

    rcal()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("init").and(contains("Added 'Alpha'")));
}
