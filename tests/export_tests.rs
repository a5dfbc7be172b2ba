mod common;
use common::{add_event, event, init_db, rcal, setup_test_db, temp_out};
use rcalendar::config::Config;
use rcalendar::core::store::EventStore;
use rcalendar::export::{CSV_HEADERS, ExportFormat, ExportLogic};
use std::fs;

fn store_with_comma() -> EventStore {
    let mut lunch = event("5", "Lunch, team", "2025-03-10", "12:00", "13:00");
    lunch.description = Some("Pizza place".into());
    EventStore::from_events(vec![lunch])
}

#[test]
fn test_render_csv_quotes_fields_with_commas() {
    let cfg = Config::default();

    let csv = ExportLogic::render(&store_with_comma(), &cfg, ExportFormat::Csv).expect("render");
    let mut lines = csv.lines();

    assert_eq!(lines.next(), Some(CSV_HEADERS.join(",").as_str()));
    assert_eq!(
        lines.next(),
        Some("5,\"Lunch, team\",2025-03-10,12:00,2025-03-10,13:00,Pizza place,work")
    );
}

#[test]
fn test_render_csv_raw_mode_joins_cells() {
    let cfg = Config {
        csv_quoting: false,
        ..Config::default()
    };

    let csv = ExportLogic::render(&store_with_comma(), &cfg, ExportFormat::Csv).expect("render");

    assert_eq!(
        csv,
        "ID,Name,Start Date,Start Time,End Date,End Time,Description,Tag\n\
         5,Lunch, team,2025-03-10,12:00,2025-03-10,13:00,Pizza place,work"
    );
}

#[test]
fn test_render_csv_empty_store_has_header_only() {
    let cfg = Config {
        csv_quoting: false,
        ..Config::default()
    };

    let csv = ExportLogic::render(&EventStore::new(), &cfg, ExportFormat::Csv).expect("render");
    assert_eq!(csv, CSV_HEADERS.join(","));
}

#[test]
fn test_render_json_reads_back() {
    let cfg = Config::default();
    let store = store_with_comma();

    let json = ExportLogic::render(&store, &cfg, ExportFormat::Json).expect("render");
    let back = EventStore::from_json(&json).expect("parse");

    assert_eq!(back.events(), store.events());
}

#[test]
fn test_export_csv_via_cli() {
    let db_path = setup_test_db("export_csv_cli");
    init_db(&db_path);
    add_event(&db_path, "2025-03-10", "Standup", "09:00", "09:15");
    add_event(&db_path, "2025-03-12", "Demo", "15:00", "16:00");

    let out = temp_out("export_csv_cli", "csv");

    rcal()
        .args(["--db", &db_path, "export", "--format", "csv", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.starts_with("ID,Name,Start Date"));
    assert!(content.contains("Standup"));
    assert!(content.contains("2025-03-12"));
}

#[test]
fn test_export_json_via_cli() {
    let db_path = setup_test_db("export_json_cli");
    init_db(&db_path);
    let id = add_event(&db_path, "2025-03-10", "Standup", "09:00", "09:15");

    let out = temp_out("export_json_cli", "json");

    rcal()
        .args(["--db", &db_path, "export", "--format", "json", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let store = EventStore::from_json(&content).expect("valid json export");
    assert_eq!(store.len(), 1);
    assert!(store.get(&id).is_some());
}

#[test]
fn test_export_rejects_relative_path() {
    let db_path = setup_test_db("export_relative");
    init_db(&db_path);

    rcal()
        .args(["--db", &db_path, "export", "--file", "relative.csv"])
        .assert()
        .failure();
}

#[test]
fn test_export_existing_file_needs_force() {
    let db_path = setup_test_db("export_force");
    init_db(&db_path);
    add_event(&db_path, "2025-03-10", "Standup", "09:00", "09:15");

    let out = temp_out("export_force", "csv");
    fs::write(&out, "old").expect("seed file");

    rcal()
        .args(["--db", &db_path, "export", "--file", &out])
        .write_stdin("n\n")
        .assert()
        .failure();
    assert_eq!(fs::read_to_string(&out).expect("read"), "old");

    rcal()
        .args(["--db", &db_path, "export", "--file", &out, "--force"])
        .assert()
        .success();
    assert!(fs::read_to_string(&out).expect("read").contains("Standup"));
}
