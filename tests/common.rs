#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveDateTime};
use rcalendar::models::event::Event;
use rcalendar::models::event_type::EventType;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rcal() -> Command {
    cargo_bin_cmd!("rcalendar")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rcalendar.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Create the schema without touching the user's config file
pub fn init_db(db_path: &str) {
    rcal()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Add an event through the CLI and return the id printed by `add`
pub fn add_event(db_path: &str, date: &str, name: &str, start: &str, end: &str) -> String {
    let output = rcal()
        .args([
            "--db", db_path, "add", date, "--name", name, "--start", start, "--end", end,
        ])
        .output()
        .expect("run add");
    assert!(output.status.success(), "add failed: {:?}", output);

    let stdout = String::from_utf8_lossy(&output.stdout);
    let after = stdout
        .split_once("Added event #")
        .map(|(_, rest)| rest)
        .expect("id in add output");
    after.chars().take_while(|c| c.is_ascii_digit()).collect()
}

pub fn at(date: &str, time: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(&format!("{date} {time}"), "%Y-%m-%d %H:%M").expect("datetime")
}

pub fn day(date: &str) -> NaiveDate {
    NaiveDate::parse_from_str(date, "%Y-%m-%d").expect("date")
}

/// Build a stored event directly, bypassing id generation
pub fn event(id: &str, name: &str, date: &str, start: &str, end: &str) -> Event {
    Event {
        id: id.to_string(),
        name: name.to_string(),
        start_time: at(date, start),
        end_time: at(date, end),
        description: None,
        kind: Some(EventType::Work),
    }
}

pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
