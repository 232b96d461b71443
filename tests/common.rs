#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, Local, TimeZone};
use lightlog::models::{EntryType, LogEntry};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn lightlog() -> Command {
    cargo_bin_cmd!("lightlog")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_lightlog.sqlite", name));
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

/// Initialize a fresh test DB
pub fn init_db(db_path: &str) {
    lightlog()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Initialize DB and log a small day: two meals and one workout
pub fn init_db_with_data(db_path: &str) {
    init_db(db_path);

    lightlog()
        .args(["--db", db_path, "add", "diet", "Pasta", "520"])
        .assert()
        .success();

    lightlog()
        .args(["--db", db_path, "add", "diet", "Apple", "52"])
        .assert()
        .success();

    lightlog()
        .args([
            "--db",
            db_path,
            "add",
            "workout",
            "Running",
            "300",
            "--duration",
            "30",
        ])
        .assert()
        .success();
}

/// Local noon of the given day; noon keeps tests clear of DST switches.
pub fn at(y: i32, m: u32, d: u32) -> DateTime<Local> {
    at_hm(y, m, d, 12, 0)
}

pub fn at_hm(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Local> {
    Local.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
}

pub fn entry(id: &str, kind: EntryType, calories: u32, ts: DateTime<Local>) -> LogEntry {
    LogEntry {
        id: id.to_string(),
        name: format!("{} {}", kind.label(), id),
        calories,
        kind,
        timestamp: ts,
        duration: None,
    }
}
