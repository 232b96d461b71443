use lightlog::core::AppState;
use lightlog::core::export::{default_file_name, select_entries};
use lightlog::export::ExportFormat;
use lightlog::export::csv::{UTF8_BOM, write_csv};
use lightlog::export::json::write_json;
use lightlog::models::EntryType::{Diet, Workout};
use lightlog::models::LogEntry;
use predicates::str::contains;
use std::fs;

mod common;
use common::{at, at_hm, entry, init_db, init_db_with_data, lightlog, setup_test_db, temp_out};

fn sample_state() -> AppState {
    let mut run = entry("w1", Workout, 450, at_hm(2025, 6, 18, 7, 5));
    run.name = "Running".to_string();
    run.duration = Some(30);

    let mut rice = entry("d1", Diet, 116, at_hm(2025, 5, 31, 13, 0));
    rice.name = "Rice, steamed".to_string();

    AppState {
        entries: vec![run, rice],
        ..AppState::default()
    }
}

#[test]
fn csv_has_bom_header_and_rows_in_log_order() {
    let state = sample_state();
    let entries: Vec<&LogEntry> = state.entries.iter().collect();

    let mut buf = Vec::new();
    write_csv(&mut buf, &entries).unwrap();

    assert!(buf.starts_with(UTF8_BOM));
    let text = String::from_utf8(buf[UTF8_BOM.len()..].to_vec()).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], "Date,Type,Name,Calories(kcal),Duration(min)");
    assert_eq!(lines[1], "2025-06-18 07:05,Workout,Running,450,30");
    assert_eq!(lines[2], "2025-05-31 13:00,Diet,\"Rice, steamed\",116,0");
    assert_eq!(lines.len(), 3);
}

#[test]
fn json_keeps_persisted_shape() {
    let state = sample_state();
    let entries: Vec<&LogEntry> = state.entries.iter().collect();

    let mut buf = Vec::new();
    write_json(&mut buf, &entries).unwrap();

    let parsed: Vec<LogEntry> = serde_json::from_slice(&buf).unwrap();
    assert_eq!(parsed, state.entries);

    let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
    assert_eq!(value[0]["type"], "WORKOUT");
    assert_eq!(value[0]["duration"], 30);
    assert!(value[1].get("duration").is_none());
}

#[test]
fn range_filter_selects_matching_days() {
    let state = sample_state();

    let june = select_entries(&state, Some("2025-06")).unwrap();
    assert_eq!(june.len(), 1);
    assert_eq!(june[0].id, "w1");

    let spanning = select_entries(&state, Some("2025-05-31:2025-06-01")).unwrap();
    assert_eq!(spanning.len(), 1);
    assert_eq!(spanning[0].id, "d1");

    assert_eq!(select_entries(&state, Some("all")).unwrap().len(), 2);
    assert_eq!(select_entries(&state, None).unwrap().len(), 2);
    assert!(select_entries(&state, Some("2025-06:2025")).is_err());
}

#[test]
fn default_name_uses_the_day() {
    let day = at(2025, 10, 16).date_naive();
    assert_eq!(default_file_name(ExportFormat::Csv, day), "lightlog_2025-10-16.csv");
    assert_eq!(default_file_name(ExportFormat::Json, day), "lightlog_2025-10-16.json");
}

#[test]
fn test_export_csv_via_cli() {
    let db_path = setup_test_db("export_csv_cli");
    init_db_with_data(&db_path);
    let out = temp_out("export_csv_cli", "csv");

    lightlog()
        .args(["--db", &db_path, "export", "--file", &out])
        .assert()
        .success()
        .stdout(contains("3 entries written"));

    let bytes = fs::read(&out).unwrap();
    assert!(bytes.starts_with(UTF8_BOM));
    let text = String::from_utf8_lossy(&bytes[UTF8_BOM.len()..]).to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "Date,Type,Name,Calories(kcal),Duration(min)");
    // newest first
    assert!(lines[1].contains(",Workout,Running,300,30"));
    assert!(lines[3].contains(",Diet,Pasta,520,0"));
}

#[test]
fn test_export_json_via_cli() {
    let db_path = setup_test_db("export_json_cli");
    init_db_with_data(&db_path);
    let out = temp_out("export_json_cli", "json");

    lightlog()
        .args(["--db", &db_path, "export", "--format", "json", "--file", &out])
        .assert()
        .success();

    let parsed: Vec<LogEntry> = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(parsed.len(), 3);
    assert_eq!(parsed[2].name, "Pasta");
}

#[test]
fn test_export_nothing_creates_no_file() {
    let db_path = setup_test_db("export_empty_cli");
    init_db(&db_path);
    let out = temp_out("export_empty_cli", "csv");

    lightlog()
        .args(["--db", &db_path, "export", "--file", &out])
        .assert()
        .failure()
        .stderr(contains("No entries to export"));

    assert!(!std::path::Path::new(&out).exists());
}

#[test]
fn test_export_requires_absolute_path() {
    let db_path = setup_test_db("export_relative_cli");
    init_db_with_data(&db_path);

    lightlog()
        .args(["--db", &db_path, "export", "--file", "out.csv"])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn test_export_existing_file_needs_confirmation() {
    let db_path = setup_test_db("export_overwrite_cli");
    init_db_with_data(&db_path);
    let out = temp_out("export_overwrite_cli", "csv");
    fs::write(&out, "keep me").unwrap();

    lightlog()
        .args(["--db", &db_path, "export", "--file", &out])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("not overwritten"));
    assert_eq!(fs::read_to_string(&out).unwrap(), "keep me");

    lightlog()
        .args(["--db", &db_path, "export", "--file", &out, "--force"])
        .assert()
        .success();
    assert_ne!(fs::read_to_string(&out).unwrap(), "keep me");
}
