mod common;
use common::{init_cli_db, setup_test_db, temp_out, tw};
use predicates::str::contains;
use std::fs;

/// One user's March: a worked shift in the first half, a day off in the second.
fn seed(db_path: &str) {
    init_cli_db(db_path);

    tw().args([
        "--db", db_path, "--user", "u1", "schedule", "day", "2025-03-03", "--shift",
        "15:00-23:00", "--session", "15:00-23:05", "--notes", "truck late",
    ])
    .assert()
    .success();

    tw().args([
        "--db", db_path, "--user", "u1", "schedule", "day", "2025-03-18", "--status", "na",
    ])
    .assert()
    .success();
}

#[test]
fn test_export_csv_month() {
    let db_path = setup_test_db("export_csv_month");
    seed(&db_path);
    let out = temp_out("export_csv_month", "csv");

    tw().args([
        "--db", &db_path, "--user", "u1", "export", "--format", "csv", "--file", &out,
        "--month", "2025-03",
    ])
    .assert()
    .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.starts_with("half,user_id,date,day,start,end"));
    assert!(content.contains("2025-03-03"));
    assert!(content.contains("8:05"));
    assert!(content.contains("truck late"));
    assert!(content.contains("NOT AVAILABLE"));
}

#[test]
fn test_export_json_has_halves_and_totals() {
    let db_path = setup_test_db("export_json_month");
    seed(&db_path);
    let out = temp_out("export_json_month", "json");

    tw().args([
        "--db", &db_path, "--user", "u1", "export", "--format", "json", "--file", &out,
        "--month", "2025-03",
    ])
    .assert()
    .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let v: serde_json::Value = serde_json::from_str(&content).expect("valid json");

    assert_eq!(v["month"], "2025-03");
    assert_eq!(v["halves"].as_array().map(Vec::len), Some(2));
    assert_eq!(v["halves"][0]["completed_total"], "8:05");
    assert_eq!(v["halves"][0]["scheduled_total"], "8:00");
    assert_eq!(v["halves"][1]["rows"][0]["schedule_start"], "NOT AVAILABLE");
    assert_eq!(v["halves"][1]["rows"][0]["punch_in"], "N/A");
}

#[test]
fn test_export_xlsx_creates_file() {
    let db_path = setup_test_db("export_xlsx_month");
    seed(&db_path);
    let out = temp_out("export_xlsx_month", "xlsx");

    tw().args([
        "--db", &db_path, "--user", "u1", "export", "--format", "xlsx", "--file", &out,
        "--month", "2025-03",
    ])
    .assert()
    .success();

    let meta = fs::metadata(&out).expect("xlsx written");
    assert!(meta.len() > 0);
}

#[test]
fn test_export_empty_month_writes_nothing() {
    let db_path = setup_test_db("export_empty_month");
    seed(&db_path);
    let out = temp_out("export_empty_month", "csv");

    tw().args([
        "--db", &db_path, "--user", "u1", "export", "--format", "csv", "--file", &out,
        "--month", "2024-01",
    ])
    .assert()
    .success()
    .stdout(contains("No records found"));

    assert!(!std::path::Path::new(&out).exists());
}

#[test]
fn test_export_requires_absolute_path() {
    let db_path = setup_test_db("export_relative");
    seed(&db_path);

    tw().args([
        "--db", &db_path, "--user", "u1", "export", "--file", "relative.csv", "--month",
        "2025-03",
    ])
    .assert()
    .failure()
    .stderr(contains("must be absolute"));
}

#[test]
fn test_export_force_overwrites() {
    let db_path = setup_test_db("export_force");
    seed(&db_path);
    let out = temp_out("export_force", "csv");
    fs::write(&out, "stale").expect("write stale file");

    tw().args([
        "--db", &db_path, "--user", "u1", "export", "--file", &out, "--month", "2025-03",
        "--force",
    ])
    .assert()
    .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.contains("2025-03-03"));
}

#[test]
fn test_backup_compressed() {
    let db_path = setup_test_db("backup_compressed");
    seed(&db_path);
    let out = temp_out("backup_compressed", "sqlite");
    let zip = temp_out("backup_compressed", "zip");

    tw().args(["--db", &db_path, "backup", "--file", &out, "--compress", "--force"])
        .assert()
        .success()
        .stdout(contains("Compressed"));

    assert!(std::path::Path::new(&zip).exists());
    assert!(!std::path::Path::new(&out).exists());
}
