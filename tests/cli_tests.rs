use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{init_cli_db, setup_test_db, tw};

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("cli_init");

    tw().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn test_commands_require_a_user() {
    let db_path = setup_test_db("cli_no_user");
    init_cli_db(&db_path);

    tw().env("HOME", std::env::temp_dir())
        .args(["--db", &db_path, "week", "--week", "2025-03-03"])
        .assert()
        .failure()
        .stderr(contains("Not authenticated"));
}

#[test]
fn test_schedule_punch_and_week_view() {
    let db_path = setup_test_db("cli_punch_week");
    init_cli_db(&db_path);

    tw().args([
        "--db", &db_path, "--user", "u1", "schedule", "week", "2025-03-05", "--shift",
        "15:00-23:00", "--on-call", "sat", "--off", "sun",
    ])
    .assert()
    .success()
    .stdout(contains("Saved schedule for 7 day(s)"));

    tw().args([
        "--db", &db_path, "--user", "u1", "punch", "--date", "2025-03-03", "--at", "14:50",
    ])
    .assert()
    .success()
    .stdout(contains("Punched in at 14:50").and(contains("You came early")));

    tw().args([
        "--db", &db_path, "--user", "u1", "punch", "--date", "2025-03-03", "--at", "22:30",
    ])
    .assert()
    .success()
    .stdout(contains("Punched out at 22:30").and(contains("Early punch out")));

    tw().args(["--db", &db_path, "--user", "u1", "week", "--week", "2025-03-06"])
        .assert()
        .success()
        .stdout(contains("Monday"))
        .stdout(contains("On Call"))
        .stdout(contains("Not Available"))
        .stdout(contains("Scheduled Hours: 40.00 hrs (40:00)"))
        .stdout(contains("Worked Hours:    7.67 hrs (7:40)"));
}

#[test]
fn test_punch_out_without_punch_in_fails() {
    let db_path = setup_test_db("cli_punch_out_first");
    init_cli_db(&db_path);

    tw().args([
        "--db", &db_path, "--user", "u1", "punch", "--out", "--date", "2025-03-03", "--at",
        "23:00",
    ])
    .assert()
    .failure()
    .stderr(contains("Failed to punch. Try again."));
}

#[test]
fn test_schedule_day_with_sessions_and_timesheet() {
    let db_path = setup_test_db("cli_timesheet");
    init_cli_db(&db_path);

    tw().args([
        "--db", &db_path, "--user", "u1", "schedule", "day", "2025-03-07", "--shift",
        "22:00-02:00", "--session", "22:00-02:00", "--manager", "Alex",
    ])
    .assert()
    .success();

    tw().args([
        "--db", &db_path, "--user", "u1", "schedule", "day", "2025-03-20", "--status",
        "on-call",
    ])
    .assert()
    .success();

    tw().args(["--db", &db_path, "--user", "u1", "timesheet", "--month", "2025-03"])
        .assert()
        .success()
        .stdout(contains("1 – 15"))
        .stdout(contains("16 – End"))
        .stdout(contains("7-Mar"))
        .stdout(contains("ON CALL"))
        .stdout(contains("Alex"))
        .stdout(contains("4:00"));
}

#[test]
fn test_invalid_inputs_are_rejected() {
    let db_path = setup_test_db("cli_invalid");
    init_cli_db(&db_path);

    tw().args([
        "--db", &db_path, "--user", "u1", "schedule", "day", "2025-03-07", "--status", "holiday",
    ])
    .assert()
    .failure()
    .stderr(contains("Invalid status"));

    tw().args([
        "--db", &db_path, "--user", "u1", "schedule", "week", "2025-03-07", "--shift", "15-23",
    ])
    .assert()
    .failure()
    .stderr(contains("Invalid shift"));

    tw().args(["--db", &db_path, "--user", "u1", "timesheet", "--month", "March"])
        .assert()
        .failure()
        .stderr(contains("Invalid month"));
}

#[test]
fn test_log_lists_merges() {
    let db_path = setup_test_db("cli_log");
    init_cli_db(&db_path);

    tw().args([
        "--db", &db_path, "--user", "u1", "schedule", "day", "2025-03-07", "--status", "na",
    ])
    .assert()
    .success();

    tw().args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("merge"))
        .stdout(contains("migration_applied"));
}
