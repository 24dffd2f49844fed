#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveTime};
use serde_json::{Map, Value};
use std::env;
use std::fs;
use std::path::PathBuf;
use timewise::db::initialize::init_db;
use timewise::db::pool::DbPool;
use timewise::models::day_record::DayRecord;
use timewise::models::session::Session;
use timewise::models::status::Status;

pub fn tw() -> Command {
    cargo_bin_cmd!("timewise")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_timewise.sqlite", name));
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

/// Initialize a DB through the CLI (test mode, no config file written)
pub fn init_cli_db(db_path: &str) {
    tw().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Fresh in-memory store with the schema applied
pub fn fresh_store() -> DbPool {
    let pool = DbPool::in_memory().expect("open in-memory db");
    init_db(&pool.conn).expect("init db");
    pool
}

pub fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid date")
}

pub fn t(s: &str) -> NaiveTime {
    NaiveTime::parse_from_str(s, "%H:%M").expect("valid time")
}

/// Build a normalized record without going through the store
pub fn record(
    date: &str,
    status: Option<Status>,
    shift: Option<(&str, &str)>,
    sessions: &[(&str, &str)],
) -> DayRecord {
    let mut r = DayRecord::empty(d(date));
    r.status = status;
    if let Some((start, end)) = shift {
        r.start_time = Some(t(start));
        r.end_time = Some(t(end));
    }
    r.sessions = sessions
        .iter()
        .map(|(a, b)| Session::closed(t(a), t(b)))
        .collect();
    r
}

/// `json!` object literal as a field map
pub fn fields(v: Value) -> Map<String, Value> {
    match v {
        Value::Object(m) => m,
        other => panic!("expected a JSON object, got {other}"),
    }
}
