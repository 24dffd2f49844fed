mod common;
use common::{d, fields, fresh_store, t};
use serde_json::json;
use timewise::db::documents::{DocumentStore, load_day, load_week, merge_day};
use timewise::db::log::load_log;
use timewise::db::migrate::{applied_versions, run_pending_migrations};
use timewise::db::paths::{DayPath, WeekPath};
use timewise::errors::AppError;
use timewise::models::day_record::{DayDocument, DayRecord};
use timewise::models::session::Session;
use timewise::models::status::Status;

#[test]
fn test_paths_are_keyed_by_monday() {
    let p = DayPath::new("u1", d("2025-03-05"));
    assert_eq!(p.to_string(), "users/u1/weeks/2025-03-03/days/2025-03-05");

    // Sunday belongs to the week that started six days earlier
    let sunday = DayPath::new("u1", d("2025-03-09"));
    assert_eq!(sunday.week.week_id(), "2025-03-03");
    assert_eq!(
        WeekPath::containing("u1", d("2025-03-09")).to_string(),
        "users/u1/weeks/2025-03-03/days"
    );
}

#[test]
fn test_migrations_are_recorded_once() {
    let pool = fresh_store();
    let first = applied_versions(&pool.conn).expect("versions");
    assert_eq!(first.len(), 3);

    run_pending_migrations(&pool.conn).expect("rerun migrations");
    assert_eq!(applied_versions(&pool.conn).expect("versions"), first);
}

#[test]
fn test_merge_preserves_untouched_fields() {
    let mut pool = fresh_store();
    let path = DayPath::new("u1", d("2025-03-03"));

    pool.merge(
        &path,
        fields(json!({
            "status": "scheduled",
            "startTime": "15:00",
            "endTime": "23:00",
            "inTime": "15:02",
            "notes": "covering for Sam",
            "manager": "Alex"
        })),
    )
    .expect("first merge");

    pool.merge(&path, fields(json!({ "outTime": "23:05" })))
        .expect("second merge");

    let stored = pool.get(&path).expect("get").expect("document exists");
    assert_eq!(stored["outTime"], "23:05");
    assert_eq!(stored["inTime"], "15:02");
    assert_eq!(stored["notes"], "covering for Sam");
    assert_eq!(stored["manager"], "Alex");
    assert_eq!(stored["status"], "scheduled");
}

#[test]
fn test_merge_creates_user_and_logs() {
    let mut pool = fresh_store();
    merge_day(
        &mut pool,
        "u2",
        d("2025-03-10"),
        DayDocument::default().with_status(Status::OnCall),
    )
    .expect("merge");

    assert_eq!(pool.list_users().expect("users"), vec!["u2".to_string()]);
    assert_eq!(pool.list_weeks("u2").expect("weeks"), vec![d("2025-03-10")]);

    let log = load_log(&pool.conn).expect("log");
    let last = log.last().expect("log entry");
    assert_eq!(last.operation, "merge");
    assert_eq!(last.target, "users/u2/weeks/2025-03-10/days/2025-03-10");
}

#[test]
fn test_missing_document_loads_as_empty_record() {
    let pool = fresh_store();
    let r = load_day(&pool, "nobody", d("2025-03-03")).expect("load");
    assert_eq!(r, DayRecord::empty(d("2025-03-03")));
}

#[test]
fn test_legacy_pair_becomes_single_session() {
    let mut pool = fresh_store();
    pool.merge(
        &DayPath::new("u1", d("2025-03-03")),
        fields(json!({ "inTime": "15:00", "outTime": "23:00" })),
    )
    .expect("merge");

    let r = load_day(&pool, "u1", d("2025-03-03")).expect("load");
    assert_eq!(r.sessions, vec![Session::closed(t("15:00"), t("23:00"))]);
    assert_eq!(r.status, None);
}

#[test]
fn test_sessions_array_wins_even_when_empty() {
    let mut pool = fresh_store();
    pool.merge(
        &DayPath::new("u1", d("2025-03-03")),
        fields(json!({ "inTime": "15:00", "outTime": "23:00", "sessions": [] })),
    )
    .expect("merge");

    let r = load_day(&pool, "u1", d("2025-03-03")).expect("load");
    assert!(r.sessions.is_empty());
}

#[test]
fn test_blank_strings_decode_as_absent() {
    let mut pool = fresh_store();
    pool.merge(
        &DayPath::new("u1", d("2025-03-03")),
        fields(json!({
            "status": "scheduled",
            "startTime": "",
            "endTime": "23:00",
            "sessions": [{ "in": "15:00", "out": "" }],
            "notes": "   "
        })),
    )
    .expect("merge");

    let r = load_day(&pool, "u1", d("2025-03-03")).expect("load");
    assert_eq!(r.start_time, None);
    assert_eq!(r.shift(), None);
    assert_eq!(r.notes, None);
    assert_eq!(r.sessions, vec![Session::open(t("15:00"))]);
    assert!(r.open_session().is_some());
}

#[test]
fn test_unknown_status_is_rejected_and_skipped_in_week() {
    let mut pool = fresh_store();
    pool.merge(
        &DayPath::new("u1", d("2025-03-03")),
        fields(json!({ "status": "vacation" })),
    )
    .expect("merge bad");
    pool.merge(
        &DayPath::new("u1", d("2025-03-04")),
        fields(json!({ "status": "on_call" })),
    )
    .expect("merge good");

    let err = load_day(&pool, "u1", d("2025-03-03")).unwrap_err();
    assert!(matches!(err, AppError::Document { .. }));

    let week = load_week(&pool, &WeekPath::containing("u1", d("2025-03-03"))).expect("week");
    assert_eq!(week.len(), 1);
    assert_eq!(week[0].date, d("2025-03-04"));
    assert_eq!(week[0].status, Some(Status::OnCall));
}
