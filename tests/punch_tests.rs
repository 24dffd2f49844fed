mod common;
use common::{d, fields, fresh_store, record, t};
use serde_json::json;
use timewise::core::punch::{PunchFeedback, PunchLogic, PunchRequest};
use timewise::core::schedule::{DayPlan, ScheduleLogic};
use timewise::db::documents::{DocumentStore, load_day};
use timewise::db::paths::DayPath;
use timewise::errors::AppError;
use timewise::models::identity::Identity;
use timewise::models::punch_kind::PunchKind;
use timewise::models::session::Session;
use timewise::models::status::Status;

fn req(date: &str, time: &str) -> PunchRequest {
    PunchRequest {
        date: d(date),
        time: t(time),
        kind: None,
        notes: None,
        manager: None,
    }
}

#[test]
fn test_punch_toggles_in_then_out() {
    let mut pool = fresh_store();
    let me = Identity::user("u1");

    let first = PunchLogic::punch(&mut pool, &me, &req("2025-03-03", "15:00")).expect("in");
    assert_eq!(first.kind, PunchKind::In);

    let second = PunchLogic::punch(&mut pool, &me, &req("2025-03-03", "23:05")).expect("out");
    assert_eq!(second.kind, PunchKind::Out);

    let r = load_day(&pool, "u1", d("2025-03-03")).expect("load");
    assert_eq!(r.sessions, vec![Session::closed(t("15:00"), t("23:05"))]);
    assert_eq!(r.user_id.as_deref(), Some("u1"));
}

#[test]
fn test_punch_out_without_punch_in_fails() {
    let mut pool = fresh_store();
    let me = Identity::user("u1");

    let mut out = req("2025-03-03", "23:00");
    out.kind = Some(PunchKind::Out);

    let err = PunchLogic::punch(&mut pool, &me, &out).unwrap_err();
    assert!(matches!(err, AppError::NoOpenSession(day) if day == d("2025-03-03")));
    assert!(pool.get(&DayPath::new("u1", d("2025-03-03"))).expect("get").is_none());
}

#[test]
fn test_forced_punch_in_corrects_open_session() {
    let r = record("2025-03-03", None, None, &[]);
    let mut r2 = r.clone();
    r2.sessions = PunchLogic::apply(&r, PunchKind::In, t("15:00")).expect("first");

    let sessions = PunchLogic::apply(&r2, PunchKind::In, t("15:05")).expect("second");
    assert_eq!(sessions, vec![Session::open(t("15:05"))]);
}

#[test]
fn test_punch_in_after_closed_session_opens_another() {
    let r = record("2025-03-03", None, None, &[("09:00", "12:00")]);
    assert_eq!(PunchLogic::next_kind(&r), PunchKind::In);

    let sessions = PunchLogic::apply(&r, PunchKind::In, t("13:00")).expect("apply");
    assert_eq!(
        sessions,
        vec![Session::closed(t("09:00"), t("12:00")), Session::open(t("13:00"))]
    );
}

#[test]
fn test_feedback_against_shift() {
    let r = record("2025-03-03", Some(Status::Scheduled), Some(("15:00", "23:00")), &[]);

    assert_eq!(
        PunchLogic::feedback(&r, PunchKind::In, t("14:50")),
        Some(PunchFeedback::CameEarly)
    );
    assert_eq!(PunchLogic::feedback(&r, PunchKind::In, t("15:10")), None);

    let mut on_clock = r.clone();
    on_clock.sessions = vec![Session::open(t("15:00"))];
    assert_eq!(
        PunchLogic::feedback(&on_clock, PunchKind::Out, t("22:30")),
        Some(PunchFeedback::EarlyPunchOut)
    );
    assert_eq!(PunchLogic::feedback(&on_clock, PunchKind::Out, t("23:05")), None);

    let off = record("2025-03-03", Some(Status::OnCall), Some(("15:00", "23:00")), &[]);
    assert_eq!(PunchLogic::feedback(&off, PunchKind::In, t("10:00")), None);
}

#[test]
fn test_feedback_on_overnight_shift() {
    let mut r = record("2025-03-07", Some(Status::Scheduled), Some(("22:00", "02:00")), &[]);
    r.sessions = vec![Session::open(t("22:00"))];

    assert_eq!(
        PunchLogic::feedback(&r, PunchKind::Out, t("01:00")),
        Some(PunchFeedback::EarlyPunchOut)
    );
    assert_eq!(PunchLogic::feedback(&r, PunchKind::Out, t("02:30")), None);
}

#[test]
fn test_punch_keeps_schedule_and_existing_manager() {
    let mut pool = fresh_store();
    let me = Identity::user("u1");

    let mut plan = DayPlan::working(t("15:00"), t("23:00"));
    plan.notes = Some("inventory day".to_string());
    plan.manager = Some("Alex".to_string());
    ScheduleLogic::write_day(&mut pool, &me, d("2025-03-03"), &plan).expect("schedule");

    let mut punch = req("2025-03-03", "15:00");
    punch.notes = Some("   ".to_string());
    punch.manager = Some("Jordan".to_string());
    PunchLogic::punch(&mut pool, &me, &punch).expect("punch");

    let r = load_day(&pool, "u1", d("2025-03-03")).expect("load");
    assert_eq!(r.status, Some(Status::Scheduled));
    assert_eq!(r.shift(), Some((t("15:00"), t("23:00"))));
    assert_eq!(r.notes.as_deref(), Some("inventory day"));
    assert_eq!(r.manager.as_deref(), Some("Alex"));
    assert_eq!(r.sessions, vec![Session::open(t("15:00"))]);
}

#[test]
fn test_punch_out_on_legacy_record_writes_sessions() {
    let mut pool = fresh_store();
    let me = Identity::user("u1");
    let path = DayPath::new("u1", d("2025-03-03"));

    pool.merge(&path, fields(json!({ "inTime": "15:00", "outTime": "" })))
        .expect("legacy");

    let out = PunchLogic::punch(&mut pool, &me, &req("2025-03-03", "23:00")).expect("out");
    assert_eq!(out.kind, PunchKind::Out);

    let stored = pool.get(&path).expect("get").expect("document");
    assert_eq!(stored["sessions"], json!([{ "in": "15:00", "out": "23:00" }]));

    let r = load_day(&pool, "u1", d("2025-03-03")).expect("load");
    assert_eq!(r.sessions, vec![Session::closed(t("15:00"), t("23:00"))]);
}

#[test]
fn test_forced_punch_out_corrects_closed_session() {
    let r = record("2025-03-03", None, None, &[("15:00", "22:00")]);
    assert_eq!(PunchLogic::next_kind(&r), PunchKind::In);

    let sessions = PunchLogic::apply(&r, PunchKind::Out, t("23:10")).expect("apply");
    assert_eq!(sessions, vec![Session::closed(t("15:00"), t("23:10"))]);
}
