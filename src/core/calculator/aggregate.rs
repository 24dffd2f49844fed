use crate::core::calculator::duration::Span;
use crate::models::day_record::DayRecord;
use crate::models::day_summary::DaySummary;

/// Scheduled minutes: only `scheduled` days with both shift bounds count.
pub fn scheduled_minutes(record: &DayRecord) -> i64 {
    record
        .shift()
        .map(|(start, end)| Span::on(record.date, start, end).minutes())
        .unwrap_or(0)
}

/// Worked minutes and observed first-in / last-out across complete sessions.
pub fn summarize(record: &DayRecord) -> DaySummary {
    let mut worked = 0;
    let mut first: Option<Span> = None;
    let mut last: Option<Span> = None;

    for (start, end) in record.sessions.iter().filter_map(|s| s.bounds()) {
        let span = Span::on(record.date, start, end);
        worked += span.minutes();

        if first.is_none_or(|f| span.start < f.start) {
            first = Some(span);
        }
        if last.is_none_or(|l| span.end > l.end) {
            last = Some(span);
        }
    }

    DaySummary {
        scheduled_minutes: scheduled_minutes(record),
        worked_minutes: worked,
        first_in: first.map(|s| s.start.time()),
        last_out: last.map(|s| s.end.time()),
    }
}
