//! Period totals over many day records.

use crate::core::calculator::aggregate::summarize;
use crate::models::day_record::DayRecord;
use crate::models::day_summary::DaySummary;
use crate::utils::date::week_start;
use chrono::{Datelike, NaiveDate};
use std::collections::BTreeMap;

/// Last day of the month that still belongs to the first timesheet half.
pub const FIRST_HALF_LAST_DAY: u32 = 15;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PeriodTotals {
    pub scheduled_minutes: i64,
    pub worked_minutes: i64,
}

impl PeriodTotals {
    pub fn add(&mut self, day: &DaySummary) {
        self.scheduled_minutes += day.scheduled_minutes;
        self.worked_minutes += day.worked_minutes;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum HalfMonth {
    First,
    Second,
}

impl HalfMonth {
    pub fn of(date: NaiveDate) -> Self {
        if date.day() <= FIRST_HALF_LAST_DAY {
            HalfMonth::First
        } else {
            HalfMonth::Second
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            HalfMonth::First => "1 – 15",
            HalfMonth::Second => "16 – End",
        }
    }
}

/// Grouping key for period totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Period {
    Half(HalfMonth),
    Week(NaiveDate),
}

impl Period {
    pub fn half_month(date: NaiveDate) -> Self {
        Period::Half(HalfMonth::of(date))
    }

    pub fn week(date: NaiveDate) -> Self {
        Period::Week(week_start(date))
    }
}

pub fn sum<'a, I>(records: I) -> PeriodTotals
where
    I: IntoIterator<Item = &'a DayRecord>,
{
    let mut totals = PeriodTotals::default();
    for r in records {
        totals.add(&summarize(r));
    }
    totals
}

/// Totals partitioned by `key`. Scheduled and worked minutes are summed
/// independently, so a record lacking one still contributes the other.
pub fn sum_by<'a, I, F>(records: I, key: F) -> BTreeMap<Period, PeriodTotals>
where
    I: IntoIterator<Item = &'a DayRecord>,
    F: Fn(NaiveDate) -> Period,
{
    let mut out: BTreeMap<Period, PeriodTotals> = BTreeMap::new();
    for r in records {
        out.entry(key(r.date)).or_default().add(&summarize(r));
    }
    out
}
