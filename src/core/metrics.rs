//! Derived metrics over a snapshot of the entry log.
//!
//! Every function here is pure and total: empty input, a zero target or
//! all-zero calories are all valid.

use crate::models::{DayAggregate, DayGroup, EntryType, LogEntry};
use chrono::{DateTime, Days, Local, NaiveDate};
use std::collections::HashMap;

/// Number of days covered by the trend series.
pub const TREND_DAYS: usize = 7;

/// Entries on or after local midnight of `now`'s day.
pub fn today_entries<'a>(entries: &'a [LogEntry], now: DateTime<Local>) -> Vec<&'a LogEntry> {
    let today = now.date_naive();
    entries.iter().filter(|e| e.local_date() >= today).collect()
}

fn sum_of<'a, I>(entries: I, kind: EntryType) -> u64
where
    I: IntoIterator<Item = &'a LogEntry>,
{
    entries
        .into_iter()
        .filter(|e| e.kind == kind)
        .map(|e| u64::from(e.calories))
        .sum()
}

pub fn today_intake<'a, I>(today: I) -> u64
where
    I: IntoIterator<Item = &'a LogEntry>,
{
    sum_of(today, EntryType::Diet)
}

pub fn today_burned<'a, I>(today: I) -> u64
where
    I: IntoIterator<Item = &'a LogEntry>,
{
    sum_of(today, EntryType::Workout)
}

/// `target - intake + burned`; negative means over budget.
pub fn remaining(target: i64, intake: u64, burned: u64) -> i64 {
    target
        .saturating_sub(clamp_i64(intake))
        .saturating_add(clamp_i64(burned))
}

/// Share of the target already consumed, clamped to `[0, 1]`.
///
/// A target of zero or below yields 0 when nothing net was eaten and 1
/// otherwise.
pub fn progress_fraction(intake: u64, burned: u64, target: i64) -> f64 {
    let numerator = clamp_i64(intake) - clamp_i64(burned);
    if target <= 0 {
        return if numerator <= 0 { 0.0 } else { 1.0 };
    }
    (numerator as f64 / target as f64).clamp(0.0, 1.0)
}

/// Group entries by local calendar date.
///
/// Groups appear in first-occurrence order of their date in `entries` and
/// keep the entries' relative order, so a newest-first log gives
/// newest-first days.
pub fn group_by_calendar_day<'a, I>(entries: I) -> Vec<DayGroup<'a>>
where
    I: IntoIterator<Item = &'a LogEntry>,
{
    let mut groups: Vec<DayGroup<'a>> = Vec::new();
    let mut index: HashMap<NaiveDate, usize> = HashMap::new();

    for entry in entries {
        let date = entry.local_date();
        match index.get(&date) {
            Some(&i) => groups[i].entries.push(entry),
            None => {
                index.insert(date, groups.len());
                groups.push(DayGroup {
                    date,
                    entries: vec![entry],
                });
            }
        }
    }

    groups
}

/// Intake/burn/net for each of the seven days ending at `now`, oldest first.
pub fn trailing_7_day_aggregate(
    entries: &[LogEntry],
    now: DateTime<Local>,
) -> [DayAggregate; TREND_DAYS] {
    let today = now.date_naive();
    let mut series: [DayAggregate; TREND_DAYS] = std::array::from_fn(|i| {
        let back = (TREND_DAYS - 1 - i) as u64;
        DayAggregate::empty(today.checked_sub_days(Days::new(back)).unwrap_or(today))
    });

    for entry in entries {
        let date = entry.local_date();
        if let Some(day) = series.iter_mut().find(|d| d.date == date) {
            match entry.kind {
                EntryType::Diet => day.intake += u64::from(entry.calories),
                EntryType::Workout => day.burned += u64::from(entry.calories),
            }
        }
    }

    for day in series.iter_mut() {
        day.net = clamp_i64(day.intake) - clamp_i64(day.burned);
    }

    series
}

/// Mean intake over the series; empty days count as zero.
pub fn average_intake(series: &[DayAggregate; TREND_DAYS]) -> f64 {
    let total: u64 = series.iter().map(|d| d.intake).sum();
    total as f64 / TREND_DAYS as f64
}

/// Rounded average minus target: positive when over.
pub fn average_vs_target(average: f64, target: i64) -> i64 {
    (average.round() as i64).saturating_sub(target)
}

/// Everything the home view needs for the current day.
#[derive(Debug, Clone)]
pub struct DailySummary<'a> {
    pub date: NaiveDate,
    pub entries: Vec<&'a LogEntry>,
    pub intake: u64,
    pub burned: u64,
    pub target: i64,
    pub remaining: i64,
    pub progress: f64,
}

impl DailySummary<'_> {
    pub fn is_over(&self) -> bool {
        self.remaining < 0
    }
}

pub fn daily_summary(entries: &[LogEntry], target: i64, now: DateTime<Local>) -> DailySummary<'_> {
    let today = today_entries(entries, now);
    let intake = today_intake(today.iter().copied());
    let burned = today_burned(today.iter().copied());

    DailySummary {
        date: now.date_naive(),
        intake,
        burned,
        target,
        remaining: remaining(target, intake, burned),
        progress: progress_fraction(intake, burned, target),
        entries: today,
    }
}

fn clamp_i64(v: u64) -> i64 {
    i64::try_from(v).unwrap_or(i64::MAX)
}
