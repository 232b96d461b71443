use super::entry::LogEntry;
use chrono::NaiveDate;

/// Entries sharing one local calendar date, in their original order.
#[derive(Debug, Clone)]
pub struct DayGroup<'a> {
    pub date: NaiveDate,
    pub entries: Vec<&'a LogEntry>,
}

impl DayGroup<'_> {
    pub fn net(&self) -> i64 {
        self.entries.iter().map(|e| e.net_contribution()).sum()
    }
}

/// Intake/burn totals for a single day of the trend series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayAggregate {
    pub date: NaiveDate,
    pub intake: u64,
    pub burned: u64,
    pub net: i64,
}

impl DayAggregate {
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            intake: 0,
            burned: 0,
            net: 0,
        }
    }
}
