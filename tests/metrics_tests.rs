use lightlog::core::metrics::{
    self, TREND_DAYS, average_intake, average_vs_target, daily_summary, group_by_calendar_day,
    progress_fraction, remaining, today_entries, trailing_7_day_aggregate,
};
use lightlog::models::EntryType::{Diet, Workout};
use lightlog::models::LogEntry;

mod common;
use common::{at, at_hm, entry};

#[test]
fn balance_of_a_mixed_day() {
    let now = at_hm(2025, 3, 10, 20, 0);
    let entries = vec![
        entry("w1", Workout, 200, at_hm(2025, 3, 10, 18, 0)),
        entry("d1", Diet, 500, at_hm(2025, 3, 10, 8, 0)),
    ];

    let summary = daily_summary(&entries, 2000, now);
    assert_eq!(summary.intake, 500);
    assert_eq!(summary.burned, 200);
    assert_eq!(summary.remaining, 1700);
    assert!((summary.progress - 0.15).abs() < 1e-9);
    assert!(!summary.is_over());
}

#[test]
fn empty_log_keeps_full_target() {
    let summary = daily_summary(&[], 2000, at(2025, 3, 10));
    assert_eq!(summary.intake, 0);
    assert_eq!(summary.burned, 0);
    assert_eq!(summary.remaining, 2000);
    assert_eq!(summary.progress, 0.0);
    assert!(summary.entries.is_empty());
}

#[test]
fn over_target_goes_negative_and_progress_saturates() {
    let now = at(2025, 3, 10);
    let entries = vec![entry("d1", Diet, 2600, now)];

    let summary = daily_summary(&entries, 2000, now);
    assert_eq!(summary.remaining, -600);
    assert_eq!(summary.progress, 1.0);
    assert!(summary.is_over());
}

#[test]
fn more_burned_than_eaten_clamps_progress_to_zero() {
    assert_eq!(progress_fraction(100, 400, 2000), 0.0);
    assert_eq!(remaining(2000, 100, 400), 2300);
}

#[test]
fn zero_or_negative_target_does_not_divide() {
    assert_eq!(progress_fraction(0, 0, 0), 0.0);
    assert_eq!(progress_fraction(300, 0, 0), 1.0);
    assert_eq!(progress_fraction(300, 0, -50), 1.0);
    assert_eq!(remaining(0, 300, 0), -300);
}

#[test]
fn today_excludes_yesterday_late_night() {
    let now = at_hm(2025, 3, 10, 9, 0);
    let entries = vec![
        entry("today", Diet, 100, at_hm(2025, 3, 10, 0, 5)),
        entry("yesterday", Diet, 900, at_hm(2025, 3, 9, 23, 55)),
    ];

    let today = today_entries(&entries, now);
    assert_eq!(today.len(), 1);
    assert_eq!(today[0].id, "today");
    assert_eq!(metrics::today_intake(today.iter().copied()), 100);
}

#[test]
fn grouping_partitions_entries_by_day() {
    let entries = vec![
        entry("c", Diet, 300, at_hm(2025, 3, 10, 19, 0)),
        entry("b", Workout, 200, at_hm(2025, 3, 10, 7, 0)),
        entry("a", Diet, 400, at(2025, 3, 8)),
    ];

    let groups = group_by_calendar_day(&entries);
    assert_eq!(groups.len(), 2);

    assert_eq!(groups[0].date, at(2025, 3, 10).date_naive());
    let ids: Vec<&str> = groups[0].entries.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, ["c", "b"]);
    assert_eq!(groups[0].net(), 100);

    assert_eq!(groups[1].date, at(2025, 3, 8).date_naive());
    assert_eq!(groups[1].entries.len(), 1);

    let total: usize = groups.iter().map(|g| g.entries.len()).sum();
    assert_eq!(total, entries.len());
}

#[test]
fn grouping_empty_log_gives_no_groups() {
    let entries: Vec<LogEntry> = Vec::new();
    assert!(group_by_calendar_day(&entries).is_empty());
}

#[test]
fn trend_always_has_seven_consecutive_days() {
    let now = at(2025, 3, 10);
    let series = trailing_7_day_aggregate(&[], now);

    assert_eq!(series.len(), TREND_DAYS);
    assert_eq!(series[0].date, at(2025, 3, 4).date_naive());
    assert_eq!(series[6].date, now.date_naive());
    for pair in series.windows(2) {
        assert_eq!(pair[0].date.succ_opt(), Some(pair[1].date));
    }
    assert!(series.iter().all(|d| d.intake == 0 && d.burned == 0 && d.net == 0));
}

#[test]
fn trend_buckets_entries_and_ignores_older_ones() {
    let now = at(2025, 3, 10);
    let entries = vec![
        entry("today-diet", Diet, 1800, now),
        entry("today-run", Workout, 300, now),
        entry("three-days-ago", Diet, 2100, at(2025, 3, 7)),
        entry("too-old", Diet, 5000, at(2025, 3, 3)),
    ];

    let series = trailing_7_day_aggregate(&entries, now);
    assert_eq!(series[6].intake, 1800);
    assert_eq!(series[6].burned, 300);
    assert_eq!(series[6].net, 1500);
    assert_eq!(series[3].intake, 2100);
    assert_eq!(series.iter().map(|d| d.intake).sum::<u64>(), 3900);
}

#[test]
fn average_counts_empty_days_as_zero() {
    let now = at(2025, 3, 10);
    let entries = vec![entry("d", Diet, 1400, now), entry("e", Diet, 700, at(2025, 3, 5))];

    let series = trailing_7_day_aggregate(&entries, now);
    let avg = average_intake(&series);
    assert!((avg - 300.0).abs() < 1e-9);
    assert_eq!(average_vs_target(avg, 2000), -1700);
    assert_eq!(average_vs_target(2100.4, 2000), 100);
}

#[test]
fn extreme_targets_never_overflow() {
    let now = at(2025, 3, 10);
    let entries = vec![entry("d", Diet, 500, now), entry("w", Workout, 800, now)];
    let series = trailing_7_day_aggregate(&entries, now);
    let avg = average_intake(&series);

    for target in [i64::MIN, i64::MIN + 1, -1, i64::MAX] {
        let summary = daily_summary(&entries, target, now);
        assert!((0.0..=1.0).contains(&summary.progress));
        let _ = average_vs_target(avg, target);
    }

    assert_eq!(average_vs_target(0.0, i64::MIN), i64::MAX);
    assert_eq!(average_vs_target(500.0, i64::MAX), 500 - i64::MAX);
    assert_eq!(remaining(i64::MIN, 500, 0), i64::MIN);
    assert_eq!(remaining(i64::MAX, 0, 800), i64::MAX);
}
