//! Text views. Each one is a plain function of the latest state snapshot.

use crate::config::Config;
use crate::core::metrics::{self, DailySummary, TREND_DAYS};
use crate::core::presets::presets_for;
use crate::core::state::{AppState, StateChange, StateObserver};
use crate::models::{DayAggregate, DayGroup, EntryType, LogEntry};
use crate::ui::messages::{note, success};
use crate::utils::colors::{GREEN, GREY, RED, RESET, YELLOW, color_for_balance, color_for_kind, paint};
use crate::utils::date::{format_day, weekday_short};
use crate::utils::formatting::{
    balance_label, bold, minutes_label, progress_bar, scaled_bar, signed_delta,
};
use crate::utils::table::{Cell, Column, Table};
use chrono::Local;

const PROGRESS_WIDTH: usize = 30;

fn entries_table(entries: &[&LogEntry], with_id: bool) -> Table {
    let mut columns = Vec::new();
    if with_id {
        columns.push(Column::left("ID"));
    }
    columns.extend([
        Column::left("Time"),
        Column::left("Type"),
        Column::left("Name"),
        Column::right("kcal"),
        Column::right("Duration"),
    ]);

    let mut table = Table::new(columns);
    for e in entries {
        let mut row = Vec::new();
        if with_id {
            row.push(Cell::colored(short_id(&e.id), GREY));
        }
        row.extend([
            Cell::plain(e.time_str()),
            Cell::colored(e.kind.label(), color_for_kind(e.kind)),
            Cell::plain(e.name.clone()),
            Cell::colored(e.signed_calories(), color_for_kind(e.kind)),
            Cell::plain(minutes_label(e.duration)),
        ]);
        table.add_row(row);
    }
    table
}

/// First block of the UUID; enough to recognise an entry in a list.
pub fn short_id(id: &str) -> String {
    id.split('-').next().unwrap_or(id).to_string()
}

/// Home view: balance, totals, progress and today's entries.
pub fn render_today(summary: &DailySummary<'_>, cfg: &Config) -> String {
    let mut out = String::new();
    let (amount, label) = balance_label(summary.remaining);
    let color = color_for_balance(summary.remaining);

    out.push_str(&format!(
        "{}\n\n",
        bold(&format!("Today, {}", format_day(summary.date, cfg.show_weekday)))
    ));
    out.push_str(&format!("  {color}{amount}{RESET} {label}\n"));
    out.push_str(&format!(
        "  {}\n\n",
        paint(&progress_bar(summary.progress, PROGRESS_WIDTH), color)
    ));
    out.push_str(&format!(
        "  Intake: {GREEN}{}{RESET}   Burned: {YELLOW}{}{RESET}   Target: {}\n\n",
        summary.intake, summary.burned, summary.target
    ));

    if summary.entries.is_empty() {
        out.push_str(&format!("  {GREY}No entries yet. Start logging your day.{RESET}\n"));
    } else {
        out.push_str(&format!("Today's entries ({}):\n", summary.entries.len()));
        out.push_str(&entries_table(&summary.entries, true).render());
    }
    out
}

/// History view: entries grouped by local calendar day.
pub fn render_history(groups: &[DayGroup<'_>], cfg: &Config) -> String {
    if groups.is_empty() {
        return format!("{GREY}No entries recorded yet.{RESET}\n");
    }

    let mut out = String::new();
    for group in groups {
        let net = group.net();
        out.push_str(&format!(
            "{}  {GREY}{} entries, net {net} kcal{RESET}\n",
            bold(&format_day(group.date, cfg.show_weekday)),
            group.entries.len()
        ));
        out.push_str(&cfg.separator(40));
        out.push('\n');
        out.push_str(&entries_table(&group.entries, true).render());
        out.push('\n');
    }
    out
}

/// Trend view: last seven days, oldest first, with text bars.
pub fn render_trend(series: &[DayAggregate; TREND_DAYS], target: i64, cfg: &Config) -> String {
    let max = series
        .iter()
        .flat_map(|d| [d.intake, d.burned])
        .chain(std::iter::once(u64::try_from(target).unwrap_or(0)))
        .max()
        .unwrap_or(0);

    let mut table = Table::new(vec![
        Column::left("Day"),
        Column::left("Date"),
        Column::right("Intake"),
        Column::right("Burned"),
        Column::right("Net"),
        Column::left("Intake chart"),
        Column::left("Burned chart"),
    ]);

    for day in series {
        table.add_row(vec![
            Cell::plain(weekday_short(day.date)),
            Cell::plain(day.date.format("%m-%d").to_string()),
            Cell::colored(day.intake.to_string(), GREEN),
            Cell::colored(day.burned.to_string(), YELLOW),
            Cell::plain(day.net.to_string()),
            Cell::colored(scaled_bar(day.intake, max, cfg.bar_width, '█'), GREEN),
            Cell::colored(scaled_bar(day.burned, max, cfg.bar_width, '░'), YELLOW),
        ]);
    }

    let avg = metrics::average_intake(series);
    let delta = metrics::average_vs_target(avg, target);
    let delta_color = if delta > 0 { RED } else { GREEN };

    let mut out = String::new();
    out.push_str(&format!("{}\n\n", bold("Last 7 days")));
    out.push_str(&table.render());
    out.push('\n');
    out.push_str(&format!(
        "  Average daily intake: {} kcal\n",
        avg.round() as i64
    ));
    out.push_str(&format!(
        "  Versus target ({}): {}\n",
        target,
        paint(&signed_delta(delta), delta_color)
    ));
    out
}

pub fn render_settings(state: &AppState) -> String {
    let avatar = if state.settings.has_embedded_avatar() {
        format!("embedded image ({} bytes)", state.settings.avatar.len())
    } else {
        state.settings.avatar.clone()
    };

    format!(
        "{}\n  Daily target : {} kcal\n  Avatar       : {}\n  Reminders    : {}\n  Entries      : {}\n",
        bold("Settings"),
        state.target,
        avatar,
        if state.settings.reminders_enabled { "on" } else { "off" },
        state.entries.len()
    )
}

pub fn render_presets() -> String {
    let mut out = String::new();
    for kind in [EntryType::Diet, EntryType::Workout] {
        let mut table = Table::new(vec![
            Column::left("Preset"),
            Column::right("kcal"),
            Column::right("Duration"),
        ]);
        for p in presets_for(kind) {
            table.add_row(vec![
                Cell::plain(p.label),
                Cell::colored(p.calories.to_string(), color_for_kind(kind)),
                Cell::plain(minutes_label(p.duration)),
            ]);
        }
        out.push_str(&format!("{}\n", bold(kind.label())));
        out.push_str(&table.render());
        out.push('\n');
    }
    out
}

/// Confirms every committed change on the terminal.
pub struct ChangeEcho;

impl StateObserver for ChangeEcho {
    fn state_changed(&self, state: &AppState, change: &StateChange) {
        match change {
            StateChange::EntryAdded(id) => match state.find(id) {
                Some(e) => success(format!(
                    "{} logged: {} ({} kcal) [{}]",
                    e.kind.label(),
                    e.name,
                    e.signed_calories(),
                    short_id(&e.id)
                )),
                None => success(change.describe()),
            },
            StateChange::EntryDeleted(id) => {
                success(format!("Entry {} deleted", short_id(id)))
            }
            _ => success(change.describe()),
        }
    }
}

/// Prints the updated balance of the day after entry mutations.
pub struct BalanceLine;

impl StateObserver for BalanceLine {
    fn state_changed(&self, state: &AppState, change: &StateChange) {
        if !matches!(
            change,
            StateChange::EntryAdded(_) | StateChange::EntryDeleted(_) | StateChange::TargetChanged(_)
        ) {
            return;
        }

        let summary = metrics::daily_summary(&state.entries, state.target, Local::now());
        let (amount, label) = balance_label(summary.remaining);
        note(format!(
            "Today: {}{amount}{RESET} {label} (intake {}, burned {})",
            color_for_balance(summary.remaining),
            summary.intake,
            summary.burned
        ));
    }
}
