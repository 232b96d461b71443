use crate::cli::commands::open_tracker;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::core::presets::find_preset;
use crate::errors::{AppError, AppResult};
use crate::models::EntryType;

/// Fields of a new entry after form validation.
#[derive(Debug, PartialEq, Eq)]
struct AddForm {
    name: String,
    calories: i64,
    duration: Option<u32>,
}

fn parse_calories(raw: &str) -> AppResult<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| AppError::InvalidCalories(raw.to_string()))
}

fn parse_duration(raw: &str) -> AppResult<u32> {
    let minutes = raw
        .trim()
        .parse::<i64>()
        .map_err(|_| AppError::InvalidDuration(raw.to_string()))?;
    u32::try_from(minutes.unsigned_abs()).map_err(|_| AppError::InvalidDuration(raw.to_string()))
}

/// Name and calories must be given unless a preset fills them; explicit
/// values win over the preset's. An empty string counts as not given, while
/// a whitespace-only name is kept and later replaced by the placeholder.
fn resolve_form(
    kind: EntryType,
    name: Option<&str>,
    calories: Option<&str>,
    duration: Option<&str>,
    preset: Option<&str>,
) -> AppResult<AddForm> {
    let preset = preset.map(|label| find_preset(kind, label)).transpose()?;
    let name = name.filter(|n| !n.is_empty());
    let calories = calories.filter(|c| !c.is_empty());

    let name = match (name, &preset) {
        (Some(n), _) => n.to_string(),
        (None, Some(p)) => p.label.to_string(),
        (None, None) => return Err(AppError::MissingField("name")),
    };

    let calories = match (calories, &preset) {
        (Some(c), _) => parse_calories(c)?,
        (None, Some(p)) => i64::from(p.calories),
        (None, None) => return Err(AppError::MissingField("calories")),
    };

    let duration = match duration {
        Some(d) => Some(parse_duration(d)?),
        None => preset.and_then(|p| p.duration),
    };

    Ok(AddForm {
        name,
        calories,
        duration,
    })
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        kind,
        name,
        calories,
        duration,
        preset,
    } = cmd
    {
        let form = resolve_form(
            *kind,
            name.as_deref(),
            calories.as_deref(),
            duration.as_deref(),
            preset.as_deref(),
        )?;

        let mut tracker = open_tracker(cfg)?;
        AddLogic::add_entry(&mut tracker, &form.name, form.calories, *kind, form.duration)?;
    }

    Ok(())
}

