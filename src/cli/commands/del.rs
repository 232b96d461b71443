use crate::cli::commands::open_tracker;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::AppState;
use crate::core::del::DeleteLogic;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::info;
use crate::ui::prompt::ask_confirmation;

/// Full id for `input`: an exact match, or the only entry whose id starts
/// with it.
fn resolve_id(state: &AppState, input: &str) -> AppResult<Option<String>> {
    if state.find(input).is_some() {
        return Ok(Some(input.to_string()));
    }

    let mut matches = state.entries.iter().filter(|e| e.id.starts_with(input));
    match (matches.next(), matches.next()) {
        (Some(e), None) => Ok(Some(e.id.clone())),
        (Some(_), Some(_)) => Err(AppError::AmbiguousId(input.to_string())),
        _ => Ok(None),
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, force } = cmd {
        let input = id.trim();
        if input.is_empty() {
            return Err(AppError::MissingField("id"));
        }

        let mut tracker = open_tracker(cfg)?;

        let Some(full_id) = resolve_id(tracker.state(), input)? else {
            DeleteLogic::delete_entry(&mut tracker, input)?;
            info(format!("No entry with id '{input}', nothing deleted."));
            return Ok(());
        };

        if !*force {
            let prompt = match tracker.state().find(&full_id) {
                Some(e) => format!(
                    "Delete '{}' ({} kcal, {})? This action is irreversible.",
                    e.name,
                    e.signed_calories(),
                    e.get_date_time()
                ),
                None => format!("Delete entry {full_id}? This action is irreversible."),
            };

            if !ask_confirmation(&prompt) {
                info("Operation cancelled.");
                return Ok(());
            }
        }

        DeleteLogic::delete_entry(&mut tracker, &full_id)?;
    }

    Ok(())
}
