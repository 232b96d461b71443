use crate::cli::commands::open_tracker;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::ui::prompt::ask_confirmation;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Reset { force } = cmd {
        let mut tracker = open_tracker(cfg)?;
        let count = tracker.state().entries.len();

        if !*force
            && !ask_confirmation(&format!(
                "Delete all {count} entries and restore the default settings? This action is irreversible."
            ))
        {
            info("Operation cancelled.");
            return Ok(());
        }

        let removed = DeleteLogic::reset(&mut tracker)?;
        info(format!("{removed} entries removed."));
    }

    Ok(())
}
