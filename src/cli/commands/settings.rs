use crate::cli::commands::open_tracker;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::settings::{DesktopReminders, SettingsLogic, parse_target_input};
use crate::errors::AppResult;
use crate::ui::views::render_settings;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Settings {
        print,
        target,
        avatar,
        avatar_file,
        reminders,
    } = cmd
    {
        let mut tracker = open_tracker(cfg)?;
        let mut changed = false;

        if let Some(raw) = target {
            SettingsLogic::set_target(&mut tracker, parse_target_input(raw))?;
            changed = true;
        }

        if let Some(url) = avatar {
            SettingsLogic::set_avatar(&mut tracker, url)?;
            changed = true;
        }

        if let Some(file) = avatar_file {
            SettingsLogic::import_avatar(&mut tracker, &expand_tilde(file))?;
            changed = true;
        }

        if let Some(toggle) = reminders {
            SettingsLogic::set_reminders(&mut tracker, toggle.is_on(), &DesktopReminders)?;
            changed = true;
        }

        if *print || !changed {
            print!("{}", render_settings(tracker.state()));
        }
    }

    Ok(())
}
