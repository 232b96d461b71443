use crate::cli::commands::open_tracker;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::metrics::group_by_calendar_day;
use crate::errors::AppResult;
use crate::ui::views::render_history;
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::History { period } = cmd {
        let bounds = match period {
            Some(p) => date::parse_period(p)?,
            None => None,
        };

        let tracker = open_tracker(cfg)?;
        let groups = group_by_calendar_day(
            tracker
                .state()
                .entries
                .iter()
                .filter(|e| date::within(e.local_date(), bounds)),
        );

        print!("{}", render_history(&groups, cfg));
    }

    Ok(())
}
