use crate::cli::commands::open_tracker;
use crate::config::Config;
use crate::core::metrics;
use crate::errors::AppResult;
use crate::ui::views::render_today;
use chrono::Local;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let tracker = open_tracker(cfg)?;
    let state = tracker.state();

    let summary = metrics::daily_summary(&state.entries, state.target, Local::now());
    print!("{}", render_today(&summary, cfg));
    Ok(())
}
