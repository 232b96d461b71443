use crate::cli::commands::open_tracker;
use crate::config::Config;
use crate::core::metrics::trailing_7_day_aggregate;
use crate::errors::AppResult;
use crate::ui::views::render_trend;
use chrono::Local;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let tracker = open_tracker(cfg)?;
    let state = tracker.state();

    let series = trailing_7_day_aggregate(&state.entries, Local::now());
    print!("{}", render_trend(&series, state.target, cfg));
    Ok(())
}
