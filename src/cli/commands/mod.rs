pub mod add;
pub mod backup;
pub mod config;
pub mod del;
pub mod export;
pub mod history;
pub mod init;
pub mod log;
pub mod presets;
pub mod reset;
pub mod settings;
pub mod today;
pub mod trend;

use crate::config::Config;
use crate::core::Tracker;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::views::{BalanceLine, ChangeEcho};

/// Open the configured database and load the state, with the terminal
/// observers attached.
pub(crate) fn open_tracker(cfg: &Config) -> AppResult<Tracker<DbPool>> {
    let pool = DbPool::new(&cfg.database)?;
    let mut tracker = Tracker::open(pool)?;
    tracker.subscribe(Box::new(ChangeEcho));
    tracker.subscribe(Box::new(BalanceLine));
    Ok(tracker)
}
