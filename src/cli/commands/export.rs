use crate::cli::commands::open_tracker;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::export::ExportLogic;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        force,
    } = cmd
    {
        let tracker = open_tracker(cfg)?;
        ExportLogic::export(
            tracker.state(),
            *format,
            file.as_deref(),
            range.as_deref(),
            *force,
        )?;
    }
    Ok(())
}
