use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::log::audit_log_lenient;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the SQLite database with its `kv` and `log` tables
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.db.clone(), cli.test)?;

    println!("⚙️  Initializing lightlog…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗄️  Database   : {}", &cfg.database);

    let pool = DbPool::new(&cfg.database)?;
    success(format!("Database initialized at {}", &cfg.database));

    audit_log_lenient(
        &pool.conn,
        "init",
        &cfg.database,
        "Database initialized",
    );

    println!("🎉 lightlog initialization completed!");
    Ok(())
}
