use crate::export::ExportFormat;
use crate::models::EntryType;
use clap::{Parser, Subcommand, ValueEnum};

/// Command-line interface definition for lightlog
/// Personal calorie tracker: log meals and workouts, watch the daily balance
#[derive(Parser)]
#[command(
    name = "lightlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A personal calorie tracker: log meals and workouts against a daily target",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Toggle {
    On,
    Off,
}

impl Toggle {
    pub fn is_on(self) -> bool {
        self == Toggle::On
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Log a meal or a workout
    ///
    /// Examples:
    ///   lightlog add diet "Pasta" 520
    ///   lightlog add workout "Running" 450 --duration 30
    ///   lightlog add workout --preset yoga
    Add {
        /// Entry type: diet (intake) or workout (burn)
        #[arg(value_enum)]
        kind: EntryType,

        /// Name of the meal or workout
        name: Option<String>,

        /// Calories (kcal); the sign is ignored
        #[arg(allow_negative_numbers = true)]
        calories: Option<String>,

        /// Workout duration in minutes (ignored for diet entries)
        #[arg(long, short = 'd', value_name = "MIN")]
        duration: Option<String>,

        /// Fill name, calories and duration from a quick-pick preset
        #[arg(long, short = 'p', value_name = "LABEL")]
        preset: Option<String>,
    },

    /// Delete an entry by ID (the short ID shown by `today`/`history` is enough)
    Del {
        /// Entry id or a unique prefix of it
        id: String,

        /// Delete without asking for confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Show today's balance, progress and entries
    Today,

    /// Show all entries grouped by day, newest first
    History {
        /// Filter by period.
        ///
        /// Supported formats:
        /// - YYYY                  → entire year (e.g. "2025")
        /// - YYYY-MM              → entire month (e.g. "2025-06")
        /// - YYYY-MM-DD           → specific day (e.g. "2025-06-18")
        ///
        /// Ranges (start:end) in the same format:
        /// - YYYY-MM:YYYY-MM      → month range (e.g. "2025-06:2025-08")
        /// - YYYY-MM-DD:YYYY-MM-DD→ day range  (e.g. "2025-06-01:2025-06-10")
        ///
        /// Special value:
        /// - all                   → whole history (same as omitting it)
        #[arg(
            long,
            short,
            help = "Filter by year/month/day or a custom range (YYYY, YYYY-MM, YYYY-MM-DD, or ranges)"
        )]
        period: Option<String>,
    },

    /// Show intake and burn over the last 7 days
    Trend,

    /// View or change the daily target, avatar and reminders
    Settings {
        #[arg(long = "print", help = "Print the current settings")]
        print: bool,

        /// Daily calorie target; invalid or zero values reset it to 2000
        #[arg(long, value_name = "KCAL", allow_negative_numbers = true)]
        target: Option<String>,

        /// Avatar image URL
        #[arg(long, value_name = "URL", conflicts_with = "avatar_file")]
        avatar: Option<String>,

        /// Embed a local image (max 2 MiB) as the avatar
        #[arg(long = "avatar-file", value_name = "PATH")]
        avatar_file: Option<String>,

        /// Turn desktop reminders on or off
        #[arg(long, value_enum)]
        reminders: Option<Toggle>,
    },

    /// List the quick-pick presets
    Presets,

    /// Export the entry log
    Export {
        /// Export format: csv, json
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Output file path (absolute path required); defaults to
        /// lightlog_<today>.<ext> in the current directory
        #[arg(long, value_name = "FILE")]
        file: Option<String>,

        /// Date range to export (same formats as `history --period`).
        /// If omitted, every entry is exported.
        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Create a backup copy of the database
    Backup {
        /// Destination file path (absolute path required)
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Compress the backup into a .zip archive
        #[arg(long)]
        compress: bool,

        /// Overwrite the destination without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Delete every entry and restore the default settings
    Reset {
        #[arg(long, short = 'f', help = "Reset without asking for confirmation")]
        force: bool,
    },
}
