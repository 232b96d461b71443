pub mod day;
pub mod entry;
pub mod entry_type;
pub mod settings;

pub use day::{DayAggregate, DayGroup};
pub use entry::LogEntry;
pub use entry_type::EntryType;
pub use settings::Settings;
