use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Whether an entry adds to (diet) or subtracts from (workout) the daily balance.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, ValueEnum)]
#[serde(rename_all = "UPPERCASE")]
pub enum EntryType {
    Diet,
    Workout,
}

impl EntryType {
    pub fn et_as_str(&self) -> &'static str {
        match self {
            EntryType::Diet => "diet",
            EntryType::Workout => "workout",
        }
    }

    /// Fixed label used by views and exports.
    pub fn label(&self) -> &'static str {
        match self {
            EntryType::Diet => "Diet",
            EntryType::Workout => "Workout",
        }
    }

    /// Name given to entries submitted with a blank label.
    pub fn placeholder_name(&self) -> &'static str {
        match self {
            EntryType::Diet => "Unnamed meal",
            EntryType::Workout => "Unnamed workout",
        }
    }

    /// `+` for intake, `-` for burn.
    pub fn sign(&self) -> char {
        match self {
            EntryType::Diet => '+',
            EntryType::Workout => '-',
        }
    }
}
