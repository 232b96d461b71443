use crate::errors::{AppError, AppResult};
use crate::models::EntryType;

/// Quick-pick shortcut offered by `add --preset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    pub label: &'static str,
    pub calories: u32,
    pub duration: Option<u32>,
}

const DIET_PRESETS: &[Preset] = &[
    Preset { label: "Rice", calories: 116, duration: None },
    Preset { label: "Fried egg", calories: 140, duration: None },
    Preset { label: "Steak", calories: 250, duration: None },
    Preset { label: "Apple", calories: 52, duration: None },
    Preset { label: "Latte", calories: 120, duration: None },
    Preset { label: "Salad", calories: 180, duration: None },
];

const WORKOUT_PRESETS: &[Preset] = &[
    Preset { label: "Running", calories: 450, duration: Some(30) },
    Preset { label: "Swimming", calories: 600, duration: Some(45) },
    Preset { label: "Cycling", calories: 500, duration: Some(40) },
    Preset { label: "Yoga", calories: 150, duration: Some(60) },
    Preset { label: "Walking", calories: 120, duration: Some(30) },
    Preset { label: "Squats", calories: 300, duration: Some(20) },
];

pub fn presets_for(kind: EntryType) -> &'static [Preset] {
    match kind {
        EntryType::Diet => DIET_PRESETS,
        EntryType::Workout => WORKOUT_PRESETS,
    }
}

/// Case-insensitive lookup among the presets of `kind`.
pub fn find_preset(kind: EntryType, label: &str) -> AppResult<Preset> {
    let wanted = label.trim();
    presets_for(kind)
        .iter()
        .find(|p| p.label.eq_ignore_ascii_case(wanted))
        .copied()
        .ok_or_else(|| AppError::UnknownPreset(wanted.to_string()))
}
