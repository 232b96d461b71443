pub mod add;
pub mod backup;
pub mod del;
pub mod export;
pub mod log;
pub mod metrics;
pub mod presets;
pub mod settings;
pub mod state;
pub mod store;

pub use state::{AppState, StateChange, StateObserver, Tracker};
