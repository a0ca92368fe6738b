//! OpenPlan Settings Crate
//!
//! Handles planner configuration: validation tolerances, the room-entry
//! gate, quote pricing constants, and loading/saving them from disk.

pub mod config;
pub mod error;

pub use config::{
    default_config_path, PlannerConfig, QuoteSettings, RoomSettings, ValidationSettings,
    WarningLocale,
};
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
