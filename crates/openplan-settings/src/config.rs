//! Planner configuration
//!
//! Provides configuration file handling and validation for the room
//! planner. Supports JSON and TOML file formats; the default location is
//! `<platform config dir>/openplan/config.toml`.
//!
//! Configuration is organized into sections:
//! - Validation (door clearance depth, warning language)
//! - Room entry (minimum size gate, default room)
//! - Quote pricing (base costs, VAT, deposit, validity)

pub use openplan_core::locale::WarningLocale;

use crate::error::{ConfigError, ConfigResult, SettingsResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Layout validation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationSettings {
    /// How far the door's walk-through zone reaches into the room (cm)
    pub door_clearance_depth: f64,
    /// Language of the warnings attached to placed items
    pub locale: WarningLocale,
}

impl Default for ValidationSettings {
    fn default() -> Self {
        Self {
            door_clearance_depth: 100.0,
            locale: WarningLocale::Ko,
        }
    }
}

/// Room entry settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoomSettings {
    /// Smallest room width accepted before placement (cm)
    pub min_width: f64,
    /// Smallest room depth accepted before placement (cm)
    pub min_depth: f64,
    /// Room pre-filled in the dimension form
    pub default_width: f64,
    pub default_depth: f64,
    pub default_height: f64,
    pub default_door_x: f64,
    pub default_door_width: f64,
}

impl Default for RoomSettings {
    fn default() -> Self {
        Self {
            min_width: 200.0,
            min_depth: 200.0,
            default_width: 500.0,
            default_depth: 400.0,
            default_height: 250.0,
            default_door_x: 200.0,
            default_door_width: 90.0,
        }
    }
}

/// Quote pricing settings (amounts in KRW)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuoteSettings {
    /// Basic truck delivery
    pub logistics_base_cost: u64,
    /// Basic installation labor
    pub installation_base_cost: u64,
    pub vat_rate: f64,
    /// Share of the total due on booking
    pub deposit_rate: f64,
    /// Days a quote stays valid after issue
    pub validity_days: u32,
    pub default_grade: String,
    pub default_warranty: String,
}

impl Default for QuoteSettings {
    fn default() -> Self {
        Self {
            logistics_base_cost: 200_000,
            installation_base_cost: 300_000,
            vat_rate: 0.1,
            deposit_rate: 0.1,
            validity_days: 7,
            default_grade: "A".to_string(),
            default_warranty: "14일".to_string(),
        }
    }
}

/// Complete planner configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PlannerConfig {
    pub validation: ValidationSettings,
    pub room: RoomSettings,
    pub quote: QuoteSettings,
}

/// Platform-specific location of the planner config file.
pub fn default_config_path() -> PathBuf {
    let mut path = dirs::config_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."));
    path.push("openplan");
    path.push("config.toml");
    path
}

enum Format {
    Json,
    Toml,
}

fn format_of(path: &Path) -> ConfigResult<Format> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(Format::Json),
        Some("toml") => Ok(Format::Toml),
        other => Err(ConfigError::UnsupportedFormat(
            other.unwrap_or("<none>").to_string(),
        )),
    }
}

fn out_of_range(key: &str, value: impl ToString) -> ConfigError {
    ConfigError::ValueOutOfRange {
        key: key.to_string(),
        value: value.to_string(),
    }
}

impl PlannerConfig {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = format_of(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        tracing::debug!("Loaded planner config from {}", path.display());
        Ok(config)
    }

    /// Load from an explicit path, else from the default location if a
    /// file exists there, else fall back to defaults.
    pub fn load_or_default(path: Option<&Path>) -> SettingsResult<Self> {
        if let Some(path) = path {
            return Self::load_from_file(path);
        }

        let default_path = default_config_path();
        if default_path.exists() {
            Self::load_from_file(&default_path)
        } else {
            tracing::info!(
                "No config at {}, using defaults",
                default_path.display()
            );
            Ok(Self::default())
        }
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match format_of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> ConfigResult<()> {
        let v = &self.validation;
        if !v.door_clearance_depth.is_finite() || v.door_clearance_depth < 0.0 {
            return Err(out_of_range(
                "validation.door_clearance_depth",
                v.door_clearance_depth,
            ));
        }

        let r = &self.room;
        if !(r.min_width > 0.0) {
            return Err(out_of_range("room.min_width", r.min_width));
        }
        if !(r.min_depth > 0.0) {
            return Err(out_of_range("room.min_depth", r.min_depth));
        }
        if !(r.default_height > 0.0) {
            return Err(out_of_range("room.default_height", r.default_height));
        }
        if !(r.default_width >= r.min_width) || !(r.default_depth >= r.min_depth) {
            return Err(ConfigError::Inconsistent(format!(
                "default room {}x{} is below the minimum {}x{}",
                r.default_width, r.default_depth, r.min_width, r.min_depth
            )));
        }
        if !(r.default_door_width > 0.0) {
            return Err(out_of_range("room.default_door_width", r.default_door_width));
        }
        if !(r.default_door_x >= 0.0) || !(r.default_door_x + r.default_door_width <= r.default_width)
        {
            return Err(ConfigError::Inconsistent(format!(
                "default door {}..{} does not fit a {} cm wall",
                r.default_door_x,
                r.default_door_x + r.default_door_width,
                r.default_width
            )));
        }

        let q = &self.quote;
        if !(0.0..=1.0).contains(&q.vat_rate) {
            return Err(out_of_range("quote.vat_rate", q.vat_rate));
        }
        if !(0.0..=1.0).contains(&q.deposit_rate) {
            return Err(out_of_range("quote.deposit_rate", q.deposit_rate));
        }
        if q.validity_days == 0 {
            return Err(out_of_range("quote.validity_days", q.validity_days));
        }

        Ok(())
    }
}
