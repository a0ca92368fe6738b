//! # OpenPlan
//!
//! Furniture layout planning for used-furniture packages:
//! - Lay a package's items out in a rectangular room
//! - Flag overlapping items, items past a wall and items blocking the door
//! - Gate the delivery quote on a clean layout
//!
//! ## Architecture
//!
//! OpenPlan is organized as a workspace with multiple crates:
//!
//! 1. **openplan-core** - Geometry, warning locale, error types
//! 2. **openplan-settings** - TOML/JSON configuration
//! 3. **openplan-planner** - Room, items, validator, placement surface, session, quote
//! 4. **openplan** - Command-line validator that integrates all crates

use anyhow::Context;
use std::path::Path;

pub use openplan_core::{Error, PlannerError, Rect, Result, WarningLocale};
pub use openplan_planner::{
    validate_layout, CatalogItem, FlowStep, LayoutDocument, LayoutSummary, LayoutValidator,
    Package, PlacedItem, PlacementSurface, PlannerSession, QuoteEstimate, Room, Rotation,
};
pub use openplan_settings::PlannerConfig;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Reads a layout document from `path` and returns it with every item's
/// flags and warnings recomputed under `config`.
pub fn validate_layout_file(path: &Path, config: &PlannerConfig) -> anyhow::Result<LayoutDocument> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read layout file {}", path.display()))?;
    let document = LayoutDocument::from_json(&json)
        .with_context(|| format!("failed to parse layout file {}", path.display()))?;

    let validator = LayoutValidator::from_settings(&config.validation);
    Ok(document.validated(&validator))
}

/// Filter for `RUST_LOG`-style directives, falling back to `info` when
/// they are missing or malformed.
fn log_filter(directives: Option<&str>) -> tracing_subscriber::EnvFilter {
    use tracing_subscriber::EnvFilter;

    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting on stderr
/// - RUST_LOG environment variable support
///
/// Stdout is left to the validated layout.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;

    let directives = std::env::var(tracing_subscriber::EnvFilter::DEFAULT_ENV).ok();
    let env_filter = log_filter(directives.as_deref());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;

    Ok(())
}
