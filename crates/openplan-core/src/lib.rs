//! # OpenPlan Core
//!
//! Core types shared by the OpenPlan crates: the axis-aligned rectangle
//! used for every placement check, the warning locale, and the error
//! types surfaced by the planning flow.

pub mod error;
pub mod geometry;
pub mod locale;

pub use error::{Error, PlannerError, Result};
pub use geometry::Rect;
pub use locale::WarningLocale;
