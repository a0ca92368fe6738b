//! Error handling for OpenPlan
//!
//! The layout validator itself never fails: placement problems are
//! reported as item warnings. The errors here belong to the flow around
//! it (room entry, step transitions, the quote gate) and to decoding
//! layout documents.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Planning flow error type
///
/// Raised by the session orchestrator and the placement surface when an
/// operation is not allowed in the current state.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlannerError {
    /// Room is below the minimum size accepted for placement
    #[error("Room too small: {width}x{depth} cm (minimum {min_width}x{min_depth} cm)")]
    RoomTooSmall {
        /// Entered room width in centimeters.
        width: f64,
        /// Entered room depth in centimeters.
        depth: f64,
        /// Minimum accepted width.
        min_width: f64,
        /// Minimum accepted depth.
        min_depth: f64,
    },

    /// Room dimensions or door span are inconsistent
    #[error("Invalid room: {reason}")]
    InvalidRoom {
        /// What is wrong with the room.
        reason: String,
    },

    /// Operation requested from the wrong flow step
    #[error("Invalid step transition from {current} to {requested}")]
    InvalidStep {
        /// The current step name.
        current: String,
        /// The requested step name.
        requested: String,
    },

    /// Layout still has collisions or wall violations
    #[error("Layout has {issues} unresolved placement issue(s)")]
    LayoutBlocked {
        /// Number of flagged items.
        issues: usize,
    },

    /// No placed item with the given instance id
    #[error("Item not found: {instance_id}")]
    ItemNotFound {
        /// The instance id that was looked up.
        instance_id: String,
    },

    /// Mutation attempted on a read-only placement surface
    #[error("Placement surface is read-only")]
    ReadOnly,
}

impl PlannerError {
    /// Short message suitable for showing to the storefront user.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::RoomTooSmall { .. } => "공간이 너무 작습니다.",
            Self::InvalidRoom { .. } => "공간 치수를 다시 확인해 주세요.",
            Self::LayoutBlocked { .. } => "배치 경고를 먼저 해결해 주세요.",
            Self::ItemNotFound { .. } => "선택한 물품을 찾을 수 없습니다.",
            Self::InvalidStep { .. } | Self::ReadOnly => "지금은 진행할 수 없습니다.",
        }
    }
}

/// Main error type for OpenPlan
#[derive(Error, Debug)]
pub enum Error {
    /// Planning flow error
    #[error(transparent)]
    Planner(#[from] PlannerError),

    /// Layout document could not be decoded or encoded
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Check if this is a planning flow error
    pub fn is_planner_error(&self) -> bool {
        matches!(self, Error::Planner(_))
    }

    /// Returns the planning flow error, if this is one.
    pub fn as_planner_error(&self) -> Option<&PlannerError> {
        match self {
            Error::Planner(e) => Some(e),
            Error::Json(_) => None,
        }
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
