//! Room footprint and door.

use openplan_core::{PlannerError, Rect};
use openplan_settings::RoomSettings;
use serde::{Deserialize, Serialize};

/// A rectangular room with a single door on the bottom wall.
///
/// All lengths are centimeters. The bottom wall is the one at
/// `y == depth`; the door spans `door_x..door_x + door_width` along it.
/// `height` is carried for 3D rendering and ignored by the validator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub width: f64,
    pub depth: f64,
    pub height: f64,
    pub door_x: f64,
    pub door_width: f64,
}

impl Room {
    pub fn new(width: f64, depth: f64, height: f64, door_x: f64, door_width: f64) -> Self {
        Self {
            width,
            depth,
            height,
            door_x,
            door_width,
        }
    }

    /// The room pre-filled in the dimension form.
    pub fn from_settings(settings: &RoomSettings) -> Self {
        Self::new(
            settings.default_width,
            settings.default_depth,
            settings.default_height,
            settings.default_door_x,
            settings.default_door_width,
        )
    }

    /// The floor as a rectangle anchored at the origin.
    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.depth)
    }

    /// Walk-through zone in front of the door, reaching `clearance_depth`
    /// into the room from the bottom wall.
    pub fn door_clearance_zone(&self, clearance_depth: f64) -> Rect {
        Rect::new(
            self.door_x,
            self.depth - clearance_depth,
            self.door_width,
            clearance_depth,
        )
    }

    /// Checks the room's own invariants: finite positive dimensions and a
    /// door that fits the bottom wall.
    pub fn check(&self) -> Result<(), PlannerError> {
        let dims = [
            ("width", self.width),
            ("depth", self.depth),
            ("height", self.height),
            ("door width", self.door_width),
        ];
        for (name, value) in dims {
            if !value.is_finite() || value <= 0.0 {
                return Err(PlannerError::InvalidRoom {
                    reason: format!("{} must be a positive number, got {}", name, value),
                });
            }
        }

        if !self.door_x.is_finite() || self.door_x < 0.0 {
            return Err(PlannerError::InvalidRoom {
                reason: format!("door offset must be >= 0, got {}", self.door_x),
            });
        }

        if self.door_x + self.door_width > self.width {
            return Err(PlannerError::InvalidRoom {
                reason: format!(
                    "door {}..{} extends past the {} cm wall",
                    self.door_x,
                    self.door_x + self.door_width,
                    self.width
                ),
            });
        }

        Ok(())
    }

    /// Rejects rooms below the configured minimum footprint.
    pub fn check_min_size(&self, settings: &RoomSettings) -> Result<(), PlannerError> {
        if self.width < settings.min_width || self.depth < settings.min_depth {
            return Err(PlannerError::RoomTooSmall {
                width: self.width,
                depth: self.depth,
                min_width: settings.min_width,
                min_depth: settings.min_depth,
            });
        }
        Ok(())
    }
}

impl Default for Room {
    fn default() -> Self {
        Self::from_settings(&RoomSettings::default())
    }
}
