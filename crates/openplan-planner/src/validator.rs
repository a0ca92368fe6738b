//! Layout validation: collisions, wall containment and door clearance.
//!
//! Validation is a pure function of the items and the room. Every pass
//! recomputes the flags and warnings of every item from scratch, so a
//! result never depends on what a previous pass reported.

use crate::item::PlacedItem;
use crate::room::Room;
use openplan_core::WarningLocale;
use openplan_settings::ValidationSettings;
use serde::{Deserialize, Serialize};

/// A placement problem reported on an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutWarning {
    /// Overlaps at least one other item
    Collision,
    /// Leaves the room or sits in the door's walk-through zone
    WallViolation,
}

impl LayoutWarning {
    pub fn message(self, locale: WarningLocale) -> &'static str {
        match (self, locale) {
            (Self::Collision, WarningLocale::Ko) => "다른 품목과 겹칩니다",
            (Self::Collision, WarningLocale::En) => "Overlaps another item",
            (Self::WallViolation, WarningLocale::Ko) => "벽을 벗어나거나 출입문을 막습니다",
            (Self::WallViolation, WarningLocale::En) => "Extends past a wall or blocks the door",
        }
    }
}

/// Outcome of the wall and door check for one item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WallCheck {
    /// Some part of the item lies outside the room
    pub out_of_bounds: bool,
    /// The item intersects the door clearance zone
    pub blocks_door: bool,
}

impl WallCheck {
    pub fn is_violation(&self) -> bool {
        self.out_of_bounds || self.blocks_door
    }
}

/// True if the two items overlap with positive area.
pub fn check_collision(a: &PlacedItem, b: &PlacedItem) -> bool {
    a.rect().overlaps(&b.rect())
}

/// Checks one item against the room walls and the door clearance zone.
pub fn wall_check(item: &PlacedItem, room: &Room, door_clearance_depth: f64) -> WallCheck {
    let rect = item.rect();
    let out_of_bounds = rect.x < 0.0
        || rect.y < 0.0
        || rect.right() > room.width
        || rect.bottom() > room.depth;
    let blocks_door = rect.overlaps(&room.door_clearance_zone(door_clearance_depth));

    WallCheck {
        out_of_bounds,
        blocks_door,
    }
}

/// True if the item violates a wall or the door clearance, using the
/// default clearance depth.
pub fn check_wall_validation(item: &PlacedItem, room: &Room) -> bool {
    let validator = LayoutValidator::default();
    wall_check(item, room, validator.door_clearance_depth).is_violation()
}

/// Counts of flagged items in a validated layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutSummary {
    pub total: usize,
    pub collisions: usize,
    pub wall_violations: usize,
    /// Items with at least one flag
    pub flagged: usize,
}

impl LayoutSummary {
    pub fn is_clean(&self) -> bool {
        self.flagged == 0
    }
}

/// Tallies the flags of already validated items.
pub fn summarize(items: &[PlacedItem]) -> LayoutSummary {
    items.iter().fold(
        LayoutSummary {
            total: items.len(),
            ..LayoutSummary::default()
        },
        |mut summary, item| {
            summary.collisions += usize::from(item.is_collision);
            summary.wall_violations += usize::from(item.is_wall_violation);
            summary.flagged += usize::from(item.has_issue());
            summary
        },
    )
}

/// Validates whole layouts with a fixed door clearance and warning locale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutValidator {
    pub door_clearance_depth: f64,
    pub locale: WarningLocale,
}

impl Default for LayoutValidator {
    fn default() -> Self {
        Self::from_settings(&ValidationSettings::default())
    }
}

impl LayoutValidator {
    pub fn new(door_clearance_depth: f64, locale: WarningLocale) -> Self {
        Self {
            door_clearance_depth,
            locale,
        }
    }

    pub fn from_settings(settings: &ValidationSettings) -> Self {
        Self::new(settings.door_clearance_depth, settings.locale)
    }

    /// Returns a copy of `items`, in the same order, with every item's
    /// collision flag, wall flag and warnings recomputed.
    pub fn validate(&self, items: &[PlacedItem], room: &Room) -> Vec<PlacedItem> {
        let mut colliding = vec![false; items.len()];
        for i in 0..items.len() {
            for j in (i + 1)..items.len() {
                if check_collision(&items[i], &items[j]) {
                    colliding[i] = true;
                    colliding[j] = true;
                }
            }
        }

        let validated: Vec<PlacedItem> = items
            .iter()
            .zip(colliding)
            .map(|(item, is_collision)| {
                let is_wall_violation =
                    wall_check(item, room, self.door_clearance_depth).is_violation();

                let mut warnings = Vec::new();
                if is_collision {
                    warnings.push(LayoutWarning::Collision.message(self.locale).to_string());
                }
                if is_wall_violation {
                    warnings.push(LayoutWarning::WallViolation.message(self.locale).to_string());
                }

                PlacedItem {
                    is_collision,
                    is_wall_violation,
                    warnings,
                    ..item.clone()
                }
            })
            .collect();

        let summary = summarize(&validated);
        tracing::debug!(
            "Validated {} items: {} colliding, {} outside walls or blocking the door",
            summary.total,
            summary.collisions,
            summary.wall_violations
        );

        validated
    }
}

/// Validates `items` in `room` with the default settings.
pub fn validate_layout(items: &[PlacedItem], room: &Room) -> Vec<PlacedItem> {
    LayoutValidator::default().validate(items, room)
}
