//! JSON exchange format for a room and its placed items.
//!
//! This is the boundary shape the storefront hands to the validator and
//! reads back: `{ "room": {...}, "items": [...] }` with camelCase fields.

use crate::item::PlacedItem;
use crate::room::Room;
use crate::validator::{summarize, LayoutSummary, LayoutValidator};
use openplan_core::Result;
use serde::{Deserialize, Serialize};

/// A room together with the items placed in it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutDocument {
    pub room: Room,
    #[serde(default)]
    pub items: Vec<PlacedItem>,
}

impl LayoutDocument {
    pub fn new(room: Room, items: Vec<PlacedItem>) -> Self {
        Self { room, items }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// The same document with every item's annotations recomputed.
    pub fn validated(&self, validator: &LayoutValidator) -> Self {
        Self {
            room: self.room,
            items: validator.validate(&self.items, &self.room),
        }
    }

    /// Flag counts as currently stored on the items.
    pub fn summary(&self) -> LayoutSummary {
        summarize(&self.items)
    }
}
