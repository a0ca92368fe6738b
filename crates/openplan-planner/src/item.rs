//! Catalog items, packages and the items placed in a room.

use openplan_core::Rect;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Quarter-turn orientation of a placed item.
///
/// Serialized as the plain degree number (0, 90, 180 or 270).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub enum Rotation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    pub fn degrees(self) -> u16 {
        match self {
            Self::Deg0 => 0,
            Self::Deg90 => 90,
            Self::Deg180 => 180,
            Self::Deg270 => 270,
        }
    }

    /// The orientation after one more clockwise quarter turn.
    pub fn next(self) -> Self {
        match self {
            Self::Deg0 => Self::Deg90,
            Self::Deg90 => Self::Deg180,
            Self::Deg180 => Self::Deg270,
            Self::Deg270 => Self::Deg0,
        }
    }
}

impl TryFrom<u16> for Rotation {
    type Error = String;

    fn try_from(degrees: u16) -> Result<Self, Self::Error> {
        match degrees {
            0 => Ok(Self::Deg0),
            90 => Ok(Self::Deg90),
            180 => Ok(Self::Deg180),
            270 => Ok(Self::Deg270),
            other => Err(format!(
                "rotation must be 0, 90, 180 or 270 degrees, got {}",
                other
            )),
        }
    }
}

impl From<Rotation> for u16 {
    fn from(rotation: Rotation) -> Self {
        rotation.degrees()
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.degrees())
    }
}

/// A product as listed in a package.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: String,
    pub name: String,
    pub category: String,
    pub width: f64,
    pub depth: f64,
    pub height: f64,
    /// KRW
    #[serde(default)]
    pub price: u64,
}

impl CatalogItem {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        width: f64,
        depth: f64,
        height: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            width,
            depth,
            height,
            price: 0,
        }
    }
}

/// A bundle of used furniture sold together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Package {
    pub id: String,
    pub name: String,
    pub items: Vec<CatalogItem>,
    /// KRW
    pub total_price: u64,
    #[serde(default)]
    pub grade: Option<String>,
    #[serde(default)]
    pub warranty: Option<String>,
    #[serde(default, rename = "has3D")]
    pub has_3d: bool,
}

/// One instance of a catalog item positioned in the room.
///
/// `width` and `depth` always describe the current orientation; rotating
/// swaps them. `is_collision`, `is_wall_violation` and `warnings` belong to
/// the validator and are overwritten on every validation pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedItem {
    pub instance_id: String,
    #[serde(default)]
    pub catalog_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub category: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub depth: f64,
    #[serde(default)]
    pub rotation: Rotation,
    #[serde(default)]
    pub is_collision: bool,
    #[serde(default)]
    pub is_wall_violation: bool,
    #[serde(default)]
    pub warnings: Vec<String>,
}

impl PlacedItem {
    pub fn new(instance_id: impl Into<String>, x: f64, y: f64, width: f64, depth: f64) -> Self {
        Self {
            instance_id: instance_id.into(),
            catalog_id: String::new(),
            name: String::new(),
            category: String::new(),
            x,
            y,
            width,
            depth,
            rotation: Rotation::Deg0,
            is_collision: false,
            is_wall_violation: false,
            warnings: Vec::new(),
        }
    }

    /// Places `item` unrotated at `(x, y)`.
    pub fn from_catalog(item: &CatalogItem, instance_id: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            catalog_id: item.id.clone(),
            name: item.name.clone(),
            category: item.category.clone(),
            ..Self::new(instance_id, x, y, item.width, item.depth)
        }
    }

    /// Current footprint.
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.depth)
    }

    /// Turns the item a quarter turn about its top-left corner.
    pub fn rotate(&mut self) {
        std::mem::swap(&mut self.width, &mut self.depth);
        self.rotation = self.rotation.next();
    }

    pub fn move_by(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
    }

    pub fn move_to(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }

    /// True if the last validation pass flagged this item.
    pub fn has_issue(&self) -> bool {
        self.is_collision || self.is_wall_violation
    }
}
