//! Initial arrangement of a package's items.
//!
//! Items are packed in shelves: left to right along the back wall, then
//! wrapping to a new row below the deepest item of the previous one. The
//! result is deterministic and free of overlaps; it may still cross walls
//! when the room is small, which the validator then reports.

use crate::item::{Package, PlacedItem};
use uuid::Uuid;

/// Distance kept from the back and left walls (cm).
const MARGIN: f64 = 10.0;
/// Gap between neighbouring items (cm).
const GAP: f64 = 10.0;

/// Top-left positions for footprints `(width, depth)` packed into rows
/// no wider than `row_width`.
pub fn shelf_positions(footprints: &[(f64, f64)], row_width: f64) -> Vec<(f64, f64)> {
    let mut positions = Vec::with_capacity(footprints.len());
    let mut cursor_x = MARGIN;
    let mut cursor_y = MARGIN;
    let mut row_depth: f64 = 0.0;

    for &(width, depth) in footprints {
        // An item wider than the row still gets a row of its own.
        if cursor_x > MARGIN && cursor_x + width > row_width - MARGIN {
            cursor_x = MARGIN;
            cursor_y += row_depth + GAP;
            row_depth = 0.0;
        }

        positions.push((cursor_x, cursor_y));
        cursor_x += width + GAP;
        row_depth = row_depth.max(depth);
    }

    positions
}

/// Creates one placed item per catalog item of `package`.
///
/// Instance ids are `"{catalog_id}_{index}_{uuid}"`, so the same product
/// listed twice still yields distinct instances.
pub fn instantiate_package(package: &Package, row_width: f64) -> Vec<PlacedItem> {
    let footprints: Vec<(f64, f64)> = package
        .items
        .iter()
        .map(|item| (item.width, item.depth))
        .collect();

    let items: Vec<PlacedItem> = package
        .items
        .iter()
        .zip(shelf_positions(&footprints, row_width))
        .enumerate()
        .map(|(idx, (product, (x, y)))| {
            let instance_id = format!("{}_{}_{}", product.id, idx, Uuid::new_v4().simple());
            PlacedItem::from_catalog(product, instance_id, x, y)
        })
        .collect();

    tracing::debug!(
        "Arranged {} items from package {} in rows of {} cm",
        items.len(),
        package.id,
        row_width
    );
    items
}
