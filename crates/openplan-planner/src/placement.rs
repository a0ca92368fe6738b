//! Placement surface: the state behind the room-planning canvas.
//!
//! The surface owns the room, the placed items and the current selection.
//! Every geometry change (drag, move, rotate, delete, room change)
//! re-validates the whole item list and replaces it wholesale, since
//! moving one item can create or resolve a collision with any other.

use crate::item::PlacedItem;
use crate::room::Room;
use crate::validator::{summarize, LayoutSummary, LayoutValidator};
use openplan_core::PlannerError;

/// Interactive placement state for one room.
#[derive(Debug, Clone)]
pub struct PlacementSurface {
    room: Room,
    items: Vec<PlacedItem>,
    selected_id: Option<String>,
    validator: LayoutValidator,
    read_only: bool,
}

impl PlacementSurface {
    /// Creates an editable surface and validates the initial items.
    pub fn new(room: Room, items: Vec<PlacedItem>, validator: LayoutValidator) -> Self {
        let items = validator.validate(&items, &room);
        Self {
            room,
            items,
            selected_id: None,
            validator,
            read_only: false,
        }
    }

    /// Creates a surface that only displays the layout.
    pub fn read_only(room: Room, items: Vec<PlacedItem>, validator: LayoutValidator) -> Self {
        Self {
            read_only: true,
            ..Self::new(room, items, validator)
        }
    }

    pub fn room(&self) -> &Room {
        &self.room
    }

    /// Items in draw order (last is topmost).
    pub fn items(&self) -> &[PlacedItem] {
        &self.items
    }

    pub fn into_items(self) -> Vec<PlacedItem> {
        self.items
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected_id.as_deref()
    }

    pub fn selected_item(&self) -> Option<&PlacedItem> {
        let id = self.selected_id.as_deref()?;
        self.items.iter().find(|item| item.instance_id == id)
    }

    fn ensure_editable(&self) -> Result<(), PlannerError> {
        if self.read_only {
            Err(PlannerError::ReadOnly)
        } else {
            Ok(())
        }
    }

    fn revalidate(&mut self) {
        self.items = self.validator.validate(&self.items, &self.room);
    }

    /// Selects the item with the given instance id.
    pub fn select(&mut self, instance_id: &str) -> Result<(), PlannerError> {
        self.ensure_editable()?;
        if !self.items.iter().any(|item| item.instance_id == instance_id) {
            return Err(PlannerError::ItemNotFound {
                instance_id: instance_id.to_string(),
            });
        }
        self.selected_id = Some(instance_id.to_string());
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.selected_id = None;
    }

    /// Selects the topmost item under the point, or clears the selection
    /// when the point hits the empty floor.
    pub fn select_at(&mut self, x: f64, y: f64) -> Option<&str> {
        if self.read_only {
            return None;
        }
        self.selected_id = self
            .items
            .iter()
            .rev()
            .find(|item| item.rect().contains_point(x, y))
            .map(|item| item.instance_id.clone());
        self.selected_id.as_deref()
    }

    /// Applies `f` to the selected item and re-validates. Returns `false`
    /// when nothing is selected.
    fn mutate_selected(&mut self, f: impl FnOnce(&mut PlacedItem)) -> Result<bool, PlannerError> {
        self.ensure_editable()?;
        let Some(id) = self.selected_id.as_deref() else {
            return Ok(false);
        };
        let Some(item) = self.items.iter_mut().find(|item| item.instance_id == id) else {
            return Ok(false);
        };

        f(item);
        self.revalidate();
        Ok(true)
    }

    /// Moves the selected item by a drag delta (cm).
    pub fn drag_by(&mut self, dx: f64, dy: f64) -> Result<bool, PlannerError> {
        self.mutate_selected(|item| item.move_by(dx, dy))
    }

    /// Moves the selected item's top-left corner to `(x, y)`.
    pub fn move_selected_to(&mut self, x: f64, y: f64) -> Result<bool, PlannerError> {
        self.mutate_selected(|item| item.move_to(x, y))
    }

    /// Turns the selected item a quarter turn about its top-left corner.
    pub fn rotate_selected(&mut self) -> Result<bool, PlannerError> {
        self.mutate_selected(PlacedItem::rotate)
    }

    /// Removes the selected item and clears the selection.
    pub fn delete_selected(&mut self) -> Result<bool, PlannerError> {
        self.ensure_editable()?;
        let Some(id) = self.selected_id.take() else {
            return Ok(false);
        };

        let before = self.items.len();
        self.items.retain(|item| item.instance_id != id);
        let removed = self.items.len() != before;
        if removed {
            tracing::debug!("Removed item {} from layout", id);
            self.revalidate();
        }
        Ok(removed)
    }

    /// Replaces the room and re-validates every item against it.
    pub fn set_room(&mut self, room: Room) -> Result<(), PlannerError> {
        self.ensure_editable()?;
        self.room = room;
        self.revalidate();
        Ok(())
    }

    pub fn summary(&self) -> LayoutSummary {
        summarize(&self.items)
    }

    /// Number of items currently flagged.
    pub fn issue_count(&self) -> usize {
        self.items.iter().filter(|item| item.has_issue()).count()
    }

    /// True while any item is flagged; the quote step stays closed.
    pub fn has_blocking_issues(&self) -> bool {
        self.items.iter().any(PlacedItem::has_issue)
    }
}
