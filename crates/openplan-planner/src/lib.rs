//! # OpenPlan Planner
//!
//! Room planning for furniture packages: a package's items are laid out in
//! a rectangular room, the user drags, rotates and deletes them, and every
//! change re-runs the layout validator so the storefront can flag
//! problems and hold back the quote until the layout is clean.
//!
//! ## Architecture
//!
//! ```text
//! PlannerSession (package -> room -> placement -> quote)
//!   ├── PlacementSurface (select, drag, rotate, delete)
//!   │     └── LayoutValidator (collisions, walls, door clearance)
//!   │           └── Rect (openplan-core)
//!   └── QuoteEstimate
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use openplan_planner::{validate_layout, PlacedItem, Room};
//!
//! let room = Room::new(500.0, 400.0, 250.0, 200.0, 90.0);
//! let items = vec![
//!     PlacedItem::new("a", 10.0, 10.0, 100.0, 50.0),
//!     PlacedItem::new("b", 10.0, 10.0, 100.0, 50.0),
//! ];
//!
//! let validated = validate_layout(&items, &room);
//! assert!(validated.iter().all(|item| item.is_collision));
//! ```

pub mod arrange;
pub mod document;
pub mod item;
pub mod placement;
pub mod quote;
pub mod room;
pub mod session;
pub mod validator;

pub use arrange::{instantiate_package, shelf_positions};
pub use document::LayoutDocument;
pub use item::{CatalogItem, Package, PlacedItem, Rotation};
pub use placement::PlacementSurface;
pub use quote::QuoteEstimate;
pub use room::Room;
pub use session::{FlowStep, PlannerSession};
pub use validator::{
    check_collision, check_wall_validation, summarize, validate_layout, wall_check,
    LayoutSummary, LayoutValidator, LayoutWarning, WallCheck,
};
