//! Planning flow: package → room dimensions → placement → quote.

use crate::arrange::instantiate_package;
use crate::item::{Package, PlacedItem};
use crate::placement::PlacementSurface;
use crate::quote::QuoteEstimate;
use crate::room::Room;
use crate::validator::LayoutValidator;
use chrono::{DateTime, Utc};
use openplan_core::PlannerError;
use openplan_settings::PlannerConfig;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Steps of the planning flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FlowStep {
    PackageSelect,
    SpaceInput,
    Planner,
    QuoteGen,
}

impl fmt::Display for FlowStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PackageSelect => write!(f, "package selection"),
            Self::SpaceInput => write!(f, "room input"),
            Self::Planner => write!(f, "planner"),
            Self::QuoteGen => write!(f, "quote"),
        }
    }
}

/// One pass through the planning flow for a single package.
#[derive(Debug, Clone)]
pub struct PlannerSession {
    config: PlannerConfig,
    step: FlowStep,
    package: Option<Package>,
    surface: PlacementSurface,
    quote: Option<QuoteEstimate>,
}

impl PlannerSession {
    pub fn new(config: PlannerConfig) -> Self {
        let surface = PlacementSurface::new(
            Room::from_settings(&config.room),
            Vec::new(),
            LayoutValidator::from_settings(&config.validation),
        );
        Self {
            config,
            step: FlowStep::PackageSelect,
            package: None,
            surface,
            quote: None,
        }
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    pub fn step(&self) -> FlowStep {
        self.step
    }

    pub fn package(&self) -> Option<&Package> {
        self.package.as_ref()
    }

    pub fn room(&self) -> &Room {
        self.surface.room()
    }

    pub fn items(&self) -> &[PlacedItem] {
        self.surface.items()
    }

    pub fn quote(&self) -> Option<&QuoteEstimate> {
        self.quote.as_ref()
    }

    /// Read access to the placement state in any step.
    pub fn surface(&self) -> &PlacementSurface {
        &self.surface
    }

    fn require_step(&self, expected: FlowStep, requested: FlowStep) -> Result<(), PlannerError> {
        if self.step == expected {
            Ok(())
        } else {
            Err(PlannerError::InvalidStep {
                current: self.step.to_string(),
                requested: requested.to_string(),
            })
        }
    }

    /// Starts planning `package`: its items are laid out in the current
    /// room and the flow moves on to room input. Allowed from package
    /// selection and, once a quote is issued, to plan another package;
    /// the previous layout and quote are dropped.
    pub fn start_with_package(&mut self, package: Package) -> Result<(), PlannerError> {
        if !matches!(self.step, FlowStep::PackageSelect | FlowStep::QuoteGen) {
            return Err(PlannerError::InvalidStep {
                current: self.step.to_string(),
                requested: FlowStep::SpaceInput.to_string(),
            });
        }

        let room = *self.surface.room();
        let items = instantiate_package(&package, room.width);
        tracing::info!(
            "Starting planner for package {} with {} items",
            package.id,
            items.len()
        );

        self.surface = PlacementSurface::new(
            room,
            items,
            LayoutValidator::from_settings(&self.config.validation),
        );
        self.package = Some(package);
        self.quote = None;
        self.step = FlowStep::SpaceInput;
        Ok(())
    }

    /// Accepts the entered room, re-validates the layout against it and
    /// opens the planner.
    pub fn submit_room(&mut self, room: Room) -> Result<(), PlannerError> {
        self.require_step(FlowStep::SpaceInput, FlowStep::Planner)?;

        if let Err(e) = room
            .check_min_size(&self.config.room)
            .and_then(|_| room.check())
        {
            tracing::warn!("Room rejected: {}", e);
            return Err(e);
        }

        self.surface.set_room(room)?;
        self.step = FlowStep::Planner;
        tracing::info!(
            "Room {}x{} cm accepted, {} of {} items flagged",
            room.width,
            room.depth,
            self.surface.issue_count(),
            self.surface.items().len()
        );
        Ok(())
    }

    /// Goes back from the planner to re-enter the room dimensions.
    pub fn edit_room(&mut self) -> Result<(), PlannerError> {
        self.require_step(FlowStep::Planner, FlowStep::SpaceInput)?;
        self.step = FlowStep::SpaceInput;
        Ok(())
    }

    /// Mutable placement state; only available while in the planner.
    pub fn surface_mut(&mut self) -> Result<&mut PlacementSurface, PlannerError> {
        self.require_step(FlowStep::Planner, FlowStep::Planner)?;
        Ok(&mut self.surface)
    }

    /// Issues the quote, provided no item is flagged.
    pub fn proceed_to_quote(&mut self, now: DateTime<Utc>) -> Result<&QuoteEstimate, PlannerError> {
        self.require_step(FlowStep::Planner, FlowStep::QuoteGen)?;

        let issues = self.surface.issue_count();
        if issues > 0 {
            tracing::warn!("Quote blocked by {} flagged items", issues);
            return Err(PlannerError::LayoutBlocked { issues });
        }

        let Some(package) = self.package.as_ref() else {
            return Err(PlannerError::InvalidStep {
                current: self.step.to_string(),
                requested: FlowStep::QuoteGen.to_string(),
            });
        };

        let quote = QuoteEstimate::build(package, &self.config.quote, now);
        tracing::info!("Issued quote {} total {} KRW", quote.id, quote.total_cost);
        self.step = FlowStep::QuoteGen;
        Ok(self.quote.insert(quote))
    }

    /// Drops the package, layout and quote and returns to package selection.
    pub fn restart(&mut self) {
        *self = Self::new(self.config.clone());
    }
}
