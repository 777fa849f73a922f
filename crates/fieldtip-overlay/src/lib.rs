#![forbid(unsafe_code)]

//! The fieldtip overlay engine: placement, obstruction detection, the
//! visibility/position state machine, and the tooltip lifecycle controller.
//!
//! The engine is framework-agnostic. A host UI implements the boundary
//! traits from `fieldtip-core` ([`fieldtip_core::Anchor`],
//! [`fieldtip_core::Host`]) plus [`OverlaySurface`] from this crate, then
//! drives a [`TooltipController`] with interaction events, frame
//! boundaries, and clock ticks. All state lives in the controller; the
//! host owns all elements.
//!
//! # Invariants
//!
//! 1. At most one overlay is live per controller; `show` destroys any
//!    prior overlay before mounting a new one.
//! 2. The reposition poll runs only while an overlay is mounted and never
//!    outlives `dispose`.
//! 3. Published positions are rounded to two decimals; an unchanged
//!    rounded position is never re-applied.

pub mod controller;
pub mod obstruction;
pub mod options;
pub mod overlay;
pub mod placement;
pub mod surface;

pub use controller::{POLL_INTERVAL_MS, TooltipController};
pub use obstruction::is_anchor_covered;
pub use options::{OptionsError, PointerEvents, TooltipId, TooltipOptions, TooltipOverrides};
pub use overlay::{ClassFlags, OFF_SCREEN_PX, OverlayPhase, OverlayState};
pub use placement::{Placement, PlacementParseError, compute_position};
pub use surface::{OverlaySurface, SurfaceUpdate};
