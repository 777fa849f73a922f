#![forbid(unsafe_code)]

//! Fieldtip public facade crate.
//!
//! Re-exports the stable surface of the internal crates and offers a
//! lightweight prelude: host-boundary traits to implement, the tooltip
//! controller to drive, and (with the `validate` feature) the built-in
//! validators that feed it.

// --- Core re-exports -------------------------------------------------------

pub use fieldtip_core::{
    Anchor, ElementId, ErrorEntry, ErrorPayload, FieldErrors, Host, HostElement, HostEvent, Lang,
    Point, Position, Rect, Size, TriLangText, normalize, round2,
};

// --- Overlay re-exports ----------------------------------------------------

pub use fieldtip_overlay::{
    ClassFlags, OFF_SCREEN_PX, OptionsError, OverlayPhase, OverlayState, OverlaySurface,
    POLL_INTERVAL_MS, Placement, PlacementParseError, PointerEvents, SurfaceUpdate,
    TooltipController, TooltipId, TooltipOptions, TooltipOverrides, compute_position,
    is_anchor_covered,
};

// --- Validation re-exports -------------------------------------------------

#[cfg(feature = "validate")]
pub use fieldtip_validate::{
    Email, Field, FieldValidator, FieldValue, Form, GreaterThan, LettersOnly, MaxLength, MaxValue,
    MinLength, MinValue, PasswordRules, RegexPattern, Required, SmallerThan, TrueRequired,
};

#[cfg(feature = "validate")]
pub use fieldtip_validate::messages;

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Anchor, ErrorPayload, FieldErrors, Host, HostElement, HostEvent, Lang, OverlaySurface,
        Placement, SurfaceUpdate, TooltipController, TooltipOptions, TooltipOverrides, normalize,
    };

    #[cfg(feature = "validate")]
    pub use crate::{Field, FieldValidator, FieldValue, Form, Required};
}
