#![forbid(unsafe_code)]

//! The rendering seam between the engine and the host UI.
//!
//! The controller never draws. It mounts content, asks for measurements,
//! and pushes [`SurfaceUpdate`]s; the host-side [`OverlaySurface`]
//! implementation owns the actual overlay element.

use fieldtip_core::{ErrorPayload, Lang, Position, Size};

use crate::options::{PointerEvents, TooltipOptions};
use crate::overlay::{ClassFlags, OverlayState};

/// Everything the surface needs to render the overlay in its current state.
///
/// `position` is `None` while the overlay is still measuring; the surface
/// keeps it parked at [`crate::OFF_SCREEN_PX`] until a position arrives.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceUpdate {
    /// Toggleable overlay classes.
    pub classes: ClassFlags,
    /// The placement class, e.g. `tooltip-bottom-left`.
    pub placement_class: &'static str,
    /// Space-separated custom classes from the options.
    pub tooltip_class: String,
    /// Finalized absolute position, if any.
    pub position: Option<Position>,
    /// Stacking order.
    pub z_index: i32,
    /// Fixed width passthrough.
    pub width: Option<String>,
    /// Max-width passthrough.
    pub max_width: Option<String>,
    /// Pointer-events mode.
    pub pointer_events: PointerEvents,
}

impl SurfaceUpdate {
    /// Snapshot the renderable state of an overlay.
    #[must_use]
    pub fn snapshot(state: &OverlayState, options: &TooltipOptions) -> Self {
        Self {
            classes: state.classes(),
            placement_class: state.placement().class_name(),
            tooltip_class: options.tooltip_class.clone(),
            position: state.position(),
            z_index: options.z_index,
            width: options.width.clone(),
            max_width: options.max_width.clone(),
            pointer_events: options.pointer_events,
        }
    }
}

/// Host-side rendering of the tooltip overlay.
///
/// One surface backs one controller. The controller guarantees `mount` and
/// `unmount` alternate, except that `mount` on an already-mounted surface
/// replaces the rendered content in place (errors or language changed).
pub trait OverlaySurface {
    /// Create (or refresh) the overlay element with the given error texts.
    ///
    /// `errors` is the normalized payload list in field order; `lang`
    /// selects which localized variant the surface should resolve. The
    /// freshly mounted overlay sits at the off-screen sentinel until the
    /// first [`OverlaySurface::apply`] carrying a position.
    fn mount(&mut self, errors: &[ErrorPayload], options: &TooltipOptions, lang: Lang);

    /// Destroy the overlay element.
    fn unmount(&mut self);

    /// Rendered size of the mounted overlay, or `None` when the layout
    /// pass has not happened yet.
    fn measure(&self) -> Option<Size>;

    /// Apply a rendered-state snapshot to the overlay element.
    fn apply(&mut self, update: &SurfaceUpdate);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::placement::Placement;

    #[test]
    fn snapshot_of_fresh_overlay_has_no_position() {
        let mut state = OverlayState::new(Placement::BottomLeft, true);
        state.show();
        let update = SurfaceUpdate::snapshot(&state, &TooltipOptions::default());
        assert_eq!(update.position, None);
        assert_eq!(update.placement_class, "tooltip-bottom-left");
        assert!(update.classes.contains(ClassFlags::DISPLAY_NONE));
        assert_eq!(update.z_index, 1101);
        assert_eq!(update.max_width.as_deref(), Some("350px"));
    }

    #[test]
    fn snapshot_carries_option_passthroughs() {
        let state = OverlayState::new(Placement::Right, false);
        let mut options = TooltipOptions::default();
        options.tooltip_class = "warn".to_string();
        options.width = Some("220px".to_string());
        options.pointer_events = PointerEvents::None;

        let update = SurfaceUpdate::snapshot(&state, &options);
        assert_eq!(update.tooltip_class, "warn");
        assert_eq!(update.width.as_deref(), Some("220px"));
        assert_eq!(update.pointer_events, PointerEvents::None);
        assert_eq!(update.placement_class, "tooltip-right");
        assert!(!update.classes.contains(ClassFlags::SHADOW));
    }
}
