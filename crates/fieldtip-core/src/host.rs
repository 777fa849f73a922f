#![forbid(unsafe_code)]

//! Boundary traits the host UI layer implements.
//!
//! The overlay engine never touches a real render tree. It sees three
//! capabilities: an [`Anchor`] it can measure, a [`Host`] it can hit-test,
//! and a stream of [`HostEvent`]s the host forwards. All of these borrow
//! host-owned elements; the engine owns none of them.
//!
//! # Invariants
//!
//! 1. `Anchor::bounding_rect` returns `None` once the element is detached
//!    from the render tree; engine operations then degrade to no-ops.
//! 2. [`ElementId`] values are stable for the lifetime of an element and
//!    unique within one host.

use crate::geometry::{Rect, Size};

/// Opaque identity of a host element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(pub u64);

impl ElementId {
    /// Create a new element id.
    #[inline]
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }
}

/// The form control an error tooltip is attached to.
///
/// Borrowed from the host; measurement queries return `None` when the
/// element has been detached.
pub trait Anchor {
    /// Stable identity of the anchor element.
    fn id(&self) -> ElementId;

    /// Bounding rectangle in viewport coordinates, or `None` if detached.
    fn bounding_rect(&self) -> Option<Rect>;

    /// Layout size (the offset-dimensions query), or `None` if detached.
    fn offset_size(&self) -> Option<Size>;
}

/// An element reference produced by the host's point hit-test.
///
/// Supports the ancestor walk the obstruction detector needs, plus the
/// capability check that replaces class-name sniffing: an element either is
/// or is not part of the currently mounted overlay.
pub trait HostElement: Sized {
    /// Stable identity of this element.
    fn id(&self) -> ElementId;

    /// Parent element, or `None` at the root.
    fn parent(&self) -> Option<Self>;

    /// Whether this element is a descendant of the overlay root (label,
    /// arrow, error list, or the overlay element itself).
    fn is_overlay_part(&self) -> bool;
}

/// The document-level capabilities of the host UI.
pub trait Host {
    /// Element type produced by hit-testing.
    type Element: HostElement;

    /// The element drawn at the given viewport point, or `None`.
    fn element_at(&self, x: f64, y: f64) -> Option<Self::Element>;

    /// Current vertical scroll offset of the document.
    fn scroll_y(&self) -> f64;
}

/// Interaction events the host forwards to the tooltip controller.
///
/// Pointer-down and focus-in cover mouse, touch, and keyboard tab
/// navigation; a click anywhere inside the tooltip dismisses it as well
/// ("dismiss on next interaction", not "dismiss on outside click").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
    /// Pointer pressed down on the anchor element.
    PointerDownOnAnchor,
    /// Anchor element (or a descendant) received focus.
    FocusInOnAnchor,
    /// User clicked inside the tooltip overlay.
    TooltipClicked,
    /// The form owning the anchor was submitted.
    FormSubmitted,
}

impl HostEvent {
    /// Whether this event dismisses a visible tooltip.
    #[inline]
    #[must_use]
    pub const fn dismisses(&self) -> bool {
        matches!(
            self,
            Self::PointerDownOnAnchor | Self::FocusInOnAnchor | Self::TooltipClicked
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dismissal_events() {
        assert!(HostEvent::PointerDownOnAnchor.dismisses());
        assert!(HostEvent::FocusInOnAnchor.dismisses());
        assert!(HostEvent::TooltipClicked.dismisses());
        assert!(!HostEvent::FormSubmitted.dismisses());
    }

    #[test]
    fn element_id_equality() {
        assert_eq!(ElementId::new(7), ElementId(7));
        assert_ne!(ElementId::new(7), ElementId::new(8));
    }
}
