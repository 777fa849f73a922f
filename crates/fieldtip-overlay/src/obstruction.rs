#![forbid(unsafe_code)]

//! Obstruction detection.
//!
//! A tooltip auto-hides when something else is drawn over its anchor (a
//! modal, a sticky header scrolled into place), but must not hide because
//! the tooltip itself overlaps the anchor. The check hit-tests the
//! anchor's center point and classifies what it finds:
//!
//! - the anchor itself → not covered;
//! - any part of the mounted overlay (label, arrow, error list) → not
//!   covered, so the tooltip never suppresses itself;
//! - an element whose ancestor chain contains the anchor → not covered
//!   (the point landed on a child of the anchor);
//! - anything else → covered.
//!
//! Overlay membership is a host capability
//! ([`HostElement::is_overlay_part`]), not class-name matching.

use fieldtip_core::{ElementId, Host, HostElement, Rect};

/// Whether another element currently covers the anchor's center.
///
/// `anchor_rect` must be the anchor's current bounding rect; `anchor_id`
/// its identity. Nothing at the hit point counts as uncovered (transparent
/// regions do not suppress the tooltip).
#[must_use]
pub fn is_anchor_covered<H: Host>(host: &H, anchor_id: ElementId, anchor_rect: Rect) -> bool {
    let center = anchor_rect.center();
    let Some(hit) = host.element_at(center.x, center.y) else {
        return false;
    };

    if hit.id() == anchor_id {
        return false;
    }
    if hit.is_overlay_part() {
        return false;
    }

    // Walk up from the hit element; finding the anchor means the point
    // landed inside it.
    let mut current = hit.parent();
    while let Some(element) = current {
        if element.id() == anchor_id {
            return false;
        }
        current = element.parent();
    }

    true
}
