#![forbid(unsafe_code)]

//! Tooltip placement strategy.
//!
//! Pure arithmetic: given the anchor's bounding rect, the overlay's
//! measured size, a placement, and an offset, compute the overlay's
//! absolute `top`/`left`. Coordinates are rounded to two decimals so
//! repeated measurements of an unmoved anchor never produce a new
//! position.

use std::fmt;
use std::str::FromStr;

use fieldtip_core::{Position, Rect, Size};

/// Compass-style position of the overlay relative to its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Placement {
    /// Centered above the anchor.
    Top,
    /// Centered below the anchor.
    Bottom,
    /// Left of the anchor, vertically centered.
    Left,
    /// Right of the anchor, vertically centered.
    Right,
    /// Above the anchor, left edges aligned.
    TopLeft,
    /// Below the anchor, left edges aligned.
    #[default]
    BottomLeft,
}

/// All placements, for class-list housekeeping.
pub const PLACEMENTS: [Placement; 6] = [
    Placement::Top,
    Placement::Bottom,
    Placement::Left,
    Placement::Right,
    Placement::TopLeft,
    Placement::BottomLeft,
];

impl Placement {
    /// Kebab-case name, as accepted by [`FromStr`].
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
            Self::TopLeft => "top-left",
            Self::BottomLeft => "bottom-left",
        }
    }

    /// CSS class applied to the overlay for this placement.
    #[must_use]
    pub const fn class_name(&self) -> &'static str {
        match self {
            Self::Top => "tooltip-top",
            Self::Bottom => "tooltip-bottom",
            Self::Left => "tooltip-left",
            Self::Right => "tooltip-right",
            Self::TopLeft => "tooltip-top-left",
            Self::BottomLeft => "tooltip-bottom-left",
        }
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for a placement name outside the closed set.
///
/// Placements are a caller contract; an unknown name is rejected at the
/// configuration boundary instead of silently falling back to a default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacementParseError {
    /// The rejected input.
    pub value: String,
}

impl fmt::Display for PlacementParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown placement {:?} (expected one of: top, bottom, left, right, top-left, bottom-left)",
            self.value
        )
    }
}

impl std::error::Error for PlacementParseError {}

impl FromStr for Placement {
    type Err = PlacementParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PLACEMENTS
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| PlacementParseError {
                value: s.to_string(),
            })
    }
}

/// Compute the overlay's absolute position.
///
/// `anchor` is the anchor's bounding rect in viewport coordinates,
/// `overlay` the overlay's rendered size, `offset` the gap in pixels
/// between the anchor edge and the overlay, and `scroll_y` the document's
/// vertical scroll offset (bounding rects are viewport-relative; the
/// published position is document-absolute).
#[must_use]
pub fn compute_position(
    anchor: Rect,
    overlay: Size,
    placement: Placement,
    offset: f64,
    scroll_y: f64,
) -> Position {
    let top = match placement {
        Placement::Top | Placement::TopLeft => anchor.top + scroll_y - (overlay.height + offset),
        Placement::Bottom | Placement::BottomLeft => anchor.top + scroll_y + anchor.height + offset,
        Placement::Left | Placement::Right => {
            anchor.top + scroll_y + anchor.height / 2.0 - overlay.height / 2.0
        }
    };

    let left = match placement {
        Placement::Top | Placement::Bottom => {
            anchor.left + anchor.width / 2.0 - overlay.width / 2.0
        }
        Placement::TopLeft | Placement::BottomLeft => anchor.left,
        Placement::Left => anchor.left - overlay.width - offset,
        Placement::Right => anchor.left + anchor.width + offset,
    };

    Position::rounded(top, left)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const ANCHOR: Rect = Rect::new(100.0, 50.0, 200.0, 30.0);

    // ── Arithmetic ────────────────────────────────────────────────────

    #[test]
    fn bottom_placement_arithmetic() {
        let pos = compute_position(
            ANCHOR,
            Size::new(120.0, 40.0),
            Placement::Bottom,
            8.0,
            0.0,
        );
        assert_eq!(pos.top, 138.0); // 100 + 30 + 8
        assert_eq!(pos.left, 90.0); // 50 + 200/2 - 120/2
    }

    #[test]
    fn left_placement_arithmetic() {
        let pos = compute_position(ANCHOR, Size::new(80.0, 40.0), Placement::Left, 8.0, 0.0);
        assert_eq!(pos.left, -38.0); // 50 - 80 - 8
        assert_eq!(pos.top, 95.0); // 100 + 30/2 - 40/2
    }

    #[test]
    fn top_placement_arithmetic() {
        let pos = compute_position(ANCHOR, Size::new(120.0, 40.0), Placement::Top, 8.0, 0.0);
        assert_eq!(pos.top, 52.0); // 100 - (40 + 8)
        assert_eq!(pos.left, 90.0);
    }

    #[test]
    fn right_placement_arithmetic() {
        let pos = compute_position(ANCHOR, Size::new(80.0, 40.0), Placement::Right, 8.0, 0.0);
        assert_eq!(pos.left, 258.0); // 50 + 200 + 8
        assert_eq!(pos.top, 95.0);
    }

    #[test]
    fn edge_aligned_placements_use_anchor_left() {
        let size = Size::new(120.0, 40.0);
        let tl = compute_position(ANCHOR, size, Placement::TopLeft, 8.0, 0.0);
        let bl = compute_position(ANCHOR, size, Placement::BottomLeft, 8.0, 0.0);
        assert_eq!(tl.left, 50.0);
        assert_eq!(bl.left, 50.0);
        assert_eq!(tl.top, 52.0);
        assert_eq!(bl.top, 138.0);
    }

    #[test]
    fn scroll_offset_shifts_top_only() {
        let size = Size::new(120.0, 40.0);
        let unscrolled = compute_position(ANCHOR, size, Placement::Bottom, 8.0, 0.0);
        let scrolled = compute_position(ANCHOR, size, Placement::Bottom, 8.0, 250.0);
        assert_eq!(scrolled.top, unscrolled.top + 250.0);
        assert_eq!(scrolled.left, unscrolled.left);
    }

    #[test]
    fn position_is_rounded_to_two_decimals() {
        let anchor = Rect::new(100.111_11, 50.005, 200.0, 30.0);
        let pos = compute_position(anchor, Size::new(121.0, 40.0), Placement::Bottom, 8.0, 0.0);
        assert_eq!(pos.top, 138.11);
        assert_eq!(pos.left, 89.51); // 50.005 + 100 - 60.5 = 89.505 → 89.51
    }

    // ── Parsing ───────────────────────────────────────────────────────

    #[test]
    fn parse_round_trips_all_placements() {
        for placement in PLACEMENTS {
            assert_eq!(placement.as_str().parse::<Placement>(), Ok(placement));
        }
    }

    #[test]
    fn parse_rejects_unknown_values() {
        let err = "bottom-right".parse::<Placement>().unwrap_err();
        assert_eq!(err.value, "bottom-right");
        assert!("TOP".parse::<Placement>().is_err());
        assert!("".parse::<Placement>().is_err());
    }

    #[test]
    fn default_is_bottom_left() {
        assert_eq!(Placement::default(), Placement::BottomLeft);
    }

    #[test]
    fn class_names_carry_the_tooltip_prefix() {
        assert_eq!(Placement::BottomLeft.class_name(), "tooltip-bottom-left");
        assert_eq!(Placement::Top.class_name(), "tooltip-top");
    }

    // ── Properties ────────────────────────────────────────────────────

    proptest! {
        #[test]
        fn published_coordinates_are_always_rounded(
            top in -1.0e4_f64..1.0e4,
            left in -1.0e4_f64..1.0e4,
            w in 0.0_f64..2.0e3,
            h in 0.0_f64..2.0e3,
            ow in 0.0_f64..2.0e3,
            oh in 0.0_f64..2.0e3,
            offset in 0.0_f64..64.0,
            idx in 0usize..6,
        ) {
            let pos = compute_position(
                Rect::new(top, left, w, h),
                Size::new(ow, oh),
                PLACEMENTS[idx],
                offset,
                0.0,
            );
            prop_assert_eq!(pos.top, fieldtip_core::round2(pos.top));
            prop_assert_eq!(pos.left, fieldtip_core::round2(pos.left));
        }

        #[test]
        fn same_inputs_same_position(
            top in -1.0e4_f64..1.0e4,
            left in -1.0e4_f64..1.0e4,
            idx in 0usize..6,
        ) {
            let anchor = Rect::new(top, left, 120.0, 24.0);
            let size = Size::new(90.0, 36.0);
            let a = compute_position(anchor, size, PLACEMENTS[idx], 8.0, 0.0);
            let b = compute_position(anchor, size, PLACEMENTS[idx], 8.0, 0.0);
            prop_assert_eq!(a, b);
        }
    }
}
