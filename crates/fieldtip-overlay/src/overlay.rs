#![forbid(unsafe_code)]

//! Overlay visibility/position state machine.
//!
//! One [`OverlayState`] exists per live tooltip. It owns visibility, the
//! computed position, and the CSS-class outputs; the lifecycle controller
//! feeds it measurements and obstruction verdicts and forwards the
//! resulting [`crate::SurfaceUpdate`]s to the host.
//!
//! Phases: `Hidden` → `Measuring` (overlay mounted off-screen, dimensions
//! not yet usable) → `Shown` (positioned at least once). Obstruction is a
//! visibility state, not a phase: a `Shown` overlay whose anchor becomes
//! covered keeps its phase but drops `is_visible` and gains the
//! display-none class.

use bitflags::bitflags;

use fieldtip_core::{Position, Rect, Size};

use crate::placement::{Placement, compute_position};

/// Off-screen sentinel coordinate applied before the first measurement, so
/// the overlay can be measured without flickering into view.
pub const OFF_SCREEN_PX: f64 = -9999.0;

bitflags! {
    /// CSS classes the rendering surface toggles on the overlay root.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ClassFlags: u8 {
        /// `tooltip-show`
        const SHOW = 1 << 0;
        /// `tooltip-hide`
        const HIDE = 1 << 1;
        /// `tooltip-display-none`
        const DISPLAY_NONE = 1 << 2;
        /// `tooltip-shadow`
        const SHADOW = 1 << 3;
        /// `tooltip-error`
        const ERROR = 1 << 4;
    }
}

/// Lifecycle phase of one overlay instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlayPhase {
    /// No overlay exists (initial and terminal).
    #[default]
    Hidden,
    /// Overlay mounted off-screen; position not yet finalized.
    Measuring,
    /// Overlay positioned at least once.
    Shown,
}

/// Mutable state of one tooltip overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayState {
    phase: OverlayPhase,
    visible: bool,
    position: Option<Position>,
    last_anchor_rect: Option<Rect>,
    placement: Placement,
    shadow: bool,
}

impl OverlayState {
    /// Create state for a not-yet-shown overlay.
    #[must_use]
    pub fn new(placement: Placement, shadow: bool) -> Self {
        Self {
            phase: OverlayPhase::Hidden,
            visible: false,
            position: None,
            last_anchor_rect: None,
            placement,
            shadow,
        }
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> OverlayPhase {
        self.phase
    }

    /// Whether the overlay is currently displayed.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Finalized position, or `None` while off-screen.
    #[must_use]
    pub fn position(&self) -> Option<Position> {
        self.position
    }

    /// The anchor rect used for the last sync.
    #[must_use]
    pub fn last_anchor_rect(&self) -> Option<Rect> {
        self.last_anchor_rect
    }

    /// Placement in effect.
    #[must_use]
    pub fn placement(&self) -> Placement {
        self.placement
    }

    /// Update placement and shadow from re-merged options.
    pub fn set_style(&mut self, placement: Placement, shadow: bool) {
        self.placement = placement;
        self.shadow = shadow;
    }

    /// Begin showing: enter `Measuring` at the off-screen sentinel.
    ///
    /// Any previous position and measurement history is discarded, so a
    /// `show` immediately after a `hide` starts clean.
    pub fn show(&mut self) {
        self.phase = OverlayPhase::Measuring;
        self.visible = false;
        self.position = None;
        self.last_anchor_rect = None;
    }

    /// Return to `Hidden`, discarding all per-overlay state.
    pub fn hide(&mut self) {
        self.phase = OverlayPhase::Hidden;
        self.visible = false;
        self.position = None;
        self.last_anchor_rect = None;
    }

    /// Feed a measurement into the state machine.
    ///
    /// Covers both the post-`show` finalization and later repositioning.
    /// Returns `true` when any rendered output (visibility or position)
    /// changed and the surface needs a new update. A zero-size overlay is
    /// a transient measurement inconsistency: nothing changes and the
    /// phase stays `Measuring` until a later call succeeds.
    pub fn sync(
        &mut self,
        anchor_rect: Rect,
        overlay_size: Size,
        covered: bool,
        offset: f64,
        scroll_y: f64,
    ) -> bool {
        if self.phase == OverlayPhase::Hidden {
            return false;
        }
        if overlay_size.is_empty() || anchor_rect.is_empty() {
            return false;
        }

        self.last_anchor_rect = Some(anchor_rect);

        if covered {
            let changed = self.visible;
            self.visible = false;
            return changed;
        }

        let mut changed = !self.visible;
        self.visible = true;

        let position = compute_position(anchor_rect, overlay_size, self.placement, offset, scroll_y);
        if self.position != Some(position) {
            self.position = Some(position);
            changed = true;
        }
        self.phase = OverlayPhase::Shown;
        changed
    }

    /// The class set the surface should apply right now.
    #[must_use]
    pub fn classes(&self) -> ClassFlags {
        let mut classes = ClassFlags::ERROR;
        if self.shadow {
            classes |= ClassFlags::SHADOW;
        }
        if self.visible {
            classes |= ClassFlags::SHOW;
        } else {
            classes |= ClassFlags::HIDE | ClassFlags::DISPLAY_NONE;
        }
        classes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ANCHOR: Rect = Rect::new(100.0, 50.0, 200.0, 30.0);
    const SIZE: Size = Size::new(120.0, 40.0);

    fn shown_state() -> OverlayState {
        let mut state = OverlayState::new(Placement::Bottom, true);
        state.show();
        assert!(state.sync(ANCHOR, SIZE, false, 8.0, 0.0));
        state
    }

    // ── Phase transitions ─────────────────────────────────────────────

    #[test]
    fn show_enters_measuring_off_screen() {
        let mut state = OverlayState::new(Placement::Bottom, true);
        state.show();
        assert_eq!(state.phase(), OverlayPhase::Measuring);
        assert!(!state.is_visible());
        assert_eq!(state.position(), None);
    }

    #[test]
    fn successful_sync_enters_shown() {
        let state = shown_state();
        assert_eq!(state.phase(), OverlayPhase::Shown);
        assert!(state.is_visible());
        let pos = state.position().unwrap();
        assert_eq!(pos.top, 138.0);
        assert_eq!(pos.left, 90.0);
    }

    #[test]
    fn hide_resets_everything() {
        let mut state = shown_state();
        state.hide();
        assert_eq!(state.phase(), OverlayPhase::Hidden);
        assert!(!state.is_visible());
        assert_eq!(state.position(), None);
        assert_eq!(state.last_anchor_rect(), None);
    }

    #[test]
    fn sync_in_hidden_is_a_noop() {
        let mut state = OverlayState::new(Placement::Bottom, true);
        assert!(!state.sync(ANCHOR, SIZE, false, 8.0, 0.0));
        assert_eq!(state.phase(), OverlayPhase::Hidden);
    }

    #[test]
    fn show_after_hide_starts_clean() {
        let mut state = shown_state();
        state.hide();
        state.show();
        assert_eq!(state.phase(), OverlayPhase::Measuring);
        assert_eq!(state.position(), None);
    }

    // ── Obstruction ───────────────────────────────────────────────────

    #[test]
    fn covered_anchor_suppresses_display_without_position() {
        let mut state = OverlayState::new(Placement::Bottom, true);
        state.show();
        // Not visible before, not visible after: nothing changed.
        assert!(!state.sync(ANCHOR, SIZE, true, 8.0, 0.0));
        assert!(!state.is_visible());
        assert_eq!(state.position(), None);
        assert_eq!(state.phase(), OverlayPhase::Measuring);
        assert!(state.classes().contains(ClassFlags::DISPLAY_NONE));
    }

    #[test]
    fn shown_overlay_hides_when_anchor_becomes_covered() {
        let mut state = shown_state();
        assert!(state.sync(ANCHOR, SIZE, true, 8.0, 0.0));
        assert!(!state.is_visible());
        assert_eq!(state.phase(), OverlayPhase::Shown);
        // Old position is retained for when the anchor uncovers.
        assert!(state.position().is_some());
    }

    #[test]
    fn uncovering_restores_visibility() {
        let mut state = shown_state();
        state.sync(ANCHOR, SIZE, true, 8.0, 0.0);
        assert!(state.sync(ANCHOR, SIZE, false, 8.0, 0.0));
        assert!(state.is_visible());
    }

    // ── Reposition semantics ──────────────────────────────────────────

    #[test]
    fn unchanged_measurement_is_a_noop() {
        let mut state = shown_state();
        assert!(!state.sync(ANCHOR, SIZE, false, 8.0, 0.0));
    }

    #[test]
    fn sub_hundredth_movement_is_a_noop() {
        let mut state = shown_state();
        let nudged = Rect::new(ANCHOR.top + 0.001, ANCHOR.left + 0.002, 200.0, 30.0);
        assert!(!state.sync(nudged, SIZE, false, 8.0, 0.0));
    }

    #[test]
    fn real_movement_updates_position() {
        let mut state = shown_state();
        let moved = Rect::new(160.0, 50.0, 200.0, 30.0);
        assert!(state.sync(moved, SIZE, false, 8.0, 0.0));
        assert_eq!(state.position().unwrap().top, 198.0);
    }

    #[test]
    fn zero_size_overlay_stays_measuring() {
        let mut state = OverlayState::new(Placement::Bottom, true);
        state.show();
        assert!(!state.sync(ANCHOR, Size::new(0.0, 0.0), false, 8.0, 0.0));
        assert_eq!(state.phase(), OverlayPhase::Measuring);
        assert_eq!(state.position(), None);
    }

    #[test]
    fn zero_size_anchor_stays_off_screen() {
        let mut state = OverlayState::new(Placement::Bottom, true);
        state.show();
        assert!(!state.sync(Rect::new(10.0, 10.0, 0.0, 0.0), SIZE, false, 8.0, 0.0));
        assert_eq!(state.position(), None);
    }

    // ── Classes ───────────────────────────────────────────────────────

    #[test]
    fn visible_classes() {
        let state = shown_state();
        let classes = state.classes();
        assert!(classes.contains(ClassFlags::SHOW));
        assert!(classes.contains(ClassFlags::SHADOW));
        assert!(classes.contains(ClassFlags::ERROR));
        assert!(!classes.contains(ClassFlags::HIDE));
        assert!(!classes.contains(ClassFlags::DISPLAY_NONE));
    }

    #[test]
    fn hidden_classes() {
        let state = OverlayState::new(Placement::Bottom, false);
        let classes = state.classes();
        assert!(classes.contains(ClassFlags::HIDE));
        assert!(classes.contains(ClassFlags::DISPLAY_NONE));
        assert!(!classes.contains(ClassFlags::SHOW));
        assert!(!classes.contains(ClassFlags::SHADOW));
    }
}
