#![forbid(unsafe_code)]

//! Tooltip lifecycle controller.
//!
//! One controller manages the error tooltip of one form control: it merges
//! options, normalizes error payloads, mounts and unmounts the overlay
//! through the [`OverlaySurface`] seam, and drives the
//! [`OverlayState`](crate::OverlayState) machine from two explicit clock
//! inputs the host supplies:
//!
//! - [`TooltipController::on_frame`] after the host's next layout pass,
//!   finalizing the position of a freshly mounted overlay;
//! - [`TooltipController::tick`] with a monotonic millisecond clock,
//!   driving the reposition/obstruction poll every [`POLL_INTERVAL_MS`].
//!
//! There is no hidden scheduling. A disposed controller ignores every
//! input, so teardown is a hard guarantee rather than a race.

use tracing::{debug, trace};

use fieldtip_core::{Anchor, FieldErrors, Host, HostEvent, Lang, normalize};

use crate::obstruction::is_anchor_covered;
use crate::options::{OptionsError, TooltipOptions, TooltipOverrides};
use crate::overlay::OverlayState;
use crate::surface::{OverlaySurface, SurfaceUpdate};

/// Milliseconds between reposition polls while an overlay is mounted.
pub const POLL_INTERVAL_MS: u64 = 300;

/// The per-control tooltip controller.
///
/// `A` measures the anchored form control, `H` hit-tests the document, and
/// `S` renders the overlay. All three are host-provided; the controller
/// holds the only mutable tooltip state.
pub struct TooltipController<A, H, S>
where
    A: Anchor,
    H: Host,
    S: OverlaySurface,
{
    anchor: A,
    host: H,
    surface: S,
    object: TooltipOverrides,
    overrides: TooltipOverrides,
    options: TooltipOptions,
    errors: FieldErrors,
    lang: Lang,
    state: OverlayState,
    mounted: bool,
    pending_frame: bool,
    next_poll_at: Option<u64>,
    disposed: bool,
}

impl<A, H, S> TooltipController<A, H, S>
where
    A: Anchor,
    H: Host,
    S: OverlaySurface,
{
    /// Attach a controller to a form control.
    ///
    /// `object` is the shared options object, `overrides` the per-field
    /// overrides; the merged result is validated here so a bad
    /// configuration fails at attach time, not at first show.
    pub fn attach(
        anchor: A,
        host: H,
        surface: S,
        object: TooltipOverrides,
        overrides: TooltipOverrides,
    ) -> Result<Self, OptionsError> {
        let options = TooltipOptions::merged(&object, &overrides);
        options.validate()?;
        let state = OverlayState::new(options.placement, options.shadow);
        Ok(Self {
            anchor,
            host,
            surface,
            object,
            overrides,
            options,
            errors: FieldErrors::new(),
            lang: Lang::default(),
            state,
            mounted: false,
            pending_frame: false,
            next_poll_at: None,
            disposed: false,
        })
    }

    /// Whether an overlay is currently mounted.
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// The merged options in effect.
    #[must_use]
    pub fn options(&self) -> &TooltipOptions {
        &self.options
    }

    /// The overlay state machine, for inspection.
    #[must_use]
    pub fn overlay(&self) -> &OverlayState {
        &self.state
    }

    /// Current display language.
    #[must_use]
    pub fn language(&self) -> Lang {
        self.lang
    }

    /// Replace the field's raw error set.
    ///
    /// A mounted overlay refreshes its content in place; if the new set
    /// normalizes to nothing, the overlay is torn down.
    pub fn set_errors(&mut self, errors: FieldErrors) {
        if self.disposed {
            return;
        }
        self.errors = errors;
        if self.mounted {
            let payloads = normalize(&self.errors, self.options.show_first_error_only);
            if payloads.is_empty() {
                self.hide_error_tooltip();
            } else {
                self.surface.mount(&payloads, &self.options, self.lang);
                self.pending_frame = true;
            }
        }
    }

    /// Replace the shared options object and re-merge.
    pub fn set_options(&mut self, object: TooltipOverrides) -> Result<(), OptionsError> {
        if self.disposed {
            return Ok(());
        }
        self.object = object;
        self.remerge()
    }

    /// Replace the per-field overrides and re-merge.
    pub fn set_overrides(&mut self, overrides: TooltipOverrides) -> Result<(), OptionsError> {
        if self.disposed {
            return Ok(());
        }
        self.overrides = overrides;
        self.remerge()
    }

    /// Switch the display language.
    ///
    /// A mounted overlay re-renders its texts immediately; nothing else
    /// about its state changes.
    pub fn set_language(&mut self, lang: Lang) {
        if self.disposed || lang == self.lang {
            return;
        }
        self.lang = lang;
        if self.mounted {
            let payloads = normalize(&self.errors, self.options.show_first_error_only);
            self.surface.mount(&payloads, &self.options, self.lang);
            self.pending_frame = true;
        }
    }

    /// Show the error tooltip for the current error set.
    ///
    /// No-op when the set normalizes to nothing. Any previously mounted
    /// overlay is destroyed first, so at most one overlay is ever live.
    pub fn show_error_tooltip(&mut self) {
        if self.disposed {
            return;
        }
        let payloads = normalize(&self.errors, self.options.show_first_error_only);
        if payloads.is_empty() {
            return;
        }
        if self.mounted {
            self.teardown();
        }
        debug!(errors = payloads.len(), "show error tooltip");
        self.surface.mount(&payloads, &self.options, self.lang);
        self.state.show();
        self.surface.apply(&SurfaceUpdate::snapshot(&self.state, &self.options));
        self.mounted = true;
        self.pending_frame = true;
        self.next_poll_at = None;
    }

    /// Hide and destroy the overlay, if any.
    pub fn hide_error_tooltip(&mut self) {
        if self.mounted {
            debug!("hide error tooltip");
            self.teardown();
        }
    }

    /// Feed a host interaction event.
    ///
    /// Any interaction with the control (pointer down, focus in) or the
    /// tooltip itself dismisses a mounted overlay. A form submission shows
    /// the tooltip when the control has errors.
    pub fn handle_event(&mut self, event: HostEvent) {
        if self.disposed {
            return;
        }
        if event.dismisses() {
            self.hide_error_tooltip();
            return;
        }
        if event == HostEvent::FormSubmitted {
            self.show_error_tooltip();
        }
    }

    /// Notify the controller that the host completed a layout pass.
    ///
    /// Finalizes the position of a freshly mounted (or re-rendered)
    /// overlay. Idempotent; a no-op unless a mount is pending measurement.
    pub fn on_frame(&mut self) {
        if self.disposed || !self.mounted || !self.pending_frame {
            return;
        }
        self.pending_frame = false;
        self.sync_now();
    }

    /// Advance the reposition poll to `now_ms` (monotonic milliseconds).
    ///
    /// The first tick after a mount arms the poll; every elapsed interval
    /// after that re-measures the anchor and re-checks obstruction. Calling
    /// more often than the interval is harmless.
    pub fn tick(&mut self, now_ms: u64) {
        if self.disposed || !self.mounted {
            return;
        }
        match self.next_poll_at {
            None => self.next_poll_at = Some(now_ms + POLL_INTERVAL_MS),
            Some(due) if now_ms >= due => {
                self.next_poll_at = Some(now_ms + POLL_INTERVAL_MS);
                self.sync_now();
            }
            Some(_) => {}
        }
    }

    /// Detach from the form control, destroying any mounted overlay.
    ///
    /// Every later call on this controller is a no-op.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        debug!("dispose tooltip controller");
        self.teardown();
        self.disposed = true;
    }

    fn remerge(&mut self) -> Result<(), OptionsError> {
        let options = TooltipOptions::merged(&self.object, &self.overrides);
        options.validate()?;
        self.options = options;
        self.state.set_style(self.options.placement, self.options.shadow);
        if self.mounted {
            let payloads = normalize(&self.errors, self.options.show_first_error_only);
            if payloads.is_empty() {
                self.hide_error_tooltip();
            } else {
                self.surface.mount(&payloads, &self.options, self.lang);
                self.pending_frame = true;
            }
        }
        Ok(())
    }

    /// Measure anchor and overlay, run the obstruction check, and push a
    /// surface update when the rendered state changed. A detached anchor or
    /// an unmeasured overlay leaves everything as-is.
    fn sync_now(&mut self) {
        let Some(rect) = self.anchor.bounding_rect() else {
            return;
        };
        let Some(size) = self.surface.measure() else {
            return;
        };
        let covered = is_anchor_covered(&self.host, self.anchor.id(), rect);
        let changed = self
            .state
            .sync(rect, size, covered, self.options.offset, self.host.scroll_y());
        if changed {
            trace!(
                covered,
                visible = self.state.is_visible(),
                "overlay state changed"
            );
            self.surface.apply(&SurfaceUpdate::snapshot(&self.state, &self.options));
        }
    }

    fn teardown(&mut self) {
        if self.mounted {
            self.surface.unmount();
        }
        self.state.hide();
        self.mounted = false;
        self.pending_frame = false;
        self.next_poll_at = None;
    }
}

impl<A, H, S> Drop for TooltipController<A, H, S>
where
    A: Anchor,
    H: Host,
    S: OverlaySurface,
{
    fn drop(&mut self) {
        if !self.disposed {
            self.teardown();
        }
    }
}
