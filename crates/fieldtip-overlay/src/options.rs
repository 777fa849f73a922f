#![forbid(unsafe_code)]

//! Tooltip options and merge precedence.
//!
//! Options arrive from up to three sources: library defaults, an options
//! object, and explicit per-field overrides. Merge precedence (highest
//! first): per-field overrides, options object, defaults. The merged
//! [`TooltipOptions`] is total — every field is populated.

use std::fmt;

use crate::placement::Placement;

/// Default z-index of the overlay.
pub const Z_INDEX_DEFAULT: i32 = 1101;

/// Default gap between the anchor edge and the overlay, in pixels.
pub const OFFSET_DEFAULT: f64 = 8.0;

/// Default max-width passthrough.
pub const MAX_WIDTH_DEFAULT: &str = "350px";

/// Opaque tooltip identifier, passed through to the rendering surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TooltipId {
    /// Numeric identifier.
    Num(u64),
    /// Textual identifier.
    Text(String),
}

impl Default for TooltipId {
    fn default() -> Self {
        Self::Num(0)
    }
}

impl From<u64> for TooltipId {
    fn from(id: u64) -> Self {
        Self::Num(id)
    }
}

impl From<&str> for TooltipId {
    fn from(id: &str) -> Self {
        Self::Text(id.to_string())
    }
}

/// Whether the overlay reacts to pointer interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerEvents {
    /// The overlay receives clicks (and "click dismisses" works).
    #[default]
    Auto,
    /// The overlay is transparent to pointer interaction.
    None,
}

impl PointerEvents {
    /// CSS value.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::None => "none",
        }
    }
}

/// Fully resolved tooltip options. Immutable per render pass.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipOptions {
    /// Passthrough identifier.
    pub id: TooltipId,
    /// Overlay placement relative to the anchor.
    pub placement: Placement,
    /// Show only the first normalized error.
    pub show_first_error_only: bool,
    /// Gap between anchor edge and overlay, in pixels.
    pub offset: f64,
    /// Overlay stacking order.
    pub z_index: i32,
    /// Drop-shadow class toggle.
    pub shadow: bool,
    /// Fixed width passthrough (`None` = natural width).
    pub width: Option<String>,
    /// Max-width passthrough (`None` = unconstrained).
    pub max_width: Option<String>,
    /// Pointer-events mode.
    pub pointer_events: PointerEvents,
    /// Space-separated custom class list.
    pub tooltip_class: String,
}

impl Default for TooltipOptions {
    fn default() -> Self {
        Self {
            id: TooltipId::default(),
            placement: Placement::BottomLeft,
            show_first_error_only: false,
            offset: OFFSET_DEFAULT,
            z_index: Z_INDEX_DEFAULT,
            shadow: true,
            width: None,
            max_width: Some(MAX_WIDTH_DEFAULT.to_string()),
            pointer_events: PointerEvents::Auto,
            tooltip_class: String::new(),
        }
    }
}

impl TooltipOptions {
    /// Merge the three option sources into a total value.
    ///
    /// `object` is the options object, `overrides` the explicit per-field
    /// overrides; overrides win over the object, which wins over defaults.
    #[must_use]
    pub fn merged(object: &TooltipOverrides, overrides: &TooltipOverrides) -> Self {
        let mut options = Self::default();
        object.apply_to(&mut options);
        overrides.apply_to(&mut options);
        options
    }

    /// Validate the merged value at the configuration boundary.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if !self.offset.is_finite() {
            return Err(OptionsError::NonFiniteOffset(self.offset));
        }
        if self.offset < 0.0 {
            return Err(OptionsError::NegativeOffset(self.offset));
        }
        Ok(())
    }
}

/// A partial set of tooltip options: only the fields a caller supplied.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TooltipOverrides {
    pub id: Option<TooltipId>,
    pub placement: Option<Placement>,
    pub show_first_error_only: Option<bool>,
    pub offset: Option<f64>,
    pub z_index: Option<i32>,
    pub shadow: Option<bool>,
    pub width: Option<String>,
    pub max_width: Option<String>,
    pub pointer_events: Option<PointerEvents>,
    pub tooltip_class: Option<String>,
}

impl TooltipOverrides {
    /// Create an empty override set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the passthrough identifier.
    #[must_use]
    pub fn id(mut self, id: impl Into<TooltipId>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the placement.
    #[must_use]
    pub fn placement(mut self, placement: Placement) -> Self {
        self.placement = Some(placement);
        self
    }

    /// Set the first-error-only policy.
    #[must_use]
    pub fn show_first_error_only(mut self, value: bool) -> Self {
        self.show_first_error_only = Some(value);
        self
    }

    /// Set the anchor-to-overlay offset in pixels.
    #[must_use]
    pub fn offset(mut self, offset: f64) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Set the z-index.
    #[must_use]
    pub fn z_index(mut self, z_index: i32) -> Self {
        self.z_index = Some(z_index);
        self
    }

    /// Toggle the drop shadow.
    #[must_use]
    pub fn shadow(mut self, shadow: bool) -> Self {
        self.shadow = Some(shadow);
        self
    }

    /// Set the width passthrough.
    #[must_use]
    pub fn width(mut self, width: impl Into<String>) -> Self {
        self.width = Some(width.into());
        self
    }

    /// Set the max-width passthrough.
    #[must_use]
    pub fn max_width(mut self, max_width: impl Into<String>) -> Self {
        self.max_width = Some(max_width.into());
        self
    }

    /// Set the pointer-events mode.
    #[must_use]
    pub fn pointer_events(mut self, mode: PointerEvents) -> Self {
        self.pointer_events = Some(mode);
        self
    }

    /// Set the custom class list.
    #[must_use]
    pub fn tooltip_class(mut self, classes: impl Into<String>) -> Self {
        self.tooltip_class = Some(classes.into());
        self
    }

    /// Overwrite `options` with every field this set defines.
    pub fn apply_to(&self, options: &mut TooltipOptions) {
        if let Some(id) = &self.id {
            options.id = id.clone();
        }
        if let Some(placement) = self.placement {
            options.placement = placement;
        }
        if let Some(first_only) = self.show_first_error_only {
            options.show_first_error_only = first_only;
        }
        if let Some(offset) = self.offset {
            options.offset = offset;
        }
        if let Some(z_index) = self.z_index {
            options.z_index = z_index;
        }
        if let Some(shadow) = self.shadow {
            options.shadow = shadow;
        }
        if let Some(width) = &self.width {
            options.width = Some(width.clone());
        }
        if let Some(max_width) = &self.max_width {
            options.max_width = Some(max_width.clone());
        }
        if let Some(mode) = self.pointer_events {
            options.pointer_events = mode;
        }
        if let Some(classes) = &self.tooltip_class {
            options.tooltip_class = classes.clone();
        }
    }
}

/// Configuration contract violations, rejected at the boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionsError {
    /// Offset is NaN or infinite.
    NonFiniteOffset(f64),
    /// Offset is negative.
    NegativeOffset(f64),
}

impl fmt::Display for OptionsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFiniteOffset(v) => write!(f, "tooltip offset must be finite, got {v}"),
            Self::NegativeOffset(v) => write!(f, "tooltip offset must be non-negative, got {v}"),
        }
    }
}

impl std::error::Error for OptionsError {}
