#![forbid(unsafe_code)]

//! Core types for fieldtip: geometry, host boundary traits, and the error
//! payload model.
//!
//! This crate owns everything the overlay engine and the validators have to
//! agree on, without depending on either: CSS-pixel rectangles, the opaque
//! capabilities a host UI must provide (anchor measurement, point
//! hit-testing, interaction events), and the displayable error payload
//! (plain string or tri-language bundle) together with its normalizer.

pub mod geometry;
pub mod host;
pub mod payload;

pub use geometry::{Point, Position, Rect, Size, round2};
pub use host::{Anchor, ElementId, Host, HostElement, HostEvent};
pub use payload::{ErrorEntry, ErrorPayload, FieldErrors, Lang, TriLangText, normalize};
