#![forbid(unsafe_code)]

//! A tiny simulated document: named controls with rects, an optional
//! covering element, and a console-printing overlay surface. Enough host
//! to drive the tooltip engine end to end without a browser.

use std::cell::RefCell;
use std::rc::Rc;

use fieldtip::{
    Anchor, ElementId, ErrorPayload, Host, HostElement, Lang, OverlaySurface, Rect, Size,
    SurfaceUpdate, TooltipOptions,
};
use tracing::info;

#[derive(Debug, Default)]
struct DocState {
    controls: Vec<(u64, Rect)>,
    cover: Option<(u64, Rect)>,
    scroll_y: f64,
}

/// Shared handle to the simulated document.
#[derive(Clone, Default)]
pub struct SimDocument(Rc<RefCell<DocState>>);

impl SimDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a form control at a fixed position.
    pub fn add_control(&self, id: u64, rect: Rect) {
        self.0.borrow_mut().controls.push((id, rect));
    }

    /// Move a control (layout shift).
    pub fn move_control(&self, id: u64, rect: Rect) {
        if let Some(slot) = self.0.borrow_mut().controls.iter_mut().find(|(i, _)| *i == id) {
            slot.1 = rect;
        }
    }

    /// Draw a covering element (a modal, say) over part of the document.
    pub fn cover(&self, id: u64, rect: Rect) {
        self.0.borrow_mut().cover = Some((id, rect));
    }

    /// Remove the covering element.
    pub fn uncover(&self) {
        self.0.borrow_mut().cover = None;
    }

    /// Scroll the document vertically.
    pub fn scroll_to(&self, y: f64) {
        self.0.borrow_mut().scroll_y = y;
    }

    /// An anchor handle for one registered control.
    pub fn anchor(&self, id: u64) -> SimAnchor {
        SimAnchor {
            doc: self.clone(),
            id,
        }
    }
}

impl Host for SimDocument {
    type Element = SimElement;

    fn element_at(&self, x: f64, y: f64) -> Option<SimElement> {
        let state = self.0.borrow();
        let point = fieldtip::Point::new(x, y);
        if let Some((id, rect)) = state.cover {
            if rect.contains(point) {
                return Some(SimElement(id));
            }
        }
        state
            .controls
            .iter()
            .find(|(_, rect)| rect.contains(point))
            .map(|(id, _)| SimElement(*id))
    }

    fn scroll_y(&self) -> f64 {
        self.0.borrow().scroll_y
    }
}

/// A flat element: the simulation has no nesting.
#[derive(Debug, Clone)]
pub struct SimElement(pub u64);

impl HostElement for SimElement {
    fn id(&self) -> ElementId {
        ElementId::new(self.0)
    }

    fn parent(&self) -> Option<Self> {
        None
    }

    fn is_overlay_part(&self) -> bool {
        false
    }
}

/// Handle to one control, measurable as a tooltip anchor.
#[derive(Clone)]
pub struct SimAnchor {
    doc: SimDocument,
    id: u64,
}

impl Anchor for SimAnchor {
    fn id(&self) -> ElementId {
        ElementId::new(self.id)
    }

    fn bounding_rect(&self) -> Option<Rect> {
        self.doc
            .0
            .borrow()
            .controls
            .iter()
            .find(|(id, _)| *id == self.id)
            .map(|(_, rect)| *rect)
    }

    fn offset_size(&self) -> Option<Size> {
        self.bounding_rect().map(|r| r.size())
    }
}

/// Overlay surface that renders to the log and fakes text metrics.
pub struct ConsoleSurface {
    label: &'static str,
    lines: Vec<String>,
}

impl ConsoleSurface {
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            lines: Vec::new(),
        }
    }
}

impl OverlaySurface for ConsoleSurface {
    fn mount(&mut self, errors: &[ErrorPayload], _options: &TooltipOptions, lang: Lang) {
        self.lines = errors
            .iter()
            .filter_map(|p| p.resolve(lang))
            .map(str::to_string)
            .collect();
        info!(anchor = self.label, lines = self.lines.len(), "mount tooltip");
        for line in &self.lines {
            println!("  [{}] {line}", self.label);
        }
    }

    fn unmount(&mut self) {
        info!(anchor = self.label, "unmount tooltip");
        self.lines.clear();
    }

    fn measure(&self) -> Option<Size> {
        if self.lines.is_empty() {
            return None;
        }
        // Crude text metrics: 7px per character, 18px per line.
        let widest = self.lines.iter().map(|l| l.chars().count()).max()?;
        Some(Size::new(
            16.0 + 7.0 * widest as f64,
            12.0 + 18.0 * self.lines.len() as f64,
        ))
    }

    fn apply(&mut self, update: &SurfaceUpdate) {
        match update.position {
            Some(pos) => println!(
                "  [{}] {} at top={} left={} (z={})",
                self.label,
                if update.classes.contains(fieldtip::ClassFlags::SHOW) {
                    "shown"
                } else {
                    "hidden"
                },
                pos.top,
                pos.left,
                update.z_index
            ),
            None => println!("  [{}] parked off-screen", self.label),
        }
    }
}
