// Copyright 2025 the Keyhint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A text-mode page and overlay shared by the demos.

use std::cell::RefCell;
use std::rc::Rc;

use keyhint_engine::overlay::MarkerFlags;
use keyhint_engine::types::{
    ComputedStyle, ElementKind, ElementTraits, HintTarget, Landmark, Modifiers, OverlayHost, Page,
    Viewport,
};
use kurbo::{Point, Rect};

/// Route `log` records to stderr; filter with `RUST_LOG` (e.g. `RUST_LOG=debug`).
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}

/// Activation journal shared by all elements of a page.
pub type Journal = Rc<RefCell<Vec<String>>>;

/// A named element with fixed geometry.
#[derive(Clone, Debug)]
pub struct DemoElement {
    /// Name printed when activated.
    pub name: &'static str,
    /// Viewport-relative bounds.
    pub rect: Rect,
    /// Tag identity.
    pub kind: ElementKind,
    /// Nearest landmark ancestor.
    pub landmark: Option<Landmark>,
    /// Hidden with `display: none`.
    pub hidden: bool,
    journal: Journal,
}

impl HintTarget for DemoElement {
    fn traits(&self) -> ElementTraits {
        ElementTraits {
            kind: self.kind,
            ..Default::default()
        }
    }
    fn bounding_rect(&self) -> Rect {
        self.rect
    }
    fn has_layout_parent(&self) -> bool {
        true
    }
    fn computed_style(&self) -> ComputedStyle {
        ComputedStyle {
            display_none: self.hidden,
            ..Default::default()
        }
    }
    fn landmark(&self) -> Option<Landmark> {
        self.landmark
    }
    fn click(&self) {
        self.journal.borrow_mut().push(format!("click {}", self.name));
    }
    fn click_with(&self, modifiers: Modifiers) {
        self.journal
            .borrow_mut()
            .push(format!("click {} with {modifiers:?}", self.name));
    }
    fn focus(&self) {
        self.journal.borrow_mut().push(format!("focus {}", self.name));
    }
}

/// A page of [`DemoElement`]s.
#[derive(Debug, Default)]
pub struct DemoPage {
    elements: Vec<DemoElement>,
    viewport: Viewport,
    journal: Journal,
}

impl DemoPage {
    /// An empty page with the given viewport.
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            ..Default::default()
        }
    }

    /// Append an element in document order.
    pub fn push(
        &mut self,
        name: &'static str,
        rect: Rect,
        kind: ElementKind,
        landmark: Option<Landmark>,
    ) {
        self.elements.push(DemoElement {
            name,
            rect,
            kind,
            landmark,
            hidden: false,
            journal: self.journal.clone(),
        });
    }

    /// Hide the element called `name`.
    pub fn hide(&mut self, name: &str) {
        for e in self.elements.iter_mut().filter(|e| e.name == name) {
            e.hidden = true;
        }
    }

    /// Drain the activation journal.
    pub fn take_journal(&self) -> Vec<String> {
        std::mem::take(&mut *self.journal.borrow_mut())
    }
}

impl Page for DemoPage {
    type Target = DemoElement;
    fn elements(&self) -> Vec<DemoElement> {
        self.elements.clone()
    }
    fn viewport(&self) -> Viewport {
        self.viewport
    }
}

/// One marker as drawn.
#[derive(Clone, Debug)]
pub struct DrawnMarker {
    /// Upper-case label.
    pub text: String,
    /// Document-relative top-left corner.
    pub origin: Point,
    /// Presentation flags.
    pub flags: MarkerFlags,
}

/// An overlay that keeps markers in memory and renders them as text.
#[derive(Debug, Default)]
pub struct ConsoleOverlay {
    markers: Vec<DrawnMarker>,
    z_index: Option<i32>,
}

impl ConsoleOverlay {
    /// One line per visible marker, `*` for matched, `+` for alternate context.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for m in self
            .markers
            .iter()
            .filter(|m| m.flags.contains(MarkerFlags::VISIBLE))
        {
            let matched = if m.flags.contains(MarkerFlags::MATCHED) {
                "*"
            } else {
                " "
            };
            let alt = if m.flags.contains(MarkerFlags::ALTERNATE) {
                "+"
            } else {
                " "
            };
            out.push_str(&format!(
                "  {matched}{alt}{:<4} at ({:>6.1}, {:>6.1})\n",
                m.text, m.origin.x, m.origin.y
            ));
        }
        out
    }

    /// Whether the overlay root is attached.
    pub fn is_attached(&self) -> bool {
        self.z_index.is_some()
    }
}

impl OverlayHost for ConsoleOverlay {
    type Marker = usize;

    fn attach_root(&mut self, z_index: i32) {
        self.z_index = Some(z_index);
    }

    fn create_marker(&mut self, text: &str, origin: Point, flags: MarkerFlags) -> usize {
        self.markers.push(DrawnMarker {
            text: text.to_owned(),
            origin,
            flags,
        });
        self.markers.len() - 1
    }

    fn update_marker(&mut self, marker: &usize, flags: MarkerFlags) {
        if let Some(m) = self.markers.get_mut(*marker) {
            m.flags = flags;
        }
    }

    fn detach_root(&mut self) {
        self.z_index = None;
        self.markers.clear();
    }
}
