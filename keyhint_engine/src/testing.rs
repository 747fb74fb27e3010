// Copyright 2025 the Keyhint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Synthetic page, elements, and overlay shared by the unit tests.

use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::RefCell;

use kurbo::{Point, Rect};

use crate::overlay::MarkerFlags;
use crate::types::{
    ComputedStyle, ElementKind, ElementTraits, HintTarget, Landmark, Modifiers, OverlayHost, Page,
    Viewport,
};

/// Something done to an element.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Act {
    Click(u32),
    ClickWith(u32, Modifiers),
    Focus(u32),
}

pub(crate) type ActLog = Rc<RefCell<Vec<Act>>>;

#[derive(Clone, Debug)]
pub(crate) struct FakeElement {
    pub(crate) id: u32,
    pub(crate) rect: Rect,
    pub(crate) traits: ElementTraits,
    pub(crate) landmark: Option<Landmark>,
    pub(crate) layout_parent: bool,
    pub(crate) style: ComputedStyle,
    pub(crate) native: Option<bool>,
    pub(crate) log: ActLog,
}

impl FakeElement {
    pub(crate) fn new(id: u32, rect: Rect, log: &ActLog) -> Self {
        Self {
            id,
            rect,
            traits: ElementTraits {
                kind: ElementKind::Anchor,
                ..Default::default()
            },
            landmark: None,
            layout_parent: true,
            style: ComputedStyle::default(),
            native: None,
            log: log.clone(),
        }
    }

    pub(crate) fn kind(mut self, kind: ElementKind) -> Self {
        self.traits.kind = kind;
        self
    }

    pub(crate) fn in_landmark(mut self, landmark: Landmark) -> Self {
        self.landmark = Some(landmark);
        self
    }
}

impl HintTarget for FakeElement {
    fn traits(&self) -> ElementTraits {
        self.traits
    }
    fn bounding_rect(&self) -> Rect {
        self.rect
    }
    fn has_layout_parent(&self) -> bool {
        self.layout_parent
    }
    fn computed_style(&self) -> ComputedStyle {
        self.style
    }
    fn check_visibility(&self) -> Option<bool> {
        self.native
    }
    fn landmark(&self) -> Option<Landmark> {
        self.landmark
    }
    fn click(&self) {
        self.log.borrow_mut().push(Act::Click(self.id));
    }
    fn click_with(&self, modifiers: Modifiers) {
        self.log.borrow_mut().push(Act::ClickWith(self.id, modifiers));
    }
    fn focus(&self) {
        self.log.borrow_mut().push(Act::Focus(self.id));
    }
}

#[derive(Clone, Debug)]
pub(crate) struct FakePage {
    pub(crate) elements: Vec<FakeElement>,
    pub(crate) viewport: Viewport,
}

impl Page for FakePage {
    type Target = FakeElement;
    fn elements(&self) -> Vec<FakeElement> {
        self.elements.clone()
    }
    fn viewport(&self) -> Viewport {
        self.viewport
    }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct FakeMarker {
    pub(crate) text: String,
    pub(crate) origin: Point,
    pub(crate) flags: MarkerFlags,
}

#[derive(Clone, Debug, Default)]
pub(crate) struct FakeHost {
    pub(crate) root: Option<i32>,
    pub(crate) markers: Vec<FakeMarker>,
    pub(crate) attaches: usize,
    pub(crate) detaches: usize,
}

impl FakeHost {
    pub(crate) fn visible_texts(&self) -> Vec<&str> {
        self.markers
            .iter()
            .filter(|m| m.flags.contains(MarkerFlags::VISIBLE))
            .map(|m| m.text.as_str())
            .collect()
    }
}

impl OverlayHost for FakeHost {
    type Marker = usize;

    fn attach_root(&mut self, z_index: i32) {
        self.root = Some(z_index);
        self.attaches += 1;
    }

    fn create_marker(&mut self, text: &str, origin: Point, flags: MarkerFlags) -> usize {
        self.markers.push(FakeMarker {
            text: text.into(),
            origin,
            flags,
        });
        self.markers.len() - 1
    }

    fn update_marker(&mut self, marker: &usize, flags: MarkerFlags) {
        self.markers[*marker].flags = flags;
    }

    fn detach_root(&mut self) {
        self.root = None;
        self.markers.clear();
        self.detaches += 1;
    }
}

/// `n` anchors laid out in a column, 100×20 each, ids `0..n`.
pub(crate) fn column(n: u32, log: &ActLog) -> Vec<FakeElement> {
    (0..n)
        .map(|i| {
            let y = f64::from(i) * 30.0;
            FakeElement::new(i, Rect::new(0.0, y, 100.0, y + 20.0), log)
        })
        .collect()
}
