// Copyright 2025 the Keyhint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyhint Engine: keyboard-driven activation of on-page controls.
//!
//! ## Overview
//!
//! On a trigger keystroke the engine finds every actionable, visible element of a page,
//! ranks them, and overlays a short label ("hint") on each. Typing a label activates its
//! element; Escape backs out. The engine is host-agnostic: it sees the page only through
//! the traits in [`types`], so a browser binding and a unit test drive the same code.
//!
//! ## Pieces
//!
//! - [`visibility`]: decides whether an element is visible, cheapest probe first.
//! - [`discover`]: keeps the actionable, visible elements in document order.
//! - [`rank`]: scores candidates by landmark, area, and distance from the viewport
//!   center, so the best ones get the shortest, most comfortable labels.
//! - [`overlay`]: labels ranked candidates with [`keyhint_label`] and keeps markers in
//!   sync with the typed prefix.
//! - [`machine`]: the idle/hinting state machine that consumes keystrokes and performs
//!   the activation.
//!
//! ## Workflow
//!
//! 1) Implement [`HintTarget`](types::HintTarget) for your element handle,
//!    [`Page`](types::Page) for the document, and [`OverlayHost`](types::OverlayHost)
//!    for your marker layer.
//! 2) Build a [`HintMachine`](machine::HintMachine) around the overlay host.
//! 3) Feed every keydown to [`HintMachine::handle_key`](machine::HintMachine::handle_key)
//!    and suppress the key when it reports [`Disposition::Consumed`](types::Disposition).
//!
//! ## Example
//!
//! ```
//! use core::cell::Cell;
//! use keyhint_engine::machine::HintMachine;
//! use keyhint_engine::overlay::MarkerFlags;
//! use keyhint_engine::types::{
//!     ComputedStyle, Disposition, ElementKind, ElementTraits, HintTarget, KeyInput, Landmark,
//!     Modifiers, OverlayHost, Page, Viewport,
//! };
//! use kurbo::{Point, Rect};
//!
//! #[derive(Clone)]
//! struct Link<'a> { rect: Rect, clicks: &'a Cell<u32> }
//!
//! impl HintTarget for Link<'_> {
//!     fn traits(&self) -> ElementTraits {
//!         ElementTraits { kind: ElementKind::Anchor, ..Default::default() }
//!     }
//!     fn bounding_rect(&self) -> Rect { self.rect }
//!     fn has_layout_parent(&self) -> bool { true }
//!     fn computed_style(&self) -> ComputedStyle { ComputedStyle::default() }
//!     fn landmark(&self) -> Option<Landmark> { None }
//!     fn click(&self) { self.clicks.set(self.clicks.get() + 1) }
//!     fn click_with(&self, _: Modifiers) {}
//!     fn focus(&self) {}
//! }
//!
//! struct Doc<'a>(Vec<Link<'a>>);
//!
//! impl<'a> Page for Doc<'a> {
//!     type Target = Link<'a>;
//!     fn elements(&self) -> Vec<Link<'a>> { self.0.clone() }
//!     fn viewport(&self) -> Viewport { Viewport::new(800.0, 600.0) }
//! }
//!
//! #[derive(Default)]
//! struct Markers(Vec<String>);
//!
//! impl OverlayHost for Markers {
//!     type Marker = usize;
//!     fn attach_root(&mut self, _z: i32) {}
//!     fn create_marker(&mut self, text: &str, _at: Point, _f: MarkerFlags) -> usize {
//!         self.0.push(text.into());
//!         self.0.len() - 1
//!     }
//!     fn update_marker(&mut self, _m: &usize, _f: MarkerFlags) {}
//!     fn detach_root(&mut self) { self.0.clear() }
//! }
//!
//! let clicks = Cell::new(0);
//! let doc = Doc(vec![
//!     Link { rect: Rect::new(380.0, 290.0, 420.0, 310.0), clicks: &clicks },
//!     Link { rect: Rect::new(0.0, 0.0, 40.0, 20.0), clicks: &clicks },
//! ]);
//!
//! let mut machine = HintMachine::new(Markers::default());
//! assert_eq!(machine.handle_key(&doc, KeyInput::char('f')), Disposition::Consumed);
//! assert_eq!(machine.overlay().host().0, ["F", "J"]);
//!
//! // The central link ranked first and got "f".
//! machine.handle_key(&doc, KeyInput::char('f'));
//! assert_eq!(clicks.get(), 1);
//! assert!(!machine.is_hinting());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod discover;
pub mod machine;
pub mod overlay;
pub mod rank;
pub mod types;
pub mod visibility;

#[cfg(test)]
mod testing;

pub use keyhint_label;
