// Copyright 2025 the Keyhint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types: element descriptions, keyboard input, and the host traits.
//!
//! ## Overview
//!
//! The engine never touches a real document. A host hands it opaque element handles
//! implementing [`HintTarget`], a [`Page`] that lists them, and an [`OverlayHost`] that
//! draws markers. Everything else in this crate is written against these traits, so a
//! browser binding and a unit test drive the same code.

use alloc::vec::Vec;

use kurbo::{Point, Rect, Size, Vec2};

use crate::overlay::MarkerFlags;

/// Structural page region that biases ranking.
///
/// Reported by [`HintTarget::landmark`] for the *nearest* landmark ancestor only.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Landmark {
    /// `<nav>` or `role="navigation"`.
    Navigation,
    /// `<header>`.
    Header,
    /// `<aside>` or `role="complementary"`.
    Aside,
    /// `<footer>`.
    Footer,
    /// `role="banner"` on an element that is not a `<header>`.
    Banner,
}

impl Landmark {
    /// Ranking bonus for elements inside this landmark.
    pub const fn bonus(self) -> f64 {
        match self {
            Self::Navigation => 1000.0,
            Self::Header => 800.0,
            Self::Aside => 600.0,
            Self::Footer | Self::Banner => 0.0,
        }
    }
}

/// Tag identity of an element, as far as the engine cares.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum ElementKind {
    /// `<a>`.
    Anchor,
    /// `<button>`.
    Button,
    /// `<input>`.
    Input,
    /// `<textarea>`.
    TextArea,
    /// `<select>`.
    Select,
    /// `<summary>`.
    Summary,
    /// `<body>`.
    Body,
    /// Any other tag.
    #[default]
    Other,
}

impl ElementKind {
    /// Whether activation should also move keyboard focus to the element.
    pub const fn is_text_entry(self) -> bool {
        matches!(self, Self::Input | Self::TextArea)
    }
}

/// Static facts about an element used by candidate discovery.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct ElementTraits {
    /// Tag identity.
    pub kind: ElementKind,
    /// Element carries an inline click handler.
    pub has_click_handler: bool,
    /// Element has `role="button"`.
    pub button_role: bool,
    /// Parsed `tabindex` attribute, if present.
    pub tab_index: Option<i32>,
}

/// Computed `position` of an element.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum Position {
    /// `static`.
    #[default]
    Static,
    /// `relative`.
    Relative,
    /// `absolute`.
    Absolute,
    /// `fixed`.
    Fixed,
    /// `sticky`.
    Sticky,
}

/// The subset of computed style the visibility oracle reads.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ComputedStyle {
    /// Computed `position`.
    pub position: Position,
    /// `display: none`.
    pub display_none: bool,
    /// `visibility: hidden`.
    pub visibility_hidden: bool,
    /// Computed `opacity` in `0.0..=1.0`.
    pub opacity: f64,
}

impl Default for ComputedStyle {
    fn default() -> Self {
        Self {
            position: Position::Static,
            display_none: false,
            visibility_hidden: false,
            opacity: 1.0,
        }
    }
}

impl ComputedStyle {
    /// True when none of the visual-hiding mechanisms apply.
    pub fn is_rendered(&self) -> bool {
        !self.display_none && !self.visibility_hidden && self.opacity > 0.0
    }
}

/// Viewport geometry at the time a session opens.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Viewport {
    /// Inner width and height of the viewport.
    pub size: Size,
    /// Document scroll offset; added to viewport-relative positions to get
    /// document-relative ones.
    pub scroll: Vec2,
}

impl Viewport {
    /// A viewport of the given size with no scroll offset.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            size: Size::new(width, height),
            scroll: Vec2::ZERO,
        }
    }

    /// Returns this viewport scrolled by `scroll`.
    pub fn with_scroll(self, scroll: Vec2) -> Self {
        Self { scroll, ..self }
    }

    /// Center of the viewport in viewport coordinates.
    pub fn center(&self) -> Point {
        Point::new(self.size.width / 2.0, self.size.height / 2.0)
    }

    /// Convert a viewport-relative point to a document-relative one.
    pub fn to_document(&self, p: Point) -> Point {
        p + self.scroll
    }
}

bitflags::bitflags! {
    /// Keyboard modifiers held during a keystroke, also used for synthesized clicks.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// Shift.
        const SHIFT = 0b0000_0001;
        /// Control.
        const CTRL  = 0b0000_0010;
        /// Alt / Option.
        const ALT   = 0b0000_0100;
        /// Meta / Command.
        const META  = 0b0000_1000;
    }
}

impl Modifiers {
    /// Modifiers that veto the hint trigger. Shift is excluded: it selects the
    /// alternate-context variant.
    pub const COMMAND: Self = Self::CTRL.union(Self::ALT).union(Self::META);

    /// Modifiers asserted on an alternate-context click. Ctrl opens in the background on
    /// Windows and Linux, Meta on macOS.
    pub const OPEN_ALTERNATE: Self = Self::CTRL.union(Self::META);
}

/// Logical key of a keystroke.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Key {
    /// A printable character, already case-adjusted by the platform (`'F'` for
    /// shift+f).
    Char(char),
    /// Escape: cancels hint mode.
    Escape,
    /// Backspace: erases one typed character.
    Backspace,
    /// Anything else.
    Other,
}

/// One keystroke as seen by [`HintMachine::handle_key`](crate::machine::HintMachine::handle_key).
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct KeyInput {
    /// The key.
    pub key: Key,
    /// Modifiers held.
    pub modifiers: Modifiers,
    /// The keystroke targets a text input, text area, or content-editable element.
    pub editable_target: bool,
}

impl KeyInput {
    /// A bare keystroke aimed at a non-editable target.
    pub fn new(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::empty(),
            editable_target: false,
        }
    }

    /// A printable character. Upper-case letters imply [`Modifiers::SHIFT`].
    pub fn char(c: char) -> Self {
        let modifiers = if c.is_ascii_uppercase() {
            Modifiers::SHIFT
        } else {
            Modifiers::empty()
        };
        Self {
            key: Key::Char(c),
            modifiers,
            editable_target: false,
        }
    }

    /// Returns this keystroke with `modifiers` added.
    pub fn with_modifiers(self, modifiers: Modifiers) -> Self {
        Self {
            modifiers: self.modifiers | modifiers,
            ..self
        }
    }

    /// Returns this keystroke aimed at an editable target.
    pub fn on_editable(self) -> Self {
        Self {
            editable_target: true,
            ..self
        }
    }
}

/// What the host should do with a keystroke after the engine has seen it.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Disposition {
    /// Let the page handle the key normally.
    Ignored,
    /// Suppress default handling and stop propagation.
    Consumed,
}

impl Disposition {
    /// True for [`Disposition::Consumed`].
    pub fn is_consumed(self) -> bool {
        matches!(self, Self::Consumed)
    }
}

/// An opaque handle to a page element.
///
/// Handles are non-owning: the page owns the element, the engine holds a clone of the
/// handle for one hint session. Methods take `&self` because activation acts on the
/// page, not on the handle.
pub trait HintTarget {
    /// Tag identity and discovery attributes.
    fn traits(&self) -> ElementTraits;
    /// Bounding rectangle relative to the viewport.
    fn bounding_rect(&self) -> Rect;
    /// Whether the element has a layout parent (an `offsetParent`).
    fn has_layout_parent(&self) -> bool;
    /// Computed style. Only read when the cheaper probes do not decide visibility.
    fn computed_style(&self) -> ComputedStyle;
    /// Native visibility query checking opacity and CSS visibility, if the host has one.
    fn check_visibility(&self) -> Option<bool> {
        None
    }
    /// Nearest landmark ancestor, if any.
    fn landmark(&self) -> Option<Landmark>;
    /// Direct activation.
    fn click(&self);
    /// Dispatch a synthesized, bubbling pointer click with `modifiers` asserted.
    fn click_with(&self, modifiers: Modifiers);
    /// Move keyboard focus to the element.
    fn focus(&self);
}

/// The current document, as far as hinting is concerned.
pub trait Page {
    /// Element handle type.
    type Target: HintTarget + Clone;
    /// Elements that may be actionable, in document order.
    ///
    /// Hosts may pre-filter (for example with a selector query); the engine still
    /// applies its own actionability and visibility checks.
    fn elements(&self) -> Vec<Self::Target>;
    /// Current viewport.
    fn viewport(&self) -> Viewport;
}

/// Drawing surface for hint markers.
///
/// All markers live under one overlay root; detaching the root removes every marker
/// with it.
pub trait OverlayHost {
    /// Handle to one drawn marker.
    type Marker;
    /// Attach an empty overlay root above page content at `z_index`.
    fn attach_root(&mut self, z_index: i32);
    /// Create a marker showing `text` with its top-left corner at the document-relative
    /// `origin`.
    fn create_marker(&mut self, text: &str, origin: Point, flags: MarkerFlags) -> Self::Marker;
    /// Update the presentation flags of an existing marker.
    fn update_marker(&mut self, marker: &Self::Marker, flags: MarkerFlags);
    /// Remove the overlay root and all of its markers.
    fn detach_root(&mut self);
}
