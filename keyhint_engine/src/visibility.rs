// Copyright 2025 the Keyhint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visibility oracle.
//!
//! Decides whether an element is visible enough to deserve a hint. Probes are ordered
//! cheapest first: layout-parent presence, then the host's native visibility query, and
//! only then geometry and computed style.

use crate::types::{ElementKind, HintTarget, Position};

/// Whether `target` participates in layout and is not visually hidden.
///
/// - No layout parent (and not the body): hidden, unless `position: fixed`, whose
///   layout parent is always absent.
/// - Native query available: its answer wins.
/// - Otherwise: a zero-area rectangle, `visibility: hidden`, `display: none`, or
///   opacity 0 means hidden.
pub fn is_visible<T: HintTarget + ?Sized>(target: &T) -> bool {
    if !target.has_layout_parent()
        && target.traits().kind != ElementKind::Body
        && target.computed_style().position != Position::Fixed
    {
        return false;
    }

    if let Some(visible) = target.check_visibility() {
        return visible;
    }

    if target.bounding_rect().is_zero_area() {
        return false;
    }
    target.computed_style().is_rendered()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{ActLog, FakeElement};
    use crate::types::ComputedStyle;
    use kurbo::Rect;

    fn el() -> FakeElement {
        FakeElement::new(1, Rect::new(0.0, 0.0, 50.0, 10.0), &ActLog::default())
    }

    #[test]
    fn plain_element_is_visible() {
        assert!(is_visible(&el()));
    }

    #[test]
    fn detached_element_is_hidden() {
        let mut e = el();
        e.layout_parent = false;
        // Even a native "visible" answer is not consulted.
        e.native = Some(true);
        assert!(!is_visible(&e));
    }

    #[test]
    fn fixed_element_without_layout_parent_is_visible() {
        let mut e = el();
        e.layout_parent = false;
        e.style.position = Position::Fixed;
        assert!(is_visible(&e));
    }

    #[test]
    fn body_without_layout_parent_is_probed_further() {
        let mut e = el().kind(ElementKind::Body);
        e.layout_parent = false;
        assert!(is_visible(&e));
    }

    #[test]
    fn native_query_wins_over_style() {
        let mut e = el();
        e.native = Some(false);
        assert!(!is_visible(&e));

        let mut e = el();
        e.rect = Rect::ZERO;
        e.native = Some(true);
        assert!(is_visible(&e));
    }

    #[test]
    fn fallback_checks_size_and_style() {
        let mut e = el();
        e.rect = Rect::new(10.0, 10.0, 10.0, 40.0);
        assert!(!is_visible(&e), "zero width");

        let mut e = el();
        e.style = ComputedStyle {
            visibility_hidden: true,
            ..Default::default()
        };
        assert!(!is_visible(&e), "visibility hidden");

        let mut e = el();
        e.style.display_none = true;
        assert!(!is_visible(&e), "display none");

        let mut e = el();
        e.style.opacity = 0.0;
        assert!(!is_visible(&e), "transparent");

        let mut e = el();
        e.style.opacity = 0.3;
        assert!(is_visible(&e), "translucent");
    }
}
