// Copyright 2025 the Keyhint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Candidate discovery: which page elements get a hint.

use alloc::vec::Vec;

use crate::types::{ElementKind, ElementTraits, HintTarget};
use crate::visibility::is_visible;

/// Whether an element with these traits can be activated from the keyboard.
///
/// Links, buttons, form controls, and `<summary>` always qualify. Other elements
/// qualify with a click handler, `role="button"`, or a tab index other than `-1`.
pub fn is_actionable(traits: &ElementTraits) -> bool {
    match traits.kind {
        ElementKind::Anchor
        | ElementKind::Button
        | ElementKind::Input
        | ElementKind::TextArea
        | ElementKind::Select
        | ElementKind::Summary => true,
        ElementKind::Body | ElementKind::Other => {
            traits.has_click_handler
                || traits.button_role
                || traits.tab_index.is_some_and(|t| t != -1)
        }
    }
}

/// Keep the actionable, visible elements, preserving document order.
pub fn discover<T, I>(elements: I) -> Vec<T>
where
    T: HintTarget,
    I: IntoIterator<Item = T>,
{
    elements
        .into_iter()
        .filter(|e| is_actionable(&e.traits()) && is_visible(e))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{ActLog, FakeElement, column};

    #[test]
    fn tags_are_actionable() {
        for kind in [
            ElementKind::Anchor,
            ElementKind::Button,
            ElementKind::Input,
            ElementKind::TextArea,
            ElementKind::Select,
            ElementKind::Summary,
        ] {
            let t = ElementTraits {
                kind,
                ..Default::default()
            };
            assert!(is_actionable(&t), "{kind:?}");
        }
        assert!(!is_actionable(&ElementTraits::default()));
    }

    #[test]
    fn generic_elements_need_a_reason() {
        let click = ElementTraits {
            has_click_handler: true,
            ..Default::default()
        };
        let role = ElementTraits {
            button_role: true,
            ..Default::default()
        };
        let tab = ElementTraits {
            tab_index: Some(0),
            ..Default::default()
        };
        let untabbable = ElementTraits {
            tab_index: Some(-1),
            ..Default::default()
        };
        assert!(is_actionable(&click));
        assert!(is_actionable(&role));
        assert!(is_actionable(&tab));
        assert!(!is_actionable(&untabbable));
    }

    #[test]
    fn discover_filters_and_keeps_document_order() {
        let log = ActLog::default();
        let mut els = column(5, &log);
        els[1].traits.kind = ElementKind::Other;
        els[3].style.display_none = true;
        let found: Vec<u32> = discover(els).iter().map(|e: &FakeElement| e.id).collect();
        assert_eq!(found, [0, 2, 4]);
    }
}
