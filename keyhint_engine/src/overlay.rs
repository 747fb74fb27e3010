// Copyright 2025 the Keyhint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hint overlay manager.
//!
//! ## Overview
//!
//! [`HintOverlay`] owns the hints of one session: each pairs an element handle with its
//! label and the marker drawn for it. It ranks candidates, hands out labels in rank
//! order, and keeps the markers in sync with the typed prefix through an
//! [`OverlayHost`].
//!
//! Markers are positioned at the element's document-relative top-left corner and show
//! the label in upper case. All of them hang off a single overlay root attached at
//! [`OVERLAY_Z_INDEX`], so they sit above page content. Nothing outside that root is
//! touched.
//!
//! ## Lifecycle
//!
//! 1) [`HintOverlay::open`] attaches the root and creates one marker per candidate.
//! 2) [`HintOverlay::apply_prefix_filter`] shows markers whose label starts with the
//!    typed prefix and hides the rest.
//! 3) [`HintOverlay::close`] detaches the root and forgets the hints. Closing twice is
//!    a no-op.

use alloc::string::String;
use alloc::vec::Vec;

use keyhint_label::Alphabet;

use crate::rank::rank_scored;
use crate::types::{HintTarget, OverlayHost, Viewport};

/// Z-index of the overlay root: the largest 32-bit value, above any page content.
pub const OVERLAY_Z_INDEX: i32 = i32::MAX;

bitflags::bitflags! {
    /// Presentation flags of a hint marker.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct MarkerFlags: u8 {
        /// Marker is shown.
        const VISIBLE   = 0b0000_0001;
        /// Marker's label starts with a non-empty typed prefix.
        const MATCHED   = 0b0000_0010;
        /// Session activates in an alternate context (new tab); drawn distinctly.
        const ALTERNATE = 0b0000_0100;
    }
}

/// One hint: an element, its label, and its marker.
#[derive(Clone, Debug)]
pub struct Hint<H, M> {
    target: H,
    label: String,
    marker: M,
}

impl<H, M> Hint<H, M> {
    /// The element this hint activates.
    pub fn target(&self) -> &H {
        &self.target
    }

    /// Lower-case label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Marker handle from the overlay host.
    pub fn marker(&self) -> &M {
        &self.marker
    }
}

/// Owner of the hints and overlay root of one session.
pub struct HintOverlay<H, O: OverlayHost> {
    host: O,
    alphabet: Alphabet,
    hints: Vec<Hint<H, O::Marker>>,
    alternate: bool,
    open: bool,
}

impl<H, O: OverlayHost> core::fmt::Debug for HintOverlay<H, O> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("HintOverlay")
            .field("open", &self.open)
            .field("hints", &self.hints.len())
            .field("alternate", &self.alternate)
            .finish_non_exhaustive()
    }
}

impl<H: HintTarget, O: OverlayHost> HintOverlay<H, O> {
    /// Create a closed overlay drawing through `host` with the default alphabet.
    pub fn new(host: O) -> Self {
        Self::with_alphabet(host, Alphabet::DEFAULT)
    }

    /// Create a closed overlay with a custom label alphabet.
    pub fn with_alphabet(host: O, alphabet: Alphabet) -> Self {
        Self {
            host,
            alphabet,
            hints: Vec::new(),
            alternate: false,
            open: false,
        }
    }

    /// Rank `candidates`, label them, and draw one marker each.
    ///
    /// An overlay that is already open is closed first, so at most one root exists.
    /// `alternate` flags every marker with [`MarkerFlags::ALTERNATE`].
    pub fn open(&mut self, candidates: Vec<H>, viewport: Viewport, alternate: bool) {
        self.close();

        let ranked = rank_scored(candidates, viewport.size);
        let total = ranked.len();
        self.alternate = alternate;
        let flags = self.base_flags() | MarkerFlags::VISIBLE;

        self.host.attach_root(OVERLAY_Z_INDEX);
        self.open = true;

        let mut hints = Vec::with_capacity(total);
        for (scored, label) in ranked.into_iter().zip(self.alphabet.labels(total)) {
            let origin = viewport.to_document(scored.rect.origin());
            let marker = self
                .host
                .create_marker(&label.to_ascii_uppercase(), origin, flags);
            hints.push(Hint {
                target: scored.target,
                label,
                marker,
            });
        }
        self.hints = hints;

        log::debug!(
            "hint overlay opened: {} hints, label length {}, alternate {}",
            total,
            self.alphabet.label_len(total),
            alternate
        );
    }

    /// Detach the overlay root and discard all hints. No-op when already closed.
    pub fn close(&mut self) {
        if self.open {
            self.host.detach_root();
            self.open = false;
            log::debug!("hint overlay closed");
        }
        self.hints.clear();
        self.alternate = false;
    }

    /// Show markers whose label starts with `prefix` (ignoring case), hide the rest.
    ///
    /// With a non-empty prefix, shown markers are also flagged
    /// [`MarkerFlags::MATCHED`]; an empty prefix shows every marker unmatched.
    pub fn apply_prefix_filter(&mut self, prefix: &str) {
        let base = self.base_flags();
        let mut shown = 0;
        for hint in &self.hints {
            let mut flags = base;
            if starts_with_ignore_case(&hint.label, prefix) {
                flags |= MarkerFlags::VISIBLE;
                flags.set(MarkerFlags::MATCHED, !prefix.is_empty());
                shown += 1;
            }
            self.host.update_marker(&hint.marker, flags);
        }
        log::trace!("prefix {prefix:?} leaves {shown} of {} hints", self.hints.len());
    }

    /// The hint whose label equals `typed` (ignoring case).
    pub fn find_exact(&self, typed: &str) -> Option<&Hint<H, O::Marker>> {
        self.hints
            .iter()
            .find(|h| h.label.eq_ignore_ascii_case(typed))
    }

    /// Whether any label starts with `prefix` (ignoring case).
    pub fn any_starts_with(&self, prefix: &str) -> bool {
        self.hints
            .iter()
            .any(|h| starts_with_ignore_case(&h.label, prefix))
    }

    /// Hints in rank order.
    pub fn hints(&self) -> &[Hint<H, O::Marker>] {
        &self.hints
    }

    /// Whether the overlay root is attached.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// The overlay host.
    pub fn host(&self) -> &O {
        &self.host
    }

    fn base_flags(&self) -> MarkerFlags {
        if self.alternate {
            MarkerFlags::ALTERNATE
        } else {
            MarkerFlags::empty()
        }
    }
}

fn starts_with_ignore_case(label: &str, prefix: &str) -> bool {
    label.len() >= prefix.len()
        && label.as_bytes()[..prefix.len()].eq_ignore_ascii_case(prefix.as_bytes())
}
