// Copyright 2025 the Keyhint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Element ranker.
//!
//! ## Scoring
//!
//! Each candidate scores `bonus + area / 1000 − distance / 5`, where
//!
//! - `bonus` comes from the nearest [`Landmark`](crate::types::Landmark) ancestor
//!   (navigation 1000, header 800, aside 600, otherwise 0),
//! - `area` is the bounding rectangle's area in square pixels,
//! - `distance` is the Euclidean distance from the rectangle's center to the
//!   viewport's center.
//!
//! The bonus dominates: navigation controls get the shortest labels wherever they sit.
//! Within a tier, bigger and more central elements come first.
//!
//! ## Ordering
//!
//! Descending by score, stable: equal scores keep document order. A NaN score (from
//! degenerate geometry) ranks last.

use alloc::vec::Vec;

use kurbo::{Point, Rect, Size};

use crate::types::HintTarget;

/// Area is divided by this before it joins the score.
pub const AREA_DIVISOR: f64 = 1000.0;
/// Distance from the viewport center is divided by this before it is subtracted.
pub const DISTANCE_DIVISOR: f64 = 5.0;

/// A candidate with its score and the rectangle the score was computed from.
#[derive(Clone, Debug)]
pub struct ScoredCandidate<H> {
    /// The element.
    pub target: H,
    /// Ranking score; higher ranks first.
    pub score: f64,
    /// Viewport-relative bounding rectangle.
    pub rect: Rect,
}

/// Score a rectangle with the given landmark bonus against a viewport center.
pub fn score_rect(rect: Rect, bonus: f64, center: Point) -> f64 {
    let distance = rect.center().distance(center);
    bonus + rect.area() / AREA_DIVISOR - distance / DISTANCE_DIVISOR
}

/// Score one candidate.
pub fn score<H: HintTarget + ?Sized>(target: &H, viewport: Size) -> f64 {
    let center = Point::new(viewport.width / 2.0, viewport.height / 2.0);
    let bonus = target.landmark().map_or(0.0, |l| l.bonus());
    score_rect(target.bounding_rect(), bonus, center)
}

/// Score every candidate and sort descending, keeping document order on ties.
pub fn rank_scored<H: HintTarget>(candidates: Vec<H>, viewport: Size) -> Vec<ScoredCandidate<H>> {
    let center = Point::new(viewport.width / 2.0, viewport.height / 2.0);
    let mut scored: Vec<ScoredCandidate<H>> = candidates
        .into_iter()
        .map(|target| {
            let rect = target.bounding_rect();
            let bonus = target.landmark().map_or(0.0, |l| l.bonus());
            let score = score_rect(rect, bonus, center);
            ScoredCandidate {
                score: if score.is_nan() { f64::NEG_INFINITY } else { score },
                rect,
                target,
            }
        })
        .collect();
    // `sort_by` is stable; scores are NaN-free here so the order is total.
    scored.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(core::cmp::Ordering::Equal)
    });
    scored
}

/// Order candidates from most to least useful.
pub fn rank<H: HintTarget>(candidates: Vec<H>, viewport: Size) -> Vec<H> {
    rank_scored(candidates, viewport)
        .into_iter()
        .map(|s| s.target)
        .collect()
}
