//! Max-Drop Pruner
//!
//! Finds the largest discontinuity ("knee") in a descending score list.
//!
//! ```text
//! scores: 0.90  0.85  0.30  0.25  0.10  (0)
//! gaps:      0.05  0.55  0.05  0.15  0.10
//!                   ▲ cut = 2
//! ```
//!
//! Every consecutive pair is a cut candidate, plus the final gap from the
//! last score down to an implicit floor of zero. A candidate qualifies when
//! its gap satisfies the gap threshold and the policy flags do not exclude
//! it. The largest qualifying gap wins; on ties the earliest position is
//! kept. Without a qualifying gap the whole list is retained.
//!
//! `full_signature_constraint`: when `best - worst < worst`, the list is one
//! undifferentiated tier and is kept whole.

use crate::config::{MaxDropConfig, Threshold};
use crate::features::prune::domain::{CandidateSetFinder, Scored};
use crate::shared::models::Fraction;

/// Knee finder over descending scores
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaxDropFinder {
    gap_threshold: Threshold,
    full_signature_constraint: bool,
    ignore_last_drop: bool,
}

impl Default for MaxDropFinder {
    /// Any positive gap qualifies, no policy flags
    fn default() -> Self {
        Self::new(Threshold::greater_than(Fraction::ZERO))
    }
}

impl MaxDropFinder {
    pub fn new(gap_threshold: Threshold) -> Self {
        Self {
            gap_threshold,
            full_signature_constraint: false,
            ignore_last_drop: false,
        }
    }

    pub fn from_config(config: &MaxDropConfig) -> Self {
        Self {
            gap_threshold: config.gap_threshold,
            full_signature_constraint: config.full_signature_constraint,
            ignore_last_drop: config.ignore_last_drop,
        }
    }

    pub fn with_full_signature_constraint(mut self, enabled: bool) -> Self {
        self.full_signature_constraint = enabled;
        self
    }

    pub fn with_ignore_last_drop(mut self, enabled: bool) -> Self {
        self.ignore_last_drop = enabled;
        self
    }

    /// Replace the gap threshold, keeping the policy flags
    pub fn with_gap_threshold(mut self, gap_threshold: Threshold) -> Self {
        self.gap_threshold = gap_threshold;
        self
    }

    pub fn gap_threshold(&self) -> Threshold {
        self.gap_threshold
    }

    /// Like [`prune_index`](CandidateSetFinder::prune_index), but only gaps
    /// after position `start` are cut candidates. The result is at least
    /// `start` (clamped to the list length).
    pub fn prune_index_from<T: Scored>(&self, elements: &[T], start: usize) -> usize {
        let len = elements.len();
        if start >= len {
            return len;
        }

        let last = elements[len - 1].score();
        if self.full_signature_constraint && elements[0].score() - last < last {
            return len;
        }

        let mut best: Option<(f64, usize)> = None;
        for position in start..len {
            let is_last = position + 1 == len;
            if is_last && self.ignore_last_drop {
                continue;
            }
            let next = if is_last {
                0.0
            } else {
                elements[position + 1].score()
            };
            let gap = elements[position].score() - next;
            if !self.gap_threshold.is_satisfied_by_f64(gap) {
                continue;
            }
            if best.map_or(true, |(largest, _)| gap > largest) {
                best = Some((gap, position + 1));
            }
        }

        best.map(|(_, cut)| cut).unwrap_or(len)
    }
}

impl CandidateSetFinder for MaxDropFinder {
    fn prune_index<T: Scored>(&self, elements: &[T]) -> usize {
        self.prune_index_from(elements, 0)
    }

    fn name(&self) -> &'static str {
        "max-drop"
    }
}
