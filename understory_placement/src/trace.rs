// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Explainability helpers for placement decisions.
//!
//! Rejections are silent: a rejected gesture step simply leaves the transform
//! alone. When an embedder wants to know *why* an image refused to move, the
//! `*_with_trace` variants on [`PlacementController`](crate::PlacementController)
//! report each decision to a [`PlacementTrace`] sink.
//!
//! [`DecisionRecorder`] keeps every decision in order, which is handy in tests
//! and debug overlays.
//!
//! ```
//! use kurbo::{Rect, Vec2};
//! use understory_placement::{DecisionRecorder, PlacementController, RejectReason, Verdict};
//!
//! let mut placement = PlacementController::new(
//!     Rect::new(0.0, 0.0, 100.0, 100.0),
//!     Rect::new(0.0, 0.0, 200.0, 200.0),
//! );
//! let mut recorder = DecisionRecorder::new();
//! placement.translate_with_trace(Vec2::new(150.0, 0.0), &mut recorder);
//!
//! let last = recorder.decisions().last().unwrap();
//! assert_eq!(last.verdict, Verdict::Rejected(RejectReason::OutsideViewport));
//! ```

use alloc::vec::Vec;

use kurbo::Rect;

/// Operation a decision was made for.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum PlacementOp {
    /// A translation.
    Translate,
    /// A rotation about the content center.
    Rotate,
    /// A uniform scale about the content center.
    Scale,
}

/// Why a candidate was rejected.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum RejectReason {
    /// The candidate would leave (or stay out of) the viewport.
    OutsideViewport,
    /// The candidate would shrink the content below the minimum height.
    BelowMinHeight,
    /// The requested step was not finite or had a non-positive distance.
    InvalidInput,
}

/// Outcome of a single placement decision.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Verdict {
    /// The candidate fit the viewport (or the policy is unconstrained).
    Accepted,
    /// The candidate did not fit, but the content was already overboard.
    Escaped,
    /// The step was a no-op; nothing changed.
    Unchanged,
    /// The candidate was rejected and the transform left as it was.
    Rejected(RejectReason),
}

impl Verdict {
    /// Returns `true` if the transform was replaced by the candidate.
    #[must_use]
    pub fn is_applied(self) -> bool {
        matches!(self, Self::Accepted | Self::Escaped)
    }
}

/// A callback sink for placement decisions.
pub trait PlacementTrace {
    /// Called once per operation with its verdict.
    ///
    /// `candidate` is the mapped bounds the candidate transform would produce;
    /// for rejected inputs that never formed a candidate it is the current
    /// mapped bounds.
    fn decided(&mut self, op: PlacementOp, verdict: Verdict, candidate: Rect);
}

impl PlacementTrace for () {
    fn decided(&mut self, _op: PlacementOp, _verdict: Verdict, _candidate: Rect) {}
}

/// One recorded decision.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Decision {
    /// Operation that was attempted.
    pub op: PlacementOp,
    /// What happened.
    pub verdict: Verdict,
    /// Candidate mapped bounds.
    pub candidate: Rect,
}

/// Records every decision in arrival order.
#[derive(Debug, Default, Clone)]
pub struct DecisionRecorder {
    decisions: Vec<Decision>,
}

impl DecisionRecorder {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded decisions, oldest first.
    #[must_use]
    pub fn decisions(&self) -> &[Decision] {
        &self.decisions
    }

    /// Number of recorded decisions that were applied.
    #[must_use]
    pub fn applied_count(&self) -> usize {
        self.decisions
            .iter()
            .filter(|d| d.verdict.is_applied())
            .count()
    }

    /// Clears all recorded decisions.
    pub fn clear(&mut self) {
        self.decisions.clear();
    }
}

impl PlacementTrace for DecisionRecorder {
    fn decided(&mut self, op: PlacementOp, verdict: Verdict, candidate: Rect) {
        self.decisions.push(Decision {
            op,
            verdict,
            candidate,
        });
    }
}
