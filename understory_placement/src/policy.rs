// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// How candidate transforms are judged against the viewport.
///
/// This enum is consulted by every mutating operation on
/// [`crate::PlacementController`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ContainPolicy {
    /// Keep the mapped content fully inside the viewport.
    ///
    /// A candidate that would leave the viewport is rejected, unless the
    /// content is already overboard. In that case translations and rotations
    /// are always accepted, and scaling is accepted when it does not grow the
    /// content, so an out-of-bounds placement can always be worked back in.
    #[default]
    EscapeWhenOverboard,
    /// Accept every well-formed candidate regardless of the viewport.
    ///
    /// The minimum content height still applies to shrinking.
    Unconstrained,
}

/// How [`crate::PlacementController::fit_content`] positions the content.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FitMode {
    /// Center the fitted content within the viewport.
    #[default]
    Center,
    /// Align the content's minimum corner with the viewport origin.
    AlignMin,
}
