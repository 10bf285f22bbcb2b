// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Vec2};

use crate::policy::{ContainPolicy, FitMode};
use crate::trace::{PlacementOp, PlacementTrace, RejectReason, Verdict};

/// Default floor for the mapped content height, in viewport units.
pub const DEFAULT_MIN_CONTENT_HEIGHT: f64 = 48.0;

/// Slack used when comparing mapped bounds against the viewport, so that
/// rotations by multiples of 90° do not trip on rounding noise.
const CONTAIN_EPSILON: f64 = 1e-9;

/// Accepted-step memory for one pinch.
///
/// Scale and rotation arrive as absolute values relative to the pinch
/// baseline; the controller applies only the part not yet applied. The memory
/// advances only when a step is accepted, so a rejected step is retried in
/// full on the next move.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinchProgress {
    last_scale: f64,
    last_angle: f64,
}

impl PinchProgress {
    /// Starts a pinch whose fingers are at `start_angle` degrees.
    #[must_use]
    pub fn new(start_angle: f64) -> Self {
        Self {
            last_scale: 1.0,
            last_angle: start_angle,
        }
    }

    /// Last accepted scale ratio, relative to the pinch start.
    #[must_use]
    pub fn last_scale(&self) -> f64 {
        self.last_scale
    }

    /// Last accepted finger angle, in degrees.
    #[must_use]
    pub fn last_angle(&self) -> f64 {
        self.last_angle
    }
}

impl Default for PinchProgress {
    fn default() -> Self {
        Self::new(0.0)
    }
}

/// Places a single content rectangle inside a viewport.
///
/// `PlacementController` owns the affine transform that maps the content's
/// local rectangle (for example a bitmap's pixel bounds) into viewport
/// coordinates. Gesture steps are proposed as translations, rotations, and
/// scales; each one is applied only if the resulting placement satisfies the
/// [`ContainPolicy`].
///
/// Rejections are silent and leave the transform untouched.
#[derive(Clone, Debug)]
pub struct PlacementController {
    content: Rect,
    viewport: Rect,
    transform: Affine,
    min_content_height: f64,
    policy: ContainPolicy,
    fit_mode: FitMode,
}

impl PlacementController {
    /// Creates a controller with an identity transform.
    ///
    /// - The minimum content height is [`DEFAULT_MIN_CONTENT_HEIGHT`].
    /// - The policy is [`ContainPolicy::EscapeWhenOverboard`].
    #[must_use]
    pub fn new(content: Rect, viewport: Rect) -> Self {
        Self {
            content: content.abs(),
            viewport: viewport.abs(),
            transform: Affine::IDENTITY,
            min_content_height: DEFAULT_MIN_CONTENT_HEIGHT,
            policy: ContainPolicy::default(),
            fit_mode: FitMode::default(),
        }
    }

    /// Creates a controller whose content starts uniformly scaled about the
    /// viewport origin.
    #[must_use]
    pub fn with_initial_scale(content: Rect, viewport: Rect, scale: f64) -> Self {
        let mut placement = Self::new(content, viewport);
        placement.set_transform(Affine::scale(scale));
        placement
    }

    /// Returns the content rectangle in local coordinates.
    #[must_use]
    pub fn content(&self) -> Rect {
        self.content
    }

    /// Returns the viewport bounds.
    #[must_use]
    pub fn viewport(&self) -> Rect {
        self.viewport
    }

    /// Sets the viewport bounds.
    ///
    /// The transform is left alone; if the content no longer fits, the
    /// placement becomes overboard and the escape rules apply.
    pub fn set_viewport(&mut self, viewport: Rect) {
        self.viewport = viewport.abs();
    }

    /// Sets the viewport to `(0, 0)-(width, height)`.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.set_viewport(Rect::new(0.0, 0.0, width, height));
    }

    /// Returns the current transform.
    #[must_use]
    pub fn transform(&self) -> Affine {
        self.transform
    }

    /// Replaces the transform without any containment check.
    ///
    /// Non-finite transforms are ignored.
    pub fn set_transform(&mut self, transform: Affine) {
        if transform.is_finite() {
            self.transform = transform;
        }
    }

    /// Resets the transform to identity.
    pub fn reset(&mut self) {
        self.transform = Affine::IDENTITY;
    }

    /// Returns the minimum mapped content height.
    #[must_use]
    pub fn min_content_height(&self) -> f64 {
        self.min_content_height
    }

    /// Sets the minimum mapped content height. Negative values become zero.
    pub fn set_min_content_height(&mut self, height: f64) {
        if height.is_finite() {
            self.min_content_height = height.max(0.0);
        }
    }

    /// Returns the containment policy.
    #[must_use]
    pub fn policy(&self) -> ContainPolicy {
        self.policy
    }

    /// Sets the containment policy.
    pub fn set_policy(&mut self, policy: ContainPolicy) {
        self.policy = policy;
    }

    /// Returns the fit mode used by [`PlacementController::fit_content`].
    #[must_use]
    pub fn fit_mode(&self) -> FitMode {
        self.fit_mode
    }

    /// Sets the fit mode used by [`PlacementController::fit_content`].
    pub fn set_fit_mode(&mut self, mode: FitMode) {
        self.fit_mode = mode;
    }

    /// Scales the content uniformly to fit the viewport, preserving aspect
    /// ratio, and positions it per the fit mode. Rotation is discarded.
    pub fn fit_content(&mut self) {
        let content = self.content;
        let view = self.viewport;
        if content.width() <= 0.0 || content.height() <= 0.0 {
            return;
        }
        if view.width() <= 0.0 || view.height() <= 0.0 {
            return;
        }
        let zoom = (view.width() / content.width()).min(view.height() / content.height());
        let offset = match self.fit_mode {
            FitMode::Center => view.center().to_vec2() - content.center().to_vec2() * zoom,
            FitMode::AlignMin => view.origin().to_vec2() - content.origin().to_vec2() * zoom,
        };
        self.transform = Affine::translate(offset) * Affine::scale(zoom);
    }

    /// Bounding box of the content under the current transform.
    #[must_use]
    pub fn mapped_bounds(&self) -> Rect {
        self.transform.transform_rect_bbox(self.content)
    }

    /// Returns `true` if `pt` lies within [`PlacementController::mapped_bounds`].
    #[must_use]
    pub fn contains_point(&self, pt: Point) -> bool {
        let b = self.mapped_bounds();
        pt.x >= b.x0 && pt.x <= b.x1 && pt.y >= b.y0 && pt.y <= b.y1
    }

    /// Returns `true` if the mapped content is not fully inside the viewport.
    #[must_use]
    pub fn is_overboard(&self) -> bool {
        !self.fits(self.mapped_bounds())
    }

    /// The content center in viewport coordinates; rotations and scales pivot here.
    #[must_use]
    pub fn center(&self) -> Point {
        self.transform * self.content.center()
    }

    /// Uniform scale factor of the current transform.
    #[must_use]
    pub fn uniform_scale(&self) -> f64 {
        let [a, b, ..] = self.transform.as_coeffs();
        Vec2::new(a, b).hypot()
    }

    /// Rotation of the current transform in degrees, in `[0, 360)`.
    #[must_use]
    pub fn rotation_degrees(&self) -> f64 {
        let [a, b, ..] = self.transform.as_coeffs();
        let degrees = Vec2::new(a, b).atan2().to_degrees();
        if degrees < 0.0 {
            degrees + 360.0
        } else {
            degrees
        }
    }

    /// Proposes a translation by `delta`.
    ///
    /// Rejected if the shifted content would not be fully inside the
    /// viewport, unless it is already overboard. Returns `true` if applied.
    pub fn translate(&mut self, delta: Vec2) -> bool {
        self.translate_with_trace(delta, &mut ())
    }

    /// Like [`PlacementController::translate`], reporting the decision to `trace`.
    pub fn translate_with_trace(&mut self, delta: Vec2, trace: &mut impl PlacementTrace) -> bool {
        if !delta.is_finite() {
            return self.refuse(PlacementOp::Translate, RejectReason::InvalidInput, trace);
        }
        if delta == Vec2::ZERO {
            trace.decided(
                PlacementOp::Translate,
                Verdict::Unchanged,
                self.mapped_bounds(),
            );
            return false;
        }
        let candidate = Affine::translate(delta) * self.transform;
        self.commit(PlacementOp::Translate, candidate, true, trace)
    }

    /// Proposes rotating the content to finger angle `angle` (degrees).
    ///
    /// The increment `angle - progress.last_angle()` is applied about the
    /// content center. Accepted under the same rule as translation; on
    /// acceptance `progress` records `angle`.
    pub fn rotate(&mut self, progress: &mut PinchProgress, angle: f64) -> bool {
        self.rotate_with_trace(progress, angle, &mut ())
    }

    /// Like [`PlacementController::rotate`], reporting the decision to `trace`.
    pub fn rotate_with_trace(
        &mut self,
        progress: &mut PinchProgress,
        angle: f64,
        trace: &mut impl PlacementTrace,
    ) -> bool {
        if !angle.is_finite() {
            return self.refuse(PlacementOp::Rotate, RejectReason::InvalidInput, trace);
        }
        let delta = angle - progress.last_angle;
        if delta == 0.0 {
            trace.decided(
                PlacementOp::Rotate,
                Verdict::Unchanged,
                self.mapped_bounds(),
            );
            return false;
        }
        let candidate = Affine::rotate_about(delta.to_radians(), self.center()) * self.transform;
        let applied = self.commit(PlacementOp::Rotate, candidate, true, trace);
        if applied {
            progress.last_angle = angle;
        }
        applied
    }

    /// Proposes scaling so that the content size tracks `current / baseline`.
    ///
    /// The increment `(current / baseline) / progress.last_scale()` is applied
    /// about the content center. Accepted if the candidate fits the viewport,
    /// or if the content is already overboard and the step does not grow it.
    /// Shrinking below the minimum content height is always rejected. On
    /// acceptance `progress` records the new ratio.
    pub fn scale(&mut self, progress: &mut PinchProgress, current: f64, baseline: f64) -> bool {
        self.scale_with_trace(progress, current, baseline, &mut ())
    }

    /// Like [`PlacementController::scale`], reporting the decision to `trace`.
    pub fn scale_with_trace(
        &mut self,
        progress: &mut PinchProgress,
        current: f64,
        baseline: f64,
        trace: &mut impl PlacementTrace,
    ) -> bool {
        let ratio = current / baseline;
        if !(baseline > 0.0 && ratio.is_finite() && ratio > 0.0 && progress.last_scale > 0.0) {
            return self.refuse(PlacementOp::Scale, RejectReason::InvalidInput, trace);
        }
        let factor = ratio / progress.last_scale;
        if factor == 1.0 {
            trace.decided(PlacementOp::Scale, Verdict::Unchanged, self.mapped_bounds());
            return false;
        }
        let candidate = Affine::scale_about(factor, self.center()) * self.transform;
        let bounds = self.content_bounds(candidate);
        if factor < 1.0 && bounds.height() < self.min_content_height {
            trace.decided(
                PlacementOp::Scale,
                Verdict::Rejected(RejectReason::BelowMinHeight),
                bounds,
            );
            return false;
        }
        let applied = self.commit(PlacementOp::Scale, candidate, factor <= 1.0, trace);
        if applied {
            progress.last_scale = ratio;
        }
        applied
    }

    /// Snapshot of the current placement for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> PlacementDebugInfo {
        PlacementDebugInfo {
            content: self.content,
            viewport: self.viewport,
            transform: self.transform,
            mapped_bounds: self.mapped_bounds(),
            overboard: self.is_overboard(),
            min_content_height: self.min_content_height,
            policy: self.policy,
        }
    }

    fn content_bounds(&self, transform: Affine) -> Rect {
        transform.transform_rect_bbox(self.content)
    }

    fn fits(&self, bounds: Rect) -> bool {
        let view = self.viewport;
        bounds.x0 >= view.x0 - CONTAIN_EPSILON
            && bounds.y0 >= view.y0 - CONTAIN_EPSILON
            && bounds.x1 <= view.x1 + CONTAIN_EPSILON
            && bounds.y1 <= view.y1 + CONTAIN_EPSILON
    }

    /// Applies `candidate` if the policy allows it.
    ///
    /// `may_escape` says whether this step qualifies for the overboard escape.
    fn commit(
        &mut self,
        op: PlacementOp,
        candidate: Affine,
        may_escape: bool,
        trace: &mut impl PlacementTrace,
    ) -> bool {
        let bounds = self.content_bounds(candidate);
        if !candidate.is_finite() {
            trace.decided(op, Verdict::Rejected(RejectReason::InvalidInput), bounds);
            return false;
        }
        let verdict = match self.policy {
            ContainPolicy::Unconstrained => Verdict::Accepted,
            ContainPolicy::EscapeWhenOverboard => {
                if self.fits(bounds) {
                    Verdict::Accepted
                } else if may_escape && self.is_overboard() {
                    Verdict::Escaped
                } else {
                    Verdict::Rejected(RejectReason::OutsideViewport)
                }
            }
        };
        trace.decided(op, verdict, bounds);
        if verdict.is_applied() {
            self.transform = candidate;
        }
        verdict.is_applied()
    }

    fn refuse(
        &self,
        op: PlacementOp,
        reason: RejectReason,
        trace: &mut impl PlacementTrace,
    ) -> bool {
        trace.decided(op, Verdict::Rejected(reason), self.mapped_bounds());
        false
    }
}

/// Debug snapshot of a [`PlacementController`] state.
#[derive(Clone, Copy, Debug)]
pub struct PlacementDebugInfo {
    /// Content rectangle in local coordinates.
    pub content: Rect,
    /// Viewport bounds.
    pub viewport: Rect,
    /// Current transform.
    pub transform: Affine,
    /// Content bounds under the current transform.
    pub mapped_bounds: Rect,
    /// Whether the mapped content is outside the viewport.
    pub overboard: bool,
    /// Minimum mapped content height.
    pub min_content_height: f64,
    /// Containment policy.
    pub policy: ContainPolicy,
}
