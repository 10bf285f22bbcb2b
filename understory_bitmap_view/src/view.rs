// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Rect};
use understory_gesture_state::drag::DragTracker;
use understory_gesture_state::touch::{TouchPhase, TouchState, TouchUpdate};
use understory_placement::{
    ContainPolicy, DEFAULT_MIN_CONTENT_HEIGHT, PinchProgress, PlacementController, PlacementTrace,
};

use crate::events::{DragEvent, Effects, PointerEvent};

/// Default distance a single touch must travel before a drag is requested.
pub const DEFAULT_DRAG_THRESHOLD: f64 = 10.0;

/// The capability set a host needs from a gesture-driven surface.
pub trait GestureSurface {
    /// Handle a pointer event.
    fn handle_gesture(&mut self, event: PointerEvent) -> Effects;

    /// Handle an event from a platform drag session.
    fn handle_drag(&mut self, event: DragEvent) -> Effects;

    /// Transform to draw the content with.
    fn current_transform(&self) -> Affine;
}

/// Tunables for a [`BitmapView`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewConfig {
    /// Distance a single touch must exceed before a drag is requested.
    pub drag_threshold: f64,
    /// Floor for the mapped content height when pinching in.
    pub min_content_height: f64,
    /// Containment policy for every gesture step.
    pub contain_policy: ContainPolicy,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            drag_threshold: DEFAULT_DRAG_THRESHOLD,
            min_content_height: DEFAULT_MIN_CONTENT_HEIGHT,
            contain_policy: ContainPolicy::default(),
        }
    }
}

/// A single bitmap that can be dragged, pinch-scaled, and pinch-rotated.
///
/// `BitmapView` owns a [`PlacementController`] and the per-session gesture
/// state, and routes events to them:
///
/// - A single touch that starts moving over the bitmap requests a platform
///   drag once per session ([`Effects::BEGIN_DRAG`]).
/// - Drag-session locations translate the bitmap step by step.
/// - Two-finger moves scale, then rotate, about the bitmap center.
///
/// The host draws the bitmap with [`GestureSurface::current_transform`]
/// whenever an event reports [`Effects::REDRAW`].
#[derive(Clone, Debug)]
pub struct BitmapView {
    placement: PlacementController,
    touch: TouchState,
    drag: DragTracker,
    pinch: Option<PinchProgress>,
    config: ViewConfig,
}

impl BitmapView {
    /// Creates a view for content with the given local bounds.
    #[must_use]
    pub fn new(content: Rect, viewport: Rect) -> Self {
        Self::with_config(content, viewport, ViewConfig::default())
    }

    /// Creates a view for a bitmap of `width` × `height` pixels.
    #[must_use]
    pub fn for_image(width: u32, height: u32, viewport: Rect) -> Self {
        Self::new(
            Rect::new(0.0, 0.0, f64::from(width), f64::from(height)),
            viewport,
        )
    }

    /// Creates a view with explicit tunables.
    #[must_use]
    pub fn with_config(content: Rect, viewport: Rect, config: ViewConfig) -> Self {
        let mut placement = PlacementController::new(content, viewport);
        placement.set_min_content_height(config.min_content_height);
        placement.set_policy(config.contain_policy);
        Self {
            placement,
            touch: TouchState::new(),
            drag: DragTracker::default(),
            pinch: None,
            config,
        }
    }

    /// Returns the placement controller.
    #[must_use]
    pub fn placement(&self) -> &PlacementController {
        &self.placement
    }

    /// Returns the placement controller for direct adjustment (initial fit, reset).
    pub fn placement_mut(&mut self) -> &mut PlacementController {
        &mut self.placement
    }

    /// Current touch phase.
    #[must_use]
    pub fn touch_phase(&self) -> TouchPhase {
        self.touch.phase()
    }

    /// Returns `true` while a platform drag is over this view.
    #[must_use]
    pub fn is_drag_tracking(&self) -> bool {
        self.drag.is_tracking()
    }

    /// Returns the active tunables.
    #[must_use]
    pub fn config(&self) -> ViewConfig {
        self.config
    }

    /// Replaces the tunables.
    pub fn set_config(&mut self, config: ViewConfig) {
        self.placement.set_min_content_height(config.min_content_height);
        self.placement.set_policy(config.contain_policy);
        self.config = config;
    }

    /// The view was laid out at a new size.
    pub fn resize(&mut self, width: f64, height: f64) -> Effects {
        self.placement.resize(width, height);
        Effects::REDRAW
    }

    /// Like [`GestureSurface::handle_gesture`], reporting placement decisions to `trace`.
    pub fn handle_gesture_with_trace(
        &mut self,
        event: PointerEvent,
        trace: &mut impl PlacementTrace,
    ) -> Effects {
        match event {
            PointerEvent::Down { pointer, position } => {
                if let TouchUpdate::PinchStarted { baseline } =
                    self.touch.on_down(pointer, position)
                {
                    self.pinch = Some(PinchProgress::new(baseline.angle));
                }
                Effects::empty()
            }
            PointerEvent::Move { pointer, position } => {
                match self.touch.on_move(pointer, position) {
                    TouchUpdate::Moved { position, offset } => {
                        if offset.hypot() > self.config.drag_threshold
                            && self.placement.contains_point(position)
                            && self.touch.claim_drag()
                        {
                            Effects::BEGIN_DRAG
                        } else {
                            Effects::empty()
                        }
                    }
                    TouchUpdate::Pinch {
                        distance,
                        angle,
                        baseline,
                    } => {
                        let Some(progress) = self.pinch.as_mut() else {
                            return Effects::empty();
                        };
                        // Scale first: rotation pivots on the center the scale left behind.
                        let scaled = self.placement.scale_with_trace(
                            progress,
                            distance,
                            baseline.distance,
                            trace,
                        );
                        let rotated = self.placement.rotate_with_trace(progress, angle, trace);
                        if scaled || rotated {
                            Effects::REDRAW
                        } else {
                            Effects::empty()
                        }
                    }
                    _ => Effects::empty(),
                }
            }
            PointerEvent::Up { pointer, .. } => {
                if let TouchUpdate::PinchEnded { .. } | TouchUpdate::Ended =
                    self.touch.on_up(pointer)
                {
                    self.pinch = None;
                }
                Effects::empty()
            }
            PointerEvent::Cancel => {
                self.touch.cancel();
                self.pinch = None;
                Effects::empty()
            }
        }
    }

    /// Like [`GestureSurface::handle_drag`], reporting placement decisions to `trace`.
    pub fn handle_drag_with_trace(
        &mut self,
        event: DragEvent,
        trace: &mut impl PlacementTrace,
    ) -> Effects {
        let step = match event {
            DragEvent::Started(_) => None,
            DragEvent::Entered(pos) => {
                self.drag.enter(pos);
                None
            }
            DragEvent::Location(pos) => self.drag.location(pos),
            DragEvent::Dropped(pos) => self.drag.drop_at(pos),
            DragEvent::Exited(_) | DragEvent::Ended(_) => {
                self.drag.leave();
                None
            }
        };
        match step {
            Some(delta) if self.placement.translate_with_trace(delta, trace) => Effects::REDRAW,
            _ => Effects::empty(),
        }
    }
}

impl GestureSurface for BitmapView {
    fn handle_gesture(&mut self, event: PointerEvent) -> Effects {
        self.handle_gesture_with_trace(event, &mut ())
    }

    fn handle_drag(&mut self, event: DragEvent) -> Effects {
        self.handle_drag_with_trace(event, &mut ())
    }

    fn current_transform(&self) -> Affine {
        self.placement.transform()
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect};
    use understory_gesture_state::touch::{PointerId, TouchPhase};

    use super::{BitmapView, GestureSurface, ViewConfig};
    use crate::events::{DragEvent, Effects, PointerEvent};

    fn down(id: u32, x: f64, y: f64) -> PointerEvent {
        PointerEvent::Down {
            pointer: PointerId(id),
            position: Point::new(x, y),
        }
    }

    fn up(id: u32) -> PointerEvent {
        PointerEvent::Up {
            pointer: PointerId(id),
            position: Point::ZERO,
        }
    }

    #[test]
    fn for_image_uses_pixel_bounds() {
        let view = BitmapView::for_image(640, 480, Rect::new(0.0, 0.0, 1000.0, 1000.0));
        assert_eq!(
            view.placement().content(),
            Rect::new(0.0, 0.0, 640.0, 480.0)
        );
        assert_eq!(view.touch_phase(), TouchPhase::Idle);
    }

    #[test]
    fn config_flows_into_placement() {
        let config = ViewConfig {
            min_content_height: 10.0,
            ..ViewConfig::default()
        };
        let mut view = BitmapView::with_config(
            Rect::new(0.0, 0.0, 100.0, 100.0),
            Rect::new(0.0, 0.0, 200.0, 200.0),
            config,
        );
        assert_eq!(view.placement().min_content_height(), 10.0);

        view.set_config(ViewConfig::default());
        assert_eq!(view.placement().min_content_height(), 48.0);
    }

    #[test]
    fn up_after_pinch_drops_progress() {
        let mut view = BitmapView::new(
            Rect::new(0.0, 0.0, 100.0, 100.0),
            Rect::new(0.0, 0.0, 200.0, 200.0),
        );
        view.handle_gesture(down(0, 10.0, 10.0));
        view.handle_gesture(down(1, 90.0, 10.0));
        assert_eq!(view.touch_phase(), TouchPhase::Pinch);

        view.handle_gesture(up(1));
        assert_eq!(view.touch_phase(), TouchPhase::SingleTouch);
        assert!(view.pinch.is_none());

        view.handle_gesture(up(0));
        assert_eq!(view.touch_phase(), TouchPhase::Idle);
    }

    #[test]
    fn cancel_returns_to_idle() {
        let mut view = BitmapView::new(
            Rect::new(0.0, 0.0, 100.0, 100.0),
            Rect::new(0.0, 0.0, 200.0, 200.0),
        );
        view.handle_gesture(down(0, 10.0, 10.0));
        view.handle_gesture(down(1, 90.0, 10.0));

        assert_eq!(view.handle_gesture(PointerEvent::Cancel), Effects::empty());
        assert_eq!(view.touch_phase(), TouchPhase::Idle);
        assert!(view.pinch.is_none());
    }

    #[test]
    fn drag_exit_stops_translation() {
        let mut view = BitmapView::new(
            Rect::new(0.0, 0.0, 100.0, 100.0),
            Rect::new(0.0, 0.0, 200.0, 200.0),
        );
        view.handle_drag(DragEvent::Started(Point::new(50.0, 50.0)));
        view.handle_drag(DragEvent::Entered(Point::new(50.0, 50.0)));
        assert!(view.is_drag_tracking());

        view.handle_drag(DragEvent::Exited(Point::new(250.0, 50.0)));
        assert!(!view.is_drag_tracking());
        assert_eq!(
            view.handle_drag(DragEvent::Location(Point::new(60.0, 60.0))),
            Effects::empty()
        );
        assert_eq!(
            view.placement().mapped_bounds(),
            Rect::new(0.0, 0.0, 100.0, 100.0)
        );
    }

    #[test]
    fn resize_requests_redraw() {
        let mut view = BitmapView::new(
            Rect::new(0.0, 0.0, 100.0, 100.0),
            Rect::new(0.0, 0.0, 200.0, 200.0),
        );
        assert_eq!(view.resize(80.0, 80.0), Effects::REDRAW);
        assert!(view.placement().is_overboard());
    }
}
