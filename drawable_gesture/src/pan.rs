// Copyright 2026 the Drawable Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use drawable_viewport::{Viewport, ViewportChange};

use crate::drag::DragTracker;
use crate::event::{TouchEvent, TouchPhase};

/// What the other controllers decided about the current event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PanInput {
    /// The scale controller zoomed on this event.
    pub scale_claimed: bool,
    /// Gesture capture is building a stroke.
    pub drawing: bool,
    /// One-finger drags draw instead of pan.
    pub draw_mode: bool,
}

/// Turns drags that are not drawing into pan deltas.
///
/// The drag follows the centroid of all contacts. Whenever the number of
/// contacts changes the drag restarts at the new centroid, so landing or
/// lifting a finger never moves the viewport by itself.
#[derive(Clone, Copy, Debug, Default)]
pub struct PanController {
    drag: DragTracker,
    contacts: usize,
}

impl PanController {
    /// Creates an idle controller.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` while contacts are being tracked.
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Handles one event, returning the viewport state if it panned.
    pub fn on_touch(
        &mut self,
        event: &TouchEvent,
        viewport: &mut Viewport,
        input: PanInput,
    ) -> Option<ViewportChange> {
        if matches!(event.phase, TouchPhase::Up | TouchPhase::Cancel) {
            self.reset();
            return None;
        }
        let Some(centroid) = event.centroid() else {
            self.reset();
            return None;
        };
        let count = event.contact_count();
        if event.phase == TouchPhase::Down || count != self.contacts || !self.drag.is_dragging() {
            self.contacts = count;
            self.drag.start(centroid);
            return None;
        }

        // Claimed or drawing events still advance the anchor so a later pan
        // starts from where the fingers are now.
        let delta = self.drag.update(centroid)?;
        let allowed = !input.scale_claimed && !input.drawing && (count >= 2 || !input.draw_mode);
        if !allowed {
            return None;
        }
        viewport.apply_pan_delta(delta)
    }

    fn reset(&mut self) {
        self.drag.end();
        self.contacts = 0;
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Size};

    use drawable_viewport::Viewport;

    use super::{PanController, PanInput};
    use crate::TouchEvent;

    fn zoomed_viewport() -> Viewport {
        let mut vp = Viewport::new(Size::new(500.0, 500.0), Size::new(1000.0, 1000.0));
        vp.set_pan_offset(Point::new(200.0, 200.0));
        vp
    }

    const PAN_ONLY: PanInput = PanInput {
        scale_claimed: false,
        drawing: false,
        draw_mode: false,
    };

    #[test]
    fn one_finger_pans_when_not_in_draw_mode() {
        let mut vp = zoomed_viewport();
        let mut pan = PanController::new();

        assert!(pan.on_touch(&TouchEvent::down([Point::new(100.0, 100.0)]), &mut vp, PAN_ONLY).is_none());
        let change = pan
            .on_touch(&TouchEvent::moved([Point::new(130.0, 110.0)]), &mut vp, PAN_ONLY)
            .expect("pans");

        // Dragging content right and down moves the window left and up.
        assert_eq!(change.pan_offset, Point::new(170.0, 190.0));
        assert_eq!(vp.pan_offset(), Point::new(170.0, 190.0));
    }

    #[test]
    fn one_finger_draws_in_draw_mode() {
        let mut vp = zoomed_viewport();
        let mut pan = PanController::new();
        let input = PanInput {
            draw_mode: true,
            ..PAN_ONLY
        };

        pan.on_touch(&TouchEvent::down([Point::new(100.0, 100.0)]), &mut vp, input);
        assert!(pan.on_touch(&TouchEvent::moved([Point::new(150.0, 150.0)]), &mut vp, input).is_none());
        assert_eq!(vp.pan_offset(), Point::new(200.0, 200.0));
    }

    #[test]
    fn two_fingers_pan_in_draw_mode() {
        let mut vp = zoomed_viewport();
        let mut pan = PanController::new();
        let input = PanInput {
            draw_mode: true,
            ..PAN_ONLY
        };

        pan.on_touch(
            &TouchEvent::down([Point::new(100.0, 100.0), Point::new(200.0, 100.0)]),
            &mut vp,
            input,
        );
        pan.on_touch(
            &TouchEvent::moved([Point::new(90.0, 80.0), Point::new(190.0, 80.0)]),
            &mut vp,
            input,
        );
        assert_eq!(vp.pan_offset(), Point::new(210.0, 220.0));
    }

    #[test]
    fn claimed_events_are_not_panned() {
        let mut vp = zoomed_viewport();
        let mut pan = PanController::new();
        let two = [Point::new(100.0, 100.0), Point::new(200.0, 100.0)];
        pan.on_touch(&TouchEvent::down(two), &mut vp, PAN_ONLY);

        let claimed = PanInput {
            scale_claimed: true,
            ..PAN_ONLY
        };
        let moved = [Point::new(80.0, 100.0), Point::new(240.0, 100.0)];
        assert!(pan.on_touch(&TouchEvent::moved(moved), &mut vp, claimed).is_none());
        assert_eq!(vp.pan_offset(), Point::new(200.0, 200.0));

        // The anchor followed the claimed move, so the next delta is small.
        let next = [Point::new(85.0, 100.0), Point::new(245.0, 100.0)];
        pan.on_touch(&TouchEvent::moved(next), &mut vp, PAN_ONLY);
        assert_eq!(vp.pan_offset(), Point::new(195.0, 200.0));
    }

    #[test]
    fn no_pan_while_drawing() {
        let mut vp = zoomed_viewport();
        let mut pan = PanController::new();
        let drawing = PanInput {
            drawing: true,
            ..PAN_ONLY
        };
        pan.on_touch(&TouchEvent::down([Point::new(0.0, 0.0)]), &mut vp, drawing);
        assert!(pan.on_touch(&TouchEvent::moved([Point::new(40.0, 40.0)]), &mut vp, drawing).is_none());
        assert_eq!(vp.pan_offset(), Point::new(200.0, 200.0));
    }

    #[test]
    fn lifting_a_finger_does_not_jump() {
        let mut vp = zoomed_viewport();
        let mut pan = PanController::new();
        let two = [Point::new(100.0, 100.0), Point::new(300.0, 100.0)];
        pan.on_touch(&TouchEvent::down(two), &mut vp, PAN_ONLY);
        pan.on_touch(&TouchEvent::up(two), &mut vp, PAN_ONLY);
        assert!(!pan.is_tracking());

        // The remaining finger's first move only re-seats the anchor.
        assert!(pan.on_touch(&TouchEvent::moved([Point::new(100.0, 100.0)]), &mut vp, PAN_ONLY).is_none());
        assert_eq!(vp.pan_offset(), Point::new(200.0, 200.0));
        pan.on_touch(&TouchEvent::moved([Point::new(110.0, 100.0)]), &mut vp, PAN_ONLY);
        assert_eq!(vp.pan_offset(), Point::new(190.0, 200.0));
    }

    #[test]
    fn pan_is_clamped_to_canvas() {
        let mut vp = zoomed_viewport();
        let mut pan = PanController::new();
        pan.on_touch(&TouchEvent::down([Point::new(0.0, 0.0)]), &mut vp, PAN_ONLY);
        pan.on_touch(&TouchEvent::moved([Point::new(-5000.0, -5000.0)]), &mut vp, PAN_ONLY);
        assert_eq!(vp.pan_offset(), Point::new(500.0, 500.0));
        assert!(
            Size::new(1000.0, 1000.0)
                .to_rect()
                .union(vp.visible_canvas_rect())
                == Size::new(1000.0, 1000.0).to_rect(),
            "visible rect stays inside the canvas"
        );
    }
}
