// Copyright 2026 the Drawable Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use drawable_viewport::{Viewport, ViewportChange};

use crate::event::{TouchEvent, TouchPhase};

/// Pinch spans below this many screen units are too small to take a ratio of.
pub const MIN_PINCH_SPAN: f64 = 1.0;

/// State of the [`ScaleController`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ScaleState {
    /// Fewer than two contacts.
    #[default]
    Idle,
    /// Two or more contacts; `last_span` is the finger distance of the
    /// previous event.
    Scaling {
        /// Distance between the first two contacts at the previous event.
        last_span: f64,
    },
}

/// Zoom applied by the [`ScaleController`] for one event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleChange {
    /// Zoom factor after the change.
    pub zoom: f64,
    /// The resulting viewport state.
    pub viewport: ViewportChange,
}

/// Turns two-finger pinches into zoom deltas.
///
/// Idle becomes Scaling when a second contact lands; Scaling returns to Idle
/// as soon as any contact lifts. While scaling, every move zooms by the ratio
/// of the current finger distance to the previous one, about the midpoint of
/// the fingers.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScaleController {
    state: ScaleState,
}

impl ScaleController {
    /// Creates an idle controller.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current state.
    #[must_use]
    pub fn state(&self) -> ScaleState {
        self.state
    }

    /// Returns `true` while a pinch is in progress.
    #[must_use]
    pub fn is_scaling(&self) -> bool {
        matches!(self.state, ScaleState::Scaling { .. })
    }

    /// Handles one event.
    ///
    /// Returns the applied zoom when this event changed the zoom factor. An
    /// event for which this returns `Some` is claimed: the pan controller must
    /// not pan on it too.
    pub fn on_touch(&mut self, event: &TouchEvent, viewport: &mut Viewport) -> Option<ScaleChange> {
        match event.phase {
            TouchPhase::Up | TouchPhase::Cancel => {
                self.state = ScaleState::Idle;
                None
            }
            TouchPhase::Down | TouchPhase::Move => {
                let (Some(span), Some(anchor)) = (event.pinch_span(), event.pinch_midpoint())
                else {
                    self.state = ScaleState::Idle;
                    return None;
                };
                let previous = self.state;
                self.state = ScaleState::Scaling { last_span: span };
                match previous {
                    // A new contact re-seats the span without zooming.
                    ScaleState::Scaling { last_span } if event.phase == TouchPhase::Move => {
                        if last_span < MIN_PINCH_SPAN || span < MIN_PINCH_SPAN {
                            return None;
                        }
                        let change = viewport.apply_zoom_delta(span / last_span, anchor)?;
                        Some(ScaleChange {
                            zoom: change.zoom,
                            viewport: change,
                        })
                    }
                    _ => None,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Size};

    use drawable_viewport::Viewport;

    use super::{ScaleController, ScaleState};
    use crate::TouchEvent;

    fn viewport() -> Viewport {
        let mut vp = Viewport::new(Size::new(1000.0, 1000.0), Size::new(1000.0, 1000.0));
        vp.set_zoom_limits(1.0, 4.0);
        vp
    }

    fn pinch(half_span: f64) -> [Point; 2] {
        [
            Point::new(500.0 - half_span, 500.0),
            Point::new(500.0 + half_span, 500.0),
        ]
    }

    #[test]
    fn second_finger_starts_scaling() {
        let mut vp = viewport();
        let mut scale = ScaleController::new();

        assert!(scale.on_touch(&TouchEvent::down([Point::new(450.0, 500.0)]), &mut vp).is_none());
        assert_eq!(scale.state(), ScaleState::Idle);

        assert!(scale.on_touch(&TouchEvent::down(pinch(50.0)), &mut vp).is_none());
        assert_eq!(scale.state(), ScaleState::Scaling { last_span: 100.0 });
    }

    #[test]
    fn doubling_span_doubles_zoom_about_midpoint() {
        let mut vp = viewport();
        let mut scale = ScaleController::new();
        let center = Point::new(500.0, 500.0);
        let screen_before = vp.canvas_to_screen(center);

        scale.on_touch(&TouchEvent::down(pinch(50.0)), &mut vp);
        let change = scale
            .on_touch(&TouchEvent::moved(pinch(100.0)), &mut vp)
            .expect("pinch zooms");

        assert!((change.zoom - 2.0).abs() < 1e-9);
        assert!((vp.zoom() - 2.0).abs() < 1e-9);
        let screen_after = vp.canvas_to_screen(center);
        assert!((screen_after - screen_before).hypot() < 1e-9);
    }

    #[test]
    fn zoom_stops_at_max() {
        let mut vp = viewport();
        let mut scale = ScaleController::new();
        scale.on_touch(&TouchEvent::down(pinch(10.0)), &mut vp);
        scale.on_touch(&TouchEvent::moved(pinch(100.0)), &mut vp);
        assert!((vp.zoom() - 4.0).abs() < 1e-9);

        // Further spreading at the limit changes nothing and claims nothing.
        assert!(scale.on_touch(&TouchEvent::moved(pinch(200.0)), &mut vp).is_none());
    }

    #[test]
    fn lifting_a_finger_returns_to_idle() {
        let mut vp = viewport();
        let mut scale = ScaleController::new();
        scale.on_touch(&TouchEvent::down(pinch(50.0)), &mut vp);
        scale.on_touch(&TouchEvent::up(pinch(50.0)), &mut vp);
        assert!(!scale.is_scaling());

        // The remaining finger moving does nothing.
        assert!(scale.on_touch(&TouchEvent::moved([Point::new(10.0, 10.0)]), &mut vp).is_none());
        assert!((vp.zoom() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn degenerate_span_is_ignored() {
        let mut vp = viewport();
        let mut scale = ScaleController::new();
        let same = [Point::new(500.0, 500.0), Point::new(500.0, 500.0)];
        scale.on_touch(&TouchEvent::down(same), &mut vp);
        assert!(scale.on_touch(&TouchEvent::moved(pinch(100.0)), &mut vp).is_none());
        assert!((vp.zoom() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn cancel_resets() {
        let mut vp = viewport();
        let mut scale = ScaleController::new();
        scale.on_touch(&TouchEvent::down(pinch(50.0)), &mut vp);
        scale.on_touch(&TouchEvent::cancel(), &mut vp);
        assert_eq!(scale.state(), ScaleState::Idle);
    }
}
