// Copyright 2026 the Drawable Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use drawable_stroke::{ActiveStroke, PaintStyle, StrokePath};
use drawable_viewport::Viewport;

use crate::event::{TouchEvent, TouchPhase};

/// What [`GestureCapture::on_touch`] did with an event.
#[derive(Clone, Debug, PartialEq)]
pub enum CaptureOutcome {
    /// The event was not a drawing event.
    Ignored,
    /// A new stroke started with the event's contact as its first point.
    Started,
    /// A point was appended to the stroke in progress.
    Extended,
    /// The stroke in progress was finalized and must be appended to history.
    Committed(StrokePath),
    /// A stray touch-down arrived mid-stroke: the previous stroke was
    /// finalized and a new one started at the event's contact.
    Restarted(StrokePath),
    /// The stroke in progress was dropped without producing a path.
    Discarded,
}

impl CaptureOutcome {
    /// Returns the finalized stroke, if the event produced one.
    #[must_use]
    pub fn into_committed(self) -> Option<StrokePath> {
        match self {
            Self::Committed(path) | Self::Restarted(path) => Some(path),
            _ => None,
        }
    }
}

/// One-finger stroke capture.
///
/// Idle becomes Drawing on a one-finger touch-down while draw mode is on. While
/// Drawing, every one-finger move is converted to canvas space and appended.
/// The stroke is finalized when the finger lifts or a second finger lands,
/// and dropped when the host cancels the gesture. No stroke spans two
/// touch-down/up cycles.
#[derive(Clone, Debug, Default)]
pub struct GestureCapture {
    active: Option<ActiveStroke>,
}

impl GestureCapture {
    /// Creates an idle capture.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` while a stroke is being drawn.
    #[must_use]
    pub fn is_drawing(&self) -> bool {
        self.active.is_some()
    }

    /// Returns the stroke being drawn, if any.
    #[must_use]
    pub fn in_progress(&self) -> Option<&ActiveStroke> {
        self.active.as_ref()
    }

    /// Drops the stroke being drawn, returning whether there was one.
    pub fn discard(&mut self) -> bool {
        self.active.take().is_some()
    }

    /// Handles one event.
    ///
    /// `style` is captured when a stroke starts; later changes do not affect
    /// a stroke already in progress.
    pub fn on_touch(
        &mut self,
        event: &TouchEvent,
        viewport: &Viewport,
        style: &PaintStyle,
        draw_mode: bool,
    ) -> CaptureOutcome {
        match (event.phase, event.contact_count()) {
            (TouchPhase::Cancel, _) => {
                if self.discard() {
                    CaptureOutcome::Discarded
                } else {
                    CaptureOutcome::Ignored
                }
            }
            (TouchPhase::Up, _) => self.finish(),
            (TouchPhase::Down | TouchPhase::Move, 0) => CaptureOutcome::Ignored,
            (TouchPhase::Down, 1) => {
                if !draw_mode {
                    return self.finish();
                }
                let previous = self.active.take().and_then(ActiveStroke::finish);
                let mut stroke = ActiveStroke::new(*style);
                let started = event
                    .primary()
                    .is_some_and(|p| stroke.push(viewport.screen_to_canvas(p)));
                if started {
                    self.active = Some(stroke);
                }
                match (previous, started) {
                    (Some(path), true) => CaptureOutcome::Restarted(path),
                    (Some(path), false) => CaptureOutcome::Committed(path),
                    (None, true) => CaptureOutcome::Started,
                    (None, false) => CaptureOutcome::Ignored,
                }
            }
            // A second contact ends the stroke; the gesture belongs to the
            // scale and pan controllers from here on.
            (TouchPhase::Down | TouchPhase::Move, _) if event.contact_count() >= 2 => self.finish(),
            (_, _) => {
                let Some(stroke) = self.active.as_mut() else {
                    return CaptureOutcome::Ignored;
                };
                match event.primary() {
                    Some(p) if stroke.push(viewport.screen_to_canvas(p)) => CaptureOutcome::Extended,
                    _ => CaptureOutcome::Ignored,
                }
            }
        }
    }

    fn finish(&mut self) -> CaptureOutcome {
        match self.active.take() {
            None => CaptureOutcome::Ignored,
            Some(stroke) => match stroke.finish() {
                Some(path) => CaptureOutcome::Committed(path),
                None => CaptureOutcome::Discarded,
            },
        }
    }
}
