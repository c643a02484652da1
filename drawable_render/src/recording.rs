// Copyright 2026 the Drawable Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use kurbo::{Affine, Stroke};
use peniko::Color;

use crate::surface::{DrawOp, StateOp, Surface};

/// Drawing state of a [`RecordingSurface`] at some point in time.
#[derive(Clone, Debug, PartialEq)]
pub struct SurfaceState {
    /// Current transform.
    pub transform: Affine,
    /// Current paint, if set.
    pub paint: Option<Color>,
    /// Current stroke style, if set.
    pub stroke: Option<Stroke>,
}

impl Default for SurfaceState {
    fn default() -> Self {
        Self {
            transform: Affine::IDENTITY,
            paint: None,
            stroke: None,
        }
    }
}

/// A draw operation together with the state it was drawn with.
#[derive(Clone, Debug, PartialEq)]
pub struct RecordedDraw {
    /// The draw operation.
    pub op: DrawOp,
    /// State at the time of drawing.
    pub state: SurfaceState,
}

/// A [`Surface`] that rasterizes nothing and records what it was asked to do.
///
/// Meant for tests and for hosts that want to inspect what a frame draws.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    state: SurfaceState,
    state_ops: Vec<StateOp>,
    draws: Vec<RecordedDraw>,
}

impl RecordingSurface {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current state.
    #[must_use]
    pub fn current_state(&self) -> &SurfaceState {
        &self.state
    }

    /// Returns every state operation in the order applied.
    #[must_use]
    pub fn state_ops(&self) -> &[StateOp] {
        &self.state_ops
    }

    /// Returns every draw in the order applied.
    #[must_use]
    pub fn draws(&self) -> &[RecordedDraw] {
        &self.draws
    }

    /// Forgets all recorded operations and resets the state.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

impl Surface for RecordingSurface {
    fn state(&mut self, op: StateOp) {
        match &op {
            StateOp::SetTransform(xf) => self.state.transform = *xf,
            StateOp::SetPaint(color) => self.state.paint = Some(*color),
            StateOp::SetStroke(stroke) => self.state.stroke = Some(stroke.clone()),
        }
        self.state_ops.push(op);
    }

    fn draw(&mut self, op: DrawOp) {
        self.draws.push(RecordedDraw {
            op,
            state: self.state.clone(),
        });
    }
}
