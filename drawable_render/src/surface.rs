// Copyright 2026 the Drawable Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, BezPath, Rect, Stroke};
use peniko::Color;

/// Operations that mutate the current drawing state of a [`Surface`].
#[derive(Clone, Debug, PartialEq)]
pub enum StateOp {
    /// Set the current transform from drawing space to surface pixels.
    SetTransform(Affine),
    /// Set the current solid paint.
    SetPaint(Color),
    /// Set the current stroke style. Widths are in drawing space.
    SetStroke(Stroke),
}

/// Operations that produce pixels given the current state.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    /// Fill an axis-aligned rectangle with the current paint.
    FillRect(Rect),
    /// Stroke an axis-aligned rectangle with the current stroke and paint.
    StrokeRect(Rect),
    /// Stroke a path with the current stroke and paint.
    StrokePath(BezPath),
    /// Fill a path (non-zero winding) with the current paint.
    FillPath(BezPath),
}

/// Something strokes can be drawn onto.
///
/// The host's on-screen canvas, an export buffer, and test recorders all
/// implement this. State persists across draws until changed; a fresh surface
/// starts with the identity transform and no paint or stroke set.
pub trait Surface {
    /// Apply a state operation.
    fn state(&mut self, op: StateOp);

    /// Apply a draw operation.
    fn draw(&mut self, op: DrawOp);
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn state(&mut self, op: StateOp) {
        (**self).state(op);
    }

    fn draw(&mut self, op: DrawOp) {
        (**self).draw(op);
    }
}
