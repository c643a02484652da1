// Copyright 2026 the Drawable Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use kurbo::{BezPath, Point, Rect};

use crate::style::PaintStyle;

/// Geometry a renderer needs to draw a stroke.
#[derive(Clone, Debug, PartialEq)]
pub enum StrokeGeometry {
    /// A stroke with a single sample: a filled disc.
    Dot {
        /// Center of the disc in canvas space.
        center: Point,
        /// Radius of the disc (half the stroke width).
        radius: f64,
    },
    /// A smoothed open curve, to be stroked with the stroke's width.
    Curve(BezPath),
}

/// The stroke currently being drawn.
///
/// Points are canvas-space samples in arrival order. An `ActiveStroke` only
/// grows; [`ActiveStroke::finish`] turns it into an immutable [`StrokePath`].
#[derive(Clone, Debug, PartialEq)]
pub struct ActiveStroke {
    points: Vec<Point>,
    style: PaintStyle,
}

impl ActiveStroke {
    /// Starts an empty stroke drawn with `style`.
    #[must_use]
    pub fn new(style: PaintStyle) -> Self {
        Self {
            points: Vec::new(),
            style,
        }
    }

    /// Appends a canvas-space sample.
    ///
    /// Non-finite samples are dropped; returns whether the point was kept.
    pub fn push(&mut self, point: Point) -> bool {
        if !point.is_finite() {
            return false;
        }
        self.points.push(point);
        true
    }

    /// Returns the samples collected so far.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Returns the number of samples collected so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if no sample has been collected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the paint captured when the stroke started.
    #[must_use]
    pub fn style(&self) -> &PaintStyle {
        &self.style
    }

    /// Returns the geometry for the samples collected so far, if any.
    #[must_use]
    pub fn geometry(&self) -> Option<StrokeGeometry> {
        geometry_for(&self.points, &self.style)
    }

    /// Finalizes the stroke. An empty stroke produces nothing.
    #[must_use]
    pub fn finish(self) -> Option<StrokePath> {
        StrokePath::new(self.points, self.style)
    }
}

/// A finished stroke: a non-empty, immutable sequence of canvas-space points.
#[derive(Clone, Debug, PartialEq)]
pub struct StrokePath {
    points: Vec<Point>,
    style: PaintStyle,
}

impl StrokePath {
    /// Creates a finished stroke, or `None` if `points` is empty.
    #[must_use]
    pub fn new(points: Vec<Point>, style: PaintStyle) -> Option<Self> {
        if points.is_empty() {
            return None;
        }
        Some(Self { points, style })
    }

    /// Returns the stored canvas-space points.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Returns the number of stored points (always at least one).
    #[must_use]
    #[expect(clippy::len_without_is_empty, reason = "a finished stroke is never empty")]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns the paint this stroke was drawn with.
    #[must_use]
    pub fn style(&self) -> &PaintStyle {
        &self.style
    }

    /// Returns the geometry used to draw this stroke.
    #[must_use]
    pub fn geometry(&self) -> StrokeGeometry {
        match geometry_for(&self.points, &self.style) {
            Some(geometry) => geometry,
            // Unreachable by construction; fall back to a dot at the origin.
            None => StrokeGeometry::Dot {
                center: Point::ZERO,
                radius: self.style.width * 0.5,
            },
        }
    }

    /// Returns the smoothed outline path (a lone `move_to` for a single point).
    #[must_use]
    pub fn to_bez_path(&self) -> BezPath {
        smooth(&self.points)
    }

    /// Returns the canvas-space area touched by this stroke, including its width.
    #[must_use]
    pub fn bounding_box(&self) -> Rect {
        let first = self.points[0];
        let hull = self
            .points
            .iter()
            .fold(Rect::from_points(first, first), |r, p| r.union_pt(*p));
        hull.inflate(self.style.width * 0.5, self.style.width * 0.5)
    }
}

fn geometry_for(points: &[Point], style: &PaintStyle) -> Option<StrokeGeometry> {
    match points {
        [] => None,
        [center] => Some(StrokeGeometry::Dot {
            center: *center,
            radius: style.width * 0.5,
        }),
        _ => Some(StrokeGeometry::Curve(smooth(points))),
    }
}

/// Midpoint-quadratic smoothing.
///
/// `move_to(p0)`, then for every later sample `quad_to(prev, mid(prev, p))`,
/// then a closing `line_to` the last sample so the curve ends where the
/// finger did.
fn smooth(points: &[Point]) -> BezPath {
    let mut path = BezPath::new();
    let Some((first, rest)) = points.split_first() else {
        return path;
    };
    path.move_to(*first);
    let mut prev = *first;
    for p in rest {
        path.quad_to(prev, prev.midpoint(*p));
        prev = *p;
    }
    if !rest.is_empty() {
        path.line_to(prev);
    }
    path
}
