// Copyright 2026 the Drawable Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Cap, Circle, Join, Rect, Shape, Size, Stroke};
use peniko::Color;

use drawable_stroke::{ActiveStroke, History, PaintStyle, StrokeGeometry};
use drawable_viewport::Viewport;

use crate::surface::{DrawOp, StateOp, Surface};

/// Flattening tolerance for dots, in canvas units.
const DOT_TOLERANCE: f64 = 0.05;

/// Where a frame is drawn.
#[derive(Clone, Copy, Debug)]
pub enum RenderTarget<'a> {
    /// The live view, mapped through the viewport's current pan and zoom.
    Screen(&'a Viewport),
    /// A canvas-resolution buffer. Canvas space maps 1:1 onto surface
    /// pixels, whatever the live pan and zoom are.
    Export {
        /// Size of the canvas being exported.
        canvas_size: Size,
    },
}

impl RenderTarget<'_> {
    /// Transform from canvas space to surface pixels.
    #[must_use]
    pub fn transform(&self) -> Affine {
        match self {
            Self::Screen(viewport) => viewport.canvas_to_screen_transform(),
            Self::Export { .. } => Affine::IDENTITY,
        }
    }

    /// The canvas-space area that can end up on the surface.
    #[must_use]
    pub fn canvas_area(&self) -> Rect {
        match self {
            Self::Screen(viewport) => viewport.visible_canvas_rect(),
            Self::Export { canvas_size } => canvas_size.to_rect(),
        }
    }
}

/// Options for [`render`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderOptions {
    /// Outline the canvas edges on screen targets.
    pub show_canvas_bounds: bool,
    /// Color of the canvas outline.
    pub bounds_color: Color,
    /// Width of the canvas outline in screen pixels, independent of zoom.
    pub bounds_width: f64,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            show_canvas_bounds: false,
            bounds_color: Color::from_rgba8(0x80, 0x80, 0x80, 0xff),
            bounds_width: 1.0,
        }
    }
}

/// Replays `history`, then `in_progress`, onto `surface`.
///
/// Strokes are drawn in history order so later strokes cover earlier ones.
/// On screen targets the canvas outline, when enabled, is drawn first.
/// History strokes entirely outside [`RenderTarget::canvas_area`] are
/// skipped. Nothing in the history is modified; rendering the same history
/// twice produces the same operations.
pub fn render<S: Surface + ?Sized>(
    surface: &mut S,
    target: RenderTarget<'_>,
    history: &History,
    in_progress: Option<&ActiveStroke>,
    options: &RenderOptions,
) {
    surface.state(StateOp::SetTransform(target.transform()));

    if let (RenderTarget::Screen(viewport), true) = (target, options.show_canvas_bounds) {
        draw_canvas_bounds(surface, viewport, options);
    }

    let area = target.canvas_area();
    for path in history.iter().filter(|p| p.bounding_box().overlaps(area)) {
        draw_geometry(surface, path.geometry(), path.style());
    }
    if let Some((geometry, stroke)) = in_progress.and_then(|s| Some((s.geometry()?, s))) {
        draw_geometry(surface, geometry, stroke.style());
    }
}

fn draw_canvas_bounds<S: Surface + ?Sized>(
    surface: &mut S,
    viewport: &Viewport,
    options: &RenderOptions,
) {
    let width = options.bounds_width / viewport.zoom();
    if !(width.is_finite() && width > 0.0) {
        return;
    }
    surface.state(StateOp::SetPaint(options.bounds_color));
    surface.state(StateOp::SetStroke(Stroke::new(width)));
    surface.draw(DrawOp::StrokeRect(viewport.canvas_size().to_rect()));
}

fn draw_geometry<S: Surface + ?Sized>(surface: &mut S, geometry: StrokeGeometry, style: &PaintStyle) {
    surface.state(StateOp::SetPaint(style.color));
    match geometry {
        StrokeGeometry::Dot { center, radius } => {
            let disc = Circle::new(center, radius).to_path(DOT_TOLERANCE);
            surface.draw(DrawOp::FillPath(disc));
        }
        StrokeGeometry::Curve(path) => {
            let stroke = Stroke::new(style.width)
                .with_join(Join::Round)
                .with_caps(Cap::Round);
            surface.state(StateOp::SetStroke(stroke));
            surface.draw(DrawOp::StrokePath(path));
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use kurbo::{Affine, Point, Size};
    use peniko::Color;

    use drawable_stroke::{ActiveStroke, History, PaintStyle, StrokePath};
    use drawable_viewport::Viewport;

    use super::{RenderOptions, RenderTarget, render};
    use crate::{DrawOp, RecordingSurface, StateOp};

    fn history() -> History {
        let mut history = History::new();
        let red = PaintStyle::new(Color::from_rgba8(255, 0, 0, 255), 4.0);
        let blue = PaintStyle::new(Color::from_rgba8(0, 0, 255, 255), 6.0);
        history.append(
            StrokePath::new(vec![Point::new(10.0, 10.0), Point::new(50.0, 50.0)], red)
                .expect("non-empty"),
        );
        history.append(StrokePath::new(vec![Point::new(70.0, 70.0)], blue).expect("non-empty"));
        history
    }

    #[test]
    fn screen_render_uses_viewport_transform() {
        let mut viewport = Viewport::new(Size::new(100.0, 100.0), Size::new(1000.0, 1000.0));
        viewport.set_zoom(2.0);
        viewport.set_pan_offset(Point::new(30.0, 40.0));

        let mut surface = RecordingSurface::new();
        render(
            &mut surface,
            RenderTarget::Screen(&viewport),
            &history(),
            None,
            &RenderOptions::default(),
        );

        assert_eq!(
            surface.state_ops()[0],
            StateOp::SetTransform(viewport.canvas_to_screen_transform())
        );
        assert_eq!(surface.draws().len(), 2);
        assert!(matches!(surface.draws()[0].op, DrawOp::StrokePath(_)));
        assert!(matches!(surface.draws()[1].op, DrawOp::FillPath(_)));
        assert_eq!(
            surface.draws()[1].state.paint,
            Some(Color::from_rgba8(0, 0, 255, 255))
        );
    }

    #[test]
    fn export_ignores_viewport_and_bounds() {
        let mut surface = RecordingSurface::new();
        let options = RenderOptions {
            show_canvas_bounds: true,
            ..RenderOptions::default()
        };
        render(
            &mut surface,
            RenderTarget::Export {
                canvas_size: Size::new(1000.0, 1000.0),
            },
            &history(),
            None,
            &options,
        );

        assert_eq!(surface.state_ops()[0], StateOp::SetTransform(Affine::IDENTITY));
        assert!(
            surface
                .draws()
                .iter()
                .all(|d| !matches!(d.op, DrawOp::StrokeRect(_))),
            "export never outlines the canvas"
        );
    }

    #[test]
    fn canvas_bounds_keep_constant_screen_width() {
        let mut viewport = Viewport::new(Size::new(100.0, 100.0), Size::new(400.0, 300.0));
        viewport.set_zoom(4.0);
        let options = RenderOptions {
            show_canvas_bounds: true,
            bounds_width: 2.0,
            ..RenderOptions::default()
        };

        let mut surface = RecordingSurface::new();
        render(
            &mut surface,
            RenderTarget::Screen(&viewport),
            &History::new(),
            None,
            &options,
        );

        let bounds = &surface.draws()[0];
        assert_eq!(
            bounds.op,
            DrawOp::StrokeRect(Size::new(400.0, 300.0).to_rect())
        );
        let width = bounds.state.stroke.as_ref().map(|s| s.width);
        assert_eq!(width, Some(0.5));
    }

    #[test]
    fn in_progress_stroke_is_drawn_last() {
        let mut active = ActiveStroke::new(PaintStyle::new(Color::WHITE, 2.0));
        active.push(Point::new(1.0, 1.0));
        active.push(Point::new(2.0, 5.0));

        let mut surface = RecordingSurface::new();
        render(
            &mut surface,
            RenderTarget::Export {
                canvas_size: Size::new(10.0, 10.0),
            },
            &history(),
            Some(&active),
            &RenderOptions::default(),
        );

        let last = surface.draws().last().expect("draws");
        assert_eq!(last.op, DrawOp::StrokePath(active.finish().expect("non-empty").to_bez_path()));
        assert_eq!(last.state.paint, Some(Color::WHITE));
        assert_eq!(last.state.stroke.as_ref().map(|s| s.width), Some(2.0));
    }

    #[test]
    fn strokes_outside_the_target_are_culled() {
        let mut viewport = Viewport::new(Size::new(100.0, 100.0), Size::new(1000.0, 1000.0));
        viewport.set_pan_offset(Point::new(500.0, 500.0));

        let mut surface = RecordingSurface::new();
        render(
            &mut surface,
            RenderTarget::Screen(&viewport),
            &history(),
            None,
            &RenderOptions::default(),
        );
        assert!(surface.draws().is_empty());

        // The same history exported still draws everything.
        surface.clear();
        render(
            &mut surface,
            RenderTarget::Export {
                canvas_size: Size::new(1000.0, 1000.0),
            },
            &history(),
            None,
            &RenderOptions::default(),
        );
        assert_eq!(surface.draws().len(), 2);
    }

    #[test]
    fn empty_in_progress_stroke_draws_nothing() {
        let active = ActiveStroke::new(PaintStyle::default());
        let mut surface = RecordingSurface::new();
        render(
            &mut surface,
            RenderTarget::Export {
                canvas_size: Size::new(10.0, 10.0),
            },
            &History::new(),
            Some(&active),
            &RenderOptions::default(),
        );
        assert!(surface.draws().is_empty());
    }
}
