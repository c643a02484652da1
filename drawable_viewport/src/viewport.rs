// Copyright 2026 the Drawable Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Size, Vec2};

use crate::modes::ClampMode;

/// Pan/zoom viewport over a fixed-size canvas.
///
/// `Viewport` relates a screen-space view of `view_size` to a canvas-space
/// plane of `canvas_size` through a uniform zoom and a pan offset. The pan
/// offset is the canvas-space point shown at the screen origin, so:
///
/// ```text
/// canvas = screen / zoom + pan
/// screen = (canvas - pan) * zoom
/// ```
///
/// Both the zoom factor and (with [`ClampMode::KeepInside`]) the pan offset
/// are kept valid after every mutation.
#[derive(Clone, Debug)]
pub struct Viewport {
    view_size: Size,
    canvas_size: Size,
    zoom: f64,
    pan: Point,
    min_zoom: f64,
    max_zoom: f64,
    clamp_mode: ClampMode,
    canvas_to_screen: Affine,
    screen_to_canvas: Affine,
}

/// Message describing the viewport after a visible change.
///
/// Returned by every [`Viewport`] mutator that changed something, so that
/// renderers and gesture recognizers can drop geometry they derived from the
/// previous state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportChange {
    /// Zoom factor after the change.
    pub zoom: f64,
    /// Canvas-space point at the screen origin after the change.
    pub pan_offset: Point,
    /// Canvas-space rectangle visible through the view.
    pub visible_canvas: Rect,
    /// Screen-space rectangle covered by the whole canvas.
    pub canvas_on_screen: Rect,
}

impl Viewport {
    /// Smallest zoom factor accepted by [`Viewport::set_zoom_limits`].
    ///
    /// Conversions divide by the zoom, so it must stay strictly positive.
    pub const MIN_ZOOM_FLOOR: f64 = 1e-6;

    /// Creates a viewport showing `view_size` screen units of a canvas of
    /// `canvas_size` canvas units.
    ///
    /// - Initial zoom is `1.0`.
    /// - Initial pan is zero (the canvas origin is at the screen origin).
    /// - Zoom is clamped to the range `[1e-3, 1e3]` until limits are set.
    #[must_use]
    pub fn new(view_size: Size, canvas_size: Size) -> Self {
        let mut vp = Self {
            view_size,
            canvas_size,
            zoom: 1.0,
            pan: Point::ZERO,
            min_zoom: 1e-3,
            max_zoom: 1e3,
            clamp_mode: ClampMode::default(),
            canvas_to_screen: Affine::IDENTITY,
            screen_to_canvas: Affine::IDENTITY,
        };
        vp.clamp_pan();
        vp.rebuild_transforms();
        vp
    }

    /// Returns the view size in screen units.
    #[must_use]
    pub fn view_size(&self) -> Size {
        self.view_size
    }

    /// Sets the view size in screen units (the host's measurement result).
    ///
    /// Zoom is unchanged; the pan offset is re-clamped for the new extent.
    pub fn set_view_size(&mut self, size: Size) -> Option<ViewportChange> {
        if self.view_size == size {
            return None;
        }
        self.view_size = size;
        self.clamp_pan();
        self.rebuild_transforms();
        Some(self.change())
    }

    /// Returns the canvas size in canvas units.
    #[must_use]
    pub fn canvas_size(&self) -> Size {
        self.canvas_size
    }

    /// Sets the canvas size in canvas units.
    pub fn set_canvas_size(&mut self, size: Size) -> Option<ViewportChange> {
        if self.canvas_size == size {
            return None;
        }
        self.canvas_size = size;
        self.clamp_pan();
        self.rebuild_transforms();
        Some(self.change())
    }

    /// Returns the current uniform zoom factor.
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Returns the `(min_zoom, max_zoom)` range.
    #[must_use]
    pub fn zoom_limits(&self) -> (f64, f64) {
        (self.min_zoom, self.max_zoom)
    }

    /// Sets the minimum and maximum zoom factors.
    ///
    /// The provided range is normalized so that `min_zoom <= max_zoom` and
    /// both are at least [`Self::MIN_ZOOM_FLOOR`]. The current zoom is clamped
    /// into the new range.
    pub fn set_zoom_limits(&mut self, min_zoom: f64, max_zoom: f64) -> Option<ViewportChange> {
        let (min_zoom, max_zoom) = if min_zoom <= max_zoom {
            (min_zoom, max_zoom)
        } else {
            (max_zoom, min_zoom)
        };
        self.min_zoom = min_zoom.max(Self::MIN_ZOOM_FLOOR);
        self.max_zoom = max_zoom.max(self.min_zoom);
        self.set_zoom(self.zoom)
    }

    /// Returns the canvas-space point shown at the screen origin.
    #[must_use]
    pub fn pan_offset(&self) -> Point {
        self.pan
    }

    /// Sets the canvas-space point shown at the screen origin, then clamps it.
    pub fn set_pan_offset(&mut self, pan: Point) -> Option<ViewportChange> {
        self.update(|vp| vp.pan = pan)
    }

    /// Sets the clamp mode for the pan offset.
    pub fn set_clamp_mode(&mut self, mode: ClampMode) -> Option<ViewportChange> {
        if self.clamp_mode == mode {
            return None;
        }
        self.clamp_mode = mode;
        self.update(|_| {})
    }

    /// Returns the current clamp mode.
    #[must_use]
    pub fn clamp_mode(&self) -> ClampMode {
        self.clamp_mode
    }

    /// Sets the zoom factor, clamping it into the configured zoom range.
    ///
    /// The pan offset is kept (the screen origin stays on the same canvas
    /// point) and then re-clamped.
    pub fn set_zoom(&mut self, zoom: f64) -> Option<ViewportChange> {
        if !zoom.is_finite() {
            return None;
        }
        let clamped = zoom.clamp(self.min_zoom, self.max_zoom);
        self.update(|vp| vp.zoom = clamped)
    }

    /// Multiplies the zoom factor by `factor` around a screen-space anchor.
    ///
    /// The zoom is clamped to the configured range, then the pan offset is
    /// chosen so the canvas point under `anchor_screen` stays under it. The pan
    /// clamp runs last: zooming in about an anchor inside the view never
    /// needs it, zooming out near a canvas edge may be pulled back inside.
    pub fn apply_zoom_delta(&mut self, factor: f64, anchor_screen: Point) -> Option<ViewportChange> {
        if !factor.is_finite() || factor <= 0.0 {
            return None;
        }
        let new_zoom = (self.zoom * factor).clamp(self.min_zoom, self.max_zoom);
        if (new_zoom - self.zoom).abs() < f64::EPSILON {
            return None;
        }
        let anchor_canvas = self.screen_to_canvas(anchor_screen);
        self.update(|vp| {
            vp.zoom = new_zoom;
            vp.pan = anchor_canvas - anchor_screen.to_vec2() / new_zoom;
        })
    }

    /// Pans by a delta in screen space.
    ///
    /// Dragging the content by `delta_screen` moves the pan offset the other
    /// way by `delta_screen / zoom` canvas units, then the offset is clamped.
    pub fn apply_pan_delta(&mut self, delta_screen: Vec2) -> Option<ViewportChange> {
        if delta_screen == Vec2::ZERO || !delta_screen.is_finite() {
            return None;
        }
        let delta_canvas = delta_screen / self.zoom;
        self.update(|vp| vp.pan -= delta_canvas)
    }

    /// Converts a screen-space point into canvas space.
    #[must_use]
    pub fn screen_to_canvas(&self, pt: Point) -> Point {
        self.screen_to_canvas * pt
    }

    /// Converts a canvas-space point into screen space.
    #[must_use]
    pub fn canvas_to_screen(&self, pt: Point) -> Point {
        self.canvas_to_screen * pt
    }

    /// Returns the canvas-to-screen transform, suitable for a renderer.
    #[must_use]
    pub fn canvas_to_screen_transform(&self) -> Affine {
        self.canvas_to_screen
    }

    /// Returns the screen-to-canvas transform.
    #[must_use]
    pub fn screen_to_canvas_transform(&self) -> Affine {
        self.screen_to_canvas
    }

    /// Returns the canvas-space rectangle visible through the view.
    #[must_use]
    pub fn visible_canvas_rect(&self) -> Rect {
        Rect::from_origin_size(self.pan, self.visible_extent())
    }

    /// Returns the screen-space rectangle covered by the whole canvas.
    #[must_use]
    pub fn canvas_rect_on_screen(&self) -> Rect {
        let origin = self.canvas_to_screen(Point::ZERO);
        let far = self.canvas_to_screen(self.canvas_size.to_vec2().to_point());
        Rect::from_points(origin, far)
    }

    /// Snapshot of the current viewport state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ViewportDebugInfo {
        ViewportDebugInfo {
            view_size: self.view_size,
            canvas_size: self.canvas_size,
            visible_canvas_rect: self.visible_canvas_rect(),
            zoom: self.zoom,
            pan: self.pan,
            min_zoom: self.min_zoom,
            max_zoom: self.max_zoom,
            clamp_mode: self.clamp_mode,
        }
    }

    /// Returns the message describing the current state.
    #[must_use]
    pub fn change(&self) -> ViewportChange {
        ViewportChange {
            zoom: self.zoom,
            pan_offset: self.pan,
            visible_canvas: self.visible_canvas_rect(),
            canvas_on_screen: self.canvas_rect_on_screen(),
        }
    }

    /// Canvas-space extent of the view at the current zoom.
    fn visible_extent(&self) -> Size {
        Size::new(
            self.view_size.width / self.zoom,
            self.view_size.height / self.zoom,
        )
    }

    /// Applies `f`, restores the invariants, and reports whether anything moved.
    fn update(&mut self, f: impl FnOnce(&mut Self)) -> Option<ViewportChange> {
        let (old_zoom, old_pan) = (self.zoom, self.pan);
        f(self);
        self.clamp_pan();
        if self.zoom == old_zoom && self.pan == old_pan {
            return None;
        }
        self.rebuild_transforms();
        Some(self.change())
    }

    fn rebuild_transforms(&mut self) {
        let pan = self.pan.to_vec2();
        // Canvas -> screen: shift the pan offset to the origin, then scale.
        self.canvas_to_screen = Affine::scale(self.zoom) * Affine::translate(-pan);
        // Built directly rather than inverted so round trips stay tight.
        self.screen_to_canvas = Affine::translate(pan) * Affine::scale(1.0 / self.zoom);
    }

    fn clamp_pan(&mut self) {
        if self.clamp_mode == ClampMode::None {
            return;
        }
        let visible = self.visible_extent();
        self.pan.x = clamp_axis(self.pan.x, visible.width, self.canvas_size.width);
        self.pan.y = clamp_axis(self.pan.y, visible.height, self.canvas_size.height);
    }
}

/// Clamps one axis of the pan offset so `[pan, pan + visible]` stays within
/// `[0, canvas]`, or centers it when the visible extent is the larger one.
fn clamp_axis(pan: f64, visible: f64, canvas: f64) -> f64 {
    if visible <= canvas {
        pan.clamp(0.0, canvas - visible)
    } else {
        (canvas - visible) * 0.5
    }
}

/// Debug snapshot of a [`Viewport`] state.
#[derive(Clone, Copy, Debug)]
pub struct ViewportDebugInfo {
    /// View size in screen units.
    pub view_size: Size,
    /// Canvas size in canvas units.
    pub canvas_size: Size,
    /// Canvas-space rectangle currently visible through the view.
    pub visible_canvas_rect: Rect,
    /// Current uniform zoom factor.
    pub zoom: f64,
    /// Canvas-space point at the screen origin.
    pub pan: Point,
    /// Minimum zoom factor.
    pub min_zoom: f64,
    /// Maximum zoom factor.
    pub max_zoom: f64,
    /// Clamp mode for the pan offset.
    pub clamp_mode: ClampMode,
}
