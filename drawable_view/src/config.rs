// Copyright 2026 the Drawable Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use drawable_stroke::PaintStyle;
use thiserror::Error;

/// Settings a [`DrawableView`](crate::DrawableView) is set up with.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawableViewConfig {
    /// Canvas width in canvas units; also the exported image width in pixels.
    pub canvas_width: u32,
    /// Canvas height in canvas units; also the exported image height in pixels.
    pub canvas_height: u32,
    /// Smallest zoom factor a pinch can reach.
    pub min_zoom: f64,
    /// Largest zoom factor a pinch can reach.
    pub max_zoom: f64,
    /// Paint for strokes started after setup.
    pub stroke: PaintStyle,
    /// Outline the canvas edges on screen.
    pub show_canvas_bounds: bool,
    /// One-finger drags draw; when off they pan.
    pub draw_mode: bool,
}

impl Default for DrawableViewConfig {
    fn default() -> Self {
        Self {
            canvas_width: 1000,
            canvas_height: 1000,
            min_zoom: 1.0,
            max_zoom: 4.0,
            stroke: PaintStyle::default(),
            show_canvas_bounds: false,
            draw_mode: true,
        }
    }
}

/// Why a configuration was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum ConfigError {
    /// No configuration was supplied.
    #[error("no configuration supplied")]
    Missing,
    /// A canvas extent was zero or larger than the rasterizer supports.
    #[error("canvas size {width}x{height} is outside 1..={max}", max = u16::MAX)]
    InvalidCanvasSize {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },
    /// The zoom limits were not finite, positive, and ordered.
    #[error("zoom range [{min}, {max}] is invalid")]
    InvalidZoomRange {
        /// Requested minimum zoom.
        min: f64,
        /// Requested maximum zoom.
        max: f64,
    },
    /// The stroke width or color was not finite, or the width was not positive.
    #[error("stroke paint is invalid (width {width})")]
    InvalidStroke {
        /// Requested stroke width.
        width: f64,
    },
}

impl DrawableViewConfig {
    /// Sets the canvas size.
    #[must_use]
    pub fn with_canvas_size(mut self, width: u32, height: u32) -> Self {
        self.canvas_width = width;
        self.canvas_height = height;
        self
    }

    /// Sets the zoom limits.
    #[must_use]
    pub fn with_zoom_range(mut self, min_zoom: f64, max_zoom: f64) -> Self {
        self.min_zoom = min_zoom;
        self.max_zoom = max_zoom;
        self
    }

    /// Sets the stroke paint.
    #[must_use]
    pub fn with_stroke(mut self, stroke: PaintStyle) -> Self {
        self.stroke = stroke;
        self
    }

    /// Enables or disables the on-screen canvas outline.
    #[must_use]
    pub fn with_canvas_bounds(mut self, show: bool) -> Self {
        self.show_canvas_bounds = show;
        self
    }

    /// Sets whether one-finger drags draw.
    #[must_use]
    pub fn with_draw_mode(mut self, draw_mode: bool) -> Self {
        self.draw_mode = draw_mode;
        self
    }

    /// Checks every field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let extent_ok = |v: u32| (1..=u32::from(u16::MAX)).contains(&v);
        if !extent_ok(self.canvas_width) || !extent_ok(self.canvas_height) {
            return Err(ConfigError::InvalidCanvasSize {
                width: self.canvas_width,
                height: self.canvas_height,
            });
        }
        let (min, max) = (self.min_zoom, self.max_zoom);
        if !(min.is_finite() && max.is_finite() && min > 0.0 && min <= max) {
            return Err(ConfigError::InvalidZoomRange { min, max });
        }
        if !self.stroke.is_valid() {
            return Err(ConfigError::InvalidStroke {
                width: self.stroke.width,
            });
        }
        Ok(())
    }
}
