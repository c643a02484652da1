// Copyright 2026 the Drawable Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::num::NonZeroU16;

use kurbo::Size;
use thiserror::Error;

use drawable_render::{RenderOptions, RenderTarget, Surface, render};
use drawable_stroke::{ActiveStroke, History};

use crate::config::DrawableViewConfig;

/// Why an export could not be produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ExportError {
    /// The view has not been set up, so there is no canvas to export.
    #[error("view is not configured")]
    NotConfigured,
    /// The configured canvas cannot be rasterized.
    #[error("canvas size {width}x{height} cannot be rasterized")]
    InvalidCanvasSize {
        /// Configured width.
        width: u32,
        /// Configured height.
        height: u32,
    },
}

/// Everything needed to produce an export, detached from the view.
///
/// An `ExportJob` owns copies of the strokes, so it can be rendered on another
/// thread while the view keeps taking input.
#[derive(Clone, Debug)]
pub struct ExportJob {
    width: NonZeroU16,
    height: NonZeroU16,
    history: History,
    in_progress: Option<ActiveStroke>,
}

impl ExportJob {
    pub(crate) fn new(
        config: &DrawableViewConfig,
        history: &History,
        in_progress: Option<&ActiveStroke>,
    ) -> Result<Self, ExportError> {
        let extent = |v: u32| u16::try_from(v).ok().and_then(NonZeroU16::new);
        let (Some(width), Some(height)) = (extent(config.canvas_width), extent(config.canvas_height))
        else {
            return Err(ExportError::InvalidCanvasSize {
                width: config.canvas_width,
                height: config.canvas_height,
            });
        };
        Ok(Self {
            width,
            height,
            history: history.clone(),
            in_progress: in_progress.cloned(),
        })
    }

    /// Size of the exported image in pixels.
    #[must_use]
    pub fn size(&self) -> (u16, u16) {
        (self.width.get(), self.height.get())
    }

    /// Number of finished strokes captured.
    #[must_use]
    pub fn stroke_count(&self) -> usize {
        self.history.len()
    }

    /// Draws the captured strokes at canvas resolution onto `surface`.
    pub fn render_to<S: Surface + ?Sized>(&self, surface: &mut S) {
        let canvas_size = Size::new(f64::from(self.width.get()), f64::from(self.height.get()));
        render(
            surface,
            RenderTarget::Export { canvas_size },
            &self.history,
            self.in_progress.as_ref(),
            &RenderOptions::default(),
        );
    }

    /// Rasterizes the captured strokes into a transparent RGBA8 image.
    #[cfg(feature = "vello_cpu")]
    #[must_use]
    pub fn rasterize(&self) -> drawable_render::RasterImage {
        let mut surface = drawable_render::PixmapSurface::new(self.width, self.height);
        self.render_to(&mut surface);
        surface.finish()
    }
}
