// Copyright 2026 the Drawable Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::fmt;
use core::num::NonZeroU16;

use kurbo::{Affine, BezPath, Cap, Join, PathEl, Rect, Stroke};
use vello_cpu::kurbo::{
    Affine as CpuAffine, BezPath as CpuBezPath, Cap as CpuCap, Join as CpuJoin, Rect as CpuRect,
    Stroke as CpuStroke,
};
use vello_cpu::{Pixmap, RenderContext, RenderMode, RenderSettings};

use crate::surface::{DrawOp, StateOp, Surface};

/// An RGBA8 image, unpremultiplied, rows top to bottom.
#[derive(Clone, PartialEq, Eq)]
pub struct RasterImage {
    /// Width in pixels.
    pub width: u16,
    /// Height in pixels.
    pub height: u16,
    /// `width * height * 4` bytes of `[r, g, b, a]`.
    pub data: Vec<u8>,
}

impl RasterImage {
    /// Returns the `[r, g, b, a]` value of a pixel, if it is inside the image.
    #[must_use]
    pub fn pixel(&self, x: u16, y: u16) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let start = (usize::from(y) * usize::from(self.width) + usize::from(x)) * 4;
        let px = self.data.get(start..start + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }
}

impl fmt::Debug for RasterImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RasterImage")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("data", &format_args!("[{} bytes]", self.data.len()))
            .finish()
    }
}

/// A [`Surface`] backed by the `vello_cpu` sparse-strips rasterizer.
///
/// The surface starts fully transparent.
pub struct PixmapSurface {
    ctx: RenderContext,
    width: u16,
    height: u16,
}

impl fmt::Debug for PixmapSurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PixmapSurface")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

impl PixmapSurface {
    /// Creates a transparent surface of the given size.
    #[must_use]
    pub fn new(width: NonZeroU16, height: NonZeroU16) -> Self {
        let settings = RenderSettings {
            // The u8 pipeline keeps output identical whatever other features
            // are enabled in the build.
            render_mode: RenderMode::OptimizeSpeed,
            ..RenderSettings::default()
        };
        let (width, height) = (width.get(), height.get());
        Self {
            ctx: RenderContext::new_with(width, height, settings),
            width,
            height,
        }
    }

    /// Returns the surface size in pixels.
    #[must_use]
    pub fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    /// Rasterizes everything drawn so far.
    #[must_use]
    pub fn finish(mut self) -> RasterImage {
        let mut pixmap = Pixmap::new(self.width, self.height);
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut pixmap);

        let pixels = pixmap.take_unpremultiplied();
        let mut data = Vec::with_capacity(pixels.len() * 4);
        for p in pixels {
            data.extend_from_slice(&[p.r, p.g, p.b, p.a]);
        }
        RasterImage {
            width: self.width,
            height: self.height,
            data,
        }
    }
}

impl Surface for PixmapSurface {
    fn state(&mut self, op: StateOp) {
        match op {
            StateOp::SetTransform(xf) => self.ctx.set_transform(affine_to_cpu(xf)),
            StateOp::SetPaint(color) => self.ctx.set_paint(color),
            StateOp::SetStroke(stroke) => self.ctx.set_stroke(stroke_to_cpu(&stroke)),
        }
    }

    fn draw(&mut self, op: DrawOp) {
        match op {
            DrawOp::FillRect(rect) => self.ctx.fill_rect(&rect_to_cpu(rect)),
            DrawOp::StrokeRect(rect) => self.ctx.stroke_rect(&rect_to_cpu(rect)),
            DrawOp::StrokePath(path) => self.ctx.stroke_path(&path_to_cpu(&path)),
            DrawOp::FillPath(path) => self.ctx.fill_path(&path_to_cpu(&path)),
        }
    }
}

fn affine_to_cpu(xf: Affine) -> CpuAffine {
    CpuAffine::new(xf.as_coeffs())
}

fn rect_to_cpu(rect: Rect) -> CpuRect {
    CpuRect::new(rect.x0, rect.y0, rect.x1, rect.y1)
}

fn path_to_cpu(path: &BezPath) -> CpuBezPath {
    let mut out = CpuBezPath::new();
    for el in path.elements() {
        match *el {
            PathEl::MoveTo(p) => out.move_to((p.x, p.y)),
            PathEl::LineTo(p) => out.line_to((p.x, p.y)),
            PathEl::QuadTo(p1, p) => out.quad_to((p1.x, p1.y), (p.x, p.y)),
            PathEl::CurveTo(p1, p2, p) => out.curve_to((p1.x, p1.y), (p2.x, p2.y), (p.x, p.y)),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

fn stroke_to_cpu(style: &Stroke) -> CpuStroke {
    let mut stroke = CpuStroke::new(style.width);
    stroke.miter_limit = style.miter_limit;
    stroke.join = match style.join {
        Join::Bevel => CpuJoin::Bevel,
        Join::Miter => CpuJoin::Miter,
        Join::Round => CpuJoin::Round,
    };
    stroke.start_cap = match style.start_cap {
        Cap::Butt => CpuCap::Butt,
        Cap::Round => CpuCap::Round,
        Cap::Square => CpuCap::Square,
    };
    stroke.end_cap = match style.end_cap {
        Cap::Butt => CpuCap::Butt,
        Cap::Round => CpuCap::Round,
        Cap::Square => CpuCap::Square,
    };
    stroke
}
