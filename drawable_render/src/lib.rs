// Copyright 2026 the Drawable Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drawable Render: replay stroke histories onto drawing surfaces.
//!
//! Rendering is expressed against the small [`Surface`] trait, a pair of
//! state and draw operation streams, so the same frame can go to the host's
//! on-screen canvas, to a rasterizer, or to a [`RecordingSurface`] in tests.
//!
//! [`render`] draws a [`History`](drawable_stroke::History) plus the stroke in
//! progress for a [`RenderTarget`]:
//!
//! - [`RenderTarget::Screen`] maps canvas space through the live
//!   [`Viewport`](drawable_viewport::Viewport) and can outline the canvas.
//! - [`RenderTarget::Export`] maps canvas space 1:1 onto pixels, so exported
//!   images do not depend on the current pan or zoom.
//!
//! With the default `vello_cpu` feature, `PixmapSurface` rasterizes on the
//! CPU into an unpremultiplied RGBA8 `RasterImage`.
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use drawable_render::{DrawOp, RecordingSurface, RenderOptions, RenderTarget, render};
//! use drawable_stroke::{History, PaintStyle, StrokePath};
//!
//! let mut history = History::new();
//! let points = vec![Point::new(10.0, 10.0), Point::new(50.0, 50.0)];
//! history.append(StrokePath::new(points, PaintStyle::default()).unwrap());
//!
//! let mut surface = RecordingSurface::new();
//! let target = RenderTarget::Export { canvas_size: Size::new(100.0, 100.0) };
//! render(&mut surface, target, &history, None, &RenderOptions::default());
//! assert!(matches!(surface.draws()[0].op, DrawOp::StrokePath(_)));
//! ```
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

#[cfg(feature = "vello_cpu")]
mod pixmap;
mod recording;
mod render;
mod surface;

#[cfg(feature = "vello_cpu")]
pub use pixmap::{PixmapSurface, RasterImage};
pub use recording::{RecordedDraw, RecordingSurface, SurfaceState};
pub use render::{RenderOptions, RenderTarget, render};
pub use surface::{DrawOp, StateOp, Surface};
