// Copyright 2026 the Drawable Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drawable Viewport: the pan/zoom window into a fixed-size drawing canvas.
//!
//! A drawing canvas has a fixed logical size (the *canvas space*) that is
//! usually larger than the widget showing it (the *screen space*). This crate
//! holds the state that relates the two:
//! - A uniform zoom factor, clamped into `[min_zoom, max_zoom]`.
//! - A pan offset, expressed as the canvas-space point currently shown at the
//!   screen origin.
//!
//! From that state it derives:
//! - Point conversion in both directions
//!   (`canvas = screen / zoom + pan`, and its exact inverse).
//! - The visible canvas rectangle and the screen rectangle covered by the canvas.
//! - An [`Affine`](kurbo::Affine) for renderers.
//!
//! Every mutator returns an `Option<`[`ViewportChange`]`>`: `None` when the
//! call had no visible effect, otherwise a small message that dependents use
//! to invalidate cached geometry.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use drawable_viewport::Viewport;
//!
//! let mut view = Viewport::new(Size::new(400.0, 300.0), Size::new(1000.0, 1000.0));
//! view.set_zoom_limits(1.0, 4.0);
//!
//! // Pinch-zoom 2x around the middle of the screen.
//! let anchor = Point::new(200.0, 150.0);
//! let before = view.screen_to_canvas(anchor);
//! assert!(view.apply_zoom_delta(2.0, anchor).is_some());
//! let after = view.screen_to_canvas(anchor);
//! assert!((before - after).hypot() < 1e-9);
//!
//! // Panning can never move the view off the canvas.
//! view.apply_pan_delta((10_000.0, 10_000.0).into());
//! assert_eq!(view.pan_offset(), Point::ZERO);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod modes;
mod viewport;

pub use modes::ClampMode;
pub use viewport::{Viewport, ViewportChange, ViewportDebugInfo};
