// Copyright 2026 the Drawable Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drawable View: a touch-driven freehand drawing canvas.
//!
//! [`DrawableView`] ties the Drawable crates together behind the handful of
//! calls a host widget needs:
//!
//! - [`DrawableView::setup`] with a [`DrawableViewConfig`] (canvas size, zoom
//!   limits, stroke paint).
//! - [`DrawableView::set_view_size`] whenever the host measures the view.
//! - [`DrawableView::handle_touch`] for every platform touch event, converted
//!   to a [`TouchEvent`].
//! - [`DrawableView::render`] onto the host's [`Surface`] when a repaint is
//!   requested.
//! - [`DrawableView::undo`], [`DrawableView::clear`], and the export calls.
//! - [`DrawableView::snapshot`] / [`DrawableView::restore`] across the host
//!   view's lifecycle.
//!
//! Instead of callbacks, the view queues [`ViewEvent`]s that the host drains
//! with [`DrawableView::drain_events`].
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use drawable_view::{DrawableView, DrawableViewConfig, TouchEvent};
//!
//! let mut view = DrawableView::new();
//! view.set_view_size(Size::new(500.0, 500.0));
//! view.setup(Some(DrawableViewConfig::default().with_canvas_size(1000, 1000)))?;
//!
//! view.handle_touch(&TouchEvent::down([Point::new(10.0, 10.0)]));
//! view.handle_touch(&TouchEvent::moved([Point::new(50.0, 50.0)]));
//! view.handle_touch(&TouchEvent::up([Point::new(50.0, 50.0)]));
//! assert_eq!(view.history().len(), 1);
//!
//! let snapshot = view.snapshot(None);
//! view.undo();
//! assert!(view.history().is_empty());
//!
//! view.restore(snapshot);
//! assert_eq!(view.history().len(), 1);
//! # Ok::<(), drawable_view::ConfigError>(())
//! ```
//!
//! The view logs through the [`log`] facade and never installs a logger.
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

mod config;
mod export;
mod snapshot;
mod view;

pub use config::{ConfigError, DrawableViewConfig};
pub use export::{ExportError, ExportJob};
pub use snapshot::{RestoreReport, ViewSnapshot};
pub use view::{DrawableView, TouchResponse, ViewEvent};

pub use drawable_gesture::{TouchEvent, TouchPhase};
#[cfg(feature = "vello_cpu")]
pub use drawable_render::{PixmapSurface, RasterImage};
pub use drawable_render::{RecordingSurface, Surface};
pub use drawable_stroke::PaintStyle;
