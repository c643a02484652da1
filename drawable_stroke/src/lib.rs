// Copyright 2026 the Drawable Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drawable Stroke: canvas-space strokes and their undo history.
//!
//! Everything in this crate lives in *canvas space*, the fixed logical
//! coordinate system of the drawing, so strokes are independent of whatever
//! pan or zoom was active while they were drawn.
//!
//! - [`ActiveStroke`]: the stroke currently being drawn; append-only.
//! - [`StrokePath`]: a finished stroke. Immutable and never empty.
//! - [`History`]: finished strokes in drawing order, with undo and clear.
//! - [`HistorySnapshot`]: a versioned, `serde`-serializable form of a
//!   [`History`] used to persist drawings across a host view's lifecycle.
//!
//! ## Smoothing
//!
//! Strokes store the raw sampled points and derive their outline on demand:
//! the curve passes through the midpoints of consecutive samples, using each
//! sample as a quadratic control point. The derivation is a pure function of
//! the stored points, so a stroke restored from a snapshot renders exactly
//! like the original.
//!
//! ```rust
//! use kurbo::Point;
//! use drawable_stroke::{ActiveStroke, History, PaintStyle};
//!
//! let mut stroke = ActiveStroke::new(PaintStyle::default());
//! stroke.push(Point::new(10.0, 10.0));
//! stroke.push(Point::new(50.0, 50.0));
//! stroke.push(Point::new(90.0, 10.0));
//!
//! let mut history = History::new();
//! history.append(stroke.finish().expect("stroke has points"));
//! assert_eq!(history.len(), 1);
//!
//! history.undo();
//! assert!(history.is_empty());
//! ```
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

mod history;
mod path;
mod snapshot;
mod style;

pub use history::History;
pub use path::{ActiveStroke, StrokeGeometry, StrokePath};
pub use snapshot::{
    HistorySnapshot, InvalidRestoreState, RestoredPaths, SNAPSHOT_VERSION, SkippedPath,
    SnapshotEntry, SnapshotPath,
};
pub use style::PaintStyle;
