// Copyright 2026 the Drawable Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drawable Gesture: touch state machines for a pan/zoom drawing canvas.
//!
//! A host feeds an ordered stream of [`TouchEvent`]s. Each event goes through
//! three small state machines, always in this order:
//!
//! 1. [`ScaleController`]: two-finger pinch, turned into zoom deltas about the
//!    midpoint of the fingers. It *claims* the events it zooms on.
//! 2. [`PanController`]: drags that are not drawing (two fingers, or one
//!    finger when draw mode is off), turned into pan deltas. Events claimed
//!    by the scale controller are never panned as well.
//! 3. [`GestureCapture`]: one-finger drawing. It converts screen samples to
//!    canvas space and builds the in-progress stroke, committing it when the
//!    finger lifts or a second finger lands.
//!
//! The controllers only read and write the [`Viewport`](drawable_viewport::Viewport)
//! they are handed; they hold no references to each other.
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use drawable_gesture::{CaptureOutcome, GestureCapture, TouchEvent};
//! use drawable_stroke::PaintStyle;
//! use drawable_viewport::Viewport;
//!
//! let viewport = Viewport::new(Size::new(500.0, 500.0), Size::new(1000.0, 1000.0));
//! let mut capture = GestureCapture::new();
//! let style = PaintStyle::default();
//!
//! capture.on_touch(&TouchEvent::down([Point::new(10.0, 10.0)]), &viewport, &style, true);
//! capture.on_touch(&TouchEvent::moved([Point::new(50.0, 50.0)]), &viewport, &style, true);
//! let done = capture.on_touch(&TouchEvent::up([Point::new(50.0, 50.0)]), &viewport, &style, true);
//! assert!(matches!(done, CaptureOutcome::Committed(path) if path.len() == 2));
//! ```
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

mod capture;
pub mod drag;
mod event;
mod pan;
mod scale;

pub use capture::{CaptureOutcome, GestureCapture};
pub use event::{Contacts, TouchEvent, TouchPhase};
pub use pan::{PanController, PanInput};
pub use scale::{MIN_PINCH_SPAN, ScaleChange, ScaleController, ScaleState};
