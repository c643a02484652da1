// Copyright 2026 the Drawable Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag tracking: movement deltas from successive positions.
//!
//! ## Usage
//!
//! 1) Call [`DragTracker::start`] with the position where the drag begins.
//! 2) On each move, call [`DragTracker::update`] to get the delta since the previous position.
//! 3) Call [`DragTracker::end`] when the contact lifts.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use drawable_gesture::drag::DragTracker;
//!
//! let mut drag = DragTracker::default();
//! drag.start(Point::new(10.0, 20.0));
//!
//! let delta = drag.update(Point::new(15.0, 25.0)).unwrap();
//! assert_eq!((delta.x, delta.y), (5.0, 5.0));
//!
//! drag.end();
//! assert!(drag.update(Point::new(20.0, 30.0)).is_none());
//! ```

use kurbo::{Point, Vec2};

/// Tracks one drag from start to end, in whatever space positions are given.
#[derive(Debug, Clone, Default, Copy, PartialEq)]
pub struct DragTracker {
    last: Option<Point>,
}

impl DragTracker {
    /// Starts a new drag at `pos`, discarding any previous one.
    pub fn start(&mut self, pos: Point) {
        self.last = Some(pos);
    }

    /// Records `pos`, returning the delta since the previous position.
    ///
    /// Returns `None` when no drag is active.
    pub fn update(&mut self, pos: Point) -> Option<Vec2> {
        let last = self.last.as_mut()?;
        let delta = pos - *last;
        *last = pos;
        Some(delta)
    }

    /// Ends the drag.
    pub fn end(&mut self) {
        self.last = None;
    }

    /// Returns `true` while a drag is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.last.is_some()
    }
}
