// Copyright 2026 the Drawable Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::slice;

use crate::path::StrokePath;

/// Finished strokes in drawing order.
///
/// Insertion order is chronological order, paint order (later strokes cover
/// earlier ones), and undo order (last in, first undone).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct History {
    paths: Vec<StrokePath>,
}

impl History {
    /// Creates an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a finished stroke.
    pub fn append(&mut self, path: StrokePath) {
        self.paths.push(path);
    }

    /// Removes and returns the most recent stroke.
    ///
    /// Undo on an empty history is a no-op and returns `None`.
    pub fn undo(&mut self) -> Option<StrokePath> {
        self.paths.pop()
    }

    /// Drops every stroke, returning how many were removed.
    pub fn clear(&mut self) -> usize {
        let removed = self.paths.len();
        self.paths.clear();
        removed
    }

    /// Replaces the whole history, e.g. when restoring a snapshot.
    pub fn replace_all(&mut self, paths: impl IntoIterator<Item = StrokePath>) {
        self.paths.clear();
        self.paths.extend(paths);
    }

    /// Returns the strokes in drawing order.
    #[must_use]
    pub fn paths(&self) -> &[StrokePath] {
        &self.paths
    }

    /// Iterates the strokes in drawing order.
    pub fn iter(&self) -> slice::Iter<'_, StrokePath> {
        self.paths.iter()
    }

    /// Returns the most recent stroke.
    #[must_use]
    pub fn last(&self) -> Option<&StrokePath> {
        self.paths.last()
    }

    /// Returns the number of strokes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Returns `true` if there are no strokes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a StrokePath;
    type IntoIter = slice::Iter<'a, StrokePath>;

    fn into_iter(self) -> Self::IntoIter {
        self.paths.iter()
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use kurbo::Point;

    use super::History;
    use crate::{PaintStyle, StrokePath};

    fn path(x: f64) -> StrokePath {
        StrokePath::new(vec![Point::new(x, x), Point::new(x + 1.0, x)], PaintStyle::default())
            .expect("non-empty")
    }

    #[test]
    fn append_then_undo_restores_previous_history() {
        let mut history = History::new();
        history.append(path(1.0));
        history.append(path(2.0));
        let before = history.clone();

        history.append(path(3.0));
        assert_eq!(history.undo(), Some(path(3.0)));
        assert_eq!(history, before);
    }

    #[test]
    fn undo_on_empty_is_noop() {
        let mut history = History::new();
        assert_eq!(history.undo(), None);
        assert_eq!(history.undo(), None);
        assert!(history.is_empty());
    }

    #[test]
    fn undo_is_last_in_first_out() {
        let mut history = History::new();
        for x in [1.0, 2.0, 3.0] {
            history.append(path(x));
        }
        assert_eq!(history.undo(), Some(path(3.0)));
        assert_eq!(history.undo(), Some(path(2.0)));
        assert_eq!(history.last(), Some(&path(1.0)));
    }

    #[test]
    fn clear_and_replace() {
        let mut history = History::new();
        history.append(path(1.0));
        history.append(path(2.0));
        assert_eq!(history.clear(), 2);
        assert_eq!(history.clear(), 0);

        history.append(path(9.0));
        history.replace_all([path(4.0), path(5.0)]);
        let xs: vec::Vec<f64> = history.iter().map(|p| p.points()[0].x).collect();
        assert_eq!(xs, vec![4.0, 5.0]);
        assert_eq!((&history).into_iter().count(), history.len());
    }
}
