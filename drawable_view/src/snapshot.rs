// Copyright 2026 the Drawable Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

use drawable_stroke::{HistorySnapshot, SkippedPath};

/// Persistable state of a [`DrawableView`](crate::DrawableView).
///
/// Holds the stroke history and an opaque blob the host wants kept alongside
/// it (for example its own widget state). The container format is up to the
/// host; the type is `serde`-serializable.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewSnapshot {
    /// Finished strokes.
    pub history: HistorySnapshot,
    /// Host state saved with the drawing, returned untouched on restore.
    #[serde(default)]
    pub base_state: Option<Vec<u8>>,
}

/// Outcome of [`DrawableView::restore`](crate::DrawableView::restore).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RestoreReport {
    /// Number of strokes now in the history.
    pub restored: usize,
    /// Snapshot entries that were left out, with the reason.
    pub skipped: Vec<SkippedPath>,
    /// The host state that was saved with the snapshot.
    pub base_state: Option<Vec<u8>>,
}
