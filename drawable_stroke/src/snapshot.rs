// Copyright 2026 the Drawable Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Versioned, serializable form of a [`History`].
//!
//! The snapshot stores each stroke as its raw canvas-space points plus its
//! paint. Smoothing is re-derived from the points on load, so there is
//! nothing screen- or zoom-dependent to normalize.
//!
//! Loading is lenient: a path entry that does not have the expected shape
//! deserializes as [`SnapshotEntry::Malformed`] instead of failing the whole
//! snapshot, and [`HistorySnapshot::into_paths`] reports each rejected entry
//! with an [`InvalidRestoreState`] reason.

use alloc::vec::Vec;

use kurbo::Point;
use peniko::Color;
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

use crate::history::History;
use crate::path::StrokePath;
use crate::style::PaintStyle;

/// Snapshot format version written by [`HistorySnapshot::from_history`].
pub const SNAPSHOT_VERSION: u32 = 1;

/// Serializable history: strokes in drawing order.
///
/// A snapshot without a `version` is read as version 1, and one without
/// `paths` as an empty history.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistorySnapshot {
    /// Format version the snapshot was written with.
    #[serde(default = "first_version")]
    pub version: u32,
    /// Stroke entries in drawing order.
    #[serde(default)]
    pub paths: Vec<SnapshotEntry>,
}

fn first_version() -> u32 {
    1
}

/// One stroke entry of a [`HistorySnapshot`].
#[derive(Clone, Debug, PartialEq)]
pub enum SnapshotEntry {
    /// A well-formed stroke record.
    Path(SnapshotPath),
    /// An entry that could not be read as a stroke record.
    ///
    /// Serializes as a unit value (`null` in JSON).
    Malformed,
}

/// Serialized stroke: raw canvas-space points and paint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SnapshotPath {
    /// Canvas-space points as `[x, y]` pairs, in drawing order.
    pub points: Vec<[f64; 2]>,
    /// Stroke color as `[r, g, b, a]` sRGB components.
    pub color: [f32; 4],
    /// Stroke width in canvas units.
    pub width: f64,
}

/// Why a snapshot entry was left out of a restored history.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum InvalidRestoreState {
    /// The entry did not have the layout of a stroke record.
    #[error("entry is not a stroke record")]
    Malformed,
    /// The stroke record had no points.
    #[error("stroke has no points")]
    Empty,
    /// A point had a NaN or infinite coordinate.
    #[error("point {index} has a non-finite coordinate")]
    NonFinitePoint {
        /// Index of the offending point within the stroke.
        index: usize,
    },
    /// The stroke width was not finite and positive, or the color was not finite.
    #[error("stroke paint is invalid (width {width})")]
    InvalidPaint {
        /// The recorded width.
        width: f64,
    },
}

/// A snapshot entry that was skipped while restoring.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SkippedPath {
    /// Index of the entry within [`HistorySnapshot::paths`].
    pub index: usize,
    /// Why it was skipped.
    pub reason: InvalidRestoreState,
}

/// Result of [`HistorySnapshot::into_paths`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RestoredPaths {
    /// Valid strokes in their original order.
    pub paths: Vec<StrokePath>,
    /// Entries that were rejected.
    pub skipped: Vec<SkippedPath>,
}

impl HistorySnapshot {
    /// Captures every stroke of `history`.
    #[must_use]
    pub fn from_history(history: &History) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            paths: history
                .iter()
                .map(|path| SnapshotEntry::Path(SnapshotPath::from_stroke(path)))
                .collect(),
        }
    }

    /// Returns `true` if this snapshot was written by a newer format version.
    ///
    /// Newer snapshots are still read on a best-effort basis.
    #[must_use]
    pub fn is_newer_than_supported(&self) -> bool {
        self.version > SNAPSHOT_VERSION
    }

    /// Validates every entry, keeping valid strokes and reporting the rest.
    ///
    /// Point coordinates are carried over bit-for-bit.
    #[must_use]
    pub fn into_paths(self) -> RestoredPaths {
        let mut restored = RestoredPaths::default();
        for (index, entry) in self.paths.into_iter().enumerate() {
            let result = match entry {
                SnapshotEntry::Path(path) => path.into_stroke(),
                SnapshotEntry::Malformed => Err(InvalidRestoreState::Malformed),
            };
            match result {
                Ok(path) => restored.paths.push(path),
                Err(reason) => restored.skipped.push(SkippedPath { index, reason }),
            }
        }
        restored
    }
}

impl From<&History> for HistorySnapshot {
    fn from(history: &History) -> Self {
        Self::from_history(history)
    }
}

impl SnapshotPath {
    /// Captures a finished stroke.
    #[must_use]
    pub fn from_stroke(path: &StrokePath) -> Self {
        Self {
            points: path.points().iter().map(|p| [p.x, p.y]).collect(),
            color: path.style().color.components,
            width: path.style().width,
        }
    }

    /// Validates the record and turns it back into a stroke.
    pub fn into_stroke(self) -> Result<StrokePath, InvalidRestoreState> {
        let style = PaintStyle::new(Color::new(self.color), self.width);
        if !style.is_valid() {
            return Err(InvalidRestoreState::InvalidPaint { width: self.width });
        }
        if let Some(index) = self
            .points
            .iter()
            .position(|[x, y]| !x.is_finite() || !y.is_finite())
        {
            return Err(InvalidRestoreState::NonFinitePoint { index });
        }
        let points = self
            .points
            .into_iter()
            .map(|[x, y]| Point::new(x, y))
            .collect();
        StrokePath::new(points, style).ok_or(InvalidRestoreState::Empty)
    }
}

impl Serialize for SnapshotEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Path(path) => path.serialize(serializer),
            Self::Malformed => serializer.serialize_unit(),
        }
    }
}

impl<'de> Deserialize<'de> for SnapshotEntry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Anything that is not a stroke record is swallowed here so one bad
        // entry cannot fail the surrounding snapshot.
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Lenient {
            Path(SnapshotPath),
            Other(IgnoredAny),
        }

        Ok(match Lenient::deserialize(deserializer)? {
            Lenient::Path(path) => Self::Path(path),
            Lenient::Other(_) => Self::Malformed,
        })
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec;

    use kurbo::Point;
    use peniko::Color;

    use super::{
        HistorySnapshot, InvalidRestoreState, SNAPSHOT_VERSION, SkippedPath, SnapshotEntry,
    };
    use crate::{History, PaintStyle, StrokePath};

    fn sample_history() -> History {
        let mut history = History::new();
        history.append(
            StrokePath::new(
                vec![
                    Point::new(10.0, 10.0),
                    Point::new(50.123_456_789, 50.1),
                    Point::new(90.0, 1.0 / 3.0),
                ],
                PaintStyle::new(Color::from_rgba8(255, 0, 0, 255), 4.5),
            )
            .expect("non-empty"),
        );
        history.append(
            StrokePath::new(
                vec![Point::new(0.1, 0.2)],
                PaintStyle::new(Color::new([0.2, 0.4, 0.6, 0.5]), 12.0),
            )
            .expect("non-empty"),
        );
        history
    }

    #[test]
    fn snapshot_restores_identical_history() {
        let history = sample_history();
        let snapshot = HistorySnapshot::from_history(&history);
        assert_eq!(snapshot.version, SNAPSHOT_VERSION);

        let restored = snapshot.into_paths();
        assert!(restored.skipped.is_empty());
        assert_eq!(restored.paths, history.paths());
    }

    #[test]
    fn json_roundtrip_preserves_points_exactly() {
        let history = sample_history();
        let json = serde_json::to_string(&HistorySnapshot::from(&history)).expect("serialize");
        let back: HistorySnapshot = serde_json::from_str(&json).expect("deserialize");

        let restored = back.into_paths();
        assert_eq!(restored.paths, history.paths());
        for (a, b) in restored.paths.iter().zip(history.iter()) {
            assert_eq!(a.to_bez_path(), b.to_bez_path());
        }
    }

    #[test]
    fn malformed_entries_are_skipped_not_fatal() {
        let json = String::from(
            r#"{
                "version": 1,
                "paths": [
                    {"points": [[1.0, 2.0], [3.0, 4.0]], "color": [0, 0, 0, 1], "width": 2.0},
                    {"points": "not a list", "color": [0, 0, 0, 1], "width": 2.0},
                    42,
                    {"points": [], "color": [0, 0, 0, 1], "width": 2.0},
                    {"points": [[5.0, 6.0]], "color": [0, 0, 0, 1], "width": -1.0},
                    {"points": [[7.0, 8.0]], "color": [0, 0, 0, 1], "width": 1.0}
                ]
            }"#,
        );
        let snapshot: HistorySnapshot = serde_json::from_str(&json).expect("lenient parse");
        assert_eq!(snapshot.paths[1], SnapshotEntry::Malformed);

        let restored = snapshot.into_paths();
        assert_eq!(restored.paths.len(), 2);
        assert_eq!(restored.paths[1].points(), &[Point::new(7.0, 8.0)]);
        assert_eq!(
            restored.skipped,
            vec![
                SkippedPath {
                    index: 1,
                    reason: InvalidRestoreState::Malformed,
                },
                SkippedPath {
                    index: 2,
                    reason: InvalidRestoreState::Malformed,
                },
                SkippedPath {
                    index: 3,
                    reason: InvalidRestoreState::Empty,
                },
                SkippedPath {
                    index: 4,
                    reason: InvalidRestoreState::InvalidPaint { width: -1.0 },
                },
            ]
        );
    }

    #[test]
    fn missing_version_reads_as_first_version() {
        let json = r#"{"paths": [{"points": [[1.0, 2.0]], "color": [0, 0, 0, 1], "width": 2.0}]}"#;
        let snapshot: HistorySnapshot = serde_json::from_str(json).expect("lenient envelope");
        assert_eq!(snapshot.version, 1);
        assert!(!snapshot.is_newer_than_supported());

        let restored = snapshot.into_paths();
        assert_eq!(restored.paths.len(), 1);
        assert_eq!(restored.paths[0].points(), &[Point::new(1.0, 2.0)]);

        let empty: HistorySnapshot = serde_json::from_str("{}").expect("empty envelope");
        assert!(empty.paths.is_empty());
    }

    #[test]
    fn non_finite_points_are_rejected() {
        let snapshot = HistorySnapshot {
            version: SNAPSHOT_VERSION,
            paths: vec![SnapshotEntry::Path(super::SnapshotPath {
                points: vec![[0.0, 0.0], [f64::NAN, 1.0]],
                color: [0.0, 0.0, 0.0, 1.0],
                width: 1.0,
            })],
        };
        let restored = snapshot.into_paths();
        assert!(restored.paths.is_empty());
        assert_eq!(
            restored.skipped[0].reason,
            InvalidRestoreState::NonFinitePoint { index: 1 }
        );
    }

    #[test]
    fn malformed_entry_serializes_as_null() {
        let snapshot = HistorySnapshot {
            version: 7,
            paths: vec![SnapshotEntry::Malformed],
        };
        assert!(snapshot.is_newer_than_supported());
        let json = serde_json::to_string(&snapshot).expect("serialize");
        assert_eq!(json, r#"{"version":7,"paths":[null]}"#);
        let back: HistorySnapshot = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, snapshot);
    }
}
