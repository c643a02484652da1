// Copyright 2026 the Drawable Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peniko::Color;

/// Paint used for a stroke.
///
/// A stroke captures its style when it starts, so changing the configured
/// style later never restyles strokes that already exist.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PaintStyle {
    /// Stroke color, including alpha.
    pub color: Color,
    /// Stroke width in canvas units.
    pub width: f64,
}

impl PaintStyle {
    /// Creates a paint style.
    #[must_use]
    pub const fn new(color: Color, width: f64) -> Self {
        Self { color, width }
    }

    /// Returns `true` when the width is finite and positive and the color
    /// components are finite.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.width.is_finite()
            && self.width > 0.0
            && self.color.components.iter().all(|c| c.is_finite())
    }
}

impl Default for PaintStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            width: 3.0,
        }
    }
}
