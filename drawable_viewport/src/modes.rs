// Copyright 2026 the Drawable Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Clamp behavior for the pan offset relative to the canvas bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ClampMode {
    /// Do not clamp; the view may pan past the canvas edges freely.
    None,
    /// Keep the visible canvas rectangle inside the canvas bounds.
    ///
    /// On an axis where the visible extent is larger than the canvas (for
    /// example when zoomed out below `1.0`), there is no valid range to clamp
    /// into, so the canvas is centered on that axis instead.
    #[default]
    KeepInside,
}
