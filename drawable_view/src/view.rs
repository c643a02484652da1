// Copyright 2026 the Drawable Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::mem;

use kurbo::Size;

use drawable_gesture::{
    CaptureOutcome, GestureCapture, PanController, PanInput, ScaleController, TouchEvent,
};
use drawable_render::{RenderOptions, RenderTarget, Surface, render};
use drawable_stroke::{ActiveStroke, History, HistorySnapshot, StrokePath};
use drawable_viewport::{Viewport, ViewportChange};

use crate::config::{ConfigError, DrawableViewConfig};
use crate::export::{ExportError, ExportJob};
use crate::snapshot::{RestoreReport, ViewSnapshot};

/// Notifications queued by a [`DrawableView`], oldest first.
///
/// The queue only keeps the latest viewport, scale and history-length event
/// and a single pending repaint, so it stays small even if the host never
/// drains it.
#[derive(Clone, Debug, PartialEq)]
pub enum ViewEvent {
    /// Pan, zoom, view size or canvas size changed.
    ViewportChanged(ViewportChange),
    /// A pinch changed the zoom factor.
    ScaleChanged {
        /// Zoom factor after the change.
        zoom: f64,
    },
    /// A stroke was finished and appended to the history.
    StrokeCommitted {
        /// Index of the stroke in the history.
        index: usize,
    },
    /// The history changed length through a commit, undo, clear or restore.
    HistoryChanged {
        /// Number of strokes after the change.
        len: usize,
    },
    /// The view must be drawn again.
    RepaintRequested,
}

impl ViewEvent {
    /// Whether the event reports a whole current state, so a newer one of the
    /// same kind makes it obsolete.
    fn carries_state(&self) -> bool {
        matches!(
            self,
            Self::ViewportChanged(_) | Self::ScaleChanged { .. } | Self::HistoryChanged { .. }
        )
    }
}

/// Result of [`DrawableView::handle_touch`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TouchResponse {
    /// The view handled the event.
    pub consumed: bool,
    /// The view must be drawn again.
    pub repaint: bool,
}

/// A freehand drawing canvas driven by touch input.
///
/// The view owns the viewport, the three gesture controllers and the stroke
/// history. Each touch event runs through the scale controller, then the pan
/// controller, then gesture capture.
///
/// Until [`setup`](Self::setup) succeeds the view ignores touches, renders
/// nothing and cannot export.
#[derive(Debug)]
pub struct DrawableView {
    config: Option<DrawableViewConfig>,
    draw_mode: bool,
    viewport: Viewport,
    scale: ScaleController,
    pan: PanController,
    capture: GestureCapture,
    history: History,
    events: Vec<ViewEvent>,
}

impl Default for DrawableView {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawableView {
    /// Creates an unconfigured view.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: None,
            draw_mode: true,
            viewport: Viewport::new(Size::ZERO, Size::ZERO),
            scale: ScaleController::new(),
            pan: PanController::new(),
            capture: GestureCapture::new(),
            history: History::new(),
            events: Vec::new(),
        }
    }

    /// Applies a configuration.
    ///
    /// Setup can be repeated; strokes already drawn keep their paint. A
    /// rejected configuration changes nothing.
    pub fn setup(&mut self, config: Option<DrawableViewConfig>) -> Result<(), ConfigError> {
        let Some(config) = config else {
            log::warn!("drawable view setup without a configuration");
            return Err(ConfigError::Missing);
        };
        if let Err(err) = config.validate() {
            log::warn!("rejected drawable view configuration: {err}");
            return Err(err);
        }

        let canvas = Size::new(
            f64::from(config.canvas_width),
            f64::from(config.canvas_height),
        );
        let limits = self.viewport.set_zoom_limits(config.min_zoom, config.max_zoom);
        let resized = self.viewport.set_canvas_size(canvas);
        if let Some(change) = resized.or(limits) {
            self.push_event(ViewEvent::ViewportChanged(change));
        }
        self.draw_mode = config.draw_mode;
        self.config = Some(config);
        log::info!(
            "drawable view set up: canvas {}x{}, zoom [{}, {}]",
            config.canvas_width,
            config.canvas_height,
            config.min_zoom,
            config.max_zoom
        );
        self.request_repaint();
        Ok(())
    }

    /// Returns the active configuration, if set up.
    #[must_use]
    pub fn config(&self) -> Option<&DrawableViewConfig> {
        self.config.as_ref()
    }

    /// Returns `true` once [`setup`](Self::setup) has succeeded.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.config.is_some()
    }

    /// Records the measured size of the view in screen units.
    pub fn set_view_size(&mut self, size: Size) {
        if let Some(change) = self.viewport.set_view_size(size) {
            log::debug!("view resized to {}x{}", size.width, size.height);
            self.push_event(ViewEvent::ViewportChanged(change));
            self.request_repaint();
        }
    }

    /// Switches one-finger drags between drawing and panning.
    ///
    /// A stroke in progress is not affected.
    pub fn set_draw_mode(&mut self, draw_mode: bool) {
        self.draw_mode = draw_mode;
    }

    /// Returns `true` if one-finger drags draw.
    #[must_use]
    pub fn draw_mode(&self) -> bool {
        self.draw_mode
    }

    /// Handles one touch event.
    pub fn handle_touch(&mut self, event: &TouchEvent) -> TouchResponse {
        let Some(style) = self.config.as_ref().map(|c| c.stroke) else {
            log::trace!("touch ignored: view is not configured");
            return TouchResponse::default();
        };
        log::trace!(
            "touch {:?} with {} contact(s)",
            event.phase,
            event.contact_count()
        );

        let scaled = self.scale.on_touch(event, &mut self.viewport);
        if let Some(change) = scaled {
            self.push_event(ViewEvent::ScaleChanged { zoom: change.zoom });
            self.push_event(ViewEvent::ViewportChanged(change.viewport));
        }

        let input = PanInput {
            scale_claimed: scaled.is_some(),
            drawing: self.capture.is_drawing(),
            draw_mode: self.draw_mode,
        };
        if let Some(change) = self.pan.on_touch(event, &mut self.viewport, input) {
            self.push_event(ViewEvent::ViewportChanged(change));
        }

        match self
            .capture
            .on_touch(event, &self.viewport, &style, self.draw_mode)
        {
            CaptureOutcome::Committed(path) | CaptureOutcome::Restarted(path) => self.commit(path),
            CaptureOutcome::Discarded => log::debug!("stroke in progress discarded"),
            CaptureOutcome::Ignored | CaptureOutcome::Started | CaptureOutcome::Extended => {}
        }

        self.request_repaint();
        TouchResponse {
            consumed: true,
            repaint: true,
        }
    }

    /// Removes the most recent stroke. Undo on an empty history does nothing.
    ///
    /// Returns whether a stroke was removed.
    pub fn undo(&mut self) -> bool {
        let removed = self.history.undo().is_some();
        if removed {
            log::debug!("undo: {} stroke(s) left", self.history.len());
            self.push_event(ViewEvent::HistoryChanged {
                len: self.history.len(),
            });
        }
        self.request_repaint();
        removed
    }

    /// Removes every finished stroke, returning how many there were.
    pub fn clear(&mut self) -> usize {
        let removed = self.history.clear();
        log::debug!("cleared {removed} stroke(s)");
        if removed > 0 {
            self.push_event(ViewEvent::HistoryChanged { len: 0 });
        }
        self.request_repaint();
        removed
    }

    /// Draws the view at the current pan and zoom.
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        let Some(config) = &self.config else {
            return;
        };
        let options = RenderOptions {
            show_canvas_bounds: config.show_canvas_bounds,
            ..RenderOptions::default()
        };
        render(
            surface,
            RenderTarget::Screen(&self.viewport),
            &self.history,
            self.capture.in_progress(),
            &options,
        );
    }

    /// Draws the whole canvas at its native resolution, ignoring pan and zoom.
    pub fn export_to<S: Surface + ?Sized>(&self, surface: &mut S) -> Result<(), ExportError> {
        self.export_job()?.render_to(surface);
        Ok(())
    }

    /// Captures the strokes for exporting on another thread.
    pub fn export_job(&self) -> Result<ExportJob, ExportError> {
        let config = self.config.as_ref().ok_or(ExportError::NotConfigured)?;
        ExportJob::new(config, &self.history, self.capture.in_progress())
    }

    /// Rasterizes the whole canvas into a transparent RGBA8 image.
    #[cfg(feature = "vello_cpu")]
    pub fn export(&self) -> Result<drawable_render::RasterImage, ExportError> {
        let job = self.export_job()?;
        log::debug!("exporting {} stroke(s)", job.stroke_count());
        Ok(job.rasterize())
    }

    /// Captures the finished strokes and `base_state` for persistence.
    ///
    /// A stroke still in progress is not included.
    #[must_use]
    pub fn snapshot(&self, base_state: Option<Vec<u8>>) -> ViewSnapshot {
        ViewSnapshot {
            history: HistorySnapshot::from_history(&self.history),
            base_state,
        }
    }

    /// Replaces the history with the strokes of `snapshot`.
    ///
    /// Invalid entries are skipped and reported rather than failing the
    /// restore. Works whether or not the view is set up.
    pub fn restore(&mut self, snapshot: ViewSnapshot) -> RestoreReport {
        let ViewSnapshot {
            history,
            base_state,
        } = snapshot;
        if history.is_newer_than_supported() {
            log::warn!(
                "restoring snapshot version {} with a reader for version {}",
                history.version,
                drawable_stroke::SNAPSHOT_VERSION
            );
        }
        let restored = history.into_paths();
        for skipped in &restored.skipped {
            log::warn!(
                "skipped snapshot entry {}: {}",
                skipped.index,
                skipped.reason
            );
        }

        self.history.replace_all(restored.paths);
        log::debug!("restored {} stroke(s)", self.history.len());
        self.push_event(ViewEvent::HistoryChanged {
            len: self.history.len(),
        });
        self.request_repaint();
        RestoreReport {
            restored: self.history.len(),
            skipped: restored.skipped,
            base_state,
        }
    }

    /// Returns the finished strokes.
    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Returns the stroke being drawn, if any.
    #[must_use]
    pub fn in_progress(&self) -> Option<&ActiveStroke> {
        self.capture.in_progress()
    }

    /// Returns the viewport.
    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Takes every queued notification, oldest first.
    pub fn drain_events(&mut self) -> Vec<ViewEvent> {
        mem::take(&mut self.events)
    }

    fn commit(&mut self, path: StrokePath) {
        self.history.append(path);
        let len = self.history.len();
        log::debug!("stroke committed, {len} in history");
        self.push_event(ViewEvent::StrokeCommitted { index: len - 1 });
        self.push_event(ViewEvent::HistoryChanged { len });
    }

    fn push_event(&mut self, event: ViewEvent) {
        // State-carrying events supersede any pending event of the same kind.
        if event.carries_state() {
            let kind = mem::discriminant(&event);
            self.events.retain(|e| mem::discriminant(e) != kind);
        }
        self.events.push(event);
    }

    fn request_repaint(&mut self) {
        // At most one repaint is pending, and it stays last.
        self.events.retain(|e| *e != ViewEvent::RepaintRequested);
        self.events.push(ViewEvent::RepaintRequested);
    }
}
