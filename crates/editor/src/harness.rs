//! Headless harness for programmatic document editing.
//!
//! Drives the document and its history the way the interactive editor does, and keeps
//! every notification the history emits so tests can assert on them.

use std::path::{Path, PathBuf};

use history::{HistoryEvent, HistoryLimits};
use shared::{Canvas, Rect, Rgba};

use crate::ops::PixelPaint;
use crate::state::{AppSettings, AppState, Document, DocumentError, DocumentState};

/// Headless harness: document, settings and collected history notifications
pub struct TestHarness {
    pub app: AppState,
    events: Vec<HistoryEvent>,
}

impl TestHarness {
    /// Harness with an 8x8 white canvas and default limits
    pub fn new() -> Self {
        Self::with_limits(HistoryLimits::default())
    }

    /// Harness with an 8x8 white canvas and the given limits
    pub fn with_limits(limits: HistoryLimits) -> Self {
        let mut settings = AppSettings::default();
        settings.canvas.default_width = 8;
        settings.canvas.default_height = 8;
        settings.history = limits;
        Self::from_settings(settings).unwrap_or_else(|_| unreachable!("8x8 is a valid canvas"))
    }

    /// Harness with a blank canvas sized from `settings`
    pub fn from_settings(settings: AppSettings) -> Result<Self, shared::CanvasError> {
        Ok(Self {
            app: AppState::new(settings)?,
            events: Vec::new(),
        })
    }

    /// Harness editing an existing file
    pub fn open(settings: AppSettings, path: &Path) -> Result<Self, DocumentError> {
        Ok(Self {
            app: AppState::open(settings, path)?,
            events: Vec::new(),
        })
    }

    /// Harness editing `document` with an empty history
    pub fn from_document(settings: AppSettings, document: Document) -> Self {
        Self {
            app: AppState::with_document(settings, document),
            events: Vec::new(),
        }
    }

    /// Write settings to `path` whenever the undo limits change
    pub fn with_settings_file(mut self, path: PathBuf) -> Self {
        self.app.settings_file = Some(path);
        self
    }

    fn doc(&mut self) -> &mut DocumentState {
        &mut self.app.document
    }

    fn pump(&mut self) {
        let events = self.app.document.take_events();
        self.events.extend(events);
    }

    // ── Editing ───────────────────────────────────────────────

    /// Paint one pixel
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgba) {
        self.set_pixels(vec![PixelPaint { x, y, color }]);
    }

    /// Paint several pixels as one step
    pub fn set_pixels(&mut self, pixels: Vec<PixelPaint>) {
        self.doc().set_pixels(pixels);
        self.pump();
    }

    /// Fill a rectangle
    pub fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        self.doc().fill_rect(rect, color);
        self.pump();
    }

    /// Select a rectangle and fill it, as one step
    pub fn fill_selection(&mut self, rect: Rect, color: Rgba) {
        self.doc().fill_selection(rect, color);
        self.pump();
    }

    /// Change the selection
    pub fn select(&mut self, rect: Option<Rect>) {
        self.doc().select(rect);
        self.pump();
    }

    /// Resize the canvas
    pub fn resize(&mut self, width: u32, height: u32, fill: Rgba) -> Result<(), shared::CanvasError> {
        let result = self.doc().resize(width, height, fill);
        self.pump();
        result
    }

    // ── History ───────────────────────────────────────────────

    /// Undo the last operation
    pub fn undo(&mut self) -> bool {
        let done = self.doc().undo();
        self.pump();
        done
    }

    /// Redo the last undone operation
    pub fn redo(&mut self) -> bool {
        let done = self.doc().redo();
        self.pump();
        done
    }

    /// Undo `n + 1` operations
    pub fn undo_up_to(&mut self, n: usize) -> usize {
        let steps = self.doc().undo_up_to(n);
        self.pump();
        steps
    }

    /// Redo `n + 1` operations
    pub fn redo_up_to(&mut self, n: usize) -> usize {
        let steps = self.doc().redo_up_to(n);
        self.pump();
        steps
    }

    /// Drop the whole history
    pub fn clear_history(&mut self) {
        self.doc().clear_history();
        self.pump();
    }

    /// Change retention limits, as the settings dialog does
    pub fn set_limits(&mut self, limits: HistoryLimits) -> bool {
        let applied = self.app.set_history_limits(limits);
        self.pump();
        applied
    }

    /// Save the document. On success the current state becomes the save point.
    pub fn save(&mut self, path: Option<&Path>) -> Result<PathBuf, DocumentError> {
        self.doc().save_to(path)
    }

    /// Mark the current state as saved without writing a file
    pub fn mark_saved(&mut self) {
        self.doc().mark_saved();
    }

    // ── Inspection ────────────────────────────────────────────

    pub fn document(&self) -> &Document {
        &self.app.document.document
    }

    pub fn canvas(&self) -> &Canvas {
        &self.app.document.document.canvas
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        self.canvas().pixel(x, y)
    }

    pub fn undo_len(&self) -> usize {
        self.app.document.history().undo_len()
    }

    pub fn redo_len(&self) -> usize {
        self.app.document.history().redo_len()
    }

    /// Names of pending undo steps, most recent first, bounded by the UI setting
    pub fn undo_names(&self) -> Vec<String> {
        let limit = self.app.settings.ui.undo_preview_len;
        self.app
            .document
            .history()
            .undo_names(limit)
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Names of pending redo steps, most recent first, bounded by the UI setting
    pub fn redo_names(&self) -> Vec<String> {
        let limit = self.app.settings.ui.undo_preview_len;
        self.app
            .document
            .history()
            .redo_names(limit)
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    pub fn modified(&self) -> bool {
        self.app.document.modified()
    }

    pub fn restored_position(&self) -> Option<isize> {
        self.app.document.history().restored_position()
    }

    /// Every notification received so far
    pub fn events(&self) -> &[HistoryEvent] {
        &self.events
    }

    /// How many times the document returned to its saved state through undo/redo
    pub fn save_point_notifications(&self) -> usize {
        self.events
            .iter()
            .filter(|e| **e == HistoryEvent::SavePointReached)
            .count()
    }

    /// How many structural changes were notified
    pub fn change_notifications(&self) -> usize {
        self.events
            .iter()
            .filter(|e| **e == HistoryEvent::Changed)
            .count()
    }

    /// Forget collected notifications
    pub fn clear_events(&mut self) {
        self.events.clear();
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}
