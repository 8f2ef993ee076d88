//! Document state management
//!
//! This module provides the edited image together with its undo/redo history.

mod edit_ops;
mod undo;
mod persistence;

pub use persistence::{read_document, DocumentError};

use std::path::PathBuf;

use history::{CommandHistory, HistoryEvent, HistoryLimits};
use serde::{Deserialize, Serialize};
use shared::{Canvas, Rgba, Selection};

/// The data every command edits: pixels plus the active selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub canvas: Canvas,
    #[serde(default)]
    pub selection: Selection,
}

impl Document {
    pub fn new(canvas: Canvas) -> Self {
        Self {
            canvas,
            selection: Selection::all(),
        }
    }

    /// Blank document
    pub fn blank(width: u32, height: u32, background: Rgba) -> Result<Self, shared::CanvasError> {
        Ok(Self::new(Canvas::new(width, height, background)?))
    }
}

/// Document state with undo/redo history
pub struct DocumentState {
    /// Current document
    pub document: Document,
    /// Undo/redo stacks
    pub(crate) history: CommandHistory<Document>,
    /// File the document was loaded from or last saved to
    pub path: Option<PathBuf>,
    /// Notifications not yet collected by the UI
    pub(crate) events: Vec<HistoryEvent>,
}

impl DocumentState {
    /// Wrap a document with an empty history
    pub fn new(document: Document, limits: HistoryLimits) -> Self {
        Self {
            document,
            history: CommandHistory::new(limits),
            path: None,
            events: Vec::new(),
        }
    }

    /// Current history version (increments on every structural change)
    pub fn version(&self) -> u64 {
        self.history.version()
    }

    /// Read-only access to the history, for labels and previews
    pub fn history(&self) -> &CommandHistory<Document> {
        &self.history
    }

    /// Whether the document differs from its last saved state
    pub fn modified(&self) -> bool {
        self.history.is_modified()
    }

    /// Drain notifications queued since the last call
    pub fn take_events(&mut self) -> Vec<HistoryEvent> {
        self.collect_events();
        std::mem::take(&mut self.events)
    }

    /// Move the history's queued notifications into our own queue
    pub(crate) fn collect_events(&mut self) {
        for event in self.history.take_events() {
            if event == HistoryEvent::SavePointReached {
                tracing::debug!("Document is back at its saved state");
            }
            self.events.push(event);
        }
    }
}
