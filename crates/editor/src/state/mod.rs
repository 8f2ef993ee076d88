pub mod document;
pub mod settings;

use std::path::{Path, PathBuf};

pub use document::{Document, DocumentError, DocumentState};
pub use settings::{AppSettings, CanvasSettings, UiSettings};

/// Combined application state
pub struct AppState {
    pub document: DocumentState,
    pub settings: AppSettings,
    /// Where changed settings are written; `None` keeps them in memory only
    pub settings_file: Option<PathBuf>,
}

impl AppState {
    /// Blank document sized from the settings
    pub fn new(settings: AppSettings) -> Result<Self, shared::CanvasError> {
        let canvas = &settings.canvas;
        let document = Document::blank(canvas.default_width, canvas.default_height, canvas.background)?;
        Ok(Self::with_document(settings, document))
    }

    /// Edit `document` with an empty history, e.g. one restored from autosave
    pub fn with_document(settings: AppSettings, document: Document) -> Self {
        Self {
            document: DocumentState::new(document, settings.history),
            settings,
            settings_file: None,
        }
    }

    /// Open a document file using the configured history limits
    pub fn open(settings: AppSettings, path: &Path) -> Result<Self, DocumentError> {
        let document = DocumentState::load_from(path, settings.history)?;
        Ok(Self {
            document,
            settings,
            settings_file: None,
        })
    }

    /// Store new undo limits in the settings and apply them to the open document.
    ///
    /// When anything changed and a settings file is set, the settings are written to it.
    pub fn set_history_limits(&mut self, limits: history::HistoryLimits) -> bool {
        let applied = self.document.apply_limits(&limits);
        self.settings.history = *self.document.history().limits();
        if applied {
            if let Some(path) = &self.settings_file {
                self.settings.save_to(path);
            }
        }
        applied
    }
}
