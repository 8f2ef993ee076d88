//! Save/load and autosave functionality

use std::path::{Path, PathBuf};

use history::HistoryLimits;
use shared::CanvasError;

use super::{Document, DocumentState};

/// Errors while reading or writing a document file
#[derive(Debug)]
pub enum DocumentError {
    /// The document has never been saved and no path was given
    NoPath,
    /// Reading or writing the file failed
    Io(String),
    /// The file is not a valid document
    Parse(String),
    /// The file parsed but the image inside is inconsistent
    Canvas(CanvasError),
}

impl std::fmt::Display for DocumentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentError::NoPath => write!(f, "No file name given for an unsaved document"),
            DocumentError::Io(msg) => write!(f, "I/O error: {}", msg),
            DocumentError::Parse(msg) => write!(f, "Invalid document: {}", msg),
            DocumentError::Canvas(e) => write!(f, "Invalid image: {}", e),
        }
    }
}

impl std::error::Error for DocumentError {}

impl From<CanvasError> for DocumentError {
    fn from(e: CanvasError) -> Self {
        DocumentError::Canvas(e)
    }
}

/// Read a document from a JSON file
pub fn read_document(path: &Path) -> Result<Document, DocumentError> {
    let json = std::fs::read_to_string(path).map_err(|e| DocumentError::Io(e.to_string()))?;
    let document: Document =
        serde_json::from_str(&json).map_err(|e| DocumentError::Parse(e.to_string()))?;
    document.canvas.validate()?;
    Ok(document)
}

fn write_document(document: &Document, path: &Path) -> Result<(), DocumentError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| DocumentError::Io(e.to_string()))?;
        }
    }
    let json = serde_json::to_string(document).map_err(|e| DocumentError::Parse(e.to_string()))?;
    std::fs::write(path, json).map_err(|e| DocumentError::Io(e.to_string()))
}

impl DocumentState {
    /// Open a document file with an empty history
    pub fn load_from(path: &Path, limits: HistoryLimits) -> Result<Self, DocumentError> {
        let document = read_document(path)?;
        tracing::info!(
            "Loaded {} ({}x{})",
            path.display(),
            document.canvas.width(),
            document.canvas.height()
        );
        let mut state = Self::new(document, limits);
        state.path = Some(path.to_path_buf());
        Ok(state)
    }

    /// Save to `path`, or to the current path if `None`.
    ///
    /// On success the current state becomes the save point.
    pub fn save_to(&mut self, path: Option<&Path>) -> Result<PathBuf, DocumentError> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => self.path.clone().ok_or(DocumentError::NoPath)?,
        };
        write_document(&self.document, &path)?;
        self.history.document_saved();
        self.path = Some(path.clone());
        tracing::info!("Saved {}", path.display());
        Ok(path)
    }

    /// Location of the autosave file in the platform data dir
    pub fn autosave_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "paint", "paint")
            .map(|dirs| dirs.data_dir().join("autosave.json"))
    }

    /// Write the document to `path` without moving the save point or the current path
    pub fn autosave_to(&self, path: &Path) -> Result<(), DocumentError> {
        write_document(&self.document, path)?;
        tracing::debug!("Autosaved to {}", path.display());
        Ok(())
    }

    /// Write the document to the autosave file
    pub fn autosave(&self) {
        if let Some(path) = Self::autosave_path() {
            if let Err(e) = self.autosave_to(&path) {
                tracing::warn!("Autosave failed: {e}");
            }
        }
    }

    /// Load the document from the autosave file
    pub fn load_autosave() -> Option<Document> {
        let path = Self::autosave_path()?;
        match read_document(&path) {
            Ok(document) => Some(document),
            Err(DocumentError::Io(_)) => None,
            Err(e) => {
                tracing::warn!("Ignoring autosave {}: {e}", path.display());
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::Rgba;

    fn temp_file(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("paint-editor-{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn test_save_marks_unmodified() {
        let mut state = DocumentState::new(
            Document::blank(2, 2, Rgba::WHITE).unwrap(),
            HistoryLimits::default(),
        );
        state.fill_rect(shared::Rect::new(0, 0, 1, 1), Rgba::BLACK);
        assert!(state.modified());

        let path = temp_file("save.json");
        state.save_to(Some(path.as_path())).unwrap();
        assert!(!state.modified());
        assert_eq!(state.path.as_deref(), Some(path.as_path()));

        let reopened = DocumentState::load_from(&path, HistoryLimits::default()).unwrap();
        assert_eq!(reopened.document, state.document);
        assert!(!reopened.can_undo());
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_save_without_path() {
        let mut state = DocumentState::new(
            Document::blank(1, 1, Rgba::WHITE).unwrap(),
            HistoryLimits::default(),
        );
        assert!(matches!(state.save_to(None), Err(DocumentError::NoPath)));
    }

    #[test]
    fn test_open_rejects_bad_files() {
        let path = temp_file("bad.json");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();

        std::fs::write(&path, "not json").unwrap();
        assert!(matches!(
            DocumentState::load_from(&path, HistoryLimits::default()),
            Err(DocumentError::Parse(_))
        ));

        std::fs::write(&path, r#"{"canvas": {"width": 2, "height": 2, "pixels": []}}"#).unwrap();
        assert!(matches!(
            DocumentState::load_from(&path, HistoryLimits::default()),
            Err(DocumentError::Canvas(_))
        ));

        let _ = std::fs::remove_file(&path);
        assert!(matches!(
            DocumentState::load_from(&path, HistoryLimits::default()),
            Err(DocumentError::Io(_))
        ));
    }

    #[test]
    fn test_autosave_keeps_save_point() {
        let mut state = DocumentState::new(
            Document::blank(3, 3, Rgba::WHITE).unwrap(),
            HistoryLimits::default(),
        );
        state.fill_rect(shared::Rect::new(1, 1, 2, 2), Rgba::BLACK);

        let path = temp_file("autosave.json");
        state.autosave_to(&path).unwrap();
        assert!(state.modified());
        assert!(state.path.is_none());
        assert!(state.can_undo());

        assert_eq!(read_document(&path).unwrap(), state.document);
        let _ = std::fs::remove_file(&path);
    }
}
