use history::Command;
use shared::{Canvas, CanvasError, Rgba};

use crate::state::document::Document;

/// Change the canvas size, anchored at the top-left corner.
///
/// A whole canvas is kept for undo, which makes this the heaviest command.
pub struct ResizeCanvasCommand {
    width: u32,
    height: u32,
    fill: Rgba,
    /// The canvas not currently in the document: the old one after execute,
    /// the resized one after unexecute
    stash: Option<Canvas>,
    executed: bool,
}

impl ResizeCanvasCommand {
    /// Fails if the requested size is not a valid canvas size
    pub fn new(width: u32, height: u32, fill: Rgba) -> Result<Self, CanvasError> {
        Canvas::check_size(width, height)?;
        Ok(Self {
            width,
            height,
            fill,
            stash: None,
            executed: false,
        })
    }
}

impl Command<Document> for ResizeCanvasCommand {
    fn name(&self) -> &str {
        "Resize Canvas"
    }

    fn size(&self) -> usize {
        self.stash.as_ref().map_or(0, Canvas::byte_size)
    }

    fn execute(&mut self, target: &mut Document) {
        debug_assert!(!self.executed, "executed twice");
        if let Some(stash) = self.stash.as_mut() {
            std::mem::swap(&mut target.canvas, stash);
        } else {
            match target.canvas.resized(self.width, self.height, self.fill) {
                Ok(resized) => self.stash = Some(std::mem::replace(&mut target.canvas, resized)),
                Err(e) => debug_assert!(false, "size checked in constructor: {e}"),
            }
        }
        self.executed = true;
    }

    fn unexecute(&mut self, target: &mut Document) {
        debug_assert!(self.executed, "unexecute before execute");
        if let Some(stash) = self.stash.as_mut() {
            std::mem::swap(&mut target.canvas, stash);
        }
        self.executed = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resize_and_revert() {
        let mut d = Document::blank(4, 4, Rgba::BLACK).unwrap();
        let before = d.clone();
        let mut cmd = ResizeCanvasCommand::new(8, 2, Rgba::WHITE).unwrap();
        cmd.execute(&mut d);
        assert_eq!((d.canvas.width(), d.canvas.height()), (8, 2));
        assert_eq!(d.canvas.pixel(7, 0), Some(Rgba::WHITE));
        assert_eq!(cmd.size(), before.canvas.byte_size());

        cmd.unexecute(&mut d);
        assert_eq!(d, before);
        assert_eq!(cmd.size(), 8 * 2 * Rgba::BYTES);

        cmd.execute(&mut d);
        assert_eq!(d.canvas.width(), 8);
        assert_eq!(d.canvas.pixel(0, 0), Some(Rgba::BLACK));
    }

    #[test]
    fn test_invalid_size_rejected() {
        assert!(ResizeCanvasCommand::new(0, 10, Rgba::WHITE).is_err());
    }
}
