//! Editing operations on the document

use history::MacroCommand;
use shared::{CanvasError, Rect, Rgba};

use super::{Document, DocumentState};
use crate::ops::{self, FillRectCommand, PixelPaint, ResizeCanvasCommand, SelectCommand, SetPixelsCommand};

impl DocumentState {
    /// Paint individual pixels as one undo step
    pub fn set_pixels(&mut self, pixels: Vec<PixelPaint>) {
        self.apply(SetPixelsCommand::new("Pencil", pixels));
    }

    /// Fill a rectangle with a solid color
    pub fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        self.apply(FillRectCommand::rect(rect, color));
    }

    /// Select `rect` and fill it, as one undo step
    pub fn fill_selection(&mut self, rect: Rect, color: Rgba) {
        self.apply(ops::fill_selection(rect, color));
    }

    /// Change the active selection (`None` selects everything)
    pub fn select(&mut self, rect: Option<Rect>) {
        self.apply(SelectCommand::new(rect));
    }

    /// Resize the canvas, filling new space with `fill`
    pub fn resize(&mut self, width: u32, height: u32, fill: Rgba) -> Result<(), CanvasError> {
        let cmd = ResizeCanvasCommand::new(width, height, fill)?;
        self.apply(cmd);
        Ok(())
    }

    /// Apply a group of commands built by the caller as a single undo step
    pub fn apply_macro(&mut self, cmd: MacroCommand<Document>) {
        if cmd.is_empty() {
            return;
        }
        self.apply(cmd);
    }
}
