//! Concrete editing commands.
//!
//! Each command captures whatever it needs to revert itself the first time it runs, and
//! reports the bytes of retained pixel data as its size.

mod fill;
mod pixels;
mod resize;
mod select;

pub use fill::FillRectCommand;
pub use pixels::{PixelPaint, SetPixelsCommand};
pub use resize::ResizeCanvasCommand;
pub use select::SelectCommand;

use history::{Command, MacroCommand};
use shared::{Rect, Rgba};

use crate::state::document::Document;

/// A command that does nothing.
///
/// Pushed to reserve an undo slot while a longer edit is in progress, then swapped for the
/// real command with [`DocumentState::replace_last`](crate::state::document::DocumentState::replace_last).
pub struct PlaceholderCommand {
    name: String,
}

impl PlaceholderCommand {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Command<Document> for PlaceholderCommand {
    fn name(&self) -> &str {
        &self.name
    }

    fn execute(&mut self, _: &mut Document) {}

    fn unexecute(&mut self, _: &mut Document) {}
}

/// "Select the rectangle, then fill the selection" as a single undo step.
///
/// The fill reads the selection made by the first child, so reverting has to restore the
/// pixels before the selection.
pub fn fill_selection(rect: Rect, color: Rgba) -> MacroCommand<Document> {
    MacroCommand::new("Fill Selection")
        .with(SelectCommand::new(Some(rect)))
        .with(FillRectCommand::selection(color))
}
