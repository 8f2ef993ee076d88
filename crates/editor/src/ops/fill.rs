use history::Command;
use shared::{Rect, Region, Rgba};

use crate::state::document::Document;

/// Fill a rectangle, or the current selection, with a solid color
pub struct FillRectCommand {
    /// `None` fills whatever the selection covers when the command runs
    rect: Option<Rect>,
    color: Rgba,
    saved: Option<Region>,
}

impl FillRectCommand {
    pub fn rect(rect: Rect, color: Rgba) -> Self {
        Self {
            rect: Some(rect),
            color,
            saved: None,
        }
    }

    pub fn selection(color: Rgba) -> Self {
        Self {
            rect: None,
            color,
            saved: None,
        }
    }
}

impl Command<Document> for FillRectCommand {
    fn name(&self) -> &str {
        "Fill"
    }

    fn size(&self) -> usize {
        self.saved.as_ref().map_or(0, Region::byte_size)
    }

    fn execute(&mut self, target: &mut Document) {
        let bounds = target.canvas.bounds();
        let area = match &self.rect {
            Some(rect) => rect.intersect(&bounds),
            None => target.selection.effective(&bounds),
        };
        self.saved = Some(target.canvas.copy_region(&area));
        target.canvas.fill_rect(&area, self.color);
    }

    fn unexecute(&mut self, target: &mut Document) {
        debug_assert!(self.saved.is_some(), "unexecute before execute");
        if let Some(region) = &self.saved {
            target.canvas.paste_region(region);
        }
    }
}
