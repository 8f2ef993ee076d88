use history::Command;
use serde::{Deserialize, Serialize};
use shared::Rgba;

use crate::state::document::Document;

/// One pixel written by a [`SetPixelsCommand`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelPaint {
    pub x: u32,
    pub y: u32,
    pub color: Rgba,
}

/// Write individual pixels (pencil, brush dabs).
///
/// Pixels outside the canvas are skipped. The same coordinate may appear more than once;
/// reverting walks the list backwards so the oldest color wins.
pub struct SetPixelsCommand {
    name: String,
    pixels: Vec<PixelPaint>,
    /// Previous color of each entry in `pixels`, filled on execute
    previous: Vec<Option<Rgba>>,
}

impl SetPixelsCommand {
    pub fn new(name: impl Into<String>, pixels: Vec<PixelPaint>) -> Self {
        Self {
            name: name.into(),
            pixels,
            previous: Vec::new(),
        }
    }

    /// Single pixel pencil command
    pub fn single(x: u32, y: u32, color: Rgba) -> Self {
        Self::new("Pencil", vec![PixelPaint { x, y, color }])
    }
}

impl Command<Document> for SetPixelsCommand {
    fn name(&self) -> &str {
        &self.name
    }

    fn size(&self) -> usize {
        self.pixels.len() * std::mem::size_of::<PixelPaint>()
            + self.previous.len() * std::mem::size_of::<Option<Rgba>>()
    }

    fn execute(&mut self, target: &mut Document) {
        self.previous = self
            .pixels
            .iter()
            .map(|p| target.canvas.set_pixel(p.x, p.y, p.color))
            .collect();
    }

    fn unexecute(&mut self, target: &mut Document) {
        debug_assert_eq!(self.previous.len(), self.pixels.len(), "unexecute before execute");
        for (p, old) in self.pixels.iter().zip(self.previous.iter()).rev() {
            if let Some(color) = old {
                target.canvas.set_pixel(p.x, p.y, *color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_restore() {
        let mut d = Document::blank(3, 3, Rgba::WHITE).unwrap();
        let before = d.clone();
        let mut cmd = SetPixelsCommand::single(1, 2, Rgba::BLACK);
        cmd.execute(&mut d);
        assert_eq!(d.canvas.pixel(1, 2), Some(Rgba::BLACK));
        cmd.unexecute(&mut d);
        assert_eq!(d, before);
    }

    #[test]
    fn test_repeated_coordinate_restores_oldest() {
        let mut d = Document::blank(2, 2, Rgba::WHITE).unwrap();
        let red = Rgba::rgb(255, 0, 0);
        let mut cmd = SetPixelsCommand::new(
            "Brush",
            vec![
                PixelPaint { x: 0, y: 0, color: red },
                PixelPaint { x: 0, y: 0, color: Rgba::BLACK },
            ],
        );
        cmd.execute(&mut d);
        assert_eq!(d.canvas.pixel(0, 0), Some(Rgba::BLACK));
        cmd.unexecute(&mut d);
        assert_eq!(d.canvas.pixel(0, 0), Some(Rgba::WHITE));
    }

    #[test]
    fn test_out_of_bounds_skipped() {
        let mut d = Document::blank(2, 2, Rgba::WHITE).unwrap();
        let before = d.clone();
        let mut cmd = SetPixelsCommand::single(9, 9, Rgba::BLACK);
        cmd.execute(&mut d);
        assert_eq!(d, before);
        cmd.unexecute(&mut d);
        assert_eq!(d, before);
    }

    #[test]
    fn test_size_grows_after_execute() {
        let mut d = Document::blank(2, 2, Rgba::WHITE).unwrap();
        let mut cmd = SetPixelsCommand::single(0, 0, Rgba::BLACK);
        let before = cmd.size();
        cmd.execute(&mut d);
        assert!(cmd.size() > before);
    }
}
