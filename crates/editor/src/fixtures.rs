//! Factory functions for creating test data.
//!
//! Provides helpers to build documents, pixel lists and settings used by tests and by
//! scripted sessions.

use history::HistoryLimits;
use shared::{Rect, Rgba};

use crate::ops::PixelPaint;
use crate::state::{AppSettings, Document};

pub const RED: Rgba = Rgba::rgb(255, 0, 0);
pub const GREEN: Rgba = Rgba::rgb(0, 255, 0);
pub const BLUE: Rgba = Rgba::rgb(0, 0, 255);

// ── Document factories ──────────────────────────────────────────

/// Blank white document
pub fn blank_document(width: u32, height: u32) -> Document {
    Document::blank(width, height, Rgba::WHITE)
        .unwrap_or_else(|e| panic!("fixture canvas {width}x{height}: {e}"))
}

/// Document whose pixels form a black/white checkerboard
pub fn checker_document(width: u32, height: u32) -> Document {
    let mut doc = blank_document(width, height);
    for y in 0..height {
        for x in 0..width {
            if (x + y) % 2 == 0 {
                doc.canvas.set_pixel(x, y, Rgba::BLACK);
            }
        }
    }
    doc
}

// ── Pixel factories ─────────────────────────────────────────────

/// A horizontal line of pixels
pub fn hline(x: u32, y: u32, len: u32, color: Rgba) -> Vec<PixelPaint> {
    (x..x + len).map(|x| PixelPaint { x, y, color }).collect()
}

/// Full-canvas rectangle
pub fn full_rect(doc: &Document) -> Rect {
    doc.canvas.bounds()
}

// ── Settings factories ──────────────────────────────────────────

/// Settings with a small canvas and the given limits
pub fn settings_with_limits(min: usize, max: usize, size: usize) -> AppSettings {
    let mut settings = AppSettings::default();
    settings.canvas.default_width = 8;
    settings.canvas.default_height = 8;
    settings.history = HistoryLimits::new(min, max, size);
    settings
}
