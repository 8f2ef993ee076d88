use serde::{Deserialize, Serialize};

pub mod canvas;

pub use canvas::{Canvas, CanvasError, Region};

/// Цвет пикселя RGBA, 8 бит на канал
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Rgba(pub [u8; 4]);

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba([0, 0, 0, 0]);
    pub const BLACK: Rgba = Rgba([0, 0, 0, 255]);
    pub const WHITE: Rgba = Rgba([255, 255, 255, 255]);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self([r, g, b, a])
    }

    /// Непрозрачный цвет
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b, 255])
    }

    /// Размер одного пикселя в байтах
    pub const BYTES: usize = 4;
}

/// Прямоугольная область в пиксельных координатах
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Площадь в пикселях
    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Правая граница (не включительно)
    pub fn right(&self) -> u32 {
        self.x.saturating_add(self.width)
    }

    /// Нижняя граница (не включительно)
    pub fn bottom(&self) -> u32 {
        self.y.saturating_add(self.height)
    }

    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Пересечение двух прямоугольников (пустой `Rect`, если они не пересекаются)
    pub fn intersect(&self, other: &Rect) -> Rect {
        let x0 = self.x.max(other.x);
        let y0 = self.y.max(other.y);
        let x1 = self.right().min(other.right());
        let y1 = self.bottom().min(other.bottom());
        if x1 <= x0 || y1 <= y0 {
            return Rect::default();
        }
        Rect::new(x0, y0, x1 - x0, y1 - y0)
    }
}

/// Выделение на холсте. `None` — выделено всё изображение
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Selection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rect: Option<Rect>,
}

impl Selection {
    pub fn all() -> Self {
        Self { rect: None }
    }

    pub fn rect(rect: Rect) -> Self {
        Self { rect: Some(rect) }
    }

    pub fn is_all(&self) -> bool {
        self.rect.is_none()
    }

    /// Область, к которой применяются операции на холсте размером `bounds`
    pub fn effective(&self, bounds: &Rect) -> Rect {
        match &self.rect {
            Some(rect) => rect.intersect(bounds),
            None => *bounds,
        }
    }
}
