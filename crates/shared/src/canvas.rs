//! Растровый холст документа

use serde::{Deserialize, Serialize};

use crate::{Rect, Rgba};

/// Максимальная сторона холста в пикселях
pub const MAX_DIMENSION: u32 = 16384;

/// Ошибки при работе с холстом
#[derive(Debug, Clone, PartialEq)]
pub enum CanvasError {
    /// Недопустимый размер холста
    InvalidSize { width: u32, height: u32 },
    /// Количество пикселей не совпадает с размером
    PixelCountMismatch { expected: usize, actual: usize },
}

impl std::fmt::Display for CanvasError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CanvasError::InvalidSize { width, height } => {
                write!(f, "Invalid canvas size {}x{}", width, height)
            }
            CanvasError::PixelCountMismatch { expected, actual } => {
                write!(f, "Expected {} pixels, found {}", expected, actual)
            }
        }
    }
}

impl std::error::Error for CanvasError {}

/// Холст: пиксели хранятся построчно, слева направо, сверху вниз
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<Rgba>,
}

/// Копия прямоугольного фрагмента холста
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub rect: Rect,
    pub pixels: Vec<Rgba>,
}

impl Region {
    /// Объём пиксельных данных в байтах
    pub fn byte_size(&self) -> usize {
        self.pixels.len() * Rgba::BYTES
    }
}

impl Canvas {
    /// Проверить, что размер допустим для холста
    pub fn check_size(width: u32, height: u32) -> Result<(), CanvasError> {
        if width == 0 || height == 0 || width > MAX_DIMENSION || height > MAX_DIMENSION {
            return Err(CanvasError::InvalidSize { width, height });
        }
        Ok(())
    }

    /// Создать холст, залитый цветом `fill`
    pub fn new(width: u32, height: u32, fill: Rgba) -> Result<Self, CanvasError> {
        Self::check_size(width, height)?;
        Ok(Self {
            width,
            height,
            pixels: vec![fill; width as usize * height as usize],
        })
    }

    /// Собрать холст из готовых пикселей
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Rgba>) -> Result<Self, CanvasError> {
        let canvas = Self {
            width,
            height,
            pixels,
        };
        canvas.validate()?;
        Ok(canvas)
    }

    /// Проверка инвариантов (после десериализации)
    pub fn validate(&self) -> Result<(), CanvasError> {
        Self::check_size(self.width, self.height)?;
        let expected = self.width as usize * self.height as usize;
        if self.pixels.len() != expected {
            return Err(CanvasError::PixelCountMismatch {
                expected,
                actual: self.pixels.len(),
            });
        }
        Ok(())
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Прямоугольник всего холста
    pub fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }

    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    /// Объём пиксельных данных в байтах
    pub fn byte_size(&self) -> usize {
        self.pixels.len() * Rgba::BYTES
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    /// Цвет пикселя, `None` за пределами холста
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Записать пиксель, вернуть прежний цвет (`None` за пределами холста)
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgba) -> Option<Rgba> {
        let i = self.index(x, y)?;
        Some(std::mem::replace(&mut self.pixels[i], color))
    }

    /// Скопировать фрагмент (обрезается по границам холста)
    pub fn copy_region(&self, rect: &Rect) -> Region {
        let rect = rect.intersect(&self.bounds());
        let mut pixels = Vec::with_capacity(rect.area());
        for y in rect.y..rect.bottom() {
            let start = y as usize * self.width as usize + rect.x as usize;
            pixels.extend_from_slice(&self.pixels[start..start + rect.width as usize]);
        }
        Region { rect, pixels }
    }

    /// Вставить фрагмент, ранее полученный через [`Canvas::copy_region`]
    pub fn paste_region(&mut self, region: &Region) {
        let rect = region.rect;
        debug_assert_eq!(region.pixels.len(), rect.area());
        let row = rect.width as usize;
        for (dy, chunk) in region.pixels.chunks(row.max(1)).enumerate() {
            let y = rect.y as usize + dy;
            if y >= self.height as usize {
                break;
            }
            let len = chunk.len().min(self.width as usize - rect.x.min(self.width) as usize);
            if len == 0 {
                continue;
            }
            let start = y * self.width as usize + rect.x as usize;
            self.pixels[start..start + len].copy_from_slice(&chunk[..len]);
        }
    }

    /// Залить прямоугольник цветом (обрезается по границам холста)
    pub fn fill_rect(&mut self, rect: &Rect, color: Rgba) {
        let rect = rect.intersect(&self.bounds());
        for y in rect.y..rect.bottom() {
            let start = y as usize * self.width as usize + rect.x as usize;
            self.pixels[start..start + rect.width as usize].fill(color);
        }
    }

    /// Новый холст другого размера; содержимое привязано к левому верхнему углу
    pub fn resized(&self, width: u32, height: u32, fill: Rgba) -> Result<Canvas, CanvasError> {
        let mut out = Canvas::new(width, height, fill)?;
        out.paste_region(&self.copy_region(&out.bounds()));
        Ok(out)
    }
}
