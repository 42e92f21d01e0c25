//! Text bounding boxes and alignment

use super::font::Font;
use crate::traits::DisplaySurface;

/// Visual extent of a rendered string
///
/// `x`/`y` are the offset of the box's top-left corner from the drawing
/// origin (the baseline cursor); `y` is negative for text sitting above
/// the baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BoundingBox {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl BoundingBox {
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Cursor position that puts the box's visual center on `center`
    /// along the horizontal axis
    pub const fn centered_x(&self, center: i32) -> i32 {
        center - self.width as i32 / 2 - self.x
    }

    /// Cursor position that puts the box's visual center on `center`
    /// along the vertical axis
    pub const fn centered_y(&self, center: i32) -> i32 {
        center - self.height as i32 / 2 - self.y
    }
}

/// Measures text in a given font
///
/// Measurement depends only on the font and the text, never on what has
/// been drawn before.
pub trait TextMeasurer {
    fn measure(&mut self, text: &str, font: Font) -> BoundingBox;
}

impl<S: DisplaySurface> TextMeasurer for S {
    fn measure(&mut self, text: &str, font: Font) -> BoundingBox {
        self.select_font(font);
        self.measure_text(text)
    }
}

/// Horizontal text alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

impl TextAlign {
    /// Cursor x for text with bounds `bounds` on a surface `surface_width`
    /// pixels wide
    ///
    /// `x` is the inset from the aligned edge; it is ignored when centering.
    pub const fn origin_x(self, x: i32, surface_width: u32, bounds: &BoundingBox) -> i32 {
        match self {
            TextAlign::Left => x - bounds.x,
            TextAlign::Center => bounds.centered_x(surface_width as i32 / 2),
            TextAlign::Right => surface_width as i32 - x - bounds.x - bounds.width as i32,
        }
    }
}
