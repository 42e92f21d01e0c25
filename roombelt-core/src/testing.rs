//! Test doubles: fixed-metric measurement and a recording surface

use std::string::String;
use std::vec::Vec;

use crate::layout::{BoundingBox, Font, TextMeasurer};
use crate::traits::{DisplaySurface, SurfaceError};

/// Horizontal advance per character for each font
pub fn advance(font: Font) -> u32 {
    match font {
        Font::Small => 8,
        Font::Medium => 10,
        Font::Large => 14,
        Font::ExtraLarge => 18,
        Font::Display => 24,
    }
}

/// Glyph box height for each font (ascent only, no descenders)
pub fn glyph_height(font: Font) -> u32 {
    advance(font) * 3 / 2
}

fn bounds(text: &str, font: Font) -> BoundingBox {
    let width = text.chars().count() as u32 * advance(font);
    let height = glyph_height(font);
    BoundingBox::new(0, -(height as i32), width, height)
}

/// Monospaced measurer with no surface behind it
pub struct FixedMetrics;

impl TextMeasurer for FixedMetrics {
    fn measure(&mut self, text: &str, font: Font) -> BoundingBox {
        bounds(text, font)
    }
}

/// Operation seen by [`RecordingSurface`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    Text {
        x: i32,
        y: i32,
        font: Font,
        text: String,
    },
    Line {
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        thickness: u32,
    },
    Clear,
    CommitFull,
    CommitPartial,
}

/// Surface that records every operation instead of drawing
pub struct RecordingSurface {
    pub width: u32,
    pub height: u32,
    pub ops: Vec<Op>,
    pub fail_commits: bool,
    pub fail_clear: bool,
    font: Font,
    cursor: (i32, i32),
}

impl RecordingSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ops: Vec::new(),
            fail_commits: false,
            fail_clear: false,
            font: Font::Small,
            cursor: (0, 0),
        }
    }

    /// Texts drawn so far, in order
    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Draw op for `text`, if it was drawn
    pub fn text_op(&self, needle: &str) -> Option<&Op> {
        self.ops
            .iter()
            .find(|op| matches!(op, Op::Text { text, .. } if text == needle))
    }

    pub fn line_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, Op::Line { .. }))
            .count()
    }

    pub fn count(&self, wanted: &Op) -> usize {
        self.ops.iter().filter(|op| *op == wanted).count()
    }
}

impl DisplaySurface for RecordingSurface {
    fn select_font(&mut self, font: Font) {
        self.font = font;
    }

    fn measure_text(&self, text: &str) -> BoundingBox {
        bounds(text, self.font)
    }

    fn set_cursor(&mut self, x: i32, y: i32) {
        self.cursor = (x, y);
    }

    fn draw_text(&mut self, text: &str) -> Result<(), SurfaceError> {
        self.ops.push(Op::Text {
            x: self.cursor.0,
            y: self.cursor.1,
            font: self.font,
            text: text.into(),
        });
        Ok(())
    }

    fn draw_line(
        &mut self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        thickness: u32,
    ) -> Result<(), SurfaceError> {
        self.ops.push(Op::Line {
            x0,
            y0,
            x1,
            y1,
            thickness,
        });
        Ok(())
    }

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn clear(&mut self) -> Result<(), SurfaceError> {
        if self.fail_clear {
            return Err(SurfaceError::Draw);
        }
        self.ops.push(Op::Clear);
        Ok(())
    }

    fn commit_full(&mut self) -> Result<(), SurfaceError> {
        if self.fail_commits {
            return Err(SurfaceError::Refresh);
        }
        self.ops.push(Op::CommitFull);
        Ok(())
    }

    fn commit_partial(&mut self) -> Result<(), SurfaceError> {
        if self.fail_commits {
            return Err(SurfaceError::Refresh);
        }
        self.ops.push(Op::CommitPartial);
        Ok(())
    }
}
