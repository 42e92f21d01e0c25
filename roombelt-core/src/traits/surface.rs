//! Display surface trait for bistable panels

use crate::layout::{BoundingBox, Font};

/// Errors reported by a display surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SurfaceError {
    /// Drawing into the frame buffer failed
    Draw,
    /// The panel rejected or failed a refresh
    Refresh,
    /// Panel not initialized
    NotReady,
}

/// Drawing and refresh surface of an e-paper panel
///
/// Coordinates are in surface pixels with the origin at the top-left
/// corner. Text is drawn at the cursor with the cursor on the glyph
/// baseline; [`measure_text`](Self::measure_text) reports the visual
/// bounding box relative to that baseline origin.
pub trait DisplaySurface {
    /// Make `font` the active font for subsequent measure and draw calls
    fn select_font(&mut self, font: Font);

    /// Measure `text` in the active font, relative to a cursor at (0, 0)
    fn measure_text(&self, text: &str) -> BoundingBox;

    /// Move the text cursor
    fn set_cursor(&mut self, x: i32, y: i32);

    /// Draw `text` at the cursor in the active font
    fn draw_text(&mut self, text: &str) -> Result<(), SurfaceError>;

    /// Draw a straight line of the given stroke thickness
    fn draw_line(
        &mut self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        thickness: u32,
    ) -> Result<(), SurfaceError>;

    /// Surface width in pixels
    fn width(&self) -> u32;

    /// Surface height in pixels
    fn height(&self) -> u32;

    /// Clear the frame buffer (does not touch the panel)
    fn clear(&mut self) -> Result<(), SurfaceError>;

    /// Push the frame buffer with a full (flashing) refresh
    fn commit_full(&mut self) -> Result<(), SurfaceError>;

    /// Push the frame buffer with a fast partial refresh
    fn commit_partial(&mut self) -> Result<(), SurfaceError>;
}
