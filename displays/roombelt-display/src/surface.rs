//! Frame-buffer surface over an embedded-graphics draw target

use embedded_graphics::{
    mono_font::{MonoFont, MonoTextStyle},
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::{Line, PrimitiveStyle},
    text::{renderer::TextRenderer, Baseline, Text},
};
use roombelt_core::{BitDepth, BoundingBox, DisplaySurface, Font, SurfaceError};

use crate::backend::{EpdPanel, PanelError};
use crate::fonts::{FontTable, DEFAULT_FONTS};

/// Display surface drawing into `D` and refreshing through panel `P`
///
/// Text is drawn in [`BinaryColor::On`] on a [`BinaryColor::Off`] background,
/// with the cursor on the alphabetic baseline.
pub struct FrameSurface<D, P> {
    target: D,
    panel: P,
    fonts: FontTable,
    font: &'static MonoFont<'static>,
    cursor: Point,
}

impl<D, P> FrameSurface<D, P>
where
    D: DrawTarget<Color = BinaryColor>,
    P: EpdPanel<D>,
{
    /// Create a surface with the stock fonts
    pub fn new(target: D, panel: P) -> Self {
        Self::with_fonts(target, panel, DEFAULT_FONTS)
    }

    /// Create a surface with a custom font table
    pub fn with_fonts(target: D, panel: P, fonts: FontTable) -> Self {
        let font = *fonts.get(Font::Small);
        Self {
            target,
            panel,
            fonts,
            font,
            cursor: Point::zero(),
        }
    }

    /// Bring up the panel and start from a blank frame
    pub fn begin(&mut self, depth: BitDepth) -> Result<(), SurfaceError> {
        self.panel.begin(depth).map_err(refresh_error)?;
        self.clear()
    }

    pub fn target(&self) -> &D {
        &self.target
    }

    pub fn panel(&self) -> &P {
        &self.panel
    }

    pub fn panel_mut(&mut self) -> &mut P {
        &mut self.panel
    }

    /// Release the draw target and panel
    pub fn into_inner(self) -> (D, P) {
        (self.target, self.panel)
    }

    fn style(&self) -> MonoTextStyle<'static, BinaryColor> {
        MonoTextStyle::new(self.font, BinaryColor::On)
    }

    fn ensure_ready(&self) -> Result<(), SurfaceError> {
        if self.panel.is_ready() {
            Ok(())
        } else {
            Err(SurfaceError::NotReady)
        }
    }
}

fn refresh_error(_err: PanelError) -> SurfaceError {
    #[cfg(feature = "defmt")]
    defmt::warn!("panel error: {:?}", _err);
    SurfaceError::Refresh
}

impl<D, P> DisplaySurface for FrameSurface<D, P>
where
    D: DrawTarget<Color = BinaryColor>,
    P: EpdPanel<D>,
{
    fn select_font(&mut self, font: Font) {
        self.font = *self.fonts.get(font);
    }

    fn measure_text(&self, text: &str) -> BoundingBox {
        let metrics = self
            .style()
            .measure_string(text, Point::zero(), Baseline::Alphabetic);
        let bounds = metrics.bounding_box;
        BoundingBox::new(
            bounds.top_left.x,
            bounds.top_left.y,
            bounds.size.width,
            bounds.size.height,
        )
    }

    fn set_cursor(&mut self, x: i32, y: i32) {
        self.cursor = Point::new(x, y);
    }

    fn draw_text(&mut self, text: &str) -> Result<(), SurfaceError> {
        let next = Text::with_baseline(text, self.cursor, self.style(), Baseline::Alphabetic)
            .draw(&mut self.target)
            .map_err(|_| SurfaceError::Draw)?;
        self.cursor = next;
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
        Line::new(Point::new(x0, y0), Point::new(x1, y1))
            .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, thickness))
            .draw(&mut self.target)
            .map_err(|_| SurfaceError::Draw)
    }

    fn width(&self) -> u32 {
        self.target.bounding_box().size.width
    }

    fn height(&self) -> u32 {
        self.target.bounding_box().size.height
    }

    fn clear(&mut self) -> Result<(), SurfaceError> {
        self.target
            .clear(BinaryColor::Off)
            .map_err(|_| SurfaceError::Draw)
    }

    fn commit_full(&mut self) -> Result<(), SurfaceError> {
        self.ensure_ready()?;
        self.panel.refresh_full(&self.target).map_err(refresh_error)
    }

    fn commit_partial(&mut self) -> Result<(), SurfaceError> {
        self.ensure_ready()?;
        self.panel
            .refresh_partial(&self.target)
            .map_err(refresh_error)
    }
}
