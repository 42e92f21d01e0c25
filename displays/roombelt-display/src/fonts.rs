//! Bitmap fonts for each semantic size

use embedded_graphics::mono_font::{ascii::FONT_6X10, MonoFont};
use profont::{PROFONT_12_POINT, PROFONT_14_POINT, PROFONT_18_POINT, PROFONT_24_POINT};
use roombelt_core::FontCatalog;

/// Font lookup table used by [`FrameSurface`](crate::FrameSurface)
pub type FontTable = FontCatalog<&'static MonoFont<'static>>;

/// Stock fonts, smallest first
pub const DEFAULT_FONTS: FontTable = FontCatalog::new([
    &FONT_6X10,
    &PROFONT_12_POINT,
    &PROFONT_14_POINT,
    &PROFONT_18_POINT,
    &PROFONT_24_POINT,
]);
