//! Text layout
//!
//! Font selection, bounding-box measurement and line fitting. Nothing in
//! here draws; everything measures through [`TextMeasurer`] so it can be
//! exercised against fixed-metric fixtures.

pub mod font;
pub mod measure;
pub mod wrap;

pub use font::{Font, FontCatalog};
pub use measure::{BoundingBox, TextAlign, TextMeasurer};
pub use wrap::{truncate_to_width, wrap_to_two_lines, Line, Wrapped, ELLIPSIS, MAX_LINE_LEN};

/// Append as much of `text` as fits in `buf`, stopping on a char boundary
///
/// Returns `false` if anything was left out.
pub fn push_bounded<const N: usize>(buf: &mut heapless::String<N>, text: &str) -> bool {
    for ch in text.chars() {
        if buf.push(ch).is_err() {
            return false;
        }
    }
    true
}
