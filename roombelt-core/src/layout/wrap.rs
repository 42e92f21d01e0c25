//! Line fitting: two-line word wrap and ellipsis truncation
//!
//! Both algorithms measure growing prefixes of the input and treat a
//! measured width strictly greater than the budget as overflow, so text
//! that is exactly as wide as the budget is left alone.

use heapless::String;

use super::font::Font;
use super::measure::TextMeasurer;
use super::push_bounded;

/// Capacity of a composed line in bytes
pub const MAX_LINE_LEN: usize = 128;

/// Marker appended to truncated text
pub const ELLIPSIS: &str = "...";

/// A single composed line
pub type Line = String<MAX_LINE_LEN>;

/// Result of [`wrap_to_two_lines`]
///
/// Lines borrow from the wrapped text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wrapped<'a> {
    Single(&'a str),
    Split(&'a str, &'a str),
}

impl<'a> Wrapped<'a> {
    /// Number of lines (1 or 2)
    pub const fn line_count(&self) -> usize {
        match self {
            Wrapped::Single(_) => 1,
            Wrapped::Split(..) => 2,
        }
    }

    /// First line
    pub const fn first(&self) -> &'a str {
        match *self {
            Wrapped::Single(line) | Wrapped::Split(line, _) => line,
        }
    }

    /// Second line, if the text was split
    pub const fn second(&self) -> Option<&'a str> {
        match *self {
            Wrapped::Single(_) => None,
            Wrapped::Split(_, line) => Some(line),
        }
    }

    /// Lines in display order
    pub fn lines(&self) -> impl Iterator<Item = &'a str> {
        core::iter::once(self.first()).chain(self.second())
    }
}

/// Wrap `text` onto at most two lines of `max_width` pixels
///
/// Scans forward measuring each prefix. At the first prefix wider than
/// `max_width` the text is split at the most recent whitespace seen so far
/// (the whitespace itself is dropped and both halves trimmed), or hard at
/// the overflowing character when no whitespace was seen. The second line
/// is never re-checked: text needing three or more lines still comes back
/// as two.
pub fn wrap_to_two_lines<'a, M>(
    measurer: &mut M,
    text: &'a str,
    font: Font,
    max_width: u32,
) -> Wrapped<'a>
where
    M: TextMeasurer + ?Sized,
{
    let mut boundary: Option<(usize, usize)> = None;

    for (idx, ch) in text.char_indices() {
        if ch.is_whitespace() {
            boundary = Some((idx, ch.len_utf8()));
        }

        let end = idx + ch.len_utf8();
        if measurer.measure(&text[..end], font).width > max_width {
            return split_at(text, idx, boundary);
        }
    }

    Wrapped::Single(text)
}

fn split_at(text: &str, overflow_idx: usize, boundary: Option<(usize, usize)>) -> Wrapped<'_> {
    if let Some((idx, len)) = boundary {
        let head = text[..idx].trim();
        let tail = text[idx + len..].trim();
        if !head.is_empty() {
            return pair(head, tail);
        }
    }

    // A lone first glyph wider than the budget still goes on line one.
    let at = if overflow_idx == 0 {
        text.chars().next().map_or(0, char::len_utf8)
    } else {
        overflow_idx
    };
    pair(text[..at].trim(), text[at..].trim())
}

fn pair<'a>(head: &'a str, tail: &'a str) -> Wrapped<'a> {
    if tail.is_empty() {
        Wrapped::Single(head)
    } else {
        Wrapped::Split(head, tail)
    }
}

/// Shorten `text` with a trailing [`ELLIPSIS`] until it fits `max_width`
///
/// Text that already fits is returned unchanged. Otherwise the candidates
/// are the first `n - 1`, `n - 2`, ... characters of the original followed
/// by the ellipsis, down to a floor of one character plus the ellipsis,
/// which is returned even if it still does not fit.
pub fn truncate_to_width<M>(measurer: &mut M, text: &str, font: Font, max_width: u32) -> Line
where
    M: TextMeasurer + ?Sized,
{
    let mut line = Line::new();

    let char_count = text.chars().count();
    let fits_buffer = text.len() <= MAX_LINE_LEN;
    if char_count <= 1 || (fits_buffer && measurer.measure(text, font).width <= max_width) {
        push_bounded(&mut line, text);
        return line;
    }

    for keep in (1..char_count).rev() {
        let end = text.char_indices().nth(keep).map_or(text.len(), |(i, _)| i);

        line.clear();
        push_prefix(&mut line, &text[..end], MAX_LINE_LEN - ELLIPSIS.len());
        push_bounded(&mut line, ELLIPSIS);

        if measurer.measure(&line, font).width <= max_width {
            break;
        }
    }

    line
}

/// Append chars of `text` while the line stays within `limit` bytes
fn push_prefix(line: &mut Line, text: &str, limit: usize) {
    for ch in text.chars() {
        if line.len() + ch.len_utf8() > limit || line.push(ch).is_err() {
            return;
        }
    }
}
