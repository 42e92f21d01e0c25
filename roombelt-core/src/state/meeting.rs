//! Meeting data

use heapless::String;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::layout::push_bounded;

/// Capacity of a snapshot text field in bytes
pub const MAX_TEXT_LEN: usize = 96;

/// Bounded snapshot text
pub type Text = String<MAX_TEXT_LEN>;

/// Build a [`Text`], cutting overlong input on a char boundary
pub fn text(value: &str) -> Text {
    let mut out = Text::new();
    push_bounded(&mut out, value);
    out
}

/// A calendar meeting, or the absence of one
///
/// The text fields are meaningful only when `is_defined` is set; an
/// undefined meeting renders nothing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MeetingData {
    pub is_defined: bool,
    pub summary: Text,
    pub host: Text,
    pub start_time: Text,
    pub end_time: Text,
}

impl MeetingData {
    /// A defined meeting
    pub fn new(summary: &str, start_time: &str, end_time: &str, host: &str) -> Self {
        Self {
            is_defined: true,
            summary: text(summary),
            host: text(host),
            start_time: text(start_time),
            end_time: text(end_time),
        }
    }

    /// "No meeting"
    pub fn undefined() -> Self {
        Self::default()
    }
}
