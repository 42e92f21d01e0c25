//! Per-board display profiles

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::locale::{Language, Locale};
use crate::refresh::{RefreshPolicy, PARTIAL_REFRESH_LIMIT};

/// Panel pixel depth
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BitDepth {
    /// Black and white
    #[default]
    Mono,
    /// 8 gray levels
    Grayscale3,
}

/// Vertical anchors and spacing of the device screen (pixels)
///
/// All `*_y` values are the top edge of the text's visual box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScreenLayout {
    /// Horizontal inset from both edges, also the header's top
    pub padding: u16,
    /// "Occupied" / "Available until" heading
    pub status_y: i32,
    /// First summary line of the current meeting
    pub summary_y: i32,
    /// Advance of the second summary line; later blocks shift by this much
    pub summary_advance: i32,
    /// Current meeting time range
    pub time_y: i32,
    /// Current meeting host
    pub host_y: i32,
    /// Rule above the upcoming list
    pub separator_y: i32,
    /// Summary of the first upcoming entry
    pub list_top: i32,
    /// Distance between upcoming entries
    pub list_stride: i32,
    /// Time range offset below an entry's summary
    pub list_time_offset: i32,
    /// Overflow text offset below its rule
    pub overflow_offset: i32,
    /// Rule stroke width
    pub rule_thickness: u32,
    /// Gap between the two lines of a message screen
    pub message_margin: i32,
}

/// Everything that differs between supported boards
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DeviceProfile {
    /// Native panel width in pixels
    pub panel_width: u32,
    /// Native panel height in pixels
    pub panel_height: u32,
    pub bit_depth: BitDepth,
    pub language: Language,
    pub layout: ScreenLayout,
    /// Upcoming meetings listed before the overflow line
    pub max_upcoming: u8,
    /// Consecutive partial refreshes before a full one
    pub partial_refresh_limit: u8,
}

impl Default for DeviceProfile {
    fn default() -> Self {
        Self::inkplate_6()
    }
}

impl DeviceProfile {
    /// 6" 800x600 board, black and white
    pub const fn inkplate_6() -> Self {
        Self {
            panel_width: 800,
            panel_height: 600,
            bit_depth: BitDepth::Mono,
            language: Language::English,
            layout: ScreenLayout {
                padding: 10,
                status_y: 60,
                summary_y: 120,
                summary_advance: 40,
                time_y: 170,
                host_y: 215,
                separator_y: 265,
                list_top: 280,
                list_stride: 80,
                list_time_offset: 35,
                overflow_offset: 12,
                rule_thickness: 3,
                message_margin: 20,
            },
            max_upcoming: 3,
            partial_refresh_limit: PARTIAL_REFRESH_LIMIT,
        }
    }

    /// 9.7" 1200x825 board, 3-bit grayscale
    pub const fn inkplate_10() -> Self {
        Self {
            panel_width: 1200,
            panel_height: 825,
            bit_depth: BitDepth::Grayscale3,
            language: Language::Polish,
            layout: ScreenLayout {
                padding: 20,
                status_y: 90,
                summary_y: 170,
                summary_advance: 55,
                time_y: 240,
                host_y: 300,
                separator_y: 380,
                list_top: 400,
                list_stride: 100,
                list_time_offset: 45,
                overflow_offset: 15,
                rule_thickness: 3,
                message_margin: 20,
            },
            max_upcoming: 3,
            partial_refresh_limit: PARTIAL_REFRESH_LIMIT,
        }
    }

    pub const fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    pub fn locale(&self) -> &'static Locale {
        self.language.locale()
    }

    /// Fresh refresh policy for a session on this board
    pub const fn refresh_policy(&self) -> RefreshPolicy {
        RefreshPolicy::new(self.partial_refresh_limit)
    }
}
