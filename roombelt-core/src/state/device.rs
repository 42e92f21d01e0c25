//! Device snapshot

use heapless::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::meeting::{text, MeetingData, Text};

/// Maximum upcoming meetings carried in a snapshot
pub const MAX_MEETINGS: usize = 16;

/// Read-only snapshot of what the room display should show
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DeviceState {
    pub room_name: Text,
    /// Current time, preformatted for display
    pub time: Text,
    pub connection_code: Text,
    pub current_meeting: MeetingData,
    /// Upcoming meetings in chronological order
    pub next_meetings: Vec<MeetingData, MAX_MEETINGS>,
}

impl DeviceState {
    /// Snapshot with room and clock set and no meetings
    pub fn new(room_name: &str, time: &str) -> Self {
        Self {
            room_name: text(room_name),
            time: text(time),
            ..Self::default()
        }
    }

    pub fn with_connection_code(mut self, code: &str) -> Self {
        self.connection_code = text(code);
        self
    }

    pub fn with_current(mut self, meeting: MeetingData) -> Self {
        self.current_meeting = meeting;
        self
    }

    /// Append an upcoming meeting; ignored once [`MAX_MEETINGS`] are held
    pub fn with_next(mut self, meeting: MeetingData) -> Self {
        let _ = self.next_meetings.push(meeting);
        self
    }

    pub fn current_meeting(&self) -> &MeetingData {
        &self.current_meeting
    }

    /// Upcoming meetings that are actually defined, in order
    pub fn upcoming(&self) -> impl Iterator<Item = &MeetingData> {
        self.next_meetings.iter().filter(|m| m.is_defined)
    }

    /// The first upcoming meeting, if any
    pub fn next_meeting(&self) -> Option<&MeetingData> {
        self.upcoming().next()
    }
}
