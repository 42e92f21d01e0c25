//! Device status screen

use crate::config::Locale;
use crate::layout::{
    push_bounded, truncate_to_width, wrap_to_two_lines, Font, Line, TextAlign, TextMeasurer,
};
use crate::refresh::CommitOutcome;
use crate::state::{DeviceState, MeetingData};
use crate::traits::{DisplaySurface, SurfaceError};

use super::composer::ScreenComposer;
use super::compose;

const HEADER_FONT: Font = Font::ExtraLarge;
const STATUS_FONT: Font = Font::Display;
const SUMMARY_FONT: Font = Font::ExtraLarge;
const HOST_FONT: Font = Font::Large;
const ENTRY_FONT: Font = Font::Large;
const ENTRY_TIME_FONT: Font = Font::Medium;

impl<S: DisplaySurface> ScreenComposer<S> {
    /// Show room status: header, current meeting and upcoming meetings
    ///
    /// Prefers a partial refresh; the refresh policy decides.
    pub fn show_device_screen(
        &mut self,
        device: &DeviceState,
    ) -> Result<CommitOutcome, SurfaceError> {
        let locale = self.profile.locale();
        let layout = self.profile.layout;

        self.print_header(device)?;

        let current = device.current_meeting();
        match (current.is_defined, device.next_meeting()) {
            (false, None) => {
                #[cfg(feature = "defmt")]
                defmt::debug!("device screen: free all day");
                self.print_on_center(locale.available_all_day, STATUS_FONT)?;
            }
            (false, Some(next)) => {
                #[cfg(feature = "defmt")]
                defmt::debug!("device screen: free until {}", next.start_time.as_str());
                let heading = compose(&[locale.available_until, next.start_time.as_str()]);
                self.print(&heading, 0, layout.status_y, STATUS_FONT, TextAlign::Center)?;
                self.print_upcoming(device, 0)?;
            }
            (true, _) => {
                #[cfg(feature = "defmt")]
                defmt::debug!("device screen: occupied");
                let padding = i32::from(layout.padding);
                self.print(locale.occupied, padding, layout.status_y, STATUS_FONT, TextAlign::Left)?;
                let shift = self.print_current_meeting(current)?;
                self.print_upcoming(device, shift)?;
            }
        }

        self.commit(true)
    }

    /// Room name on the left, clock on the right
    ///
    /// The room name is cut with an ellipsis so it never runs into the clock.
    fn print_header(&mut self, device: &DeviceState) -> Result<(), SurfaceError> {
        let padding = i32::from(self.profile.layout.padding);

        let time_width = self.surface.measure(&device.time, HEADER_FONT).width;
        let room_budget = self
            .usable_width()
            .saturating_sub(time_width)
            .saturating_sub(u32::from(self.profile.layout.padding));
        let room = truncate_to_width(&mut self.surface, &device.room_name, HEADER_FONT, room_budget);

        self.print(&room, padding, padding, HEADER_FONT, TextAlign::Left)?;
        self.print(&device.time, padding, padding, HEADER_FONT, TextAlign::Right)
    }

    /// Summary (up to two lines), time range and host of the current meeting
    ///
    /// Returns how far a two-line summary pushed the blocks below it down.
    fn print_current_meeting(&mut self, meeting: &MeetingData) -> Result<i32, SurfaceError> {
        let layout = self.profile.layout;
        let locale = self.profile.locale();
        let padding = i32::from(layout.padding);

        let width = self.usable_width();
        let summary = wrap_to_two_lines(&mut self.surface, &meeting.summary, SUMMARY_FONT, width);

        let mut y = layout.summary_y;
        for line in summary.lines() {
            self.print(line, padding, y, SUMMARY_FONT, TextAlign::Left)?;
            y += layout.summary_advance;
        }
        let shift = if summary.second().is_some() {
            layout.summary_advance
        } else {
            0
        };

        let range = time_range(meeting);
        self.print(&range, padding, layout.time_y + shift, SUMMARY_FONT, TextAlign::Left)?;

        let host = compose(&[locale.hosted_by, meeting.host.as_str()]);
        self.print(&host, padding, layout.host_y + shift, HOST_FONT, TextAlign::Left)?;
        Ok(shift)
    }

    /// Rule, up to `max_upcoming` entries and an overflow count
    ///
    /// Draws nothing when there are no upcoming meetings. The whole section
    /// moves down by `shift`.
    fn print_upcoming(&mut self, device: &DeviceState, shift: i32) -> Result<(), SurfaceError> {
        let total = device.upcoming().count();
        if total == 0 {
            return Ok(());
        }

        let layout = self.profile.layout;
        let padding = i32::from(layout.padding);
        let visible = usize::from(self.profile.max_upcoming).min(total);
        let width = self.usable_width();

        self.rule(layout.separator_y + shift)?;

        let mut y = layout.list_top + shift;
        for meeting in device.upcoming().take(visible) {
            let summary = truncate_to_width(&mut self.surface, &meeting.summary, ENTRY_FONT, width);
            self.print(&summary, padding, y, ENTRY_FONT, TextAlign::Left)?;

            let range = time_range(meeting);
            self.print(&range, padding, y + layout.list_time_offset, ENTRY_TIME_FONT, TextAlign::Left)?;

            y += layout.list_stride;
        }

        let remaining = total - visible;
        if remaining > 0 {
            let line = overflow_line(self.profile.locale(), remaining);

            self.rule(y)?;
            self.print(&line, padding, y + layout.overflow_offset, ENTRY_TIME_FONT, TextAlign::Left)?;
        }

        Ok(())
    }

    /// Surface width minus the padding on both sides
    fn usable_width(&self) -> u32 {
        self.surface
            .width()
            .saturating_sub(2 * u32::from(self.profile.layout.padding))
    }
}

fn time_range(meeting: &MeetingData) -> Line {
    compose(&[meeting.start_time.as_str(), " - ", meeting.end_time.as_str()])
}

/// "+N noun" with the noun form chosen by `remaining`
fn overflow_line(locale: &Locale, remaining: usize) -> Line {
    let mut line = compose(&[locale.overflow_prefix]);
    if push_count(&mut line, remaining) {
        push_bounded(&mut line, " ");
        push_bounded(&mut line, locale.overflow_noun.select(remaining));
    }
    line
}

/// Append `count` in decimal
fn push_count(line: &mut Line, count: usize) -> bool {
    let mut digits = [0u8; 20];
    let mut start = digits.len();
    let mut rest = count;
    loop {
        start -= 1;
        digits[start] = b'0' + (rest % 10) as u8;
        rest /= 10;
        if rest == 0 {
            break;
        }
    }
    digits[start..]
        .iter()
        .all(|&digit| line.push(char::from(digit)).is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DeviceProfile, Language};
    use crate::testing::{Op, RecordingSurface};

    fn composer() -> ScreenComposer<RecordingSurface> {
        ScreenComposer::new(RecordingSurface::new(1200, 825), DeviceProfile::inkplate_10().with_language(Language::English))
    }

    fn meeting(summary: &str, start: &str, end: &str) -> MeetingData {
        MeetingData::new(summary, start, end, "Bob")
    }

    fn with_upcoming(count: usize) -> DeviceState {
        let mut device = DeviceState::new("Aquarium", "08:30");
        for i in 0..count {
            device = device.with_next(meeting(&format!("Meeting {}", i), "10:00", "11:00"));
        }
        device
    }

    fn y_of(surface: &RecordingSurface, text: &str) -> i32 {
        match surface.text_op(text) {
            Some(Op::Text { y, .. }) => *y,
            other => panic!("{} not drawn: {:?}", text, other),
        }
    }

    #[test]
    fn test_available_all_day() {
        let mut c = composer();
        let device = DeviceState::new("Aquarium", "08:30")
            .with_current(MeetingData::undefined())
            .with_next(MeetingData::undefined());
        let outcome = c.show_device_screen(&device).unwrap();

        assert_eq!(outcome, CommitOutcome::Partial);
        assert_eq!(c.surface().texts(), vec!["Aquarium", "08:30", "Available all day"]);
        assert_eq!(c.surface().line_count(), 0);
    }

    #[test]
    fn test_available_until_next() {
        let mut c = composer();
        let device = DeviceState::new("Aquarium", "08:30").with_next(meeting("Standup", "09:00", "09:15"));
        c.show_device_screen(&device).unwrap();

        let texts = c.surface().texts();
        assert!(texts.contains(&"Available until 09:00"));
        assert!(texts.contains(&"Standup"));
        assert!(texts.contains(&"09:00 - 09:15"));
        assert!(!texts.contains(&"Occupied"));
        assert_eq!(c.surface().line_count(), 1);
    }

    #[test]
    fn test_occupied_without_upcoming() {
        let mut c = composer();
        let device = DeviceState::new("Aquarium", "09:30")
            .with_current(MeetingData::new("Team Sync", "09:00", "10:00", "Alice"));
        c.show_device_screen(&device).unwrap();

        assert_eq!(
            c.surface().texts(),
            vec!["Aquarium", "09:30", "Occupied", "Team Sync", "09:00 - 10:00", "Hosted by Alice"]
        );
        assert_eq!(c.surface().line_count(), 0);
    }

    #[test]
    fn test_long_summary_shifts_blocks_down() {
        let mut c = composer();
        // 1160px usable at 18px per char: 64 chars per line
        let summary = "Quarterly business review with the regional sales leadership team and partners";
        let device = DeviceState::new("Aquarium", "09:30")
            .with_current(MeetingData::new(summary, "09:00", "10:00", "Alice"));
        c.show_device_screen(&device).unwrap();

        let layout = DeviceProfile::inkplate_10().layout;
        let s = c.surface();
        let first = y_of(s, "Quarterly business review with the regional sales leadership");
        let second = y_of(s, "team and partners");
        assert_eq!(second - first, layout.summary_advance);

        let plain = {
            let mut c = composer();
            let device = DeviceState::new("Aquarium", "09:30")
                .with_current(MeetingData::new("Short", "09:00", "10:00", "Alice"));
            c.show_device_screen(&device).unwrap();
            (y_of(c.surface(), "09:00 - 10:00"), y_of(c.surface(), "Hosted by Alice"))
        };
        assert_eq!(y_of(s, "09:00 - 10:00"), plain.0 + layout.summary_advance);
        assert_eq!(y_of(s, "Hosted by Alice"), plain.1 + layout.summary_advance);
    }

    #[test]
    fn test_three_upcoming_no_overflow() {
        let mut c = composer();
        c.show_device_screen(&with_upcoming(3)).unwrap();

        let texts = c.surface().texts();
        assert!(texts.contains(&"Meeting 2"));
        assert!(!texts.iter().any(|t| t.starts_with('+')));
        assert_eq!(c.surface().line_count(), 1);
    }

    #[test]
    fn test_four_upcoming_singular_overflow() {
        let mut c = composer();
        c.show_device_screen(&with_upcoming(4)).unwrap();

        let texts = c.surface().texts();
        assert!(texts.contains(&"Meeting 2"));
        assert!(!texts.contains(&"Meeting 3"));
        assert!(texts.contains(&"+1 more meeting"));
        assert_eq!(c.surface().line_count(), 2);
    }

    #[test]
    fn test_six_upcoming_plural_overflow() {
        let mut c = composer();
        c.show_device_screen(&with_upcoming(6)).unwrap();
        assert!(c.surface().texts().contains(&"+3 more meetings"));
    }

    #[test]
    fn test_polish_overflow_forms() {
        for (count, expected) in [(4, "+1 spotkanie"), (6, "+3 spotkania"), (8, "+5 spotkań")] {
            let mut c = ScreenComposer::new(RecordingSurface::new(1200, 825), DeviceProfile::inkplate_10());
            c.show_device_screen(&with_upcoming(count)).unwrap();
            assert!(c.surface().texts().contains(&expected), "{} upcoming", count);
        }
    }

    #[test]
    fn test_two_line_summary_clears_separator() {
        let mut c = ScreenComposer::new(RecordingSurface::new(800, 600), DeviceProfile::inkplate_6());
        let summary = "Quarterly business review with the regional sales leadership team";
        let device = DeviceState::new("Aquarium", "09:30")
            .with_current(MeetingData::new(summary, "09:00", "10:00", "Alice"))
            .with_next(meeting("Retro", "11:00", "12:00"));
        c.show_device_screen(&device).unwrap();

        let s = c.surface();
        // The fixture's glyph box ends on the baseline, so the cursor y is
        // the bottom edge of the host line.
        let host_bottom = y_of(s, "Hosted by Alice");
        let rule_y = s
            .ops
            .iter()
            .find_map(|op| match op {
                Op::Line { y0, thickness, .. } => Some(*y0 - *thickness as i32 / 2),
                _ => None,
            })
            .unwrap();
        assert!(host_bottom < rule_y, "host ends at {}, rule at {}", host_bottom, rule_y);

        let layout = DeviceProfile::inkplate_6().layout;
        let retro_top = y_of(s, "Retro") - crate::testing::glyph_height(ENTRY_FONT) as i32;
        assert_eq!(retro_top, layout.list_top + layout.summary_advance);
    }

    #[test]
    fn test_overflow_count_digits() {
        let mut c = composer();
        c.show_device_screen(&with_upcoming(15)).unwrap();
        assert!(c.surface().texts().contains(&"+12 more meetings"));

        let mut line = Line::new();
        assert!(push_count(&mut line, 0));
        assert!(push_count(&mut line, 1234));
        assert_eq!(line.as_str(), "01234");
    }

    #[test]
    fn test_entries_at_fixed_stride() {
        let mut c = composer();
        c.show_device_screen(&with_upcoming(3)).unwrap();

        let layout = DeviceProfile::inkplate_10().layout;
        let s = c.surface();
        assert_eq!(y_of(s, "Meeting 1") - y_of(s, "Meeting 0"), layout.list_stride);
        assert_eq!(y_of(s, "Meeting 2") - y_of(s, "Meeting 1"), layout.list_stride);
    }

    #[test]
    fn test_long_room_name_truncated_before_clock() {
        let mut c = composer();
        let room = "The very long executive boardroom on the top floor of building C";
        let device = DeviceState::new(room, "08:30");
        c.show_device_screen(&device).unwrap();

        let texts = c.surface().texts();
        assert!(texts[0].ends_with("..."));
        // (1160 - 90 - 20) / 18 = 58 chars including the ellipsis
        assert_eq!(texts[0].chars().count(), 58);
        assert_eq!(texts[1], "08:30");
    }

    #[test]
    fn test_single_commit_per_screen() {
        let mut c = composer();
        c.show_device_screen(&with_upcoming(6)).unwrap();
        let s = c.surface();
        assert_eq!(s.count(&Op::CommitPartial) + s.count(&Op::CommitFull), 1);
        assert_eq!(s.ops.last(), Some(&Op::Clear));
    }
}
