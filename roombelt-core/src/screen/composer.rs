//! Screen composer and the fixed-layout screens

use crate::config::DeviceProfile;
use crate::error::Error;
use crate::layout::{Font, TextAlign, TextMeasurer};
use crate::refresh::{CommitOutcome, RefreshPolicy};
use crate::state::DeviceState;
use crate::traits::{DisplaySurface, SurfaceError};

use super::compose;

/// Vertical offsets of the connection-code screen lines from the center
const CONNECTION_TITLE_DY: i32 = -110;
const CONNECTION_CODE_DY: i32 = -20;
const CONNECTION_HINT_DY: [i32; 2] = [70, 110];

/// Lays out and draws screens for one device session
///
/// Owns the surface and the session's [`RefreshPolicy`] for the length of a
/// wake cycle. Every `show_*` call draws one screen and commits once.
pub struct ScreenComposer<S> {
    pub(super) surface: S,
    pub(super) profile: DeviceProfile,
    pub(super) refresh: RefreshPolicy,
}

impl<S: DisplaySurface> ScreenComposer<S> {
    /// Create a composer with a fresh refresh policy for `profile`
    pub fn new(surface: S, profile: DeviceProfile) -> Self {
        let refresh = profile.refresh_policy();
        Self::with_refresh(surface, profile, refresh)
    }

    /// Create a composer continuing an existing refresh session
    pub fn with_refresh(surface: S, profile: DeviceProfile, refresh: RefreshPolicy) -> Self {
        Self {
            surface,
            profile,
            refresh,
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn profile(&self) -> &DeviceProfile {
        &self.profile
    }

    pub fn refresh(&self) -> &RefreshPolicy {
        &self.refresh
    }

    /// Release the surface and refresh session without committing
    pub fn into_parts(self) -> (S, RefreshPolicy) {
        (self.surface, self.refresh)
    }

    /// Commit anything still pending with a full refresh and release the
    /// surface and refresh session
    pub fn finish(mut self) -> Result<(S, RefreshPolicy), SurfaceError> {
        self.commit(false)?;
        Ok(self.into_parts())
    }

    /// Show an unrecoverable error, always with a full refresh
    pub fn show_error_screen(&mut self, error: &Error) -> Result<CommitOutcome, SurfaceError> {
        #[cfg(feature = "defmt")]
        defmt::warn!("error screen: {}", error.message.as_str());

        let locale = self.profile.locale();
        let text = compose(&[locale.unhandled_error, error.message.as_str()]);
        self.print_on_center(&text, Font::largest())?;
        self.commit(false)
    }

    /// Show one message, or a primary and secondary message centered
    /// together as a block
    pub fn show_message_screen(
        &mut self,
        message: &str,
        secondary: Option<&str>,
        prefer_partial: bool,
    ) -> Result<CommitOutcome, SurfaceError> {
        let Some(secondary) = secondary else {
            self.print_on_center(message, Font::ExtraLarge)?;
            return self.commit(prefer_partial);
        };

        let primary_font = Font::ExtraLarge;
        let secondary_font = Font::Large;
        let margin = self.profile.layout.message_margin;

        let primary = self.surface.measure(message, primary_font);
        let second = self.surface.measure(secondary, secondary_font);

        let total_height = primary.height as i32 + second.height as i32 + margin;
        let top = self.surface.height() as i32 / 2 - total_height / 2;

        self.print(message, 0, top, primary_font, TextAlign::Center)?;
        self.print(
            secondary,
            0,
            top + primary.height as i32 + margin,
            secondary_font,
            TextAlign::Center,
        )?;
        self.commit(prefer_partial)
    }

    /// Show the pairing instructions with the device's connection code
    pub fn show_connection_code_screen(
        &mut self,
        device: &DeviceState,
    ) -> Result<CommitOutcome, SurfaceError> {
        let locale = self.profile.locale();
        let center = self.surface.height() as i32 / 2;

        self.print(
            locale.connection_code_title,
            0,
            center + CONNECTION_TITLE_DY,
            Font::ExtraLarge,
            TextAlign::Center,
        )?;
        self.print(
            &device.connection_code,
            0,
            center + CONNECTION_CODE_DY,
            Font::Display,
            TextAlign::Center,
        )?;
        for (hint, dy) in locale.connection_code_hint.iter().zip(CONNECTION_HINT_DY) {
            self.print(hint, 0, center + dy, Font::Large, TextAlign::Center)?;
        }
        self.commit(false)
    }

    /// Draw `text` with its visual top edge at `y`
    ///
    /// `x` is the inset from the aligned edge and is ignored when centering.
    pub fn print(
        &mut self,
        text: &str,
        x: i32,
        y: i32,
        font: Font,
        align: TextAlign,
    ) -> Result<(), SurfaceError> {
        let bounds = self.surface.measure(text, font);
        let origin_x = align.origin_x(x, self.surface.width(), &bounds);

        self.surface.set_cursor(origin_x, y - bounds.y);
        self.surface.draw_text(text)?;
        self.refresh.mark_dirty();
        Ok(())
    }

    /// Draw `text` centered on both axes
    pub fn print_on_center(&mut self, text: &str, font: Font) -> Result<(), SurfaceError> {
        let bounds = self.surface.measure(text, font);

        self.surface.set_cursor(
            bounds.centered_x(self.surface.width() as i32 / 2),
            bounds.centered_y(self.surface.height() as i32 / 2),
        );
        self.surface.draw_text(text)?;
        self.refresh.mark_dirty();
        Ok(())
    }

    /// Draw a full-width horizontal rule
    pub(super) fn rule(&mut self, y: i32) -> Result<(), SurfaceError> {
        let width = self.surface.width() as i32;
        let thickness = self.profile.layout.rule_thickness;
        self.surface.draw_line(0, y, width, y, thickness)?;
        self.refresh.mark_dirty();
        Ok(())
    }

    pub(super) fn commit(&mut self, prefer_partial: bool) -> Result<CommitOutcome, SurfaceError> {
        self.refresh.commit(&mut self.surface, prefer_partial)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{glyph_height, Op, RecordingSurface};

    fn composer() -> ScreenComposer<RecordingSurface> {
        ScreenComposer::new(RecordingSurface::new(800, 600), DeviceProfile::inkplate_6())
    }

    #[test]
    fn test_error_screen_forces_full() {
        let mut c = composer();
        let outcome = c.show_error_screen(&Error::new("config missing")).unwrap();

        assert_eq!(outcome, CommitOutcome::Full);
        assert_eq!(c.surface().texts(), vec!["Unhandled error: config missing"]);
        match c.surface().text_op("Unhandled error: config missing") {
            Some(Op::Text { font, .. }) => assert_eq!(*font, Font::Display),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_single_message_centered() {
        let mut c = composer();
        c.show_message_screen("Hello", None, true).unwrap();

        // 5 chars * 18px = 90 wide, 27 tall, box top at -27
        let expected = Op::Text {
            x: 400 - 45,
            y: 300 - 13 + 27,
            font: Font::ExtraLarge,
            text: "Hello".into(),
        };
        assert_eq!(c.surface().ops[0], expected);
        assert_eq!(c.surface().ops[1], Op::CommitPartial);
    }

    #[test]
    fn test_two_messages_centered_as_block() {
        let mut c = composer();
        c.show_message_screen("Connecting", Some("Please wait"), false)
            .unwrap();

        let primary_h = glyph_height(Font::ExtraLarge) as i32;
        let secondary_h = glyph_height(Font::Large) as i32;
        let total = primary_h + secondary_h + 20;
        let top = 300 - total / 2;

        let (py, sy) = match (c.surface().text_op("Connecting"), c.surface().text_op("Please wait")) {
            (Some(Op::Text { y: py, .. }), Some(Op::Text { y: sy, .. })) => (*py, *sy),
            other => panic!("unexpected {:?}", other),
        };
        // Cursor sits on the baseline, one glyph height below the top.
        assert_eq!(py, top + primary_h);
        assert_eq!(sy, top + primary_h + 20 + secondary_h);
        assert!(c.surface().ops.contains(&Op::CommitFull));
    }

    #[test]
    fn test_connection_code_screen() {
        let mut c = composer();
        let device = DeviceState::new("Aquarium", "10:00").with_connection_code("48213");
        let outcome = c.show_connection_code_screen(&device).unwrap();

        assert_eq!(outcome, CommitOutcome::Full);
        assert_eq!(
            c.surface().texts(),
            vec![
                "Connection Code",
                "48213",
                "Log in to app.roombelt.com",
                "and use the connection code there.",
            ]
        );
    }

    #[test]
    fn test_print_alignment() {
        let mut c = composer();
        c.print("abc", 10, 100, Font::Medium, TextAlign::Right).unwrap();
        c.print("abc", 10, 100, Font::Medium, TextAlign::Left).unwrap();

        assert_eq!(
            c.surface().ops[0],
            Op::Text { x: 800 - 10 - 30, y: 115, font: Font::Medium, text: "abc".into() }
        );
        assert_eq!(
            c.surface().ops[1],
            Op::Text { x: 10, y: 115, font: Font::Medium, text: "abc".into() }
        );
        assert!(c.refresh().is_dirty());
    }

    #[test]
    fn test_finish_commits_pending() {
        let mut c = composer();
        c.print("x", 0, 0, Font::Small, TextAlign::Left).unwrap();
        let (surface, refresh) = c.finish().unwrap();

        assert_eq!(surface.count(&Op::CommitFull), 1);
        assert!(!refresh.is_dirty());
    }

    #[test]
    fn test_finish_when_clean_is_noop() {
        let (surface, _) = composer().finish().unwrap();
        assert!(surface.ops.is_empty());
    }

    #[test]
    fn test_refresh_session_carries_over() {
        let mut c = composer();
        for _ in 0..10 {
            c.show_message_screen("tick", None, true).unwrap();
        }
        let (surface, refresh) = c.into_parts();
        assert_eq!(refresh.state().partial_count(), 10);

        let mut c = ScreenComposer::with_refresh(surface, DeviceProfile::inkplate_6(), refresh);
        assert_eq!(
            c.show_message_screen("tick", None, true).unwrap(),
            CommitOutcome::Full
        );
    }
}
