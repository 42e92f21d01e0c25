//! Error value shown on the error screen

use core::fmt;

use crate::state::{meeting::text, Text};

/// A failure reported by a collaborator (storage, config, sync)
///
/// Carries only a human-readable message; the screen composer shows it
/// with [`ScreenComposer::show_error_screen`](crate::ScreenComposer::show_error_screen).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Error {
    pub message: Text,
}

impl Error {
    pub fn new(message: &str) -> Self {
        Self {
            message: text(message),
        }
    }
}

impl From<&str> for Error {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
