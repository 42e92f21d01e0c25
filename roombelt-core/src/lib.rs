//! Board-agnostic screen logic for Roombelt meeting-room displays
//!
//! This crate turns a snapshot of room state into draw calls against a
//! bistable (e-paper) display surface:
//!
//! - Font catalog and text measurement contract
//! - Greedy two-line word wrap and ellipsis truncation
//! - Per-screen layout (device status, message, error, connection code)
//! - Refresh policy choosing between partial and full panel refreshes
//! - Device profiles and locale tables replacing per-board variants
//!
//! Pixel output, panel electronics, storage, networking and sleep handling
//! live outside this crate behind the [`traits::DisplaySurface`] trait.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod layout;
pub mod refresh;
pub mod screen;
pub mod state;
pub mod traits;

#[cfg(test)]
pub(crate) mod testing;

pub use config::{BitDepth, DeviceProfile, Language, Locale};
pub use error::Error;
pub use layout::{BoundingBox, Font, FontCatalog, TextAlign, TextMeasurer, Wrapped};
pub use refresh::{CommitOutcome, RefreshMode, RefreshPolicy, RefreshState};
pub use screen::ScreenComposer;
pub use state::{DeviceState, MeetingData};
pub use traits::{DisplaySurface, SurfaceError};
