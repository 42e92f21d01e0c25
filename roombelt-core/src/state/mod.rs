//! Room and meeting snapshot types
//!
//! Produced by the data-sync layer once per wake; the screen code only
//! reads them.

pub mod device;
pub mod meeting;

pub use device::{DeviceState, MAX_MEETINGS};
pub use meeting::{MeetingData, Text, MAX_TEXT_LEN};
