//! Device profiles
//!
//! One composer serves every supported panel; what differs between boards
//! (geometry, bit depth, language) is captured here.

pub mod locale;
pub mod profile;

pub use locale::{Language, Locale, PluralForms};
pub use profile::{BitDepth, DeviceProfile, ScreenLayout};
