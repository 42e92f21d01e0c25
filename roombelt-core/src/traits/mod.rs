//! Hardware abstraction traits
//!
//! The composer only ever talks to the display through these traits, so
//! the same layout code drives real panels and host-side test doubles.

pub mod surface;

pub use surface::{DisplaySurface, SurfaceError};
