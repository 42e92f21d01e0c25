//! embedded-graphics display surface for Roombelt
//!
//! This crate provides:
//! - `FrameSurface`, a [`DisplaySurface`](roombelt_core::DisplaySurface)
//!   that renders into any `embedded-graphics` draw target
//! - `EpdPanel` trait for the panel electronics that push a finished
//!   frame with a full or partial refresh
//! - `DEFAULT_FONTS`, the stock bitmap font for each semantic size
//!
//! # Architecture
//!
//! The screen composer in `roombelt-core` only sees the surface trait. The
//! surface owns the frame buffer (the draw target) and the panel driver;
//! drawing touches the frame buffer only, and nothing reaches the panel
//! until a commit.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod backend;
pub mod fonts;
pub mod surface;

// Re-export key types
pub use backend::{EpdPanel, PanelError};
pub use fonts::{FontTable, DEFAULT_FONTS};
pub use surface::FrameSurface;
