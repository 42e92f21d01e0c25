//! Screen composition
//!
//! One entry point per screen. Each lays out its text through the layout
//! module, draws on the surface and ends with exactly one commit.

mod composer;
mod device;

pub use composer::ScreenComposer;

use crate::layout::{push_bounded, Line};

/// Concatenate `parts` into a line, cutting at capacity
fn compose(parts: &[&str]) -> Line {
    let mut line = Line::new();
    for part in parts {
        if !push_bounded(&mut line, part) {
            break;
        }
    }
    line
}
