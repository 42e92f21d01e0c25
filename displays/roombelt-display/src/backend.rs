//! Panel backend trait
//!
//! Defines the interface to the refresh electronics of a bistable panel.

use roombelt_core::BitDepth;

/// Panel backend errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PanelError {
    /// Communication error with the panel controller
    Communication,
    /// Panel still busy with a previous refresh
    Busy,
    /// Panel not initialized
    NotInitialized,
}

/// Panel backend trait
///
/// Pushes a finished frame of type `F` to the panel. Implementations own
/// the waveform details; callers only choose between a full refresh, which
/// flashes the panel and removes ghosting, and a faster partial refresh.
pub trait EpdPanel<F: ?Sized> {
    /// Power up and configure the panel for `depth`
    fn begin(&mut self, depth: BitDepth) -> Result<(), PanelError>;

    /// Push `frame` with a full refresh
    fn refresh_full(&mut self, frame: &F) -> Result<(), PanelError>;

    /// Push `frame` with a partial refresh
    ///
    /// Only valid for 1-bit content on most controllers.
    fn refresh_partial(&mut self, frame: &F) -> Result<(), PanelError>;

    /// Check if the panel is ready to accept a refresh
    fn is_ready(&self) -> bool;
}
