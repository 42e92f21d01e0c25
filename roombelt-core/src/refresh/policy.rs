//! Refresh state machine

use crate::traits::{DisplaySurface, SurfaceError};

/// Consecutive partial refreshes allowed before a full one is forced
pub const PARTIAL_REFRESH_LIMIT: u8 = 10;

/// Panel refresh mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RefreshMode {
    /// Fast update of changed pixels only
    Partial,
    /// Slow update that flashes the whole panel and clears ghosting
    Full,
}

/// What a commit did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CommitOutcome {
    /// Nothing was drawn since the last commit
    Skipped,
    Partial,
    Full,
}

/// Refresh bookkeeping for one device session
///
/// Lives for a whole wake cycle; create a fresh one at process start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RefreshState {
    /// Something was drawn since the last commit
    pending: bool,
    /// Partial refreshes since the last full one
    partial_count: u8,
}

impl RefreshState {
    /// Clean state: nothing pending, no partial refreshes yet
    pub const fn new() -> Self {
        Self {
            pending: false,
            partial_count: 0,
        }
    }

    pub const fn has_pending_changes(&self) -> bool {
        self.pending
    }

    pub const fn partial_count(&self) -> u8 {
        self.partial_count
    }
}

/// Decides between partial and full refreshes at commit time
#[derive(Debug, Clone)]
pub struct RefreshPolicy {
    state: RefreshState,
    limit: u8,
}

impl Default for RefreshPolicy {
    fn default() -> Self {
        Self::new(PARTIAL_REFRESH_LIMIT)
    }
}

impl RefreshPolicy {
    /// Create a policy allowing `limit` consecutive partial refreshes
    pub const fn new(limit: u8) -> Self {
        Self::with_state(RefreshState::new(), limit)
    }

    /// Resume a policy from an existing session state
    pub const fn with_state(state: RefreshState, limit: u8) -> Self {
        Self { state, limit }
    }

    /// Current session state
    pub const fn state(&self) -> RefreshState {
        self.state
    }

    pub const fn limit(&self) -> u8 {
        self.limit
    }

    /// Check if there are changes waiting for a commit
    pub const fn is_dirty(&self) -> bool {
        self.state.pending
    }

    /// Record that something was drawn
    pub fn mark_dirty(&mut self) {
        self.state.pending = true;
    }

    /// Mode the next commit would use, or `None` if nothing is pending
    pub const fn decide(&self, prefer_partial: bool) -> Option<RefreshMode> {
        if !self.state.pending {
            None
        } else if prefer_partial && self.state.partial_count < self.limit {
            Some(RefreshMode::Partial)
        } else {
            Some(RefreshMode::Full)
        }
    }

    /// Push pending changes to the panel
    ///
    /// Does nothing when no changes are pending. Once the panel has
    /// refreshed, the state returns to clean and the frame buffer is
    /// cleared. If the panel fails the state is left untouched and the
    /// error returned; a failure clearing the frame buffer is returned
    /// after the state has been updated.
    pub fn commit<S>(
        &mut self,
        surface: &mut S,
        prefer_partial: bool,
    ) -> Result<CommitOutcome, SurfaceError>
    where
        S: DisplaySurface + ?Sized,
    {
        let outcome = match self.decide(prefer_partial) {
            None => {
                #[cfg(feature = "defmt")]
                defmt::trace!("commit skipped: no pending changes");
                return Ok(CommitOutcome::Skipped);
            }
            Some(RefreshMode::Partial) => {
                surface.commit_partial()?;
                self.state.partial_count += 1;
                CommitOutcome::Partial
            }
            Some(RefreshMode::Full) => {
                surface.commit_full()?;
                self.state.partial_count = 0;
                CommitOutcome::Full
            }
        };

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "refresh {} (partial count {})",
            outcome,
            self.state.partial_count
        );

        self.state.pending = false;
        surface.clear()?;
        Ok(outcome)
    }
}
