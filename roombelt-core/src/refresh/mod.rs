//! Panel refresh policy
//!
//! Bistable panels keep faint residue of earlier content after partial
//! refreshes. The policy tracks whether anything was drawn since the last
//! commit and caps consecutive partial refreshes before forcing a full one.

pub mod policy;

pub use policy::{
    CommitOutcome, RefreshMode, RefreshPolicy, RefreshState, PARTIAL_REFRESH_LIMIT,
};
