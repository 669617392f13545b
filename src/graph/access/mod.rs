//! Internal per-query traversal state.
//!
//! This module is intentionally `pub(crate)` so every algorithm shares the same
//! visited-flag and predecessor bookkeeping without exposing it as part of the
//! public API surface.

pub(crate) mod visited;

pub(crate) use visited::{Predecessors, VisitedFlags};
