//! The engine's complete navigation vocabulary.
//!
//! Every viewer mutation — whether triggered by a click, key press, scroll,
//! or programmatic call — is represented as a `ViewerCommand`. Consumers
//! construct commands and pass them to
//! [`ViewerEngine::execute`](super::ViewerEngine::execute); the engine never
//! cares how a command was triggered.

use super::state::ContentId;

/// A discrete navigation operation, applied atomically to the viewer state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewerCommand {
    /// Set the active selection to a global index. Out-of-range indices are
    /// clamped, not rejected.
    SetActive {
        /// Requested global index.
        index: usize,
    },

    /// Step the active selection by a signed amount (e.g. ±1 for
    /// next/previous), clamped at both ends of the collection.
    Step {
        /// Signed step amount.
        delta: i64,
    },

    /// Select the layout strategy by name. Unknown names fall back to the
    /// registry's default strategy.
    SelectStrategy {
        /// Strategy name to resolve.
        name: String,
    },

    /// Replace the content collection. Global indices are reassigned
    /// contiguously and the active index is clamped into the new range.
    SetItems {
        /// Ordered, deduplicated content references.
        contents: Vec<ContentId>,
    },
}
