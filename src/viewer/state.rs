//! Viewer state: the ordered item collection and active selection.

use crate::layout::LayoutConfig;

/// Opaque identifier of a content item. The engine never inspects content;
/// pairing ids back to real data is the data layer's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentId(pub u64);

/// One entry in the ordered collection: a content reference plus its stable
/// position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Item {
    /// Opaque content reference.
    pub content: ContentId,
    /// Stable, contiguous position within the collection snapshot.
    pub global_index: usize,
}

/// Whether the engine is mid-transition or at rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewerPhase {
    /// No pending transform changes.
    #[default]
    Idle,
    /// At least one applied transform has not yet settled.
    Transitioning,
}

/// Single source of truth for what should be displayed.
///
/// Owned exclusively by the viewer engine and mutated only through
/// [`ViewerCommand`](super::ViewerCommand)s, on the render-loop thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerState {
    items: Vec<Item>,
    active_index: usize,
    strategy_name: String,
}

impl ViewerState {
    /// Empty state with the given initial strategy name.
    #[must_use]
    pub fn new(strategy_name: &str) -> Self {
        Self {
            items: Vec::new(),
            active_index: 0,
            strategy_name: strategy_name.to_owned(),
        }
    }

    /// The ordered item collection.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Number of items.
    #[must_use]
    pub fn total_items(&self) -> usize {
        self.items.len()
    }

    /// Global index of the active item.
    #[must_use]
    pub fn active_index(&self) -> usize {
        self.active_index
    }

    /// Name of the active layout strategy.
    #[must_use]
    pub fn strategy_name(&self) -> &str {
        &self.strategy_name
    }

    /// Replace the collection, assigning fresh contiguous global indices.
    /// The active index is clamped into the new range.
    pub fn set_items(&mut self, contents: Vec<ContentId>) {
        self.items = contents
            .into_iter()
            .enumerate()
            .map(|(global_index, content)| Item {
                content,
                global_index,
            })
            .collect();
        self.active_index = self.clamp_index(self.active_index);
    }

    /// Set the active index, clamped into `[0, total - 1]`. Returns whether
    /// the index actually changed. Clamping is normal navigation behavior,
    /// not an error.
    pub fn set_active_index(&mut self, index: usize) -> bool {
        let clamped = self.clamp_index(index);
        let changed = clamped != self.active_index;
        self.active_index = clamped;
        changed
    }

    /// Step the active index by a signed delta, clamped into range. Returns
    /// whether the index actually changed.
    pub fn step_active(&mut self, delta: i64) -> bool {
        let stepped = self.active_index as i64 + delta;
        let floored = usize::try_from(stepped.max(0)).unwrap_or(0);
        self.set_active_index(floored)
    }

    /// Record the active strategy name. Returns whether it changed.
    pub fn set_strategy_name(&mut self, name: &str) -> bool {
        if self.strategy_name == name {
            return false;
        }
        name.clone_into(&mut self.strategy_name);
        true
    }

    /// Layout configuration snapshot for positioner calls.
    #[must_use]
    pub fn layout_config(&self) -> LayoutConfig {
        LayoutConfig::new(self.active_index, self.items.len())
    }

    fn clamp_index(&self, index: usize) -> usize {
        if self.items.is_empty() {
            0
        } else {
            index.min(self.items.len() - 1)
        }
    }
}
