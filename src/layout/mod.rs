//! Layout configuration and the pluggable positioner strategies.
//!
//! A [`Positioner`] is a stateless, pure geometric mapping from logical
//! position in the collection to a physical 3D transform. Strategies are
//! resolved by name through the [`PositionerRegistry`]; the animation driver
//! interpolates between the targets they produce.

mod carousel;
mod grid;
mod positioner;
mod registry;
mod stack;
pub mod transform;

pub use carousel::{CarouselParams, CarouselPositioner};
pub use grid::{GridParams, GridPositioner};
pub use positioner::{shared, Positioner, SharedPositioner};
pub use registry::PositionerRegistry;
pub use stack::{StackParams, StackPositioner};
pub use transform::{AnimationParams, GroupTransform, ItemTransform};

/// Optional viewport hints a strategy may fold into its geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportParams {
    /// Width / height ratio of the viewport.
    pub aspect: f32,
}

/// Layout input shared by every positioner call.
///
/// Invariant: `active_index < total_items` whenever `total_items > 0`;
/// the constructor clamps so the invariant always holds. When
/// `total_items == 0` no transforms are requested.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    active_index: usize,
    total_items: usize,
    viewport: Option<ViewportParams>,
}

impl LayoutConfig {
    /// Create a config, clamping `active_index` into `[0, total_items - 1]`.
    #[must_use]
    pub fn new(active_index: usize, total_items: usize) -> Self {
        let active_index = if total_items == 0 {
            0
        } else {
            active_index.min(total_items - 1)
        };
        Self {
            active_index,
            total_items,
            viewport: None,
        }
    }

    /// Attach viewport hints.
    #[must_use]
    pub fn with_viewport(mut self, viewport: ViewportParams) -> Self {
        self.viewport = Some(viewport);
        self
    }

    /// Global index of the active item.
    #[must_use]
    pub fn active_index(&self) -> usize {
        self.active_index
    }

    /// Number of items in the collection snapshot.
    #[must_use]
    pub fn total_items(&self) -> usize {
        self.total_items
    }

    /// Viewport hints, if the caller supplied any.
    #[must_use]
    pub fn viewport(&self) -> Option<ViewportParams> {
        self.viewport
    }

    /// Whether the collection is empty (no transforms should be requested).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total_items == 0
    }

    /// Signed distance of `global_index` from the active item.
    #[must_use]
    pub fn offset_of(&self, global_index: usize) -> i64 {
        global_index as i64 - self.active_index as i64
    }
}
