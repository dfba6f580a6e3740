//! Core trait for layout strategies.

use std::sync::Arc;

use super::transform::{AnimationParams, GroupTransform, ItemTransform};
use super::LayoutConfig;

/// Maps logical positions in the collection to physical 3D transforms.
///
/// Implementations must be stateless and pure: identical inputs always yield
/// identical outputs, with no observable side effects. Outputs must be
/// continuous in `global_index - active_index` (small changes in relative
/// offset produce small changes in transform) so the animation driver can
/// interpolate smoothly.
///
/// The driver clamps the active index before calling and never calls with an
/// empty collection, so implementations may assume
/// `config.active_index() < config.total_items()` and
/// `config.total_items() > 0`.
pub trait Positioner: Send + Sync {
    /// Strategy name used for registry lookup.
    fn name(&self) -> &'static str;

    /// Transform for the item at `global_index` under `config`.
    fn item_transform(
        &self,
        global_index: usize,
        config: &LayoutConfig,
    ) -> ItemTransform;

    /// Transform applied once to the whole collection, typically re-centering
    /// the arrangement so the active item sits at a canonical location.
    fn group_transform(&self, config: &LayoutConfig) -> GroupTransform;

    /// Spring coefficients giving this layout its feel. Constant per
    /// strategy.
    fn animation_params(&self) -> AnimationParams {
        AnimationParams::STANDARD
    }
}

/// Type alias for shared positioner references.
pub type SharedPositioner = Arc<dyn Positioner>;

/// Create a shared positioner from any Positioner implementation.
pub fn shared<P: Positioner + 'static>(positioner: P) -> SharedPositioner {
    Arc::new(positioner)
}
