//! Ring carousel layout strategy.

use glam::Vec3;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::positioner::Positioner;
use super::transform::{AnimationParams, GroupTransform, ItemTransform};
use super::LayoutConfig;

/// Geometric constants for [`CarouselPositioner`].
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema,
)]
#[serde(default)]
pub struct CarouselParams {
    /// Ring radius in normalized scene units.
    pub radius: f32,
    /// Angular distance between adjacent items, in radians.
    pub angle_step: f32,
    /// How many items on either side of the active one a renderer would
    /// typically keep on screen. A hint only; the engine always computes
    /// transforms for the full collection.
    pub visible_window: usize,
}

impl Default for CarouselParams {
    fn default() -> Self {
        Self {
            radius: 1.2,
            angle_step: 0.35,
            visible_window: 8,
        }
    }
}

/// Ring arrangement around the vertical axis: the active item faces the
/// viewer at the origin, neighbors curve away along a circle and yaw to
/// stay tangent to it.
#[derive(Debug, Clone, Copy, Default)]
pub struct CarouselPositioner {
    params: CarouselParams,
}

impl CarouselPositioner {
    /// Registry name of this strategy.
    pub const NAME: &'static str = "carousel";

    /// Create with custom geometric constants.
    #[must_use]
    pub fn new(params: CarouselParams) -> Self {
        Self { params }
    }

    /// Geometric constants in use.
    #[must_use]
    pub fn params(&self) -> &CarouselParams {
        &self.params
    }

    /// Ring radius after folding in the viewport aspect hint, so wider
    /// viewports get a wider ring.
    fn effective_radius(&self, config: &LayoutConfig) -> f32 {
        let aspect = config
            .viewport()
            .map_or(1.0, |v| v.aspect.clamp(0.5, 2.0));
        self.params.radius * aspect
    }
}

impl Positioner for CarouselPositioner {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn item_transform(
        &self,
        global_index: usize,
        config: &LayoutConfig,
    ) -> ItemTransform {
        let offset = config.offset_of(global_index) as f32;
        let angle = offset * self.params.angle_step;
        let radius = self.effective_radius(config);

        // The circle passes through the origin at angle 0, so the active
        // item lands exactly on the identity transform.
        ItemTransform {
            position: Vec3::new(
                radius * angle.sin(),
                0.0,
                radius * (angle.cos() - 1.0),
            ),
            rotation: Vec3::new(0.0, -angle, 0.0),
            scale: 1.0,
        }
    }

    fn group_transform(&self, _config: &LayoutConfig) -> GroupTransform {
        GroupTransform::IDENTITY
    }

    fn animation_params(&self) -> AnimationParams {
        AnimationParams::GENTLE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::ViewportParams;

    #[test]
    fn test_active_item_is_identity() {
        let positioner = CarouselPositioner::default();
        for active in 0..5 {
            let config = LayoutConfig::new(active, 5);
            let t = positioner.item_transform(active, &config);
            assert_eq!(t, ItemTransform::IDENTITY);
        }
    }

    #[test]
    fn test_neighbors_recede_symmetrically() {
        let positioner = CarouselPositioner::default();
        let config = LayoutConfig::new(2, 5);

        let left = positioner.item_transform(1, &config);
        let right = positioner.item_transform(3, &config);

        assert!((left.position.x + right.position.x).abs() < 1e-6);
        assert!((left.position.z - right.position.z).abs() < 1e-6);
        assert!(right.position.z < 0.0);
        assert!((left.rotation.y + right.rotation.y).abs() < 1e-6);
    }

    #[test]
    fn test_viewport_aspect_widens_ring() {
        let positioner = CarouselPositioner::default();
        let narrow = LayoutConfig::new(0, 3)
            .with_viewport(ViewportParams { aspect: 1.0 });
        let wide = LayoutConfig::new(0, 3)
            .with_viewport(ViewportParams { aspect: 1.8 });

        let x_narrow = positioner.item_transform(1, &narrow).position.x;
        let x_wide = positioner.item_transform(1, &wide).position.x;
        assert!(x_wide > x_narrow);
    }

    #[test]
    fn test_pure_function() {
        let positioner = CarouselPositioner::default();
        let config = LayoutConfig::new(1, 4);
        assert_eq!(
            positioner.item_transform(3, &config),
            positioner.item_transform(3, &config)
        );
    }
}
