//! Stacked-deck layout strategy.

use glam::Vec3;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::positioner::Positioner;
use super::transform::{AnimationParams, GroupTransform, ItemTransform};
use super::LayoutConfig;

/// Geometric constants for [`StackPositioner`], in normalized scene units.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema,
)]
#[serde(default)]
pub struct StackParams {
    /// Vertical distance between adjacent items.
    pub vertical_step: f32,
    /// Depth recession per step away from the active item.
    pub depth_step: f32,
    /// Lateral stagger per step, for visual separation.
    pub horizontal_fan: f32,
    /// X-axis tilt per step, in radians.
    pub tilt_factor: f32,
    /// Constant X-axis lean applied to the whole group, in radians.
    pub base_tilt: f32,
}

impl Default for StackParams {
    fn default() -> Self {
        Self {
            vertical_step: 0.15,
            depth_step: 0.08,
            horizontal_fan: 0.02,
            tilt_factor: 0.03,
            base_tilt: 0.1,
        }
    }
}

/// Deck-of-cards arrangement: the active item sits at the origin, neighbors
/// fan out above and below it and recede into depth on both sides.
///
/// Depth is symmetric on purpose: items before and after the active one
/// recede together along the same axis, keeping the deck silhouette readable
/// from a fixed camera rather than forming a depth-ordered queue.
#[derive(Debug, Clone, Copy, Default)]
pub struct StackPositioner {
    params: StackParams,
}

impl StackPositioner {
    /// Registry name of this strategy.
    pub const NAME: &'static str = "stack";

    /// Create with custom geometric constants.
    #[must_use]
    pub fn new(params: StackParams) -> Self {
        Self { params }
    }

    /// Geometric constants in use.
    #[must_use]
    pub fn params(&self) -> &StackParams {
        &self.params
    }
}

impl Positioner for StackPositioner {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn item_transform(
        &self,
        global_index: usize,
        config: &LayoutConfig,
    ) -> ItemTransform {
        let offset = config.offset_of(global_index) as f32;
        let p = &self.params;

        ItemTransform {
            position: Vec3::new(
                offset * p.horizontal_fan,
                offset * -p.vertical_step,
                -offset.abs() * p.depth_step,
            ),
            rotation: Vec3::new(offset * p.tilt_factor, 0.0, 0.0),
            scale: 1.0,
        }
    }

    fn group_transform(&self, config: &LayoutConfig) -> GroupTransform {
        let p = &self.params;
        GroupTransform {
            position: Vec3::new(
                0.0,
                config.active_index() as f32 * p.vertical_step,
                0.0,
            ),
            rotation: Vec3::new(p.base_tilt, 0.0, 0.0),
            scale: 1.0,
        }
    }

    fn animation_params(&self) -> AnimationParams {
        AnimationParams::STANDARD
    }
}
