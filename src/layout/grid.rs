//! Flat grid layout strategy.

use glam::Vec3;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::positioner::Positioner;
use super::transform::{AnimationParams, GroupTransform, ItemTransform};
use super::LayoutConfig;

/// Geometric constants for [`GridPositioner`].
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema,
)]
#[serde(default)]
pub struct GridParams {
    /// Number of columns in the wall (rows grow downward from there).
    pub columns: usize,
    /// Horizontal distance between adjacent cells.
    pub spacing_x: f32,
    /// Vertical distance between adjacent rows.
    pub spacing_y: f32,
}

impl Default for GridParams {
    fn default() -> Self {
        Self {
            columns: 4,
            spacing_x: 0.5,
            spacing_y: 0.4,
        }
    }
}

/// Wall-of-items arrangement: a row-major grid shifted so the active cell
/// sits at the origin.
#[derive(Debug, Clone, Copy, Default)]
pub struct GridPositioner {
    params: GridParams,
}

impl GridPositioner {
    /// Registry name of this strategy.
    pub const NAME: &'static str = "grid";

    /// Create with custom geometric constants.
    #[must_use]
    pub fn new(params: GridParams) -> Self {
        Self { params }
    }

    /// Geometric constants in use.
    #[must_use]
    pub fn params(&self) -> &GridParams {
        &self.params
    }

    /// Row-major cell coordinates of a global index.
    fn cell(&self, global_index: usize) -> (i64, i64) {
        let columns = self.params.columns.max(1) as i64;
        let index = global_index as i64;
        (index % columns, index / columns)
    }
}

impl Positioner for GridPositioner {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn item_transform(
        &self,
        global_index: usize,
        config: &LayoutConfig,
    ) -> ItemTransform {
        let (col, row) = self.cell(global_index);
        let (active_col, active_row) = self.cell(config.active_index());

        ItemTransform {
            position: Vec3::new(
                (col - active_col) as f32 * self.params.spacing_x,
                (active_row - row) as f32 * self.params.spacing_y,
                0.0,
            ),
            rotation: Vec3::ZERO,
            scale: 1.0,
        }
    }

    fn group_transform(&self, _config: &LayoutConfig) -> GroupTransform {
        GroupTransform::IDENTITY
    }

    fn animation_params(&self) -> AnimationParams {
        AnimationParams::STIFF
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_item_is_identity() {
        let positioner = GridPositioner::default();
        for active in 0..12 {
            let config = LayoutConfig::new(active, 12);
            let t = positioner.item_transform(active, &config);
            assert_eq!(t, ItemTransform::IDENTITY);
        }
    }

    #[test]
    fn test_row_major_placement() {
        let positioner = GridPositioner::new(GridParams {
            columns: 3,
            spacing_x: 1.0,
            spacing_y: 1.0,
        });
        let config = LayoutConfig::new(0, 9);

        // Index 4 is row 1, column 1 relative to the active cell (0, 0).
        let t = positioner.item_transform(4, &config);
        assert_eq!(t.position.x, 1.0);
        assert_eq!(t.position.y, -1.0);
    }

    #[test]
    fn test_zero_columns_treated_as_one() {
        let positioner = GridPositioner::new(GridParams {
            columns: 0,
            spacing_x: 1.0,
            spacing_y: 1.0,
        });
        let config = LayoutConfig::new(0, 3);
        // Degenerate config collapses to a single column, not a panic.
        let t = positioner.item_transform(2, &config);
        assert_eq!(t.position.x, 0.0);
        assert_eq!(t.position.y, -2.0);
    }
}
