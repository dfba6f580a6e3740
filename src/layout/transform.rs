//! Transform value objects produced by positioners.

use glam::Vec3;

/// Spatial transform for a single content item.
///
/// Pure output of a positioner: a deterministic function of
/// `(global_index, LayoutConfig)` with no hidden state or time dependency.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemTransform {
    /// World-space position.
    pub position: Vec3,
    /// Euler rotation in radians, applied in XYZ order.
    pub rotation: Vec3,
    /// Uniform scale factor.
    pub scale: f32,
}

impl ItemTransform {
    /// The canonical identity transform: origin, no rotation, unit scale.
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Vec3::ZERO,
        scale: 1.0,
    };

    /// Whether every component is finite (no NaN or infinity).
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.position.is_finite()
            && self.rotation.is_finite()
            && self.scale.is_finite()
    }
}

impl Default for ItemTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Spatial transform applied once to the whole collection, typically to
/// re-center the arrangement around the active item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroupTransform {
    /// World-space position offset for the whole group.
    pub position: Vec3,
    /// Euler rotation in radians, applied in XYZ order.
    pub rotation: Vec3,
    /// Uniform scale factor.
    pub scale: f32,
}

impl GroupTransform {
    /// The canonical identity transform: origin, no rotation, unit scale.
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Vec3::ZERO,
        scale: 1.0,
    };

    /// Whether every component is finite (no NaN or infinity).
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.position.is_finite()
            && self.rotation.is_finite()
            && self.scale.is_finite()
    }
}

impl Default for GroupTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<GroupTransform> for ItemTransform {
    fn from(t: GroupTransform) -> Self {
        Self {
            position: t.position,
            rotation: t.rotation,
            scale: t.scale,
        }
    }
}

impl From<ItemTransform> for GroupTransform {
    fn from(t: ItemTransform) -> Self {
        Self {
            position: t.position,
            rotation: t.rotation,
            scale: t.scale,
        }
    }
}

/// Spring-physics coefficients describing how quickly applied transforms
/// chase their targets.
///
/// Higher tension converges faster; higher friction damps oscillation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationParams {
    /// Pull strength toward the target.
    pub tension: f32,
    /// Velocity damping.
    pub friction: f32,
}

impl AnimationParams {
    /// The standard feel: near-critically damped, settles in about a second.
    pub const STANDARD: Self = Self {
        tension: 170.0,
        friction: 26.0,
    };

    /// A languid feel with a touch of overshoot.
    pub const GENTLE: Self = Self {
        tension: 120.0,
        friction: 14.0,
    };

    /// A snappy feel for dense layouts.
    pub const STIFF: Self = Self {
        tension: 210.0,
        friction: 20.0,
    };
}

impl Default for AnimationParams {
    fn default() -> Self {
        Self::STANDARD
    }
}
