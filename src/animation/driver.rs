//! Animation driver: bridges discrete layout targets to continuously
//! varying applied transforms.
//!
//! On every tick the driver advances each tracked transform toward the
//! targets last computed from the active positioner. Targets change whenever
//! the active index, item set, or strategy changes; applied values only ever
//! move by spring integration, so those changes never cause a visual snap.

use super::spring::{Spring, SpringVec3};
use crate::layout::transform::{AnimationParams, GroupTransform, ItemTransform};
use crate::layout::{LayoutConfig, Positioner};
use crate::options::AnimationOptions;

/// Spring-animated state for one transform: the current applied value plus
/// the target it is chasing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimatedTransform {
    position: SpringVec3,
    rotation: SpringVec3,
    scale: Spring,
}

impl AnimatedTransform {
    /// State at rest on `transform` (applied equals target).
    #[must_use]
    pub fn at(transform: ItemTransform) -> Self {
        Self {
            position: SpringVec3::at(transform.position),
            rotation: SpringVec3::at(transform.rotation),
            scale: Spring::at(transform.scale),
        }
    }

    /// Current applied transform (what the renderer should draw).
    #[must_use]
    pub fn applied(&self) -> ItemTransform {
        ItemTransform {
            position: self.position.value(),
            rotation: self.rotation.value(),
            scale: self.scale.value(),
        }
    }

    /// Current target transform.
    #[must_use]
    pub fn target(&self) -> ItemTransform {
        ItemTransform {
            position: self.position.target(),
            rotation: self.rotation.target(),
            scale: self.scale.target(),
        }
    }

    /// Redirect toward a new target, preserving velocities.
    pub fn set_target(&mut self, transform: ItemTransform) {
        self.position.set_target(transform.position);
        self.rotation.set_target(transform.rotation);
        self.scale.set_target(transform.scale);
    }

    /// Jump to the target and stop all motion.
    pub fn snap_to_target(&mut self) {
        self.position.snap();
        self.rotation.snap();
        self.scale.snap();
    }

    /// Advance one integration step.
    pub fn step(&mut self, params: AnimationParams, dt: f32) {
        self.position.step(params, dt);
        self.rotation.step(params, dt);
        self.scale.step(params, dt);
    }

    /// Whether applied value and velocity have converged to the target.
    #[must_use]
    pub fn is_settled(&self, epsilon: f32) -> bool {
        self.position.is_settled(epsilon)
            && self.rotation.is_settled(epsilon)
            && self.scale.is_settled(epsilon)
    }
}

/// Per-tick output handed to the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameTransforms {
    /// Transform applied once to the whole collection.
    pub group: GroupTransform,
    /// Applied transform per item, indexed by global index.
    pub items: Vec<ItemTransform>,
}

/// Owns the animated state for every tracked item plus the group, and
/// advances it toward positioner targets each tick.
#[derive(Debug, Clone)]
pub struct AnimationDriver {
    items: Vec<AnimatedTransform>,
    group: AnimatedTransform,
    params: AnimationParams,
    options: AnimationOptions,
    settled: bool,
}

impl AnimationDriver {
    /// Empty driver with default tuning; settled until the first retarget.
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(AnimationOptions::default())
    }

    /// Empty driver with the given spring tuning.
    #[must_use]
    pub fn with_options(options: AnimationOptions) -> Self {
        Self {
            items: Vec::new(),
            group: AnimatedTransform::at(GroupTransform::IDENTITY.into()),
            params: AnimationParams::STANDARD,
            options,
            settled: true,
        }
    }

    /// Number of tracked item transforms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether no items are tracked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether every tracked transform has converged to its target.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.settled
    }

    /// Drop all tracked state (collection became empty).
    pub fn clear(&mut self) {
        self.items.clear();
        self.group = AnimatedTransform::at(GroupTransform::IDENTITY.into());
        self.settled = true;
    }

    /// Recompute item and group targets from `positioner` for `config`.
    ///
    /// Existing entries keep their applied values and velocities (mid-flight
    /// re-targeting stays continuous). When the collection grows, new
    /// entries start at rest on their targets rather than flying in from
    /// the origin; when it shrinks, trailing entries are discarded.
    ///
    /// A non-finite target is a positioner defect: it is rejected with a
    /// logged diagnostic and the previous target held, so NaN never reaches
    /// applied state.
    pub fn retarget(
        &mut self,
        positioner: &dyn Positioner,
        config: &LayoutConfig,
    ) {
        if config.is_empty() {
            self.clear();
            return;
        }

        self.params = self.options.apply(positioner.animation_params());

        let group_target = positioner.group_transform(config);
        if group_target.is_finite() {
            self.group.set_target(group_target.into());
        } else {
            log::warn!(
                "positioner {:?} produced a non-finite group transform; holding previous target",
                positioner.name()
            );
        }

        let total = config.total_items();
        self.items.truncate(total);
        for index in 0..total {
            let target = positioner.item_transform(index, config);
            if !target.is_finite() {
                log::warn!(
                    "positioner {:?} produced a non-finite transform for item {index}; holding previous target",
                    positioner.name()
                );
                if index >= self.items.len() {
                    self.items.push(AnimatedTransform::at(
                        ItemTransform::IDENTITY,
                    ));
                }
                continue;
            }
            if let Some(item) = self.items.get_mut(index) {
                item.set_target(target);
            } else {
                self.items.push(AnimatedTransform::at(target));
            }
        }

        self.settled = self.all_settled();
    }

    /// Advance every unsettled transform by `dt` seconds of spring
    /// integration. Returns whether everything is now settled.
    ///
    /// `dt` is clamped to the configured maximum step. Settled entries are
    /// skipped until the next retarget.
    pub fn tick(&mut self, dt: f32) -> bool {
        if self.settled {
            return true;
        }
        let dt = dt.clamp(0.0, self.options.max_step);
        let epsilon = self.options.settle_epsilon;

        if !self.group.is_settled(epsilon) {
            self.group.step(self.params, dt);
        }
        for item in &mut self.items {
            if !item.is_settled(epsilon) {
                item.step(self.params, dt);
            }
        }

        if self.all_settled() {
            // Kill sub-epsilon residue so Idle frames are bit-stable.
            self.snap_to_targets();
        }
        self.settled
    }

    /// Applied transforms for the current tick.
    #[must_use]
    pub fn frame(&self) -> FrameTransforms {
        FrameTransforms {
            group: self.group.applied().into(),
            items: self.items.iter().map(AnimatedTransform::applied).collect(),
        }
    }

    /// Jump every transform to its target and stop all motion.
    pub fn snap_to_targets(&mut self) {
        self.group.snap_to_target();
        for item in &mut self.items {
            item.snap_to_target();
        }
        self.settled = true;
    }

    fn all_settled(&self) -> bool {
        let epsilon = self.options.settle_epsilon;
        self.group.is_settled(epsilon)
            && self.items.iter().all(|item| item.is_settled(epsilon))
    }
}

impl Default for AnimationDriver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{StackParams, StackPositioner};

    const DT: f32 = 1.0 / 60.0;

    fn settle(driver: &mut AnimationDriver, max_ticks: usize) -> usize {
        let mut ticks = 0;
        while !driver.tick(DT) {
            ticks += 1;
            assert!(
                ticks < max_ticks,
                "did not settle within {max_ticks} ticks"
            );
        }
        ticks
    }

    #[test]
    fn test_empty_config_clears_and_stays_settled() {
        let positioner = StackPositioner::default();
        let mut driver = AnimationDriver::new();
        driver.retarget(&positioner, &LayoutConfig::new(0, 3));
        assert_eq!(driver.len(), 3);

        driver.retarget(&positioner, &LayoutConfig::new(0, 0));
        assert!(driver.is_empty());
        assert!(driver.is_settled());
        assert!(driver.tick(DT));
    }

    #[test]
    fn test_first_retarget_starts_at_rest() {
        let positioner = StackPositioner::default();
        let mut driver = AnimationDriver::new();
        driver.retarget(&positioner, &LayoutConfig::new(2, 5));

        // Fresh entries snap to their targets: no fly-in from the origin.
        assert!(driver.is_settled());
        let frame = driver.frame();
        assert_eq!(frame.items.len(), 5);
        assert_eq!(frame.items[2], ItemTransform::IDENTITY);
    }

    #[test]
    fn test_active_change_transitions_then_settles() {
        let positioner = StackPositioner::default();
        let params = StackParams::default();
        let mut driver = AnimationDriver::new();
        driver.retarget(&positioner, &LayoutConfig::new(0, 5));

        driver.retarget(&positioner, &LayoutConfig::new(2, 5));
        assert!(!driver.is_settled());

        let _ticks = settle(&mut driver, 600);
        let frame = driver.frame();
        assert_eq!(frame.items[2], ItemTransform::IDENTITY);
        assert_eq!(frame.items[3].position.y, -params.vertical_step);
        assert_eq!(frame.group.position.y, 2.0 * params.vertical_step);
    }

    #[test]
    fn test_applied_approaches_target_monotonically() {
        let positioner = StackPositioner::default();
        let mut driver = AnimationDriver::new();
        driver.retarget(&positioner, &LayoutConfig::new(0, 3));
        driver.retarget(&positioner, &LayoutConfig::new(2, 3));

        let target = positioner
            .item_transform(0, &LayoutConfig::new(2, 3))
            .position;

        let mut prev = (driver.frame().items[0].position - target).length();
        for _ in 0..600 {
            if driver.tick(DT) {
                break;
            }
            let distance =
                (driver.frame().items[0].position - target).length();
            assert!(distance <= prev + 1e-5, "diverged: {distance} > {prev}");
            prev = distance;
        }
        assert!(driver.is_settled());
    }

    #[test]
    fn test_retarget_mid_flight_keeps_applied_continuous() {
        let positioner = StackPositioner::default();
        let mut driver = AnimationDriver::new();
        driver.retarget(&positioner, &LayoutConfig::new(0, 5));
        driver.retarget(&positioner, &LayoutConfig::new(4, 5));

        for _ in 0..10 {
            let _ = driver.tick(DT);
        }
        let before = driver.frame();

        // Supersede the transition before it completes.
        driver.retarget(&positioner, &LayoutConfig::new(1, 5));
        let after = driver.frame();
        assert_eq!(before, after);
    }

    #[test]
    fn test_shrink_truncates_grow_snaps() {
        let positioner = StackPositioner::default();
        let mut driver = AnimationDriver::new();
        driver.retarget(&positioner, &LayoutConfig::new(0, 5));

        driver.retarget(&positioner, &LayoutConfig::new(0, 2));
        assert_eq!(driver.len(), 2);

        driver.retarget(&positioner, &LayoutConfig::new(0, 6));
        assert_eq!(driver.len(), 6);
        // New entries sit on their targets immediately.
        let frame = driver.frame();
        let expected = positioner
            .item_transform(5, &LayoutConfig::new(0, 6));
        assert_eq!(frame.items[5], expected);
    }

    #[test]
    fn test_non_finite_target_is_rejected() {
        struct BrokenPositioner;

        impl Positioner for BrokenPositioner {
            fn name(&self) -> &'static str {
                "broken"
            }

            fn item_transform(
                &self,
                global_index: usize,
                config: &LayoutConfig,
            ) -> ItemTransform {
                let mut t = StackPositioner::default()
                    .item_transform(global_index, config);
                if global_index == 1 {
                    t.position.y = f32::NAN;
                }
                t
            }

            fn group_transform(
                &self,
                _config: &LayoutConfig,
            ) -> GroupTransform {
                GroupTransform::IDENTITY
            }
        }

        let mut driver = AnimationDriver::new();
        driver.retarget(&BrokenPositioner, &LayoutConfig::new(0, 3));

        let _ = settle(&mut driver, 600);
        let frame = driver.frame();
        for item in &frame.items {
            assert!(item.is_finite());
        }
        // The rejected entry held its last good target (identity for a
        // fresh entry).
        assert_eq!(frame.items[1], ItemTransform::IDENTITY);
    }

    #[test]
    fn test_tension_override_changes_feel() {
        let options = AnimationOptions {
            tension: Some(1000.0),
            friction: Some(80.0),
            ..AnimationOptions::default()
        };

        let positioner = StackPositioner::default();
        let mut stiff = AnimationDriver::with_options(options);
        let mut standard = AnimationDriver::new();
        for driver in [&mut stiff, &mut standard] {
            driver.retarget(&positioner, &LayoutConfig::new(0, 3));
            driver.retarget(&positioner, &LayoutConfig::new(2, 3));
        }

        let stiff_ticks = settle(&mut stiff, 600);
        let standard_ticks = settle(&mut standard, 600);
        assert!(stiff_ticks < standard_ticks);
    }
}
