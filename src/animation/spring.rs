//! Spring interpolation primitives.
//!
//! A spring chases its target under tension (pull toward target) and
//! friction (velocity damping), integrated with semi-implicit Euler. Unlike
//! duration-based easing, a spring has no fixed end time: re-targeting
//! mid-flight keeps the current velocity, so motion stays continuous.

use glam::Vec3;

use crate::layout::AnimationParams;

/// Default threshold below which distance-to-target and velocity count as
/// settled.
pub const SETTLE_EPSILON: f32 = 1e-3;

/// Scalar spring state chasing a target value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    value: f32,
    velocity: f32,
    target: f32,
}

impl Spring {
    /// Spring at rest on `value` (target equals value, zero velocity).
    #[must_use]
    pub fn at(value: f32) -> Self {
        Self {
            value,
            velocity: 0.0,
            target: value,
        }
    }

    /// Current applied value.
    #[must_use]
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Current velocity.
    #[must_use]
    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    /// Current target value.
    #[must_use]
    pub fn target(&self) -> f32 {
        self.target
    }

    /// Redirect toward a new target, preserving velocity so mid-flight
    /// re-targeting never snaps.
    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    /// Jump to the target and stop.
    pub fn snap(&mut self) {
        self.value = self.target;
        self.velocity = 0.0;
    }

    /// Advance one integration step of `dt` seconds.
    ///
    /// Callers are expected to clamp `dt`; a very large step can make the
    /// integration diverge.
    pub fn step(&mut self, params: AnimationParams, dt: f32) {
        let accel = params.tension * (self.target - self.value)
            - params.friction * self.velocity;
        self.velocity += accel * dt;
        self.value += self.velocity * dt;
    }

    /// Whether the spring has converged: value within `epsilon` of the
    /// target and velocity below `epsilon`.
    #[must_use]
    pub fn is_settled(&self, epsilon: f32) -> bool {
        (self.target - self.value).abs() <= epsilon
            && self.velocity.abs() <= epsilon
    }
}

/// Three-component spring state for positions and Euler rotations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringVec3 {
    value: Vec3,
    velocity: Vec3,
    target: Vec3,
}

impl SpringVec3 {
    /// Spring at rest on `value`.
    #[must_use]
    pub fn at(value: Vec3) -> Self {
        Self {
            value,
            velocity: Vec3::ZERO,
            target: value,
        }
    }

    /// Current applied value.
    #[must_use]
    pub fn value(&self) -> Vec3 {
        self.value
    }

    /// Current velocity.
    #[must_use]
    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    /// Current target value.
    #[must_use]
    pub fn target(&self) -> Vec3 {
        self.target
    }

    /// Redirect toward a new target, preserving velocity.
    pub fn set_target(&mut self, target: Vec3) {
        self.target = target;
    }

    /// Jump to the target and stop.
    pub fn snap(&mut self) {
        self.value = self.target;
        self.velocity = Vec3::ZERO;
    }

    /// Advance one integration step of `dt` seconds, component-wise.
    pub fn step(&mut self, params: AnimationParams, dt: f32) {
        let accel = (self.target - self.value) * params.tension
            - self.velocity * params.friction;
        self.velocity += accel * dt;
        self.value += self.velocity * dt;
    }

    /// Whether all components have converged to within `epsilon`.
    #[must_use]
    pub fn is_settled(&self, epsilon: f32) -> bool {
        (self.target - self.value).abs().max_element() <= epsilon
            && self.velocity.abs().max_element() <= epsilon
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    #[test]
    fn test_spring_at_rest_is_settled() {
        let spring = Spring::at(3.0);
        assert_eq!(spring.value(), 3.0);
        assert_eq!(spring.target(), 3.0);
        assert!(spring.is_settled(SETTLE_EPSILON));
    }

    #[test]
    fn test_spring_converges_monotonically() {
        let mut spring = Spring::at(0.0);
        spring.set_target(1.0);

        let mut prev_distance = (spring.target() - spring.value()).abs();
        let mut ticks = 0;
        while !spring.is_settled(SETTLE_EPSILON) {
            spring.step(AnimationParams::STANDARD, DT);
            let distance = (spring.target() - spring.value()).abs();
            assert!(
                distance <= prev_distance + 1e-6,
                "diverged at tick {ticks}: {distance} > {prev_distance}"
            );
            prev_distance = distance;
            ticks += 1;
            assert!(ticks < 600, "did not settle within 600 ticks");
        }
        assert!((spring.value() - 1.0).abs() <= SETTLE_EPSILON);
    }

    #[test]
    fn test_retarget_preserves_velocity() {
        let mut spring = Spring::at(0.0);
        spring.set_target(1.0);
        for _ in 0..10 {
            spring.step(AnimationParams::STANDARD, DT);
        }
        let velocity = spring.velocity();
        assert!(velocity > 0.0);

        spring.set_target(-1.0);
        assert_eq!(spring.velocity(), velocity);
        assert_eq!(spring.target(), -1.0);
    }

    #[test]
    fn test_retarget_never_jumps_more_than_one_step() {
        let mut spring = Spring::at(0.0);
        spring.set_target(1.0);
        for _ in 0..5 {
            spring.step(AnimationParams::STANDARD, DT);
        }

        // Re-targeting alone moves nothing; only the next tick does, and by
        // no more than one step's worth of displacement.
        let before = spring.value();
        spring.set_target(100.0);
        assert_eq!(spring.value(), before);

        let velocity_before = spring.velocity();
        spring.step(AnimationParams::STANDARD, DT);
        let max_displacement = (velocity_before.abs()
            + AnimationParams::STANDARD.tension * 100.0 * DT)
            * DT;
        assert!((spring.value() - before).abs() <= max_displacement);
    }

    #[test]
    fn test_snap_stops_motion() {
        let mut spring = Spring::at(0.0);
        spring.set_target(5.0);
        spring.step(AnimationParams::STANDARD, DT);
        spring.snap();
        assert_eq!(spring.value(), 5.0);
        assert_eq!(spring.velocity(), 0.0);
        assert!(spring.is_settled(SETTLE_EPSILON));
    }

    #[test]
    fn test_vec3_spring_converges_all_components() {
        let mut spring = SpringVec3::at(Vec3::ZERO);
        spring.set_target(Vec3::new(1.0, -2.0, 0.5));

        let mut ticks = 0;
        while !spring.is_settled(SETTLE_EPSILON) {
            spring.step(AnimationParams::GENTLE, DT);
            ticks += 1;
            assert!(ticks < 1200, "did not settle within 1200 ticks");
        }
        assert!(
            (spring.value() - Vec3::new(1.0, -2.0, 0.5))
                .abs()
                .max_element()
                <= SETTLE_EPSILON
        );
    }
}
