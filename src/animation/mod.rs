//! Spring animation: drives applied transforms toward layout targets.

mod driver;
mod spring;

pub use driver::{AnimatedTransform, AnimationDriver, FrameTransforms};
pub use spring::{Spring, SpringVec3, SETTLE_EPSILON};
