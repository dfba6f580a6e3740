//! Spring animation tuning options.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::layout::AnimationParams;

/// Spring tuning applied on top of the per-strategy feel.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema,
)]
#[serde(default)]
pub struct AnimationOptions {
    /// Override spring tension for every strategy. None keeps each
    /// strategy's own value.
    pub tension: Option<f32>,
    /// Override spring friction for every strategy. None keeps each
    /// strategy's own value.
    pub friction: Option<f32>,
    /// Distance and velocity threshold below which a transform counts as
    /// settled.
    pub settle_epsilon: f32,
    /// Maximum integration step in seconds. Longer frame gaps are clamped
    /// so a stall cannot destabilize the spring integration.
    pub max_step: f32,
}

impl AnimationOptions {
    /// A strategy's params with any configured overrides applied.
    #[must_use]
    pub fn apply(&self, base: AnimationParams) -> AnimationParams {
        AnimationParams {
            tension: self.tension.unwrap_or(base.tension),
            friction: self.friction.unwrap_or(base.friction),
        }
    }
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self {
            tension: None,
            friction: None,
            settle_epsilon: 1e-3,
            max_step: 0.05,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_without_overrides_keeps_base() {
        let options = AnimationOptions::default();
        let applied = options.apply(AnimationParams::GENTLE);
        assert_eq!(applied, AnimationParams::GENTLE);
    }

    #[test]
    fn test_apply_with_partial_override() {
        let options = AnimationOptions {
            tension: Some(300.0),
            ..AnimationOptions::default()
        };
        let applied = options.apply(AnimationParams::STANDARD);
        assert_eq!(applied.tension, 300.0);
        assert_eq!(applied.friction, AnimationParams::STANDARD.friction);
    }
}
