// ABOUTME: Timing curves for pane slide transitions.
// ABOUTME: Maps linear animation progress onto eased progress.

use serde::{Deserialize, Serialize};

/// Easing curve applied to transition progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Interpolator {
    Linear,
    /// Fast start, slow finish: `1 - (1 - t)^3`
    #[default]
    DecelerateCubic,
    /// `1 - (1 - t)^2`
    DecelerateQuad,
    /// Slow at both ends, cosine shaped
    AccelerateDecelerate,
}

impl Interpolator {
    /// Eased progress for linear progress `t`; input is clamped to [0, 1]
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Interpolator::Linear => t,
            Interpolator::DecelerateCubic => 1.0 - (1.0 - t).powi(3),
            Interpolator::DecelerateQuad => 1.0 - (1.0 - t).powi(2),
            Interpolator::AccelerateDecelerate => {
                ((t + 1.0) * std::f32::consts::PI).cos() / 2.0 + 0.5
            }
        }
    }
}
