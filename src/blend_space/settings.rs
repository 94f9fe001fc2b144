//! Sampler Settings
//!
//! Tunables shared by every evaluator.
//!
//! ```rust,ignore
//! use strider::{ParamEvaluator, ParamEvaluatorKind, SamplerSettings};
//!
//! // Catch broken playback contexts early while authoring.
//! let settings = SamplerSettings {
//!     assert_on_unresolved: true,
//!     ..Default::default()
//! };
//! let speed = ParamEvaluatorKind::MoveSpeed.compute_param_value_with(&ctx, &settings);
//! ```

use crate::animation::DEFAULT_SAMPLE_RATE_HZ;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplerSettings {
    /// Rate used when a clip reports a non-positive or non-finite sample rate.
    pub fallback_sample_rate_hz: f32,

    /// Raise a debug assertion when a playback context cannot be resolved.
    /// Release builds only log; the evaluator still returns `0.0`.
    pub assert_on_unresolved: bool,
}

impl Default for SamplerSettings {
    fn default() -> Self {
        Self {
            fallback_sample_rate_hz: DEFAULT_SAMPLE_RATE_HZ,
            assert_on_unresolved: false,
        }
    }
}

impl SamplerSettings {
    /// The rate to sample a clip at, given the rate it reports.
    #[must_use]
    pub fn effective_sample_rate(&self, clip_rate_hz: f32) -> f32 {
        if clip_rate_hz.is_finite() && clip_rate_hz > 0.0 {
            clip_rate_hz
        } else {
            log::warn!(
                "Clip sample rate {clip_rate_hz} is invalid, using {} Hz",
                self.fallback_sample_rate_hz
            );
            self.fallback_sample_rate_hz
        }
    }
}
