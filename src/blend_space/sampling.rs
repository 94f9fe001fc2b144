//! Fixed-step resampling of the motion-extraction joint.
//!
//! A clip is visited at `t_i = i * step` for `i in 0..num_samples`, starting at
//! time zero. Delta-based features walk consecutive pairs of those poses.

use crate::blend_space::context::ResolvedContext;
use crate::blend_space::settings::SamplerSettings;
use crate::math::JointTransform;

/// Step size and sample count covering a clip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleRateInfo {
    pub step: f32,
    pub num_samples: u32,
}

impl SampleRateInfo {
    pub const EMPTY: Self = Self {
        step: 0.0,
        num_samples: 0,
    };

    /// Upper bound on sampling intervals per clip.
    pub const MAX_INTERVALS: u32 = 1 << 20;

    /// Spreads samples evenly over `[0, duration]` at roughly `rate_hz`.
    ///
    /// The step is stretched so the last sample lands on `duration`. Clips
    /// shorter than half a frame get a single sample at time zero. The
    /// interval count is capped at [`MAX_INTERVALS`](Self::MAX_INTERVALS).
    #[must_use]
    pub fn from_rate(rate_hz: f32, duration: f32) -> Self {
        if !(rate_hz.is_finite() && duration.is_finite() && rate_hz > 0.0 && duration > 0.0) {
            return Self::EMPTY;
        }

        let wanted = (rate_hz * duration).round();
        let intervals = if wanted > Self::MAX_INTERVALS as f32 {
            log::warn!(
                "Sampling {duration}s at {rate_hz} Hz needs {wanted} intervals, capping at {}",
                Self::MAX_INTERVALS
            );
            Self::MAX_INTERVALS
        } else {
            wanted as u32
        };
        if intervals == 0 {
            return Self {
                step: duration,
                num_samples: 1,
            };
        }

        Self {
            step: duration / intervals as f32,
            num_samples: intervals + 1,
        }
    }

    /// Sample times, starting at zero.
    pub fn times(&self) -> impl Iterator<Item = f32> {
        let step = self.step;
        (0..self.num_samples).map(move |i| i as f32 * step)
    }
}

/// Walks a resolved clip at a fixed rate.
pub struct PoseSampler<'c, 'a> {
    ctx: &'c ResolvedContext<'a>,
    info: SampleRateInfo,
}

impl<'c, 'a> PoseSampler<'c, 'a> {
    #[must_use]
    pub fn new(ctx: &'c ResolvedContext<'a>, settings: &SamplerSettings) -> Self {
        let rate = settings.effective_sample_rate(ctx.clip.sample_rate_hz());
        Self {
            ctx,
            info: SampleRateInfo::from_rate(rate, ctx.duration()),
        }
    }

    #[inline]
    #[must_use]
    pub fn info(&self) -> SampleRateInfo {
        self.info
    }

    /// Joint pose at every sample time.
    pub fn poses(&self) -> impl Iterator<Item = JointTransform> + '_ {
        self.info.times().map(move |time| self.ctx.joint_transform(time))
    }

    /// Consecutive `(previous, current)` pose pairs, starting with samples 0 and 1.
    pub fn steps(&self) -> impl Iterator<Item = (JointTransform, JointTransform)> + '_ {
        let mut poses = self.poses();
        let mut previous = poses.next();
        poses.map_while(move |current| {
            let prev = previous.replace(current)?;
            Some((prev, current))
        })
    }
}
