use crate::animation::values::Interpolatable;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InterpolationMode {
    #[default]
    Linear,
    Step,
    /// Each key stores `[in_tangent, value, out_tangent]`.
    CubicSpline,
}

/// Time-sorted keys for a single property of a single joint.
#[derive(Debug, Clone)]
pub struct KeyframeTrack<T: Interpolatable> {
    pub times: Vec<f32>,
    pub values: Vec<T>, // For CubicSpline, length is times.len() * 3
    pub interpolation: InterpolationMode,
}

impl<T: Interpolatable> KeyframeTrack<T> {
    #[must_use]
    pub fn new(times: Vec<f32>, values: Vec<T>, interpolation: InterpolationMode) -> Self {
        Self {
            times,
            values,
            interpolation,
        }
    }

    /// A track holding `value` for all time.
    #[must_use]
    pub fn constant(value: T) -> Self {
        Self::new(vec![0.0], vec![value], InterpolationMode::Step)
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Time of the last key, 0 for an empty track.
    #[must_use]
    pub fn end_time(&self) -> f32 {
        self.times.last().copied().unwrap_or(0.0)
    }

    /// Samples the track at `time`, clamping outside the key range.
    /// Returns `None` for an empty track or one whose values do not cover
    /// its keys (`times.len()` values, three per key for `CubicSpline`).
    #[must_use]
    pub fn sample(&self, time: f32) -> Option<T> {
        if self.times.is_empty() {
            return None;
        }
        // First key strictly after `time`.
        let next = self.times.partition_point(|&t| t <= time);
        self.sample_between(next.saturating_sub(1), time)
    }

    fn key_value(&self, index: usize) -> Option<T> {
        match self.interpolation {
            InterpolationMode::CubicSpline => self.values.get(index * 3 + 1).copied(),
            _ => self.values.get(index).copied(),
        }
    }

    fn sample_between(&self, index: usize, time: f32) -> Option<T> {
        let last = self.times.len() - 1;
        if index >= last {
            return self.key_value(last);
        }

        let next = index + 1;
        let t0 = self.times[index];
        let dt = self.times[next] - t0;
        let t = if dt > 1e-6 { ((time - t0) / dt).clamp(0.0, 1.0) } else { 0.0 };

        match self.interpolation {
            InterpolationMode::Step => self.key_value(index),
            InterpolationMode::Linear => Some(T::interpolate_linear(
                self.key_value(index)?,
                self.key_value(next)?,
                t,
            )),
            InterpolationMode::CubicSpline => {
                let i0 = index * 3;
                let i1 = next * 3;
                let key = |i: usize| self.values.get(i).copied();
                Some(T::interpolate_cubic(
                    key(i0 + 1)?,
                    key(i0 + 2)?,
                    key(i1)?,
                    key(i1 + 1)?,
                    t,
                    dt,
                ))
            }
        }
    }
}
