//! Blend space coordinates.
//!
//! A 1D blend space has one evaluator, a 2D blend space one per axis. Each
//! motion's coordinates are the evaluator values for that motion, which is
//! how motions get their place in the space before any manual editing.

use smallvec::SmallVec;

use crate::blend_space::context::PlaybackContext;
use crate::blend_space::evaluators::{ParamEvaluator, ParamEvaluatorKind};
use crate::blend_space::settings::SamplerSettings;
use crate::errors::{Result, StriderError};

/// One value per blend space axis.
pub type Coordinates = SmallVec<[f32; 2]>;

#[derive(Debug, Clone, PartialEq)]
pub struct BlendSpaceAxes {
    axes: SmallVec<[ParamEvaluatorKind; 2]>,
    pub settings: SamplerSettings,
}

impl BlendSpaceAxes {
    #[must_use]
    pub fn one_d(evaluator: ParamEvaluatorKind) -> Self {
        Self {
            axes: SmallVec::from_slice(&[evaluator]),
            settings: SamplerSettings::default(),
        }
    }

    #[must_use]
    pub fn two_d(x: ParamEvaluatorKind, y: ParamEvaluatorKind) -> Self {
        Self {
            axes: SmallVec::from_slice(&[x, y]),
            settings: SamplerSettings::default(),
        }
    }

    pub fn from_evaluators(evaluators: &[ParamEvaluatorKind]) -> Result<Self> {
        match evaluators {
            [x] => Ok(Self::one_d(*x)),
            [x, y] => Ok(Self::two_d(*x, *y)),
            _ => Err(StriderError::InvalidAxisCount(evaluators.len())),
        }
    }

    #[must_use]
    pub fn with_settings(mut self, settings: SamplerSettings) -> Self {
        self.settings = settings;
        self
    }

    #[inline]
    #[must_use]
    pub fn evaluators(&self) -> &[ParamEvaluatorKind] {
        &self.axes
    }

    #[inline]
    #[must_use]
    pub fn dimensions(&self) -> usize {
        self.axes.len()
    }

    /// Axes with no evaluator selected; motions are placed by hand along these.
    pub fn manual_axes(&self) -> impl Iterator<Item = usize> + '_ {
        self.axes
            .iter()
            .enumerate()
            .filter(|(_, kind)| kind.is_null_evaluator())
            .map(|(i, _)| i)
    }

    #[must_use]
    pub fn compute_coordinates(&self, ctx: &PlaybackContext<'_>) -> Coordinates {
        self.axes
            .iter()
            .map(|kind| kind.compute_param_value_with(ctx, &self.settings))
            .collect()
    }

    #[must_use]
    pub fn compute_all(&self, motions: &[PlaybackContext<'_>]) -> Vec<Coordinates> {
        motions.iter().map(|ctx| self.compute_coordinates(ctx)).collect()
    }

    /// Per-axis `(min, max)` over `points`, or `None` when there are no points.
    #[must_use]
    pub fn bounds(&self, points: &[Coordinates]) -> Option<(Coordinates, Coordinates)> {
        let (first, rest) = points.split_first()?;
        let mut min = first.clone();
        let mut max = first.clone();
        for point in rest {
            for axis in 0..self.dimensions().min(point.len()).min(min.len()) {
                min[axis] = min[axis].min(point[axis]);
                max[axis] = max[axis].max(point[axis]);
            }
        }
        Some((min, max))
    }
}
