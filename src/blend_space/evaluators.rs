//! Blend Space Parameter Evaluators
//!
//! Each evaluator reduces a clip to one number describing its locomotion, by
//! sampling the motion-extraction joint of the actor the clip plays on.
//!
//! | Evaluator             | Value                                                  |
//! |-----------------------|--------------------------------------------------------|
//! | `MoveSpeed`           | path length / duration                                 |
//! | `TurnSpeed`           | accumulated turn / duration                            |
//! | `TravelDirection`     | `atan2(dx, dy)` of start-to-end displacement           |
//! | `TravelSlope`         | mean `atan2(dz, horizontal)` over moving steps         |
//! | `TurnAngle`           | accumulated turn                                       |
//! | `TravelDistance`      | start-to-end distance                                  |
//! | `LeftRightVelocity`   | summed displacement along +X / duration                |
//! | `FrontBackVelocity`   | summed displacement along +Y / duration                |
//!
//! Turning is clockwise positive about the Z (up) axis. An evaluator whose
//! context cannot be resolved, or whose clip has no positive duration, yields
//! `0.0`.

use std::fmt;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::blend_space::context::{PlaybackContext, ResolvedContext, resolve};
use crate::blend_space::sampling::PoseSampler;
use crate::blend_space::settings::SamplerSettings;
use crate::errors::{Result, StriderError};
use crate::math::{horizontal_length, turn_delta};

/// Computes a blend-space parameter for a clip.
pub trait ParamEvaluator {
    /// Computes the parameter with [`SamplerSettings::default`].
    fn compute_param_value(&self, ctx: &PlaybackContext<'_>) -> f32 {
        self.compute_param_value_with(ctx, &SamplerSettings::default())
    }

    fn compute_param_value_with(&self, ctx: &PlaybackContext<'_>, settings: &SamplerSettings) -> f32;

    /// Label shown in blend space authoring tools.
    fn name(&self) -> &'static str;

    /// True for the "nothing selected" placeholder.
    fn is_null_evaluator(&self) -> bool {
        false
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ParamEvaluatorKind {
    #[default]
    None,
    MoveSpeed,
    TurnSpeed,
    TravelDirection,
    TravelSlope,
    TurnAngle,
    TravelDistance,
    LeftRightVelocity,
    FrontBackVelocity,
}

impl ParamEvaluatorKind {
    /// Every evaluator, placeholder first, in the order tools list them.
    pub const ALL: [Self; 9] = [
        Self::None,
        Self::MoveSpeed,
        Self::TurnSpeed,
        Self::TravelDirection,
        Self::TravelSlope,
        Self::TurnAngle,
        Self::TravelDistance,
        Self::LeftRightVelocity,
        Self::FrontBackVelocity,
    ];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::None => "Select an evaluator",
            Self::MoveSpeed => "Move speed",
            Self::TurnSpeed => "Turn speed",
            Self::TravelDirection => "Travel direction",
            Self::TravelSlope => "Travel slope",
            Self::TurnAngle => "Turn angle",
            Self::TravelDistance => "Travel distance",
            Self::LeftRightVelocity => "Left-right velocity",
            Self::FrontBackVelocity => "Front-back velocity",
        }
    }

    /// Looks an evaluator up by its display name.
    pub fn from_name(name: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.display_name() == name)
            .ok_or_else(|| StriderError::UnknownEvaluator(name.to_owned()))
    }

    fn evaluate(self, ctx: &ResolvedContext<'_>, settings: &SamplerSettings) -> f32 {
        let duration = ctx.duration();
        if duration.is_nan() || duration <= 0.0 {
            return 0.0;
        }

        match self {
            Self::None => 0.0,
            Self::MoveSpeed => path_length(&PoseSampler::new(ctx, settings)) / duration,
            Self::TurnSpeed => total_turn(&PoseSampler::new(ctx, settings)) / duration,
            Self::TravelDirection => {
                let d = displacement(ctx, duration);
                d.x.atan2(d.y)
            }
            Self::TravelSlope => average_slope(&PoseSampler::new(ctx, settings)),
            Self::TurnAngle => total_turn(&PoseSampler::new(ctx, settings)),
            Self::TravelDistance => displacement(ctx, duration).length(),
            Self::LeftRightVelocity => {
                distance_along(&PoseSampler::new(ctx, settings), Vec3::X) / duration
            }
            Self::FrontBackVelocity => {
                distance_along(&PoseSampler::new(ctx, settings), Vec3::Y) / duration
            }
        }
    }
}

impl ParamEvaluator for ParamEvaluatorKind {
    fn compute_param_value_with(&self, ctx: &PlaybackContext<'_>, settings: &SamplerSettings) -> f32 {
        if self.is_null_evaluator() {
            return 0.0;
        }

        let resolved = match resolve(ctx) {
            Ok(resolved) => resolved,
            Err(err) => {
                log::warn!("{}: {err}", self.display_name());
                if cfg!(debug_assertions) && settings.assert_on_unresolved {
                    panic!("{}: {err}", self.display_name());
                }
                return 0.0;
            }
        };

        let value = self.evaluate(&resolved, settings);
        log::trace!("{} = {value}", self.display_name());
        value
    }

    fn name(&self) -> &'static str {
        self.display_name()
    }

    fn is_null_evaluator(&self) -> bool {
        *self == Self::None
    }
}

impl fmt::Display for ParamEvaluatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl std::str::FromStr for ParamEvaluatorKind {
    type Err = StriderError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s)
    }
}

// ============================================================================
// Features
// ============================================================================

fn path_length(sampler: &PoseSampler<'_, '_>) -> f32 {
    sampler
        .steps()
        .map(|(prev, cur)| (cur.position - prev.position).length())
        .sum()
}

fn total_turn(sampler: &PoseSampler<'_, '_>) -> f32 {
    sampler
        .steps()
        .map(|(prev, cur)| turn_delta(prev.rotation, cur.rotation))
        .sum()
}

fn distance_along(sampler: &PoseSampler<'_, '_>, axis: Vec3) -> f32 {
    sampler
        .steps()
        .map(|(prev, cur)| (cur.position - prev.position).dot(axis))
        .sum()
}

/// Straight line from the first pose to the pose at `duration`.
fn displacement(ctx: &ResolvedContext<'_>, duration: f32) -> Vec3 {
    ctx.joint_transform(duration).position - ctx.joint_transform(0.0).position
}

/// Mean climb angle over steps with horizontal movement. Purely vertical
/// steps are skipped and the anchor stays put until the joint moves
/// horizontally again.
fn average_slope(sampler: &PoseSampler<'_, '_>) -> f32 {
    let mut poses = sampler.poses();
    let Some(first) = poses.next() else {
        return 0.0;
    };

    let mut anchor = first.position;
    let mut slope_sum = 0.0;
    let mut count = 0u32;
    for pose in poses {
        let diff = pose.position - anchor;
        let horizontal = horizontal_length(diff);
        if horizontal > 0.0 {
            slope_sum += diff.z.atan2(horizontal);
            anchor = pose.position;
            count += 1;
        }
    }

    if count > 0 {
        slope_sum / count as f32
    } else {
        0.0
    }
}
