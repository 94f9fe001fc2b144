use glam::{Quat, Vec3};

use crate::animation::tracks::{InterpolationMode, KeyframeTrack};
use crate::math::JointTransform;
use crate::skeleton::{Actor, ActorInstance, JointIndex};

/// Sample rate assumed for clips that do not carry one.
pub const DEFAULT_SAMPLE_RATE_HZ: f32 = 30.0;

/// A clip the evaluators can sample.
///
/// Engines with their own motion formats implement this; [`SkeletalClip`] is
/// the keyframe implementation shipped with the crate.
pub trait MotionClip {
    /// Length in seconds.
    fn duration(&self) -> f32;

    /// Authored frames per second.
    fn sample_rate_hz(&self) -> f32;

    /// Pose of `joint` at `time`, in the space retargeted poses are evaluated in.
    fn joint_transform(
        &self,
        instance: &ActorInstance,
        actor: &Actor,
        joint: JointIndex,
        time: f32,
        retargeting: bool,
    ) -> JointTransform;
}

/// Keyframes for one joint, matched to the playback skeleton by name.
#[derive(Debug, Clone)]
pub struct JointTrack {
    pub joint_name: String,
    pub positions: KeyframeTrack<Vec3>,
    pub rotations: KeyframeTrack<Quat>,
    /// Bind pose of the skeleton the clip was authored on. Needed for retargeting.
    pub bind: Option<JointTransform>,
}

impl JointTrack {
    #[must_use]
    pub fn new(
        joint_name: impl Into<String>,
        positions: KeyframeTrack<Vec3>,
        rotations: KeyframeTrack<Quat>,
    ) -> Self {
        Self {
            joint_name: joint_name.into(),
            positions,
            rotations,
            bind: None,
        }
    }

    /// Linearly interpolated positions with a fixed identity rotation.
    #[must_use]
    pub fn from_positions(joint_name: impl Into<String>, times: Vec<f32>, positions: Vec<Vec3>) -> Self {
        Self::new(
            joint_name,
            KeyframeTrack::new(times, positions, InterpolationMode::Linear),
            KeyframeTrack::constant(Quat::IDENTITY),
        )
    }

    #[must_use]
    pub fn with_bind(mut self, bind: JointTransform) -> Self {
        self.bind = Some(bind);
        self
    }

    #[must_use]
    pub fn end_time(&self) -> f32 {
        self.positions.end_time().max(self.rotations.end_time())
    }
}

#[derive(Debug, Clone)]
pub struct SkeletalClip {
    pub name: String,
    pub duration: f32,
    pub sample_rate_hz: f32,
    pub tracks: Vec<JointTrack>,
}

impl SkeletalClip {
    /// Builds a clip whose duration is the end of its longest track.
    #[must_use]
    pub fn new(name: impl Into<String>, tracks: Vec<JointTrack>) -> Self {
        let duration = tracks.iter().map(JointTrack::end_time).fold(0.0_f32, f32::max);
        Self {
            name: name.into(),
            duration,
            sample_rate_hz: DEFAULT_SAMPLE_RATE_HZ,
            tracks,
        }
    }

    #[must_use]
    pub fn with_duration(mut self, duration: f32) -> Self {
        self.duration = duration;
        self
    }

    #[must_use]
    pub fn with_sample_rate(mut self, sample_rate_hz: f32) -> Self {
        self.sample_rate_hz = sample_rate_hz;
        self
    }

    #[must_use]
    pub fn track(&self, joint_name: &str) -> Option<&JointTrack> {
        self.tracks.iter().find(|t| t.joint_name == joint_name)
    }
}

impl MotionClip for SkeletalClip {
    fn duration(&self) -> f32 {
        self.duration
    }

    fn sample_rate_hz(&self) -> f32 {
        self.sample_rate_hz
    }

    fn joint_transform(
        &self,
        _instance: &ActorInstance,
        actor: &Actor,
        joint: JointIndex,
        time: f32,
        retargeting: bool,
    ) -> JointTransform {
        let actor_bind = actor.bind_transform(joint);
        let Some(track) = actor
            .skeleton()
            .joint(joint)
            .and_then(|j| self.track(&j.name))
        else {
            // Joints the clip does not animate stay in the actor's bind pose.
            return actor_bind;
        };

        let position = track.positions.sample(time).unwrap_or(actor_bind.position);
        let rotation = track.rotations.sample(time).unwrap_or(actor_bind.rotation);

        match track.bind {
            Some(source_bind) if retargeting => JointTransform {
                position: position - source_bind.position + actor_bind.position,
                rotation: (rotation * source_bind.rotation.conjugate() * actor_bind.rotation)
                    .normalize(),
            },
            _ => JointTransform { position, rotation },
        }
    }
}
