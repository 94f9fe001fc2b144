use crate::animation::MotionClip;
use crate::errors::ContextError;
use crate::math::JointTransform;
use crate::skeleton::{Actor, ActorInstance, JointIndex};

/// What an evaluator is asked about: a clip played on an actor instance.
#[derive(Clone, Copy, Default)]
pub struct PlaybackContext<'a> {
    pub clip: Option<&'a dyn MotionClip>,
    pub actor_instance: Option<&'a ActorInstance>,
    pub retargeting: bool,
}

impl<'a> PlaybackContext<'a> {
    #[must_use]
    pub fn new(clip: &'a dyn MotionClip, actor_instance: &'a ActorInstance) -> Self {
        Self {
            clip: Some(clip),
            actor_instance: Some(actor_instance),
            retargeting: false,
        }
    }

    #[must_use]
    pub fn with_retargeting(mut self, retargeting: bool) -> Self {
        self.retargeting = retargeting;
        self
    }
}

impl std::fmt::Debug for PlaybackContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaybackContext")
            .field("has_clip", &self.clip.is_some())
            .field("actor_instance", &self.actor_instance)
            .field("retargeting", &self.retargeting)
            .finish()
    }
}

/// A playback context with every piece present and the motion-extraction
/// joint chosen.
#[derive(Clone, Copy)]
pub struct ResolvedContext<'a> {
    pub clip: &'a dyn MotionClip,
    pub actor_instance: &'a ActorInstance,
    pub actor: &'a Actor,
    pub joint: JointIndex,
    pub retargeting: bool,
}

impl ResolvedContext<'_> {
    #[inline]
    #[must_use]
    pub fn duration(&self) -> f32 {
        self.clip.duration()
    }

    /// Pose of the motion-extraction joint at `time`.
    #[inline]
    #[must_use]
    pub fn joint_transform(&self, time: f32) -> JointTransform {
        self.clip
            .joint_transform(self.actor_instance, self.actor, self.joint, time, self.retargeting)
    }
}

/// Resolves the clip, actor and motion-extraction joint of `ctx`.
///
/// When the actor has no motion-extraction joint assigned, the best candidate
/// is searched for and stored on the actor so later calls skip the search.
pub fn resolve<'a>(ctx: &PlaybackContext<'a>) -> Result<ResolvedContext<'a>, ContextError> {
    let clip = ctx.clip.ok_or(ContextError::MissingClip)?;
    let actor_instance = ctx.actor_instance.ok_or(ContextError::MissingActorInstance)?;
    let actor = actor_instance.actor().ok_or(ContextError::MissingActor)?;

    let joint = match actor.motion_extraction_joint() {
        Some(joint) => joint,
        None => {
            let joint = actor
                .find_best_motion_extraction_joint()
                .ok_or(ContextError::NoMotionExtractionJoint)?;
            log::debug!(
                "Actor '{}': using joint {:?} for motion extraction",
                actor.name,
                joint
            );
            actor.set_motion_extraction_joint(Some(joint));
            joint
        }
    };

    Ok(ResolvedContext {
        clip,
        actor_instance,
        actor: actor.as_ref(),
        joint,
        retargeting: ctx.retargeting,
    })
}
