#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

//! Strider
//!
//! Derives scalar locomotion features from animation clips so that clips can
//! be placed in a blend space: move speed, turn speed, travel direction and
//! slope, turn angle, travel distance, and lateral / forward velocity.
//!
//! ```rust,ignore
//! use strider::{ParamEvaluator, ParamEvaluatorKind, PlaybackContext};
//!
//! let ctx = PlaybackContext::new(&clip, &actor_instance);
//! let speed = ParamEvaluatorKind::MoveSpeed.compute_param_value(&ctx);
//! ```

pub mod animation;
pub mod blend_space;
pub mod errors;
pub mod math;
pub mod skeleton;

pub use animation::{InterpolationMode, JointTrack, KeyframeTrack, MotionClip, SkeletalClip};
pub use blend_space::{
    BlendSpaceAxes, ParamEvaluator, ParamEvaluatorKind, PlaybackContext, PoseSampler,
    ResolvedContext, SampleRateInfo, SamplerSettings,
};
pub use errors::{ContextError, Result, StriderError};
pub use math::JointTransform;
pub use skeleton::{Actor, ActorInstance, Joint, JointIndex, Skeleton};
