//! Blend Space Parameters
//!
//! - [`context`]: resolves a [`PlaybackContext`] into clip, actor and motion-extraction joint
//! - [`sampling`]: fixed-step resampling of the joint
//! - [`evaluators`]: the locomotion features
//! - [`coordinates`]: placing motions in a 1D/2D blend space

pub mod context;
pub mod coordinates;
pub mod evaluators;
pub mod sampling;
pub mod settings;

pub use context::{PlaybackContext, ResolvedContext, resolve};
pub use coordinates::{BlendSpaceAxes, Coordinates};
pub use evaluators::{ParamEvaluator, ParamEvaluatorKind};
pub use sampling::{PoseSampler, SampleRateInfo};
pub use settings::SamplerSettings;
