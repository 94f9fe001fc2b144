//! Error Types
//!
//! Evaluators never surface errors to their callers; a context that cannot be
//! resolved collapses to a parameter value of `0.0`. The types here are used by
//! the lower-level APIs ([`resolve`](crate::blend_space::resolve),
//! [`ParamEvaluatorKind::from_name`](crate::ParamEvaluatorKind::from_name)) that
//! do report what went wrong.

use thiserror::Error;

/// Reasons a [`PlaybackContext`](crate::PlaybackContext) cannot be resolved
/// into a clip, an actor and a motion-extraction joint.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextError {
    /// The context carries no clip.
    #[error("Invalid clip in playback context")]
    MissingClip,

    /// The context carries no actor instance.
    #[error("Invalid actor instance in playback context")]
    MissingActorInstance,

    /// The actor instance is not bound to an actor.
    #[error("Actor instance has no actor")]
    MissingActor,

    /// The actor has no motion-extraction joint and none could be found.
    #[error("Motion extraction joint not found")]
    NoMotionExtractionJoint,
}

/// The main error type for the crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StriderError {
    /// Playback context resolution failed.
    #[error(transparent)]
    Context(#[from] ContextError),

    /// No evaluator carries the given display name.
    #[error("Unknown blend space evaluator: {0}")]
    UnknownEvaluator(String),

    /// A blend space was configured with an unsupported number of axes.
    #[error("Blend space needs 1 or 2 axes, got {0}")]
    InvalidAxisCount(usize),
}

/// Alias for `Result<T, StriderError>`.
pub type Result<T> = std::result::Result<T, StriderError>;
