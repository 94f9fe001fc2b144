pub mod values;
pub mod tracks;
pub mod clip;

pub use clip::{DEFAULT_SAMPLE_RATE_HZ, JointTrack, MotionClip, SkeletalClip};
pub use tracks::{InterpolationMode, KeyframeTrack};
pub use values::Interpolatable;
