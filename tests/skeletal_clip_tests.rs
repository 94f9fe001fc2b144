//! Keyframe Clip Tests
//!
//! Tests for:
//! - KeyframeTrack linear/step/cubic sampling and clamping
//! - SkeletalClip duration auto-computation and joint lookup
//! - Joints without tracks falling back to the actor's bind pose
//! - Tracks whose values do not cover their keys

use std::f32::consts::PI;
use std::sync::Arc;

use glam::{Quat, Vec3};

use strider::animation::{InterpolationMode, JointTrack, KeyframeTrack, MotionClip, SkeletalClip};
use strider::math::JointTransform;
use strider::skeleton::{Actor, ActorInstance, JointIndex, Skeleton};

const EPSILON: f32 = 1e-5;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

// ============================================================================
// KeyframeTrack
// ============================================================================

#[test]
fn linear_vec3_midpoint() {
    let track = KeyframeTrack::new(
        vec![0.0, 1.0],
        vec![Vec3::ZERO, Vec3::new(10.0, 20.0, 30.0)],
        InterpolationMode::Linear,
    );
    let val = track.sample(0.5).unwrap();
    assert!(approx(val.x, 5.0));
    assert!(approx(val.y, 10.0));
    assert!(approx(val.z, 15.0));
}

#[test]
fn linear_clamps_outside_key_range() {
    let track = KeyframeTrack::new(
        vec![1.0, 2.0],
        vec![Vec3::splat(1.0), Vec3::splat(2.0)],
        InterpolationMode::Linear,
    );
    assert!(approx(track.sample(0.0).unwrap().x, 1.0));
    assert!(approx(track.sample(5.0).unwrap().x, 2.0));
}

#[test]
fn step_holds_value_until_next_key() {
    let track = KeyframeTrack::new(
        vec![0.0, 1.0, 2.0],
        vec![Vec3::ZERO, Vec3::X, Vec3::Y],
        InterpolationMode::Step,
    );
    assert_eq!(track.sample(0.99), Some(Vec3::ZERO));
    assert_eq!(track.sample(1.0), Some(Vec3::X));
    assert_eq!(track.sample(1.5), Some(Vec3::X));
    assert_eq!(track.sample(2.0), Some(Vec3::Y));
}

#[test]
fn quaternion_track_slerps() {
    let q0 = Quat::IDENTITY;
    let q1 = Quat::from_rotation_z(PI * 0.5);
    let track = KeyframeTrack::new(vec![0.0, 1.0], vec![q0, q1], InterpolationMode::Linear);

    let val = track.sample(0.5).unwrap();
    let angle = val.angle_between(Quat::from_rotation_z(PI * 0.25));
    assert!(angle < 1e-3, "slerp mismatch: angle={angle}");
}

#[test]
fn cubic_spline_hits_keys_exactly() {
    // values = [in_tangent0, value0, out_tangent0, in_tangent1, value1, out_tangent1]
    let track = KeyframeTrack::new(
        vec![0.0, 1.0],
        vec![
            Vec3::ZERO, Vec3::ZERO, Vec3::X,
            Vec3::X, Vec3::new(10.0, 0.0, 0.0), Vec3::ZERO,
        ],
        InterpolationMode::CubicSpline,
    );
    assert!(approx(track.sample(0.0).unwrap().x, 0.0));
    assert!(approx(track.sample(1.0).unwrap().x, 10.0));

    let mid = track.sample(0.5).unwrap().x;
    assert!((mid - 5.0).abs() < 1.0, "cubic midpoint {mid}");
}

#[test]
fn empty_track_samples_nothing() {
    let track: KeyframeTrack<Vec3> = KeyframeTrack::new(vec![], vec![], InterpolationMode::Linear);
    assert!(track.is_empty());
    assert_eq!(track.sample(0.0), None);
    assert!(approx(track.end_time(), 0.0));
}

// ============================================================================
// SkeletalClip
// ============================================================================

fn two_joint_actor() -> Arc<Actor> {
    let mut skeleton = Skeleton::new();
    let root = skeleton.add_joint("root", None);
    skeleton.add_joint("hand", Some(root));
    Arc::new(Actor::new("rig", skeleton).with_bind_pose(vec![
        JointTransform::IDENTITY,
        JointTransform::from_position(Vec3::new(0.5, 0.0, 1.2)),
    ]))
}

#[test]
fn duration_is_longest_track() {
    let clip = SkeletalClip::new(
        "wave",
        vec![
            JointTrack::from_positions("root", vec![0.0, 1.5], vec![Vec3::ZERO, Vec3::X]),
            JointTrack::new(
                "hand",
                KeyframeTrack::constant(Vec3::ZERO),
                KeyframeTrack::new(vec![0.0, 2.25], vec![Quat::IDENTITY; 2], InterpolationMode::Linear),
            ),
        ],
    );
    assert!(approx(clip.duration(), 2.25));
    assert!(clip.track("hand").is_some());
    assert!(clip.track("foot").is_none());
}

#[test]
fn unanimated_joint_stays_in_bind_pose() {
    let actor = two_joint_actor();
    let instance = ActorInstance::new(Arc::clone(&actor));
    let clip = SkeletalClip::new(
        "root_only",
        vec![JointTrack::from_positions("root", vec![0.0, 1.0], vec![Vec3::ZERO, Vec3::Y])],
    );

    let hand = clip.joint_transform(&instance, &actor, JointIndex(1), 0.5, false);
    assert_eq!(hand, actor.bind_transform(JointIndex(1)));

    let root = clip.joint_transform(&instance, &actor, JointIndex(0), 0.5, false);
    assert!(approx(root.position.y, 0.5));

    // Out-of-range joints fall back to identity.
    let missing = clip.joint_transform(&instance, &actor, JointIndex(7), 0.5, false);
    assert_eq!(missing, JointTransform::IDENTITY);
}

// ============================================================================
// Malformed Tracks
// ============================================================================

#[test]
fn short_value_list_samples_nothing_past_its_end() {
    let track = KeyframeTrack::new(
        vec![0.0, 1.0, 2.0],
        vec![Vec3::ZERO, Vec3::X],
        InterpolationMode::Linear,
    );
    assert!(approx(track.sample(0.5).unwrap().x, 0.5));
    assert_eq!(track.sample(1.5), None);
    assert_eq!(track.sample(3.0), None);
}

#[test]
fn cubic_track_without_tangents_samples_nothing() {
    let track = KeyframeTrack::new(
        vec![0.0, 1.0],
        vec![Vec3::ZERO, Vec3::X],
        InterpolationMode::CubicSpline,
    );
    assert_eq!(track.sample(0.5), None);
    assert_eq!(track.sample(1.0), None);
}

#[test]
fn evaluators_survive_malformed_tracks() {
    use strider::blend_space::{ParamEvaluator, ParamEvaluatorKind, PlaybackContext};

    let actor = two_joint_actor();
    let instance = ActorInstance::new(Arc::clone(&actor));
    let clip = SkeletalClip::new(
        "broken",
        vec![JointTrack::new(
            "root",
            KeyframeTrack::new(vec![0.0, 1.0, 2.0], vec![Vec3::ZERO, Vec3::Y], InterpolationMode::Linear),
            KeyframeTrack::new(
                vec![0.0, 2.0],
                vec![Quat::IDENTITY, Quat::from_rotation_z(1.0)],
                InterpolationMode::CubicSpline,
            ),
        )],
    );

    // Missing values fall back to the bind pose instead of panicking.
    let root = clip.joint_transform(&instance, &actor, JointIndex(0), 1.5, false);
    assert_eq!(root, actor.bind_transform(JointIndex(0)));

    let ctx = PlaybackContext::new(&clip, &instance);
    for kind in ParamEvaluatorKind::ALL {
        let value = kind.compute_param_value(&ctx);
        assert!(value.is_finite(), "{kind}: {value}");
    }
}
