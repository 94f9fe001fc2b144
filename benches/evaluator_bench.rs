use std::hint::black_box;
use std::sync::Arc;

use criterion::{Criterion, criterion_group, criterion_main};
use glam::{Quat, Vec3};

use strider::animation::{InterpolationMode, JointTrack, KeyframeTrack, SkeletalClip};
use strider::blend_space::{ParamEvaluator, ParamEvaluatorKind, PlaybackContext};
use strider::skeleton::{Actor, ActorInstance, Skeleton};

/// A two-second walk cycle with a gentle turn, keyed at 30 Hz.
fn walk_cycle() -> SkeletalClip {
    let times: Vec<f32> = (0..=60).map(|i| i as f32 / 30.0).collect();
    let positions = times
        .iter()
        .map(|&t| Vec3::new(0.1 * (t * 6.0).sin(), 1.4 * t, 0.02 * (t * 12.0).cos()))
        .collect();
    let rotations = times.iter().map(|&t| Quat::from_rotation_z(-0.3 * t)).collect();
    SkeletalClip::new(
        "walk",
        vec![JointTrack::new(
            "root",
            KeyframeTrack::new(times.clone(), positions, InterpolationMode::Linear),
            KeyframeTrack::new(times, rotations, InterpolationMode::Linear),
        )],
    )
}

fn bench_evaluators(c: &mut Criterion) {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut skeleton = Skeleton::new();
    let root = skeleton.add_joint("root", None);
    skeleton.add_joint("hips", Some(root));
    let instance = ActorInstance::new(Arc::new(Actor::new("walker", skeleton)));
    let clip = walk_cycle();
    let ctx = PlaybackContext::new(&clip, &instance);

    let mut group = c.benchmark_group("evaluators");
    for kind in ParamEvaluatorKind::ALL {
        group.bench_function(kind.name(), |b| {
            b.iter(|| black_box(kind.compute_param_value(black_box(&ctx))));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_evaluators);
criterion_main!(benches);
