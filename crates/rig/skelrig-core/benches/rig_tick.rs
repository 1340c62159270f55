use criterion::{criterion_group, criterion_main, Criterion};
use skelrig_core::{
    AttachmentPoint, Bone, Easing, Keyframe, KeyframeTrack, Rig, SourceRect, Sprite,
    SpriteInstance, Transform,
};
use std::hint::black_box;

/// Builds `chains` chains of `depth` bones each, one sprite instance per bone
/// and a three-key rotation track per bone.
fn build_rig(chains: usize, depth: usize) -> Rig {
    let mut rig = Rig::headless();
    let mut bones = Vec::with_capacity(chains * depth);
    for c in 0..chains {
        for d in 0..depth {
            let name = format!("c{c}_b{d}");
            let parent = (d > 0).then(|| format!("c{c}_b{}", d - 1));
            let x = if d == 0 { c as f32 * 20.0 } else { 0.0 };
            bones.push(
                Bone::new(name, parent, x, 0.0, 12.0, 15.0).with_attachment(AttachmentPoint::End),
            );
        }
    }
    rig.set_bones(bones).unwrap();

    let mut sprite = Sprite::new("seg", SourceRect { x: 0, y: 0, width: 8, height: 12 });
    sprite.region = Some(sprite.rect);
    rig.insert_sprite(sprite);

    for c in 0..chains {
        for d in 0..depth {
            let bone = format!("c{c}_b{d}");
            rig.insert_instance(SpriteInstance::new(format!("i_{bone}"), "seg", bone.as_str()));
            rig.insert_track(KeyframeTrack::new(
                bone,
                vec![
                    Keyframe::new(0.0, Transform::new(0.0, 0.0, -0.1, 1.0), Easing::EaseInOut),
                    Keyframe::new(1.0, Transform::new(0.0, 0.0, 0.1, 1.0), Easing::Linear),
                    Keyframe::new(2.0, Transform::new(0.0, 0.0, -0.1, 1.0), Easing::Linear),
                ],
            ));
        }
    }
    rig.set_timing(2.0, 60);
    rig.play();
    rig
}

fn rig_tick_benchmark(c: &mut Criterion) {
    let dt = 1.0 / 60.0;

    let mut small = build_rig(4, 8);
    c.bench_function("advance_32_bones", |b| {
        b.iter(|| small.advance(black_box(dt)))
    });

    let mut large = build_rig(16, 16);
    c.bench_function("advance_256_bones", |b| {
        b.iter(|| large.advance(black_box(dt)))
    });

    let posed = build_rig(16, 16);
    c.bench_function("pose_for_rendering_256", |b| {
        b.iter(|| black_box(posed.pose_for_rendering().len()))
    });

    c.bench_function("skeleton_segments_256", |b| {
        b.iter(|| black_box(posed.skeleton_segments().len()))
    });
}

criterion_group!(benches, rig_tick_benchmark);
criterion_main!(benches);
