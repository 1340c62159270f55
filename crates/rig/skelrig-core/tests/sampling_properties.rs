use skelrig_core::{
    interp::functions::{ease_in, ease_in_out, ease_out, smoothstep},
    Easing, Extrapolation, Keyframe, KeyframeTrack, Transform,
};

fn approx(a: f32, b: f32, eps: f32) {
    assert!((a - b).abs() <= eps, "left={a} right={b} eps={eps}");
}

fn key(time: f32, x: f32, y: f32, rotation: f32, scale: f32, easing: Easing) -> Keyframe {
    Keyframe::new(time, Transform::new(x, y, rotation, scale), easing)
}

const ALL_EASINGS: [Easing; 5] = [
    Easing::Linear,
    Easing::EaseIn,
    Easing::EaseOut,
    Easing::EaseInOut,
    Easing::Bezier,
];

/// it should return identity for an empty track at any time
#[test]
fn empty_track_is_identity() {
    let track = KeyframeTrack::new("bone", vec![]);
    for t in [-1.0, 0.0, 0.5, 100.0] {
        assert_eq!(track.sample(t), Transform::IDENTITY);
    }
}

/// it should hold a single keyframe regardless of time
#[test]
fn single_key_is_constant() {
    let k = key(3.0, 1.0, -2.0, 45.0, 1.5, Easing::EaseIn);
    let track = KeyframeTrack::new("bone", vec![k]);
    for t in [-10.0, 0.0, 3.0, 7.5] {
        assert_eq!(track.sample(t), k.transform);
        assert_eq!(track.sample_with(t, Extrapolation::HoldFirst), k.transform);
    }
}

/// it should land exactly on every interior keyframe for every easing kind
#[test]
fn continuous_at_keyframe_boundaries() {
    for easing in ALL_EASINGS {
        let keys = vec![
            key(0.0, 0.1, 0.7, 10.0, 1.0, easing),
            key(0.3, 0.3, -1.9, 33.3, 0.25, easing),
            key(1.7, 12.5, 4.4, -90.0, 3.0, easing),
            key(2.0, -5.0, 0.0, 0.0, 1.0, easing),
        ];
        let track = KeyframeTrack::new("bone", keys.clone());
        for k in &keys {
            assert_eq!(track.sample(k.time), k.transform, "easing {easing:?} at {}", k.time);
        }
    }
}

/// it should remap progress with the departing keyframe's easing
#[test]
fn departing_key_controls_curve() {
    let track = KeyframeTrack::new(
        "bone",
        vec![
            key(0.0, 0.0, 0.0, 0.0, 1.0, Easing::EaseIn),
            key(1.0, 10.0, 0.0, 0.0, 1.0, Easing::EaseOut),
            key(2.0, 20.0, 0.0, 0.0, 1.0, Easing::Linear),
        ],
    );
    approx(track.sample(0.5).x, 10.0 * ease_in(0.5), 1e-5);
    approx(track.sample(1.5).x, 10.0 + 10.0 * ease_out(0.5), 1e-5);
}

/// it should blend all four components independently
#[test]
fn blends_every_component() {
    let track = KeyframeTrack::new(
        "bone",
        vec![
            key(0.0, 0.0, 10.0, 0.0, 1.0, Easing::Linear),
            key(2.0, 4.0, 20.0, 90.0, 3.0, Easing::Linear),
        ],
    );
    let s = track.sample(0.5);
    approx(s.x, 1.0, 1e-6);
    approx(s.y, 12.5, 1e-6);
    approx(s.rotation, 22.5, 1e-5);
    approx(s.scale, 1.5, 1e-6);
}

/// it should hold the last keyframe past the end and, by default, before the start
#[test]
fn extrapolation_rules() {
    let first = key(1.0, 1.0, 0.0, 0.0, 1.0, Easing::Linear);
    let last = key(2.0, 2.0, 0.0, 0.0, 1.0, Easing::Linear);
    let track = KeyframeTrack::new("bone", vec![first, last]);
    assert_eq!(track.sample(5.0), last.transform);
    assert_eq!(track.sample(0.0), last.transform);
    assert_eq!(track.sample_with(0.0, Extrapolation::HoldFirst), first.transform);
    assert_eq!(track.sample_with(5.0, Extrapolation::HoldFirst), last.transform);
}

/// it should use the first bracketing pair when keyframes share a time
#[test]
fn duplicate_times_pick_first_pair() {
    let track = KeyframeTrack::new(
        "bone",
        vec![
            key(0.0, 0.0, 0.0, 0.0, 1.0, Easing::Linear),
            key(1.0, 5.0, 0.0, 0.0, 1.0, Easing::Linear),
            key(1.0, 50.0, 0.0, 0.0, 1.0, Easing::Linear),
            key(2.0, 60.0, 0.0, 0.0, 1.0, Easing::Linear),
        ],
    );
    assert_eq!(track.sample(1.0).x, 5.0);
    approx(track.sample(1.5).x, 55.0, 1e-5);
}

/// it should scan unsorted keyframes in track order without reordering them
#[test]
fn unsorted_keys_are_scanned_as_given() {
    let track = KeyframeTrack::new(
        "bone",
        vec![
            key(2.0, 20.0, 0.0, 0.0, 1.0, Easing::Linear),
            key(0.0, 0.0, 0.0, 0.0, 1.0, Easing::Linear),
            key(1.0, 10.0, 0.0, 0.0, 1.0, Easing::Linear),
        ],
    );
    // Only the (0.0 -> 1.0) pair brackets 0.5.
    approx(track.sample(0.5).x, 5.0, 1e-6);
    // Nothing brackets 1.5: last keyframe in track order.
    assert_eq!(track.sample(1.5).x, 10.0);
}

/// it should pin the easing curves at their documented points
#[test]
fn easing_fixed_points() {
    assert_eq!(ease_in(0.0), 0.0);
    approx(ease_in(1.0), 1.0, 0.0);
    assert_eq!(ease_out(0.0), 0.0);
    approx(ease_out(1.0), 1.0, 0.0);
    approx(ease_in_out(0.5), 0.5, 1e-6);
    approx(ease_in_out(0.25), 0.125, 1e-6);
    approx(ease_in_out(0.75), 0.9375, 1e-6);
    for e in ALL_EASINGS {
        assert_eq!(e.apply(0.0), 0.0);
        approx(e.apply(1.0), 1.0, 0.0);
    }
    let mut prev = smoothstep(0.0);
    for i in 1..=256 {
        let v = Easing::Bezier.apply(i as f32 / 256.0);
        assert!(v >= prev);
        prev = v;
    }
}
