use skelrig_core::{AttachmentPoint, Bone, BoneGraph, RigError};

fn approx(a: f32, b: f32, eps: f32) {
    assert!((a - b).abs() <= eps, "left={a} right={b} eps={eps}");
}

fn root(name: &str, x: f32, y: f32, length: f32, angle: f32) -> Bone {
    Bone::new(name, None, x, y, length, angle)
}

fn child(name: &str, parent: &str, at: AttachmentPoint, x: f32, y: f32, angle: f32) -> Bone {
    Bone::new(name, Some(parent.to_string()), x, y, 10.0, angle).with_attachment(at)
}

/// it should attach an END child at the tip of the parent segment
#[test]
fn end_attachment_at_parent_tip() {
    let mut g = BoneGraph::new(vec![
        root("p", 0.0, 0.0, 10.0, 0.0),
        child("c", "p", AttachmentPoint::End, 0.0, 0.0, 0.0),
    ])
    .unwrap();
    g.recompute_world_transforms();
    let c = g.get("c").unwrap();
    approx(c.world_x, 10.0, 1e-6);
    approx(c.world_y, 0.0, 1e-6);
    approx(c.world_rotation, 0.0, 1e-6);
}

/// it should attach a START child at the parent pivot plus its unrotated offset
#[test]
fn start_attachment_with_offset() {
    let mut g = BoneGraph::new(vec![
        root("p", 5.0, 5.0, 10.0, 90.0),
        child("c", "p", AttachmentPoint::Start, 2.0, 3.0, 15.0),
    ])
    .unwrap();
    g.recompute_world_transforms();
    let c = g.get("c").unwrap();
    // Offset is not rotated by the parent's 90 degrees.
    approx(c.world_x, 7.0, 1e-6);
    approx(c.world_y, 8.0, 1e-6);
    approx(c.world_rotation, 105.0, 1e-5);
}

/// it should compose rotation additively down a chain and place tips accordingly
#[test]
fn chain_rotation_composes() {
    let mut g = BoneGraph::new(vec![
        child("c2", "c1", AttachmentPoint::End, 0.0, 0.0, 45.0),
        child("c1", "p", AttachmentPoint::End, 0.0, 0.0, 45.0),
        root("p", 0.0, 0.0, 10.0, 0.0),
    ])
    .unwrap();
    g.recompute_world_transforms();
    let c1 = g.get("c1").unwrap();
    approx(c1.world_x, 10.0, 1e-5);
    approx(c1.world_rotation, 45.0, 1e-5);
    let c2 = g.get("c2").unwrap();
    let d = 10.0 * std::f32::consts::FRAC_1_SQRT_2;
    approx(c2.world_x, 10.0 + d, 1e-4);
    approx(c2.world_y, d, 1e-4);
    approx(c2.world_rotation, 90.0, 1e-5);
}

/// it should copy root local pose into world pose and leave world_scale alone
#[test]
fn root_world_equals_local_for_any_scale() {
    let mut g = BoneGraph::new(vec![root("r", 3.0, -4.0, 1.0, 30.0)]).unwrap();
    g.get_mut("r").unwrap().world_scale = 2.5;
    g.get_mut("r").unwrap().x = 7.0;
    g.recompute_world_transforms();
    let r = g.get("r").unwrap();
    assert_eq!((r.world_x, r.world_y, r.world_rotation), (7.0, -4.0, 30.0));
    assert_eq!(r.world_scale, 2.5);
}

/// it should ignore inconsistent children lists and follow parent links
#[test]
fn children_lists_are_informational() {
    let mut p = root("p", 0.0, 0.0, 10.0, 0.0);
    p.children = vec!["nobody".into()];
    let mut g = BoneGraph::new(vec![p, child("c", "p", AttachmentPoint::End, 0.0, 1.0, 0.0)]).unwrap();
    g.recompute_world_transforms();
    approx(g.get("c").unwrap().world_y, 1.0, 1e-6);
}

/// it should reject a parent cycle at construction time
#[test]
fn cycle_rejected() {
    let err = BoneGraph::new(vec![
        root("hip", 0.0, 0.0, 1.0, 0.0),
        child("thigh", "shin", AttachmentPoint::End, 0.0, 0.0, 0.0),
        child("shin", "thigh", AttachmentPoint::End, 0.0, 0.0, 0.0),
        child("foot", "shin", AttachmentPoint::End, 0.0, 0.0, 0.0),
    ])
    .unwrap_err();
    assert!(err.is_fatal());
    let RigError::ConfigurationCycle { bones } = err else {
        panic!("expected ConfigurationCycle");
    };
    assert!(!bones.contains(&"foot".to_string()));
    assert!(!bones.contains(&"hip".to_string()));
}

/// it should produce skeleton segments from pivot to tip
#[test]
fn segments_follow_world_pose() {
    let mut g = BoneGraph::new(vec![root("r", 1.0, 1.0, 2.0, 90.0)]).unwrap();
    g.recompute_world_transforms();
    let segs = g.segments();
    assert_eq!(segs.len(), 1);
    assert_eq!(segs[0].start, [1.0, 1.0]);
    approx(segs[0].end[0], 1.0, 1e-6);
    approx(segs[0].end[1], 3.0, 1e-6);
}
