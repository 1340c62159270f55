//! Interpolation helpers:
//! - lerp_f32 (scalar blend)
//! - quadratic ease in / ease out
//! - ease in-out (quadratic entry, cubic exit past the midpoint)
//! - smoothstep (used for the `bezier` kind)

/// Linear interpolation of scalars. Exact at both `t == 0` and `t == 1`.
#[inline]
pub fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a * (1.0 - t) + b * t
}

#[inline]
pub fn ease_in(t: f32) -> f32 {
    t * t
}

#[inline]
pub fn ease_out(t: f32) -> f32 {
    1.0 - (1.0 - t) * (1.0 - t)
}

/// `2t²` below 0.5, `1 - (-2t + 2)³ / 2` from there on.
#[inline]
pub fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// `t²(3 - 2t)`.
#[inline]
pub fn smoothstep(t: f32) -> f32 {
    t * t * (3.0 - 2.0 * t)
}
