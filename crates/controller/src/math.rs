//! Interpolation helpers shared by the controller and the scene.

/// Linear interpolation from `from` to `to` by factor `t`.
///
/// `t` is not clamped. The smoothing code calls this with `rate * dt`
/// every frame, re-targeting each time, which gives the usual exponential
/// ease toward the target.
#[inline]
pub fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}
