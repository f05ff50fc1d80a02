//! Easing curves used by timeline ramps.

/// Identifies the curve a ramp uses to map elapsed fraction to progress.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Easing {
    Linear,
    /// Smooth start and end: `4t³` below the midpoint, mirrored above.
    InOutCubic,
    /// `t^k`; larger `k` is steeper near the end.
    InPow(f32),
}

impl Easing {
    /// Apply the curve to `t`, clamped to `[0, 1]` first.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::InOutCubic => ease_in_out_cubic(t),
            Easing::InPow(k) => t.powf(k as f64),
        }
    }
}

#[inline]
pub fn ease_in_out_cubic(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}
