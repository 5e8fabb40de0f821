//! Easing curves for numeric transitions.

/// Cubic ease-out: fast start, slow finish. `p` is clamped into `[0, 1]`.
pub fn ease_out_cubic(p: f64) -> f64 {
    let p = p.clamp(0.0, 1.0);
    1.0 - (1.0 - p).powi(3)
}

/// Value at progress `p` of an ease-out transition from `source` to `target`.
pub fn interpolate(source: f64, target: f64, p: f64) -> f64 {
    source + (target - source) * ease_out_cubic(p)
}
