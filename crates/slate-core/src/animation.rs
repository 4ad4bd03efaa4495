#![forbid(unsafe_code)]

//! Motion constants and easing curves shared by animated components.
//!
//! Durations live here so that every transition in the library agrees on
//! timing. Curves are CSS-style cubic Béziers evaluated on the CPU so hosts
//! without a style engine can still sample them.

use std::time::Duration;

// ---------------------------------------------------------------------------
// Durations
// ---------------------------------------------------------------------------

/// Length of every enter/exit phase transition.
pub const TRANSITION_DURATION: Duration = Duration::from_millis(240);

/// Length of the close keyframes played while a component is exiting.
///
/// Shorter than [`TRANSITION_DURATION`]: the content fades first, then the
/// surrounding space finishes collapsing.
pub const CLOSE_KEYFRAME_DURATION: Duration = Duration::from_millis(120);

// ---------------------------------------------------------------------------
// Easing
// ---------------------------------------------------------------------------

/// Easing function signature: maps `t` in [0, 1] to an output value.
pub type EasingFn = fn(f32) -> f32;

/// Identity easing (constant velocity).
#[inline]
pub fn linear(t: f32) -> f32 {
    t.clamp(0.0, 1.0)
}

/// A cubic Bézier timing curve anchored at (0, 0) and (1, 1).
///
/// Control point x coordinates are expected in [0, 1]; y coordinates may
/// leave that range to express overshoot (see [`SPRING`]).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
}

/// Fast start, gentle landing. Used for layout collapse.
pub const DECELERATION: CubicBezier = CubicBezier::new(0.0, 0.0, 0.2, 1.0);

/// Gentle start, abrupt end. Used for exit keyframes.
pub const ACCELERATION: CubicBezier = CubicBezier::new(0.4, 0.0, 1.0, 1.0);

/// Slight overshoot past the target before settling. Used for enter keyframes.
pub const SPRING: CubicBezier = CubicBezier::new(0.175, 0.885, 0.320, 1.175);

const NEWTON_ITERATIONS: usize = 8;
const BISECTION_ITERATIONS: usize = 32;
const EPSILON: f32 = 1e-6;

impl CubicBezier {
    /// Create a curve from its two inner control points.
    #[must_use]
    pub const fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Control points as `(x1, y1, x2, y2)`.
    #[must_use]
    pub const fn control_points(&self) -> (f32, f32, f32, f32) {
        (self.x1, self.y1, self.x2, self.y2)
    }

    /// One coordinate of the curve at parameter `t`.
    fn sample(a1: f32, a2: f32, t: f32) -> f32 {
        let u = 1.0 - t;
        3.0 * u * u * t * a1 + 3.0 * u * t * t * a2 + t * t * t
    }

    /// Derivative of [`Self::sample`] with respect to `t`.
    fn slope(a1: f32, a2: f32, t: f32) -> f32 {
        let u = 1.0 - t;
        3.0 * u * u * a1 + 6.0 * u * t * (a2 - a1) + 3.0 * t * t * (1.0 - a2)
    }

    /// Find the curve parameter whose x coordinate is `x`.
    fn solve_t(&self, x: f32) -> f32 {
        let mut t = x;
        for _ in 0..NEWTON_ITERATIONS {
            let err = Self::sample(self.x1, self.x2, t) - x;
            if err.abs() < EPSILON {
                return t;
            }
            let d = Self::slope(self.x1, self.x2, t);
            if d.abs() < EPSILON {
                break;
            }
            t = (t - err / d).clamp(0.0, 1.0);
        }

        let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
        t = x;
        for _ in 0..BISECTION_ITERATIONS {
            let v = Self::sample(self.x1, self.x2, t);
            if (v - x).abs() < EPSILON {
                break;
            }
            if v < x {
                lo = t;
            } else {
                hi = t;
            }
            t = (lo + hi) / 2.0;
        }
        t
    }

    /// Evaluate the curve at progress `x` (clamped to [0, 1]).
    #[must_use]
    pub fn apply(&self, x: f32) -> f32 {
        let x = x.clamp(0.0, 1.0);
        if x <= 0.0 {
            return 0.0;
        }
        if x >= 1.0 {
            return 1.0;
        }
        let t = self.solve_t(x);
        Self::sample(self.y1, self.y2, t)
    }
}

// ---------------------------------------------------------------------------
// Progress helpers
// ---------------------------------------------------------------------------

/// Linear progress of `elapsed` through `duration`, clamped to [0, 1].
///
/// A zero duration is treated as already complete.
#[must_use]
pub fn progress(elapsed: Duration, duration: Duration) -> f32 {
    if duration.is_zero() {
        return 1.0;
    }
    let t = elapsed.as_secs_f64() / duration.as_secs_f64();
    (t as f32).clamp(0.0, 1.0)
}

/// Interpolate between `from` and `to` by `t` (not clamped, so overshooting
/// curves carry through).
#[inline]
#[must_use]
pub fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f32 = 1e-3;

    #[test]
    fn endpoints_are_exact() {
        for curve in [DECELERATION, ACCELERATION, SPRING] {
            assert_eq!(curve.apply(0.0), 0.0);
            assert_eq!(curve.apply(1.0), 1.0);
        }
    }

    #[test]
    fn out_of_range_input_is_clamped() {
        assert_eq!(DECELERATION.apply(-1.0), 0.0);
        assert_eq!(DECELERATION.apply(2.0), 1.0);
    }

    #[test]
    fn linear_bezier_is_identity() {
        let curve = CubicBezier::new(0.0, 0.0, 1.0, 1.0);
        for i in 0..=10 {
            let x = i as f32 / 10.0;
            assert!((curve.apply(x) - x).abs() < TOL, "x={x}");
        }
    }

    #[test]
    fn deceleration_runs_ahead_of_linear() {
        assert!(DECELERATION.apply(0.5) > 0.5);
    }

    #[test]
    fn acceleration_lags_behind_linear() {
        assert!(ACCELERATION.apply(0.5) < 0.5);
    }

    #[test]
    fn spring_overshoots() {
        let peak = (1..100)
            .map(|i| SPRING.apply(i as f32 / 100.0))
            .fold(f32::MIN, f32::max);
        assert!(peak > 1.0, "peak={peak}");
    }

    #[test]
    fn deceleration_is_monotonic() {
        let mut prev = 0.0;
        for i in 1..=100 {
            let v = DECELERATION.apply(i as f32 / 100.0);
            assert!(v + TOL >= prev);
            prev = v;
        }
    }

    #[test]
    fn progress_clamps_and_handles_zero() {
        assert_eq!(progress(Duration::ZERO, TRANSITION_DURATION), 0.0);
        assert_eq!(progress(Duration::from_millis(120), TRANSITION_DURATION), 0.5);
        assert_eq!(progress(Duration::from_secs(1), TRANSITION_DURATION), 1.0);
        assert_eq!(progress(Duration::ZERO, Duration::ZERO), 1.0);
    }

    #[test]
    fn lerp_basics() {
        assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
        assert_eq!(lerp(-120.0, 0.0, 1.0), 0.0);
    }

    #[test]
    fn close_keyframes_fit_inside_transition() {
        assert!(CLOSE_KEYFRAME_DURATION < TRANSITION_DURATION);
    }
}
