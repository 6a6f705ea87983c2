//! Cubic-bezier easing curves.

use std::time::Duration;

/// Curve used by the lightbox chrome.
pub const LIGHTBOX_EASING: CubicBezier = CubicBezier {
    x1: 0.075,
    y1: 0.82,
    x2: 0.165,
    y2: 1.0,
};

/// Length of one lightbox chrome transition.
pub const LIGHTBOX_DURATION: Duration = Duration::from_millis(300);

const NEWTON_ITERATIONS: usize = 8;
const BISECTION_ITERATIONS: usize = 32;
const EPSILON: f32 = 1e-6;

/// A CSS-style cubic bezier with endpoints fixed at (0, 0) and (1, 1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
}

impl CubicBezier {
    /// `x1` and `x2` are clamped to [0, 1] so the curve stays a function of x.
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self {
            x1: x1.clamp(0.0, 1.0),
            y1,
            x2: x2.clamp(0.0, 1.0),
            y2,
        }
    }

    /// Eased progress for linear progress `t`, clamped to [0, 1].
    pub fn solve(&self, t: f32) -> f32 {
        let x = t.clamp(0.0, 1.0);
        if x == 0.0 || x == 1.0 {
            return x;
        }
        Self::sample(self.y1, self.y2, self.param_for_x(x))
    }

    /// Curve parameter `u` such that `x(u) == x`.
    fn param_for_x(&self, x: f32) -> f32 {
        let mut u = x;
        for _ in 0..NEWTON_ITERATIONS {
            let err = Self::sample(self.x1, self.x2, u) - x;
            if err.abs() < EPSILON {
                return u;
            }
            let slope = Self::slope(self.x1, self.x2, u);
            if slope.abs() < EPSILON {
                break;
            }
            u -= err / slope;
        }

        let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
        u = x;
        for _ in 0..BISECTION_ITERATIONS {
            let sample = Self::sample(self.x1, self.x2, u);
            if (sample - x).abs() < EPSILON {
                break;
            }
            if sample < x {
                lo = u;
            } else {
                hi = u;
            }
            u = (lo + hi) / 2.0;
        }
        u
    }

    // B(u) = 3(1-u)^2 u p1 + 3(1-u) u^2 p2 + u^3
    fn sample(p1: f32, p2: f32, u: f32) -> f32 {
        let a = 1.0 - 3.0 * p2 + 3.0 * p1;
        let b = 3.0 * p2 - 6.0 * p1;
        let c = 3.0 * p1;
        ((a * u + b) * u + c) * u
    }

    fn slope(p1: f32, p2: f32, u: f32) -> f32 {
        let a = 1.0 - 3.0 * p2 + 3.0 * p1;
        let b = 3.0 * p2 - 6.0 * p1;
        let c = 3.0 * p1;
        (3.0 * a * u + 2.0 * b) * u + c
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn endpoints_are_fixed() {
        assert_eq!(LIGHTBOX_EASING.solve(0.0), 0.0);
        assert_eq!(LIGHTBOX_EASING.solve(1.0), 1.0);
        assert_eq!(LIGHTBOX_EASING.solve(-3.0), 0.0);
        assert_eq!(LIGHTBOX_EASING.solve(7.0), 1.0);
    }

    #[test]
    fn diagonal_control_points_are_linear() {
        let linear = CubicBezier::new(0.25, 0.25, 0.75, 0.75);
        for i in 0..=20 {
            let t = i as f32 / 20.0;
            assert!(close(linear.solve(t), t), "t = {}", t);
        }
    }

    #[test]
    fn lightbox_curve_is_monotonic_and_front_loaded() {
        let mut previous = 0.0;
        for i in 1..=100 {
            let value = LIGHTBOX_EASING.solve(i as f32 / 100.0);
            assert!(value >= previous - 1e-4);
            previous = value;
        }
        // Ease-out: most of the travel happens early.
        assert!(LIGHTBOX_EASING.solve(0.25) > 0.75);
    }

    #[test]
    fn css_ease_matches_reference_value() {
        // `ease` at x = 0.5 is ~0.8024.
        let ease = CubicBezier::new(0.25, 0.1, 0.25, 1.0);
        assert!(close(ease.solve(0.5), 0.8024));
    }

    #[test]
    fn duration_is_300ms() {
        assert_eq!(LIGHTBOX_DURATION.as_millis(), 300);
    }
}
