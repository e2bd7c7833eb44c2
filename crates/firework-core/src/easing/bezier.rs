//! Cubic-bezier timing curves
//!
//! Evaluates CSS-style `cubic-bezier(x1, y1, x2, y2)` curves: the curve runs
//! from (0, 0) to (1, 1) and the two inner control points shape it. Solving
//! for the curve parameter at a given x uses a precomputed sample table for
//! the initial guess, Newton-Raphson for refinement, and bisection when the
//! slope is too flat for Newton to be trusted.

use crate::error::{Error, Result};

/// Number of precomputed x samples along the curve parameter.
const SPLINE_TABLE_SIZE: usize = 11;
const SAMPLE_STEP_SIZE: f64 = 1.0 / (SPLINE_TABLE_SIZE as f64 - 1.0);

const NEWTON_ITERATIONS: usize = 4;
const NEWTON_MIN_SLOPE: f64 = 0.001;
const SUBDIVISION_PRECISION: f64 = 0.000_000_1;
const SUBDIVISION_MAX_ITERATIONS: usize = 10;

/// Polynomial coefficients for one axis: ((a*t + b)*t + c)*t
#[inline]
fn coefficients(p1: f64, p2: f64) -> (f64, f64, f64) {
    (1.0 - 3.0 * p2 + 3.0 * p1, 3.0 * p2 - 6.0 * p1, 3.0 * p1)
}

/// Evaluate one axis of the curve at parameter `t`
#[inline]
fn calc_bezier(t: f64, p1: f64, p2: f64) -> f64 {
    let (a, b, c) = coefficients(p1, p2);
    ((a * t + b) * t + c) * t
}

/// Derivative of one axis of the curve at parameter `t`
#[inline]
fn slope(t: f64, p1: f64, p2: f64) -> f64 {
    let (a, b, c) = coefficients(p1, p2);
    3.0 * a * t * t + 2.0 * b * t + c
}

/// An immutable cubic-bezier easing curve.
///
/// Construction validates the control points and builds the sample table;
/// evaluation is pure and the value is freely shareable.
#[derive(Debug, Clone, PartialEq)]
pub struct CubicBezier {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    samples: [f64; SPLINE_TABLE_SIZE],
}

impl CubicBezier {
    /// Build a curve from its two inner control points.
    ///
    /// Fails with [`Error::InvalidControlPoints`] when `x1` or `x2` falls
    /// outside [0, 1] (the curve would not be a function of x) or when any
    /// control value is not finite.
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Result<Self> {
        let in_unit = |v: f64| (0.0..=1.0).contains(&v);
        if !in_unit(x1) || !in_unit(x2) || !y1.is_finite() || !y2.is_finite() {
            return Err(Error::InvalidControlPoints { x1, x2 });
        }

        let mut samples = [0.0; SPLINE_TABLE_SIZE];
        if x1 != y1 || x2 != y2 {
            for (i, sample) in samples.iter_mut().enumerate() {
                *sample = calc_bezier(i as f64 * SAMPLE_STEP_SIZE, x1, x2);
            }
        }

        Ok(Self {
            x1,
            y1,
            x2,
            y2,
            samples,
        })
    }

    /// The identity curve, `ease(x) == x`
    pub fn linear() -> Self {
        Self {
            x1: 0.0,
            y1: 0.0,
            x2: 1.0,
            y2: 1.0,
            samples: [0.0; SPLINE_TABLE_SIZE],
        }
    }

    /// Control points as `[x1, y1, x2, y2]`
    pub fn control_points(&self) -> [f64; 4] {
        [self.x1, self.y1, self.x2, self.y2]
    }

    /// Whether the control points collapse the curve onto the diagonal
    #[inline]
    pub fn is_linear(&self) -> bool {
        self.x1 == self.y1 && self.x2 == self.y2
    }

    /// Remap linear progress `x` (clamped to [0, 1]) through the curve.
    ///
    /// Endpoints are exact: `ease(0.0) == 0.0` and `ease(1.0) == 1.0`.
    pub fn ease(&self, x: f64) -> f64 {
        let x = x.clamp(0.0, 1.0);
        if self.is_linear() {
            return x;
        }
        if x == 0.0 {
            return 0.0;
        }
        if x == 1.0 {
            return 1.0;
        }
        calc_bezier(self.t_for_x(x), self.y1, self.y2)
    }

    /// Find the curve parameter whose x-coordinate is `x`
    fn t_for_x(&self, x: f64) -> f64 {
        let last_sample = SPLINE_TABLE_SIZE - 1;
        let mut interval_start = 0.0;
        let mut current = 1;

        while current != last_sample && self.samples[current] <= x {
            interval_start += SAMPLE_STEP_SIZE;
            current += 1;
        }
        current -= 1;

        let span = self.samples[current + 1] - self.samples[current];
        let dist = if span > 0.0 {
            (x - self.samples[current]) / span
        } else {
            0.0
        };
        let guess = interval_start + dist * SAMPLE_STEP_SIZE;

        let initial_slope = slope(guess, self.x1, self.x2);
        if initial_slope >= NEWTON_MIN_SLOPE {
            self.newton_raphson(x, guess)
        } else if initial_slope == 0.0 {
            guess
        } else {
            self.binary_subdivide(x, interval_start, interval_start + SAMPLE_STEP_SIZE)
        }
    }

    fn newton_raphson(&self, x: f64, mut guess: f64) -> f64 {
        for _ in 0..NEWTON_ITERATIONS {
            let current_slope = slope(guess, self.x1, self.x2);
            if current_slope == 0.0 {
                return guess;
            }
            let current_x = calc_bezier(guess, self.x1, self.x2) - x;
            guess -= current_x / current_slope;
        }
        guess
    }

    fn binary_subdivide(&self, x: f64, mut lo: f64, mut hi: f64) -> f64 {
        let mut t = lo + (hi - lo) / 2.0;
        for _ in 0..SUBDIVISION_MAX_ITERATIONS {
            t = lo + (hi - lo) / 2.0;
            let current_x = calc_bezier(t, self.x1, self.x2) - x;
            if current_x.abs() <= SUBDIVISION_PRECISION {
                break;
            }
            if current_x > 0.0 {
                hi = t;
            } else {
                lo = t;
            }
        }
        t
    }
}

impl Default for CubicBezier {
    fn default() -> Self {
        Self::linear()
    }
}
