//! Superellipse outline generation
//!
//! Samples the curve `|x/a|^n + |y/b|^n = 1` at evenly spaced angles and
//! insets every coordinate so that a stroke drawn centred on the outline is
//! not clipped at the element edge.

use std::f64::consts::PI;

use crate::geometry::{BoundaryPath, Point};

/// Exponent used when the configured smoothness is not a number
pub const DEFAULT_EXPONENT: f64 = 4.0;

/// Smallest exponent accepted before `2 / n` blows up
pub const MIN_EXPONENT: f64 = 0.000_000_000_01;

/// Above this the outline is visually a rectangle
pub const MAX_EXPONENT: f64 = 100.0;

/// Number of samples around the full outline
pub const DEFAULT_STEPS: usize = 360;

/// Fewest samples that still hit all four axis extremes
pub const MIN_STEPS: usize = 4;

/// Apply the exponent policy: NaN becomes [`DEFAULT_EXPONENT`], everything
/// else is clamped to `[MIN_EXPONENT, MAX_EXPONENT]`.
pub fn clamp_exponent(n: f64) -> f64 {
    if n.is_nan() {
        return DEFAULT_EXPONENT;
    }
    n.clamp(MIN_EXPONENT, MAX_EXPONENT)
}

/// Distance each coordinate is pulled towards the origin for a given stroke width
///
/// Half the stroke lies outside the outline, so moving the outline in by
/// half the width keeps the whole stroke inside the element.
pub fn stroke_inset(stroke_width: f64) -> f64 {
    stroke_width / 2.0
}

/// Sign with `sign(0) == 0`, unlike `f64::signum`
fn sign(v: f64) -> f64 {
    if v > 0.0 {
        1.0
    } else if v < 0.0 {
        -1.0
    } else {
        v
    }
}

/// Move a coordinate towards the origin; zero moves in the positive direction
fn inset(v: f64, offset: f64) -> f64 {
    if v > 0.0 {
        v - offset
    } else {
        v + offset
    }
}

/// A superellipse sized to an element and inset for its border
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Superellipse {
    /// Horizontal radius (half the element width)
    pub a: f64,
    /// Vertical radius (half the element height)
    pub b: f64,
    /// Smoothness exponent, clamped when sampling
    pub n: f64,
    /// Border width the outline is inset for
    pub stroke_width: f64,
    steps: usize,
}

impl Superellipse {
    pub fn new(a: f64, b: f64, n: f64, stroke_width: f64) -> Self {
        Self {
            a,
            b,
            n,
            stroke_width,
            steps: DEFAULT_STEPS,
        }
    }

    /// Set the sampling density (at least [`MIN_STEPS`])
    pub fn with_steps(mut self, steps: usize) -> Self {
        self.steps = steps.max(MIN_STEPS);
        self
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    /// The exponent actually used for sampling
    pub fn exponent(&self) -> f64 {
        clamp_exponent(self.n)
    }

    /// Point at angle `t` (radians), inset for the stroke
    pub fn point_at(&self, t: f64) -> Point {
        let m2 = 2.0 / self.exponent();
        let offset = stroke_inset(self.stroke_width);

        let (sin_t, cos_t) = t.sin_cos();
        let x = cos_t.abs().powf(m2) * self.a * sign(cos_t);
        let y = sin_t.abs().powf(m2) * self.b * sign(sin_t);

        Point::new(inset(x, offset), inset(y, offset))
    }

    /// Sample the full outline in increasing-angle order
    pub fn boundary(&self) -> BoundaryPath {
        let step = (2.0 * PI) / self.steps as f64;
        let points = (0..self.steps)
            .map(|i| self.point_at(i as f64 * step))
            .collect();
        BoundaryPath::new(points)
    }
}

/// Generate the 360-point outline for half extents `a`/`b`, exponent `n`
/// and border width `stroke_width`.
pub fn generate_boundary(a: f64, b: f64, n: f64, stroke_width: f64) -> BoundaryPath {
    Superellipse::new(a, b, n, stroke_width).boundary()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn close(p: Point, x: f64, y: f64, eps: f64) -> bool {
        (p.x - x).abs() <= eps && (p.y - y).abs() <= eps
    }

    #[test]
    fn test_clamp_exponent() {
        assert_eq!(clamp_exponent(f64::NAN), 4.0);
        assert_eq!(clamp_exponent(1000.0), 100.0);
        assert_eq!(clamp_exponent(0.0), MIN_EXPONENT);
        assert_eq!(clamp_exponent(-3.0), MIN_EXPONENT);
        assert_eq!(clamp_exponent(f64::INFINITY), 100.0);
        assert_eq!(clamp_exponent(7.5), 7.5);
    }

    #[test]
    fn test_sign_of_zero_is_zero() {
        assert_eq!(sign(0.0), 0.0);
        assert_eq!(sign(2.5), 1.0);
        assert_eq!(sign(-0.1), -1.0);
    }

    #[test]
    fn test_inset_moves_towards_origin() {
        assert_eq!(inset(10.0, 1.0), 9.0);
        assert_eq!(inset(-10.0, 1.0), -9.0);
        assert_eq!(inset(0.0, 1.0), 1.0);
    }

    #[test]
    fn test_always_360_points() {
        for n in [f64::NAN, 0.0, 0.5, 1.0, 2.0, 4.0, 100.0, 1e6] {
            assert_eq!(generate_boundary(50.0, 30.0, n, 1.0).len(), 360);
        }
    }

    #[test]
    fn test_squircle_axis_points() {
        let path = generate_boundary(50.0, 50.0, 4.0, 0.0);
        let pts = path.points();
        assert!(close(pts[0], 50.0, 0.0, EPS));
        assert!(close(pts[90], 0.0, 50.0, 1e-5));
        assert!(close(pts[180], -50.0, 0.0, 1e-5));
        assert!(close(pts[270], 0.0, -50.0, 1e-5));
    }

    #[test]
    fn test_ellipse_when_exponent_is_two() {
        let (a, b) = (100.0, 50.0);
        let path = generate_boundary(a, b, 2.0, 0.0);
        let step = 2.0 * PI / 360.0;
        for (i, p) in path.iter().enumerate() {
            let t = i as f64 * step;
            assert!(close(*p, a * t.cos(), b * t.sin(), 1e-12), "point {i}: {p:?}");
        }
    }

    #[test]
    fn test_nan_exponent_matches_default() {
        assert_eq!(
            generate_boundary(40.0, 25.0, f64::NAN, 2.0),
            generate_boundary(40.0, 25.0, 4.0, 2.0)
        );
    }

    #[test]
    fn test_exponent_clamping_is_exact() {
        assert_eq!(
            generate_boundary(40.0, 25.0, 1000.0, 1.0),
            generate_boundary(40.0, 25.0, 100.0, 1.0)
        );
        let collapsed = generate_boundary(40.0, 25.0, 0.0, 1.0);
        assert_eq!(collapsed, generate_boundary(40.0, 25.0, MIN_EXPONENT, 1.0));
        assert!(collapsed.iter().all(|p| p.x.is_finite() && p.y.is_finite()));
    }

    #[test]
    fn test_stroke_inset_pinned() {
        // Canonical input: 100x100 element, squircle, 2px border.
        let path = generate_boundary(50.0, 50.0, 4.0, 2.0);
        let pts = path.points();

        // sin(0) is exactly zero, and a zero coordinate is pushed positive.
        assert!(close(pts[0], 49.0, 1.0, EPS));

        // Elsewhere on the axes the sampled coordinate is only nearly zero,
        // so the push goes whichever way its rounding sign points.
        assert!((pts[90].x.abs() - 1.0).abs() < 1e-5 && (pts[90].y - 49.0).abs() < 1e-5);
        assert!((pts[180].x + 49.0).abs() < 1e-5 && (pts[180].y.abs() - 1.0).abs() < 1e-5);
        assert!((pts[270].x.abs() - 1.0).abs() < 1e-5 && (pts[270].y + 49.0).abs() < 1e-5);

        // 45 degrees: |cos t|^(1/2) = 2^(-1/4)
        let diag = 50.0 * 2f64.powf(-0.25) - 1.0;
        assert!(close(pts[45], diag, diag, 1e-9), "{:?}", pts[45]);
        assert!(close(pts[135], -diag, diag, 1e-9), "{:?}", pts[135]);
    }

    #[test]
    fn test_with_steps() {
        let shape = Superellipse::new(10.0, 10.0, 4.0, 0.0).with_steps(8);
        assert_eq!(shape.boundary().len(), 8);
        assert_eq!(Superellipse::new(10.0, 10.0, 4.0, 0.0).with_steps(1).steps(), MIN_STEPS);
    }

    #[test]
    fn test_degenerate_extents() {
        let path = generate_boundary(0.0, 20.0, 4.0, 0.0);
        assert_eq!(path.len(), 360);
        assert!(path.iter().all(|p| p.x == 0.0));
    }
}
