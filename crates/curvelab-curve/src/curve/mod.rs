//! Per-scheme curve fits.
//!
//! Every scheme fits its coefficients once from a control polygon and then
//! answers `point_at(segment, t)` for any number of samples.

mod bezier;
mod bspline;
mod catmull_rom;
mod hermite;
mod lagrange;
mod linear;
mod natural;
mod overhauser;

use curvelab_core::{CurveError, Result};
use curvelab_math::{Point2, Vector2};

use crate::scheme::CurveScheme;

pub use bezier::BezierCurve;
pub use bspline::{uniform_cubic_weights, UniformBSpline};
pub use catmull_rom::CatmullRomCurve;
pub use hermite::HermiteCurve;
pub use lagrange::{LagrangeCurve, LAGRANGE_STABLE_POINTS};
pub use linear::LinearCurve;
pub use natural::{CubicSegment, NaturalSpline};
pub use overhauser::{OverhauserBlendCurve, OverhauserCurve};

/// A curve made of consecutive segments, each parameterized over `[0, 1]`.
pub trait SegmentCurve: Send + Sync {
    /// Evaluate segment `segment` at local parameter `t`.
    ///
    /// # Panics
    ///
    /// Implementations that store per-segment coefficients may panic when
    /// `segment >= segment_count()`. [`CurveEvaluator`](crate::CurveEvaluator)
    /// checks every sample before calling this.
    fn point_at(&self, segment: usize, t: f64) -> Point2;

    /// Number of segments the fit defines.
    fn segment_count(&self) -> usize;

    /// Whether the last segment wraps back to the first control point.
    fn is_closed(&self) -> bool {
        false
    }
}

/// Validated copy of the control points with index helpers.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlPolygon {
    points: Vec<Point2>,
    closed: bool,
}

impl ControlPolygon {
    /// Check the point count and coordinates against the needs of `scheme`.
    pub fn new(points: &[Point2], closed: bool, scheme: CurveScheme) -> Result<Self> {
        let required = scheme.min_points(closed);
        if points.len() < required {
            return Err(CurveError::Precondition(format!(
                "{} curve{} needs at least {} control points, got {}",
                scheme,
                if closed { " (closed)" } else { "" },
                required,
                points.len()
            )));
        }
        if let Some(i) = points.iter().position(|p| !p.is_finite()) {
            return Err(CurveError::Precondition(format!(
                "control point {i} has a non-finite coordinate: {:?}",
                points[i]
            )));
        }
        Ok(Self {
            points: points.to_vec(),
            closed,
        })
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    /// `n - 1` segments when open, `n` when the polygon wraps.
    pub fn segment_count(&self) -> usize {
        if self.closed {
            self.points.len()
        } else {
            self.points.len() - 1
        }
    }

    /// Point at a signed index: wraps around when closed, clamps when open.
    pub fn at(&self, index: isize) -> Point2 {
        let n = self.points.len() as isize;
        let i = if self.closed {
            index.rem_euclid(n)
        } else {
            index.clamp(0, n - 1)
        };
        self.points[i as usize]
    }

    /// First and last point of segment `k`.
    pub fn segment_ends(&self, k: usize) -> (Point2, Point2) {
        let k = k as isize;
        (self.at(k), self.at(k + 1))
    }
}

/// Cubic Bernstein blend of four control points.
pub fn cubic_bezier(p0: Point2, p1: Point2, p2: Point2, p3: Point2, t: f64) -> Point2 {
    let t1 = 1.0 - t;
    t1 * t1 * t1 * p0 + 3.0 * t1 * t1 * t * p1 + 3.0 * t1 * t * t * p2 + t * t * t * p3
}

/// Cubic through `p0` and `p3` with end tangents `v0` and `v1`, via Bezier handles.
pub fn hermite_as_bezier(p0: Point2, v0: Vector2, p3: Point2, v1: Vector2, t: f64) -> Point2 {
    let p1 = p0 + v0 / 3.0;
    let p2 = p3 - v1 / 3.0;
    cubic_bezier(p0, p1, p2, p3, t)
}
