//! Natural cubic splines, open and periodic.
//!
//! The slope `D[i]` at every control point is solved per axis from a banded
//! system so that the second derivative is continuous:
//!
//! - open (relaxed ends): diagonal `2, 4, ..., 4, 2`, neighbours `1`, right-hand
//!   side `3 (p[i+1] - p[i-1])` with one-sided differences at both ends;
//! - periodic: diagonal `4`, neighbours and both corners `1`, indices wrap.
//!
//! Segment `k` is then the cubic `a + b t + c t^2 + d t^3` with
//! `a = p[k]`, `b = D[k]`, `c = 3 (p[k+1] - p[k]) - 2 D[k] - D[k+1]`,
//! `d = 2 (p[k] - p[k+1]) + D[k] + D[k+1]`.

use curvelab_core::{Result, Tolerance};
use curvelab_math::{CyclicTridiagonal, Point2, Tridiagonal, Vector2};

use super::{ControlPolygon, SegmentCurve};
use crate::scheme::CurveScheme;

/// Power-basis cubic for one spline segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicSegment {
    pub a: Vector2,
    pub b: Vector2,
    pub c: Vector2,
    pub d: Vector2,
}

impl CubicSegment {
    /// Cubic from end points and end slopes.
    pub fn from_hermite(p0: Point2, d0: Vector2, p1: Point2, d1: Vector2) -> Self {
        Self {
            a: p0,
            b: d0,
            c: 3.0 * (p1 - p0) - 2.0 * d0 - d1,
            d: 2.0 * (p0 - p1) + d0 + d1,
        }
    }

    pub fn point_at(&self, t: f64) -> Point2 {
        self.a + t * (self.b + t * (self.c + t * self.d))
    }

    pub fn tangent_at(&self, t: f64) -> Vector2 {
        self.b + t * (2.0 * self.c + 3.0 * t * self.d)
    }
}

/// Natural cubic spline with solved slopes and per-segment coefficients.
#[derive(Debug, Clone)]
pub struct NaturalSpline {
    slopes: Vec<Vector2>,
    segments: Vec<CubicSegment>,
    closed: bool,
}

impl NaturalSpline {
    /// Open spline with relaxed end conditions.
    ///
    /// When `closed` is set the extra wrap segment joins `p[n-1]` to `p[0]` with
    /// the slopes solved for the open system.
    pub fn fit_open(points: &[Point2], closed: bool, tol: Tolerance) -> Result<Self> {
        let polygon = ControlPolygon::new(points, closed, CurveScheme::NaturalSpline)?;
        let n = polygon.len();

        let mut system = Tridiagonal::constant(n, 4.0, 1.0)?;
        system.diag[0] = 2.0;
        system.diag[n - 1] = 2.0;

        let rhs: Vec<Vector2> = (0..n)
            .map(|i| {
                let next = points[(i + 1).min(n - 1)];
                let prev = points[i.saturating_sub(1)];
                3.0 * (next - prev)
            })
            .collect();

        log::debug!("natural spline: solving {n}x{n} tridiagonal system per axis");
        let slopes = solve_per_axis(&rhs, |axis| system.solve(axis, tol))?;
        Ok(Self::from_slopes(&polygon, slopes))
    }

    /// Periodic spline; the segment after `p[n-1]` always wraps to `p[0]`.
    pub fn fit_periodic(points: &[Point2], tol: Tolerance) -> Result<Self> {
        let polygon = ControlPolygon::new(points, true, CurveScheme::NaturalSplineClosed)?;
        let n = polygon.len();

        let system = CyclicTridiagonal::constant(n, 4.0, 1.0)?;
        let rhs: Vec<Vector2> = (0..n)
            .map(|i| 3.0 * (points[(i + 1) % n] - points[(i + n - 1) % n]))
            .collect();

        log::debug!("natural spline: solving {n}x{n} cyclic system per axis");
        let slopes = solve_per_axis(&rhs, |axis| system.solve(axis, tol))?;
        Ok(Self::from_slopes(&polygon, slopes))
    }

    fn from_slopes(polygon: &ControlPolygon, slopes: Vec<Vector2>) -> Self {
        let segments = (0..polygon.segment_count())
            .map(|k| {
                let (p0, p1) = polygon.segment_ends(k);
                let d1 = slopes[(k + 1) % slopes.len()];
                CubicSegment::from_hermite(p0, slopes[k], p1, d1)
            })
            .collect();
        Self {
            slopes,
            segments,
            closed: polygon.is_closed(),
        }
    }

    /// Solved slope at every control point.
    pub fn slopes(&self) -> &[Vector2] {
        &self.slopes
    }

    pub fn segments(&self) -> &[CubicSegment] {
        &self.segments
    }

    /// First derivative of segment `segment` at local parameter `t`.
    ///
    /// # Panics
    ///
    /// Panics if `segment >= self.segments().len()`.
    pub fn tangent_at(&self, segment: usize, t: f64) -> Vector2 {
        self.segments[segment].tangent_at(t)
    }
}

impl SegmentCurve for NaturalSpline {
    fn point_at(&self, segment: usize, t: f64) -> Point2 {
        self.segments[segment].point_at(t)
    }

    fn segment_count(&self) -> usize {
        self.segments.len()
    }

    fn is_closed(&self) -> bool {
        self.closed
    }
}

/// Run `solve` once for the x components and once for the y components.
fn solve_per_axis<F>(rhs: &[Vector2], solve: F) -> Result<Vec<Vector2>>
where
    F: Fn(&[f64]) -> Result<Vec<f64>>,
{
    let xs: Vec<f64> = rhs.iter().map(|v| v.x).collect();
    let ys: Vec<f64> = rhs.iter().map(|v| v.y).collect();
    let sx = solve(&xs)?;
    let sy = solve(&ys)?;
    Ok(sx.into_iter().zip(sy).map(|(x, y)| Vector2::new(x, y)).collect())
}
