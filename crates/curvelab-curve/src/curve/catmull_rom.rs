//! Catmull-Rom spline with quadratic end conditions.
//!
//! Interior tangents are centered differences. On an open curve the first
//! segment has no left neighbour and the last has no right one; there the
//! missing tangent is taken from the quadratic through the three nearest points.

use curvelab_core::Result;
use curvelab_math::{Point2, QuadraticBasis, Vector2};

use super::{hermite_as_bezier, ControlPolygon, SegmentCurve};
use crate::scheme::CurveScheme;

#[derive(Debug, Clone)]
pub struct CatmullRomCurve {
    polygon: ControlPolygon,
    basis: QuadraticBasis,
}

impl CatmullRomCurve {
    pub fn fit(points: &[Point2], closed: bool) -> Result<Self> {
        Ok(Self {
            polygon: ControlPolygon::new(points, closed, CurveScheme::CatmullRom)?,
            basis: QuadraticBasis::new()?,
        })
    }

    /// Start and end tangents of segment `segment`.
    pub fn tangents(&self, segment: usize) -> (Vector2, Vector2) {
        let p = &self.polygon;
        let open = !p.is_closed();
        let k = segment as isize;
        let n = p.len() as isize;

        let start = if open && k == 0 {
            self.basis
                .fit(p.at(k), p.at(k + 1), p.at(k + 2))
                .derivative_at(0.0)
        } else {
            (p.at(k + 1) - p.at(k - 1)) * 0.5
        };

        let end = if open && k >= n - 2 {
            self.basis
                .fit(p.at(k - 1), p.at(k), p.at(k + 1))
                .derivative_at(2.0)
        } else {
            (p.at(k + 2) - p.at(k)) * 0.5
        };

        (start, end)
    }
}

impl SegmentCurve for CatmullRomCurve {
    fn point_at(&self, segment: usize, t: f64) -> Point2 {
        let (p0, p3) = self.polygon.segment_ends(segment);
        let (v0, v1) = self.tangents(segment);
        hermite_as_bezier(p0, v0, p3, v1, t)
    }

    fn segment_count(&self) -> usize {
        self.polygon.segment_count()
    }

    fn is_closed(&self) -> bool {
        self.polygon.is_closed()
    }
}
