//! Hermite segments with constant end tangents.
//!
//! The tangents are fixed by the caller's [`HermiteTangents`] rather than
//! derived from neighbouring points, so every segment leaves its start point
//! and enters its end point with the same velocity.

use curvelab_core::Result;
use curvelab_math::Point2;

use super::{hermite_as_bezier, ControlPolygon, SegmentCurve};
use crate::config::HermiteTangents;
use crate::scheme::CurveScheme;

#[derive(Debug, Clone)]
pub struct HermiteCurve {
    polygon: ControlPolygon,
    tangents: HermiteTangents,
}

impl HermiteCurve {
    pub fn fit(points: &[Point2], closed: bool, tangents: HermiteTangents) -> Result<Self> {
        Ok(Self {
            polygon: ControlPolygon::new(points, closed, CurveScheme::Hermite)?,
            tangents,
        })
    }
}

impl SegmentCurve for HermiteCurve {
    fn point_at(&self, segment: usize, t: f64) -> Point2 {
        let (p0, p3) = self.polygon.segment_ends(segment);
        hermite_as_bezier(p0, self.tangents.start, p3, self.tangents.end, t)
    }

    fn segment_count(&self) -> usize {
        self.polygon.segment_count()
    }

    fn is_closed(&self) -> bool {
        self.polygon.is_closed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use curvelab_math::dvec2;

    #[test]
    fn test_hermite_interpolates_segment_ends() {
        let pts = [dvec2(0.0, 0.0), dvec2(100.0, 50.0), dvec2(200.0, 0.0)];
        let curve = HermiteCurve::fit(&pts, false, HermiteTangents::default()).unwrap();
        assert_eq!(curve.point_at(0, 0.0), pts[0]);
        assert!((curve.point_at(0, 1.0) - pts[1]).length() < 1e-12);
        assert!((curve.point_at(1, 1.0) - pts[2]).length() < 1e-12);
    }

    #[test]
    fn test_hermite_uses_constant_tangents() {
        let tangents = HermiteTangents::new(dvec2(30.0, 0.0), dvec2(30.0, 0.0));
        let pts = [dvec2(0.0, 0.0), dvec2(30.0, 0.0)];
        let curve = HermiteCurve::fit(&pts, false, tangents).unwrap();
        // Tangents equal to the chord give a uniformly parameterized line.
        let p = curve.point_at(0, 0.25);
        assert!((p - dvec2(7.5, 0.0)).length() < 1e-12);
    }

    #[test]
    fn test_hermite_segment_shape_ignores_neighbours() {
        let a = [dvec2(0.0, 0.0), dvec2(10.0, 10.0), dvec2(20.0, 0.0)];
        let b = [dvec2(0.0, 0.0), dvec2(10.0, 10.0), dvec2(-50.0, 90.0)];
        let ca = HermiteCurve::fit(&a, false, HermiteTangents::default()).unwrap();
        let cb = HermiteCurve::fit(&b, false, HermiteTangents::default()).unwrap();
        assert_eq!(ca.point_at(0, 0.4), cb.point_at(0, 0.4));
    }
}
