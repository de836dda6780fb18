//! Single cubic Bezier patch.
//!
//! Only the first four control points are used: two endpoints and two handles.
//! Samples on segments past the first return the patch end point `p[3]`.

use curvelab_core::Result;
use curvelab_math::Point2;

use super::{cubic_bezier, ControlPolygon, SegmentCurve};
use crate::scheme::CurveScheme;

#[derive(Debug, Clone)]
pub struct BezierCurve {
    polygon: ControlPolygon,
    patch: [Point2; 4],
}

impl BezierCurve {
    pub fn fit(points: &[Point2], closed: bool) -> Result<Self> {
        let polygon = ControlPolygon::new(points, closed, CurveScheme::Bezier)?;
        let patch = [points[0], points[1], points[2], points[3]];
        Ok(Self { polygon, patch })
    }

    pub fn patch(&self) -> &[Point2; 4] {
        &self.patch
    }
}

impl SegmentCurve for BezierCurve {
    fn point_at(&self, segment: usize, t: f64) -> Point2 {
        let [p0, p1, p2, p3] = self.patch;
        if segment == 0 {
            cubic_bezier(p0, p1, p2, p3, t)
        } else {
            p3
        }
    }

    fn segment_count(&self) -> usize {
        self.polygon.segment_count()
    }

    fn is_closed(&self) -> bool {
        self.polygon.is_closed()
    }
}
