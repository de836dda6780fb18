//! Piecewise-linear curve through the control points.

use curvelab_core::Result;
use curvelab_math::Point2;

use super::{ControlPolygon, SegmentCurve};
use crate::scheme::CurveScheme;

/// Straight segments from each control point to the next.
#[derive(Debug, Clone)]
pub struct LinearCurve {
    polygon: ControlPolygon,
}

impl LinearCurve {
    pub fn fit(points: &[Point2], closed: bool) -> Result<Self> {
        Ok(Self {
            polygon: ControlPolygon::new(points, closed, CurveScheme::Linear)?,
        })
    }
}

impl SegmentCurve for LinearCurve {
    fn point_at(&self, segment: usize, t: f64) -> Point2 {
        let (start, end) = self.polygon.segment_ends(segment);
        start + t * (end - start)
    }

    fn segment_count(&self) -> usize {
        self.polygon.segment_count()
    }

    fn is_closed(&self) -> bool {
        self.polygon.is_closed()
    }
}
