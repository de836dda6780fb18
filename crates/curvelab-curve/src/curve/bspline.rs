//! Uniform cubic B-spline.
//!
//! Segment `k` blends `p[k-1] .. p[k+2]` with the uniform cubic basis. On an
//! open curve the first segment (`k < 1`) and the segments past `n - 3` have no
//! full four-point window; they return `p[1]` and `p[n-2]` respectively.

use curvelab_core::Result;
use curvelab_math::Point2;

use super::{ControlPolygon, SegmentCurve};
use crate::scheme::CurveScheme;

/// Uniform cubic basis weights for `p[k-1], p[k], p[k+1], p[k+2]`.
pub fn uniform_cubic_weights(t: f64) -> [f64; 4] {
    let t2 = t * t;
    let t3 = t2 * t;
    let t1 = 1.0 - t;
    [
        t1 * t1 * t1 / 6.0,
        (3.0 * t3 - 6.0 * t2 + 4.0) / 6.0,
        (-3.0 * t3 + 3.0 * t2 + 3.0 * t + 1.0) / 6.0,
        t3 / 6.0,
    ]
}

#[derive(Debug, Clone)]
pub struct UniformBSpline {
    polygon: ControlPolygon,
}

impl UniformBSpline {
    pub fn fit(points: &[Point2], closed: bool) -> Result<Self> {
        Ok(Self {
            polygon: ControlPolygon::new(points, closed, CurveScheme::BSpline)?,
        })
    }
}

impl SegmentCurve for UniformBSpline {
    fn point_at(&self, segment: usize, t: f64) -> Point2 {
        let p = &self.polygon;
        let k = segment as isize;
        let n = p.len() as isize;

        if !p.is_closed() {
            if k < 1 {
                return p.at(1);
            }
            if k > n - 3 {
                return p.at(n - 2);
            }
        }

        let w = uniform_cubic_weights(t);
        w[0] * p.at(k - 1) + w[1] * p.at(k) + w[2] * p.at(k + 1) + w[3] * p.at(k + 2)
    }

    fn segment_count(&self) -> usize {
        self.polygon.segment_count()
    }

    fn is_closed(&self) -> bool {
        self.polygon.is_closed()
    }
}
