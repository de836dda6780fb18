//! Overhauser curves built from overlapping quadratic fits.
//!
//! For segment `k` two quadratics are available: the backward fit through
//! `p[k-1], p[k], p[k+1]` (segment `k` spans `s` in `[1, 2]`) and the forward fit
//! through `p[k], p[k+1], p[k+2]` (segment `k` spans `s` in `[0, 1]`). Open curves
//! fall back to whichever fit exists at the first and last segments.
//!
//! [`OverhauserCurve`] takes its cubic tangents from the two fits.
//! [`OverhauserBlendCurve`] evaluates both quadratics and mixes them with weight `t`.

use curvelab_core::Result;
use curvelab_math::{Point2, Quadratic, QuadraticBasis};

use super::{hermite_as_bezier, ControlPolygon, SegmentCurve};
use crate::scheme::CurveScheme;

/// Quadratic fits shared by both Overhauser variants.
#[derive(Debug, Clone)]
struct QuadraticFits {
    polygon: ControlPolygon,
    basis: QuadraticBasis,
}

impl QuadraticFits {
    fn new(points: &[Point2], closed: bool, scheme: CurveScheme) -> Result<Self> {
        Ok(Self {
            polygon: ControlPolygon::new(points, closed, scheme)?,
            basis: QuadraticBasis::new()?,
        })
    }

    /// Fit through `p[k-1], p[k], p[k+1]`.
    fn backward(&self, k: isize) -> Quadratic {
        let p = &self.polygon;
        self.basis.fit(p.at(k - 1), p.at(k), p.at(k + 1))
    }

    /// Fit through `p[k], p[k+1], p[k+2]`.
    fn forward(&self, k: isize) -> Quadratic {
        let p = &self.polygon;
        self.basis.fit(p.at(k), p.at(k + 1), p.at(k + 2))
    }

    /// Segment has no left neighbour.
    fn at_start(&self, k: isize) -> bool {
        !self.polygon.is_closed() && k <= 0
    }

    /// Segment has no right neighbour.
    fn at_end(&self, k: isize) -> bool {
        !self.polygon.is_closed() && k > self.polygon.len() as isize - 3
    }
}

#[derive(Debug, Clone)]
pub struct OverhauserCurve {
    fits: QuadraticFits,
}

impl OverhauserCurve {
    pub fn fit(points: &[Point2], closed: bool) -> Result<Self> {
        Ok(Self {
            fits: QuadraticFits::new(points, closed, CurveScheme::Overhauser)?,
        })
    }
}

impl SegmentCurve for OverhauserCurve {
    fn point_at(&self, segment: usize, t: f64) -> Point2 {
        let k = segment as isize;
        let fits = &self.fits;

        let v0 = if fits.at_start(k) {
            fits.forward(k).derivative_at(0.0)
        } else {
            fits.backward(k).derivative_at(1.0)
        };
        let v1 = if fits.at_end(k) {
            fits.backward(k).derivative_at(2.0)
        } else {
            fits.forward(k).derivative_at(1.0)
        };

        let (p0, p3) = fits.polygon.segment_ends(segment);
        hermite_as_bezier(p0, v0, p3, v1, t)
    }

    fn segment_count(&self) -> usize {
        self.fits.polygon.segment_count()
    }

    fn is_closed(&self) -> bool {
        self.fits.polygon.is_closed()
    }
}

#[derive(Debug, Clone)]
pub struct OverhauserBlendCurve {
    fits: QuadraticFits,
}

impl OverhauserBlendCurve {
    pub fn fit(points: &[Point2], closed: bool) -> Result<Self> {
        Ok(Self {
            fits: QuadraticFits::new(points, closed, CurveScheme::OverhauserBlend)?,
        })
    }
}

impl SegmentCurve for OverhauserBlendCurve {
    fn point_at(&self, segment: usize, t: f64) -> Point2 {
        let k = segment as isize;
        let fits = &self.fits;

        let leading = if fits.at_start(k) {
            fits.forward(k).point_at(t)
        } else {
            fits.backward(k).point_at(t + 1.0)
        };
        let trailing = if fits.at_end(k) {
            fits.backward(k).point_at(t + 1.0)
        } else {
            fits.forward(k).point_at(t)
        };

        leading.lerp(trailing, t)
    }

    fn segment_count(&self) -> usize {
        self.fits.polygon.segment_count()
    }

    fn is_closed(&self) -> bool {
        self.fits.polygon.is_closed()
    }
}
