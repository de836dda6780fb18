//! Global Lagrange polynomial through all control points.
//!
//! Point `i` sits at global parameter `T = i`, and a sample `(k, t)` is evaluated
//! at `T = k + t`. Cost is O(n^2) per sample and the polynomial oscillates badly
//! (Runge's phenomenon) once the point count grows.

use curvelab_core::Result;
use curvelab_math::Point2;

use super::{ControlPolygon, SegmentCurve};
use crate::scheme::CurveScheme;

/// Point count above which a numerical-stability warning is logged.
pub const LAGRANGE_STABLE_POINTS: usize = 12;

/// Degree `n - 1` interpolating polynomial.
#[derive(Debug, Clone)]
pub struct LagrangeCurve {
    polygon: ControlPolygon,
}

impl LagrangeCurve {
    pub fn fit(points: &[Point2], closed: bool) -> Result<Self> {
        let polygon = ControlPolygon::new(points, closed, CurveScheme::Lagrange)?;
        if polygon.len() > LAGRANGE_STABLE_POINTS {
            log::warn!(
                "Lagrange curve over {} points (degree {}) is numerically unstable",
                polygon.len(),
                polygon.len() - 1
            );
        }
        Ok(Self { polygon })
    }

    /// Basis weight of point `i` at global parameter `global_t`.
    fn weight(&self, i: usize, global_t: f64) -> f64 {
        (0..self.polygon.len())
            .filter(|&j| j != i)
            .fold(1.0, |w, j| w * (global_t - j as f64) / (i as f64 - j as f64))
    }
}

impl SegmentCurve for LagrangeCurve {
    fn point_at(&self, segment: usize, t: f64) -> Point2 {
        let global_t = segment as f64 + t;
        self.polygon
            .points()
            .iter()
            .enumerate()
            .fold(Point2::ZERO, |acc, (i, &p)| acc + self.weight(i, global_t) * p)
    }

    fn segment_count(&self) -> usize {
        self.polygon.segment_count()
    }

    fn is_closed(&self) -> bool {
        self.polygon.is_closed()
    }
}
