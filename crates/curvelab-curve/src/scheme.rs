//! The closed set of curve schemes and their fit dispatch.

use std::fmt;
use std::str::FromStr;

use curvelab_core::{CurveError, Result};
use curvelab_math::Point2;
use serde::{Deserialize, Serialize};

use crate::config::FitOptions;
use crate::curve::{
    BezierCurve, CatmullRomCurve, HermiteCurve, LagrangeCurve, LinearCurve, NaturalSpline,
    OverhauserBlendCurve, OverhauserCurve, SegmentCurve, UniformBSpline,
};

/// Interpolation or approximation scheme applied to a control polygon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CurveScheme {
    #[default]
    Linear,
    Lagrange,
    Bezier,
    Hermite,
    CatmullRom,
    Overhauser,
    OverhauserBlend,
    BSpline,
    NaturalSpline,
    NaturalSplineClosed,
}

impl CurveScheme {
    /// All schemes in menu order.
    pub const ALL: [CurveScheme; 10] = [
        CurveScheme::Lagrange,
        CurveScheme::Linear,
        CurveScheme::Bezier,
        CurveScheme::Hermite,
        CurveScheme::CatmullRom,
        CurveScheme::Overhauser,
        CurveScheme::OverhauserBlend,
        CurveScheme::BSpline,
        CurveScheme::NaturalSpline,
        CurveScheme::NaturalSplineClosed,
    ];

    /// Human-readable menu label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Linear => "Linear",
            Self::Lagrange => "Lagrangian",
            Self::Bezier => "Bezier",
            Self::Hermite => "Hermite",
            Self::CatmullRom => "Catmull",
            Self::Overhauser => "Overhauser",
            Self::OverhauserBlend => "Overhauser2",
            Self::BSpline => "Bspline",
            Self::NaturalSpline => "Natural Spline",
            Self::NaturalSplineClosed => "Natural Closed",
        }
    }

    /// Identifier used in configuration files.
    pub fn name(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Lagrange => "lagrange",
            Self::Bezier => "bezier",
            Self::Hermite => "hermite",
            Self::CatmullRom => "catmull_rom",
            Self::Overhauser => "overhauser",
            Self::OverhauserBlend => "overhauser_blend",
            Self::BSpline => "b_spline",
            Self::NaturalSpline => "natural_spline",
            Self::NaturalSplineClosed => "natural_spline_closed",
        }
    }

    /// Closed flag to use when this scheme is selected.
    pub fn default_closed(self) -> bool {
        matches!(self, Self::NaturalSplineClosed)
    }

    /// Fewest control points the scheme can be fit to.
    pub fn min_points(self, closed: bool) -> usize {
        let open = match self {
            Self::Linear | Self::Lagrange | Self::Hermite | Self::NaturalSpline => 2,
            Self::CatmullRom
            | Self::Overhauser
            | Self::OverhauserBlend
            | Self::NaturalSplineClosed => 3,
            Self::Bezier | Self::BSpline => 4,
        };
        if closed {
            open.max(3)
        } else {
            open
        }
    }

    /// Whether the curve starts at the first and ends at the last control point.
    pub fn interpolates_endpoints(self) -> bool {
        !matches!(self, Self::Bezier | Self::BSpline)
    }

    /// Fit with default Hermite tangents and tolerances.
    pub fn fit(self, points: &[Point2], closed: bool) -> Result<Box<dyn SegmentCurve>> {
        self.fit_with(points, closed, &FitOptions::default())
    }

    pub fn fit_with(
        self,
        points: &[Point2],
        closed: bool,
        options: &FitOptions,
    ) -> Result<Box<dyn SegmentCurve>> {
        let curve: Box<dyn SegmentCurve> = match self {
            Self::Linear => Box::new(LinearCurve::fit(points, closed)?),
            Self::Lagrange => Box::new(LagrangeCurve::fit(points, closed)?),
            Self::Bezier => Box::new(BezierCurve::fit(points, closed)?),
            Self::Hermite => Box::new(HermiteCurve::fit(points, closed, options.hermite_tangents)?),
            Self::CatmullRom => Box::new(CatmullRomCurve::fit(points, closed)?),
            Self::Overhauser => Box::new(OverhauserCurve::fit(points, closed)?),
            Self::OverhauserBlend => Box::new(OverhauserBlendCurve::fit(points, closed)?),
            Self::BSpline => Box::new(UniformBSpline::fit(points, closed)?),
            Self::NaturalSpline => {
                Box::new(NaturalSpline::fit_open(points, closed, options.tolerance)?)
            }
            Self::NaturalSplineClosed => {
                Box::new(NaturalSpline::fit_periodic(points, options.tolerance)?)
            }
        };
        Ok(curve)
    }
}

impl fmt::Display for CurveScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CurveScheme {
    type Err = CurveError;

    /// Accepts either the menu label or the configuration name, ignoring case.
    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|scheme| {
                scheme.label().eq_ignore_ascii_case(wanted)
                    || scheme.name().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| CurveError::InvalidConfig(format!("unknown curve scheme: {s:?}")))
    }
}
