//! Evaluation settings passed explicitly by the host application.

use curvelab_core::{CurveError, Result, Tolerance, Validate};
use curvelab_math::Vector2;
use serde::{Deserialize, Serialize};

use crate::sample::{samples_per_segment, DEFAULT_STEP};
use crate::scheme::CurveScheme;

/// Constant end tangents for the Hermite scheme.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HermiteTangents {
    pub start: Vector2,
    pub end: Vector2,
}

impl HermiteTangents {
    pub const DEFAULT_START: Vector2 = Vector2::new(120.0, 0.0);
    pub const DEFAULT_END: Vector2 = Vector2::new(90.0, 0.0);

    pub fn new(start: Vector2, end: Vector2) -> Self {
        Self { start, end }
    }
}

impl Default for HermiteTangents {
    fn default() -> Self {
        Self::new(Self::DEFAULT_START, Self::DEFAULT_END)
    }
}

/// Per-fit parameters that are not part of the control polygon.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FitOptions {
    pub hermite_tangents: HermiteTangents,
    pub tolerance: Tolerance,
}

/// Everything the evaluator needs besides the control points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalConfig {
    pub scheme: CurveScheme,
    pub closed: bool,
    /// Local parameter increment used when sampling each segment.
    pub step: f64,
    pub options: FitOptions,
}

impl EvalConfig {
    /// Config for `scheme` with its usual closed flag.
    pub fn for_scheme(scheme: CurveScheme) -> Self {
        Self {
            scheme,
            closed: scheme.default_closed(),
            ..Self::default()
        }
    }

    pub fn with_closed(mut self, closed: bool) -> Self {
        self.closed = closed;
        self
    }

    pub fn with_step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    pub fn with_hermite_tangents(mut self, tangents: HermiteTangents) -> Self {
        self.options.hermite_tangents = tangents;
        self
    }
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            scheme: CurveScheme::default(),
            closed: false,
            step: DEFAULT_STEP,
            options: FitOptions::default(),
        }
    }
}

impl Validate for EvalConfig {
    fn validate(&self) -> Result<()> {
        samples_per_segment(self.step).map_err(|err| match err {
            CurveError::Precondition(msg) => CurveError::InvalidConfig(msg),
            other => other,
        })?;
        let tangents = self.options.hermite_tangents;
        if !(tangents.start.is_finite() && tangents.end.is_finite()) {
            return Err(CurveError::InvalidConfig(
                "Hermite tangents must be finite".into(),
            ));
        }
        let tol = self.options.tolerance;
        if !(tol.linear > 0.0 && tol.pivot >= 0.0 && tol.pivot.is_finite()) {
            return Err(CurveError::InvalidConfig(format!(
                "tolerances must be positive, got linear={} pivot={}",
                tol.linear, tol.pivot
            )));
        }
        Ok(())
    }
}
