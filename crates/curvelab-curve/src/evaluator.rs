//! Curve evaluation entry points.
//!
//! [`CurveEvaluator`] fits the configured scheme to the given control points
//! and evaluates it at every requested sample. Nothing is cached between
//! calls; each call owns its fit and returns freshly allocated points.

use curvelab_core::{CurveError, Result, Validate};
use curvelab_math::Point2;

use crate::config::EvalConfig;
use crate::curve::SegmentCurve;
use crate::sample::{build_samples, check_samples, closing_sample, SampleSpec};
use crate::scheme::CurveScheme;

/// Evaluates one scheme with fixed settings over any number of control polygons.
#[derive(Debug, Clone, Default)]
pub struct CurveEvaluator {
    config: EvalConfig,
}

impl CurveEvaluator {
    pub fn new(config: EvalConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EvalConfig {
        &self.config
    }

    /// Fit the configured scheme without sampling it.
    pub fn fit(&self, points: &[Point2]) -> Result<Box<dyn SegmentCurve>> {
        let EvalConfig {
            scheme,
            closed,
            options,
            ..
        } = self.config;
        scheme.fit_with(points, closed, &options)
    }

    /// Evaluate the curve through `points` at every sample, in order.
    pub fn evaluate(&self, points: &[Point2], samples: &[SampleSpec]) -> Result<Vec<Point2>> {
        let curve = self.fit(points)?;
        check_samples(samples, points.len(), self.config.closed)?;

        let mut out = Vec::with_capacity(samples.len());
        for (i, s) in samples.iter().enumerate() {
            let p = curve.point_at(s.segment, s.t);
            if !p.is_finite() {
                return Err(CurveError::Numerical(format!(
                    "{} curve produced a non-finite point at sample {i} (segment {}, t = {})",
                    self.config.scheme, s.segment, s.t
                )));
            }
            out.push(p);
        }

        log::debug!(
            "evaluated {} samples of {} curve over {} points (closed: {})",
            out.len(),
            self.config.scheme,
            points.len(),
            self.config.closed
        );
        Ok(out)
    }

    /// Sample the whole curve at the configured step.
    ///
    /// Closed curves get one extra sample at the end of the wrap segment so the
    /// polyline returns to the first control point.
    pub fn sample_curve(&self, points: &[Point2]) -> Result<Vec<Point2>> {
        let mut samples = build_samples(points.len(), self.config.closed, self.config.step)?;
        if self.config.closed {
            samples.push(closing_sample(points.len()));
        }
        self.evaluate(points, &samples)
    }
}

/// Evaluate `scheme` through `points` at each sample with default settings.
pub fn evaluate(
    scheme: CurveScheme,
    points: &[Point2],
    closed: bool,
    samples: &[SampleSpec],
) -> Result<Vec<Point2>> {
    let config = EvalConfig {
        scheme,
        closed,
        ..EvalConfig::default()
    };
    CurveEvaluator::new(config)?.evaluate(points, samples)
}
