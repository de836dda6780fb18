//! Sample parameter generation for curve display.

use curvelab_core::{CurveError, Result};
use curvelab_math::{dvec2, Point2};
use serde::{Deserialize, Serialize};

/// Local parameter increment used by the interactive display.
pub const DEFAULT_STEP: f64 = 0.1;

/// Number of control points seeded on a fresh canvas.
pub const DEFAULT_POINT_COUNT: usize = 9;

/// Upper bound on samples taken from one segment.
pub const MAX_SAMPLES_PER_SEGMENT: usize = 1 << 20;

/// Slack when counting steps so that `1 / 0.1` yields exactly 10 samples.
const STEP_EPSILON: f64 = 1e-9;

/// One requested sample: segment index and local parameter within it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SampleSpec {
    pub segment: usize,
    pub t: f64,
}

impl SampleSpec {
    pub fn new(segment: usize, t: f64) -> Self {
        Self { segment, t }
    }
}

impl From<(usize, f64)> for SampleSpec {
    fn from((segment, t): (usize, f64)) -> Self {
        Self::new(segment, t)
    }
}

/// Number of samples taken per segment for a given step: `t = 0, step, 2 step, ... < 1`.
pub fn samples_per_segment(step: f64) -> Result<usize> {
    if !(step.is_finite() && step > 0.0 && step <= 1.0) {
        return Err(CurveError::Precondition(format!(
            "sample step must lie in (0, 1], got {step}"
        )));
    }
    let count = (1.0 / step - STEP_EPSILON).ceil();
    if count > MAX_SAMPLES_PER_SEGMENT as f64 {
        return Err(CurveError::Precondition(format!(
            "sample step {step} needs {count} samples per segment (max {MAX_SAMPLES_PER_SEGMENT})"
        )));
    }
    Ok(count as usize)
}

/// Enumerate `(segment, t)` pairs across every segment of an `n`-point polygon.
///
/// Open curves end with the terminal sample `(n - 2, 1.0)`; closed curves
/// include the wrap segment `n - 1` instead.
pub fn build_samples(n: usize, closed: bool, step: f64) -> Result<Vec<SampleSpec>> {
    if n < 2 {
        return Err(CurveError::Precondition(format!(
            "sampling needs at least 2 control points, got {n}"
        )));
    }
    let per_segment = samples_per_segment(step)?;
    let segments = if closed { n } else { n - 1 };

    let total = segments
        .checked_mul(per_segment)
        .and_then(|count| count.checked_add(1))
        .ok_or_else(|| {
            CurveError::Precondition(format!(
                "{segments} segments at {per_segment} samples each overflow the sample count"
            ))
        })?;

    let mut samples = Vec::with_capacity(total);
    for segment in 0..segments {
        for i in 0..per_segment {
            samples.push(SampleSpec::new(segment, i as f64 * step));
        }
    }
    if !closed {
        samples.push(SampleSpec::new(n - 2, 1.0));
    }
    Ok(samples)
}

/// Sample that lands back on the first control point of a closed curve.
pub fn closing_sample(n: usize) -> SampleSpec {
    SampleSpec::new(n.saturating_sub(1), 1.0)
}

/// Reject samples whose segment is out of range or whose parameter is not in `[0, 1]`.
pub fn check_samples(samples: &[SampleSpec], n: usize, closed: bool) -> Result<()> {
    let segments = if closed { n } else { n.saturating_sub(1) };
    for (i, s) in samples.iter().enumerate() {
        if s.segment >= segments {
            return Err(CurveError::Precondition(format!(
                "sample {i}: segment {} out of range for {n} {} control points (max {})",
                s.segment,
                if closed { "closed" } else { "open" },
                segments as isize - 1
            )));
        }
        if !(s.t.is_finite() && (0.0..=1.0).contains(&s.t)) {
            return Err(CurveError::Precondition(format!(
                "sample {i}: local parameter {} outside [0, 1]",
                s.t
            )));
        }
    }
    Ok(())
}

/// Control points spread along the horizontal centre line of a `width` x `height` canvas.
pub fn default_control_points(width: f64, height: f64) -> Vec<Point2> {
    (0..DEFAULT_POINT_COUNT)
        .map(|i| dvec2((i as f64 * 0.1 + 0.1) * width, height / 2.0))
        .collect()
}
