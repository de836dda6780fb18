//! CurveLab curve evaluation: ten interpolation and approximation schemes
//! sampled over an ordered 2D control polygon.

pub mod config;
pub mod curve;
pub mod evaluator;
pub mod sample;
pub mod scheme;

pub use config::{EvalConfig, FitOptions, HermiteTangents};
pub use curve::{ControlPolygon, SegmentCurve};
pub use evaluator::{evaluate, CurveEvaluator};
pub use sample::{
    build_samples, default_control_points, SampleSpec, DEFAULT_STEP, MAX_SAMPLES_PER_SEGMENT,
};
pub use scheme::CurveScheme;
