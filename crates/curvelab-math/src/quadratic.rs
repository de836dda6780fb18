//! Quadratic fits through three consecutive points.
//!
//! A quadratic `q(s) = a s^2 + b s + c` passing through `f0, f1, f2` at
//! `s = 0, 1, 2` is found by inverting the constant basis matrix
//!
//! ```text
//! | 0 0 1 |   | a |   | f0 |
//! | 1 1 1 | * | b | = | f1 |
//! | 4 2 1 |   | c |   | f2 |
//! ```
//!
//! Catmull-Rom and Overhauser curves use these fits for their tangents and
//! their blended pieces.

use curvelab_core::{CurveError, Result};
use nalgebra::{Matrix3, Vector3};

use crate::{Point2, Vector2};

/// Inverse of the quadratic basis matrix, computed once per evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadraticBasis {
    inverse: Matrix3<f64>,
}

impl QuadraticBasis {
    pub fn new() -> Result<Self> {
        #[rustfmt::skip]
        let basis = Matrix3::new(
            0.0, 0.0, 1.0,
            1.0, 1.0, 1.0,
            4.0, 2.0, 1.0,
        );
        let inverse = basis
            .try_inverse()
            .ok_or_else(|| CurveError::Numerical("quadratic basis matrix is singular".into()))?;
        Ok(Self { inverse })
    }

    /// Fit the quadratic through `f0, f1, f2` at `s = 0, 1, 2`, one axis at a time.
    pub fn fit(&self, f0: Point2, f1: Point2, f2: Point2) -> Quadratic {
        let x = self.inverse * Vector3::new(f0.x, f1.x, f2.x);
        let y = self.inverse * Vector3::new(f0.y, f1.y, f2.y);
        Quadratic {
            a: Vector2::new(x[0], y[0]),
            b: Vector2::new(x[1], y[1]),
            c: Vector2::new(x[2], y[2]),
        }
    }
}

/// A 2D quadratic `a s^2 + b s + c`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quadratic {
    pub a: Vector2,
    pub b: Vector2,
    pub c: Vector2,
}

impl Quadratic {
    pub fn point_at(&self, s: f64) -> Point2 {
        self.a * (s * s) + self.b * s + self.c
    }

    pub fn derivative_at(&self, s: f64) -> Vector2 {
        self.a * (2.0 * s) + self.b
    }
}
