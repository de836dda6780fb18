/// Tolerances for curve comparisons and linear-system pivots.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Tolerance {
    /// Distance tolerance when comparing sampled points (in canvas units)
    pub linear: f64,
    /// Smallest pivot magnitude accepted by the linear solvers
    pub pivot: f64,
}

impl Tolerance {
    pub const DEFAULT_LINEAR: f64 = 1e-4;
    pub const DEFAULT_PIVOT: f64 = 1e-12;

    pub fn default_precision() -> Self {
        Self {
            linear: Self::DEFAULT_LINEAR,
            pivot: Self::DEFAULT_PIVOT,
        }
    }

    /// Check if two values are equal within linear tolerance
    pub fn linear_eq(self, a: f64, b: f64) -> bool {
        (a - b).abs() < self.linear
    }

    /// Check if a pivot is too small to divide by
    pub fn is_singular_pivot(self, pivot: f64) -> bool {
        !pivot.is_finite() || pivot.abs() < self.pivot
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::default_precision()
    }
}
