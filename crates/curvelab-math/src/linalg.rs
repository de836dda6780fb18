//! Banded linear solvers for spline slope systems.
//!
//! Open splines produce a tridiagonal system that is solved with the Thomas
//! algorithm. Periodic splines add two corner entries; those are removed with a
//! Sherman–Morrison rank-1 correction so the same tridiagonal sweep serves both.

use curvelab_core::{CurveError, Result, Tolerance};
use nalgebra::{DMatrix, DVector};

/// A tridiagonal matrix stored as three bands of equal length `n`.
///
/// `sub[i]` is `A[i][i-1]` (`sub[0]` is ignored) and `sup[i]` is `A[i][i+1]`
/// (`sup[n-1]` is ignored).
#[derive(Debug, Clone, PartialEq)]
pub struct Tridiagonal {
    pub sub: Vec<f64>,
    pub diag: Vec<f64>,
    pub sup: Vec<f64>,
}

impl Tridiagonal {
    pub fn new(sub: Vec<f64>, diag: Vec<f64>, sup: Vec<f64>) -> Result<Self> {
        if diag.is_empty() {
            return Err(CurveError::Precondition(
                "tridiagonal system must have at least one row".into(),
            ));
        }
        if sub.len() != diag.len() || sup.len() != diag.len() {
            return Err(CurveError::Precondition(format!(
                "band length mismatch: sub={}, diag={}, sup={}",
                sub.len(),
                diag.len(),
                sup.len()
            )));
        }
        Ok(Self { sub, diag, sup })
    }

    /// Constant-band matrix with `diag` on the diagonal and `off` on both neighbours.
    pub fn constant(n: usize, diag: f64, off: f64) -> Result<Self> {
        Self::new(vec![off; n], vec![diag; n], vec![off; n])
    }

    pub fn len(&self) -> usize {
        self.diag.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diag.is_empty()
    }

    /// Solve `A x = rhs` with the Thomas algorithm (no pivoting).
    pub fn solve(&self, rhs: &[f64], tol: Tolerance) -> Result<Vec<f64>> {
        let n = self.len();
        if rhs.len() != n {
            return Err(CurveError::Precondition(format!(
                "right-hand side has {} entries, system has {} rows",
                rhs.len(),
                n
            )));
        }

        let mut c_prime = vec![0.0; n];
        let mut d_prime = vec![0.0; n];

        let mut beta = self.diag[0];
        if tol.is_singular_pivot(beta) {
            return Err(CurveError::Numerical(format!("zero pivot at row 0: {beta}")));
        }
        c_prime[0] = if n > 1 { self.sup[0] / beta } else { 0.0 };
        d_prime[0] = rhs[0] / beta;

        for i in 1..n {
            beta = self.diag[i] - self.sub[i] * c_prime[i - 1];
            if tol.is_singular_pivot(beta) {
                return Err(CurveError::Numerical(format!(
                    "zero pivot at row {i}: {beta}"
                )));
            }
            if i < n - 1 {
                c_prime[i] = self.sup[i] / beta;
            }
            d_prime[i] = (rhs[i] - self.sub[i] * d_prime[i - 1]) / beta;
        }

        let mut x = d_prime;
        for i in (0..n - 1).rev() {
            x[i] -= c_prime[i] * x[i + 1];
        }

        check_finite(&x)?;
        Ok(x)
    }

    pub fn to_dense(&self) -> DMatrix<f64> {
        let n = self.len();
        DMatrix::from_fn(n, n, |i, j| {
            if i == j {
                self.diag[i]
            } else if j + 1 == i {
                self.sub[i]
            } else if i + 1 == j {
                self.sup[i]
            } else {
                0.0
            }
        })
    }
}

/// A tridiagonal matrix plus the two periodic corner entries.
#[derive(Debug, Clone, PartialEq)]
pub struct CyclicTridiagonal {
    pub band: Tridiagonal,
    /// `A[n-1][0]`
    pub lower_corner: f64,
    /// `A[0][n-1]`
    pub upper_corner: f64,
}

impl CyclicTridiagonal {
    pub fn new(band: Tridiagonal, lower_corner: f64, upper_corner: f64) -> Result<Self> {
        if band.len() < 3 {
            return Err(CurveError::Precondition(format!(
                "cyclic system needs at least 3 rows, got {}",
                band.len()
            )));
        }
        Ok(Self {
            band,
            lower_corner,
            upper_corner,
        })
    }

    /// Constant-band periodic matrix: `diag` on the diagonal, `off` on both
    /// neighbours and in both corners.
    pub fn constant(n: usize, diag: f64, off: f64) -> Result<Self> {
        Self::new(Tridiagonal::constant(n, diag, off)?, off, off)
    }

    pub fn len(&self) -> usize {
        self.band.len()
    }

    pub fn is_empty(&self) -> bool {
        self.band.is_empty()
    }

    /// Solve `A x = rhs` by Sherman–Morrison reduction to two tridiagonal solves.
    ///
    /// Falls back to a dense LU solve when the rank-1 update is degenerate.
    pub fn solve(&self, rhs: &[f64], tol: Tolerance) -> Result<Vec<f64>> {
        let n = self.len();
        if rhs.len() != n {
            return Err(CurveError::Precondition(format!(
                "right-hand side has {} entries, system has {} rows",
                rhs.len(),
                n
            )));
        }

        let alpha = self.lower_corner;
        let beta = self.upper_corner;
        let gamma = -self.band.diag[0];
        if tol.is_singular_pivot(gamma) {
            log::debug!("cyclic solve: zero leading diagonal, using dense LU");
            return solve_dense(&self.to_dense(), rhs);
        }

        let mut reduced = self.band.clone();
        reduced.diag[0] -= gamma;
        reduced.diag[n - 1] -= alpha * beta / gamma;

        let x = reduced.solve(rhs, tol)?;

        let mut u = vec![0.0; n];
        u[0] = gamma;
        u[n - 1] = alpha;
        let z = reduced.solve(&u, tol)?;

        let denom = 1.0 + z[0] + beta * z[n - 1] / gamma;
        if tol.is_singular_pivot(denom) {
            log::debug!("cyclic solve: degenerate rank-1 correction, using dense LU");
            return solve_dense(&self.to_dense(), rhs);
        }
        let fact = (x[0] + beta * x[n - 1] / gamma) / denom;

        let solution: Vec<f64> = x.iter().zip(&z).map(|(xi, zi)| xi - fact * zi).collect();
        check_finite(&solution)?;
        Ok(solution)
    }

    pub fn to_dense(&self) -> DMatrix<f64> {
        let n = self.len();
        let mut m = self.band.to_dense();
        m[(n - 1, 0)] = self.lower_corner;
        m[(0, n - 1)] = self.upper_corner;
        m
    }
}

/// Solve a general square system with partial-pivot LU decomposition.
pub fn solve_dense(matrix: &DMatrix<f64>, rhs: &[f64]) -> Result<Vec<f64>> {
    if !matrix.is_square() || matrix.nrows() != rhs.len() {
        return Err(CurveError::Precondition(format!(
            "dense solve shape mismatch: {}x{} matrix, {} rhs entries",
            matrix.nrows(),
            matrix.ncols(),
            rhs.len()
        )));
    }
    let b = DVector::from_column_slice(rhs);
    let x = matrix
        .clone()
        .lu()
        .solve(&b)
        .ok_or_else(|| CurveError::Numerical("singular matrix in dense solve".into()))?;
    let solution: Vec<f64> = x.iter().copied().collect();
    check_finite(&solution)?;
    Ok(solution)
}

fn check_finite(values: &[f64]) -> Result<()> {
    match values.iter().position(|v| !v.is_finite()) {
        Some(i) => Err(CurveError::Numerical(format!(
            "non-finite solution component at index {i}"
        ))),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn assert_slices_close(a: &[f64], b: &[f64]) {
        assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(b) {
            assert_relative_eq!(*x, *y, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_tridiagonal_matches_dense() {
        // Relaxed-end spline matrix: diag (2, 4, 4, 4, 2)
        let mut m = Tridiagonal::constant(5, 4.0, 1.0).unwrap();
        m.diag[0] = 2.0;
        m.diag[4] = 2.0;
        let rhs = [3.0, -1.5, 7.0, 0.25, 12.0];

        let banded = m.solve(&rhs, Tolerance::default()).unwrap();
        let dense = solve_dense(&m.to_dense(), &rhs).unwrap();
        assert_slices_close(&banded, &dense);
    }

    #[test]
    fn test_tridiagonal_single_row() {
        let m = Tridiagonal::new(vec![0.0], vec![4.0], vec![0.0]).unwrap();
        let x = m.solve(&[8.0], Tolerance::default()).unwrap();
        assert_eq!(x, vec![2.0]);
    }

    #[test]
    fn test_tridiagonal_zero_pivot() {
        let m = Tridiagonal::new(vec![0.0, 1.0], vec![0.0, 1.0], vec![1.0, 0.0]).unwrap();
        let err = m.solve(&[1.0, 1.0], Tolerance::default()).unwrap_err();
        assert!(err.is_numerical());
    }

    #[test]
    fn test_tridiagonal_rhs_length_mismatch() {
        let m = Tridiagonal::constant(3, 4.0, 1.0).unwrap();
        let err = m.solve(&[1.0, 2.0], Tolerance::default()).unwrap_err();
        assert!(err.is_precondition());
    }

    #[test]
    fn test_band_length_mismatch() {
        assert!(Tridiagonal::new(vec![1.0], vec![4.0, 4.0], vec![1.0, 1.0]).is_err());
    }

    #[test]
    fn test_cyclic_matches_dense() {
        for n in 3..9 {
            let m = CyclicTridiagonal::constant(n, 4.0, 1.0).unwrap();
            let rhs: Vec<f64> = (0..n).map(|i| (i as f64 * 1.7).sin() * 10.0).collect();

            let banded = m.solve(&rhs, Tolerance::default()).unwrap();
            let dense = solve_dense(&m.to_dense(), &rhs).unwrap();
            assert_slices_close(&banded, &dense);
        }
    }

    #[test]
    fn test_cyclic_asymmetric_corners() {
        let mut band = Tridiagonal::constant(4, 5.0, 1.0).unwrap();
        band.sub[2] = -2.0;
        band.sup[1] = 0.5;
        let m = CyclicTridiagonal::new(band, 2.0, -1.0).unwrap();
        let rhs = [1.0, 2.0, 3.0, 4.0];

        let banded = m.solve(&rhs, Tolerance::default()).unwrap();
        let dense = solve_dense(&m.to_dense(), &rhs).unwrap();
        assert_slices_close(&banded, &dense);
    }

    #[test]
    fn test_cyclic_zero_leading_diagonal_falls_back() {
        let mut band = Tridiagonal::constant(3, 3.0, 1.0).unwrap();
        band.diag[0] = 0.0;
        let m = CyclicTridiagonal::new(band, 1.0, 1.0).unwrap();
        let rhs = [1.0, 0.0, 2.0];

        let x = m.solve(&rhs, Tolerance::default()).unwrap();
        let dense = m.to_dense();
        let back = &dense * DVector::from_column_slice(&x);
        assert_slices_close(back.as_slice(), &rhs);
    }

    #[test]
    fn test_cyclic_needs_three_rows() {
        let err = CyclicTridiagonal::constant(2, 4.0, 1.0).unwrap_err();
        assert!(err.is_precondition());
    }

    #[test]
    fn test_dense_singular() {
        let m = DMatrix::from_row_slice(2, 2, &[1.0, 2.0, 2.0, 4.0]);
        let err = solve_dense(&m, &[1.0, 1.0]).unwrap_err();
        assert!(err.is_numerical());
    }
}
