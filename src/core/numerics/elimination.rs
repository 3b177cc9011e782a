//! Gaussian elimination with partial pivoting: determinant and inverse.
//!
//! Both operations work on a private copy of the input; callers' matrices
//! are never mutated. A pivot whose magnitude falls below [`EPS`] marks the
//! matrix as numerically singular.

use crate::core::error::NumericsError;
use crate::core::numerics::matrix::Matrix;

/// Singularity threshold for pivot magnitudes.
pub const EPS: f64 = 1e-12;

fn require_square(a: &Matrix) -> Result<usize, NumericsError> {
    if !a.is_square() {
        return Err(NumericsError::not_square(&format!("{}x{}", a.rows, a.cols)));
    }
    Ok(a.rows)
}

/// Partial pivoting: returns the row index in `k..n` with the largest
/// magnitude in column `k`, together with that magnitude.
fn select_pivot(m: &[Vec<f64>], k: usize, n: usize) -> (usize, f64) {
    let mut p = k;
    let mut best = m[k][k].abs();
    for i in (k + 1)..n {
        let val = m[i][k].abs();
        if val > best {
            best = val;
            p = i;
        }
    }
    (p, best)
}

/// Determinant via reduction to upper-triangular form.
///
/// `Ok(0.0)` means the elimination hit a pivot below [`EPS`] (numerically
/// singular, determinant zero). Non-square input is an error, so a zero
/// return is never ambiguous.
pub fn determinant(a: &Matrix) -> Result<f64, NumericsError> {
    let n = require_square(a)?;
    let mut m = a.data.clone();
    let mut swaps = 0usize;

    for k in 0..n {
        let (p, best) = select_pivot(&m, k, n);
        if best < EPS {
            return Ok(0.0);
        }
        if p != k {
            m.swap(p, k);
            swaps += 1;
        }

        let pivot = m[k][k];
        for i in (k + 1)..n {
            let factor = m[i][k] / pivot;
            // columns left of k are already zero
            for j in k..n {
                m[i][j] -= factor * m[k][j];
            }
        }
    }

    let mut det = 1.0;
    for i in 0..n {
        det *= m[i][i];
    }
    // each row swap flips the sign
    if swaps % 2 != 0 {
        det = -det;
    }
    Ok(det)
}

/// Inverse via Gauss-Jordan elimination on an augmented `[A | I]` matrix.
pub fn inverse(a: &Matrix) -> Result<Matrix, NumericsError> {
    let n = require_square(a)?;

    let mut aug = vec![vec![0.0; 2 * n]; n];
    for i in 0..n {
        aug[i][..n].copy_from_slice(&a.data[i]);
        aug[i][n + i] = 1.0;
    }

    for k in 0..n {
        let (p, best) = select_pivot(&aug, k, n);
        if best < EPS {
            return Err(NumericsError::singular(&format!(
                "pivot magnitude below {:e} at column {}",
                EPS, k
            )));
        }
        if p != k {
            aug.swap(p, k);
        }

        // normalize the pivot row across the full 2n width
        let pivot = aug[k][k];
        for j in 0..2 * n {
            aug[k][j] /= pivot;
        }

        // clear column k in every other row
        for i in 0..n {
            if i == k {
                continue;
            }
            let factor = aug[i][k];
            for j in 0..2 * n {
                aug[i][j] -= factor * aug[k][j];
            }
        }
    }

    let mut inv = Matrix::zeros(n, n)?;
    for i in 0..n {
        inv.data[i].copy_from_slice(&aug[i][n..2 * n]);
    }
    Ok(inv)
}
