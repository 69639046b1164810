//! Least-squares estimation for autoregressive coefficients.
//!
//! Solves the normal equations with a Cholesky decomposition. A small ridge
//! term on the diagonal keeps near-collinear designs solvable, so a constant
//! series still fits (with an effectively zero slope).

use crate::error::{Result, ScheduleError};

const RIDGE: f64 = 1e-8;

/// Fit `y ≈ intercept + x @ beta` and return `[intercept, beta...]`.
///
/// Each row of `x` holds one observation's regressor values; the intercept
/// column is added here.
pub(crate) fn lstsq_intercept(x: &[Vec<f64>], y: &[f64]) -> Result<Vec<f64>> {
    let n = y.len();
    if n == 0 {
        return Err(ScheduleError::EmptyData);
    }
    if x.len() != n {
        return Err(ScheduleError::DimensionMismatch {
            expected: n,
            got: x.len(),
        });
    }

    let k = x[0].len();
    for row in x {
        if row.len() != k {
            return Err(ScheduleError::DimensionMismatch {
                expected: k,
                got: row.len(),
            });
        }
    }

    // Accumulate X'X and X'y with the intercept as column 0.
    let num_params = k + 1;
    let mut xtx = vec![vec![0.0; num_params]; num_params];
    let mut xty = vec![0.0; num_params];

    for (row, &yi) in x.iter().zip(y) {
        xtx[0][0] += 1.0;
        xty[0] += yi;
        for i in 0..k {
            let xi = row[i];
            xtx[0][i + 1] += xi;
            xtx[i + 1][0] += xi;
            xty[i + 1] += xi * yi;
            for j in 0..k {
                xtx[i + 1][j + 1] += xi * row[j];
            }
        }
    }

    for i in 0..num_params {
        xtx[i][i] += RIDGE;
    }

    let beta = solve_symmetric(&xtx, &xty).ok_or_else(|| {
        ScheduleError::DegenerateFit("normal equations are not positive definite".to_string())
    })?;

    if beta.iter().any(|b| !b.is_finite()) {
        return Err(ScheduleError::DegenerateFit(
            "coefficients are not finite".to_string(),
        ));
    }

    Ok(beta)
}

/// Solve `a @ x = b` for symmetric positive definite `a` via Cholesky.
fn solve_symmetric(a: &[Vec<f64>], b: &[f64]) -> Option<Vec<f64>> {
    let n = b.len();
    if n == 0 || a.len() != n {
        return None;
    }

    // Decompose a = l @ l'.
    let mut l = vec![vec![0.0; n]; n];
    for i in 0..n {
        for j in 0..=i {
            let mut sum = a[i][j];
            for k in 0..j {
                sum -= l[i][k] * l[j][k];
            }

            if i == j {
                if sum <= 0.0 {
                    return None;
                }
                l[i][j] = sum.sqrt();
            } else {
                l[i][j] = sum / l[j][j];
            }
        }
    }

    // Forward substitution: l @ z = b.
    let mut z = vec![0.0; n];
    for i in 0..n {
        let mut sum = b[i];
        for j in 0..i {
            sum -= l[i][j] * z[j];
        }
        z[i] = sum / l[i][i];
    }

    // Backward substitution: l' @ x = z.
    let mut x = vec![0.0; n];
    for i in (0..n).rev() {
        let mut sum = z[i];
        for j in (i + 1)..n {
            sum -= l[j][i] * x[j];
        }
        x[i] = sum / l[i][i];
    }

    Some(x)
}
