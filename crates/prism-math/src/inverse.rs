// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Gauss-Jordan inversion with full pivoting.
//!
//! The elimination order, pivot tie-break and final column unscrambling are
//! fixed so that every build produces bit-identical inverses for identical
//! input. Changing any step (including `>=` in the pivot search) is a
//! breaking change to numeric output.
use tracing::debug;

use crate::error::MatrixError;
use crate::mat4::Matrix4x4;
use crate::scalar::Real;

/// Free-function form of [`Matrix4x4::try_inverse`].
pub fn inverse<T: Real>(m: &Matrix4x4<T>) -> Result<Matrix4x4<T>, MatrixError> {
    m.try_inverse()
}

pub(crate) fn gauss_jordan<T: Real>(m: [[T; 4]; 4]) -> Result<[[T; 4]; 4], MatrixError> {
    let mut indxc = [0usize; 4];
    let mut indxr = [0usize; 4];
    let mut ipiv = [0u8; 4];
    let mut inv = m;

    for i in 0..4 {
        let mut irow = 0;
        let mut icol = 0;
        let mut big = T::zero();

        // Largest remaining element; later equal candidates win.
        for j in 0..4 {
            if ipiv[j] == 1 {
                continue;
            }
            for k in 0..4 {
                if ipiv[k] == 0 {
                    let mag = inv[j][k].abs();
                    if mag >= big {
                        big = mag;
                        irow = j;
                        icol = k;
                    }
                } else if ipiv[k] > 1 {
                    debug!(column = k, "singular matrix: pivot column reused");
                    return Err(MatrixError::SingularPivotColumn { column: k });
                }
            }
        }

        ipiv[icol] += 1;
        if irow != icol {
            inv.swap(irow, icol);
        }
        indxr[i] = irow;
        indxc[i] = icol;

        if inv[icol][icol] == T::zero() {
            debug!(column = icol, "singular matrix: zero pivot");
            return Err(MatrixError::ZeroPivot { column: icol });
        }

        let pivinv = inv[icol][icol].recip();
        inv[icol][icol] = T::one();
        for e in &mut inv[icol] {
            *e = *e * pivinv;
        }

        let pivot_row = inv[icol];
        for (j, row) in inv.iter_mut().enumerate() {
            if j == icol {
                continue;
            }
            let save = row[icol];
            row[icol] = T::zero();
            for k in 0..4 {
                row[k] = row[k] - pivot_row[k] * save;
            }
        }
    }

    for j in (0..4).rev() {
        if indxr[j] != indxc[j] {
            for row in &mut inv {
                row.swap(indxr[j], indxc[j]);
            }
        }
    }

    Ok(inv)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permutation_matrix_requires_row_swaps() {
        let p = [
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ];
        let expected = [
            [0.0, 0.0, 1.0, 0.0],
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ];
        assert_eq!(gauss_jordan::<f64>(p), Ok(expected));
    }

    #[test]
    fn all_zero_input_fails_on_zero_pivot() {
        assert!(matches!(
            gauss_jordan::<f32>([[0.0; 4]; 4]),
            Err(MatrixError::ZeroPivot { .. })
        ));
    }

    #[test]
    fn nan_input_reaches_the_reused_pivot_column_check() {
        // abs(NaN) >= x is always false, so column 0 is picked twice and the
        // third search trips over it.
        assert_eq!(
            gauss_jordan::<f64>([[f64::NAN; 4]; 4]),
            Err(MatrixError::SingularPivotColumn { column: 0 })
        );
    }
}
