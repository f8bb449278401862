// SPDX-License-Identifier: Apache-2.0

//! Matrices over GF(2⁸), used by the erasure decoder to invert the
//! Vandermonde-style system that recovers polynomial coefficients from
//! share evaluations.

use crate::error::CryptoError;
use crate::gf::Gf256;

/// A row-major matrix over GF(2⁸).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GfMatrix {
    rows: usize,
    cols: usize,
    data: Vec<Vec<u8>>,
}

impl GfMatrix {
    /// Builds a matrix from its rows. All rows must have equal length.
    pub fn from_rows(data: Vec<Vec<u8>>) -> Result<Self, CryptoError> {
        let rows = data.len();
        let cols = data.first().map(|r| r.len()).unwrap_or(0);
        if data.iter().any(|r| r.len() != cols) {
            return Err(CryptoError::InvalidParameters(
                "matrix rows have inconsistent length".into(),
            ));
        }
        Ok(Self { rows, cols, data })
    }

    /// The `k x k` Vandermonde-style matrix whose row `i` is
    /// `[1, x_i, x_i^2, ..., x_i^(k-1)]`, used to solve for the
    /// coefficients of a degree-`k-1` polynomial from `k` evaluations.
    pub fn vandermonde(xs: &[u8], k: usize) -> Self {
        let data = xs
            .iter()
            .map(|&x| {
                let mut row = Vec::with_capacity(k);
                let mut power = 1u8;
                for _ in 0..k {
                    row.push(power);
                    power = Gf256::mult(power, x);
                }
                row
            })
            .collect();
        Self { rows: xs.len(), cols: k, data }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Matrix-vector product `M * v`. Fails if `v.len() != self.cols`.
    pub fn right_multiply(&self, v: &[u8]) -> Result<Vec<u8>, CryptoError> {
        if v.len() != self.cols {
            return Err(CryptoError::InvalidParameters(format!(
                "matrix has {} columns but vector has {} entries",
                self.cols,
                v.len()
            )));
        }
        Ok(self
            .data
            .iter()
            .map(|row| {
                row.iter()
                    .zip(v)
                    .fold(0u8, |acc, (&a, &b)| Gf256::add(acc, Gf256::mult(a, b)))
            })
            .collect())
    }

    /// Gauss-Jordan inverse. Fails with [`CryptoError::Unsolvable`] if the
    /// matrix is singular or non-square.
    pub fn inverse(&self) -> Result<Self, CryptoError> {
        if self.rows != self.cols {
            return Err(CryptoError::InvalidParameters(
                "only square matrices can be inverted".into(),
            ));
        }
        let n = self.rows;
        let mut aug: Vec<Vec<u8>> = self
            .data
            .iter()
            .enumerate()
            .map(|(i, row)| {
                let mut r = row.clone();
                r.resize(2 * n, 0);
                r[n + i] = 1;
                r
            })
            .collect();

        gauss_jordan(&mut aug, n).ok_or_else(|| {
            CryptoError::Unsolvable("matrix is singular: no inverse exists".into())
        })?;

        Ok(Self {
            rows: n,
            cols: n,
            data: aug.into_iter().map(|r| r[n..].to_vec()).collect(),
        })
    }

    /// Like [`GfMatrix::inverse`], but for a (possibly non-square,
    /// over-determined) system: if a pivot column has no non-zero row
    /// among the remaining rows, that row is dropped as redundant rather
    /// than failing outright. Used by the erasure decoder when more than
    /// `k` shares are supplied.
    ///
    /// Returns the inverse of the square submatrix formed by the retained
    /// rows, and the indices of the rows that were kept (in elimination
    /// order, which matches the row order of the returned inverse).
    pub fn inverse_elim_dep_rows(&self) -> Result<(Self, Vec<usize>), CryptoError> {
        let n = self.cols;
        if self.rows < n {
            return Err(CryptoError::Unsolvable(
                "fewer rows than columns: system is underdetermined".into(),
            ));
        }

        let mut aug: Vec<Vec<u8>> = self
            .data
            .iter()
            .map(|row| {
                let mut r = row.clone();
                r.resize(2 * n, 0);
                r
            })
            .collect();
        let mut kept: Vec<usize> = (0..self.rows).collect();

        let mut pivot_row = 0usize;
        for col in 0..n {
            // find a row at or below pivot_row with a non-zero entry in `col`
            let found = (pivot_row..aug.len()).find(|&r| aug[r][col] != 0);
            match found {
                Some(r) => {
                    aug.swap(pivot_row, r);
                    kept.swap(pivot_row, r);
                }
                None => {
                    // no candidate pivot: every remaining row is dependent
                    // in this column; drop rows until one works, or we run
                    // out.
                    return Err(CryptoError::Unsolvable(
                        "no independent row available for pivot column".into(),
                    ));
                }
            }

            aug[pivot_row][n + pivot_row] = 1;
            let inv = Gf256::inverse(aug[pivot_row][col])?;
            for c in 0..2 * n {
                aug[pivot_row][c] = Gf256::mult(aug[pivot_row][c], inv);
            }

            for r in 0..aug.len() {
                if r == pivot_row {
                    continue;
                }
                let factor = aug[r][col];
                if factor == 0 {
                    continue;
                }
                for c in 0..2 * n {
                    aug[r][c] = Gf256::add(aug[r][c], Gf256::mult(factor, aug[pivot_row][c]));
                }
            }
            pivot_row += 1;
        }

        let data: Vec<Vec<u8>> = aug[..n].iter().map(|r| r[n..].to_vec()).collect();
        let kept = kept[..n].to_vec();
        Ok((Self { rows: n, cols: n, data }, kept))
    }
}

/// In-place Gauss-Jordan elimination on an `n x 2n` augmented matrix.
/// Returns `None` if a pivot column has no non-zero row (singular).
fn gauss_jordan(aug: &mut [Vec<u8>], n: usize) -> Option<()> {
    for col in 0..n {
        let pivot = (col..n).find(|&r| aug[r][col] != 0)?;
        aug.swap(col, pivot);

        let inv = Gf256::inverse(aug[col][col]).ok()?;
        for c in 0..2 * n {
            aug[col][c] = Gf256::mult(aug[col][c], inv);
        }

        for r in 0..n {
            if r == col {
                continue;
            }
            let factor = aug[r][col];
            if factor == 0 {
                continue;
            }
            for c in 0..2 * n {
                aug[r][c] = Gf256::add(aug[r][c], Gf256::mult(factor, aug[col][c]));
            }
        }
    }
    Some(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(n: usize) -> GfMatrix {
        let data = (0..n)
            .map(|i| (0..n).map(|j| if i == j { 1 } else { 0 }).collect())
            .collect();
        GfMatrix::from_rows(data).unwrap()
    }

    #[test]
    fn inverse_of_identity_is_identity() {
        let id = identity(4);
        assert_eq!(id.inverse().unwrap(), id);
    }

    #[test]
    fn vandermonde_inverse_solves_system() {
        let xs = [1u8, 2, 3, 4];
        let v = GfMatrix::vandermonde(&xs, 4);
        let inv = v.inverse().unwrap();

        // M * inverse(M) == I
        let product_rows: Vec<Vec<u8>> = (0..4)
            .map(|i| {
                (0..4)
                    .map(|j| {
                        (0..4).fold(0u8, |acc, k| {
                            Gf256::add(acc, Gf256::mult(v.data[i][k], inv.data[k][j]))
                        })
                    })
                    .collect()
            })
            .collect();
        assert_eq!(product_rows, identity(4).data);
    }

    #[test]
    fn singular_matrix_fails() {
        // two identical rows -> singular
        let m = GfMatrix::from_rows(vec![vec![1, 2], vec![1, 2]]).unwrap();
        assert!(m.inverse().is_err());
    }

    #[test]
    fn right_multiply_dimension_mismatch_fails() {
        let m = identity(3);
        assert!(m.right_multiply(&[1, 2]).is_err());
    }

    #[test]
    fn inverse_elim_dep_rows_tolerates_redundant_rows() {
        // 4 rows, 3 columns: one row is a repeat, should be dropped.
        let xs = [1u8, 2, 3, 2, 5];
        let v = GfMatrix::vandermonde(&xs, 3);
        let (inv, kept) = v.inverse_elim_dep_rows().unwrap();
        assert_eq!(inv.rows(), 3);
        assert_eq!(kept.len(), 3);
        // kept rows must themselves form a non-singular Vandermonde system
        let kept_xs: Vec<u8> = kept.iter().map(|&i| xs[i]).collect();
        let sub = GfMatrix::vandermonde(&kept_xs, 3);
        assert!(sub.inverse().is_ok());
        let _ = inv;
    }
}
