// SPDX-License-Identifier: Apache-2.0

//! Erasure (Lagrange-equivalent) decoding: recovers a degree-`(k-1)`
//! polynomial's coefficients from `m >= k` evaluations at known,
//! uncorrupted points, by inverting the Vandermonde system those points
//! define.

use super::Decoder;
use crate::error::CryptoError;
use crate::gf::Gf256;
use crate::matrix::GfMatrix;

pub struct ErasureDecoder {
    xs: Vec<u8>,
    k: usize,
    inverse: GfMatrix,
    kept: Vec<usize>,
}

impl ErasureDecoder {
    /// Builds the decoder for x-coordinates `xs` with threshold `k`.
    /// `xs.len()` may exceed `k`; the excess rows of the resulting
    /// Vandermonde system are tolerated (and dropped) by
    /// `inverse_elim_dep_rows`.
    pub fn new(xs: &[u8], k: usize) -> Result<Self, CryptoError> {
        if xs.len() < k {
            return Err(CryptoError::InvalidParameters(format!(
                "erasure decoder needs at least {k} points, got {}",
                xs.len()
            )));
        }
        let vandermonde = GfMatrix::vandermonde(xs, k);
        let (inverse, kept) = vandermonde.inverse_elim_dep_rows()?;
        Ok(Self { xs: xs.to_vec(), k, inverse, kept })
    }
}

impl Decoder for ErasureDecoder {
    fn decode(&self, y: &[u8], f: u8) -> Result<Vec<u8>, CryptoError> {
        if y.len() != self.xs.len() {
            return Err(CryptoError::InvalidParameters(format!(
                "expected {} y-values, got {}",
                self.xs.len(),
                y.len()
            )));
        }

        let y_reduced: Vec<u8> = self.kept.iter().map(|&i| y[i]).collect();
        let coeffs = self.inverse.right_multiply(&y_reduced)?;

        let mut out = Vec::with_capacity(self.k);
        for i in 0..self.k {
            let x = f.wrapping_add(i as u8);
            out.push(Gf256::evaluate_at(&coeffs, x));
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn poly_eval(coeffs: &[u8], x: u8) -> u8 {
        Gf256::evaluate_at(coeffs, x)
    }

    #[test]
    fn recovers_exact_k_points() {
        let coeffs = [42u8, 7, 13];
        let xs = [1u8, 2, 3];
        let ys: Vec<u8> = xs.iter().map(|&x| poly_eval(&coeffs, x)).collect();

        let decoder = ErasureDecoder::new(&xs, 3).unwrap();
        let recovered = decoder.decode(&ys, 0).unwrap();
        assert_eq!(recovered, coeffs);
    }

    #[test]
    fn tolerates_redundant_rows() {
        let coeffs = [5u8, 200, 9];
        let xs = [1u8, 2, 3, 4, 5];
        let ys: Vec<u8> = xs.iter().map(|&x| poly_eval(&coeffs, x)).collect();

        let decoder = ErasureDecoder::new(&xs, 3).unwrap();
        let recovered = decoder.decode(&ys, 0).unwrap();
        assert_eq!(recovered, coeffs);
    }

    #[test]
    fn too_few_points_fails_construction() {
        assert!(ErasureDecoder::new(&[1, 2], 3).is_err());
    }

    #[test]
    fn mismatched_y_length_fails() {
        let decoder = ErasureDecoder::new(&[1, 2, 3], 3).unwrap();
        assert!(decoder.decode(&[1, 2], 0).is_err());
    }
}
