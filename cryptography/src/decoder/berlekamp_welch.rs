// SPDX-License-Identifier: Apache-2.0

//! Berlekamp-Welch error-correcting decoding: recovers a degree-`(k-1)`
//! message polynomial from `m = k + 2e` evaluations, up to `e` of which may
//! have been corrupted by a dishonest or faulty holder (as opposed to
//! simply missing, which [`super::erasure::ErasureDecoder`] already
//! handles).
//!
//! The classic construction: find a monic error-locator polynomial `E` of
//! degree `e` and a polynomial `Q` of degree `< k + e` such that
//! `E(x_i) * y_i = Q(x_i)` for every supplied point. Wherever `E(x_i) = 0`
//! the constraint holds regardless of `y_i`, which is exactly how `E`
//! "vetoes" the corrupted points. `Q / E` is then the message polynomial
//! whose evaluation at `x = 0` (or `f..f+k-1` in general) is what
//! [`Decoder::decode`] returns.

use super::erasure::ErasureDecoder;
use super::Decoder;
use crate::error::CryptoError;
use crate::gf::Gf256;
use crate::matrix::GfMatrix;

pub struct BerlekampWelchDecoder {
    xs: Vec<u8>,
    k: usize,
    e: usize,
}

impl BerlekampWelchDecoder {
    /// Builds the decoder for x-coordinates `xs` with threshold `k`. The
    /// number of correctable errors is `e = floor((m - k) / 2)` where
    /// `m = xs.len()`.
    pub fn new(xs: &[u8], k: usize) -> Result<Self, CryptoError> {
        if xs.len() < k {
            return Err(CryptoError::InvalidParameters(format!(
                "Berlekamp-Welch decoder needs at least {k} points, got {}",
                xs.len()
            )));
        }
        let e = (xs.len() - k) / 2;
        Ok(Self { xs: xs.to_vec(), k, e })
    }

    /// How many errors this decoder is configured to correct.
    pub fn correctable_errors(&self) -> usize {
        self.e
    }
}

impl Decoder for BerlekampWelchDecoder {
    fn decode(&self, y: &[u8], f: u8) -> Result<Vec<u8>, CryptoError> {
        if y.len() != self.xs.len() {
            return Err(CryptoError::InvalidParameters(format!(
                "expected {} y-values, got {}",
                self.xs.len(),
                y.len()
            )));
        }

        if self.e == 0 {
            // no error budget: identical to plain interpolation.
            return ErasureDecoder::new(&self.xs, self.k)?.decode(y, f);
        }

        let m = self.xs.len();
        let k = self.k;
        let e = self.e;
        let q_len = k + e;

        // row i: [x_i^0 .. x_i^(q_len-1) | y_i*x_i^0 .. y_i*x_i^(e-1)]
        // rhs i: y_i * x_i^e
        let mut rows = Vec::with_capacity(m);
        let mut rhs = Vec::with_capacity(m);
        for (i, &x) in self.xs.iter().enumerate() {
            let yi = y[i];
            let mut row = Vec::with_capacity(m);
            let mut power = 1u8;
            for _ in 0..q_len {
                row.push(power);
                power = Gf256::mult(power, x);
            }
            let mut ye_power = 1u8;
            for _ in 0..e {
                row.push(Gf256::mult(yi, ye_power));
                ye_power = Gf256::mult(ye_power, x);
            }
            rows.push(row);
            let x_pow_e = pow(x, e as u32);
            rhs.push(Gf256::mult(yi, x_pow_e));
        }

        // `m` rows against `q_len + e` unknowns: square when `m - k` is
        // even, one row short of square (one redundant equation) when
        // `m - k` is odd. `inverse_elim_dep_rows` handles both: it drops
        // whatever single row turns out dependent instead of requiring
        // an exactly-square system up front.
        let system = GfMatrix::from_rows(rows)?;
        let (inverse, kept) = system.inverse_elim_dep_rows()?;
        let rhs: Vec<u8> = kept.iter().map(|&i| rhs[i]).collect();
        let unknowns = inverse.right_multiply(&rhs)?;

        let q_coeffs = unknowns[..q_len].to_vec();
        let mut e_coeffs = unknowns[q_len..].to_vec();
        e_coeffs.push(1); // monic leading coefficient of E

        let (quotient, remainder) = poly_divmod(&q_coeffs, &e_coeffs)?;
        if remainder.iter().any(|&c| c != 0) {
            return Err(CryptoError::Unsolvable(
                "Berlekamp-Welch division left a non-zero remainder: too many errors".into(),
            ));
        }

        let mut message = quotient;
        message.resize(k, 0);

        let mut out = Vec::with_capacity(k);
        for i in 0..k {
            let x = f.wrapping_add(i as u8);
            out.push(Gf256::evaluate_at(&message, x));
        }
        Ok(out)
    }
}

fn pow(base: u8, exp: u32) -> u8 {
    let mut acc = 1u8;
    for _ in 0..exp {
        acc = Gf256::mult(acc, base);
    }
    acc
}

/// Highest index with a non-zero coefficient, or `None` for the zero
/// polynomial. `poly` is coefficients low-degree-first.
fn degree(poly: &[u8]) -> Option<usize> {
    poly.iter().rposition(|&c| c != 0)
}

/// Polynomial long division over GF(2⁸), coefficients low-degree-first.
/// Returns `(quotient, remainder)`.
fn poly_divmod(dividend: &[u8], divisor: &[u8]) -> Result<(Vec<u8>, Vec<u8>), CryptoError> {
    let divisor_deg = degree(divisor).ok_or_else(|| {
        CryptoError::Unsolvable("division by the zero polynomial".into())
    })?;

    let dividend_deg = match degree(dividend) {
        Some(d) => d,
        None => return Ok((vec![0u8], vec![0u8])),
    };

    if dividend_deg < divisor_deg {
        return Ok((vec![0u8], dividend.to_vec()));
    }

    let mut remainder = dividend.to_vec();
    let q_len = dividend_deg - divisor_deg + 1;
    let mut quotient = vec![0u8; q_len];
    let lead_inv = Gf256::inverse(divisor[divisor_deg])?;

    for shift in (0..q_len).rev() {
        let pos = divisor_deg + shift;
        let coeff = remainder[pos];
        if coeff == 0 {
            continue;
        }
        let factor = Gf256::mult(coeff, lead_inv);
        quotient[shift] = factor;
        for (j, &dc) in divisor.iter().enumerate().take(divisor_deg + 1) {
            if dc == 0 {
                continue;
            }
            let idx = shift + j;
            remainder[idx] = Gf256::sub(remainder[idx], Gf256::mult(factor, dc));
        }
    }

    remainder.truncate(divisor_deg);
    if remainder.is_empty() {
        remainder = vec![0u8];
    }
    Ok((quotient, remainder))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn poly_eval(coeffs: &[u8], x: u8) -> u8 {
        Gf256::evaluate_at(coeffs, x)
    }

    #[test]
    fn corrects_errors_within_budget() {
        let coeffs = [9u8, 200, 1]; // k = 3
        let xs = [1u8, 2, 3, 4, 5, 6, 7]; // m = 7, e = 2
        let mut ys: Vec<u8> = xs.iter().map(|&x| poly_eval(&coeffs, x)).collect();

        // corrupt 2 of the 7 shares
        ys[0] ^= 0x5A;
        ys[4] ^= 0x01;

        let decoder = BerlekampWelchDecoder::new(&xs, 3).unwrap();
        assert_eq!(decoder.correctable_errors(), 2);
        let recovered = decoder.decode(&ys, 0).unwrap();
        assert_eq!(recovered, coeffs);
    }

    #[test]
    fn odd_redundancy_with_no_corruption_still_decodes() {
        // m - k = 3 is odd, so e = 1 and the BW system has one more row
        // (m = 6) than unknowns (q_len + e = k + 2e = 5): one equation is
        // redundant, not erroneous. This must not be treated as singular.
        let coeffs = [9u8, 200, 1]; // k = 3
        let xs = [1u8, 2, 3, 4, 5, 6]; // m = 6, e = 1
        let ys: Vec<u8> = xs.iter().map(|&x| poly_eval(&coeffs, x)).collect();

        let decoder = BerlekampWelchDecoder::new(&xs, 3).unwrap();
        assert_eq!(decoder.correctable_errors(), 1);
        let recovered = decoder.decode(&ys, 0).unwrap();
        assert_eq!(recovered, coeffs);
    }

    #[test]
    fn odd_redundancy_still_corrects_within_budget() {
        let coeffs = [9u8, 200, 1]; // k = 3
        let xs = [1u8, 2, 3, 4, 5, 6]; // m = 6, e = 1
        let mut ys: Vec<u8> = xs.iter().map(|&x| poly_eval(&coeffs, x)).collect();
        ys[2] ^= 0x7E;

        let decoder = BerlekampWelchDecoder::new(&xs, 3).unwrap();
        let recovered = decoder.decode(&ys, 0).unwrap();
        assert_eq!(recovered, coeffs);
    }

    #[test]
    fn too_many_errors_fails() {
        let coeffs = [9u8, 200, 1];
        let xs = [1u8, 2, 3, 4, 5, 6, 7];
        let mut ys: Vec<u8> = xs.iter().map(|&x| poly_eval(&coeffs, x)).collect();

        // corrupt 3, exceeding e = 2
        ys[0] ^= 0x5A;
        ys[2] ^= 0x33;
        ys[4] ^= 0x01;

        let decoder = BerlekampWelchDecoder::new(&xs, 3).unwrap();
        match decoder.decode(&ys, 0) {
            Err(_) => {}
            Ok(recovered) => assert_ne!(recovered, coeffs),
        }
    }

    #[test]
    fn zero_error_budget_behaves_like_erasure_decoding() {
        let coeffs = [1u8, 2, 3];
        let xs = [1u8, 2, 3];
        let ys: Vec<u8> = xs.iter().map(|&x| poly_eval(&coeffs, x)).collect();

        let decoder = BerlekampWelchDecoder::new(&xs, 3).unwrap();
        assert_eq!(decoder.correctable_errors(), 0);
        assert_eq!(decoder.decode(&ys, 0).unwrap(), coeffs);
    }
}
