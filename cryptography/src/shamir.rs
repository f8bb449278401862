// SPDX-License-Identifier: Apache-2.0

//! `ShamirPSS`: Shamir's Perfect Secret Sharing over GF(2⁸).
//!
//! Splits a byte-string into `n` shares such that any `k` reconstruct it
//! and fewer than `k` reveal nothing, by giving every byte its own random
//! degree-`(k-1)` polynomial with that byte as the constant term.

use crate::decoder::{Decoder, DecoderFactory};
use crate::error::CryptoError;
use crate::gf::Gf256;
use crate::random::RandomSource;
use crate::share::ShamirShare;
use zeroize::Zeroize;

/// Which decoder `reconstruct` should use to interpolate each byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReconstructMode {
    /// Plain Lagrange interpolation; assumes every supplied share is
    /// honest (erasures only, no corrupted values).
    Erasure,
    /// Berlekamp-Welch error correction; tolerates up to
    /// `floor((m - k) / 2)` corrupted shares among the `m` supplied.
    ErrorCorrecting,
}

/// Splits and reconstructs secrets via Shamir's scheme.
pub struct ShamirPss {
    k: usize,
    n: usize,
}

impl ShamirPss {
    /// Validates `(k, n)` and builds a sharing instance. Fails with
    /// [`CryptoError::WeakSecurity`] when `k <= 1`, `k > n`, or `n > 255`.
    pub fn new(k: usize, n: usize) -> Result<Self, CryptoError> {
        if k <= 1 || k > n || n > 255 {
            return Err(CryptoError::WeakSecurity { k, n });
        }
        Ok(Self { k, n })
    }

    pub fn k(&self) -> usize {
        self.k
    }

    pub fn n(&self) -> usize {
        self.n
    }

    /// Splits `secret` into `n` shares, ids `1..=n`.
    ///
    /// For each byte, draws `k - 1` random non-zero coefficients, fixes the
    /// constant term to that byte, and evaluates the resulting degree-
    /// `(k-1)` polynomial at each share id.
    pub fn split<R: RandomSource>(
        &self,
        secret: &[u8],
        rng: &mut R,
    ) -> Result<Vec<ShamirShare>, CryptoError> {
        if secret.is_empty() {
            return Err(CryptoError::InvalidParameters(
                "cannot split an empty secret".into(),
            ));
        }

        let mut ys: Vec<Vec<u8>> = vec![Vec::with_capacity(secret.len()); self.n];

        for &byte in secret {
            let mut coeffs = vec![0u8; self.k];
            if self.k > 1 {
                rng.fill_bytes(&mut coeffs[1..]);
            }
            coeffs[0] = byte;

            for (j, y_vec) in ys.iter_mut().enumerate() {
                let id = (j + 1) as u8;
                y_vec.push(Gf256::evaluate_at(&coeffs, id));
            }

            coeffs.zeroize();
        }

        ys.into_iter()
            .enumerate()
            .map(|(j, y)| {
                ShamirShare::new((j + 1) as u8, y).map_err(|_| {
                    CryptoError::Impossible(
                        "share() produced a share with id 0, which cannot happen for j+1 in 1..=n"
                            .into(),
                    )
                })
            })
            .collect()
    }

    /// Reconstructs the secret from `shares`. Requires at least `k`
    /// shares and fails otherwise. `mode` selects whether shares are
    /// trusted to be merely missing (erasure-only) or might be corrupted
    /// (error-correcting).
    pub fn reconstruct(
        &self,
        shares: &[ShamirShare],
        mode: ReconstructMode,
    ) -> Result<Vec<u8>, CryptoError> {
        if shares.len() < self.k {
            return Err(CryptoError::InvalidParameters(format!(
                "need at least {} shares, got {}",
                self.k,
                shares.len()
            )));
        }

        let share_len = shares[0].len();
        if shares.iter().any(|s| s.len() != share_len) {
            return Err(CryptoError::InvalidParameters(
                "all shares must carry the same number of bytes".into(),
            ));
        }

        let xs: Vec<u8> = shares.iter().map(|s| s.id()).collect();
        let decoder: Box<dyn Decoder> = match mode {
            ReconstructMode::Erasure => Box::new(DecoderFactory::erasure(&xs, self.k)?),
            ReconstructMode::ErrorCorrecting => {
                Box::new(DecoderFactory::berlekamp_welch(&xs, self.k)?)
            }
        };

        let mut secret = Vec::with_capacity(share_len);
        for i in 0..share_len {
            let y: Vec<u8> = shares.iter().map(|s| s.y()[i]).collect();
            let coeffs = decoder.decode(&y, 0)?;
            secret.push(coeffs[0]);
        }
        Ok(secret)
    }
}
