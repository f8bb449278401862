// SPDX-License-Identifier: Apache-2.0

//! The decoder family: recovers polynomial coefficients from a set of
//! `(x, y)` evaluations, tolerating either erasures (missing shares, known
//! positions) or errors (corrupted shares, unknown positions).

pub mod berlekamp_welch;
pub mod erasure;

use crate::error::CryptoError;

pub use berlekamp_welch::BerlekampWelchDecoder;
pub use erasure::ErasureDecoder;

/// A decoder bound to a fixed list of x-coordinates and a threshold `k`.
pub trait Decoder {
    /// Recovers the first `k` coefficients of the interpolated
    /// degree-`(k-1)` polynomial, evaluated at `f, f+1, ..., f+k-1`.
    /// `f = 0` is the call secret recovery makes, since the secret is the
    /// polynomial's constant term.
    fn decode(&self, y: &[u8], f: u8) -> Result<Vec<u8>, CryptoError>;
}

/// Chooses a decoder for the given x-coordinates and threshold.
///
/// - Exactly `k` shares with no excess: [`ErasureDecoder`] run against the
///   supplied points directly.
/// - More than `k` shares: still [`ErasureDecoder`], which tolerates the
///   redundant equations via `inverse_elim_dep_rows`.
/// - Error correction (possibly-corrupted, not just missing, shares) is
///   opted into explicitly via [`DecoderFactory::berlekamp_welch`], since it
///   changes the shape of the accepted input (`m = k + 2e` required).
pub struct DecoderFactory;

impl DecoderFactory {
    /// Builds the erasure (Lagrange) decoder for `xs` with threshold `k`.
    pub fn erasure(xs: &[u8], k: usize) -> Result<ErasureDecoder, CryptoError> {
        ErasureDecoder::new(xs, k)
    }

    /// Builds the Berlekamp-Welch error-correcting decoder for `xs` with
    /// threshold `k`, correcting up to `e = floor((m - k) / 2)` errors
    /// where `m = xs.len()`.
    pub fn berlekamp_welch(xs: &[u8], k: usize) -> Result<BerlekampWelchDecoder, CryptoError> {
        BerlekampWelchDecoder::new(xs, k)
    }
}
