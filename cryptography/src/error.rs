// SPDX-License-Identifier: Apache-2.0

//! Error type for the `usrss-cryptography` crate.

use thiserror::Error;

/// Failures raised by the field, matrix, decoder and Shamir-sharing layers.
///
/// Callers of the higher-level `usrss` crate should not normally match on
/// this type directly; it is wrapped into `usrss::error::UsrssError` at the
/// information-checking/engine boundary.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CryptoError {
    /// The `(k, n)` parameter pair is cryptographically insufficient:
    /// `k <= 1`, `k > n`, or `n > 255`.
    #[error("weak security parameters: threshold {k}, shares {n}")]
    WeakSecurity { k: usize, n: usize },

    /// A structural precondition was violated: a zero share id, mismatched
    /// share lengths, or an out-of-range field element.
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    /// A decoder's linear system had no solution (singular Vandermonde
    /// matrix, or a Berlekamp–Welch division with non-zero remainder).
    #[error("unsolvable decoding system: {0}")]
    Unsolvable(String),

    /// An internal invariant was violated that a correct implementation
    /// must never trigger.
    #[error("internal invariant violated: {0}")]
    Impossible(String),
}
