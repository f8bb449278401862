// SPDX-License-Identifier: Apache-2.0

//! Error type for the `usrss` crate.

use thiserror::Error;
use usrss_cryptography::CryptoError;

/// Failures raised by the information-checking layer and the
/// [`crate::engine::CryptoEngine`] façade.
///
/// This is the only error type a caller of [`crate::engine::CryptoEngine`]
/// should need to match on; lower-level decoder/matrix failures are always
/// wrapped here with a cause.
#[derive(Debug, Error)]
pub enum UsrssError {
    /// `(k, n)` is cryptographically insufficient. Raised at
    /// construction time, fatal to the caller.
    #[error("weak security parameters: {0}")]
    WeakSecurity(#[source] CryptoError),

    /// A structural precondition was violated (bad share id, mismatched
    /// lengths, malformed wire encoding).
    #[error("invalid parameters: {0}")]
    InvalidParameters(#[source] CryptoError),

    /// Reconstruction could not proceed: too few shares passed
    /// information checking, or the underlying decoder's system was
    /// unsolvable. `valid` is always populated, even when zero.
    #[error("reconstruction failed: {cause} ({valid}/{required} shares valid)")]
    Reconstruction {
        valid: usize,
        required: usize,
        cause: String,
    },

    /// Fewer than `k` shares passed the information-checking majority
    /// test; reconstruction was not attempted.
    #[error("information checking rejected too many shares: {accepted}/{required} accepted")]
    IcValidation { accepted: usize, required: usize },
}

impl From<CryptoError> for UsrssError {
    fn from(err: CryptoError) -> Self {
        match &err {
            CryptoError::WeakSecurity { .. } => UsrssError::WeakSecurity(err),
            CryptoError::InvalidParameters(_) => UsrssError::InvalidParameters(err),
            CryptoError::Unsolvable(msg) => UsrssError::Reconstruction {
                valid: 0,
                required: 0,
                cause: msg.clone(),
            },
            CryptoError::Impossible(msg) => {
                unreachable!("internal invariant violated: {msg}")
            }
        }
    }
}
