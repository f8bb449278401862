// SPDX-License-Identifier: Apache-2.0

//! [`CryptoEngine`]: the façade composing [`usrss_cryptography::shamir::ShamirPss`]
//! and [`crate::information_checking::InformationChecking`] into the
//! public `share`/`reconstruct` API (spec §4.I).

use crate::error::UsrssError;
use crate::information_checking::InformationChecking;
use crate::share::VssShare;
use usrss_cryptography::mac::{HmacSha256Helper, MacHelper, Poly1305Helper};
use usrss_cryptography::random::RandomSource;
use usrss_cryptography::shamir::{ReconstructMode, ShamirPss};
use usrss_cryptography::share::ShamirShare;

/// Default bound on secret length used to size IC tags, matching the
/// source's hard-coded 4 MiB constant (spec §9). Callers who care about a
/// tighter bound should use [`CryptoEngine::new`] directly.
pub const DEFAULT_MAX_DATA_LEN: usize = 4 * 1024 * 1024;

/// Default information-checking security parameter `E` (spec §4.H):
/// forgery probability over a `max_data_len`-byte secret is at most
/// `2^-E`.
pub const DEFAULT_SECURITY_PARAM_BITS: u32 = 128;

/// Which MAC primitive backs the information-checking layer's cross-tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MacBackend {
    HmacSha256,
    Poly1305,
}

impl MacBackend {
    fn build(self) -> Box<dyn MacHelper> {
        match self {
            MacBackend::HmacSha256 => Box::new(HmacSha256Helper),
            MacBackend::Poly1305 => Box::new(Poly1305Helper),
        }
    }
}

/// Composes Shamir's secret sharing with Cevallos information checking:
/// `share()` splits a byte-string into verifiable shares, `reconstruct()`
/// validates a presented set and recovers the secret if enough pass.
pub struct CryptoEngine {
    pss: ShamirPss,
    ic: InformationChecking,
    k: usize,
}

impl CryptoEngine {
    /// Builds an engine for a `k`-of-`n` scheme. `max_data_len` sizes the
    /// IC tag length (spec §4.H/§9); `security_param_bits` is the target
    /// forgery-probability exponent `E`. Fails with
    /// [`UsrssError::WeakSecurity`] if `(k, n)` is cryptographically
    /// insufficient.
    pub fn new(
        k: usize,
        n: usize,
        backend: MacBackend,
        max_data_len: usize,
        security_param_bits: u32,
    ) -> Result<Self, UsrssError> {
        let pss = ShamirPss::new(k, n)?;
        let ic = InformationChecking::new(backend.build(), n, k, max_data_len, security_param_bits)?;
        Ok(Self { pss, ic, k })
    }

    /// Convenience constructor using the historical 4 MiB max data length
    /// and `E = 128` security parameter.
    pub fn with_defaults(k: usize, n: usize, backend: MacBackend) -> Result<Self, UsrssError> {
        Self::new(k, n, backend, DEFAULT_MAX_DATA_LEN, DEFAULT_SECURITY_PARAM_BITS)
    }

    /// Convenience constructor overriding only the security parameter.
    pub fn with_security_param(
        k: usize,
        n: usize,
        backend: MacBackend,
        security_param_bits: u32,
    ) -> Result<Self, UsrssError> {
        Self::new(k, n, backend, DEFAULT_MAX_DATA_LEN, security_param_bits)
    }

    pub fn k(&self) -> usize {
        self.k
    }

    /// Splits `data` into `n` verifiable shares, one per holder.
    pub fn share<R: RandomSource>(&self, data: &[u8], rng: &mut R) -> Result<Vec<VssShare>, UsrssError> {
        let plain = self.pss.split(data, rng)?;
        self.ic.create_tags(&plain, rng)
    }

    /// Validates `shares` via information checking and, if at least `k`
    /// pass, reconstructs the secret with Berlekamp-Welch error
    /// correction over whatever passed validation (tolerating further
    /// erasures/errors among the accepted set, not just IC rejects).
    pub fn reconstruct(&self, shares: &[VssShare]) -> Result<Vec<u8>, UsrssError> {
        let accepted = self.ic.check_shares(shares);
        if accepted.len() < self.k {
            return Err(UsrssError::IcValidation {
                accepted: accepted.len(),
                required: self.k,
            });
        }

        let plain: Vec<ShamirShare> = accepted.iter().map(|s| s.inner().clone()).collect();
        let mode = if plain.len() > self.k {
            ReconstructMode::ErrorCorrecting
        } else {
            ReconstructMode::Erasure
        };
        self.pss.reconstruct(&plain, mode).map_err(|e| UsrssError::Reconstruction {
            valid: accepted.len(),
            required: self.k,
            cause: e.to_string(),
        })
    }
}
