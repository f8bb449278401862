// SPDX-License-Identifier: Apache-2.0

//! The `MacHelper` contract: fixed-length, deterministic MAC computation
//! and verification over an arbitrary key, backed by either HMAC-SHA256
//! or Poly1305. [`ShortenedMacHelper`] truncates a helper's tags to a
//! caller-chosen length, as the information-checking layer does to bound
//! its per-pair tag size.

use crate::error::CryptoError;
use hmac::{Hmac, Mac as HmacMac};
use poly1305::{
    universal_hash::{KeyInit, UniversalHash},
    Poly1305,
};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Computes and verifies fixed-length MAC tags over a keyed message.
pub trait MacHelper {
    /// Size in bytes of the key this helper expects.
    fn key_len(&self) -> usize;

    /// Size in bytes of the tag this helper produces.
    fn tag_len(&self) -> usize;

    /// Computes `MAC(key, data)`. Fails if `key.len() != self.key_len()`.
    fn compute_mac(&self, data: &[u8], key: &[u8]) -> Result<Vec<u8>, CryptoError>;

    /// Verifies `tag == MAC(key, data)`.
    fn verify_mac(&self, data: &[u8], key: &[u8], tag: &[u8]) -> Result<bool, CryptoError> {
        Ok(self.compute_mac(data, key)? == tag)
    }
}

/// HMAC-SHA256, 32-byte key, 32-byte tag.
#[derive(Debug, Default, Clone, Copy)]
pub struct HmacSha256Helper;

impl MacHelper for HmacSha256Helper {
    fn key_len(&self) -> usize {
        32
    }

    fn tag_len(&self) -> usize {
        32
    }

    fn compute_mac(&self, data: &[u8], key: &[u8]) -> Result<Vec<u8>, CryptoError> {
        if key.len() != self.key_len() {
            return Err(CryptoError::InvalidParameters(format!(
                "HMAC-SHA256 requires a {}-byte key, got {}",
                self.key_len(),
                key.len()
            )));
        }
        let mut mac = HmacSha256::new_from_slice(key)
            .map_err(|e| CryptoError::InvalidParameters(e.to_string()))?;
        HmacMac::update(&mut mac, data);
        Ok(HmacMac::finalize(mac).into_bytes().to_vec())
    }
}

/// Poly1305, 32-byte (r, s) key, 16-byte tag. Used here purely as a
/// keyed, deterministic one-time MAC per `MacHelper`'s requirements,
/// not as an AEAD tag over a ciphertext.
#[derive(Debug, Default, Clone, Copy)]
pub struct Poly1305Helper;

impl MacHelper for Poly1305Helper {
    fn key_len(&self) -> usize {
        32
    }

    fn tag_len(&self) -> usize {
        16
    }

    fn compute_mac(&self, data: &[u8], key: &[u8]) -> Result<Vec<u8>, CryptoError> {
        if key.len() != self.key_len() {
            return Err(CryptoError::InvalidParameters(format!(
                "Poly1305 requires a {}-byte key, got {}",
                self.key_len(),
                key.len()
            )));
        }
        let key_array = poly1305::Key::from_slice(key);
        let mut mac = Poly1305::new(key_array);
        mac.update_padded(data);
        Ok(mac.finalize().to_vec())
    }
}

impl MacHelper for Box<dyn MacHelper> {
    fn key_len(&self) -> usize {
        (**self).key_len()
    }

    fn tag_len(&self) -> usize {
        (**self).tag_len()
    }

    fn compute_mac(&self, data: &[u8], key: &[u8]) -> Result<Vec<u8>, CryptoError> {
        (**self).compute_mac(data, key)
    }
}

/// Wraps another [`MacHelper`], truncating every tag it produces to the
/// first `t` bytes. `t` is computed from the information-checking layer's
/// security parameter (see `usrss::information_checking`); truncation
/// bounds forgery probability to `2^-(8t)` per attempted substitution.
pub struct ShortenedMacHelper<H: MacHelper> {
    inner: H,
    tag_len: usize,
}

impl<H: MacHelper> ShortenedMacHelper<H> {
    /// Wraps `inner`, truncating tags to `tag_len` bytes. Fails if
    /// `tag_len` exceeds the inner helper's native tag length.
    pub fn new(inner: H, tag_len: usize) -> Result<Self, CryptoError> {
        if tag_len == 0 || tag_len > inner.tag_len() {
            return Err(CryptoError::InvalidParameters(format!(
                "truncated tag length {tag_len} must be in 1..={}",
                inner.tag_len()
            )));
        }
        Ok(Self { inner, tag_len })
    }
}

impl<H: MacHelper> MacHelper for ShortenedMacHelper<H> {
    fn key_len(&self) -> usize {
        self.inner.key_len()
    }

    fn tag_len(&self) -> usize {
        self.tag_len
    }

    fn compute_mac(&self, data: &[u8], key: &[u8]) -> Result<Vec<u8>, CryptoError> {
        let full = self.inner.compute_mac(data, key)?;
        Ok(full[..self.tag_len].to_vec())
    }
}
