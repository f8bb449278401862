// SPDX-License-Identifier: Apache-2.0

//! The `RandomSource` contract.
//!
//! Shamir's constant term leaks nothing about the secret only if every
//! other coefficient (and every share's x-coordinate) is drawn uniformly
//! from the *non-zero* bytes: a zero coefficient silently lowers the
//! polynomial's effective degree, and a zero x-coordinate would collide
//! with the point the secret is encoded at. `fill_bytes` enforces the
//! non-zero requirement; implementations resample internally rather than
//! exposing that retry loop to callers.

use rand::RngCore;

/// Supplies uniformly-random non-zero bytes for Shamir coefficients and
/// share x-coordinates.
pub trait RandomSource {
    /// Fills `buf` with uniformly-random bytes in `1..=255`.
    fn fill_bytes(&mut self, buf: &mut [u8]);

    /// Fills `buf` with uniformly-random values in `1..=255`, each stored
    /// as a full `u32` (mirrors the source's `fillBytesAsInts`, used where
    /// a caller wants coefficients addressable as ints rather than bytes).
    fn fill_bytes_as_ints(&mut self, buf: &mut [u32]) {
        let mut bytes = vec![0u8; buf.len()];
        self.fill_bytes(&mut bytes);
        for (slot, b) in buf.iter_mut().zip(bytes) {
            *slot = b as u32;
        }
    }
}

/// The default `RandomSource`, backed by any `rand::RngCore` (typically
/// `rand::rngs::OsRng` in production, a seeded `ChaCha8Rng` in tests).
pub struct RngSource<R: RngCore> {
    rng: R,
}

impl<R: RngCore> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<rand::rngs::OsRng> {
    /// Convenience constructor wired to the OS CSPRNG.
    pub fn os() -> Self {
        Self::new(rand::rngs::OsRng)
    }
}

impl<R: RngCore> RandomSource for RngSource<R> {
    fn fill_bytes(&mut self, buf: &mut [u8]) {
        for slot in buf.iter_mut() {
            loop {
                let b = (self.rng.next_u32() & 0xFF) as u8;
                if b != 0 {
                    *slot = b;
                    break;
                }
            }
        }
    }
}
