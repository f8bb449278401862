// SPDX-License-Identifier: Apache-2.0

//! Algebraic and cryptographic substrate for `usrss`.
//!
//! This crate implements Shamir's Secret Sharing over GF(2⁸), the
//! polynomial decoders used to reconstruct a secret from shares (including
//! one that corrects adversarially-corrupted shares), and the keyed-MAC
//! primitive used by the information-checking layer in the sibling `usrss`
//! crate.
//!
//! ## Modules
//!
//! - [`gf`] — GF(2⁸) field arithmetic (the AES field, reducing polynomial
//!   `0x11B`).
//! - [`matrix`] — matrices over a field, used by the erasure decoder to
//!   invert a Vandermonde-style system.
//! - [`random`] — the `RandomSource` contract shares and coefficients draw
//!   their entropy from.
//! - [`decoder`] — the `Decoder` trait and its two implementations
//!   (erasure/Lagrange, Berlekamp–Welch).
//! - [`shamir`] — `ShamirPSS`, the split/reconstruct entry points.
//! - [`mac`] — the `MacHelper` contract (HMAC-SHA256, Poly1305) and its
//!   truncating wrapper.
//! - [`share`] — the plain `ShamirShare` type and its wire format.
//! - [`error`] — [`error::CryptoError`], this crate's error type.

pub mod decoder;
pub mod error;
pub mod gf;
pub mod mac;
pub mod matrix;
pub mod random;
pub mod shamir;
pub mod share;

pub use error::CryptoError;
pub use gf::Gf256;
pub use share::ShamirShare;
