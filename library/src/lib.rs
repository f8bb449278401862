// SPDX-License-Identifier: Apache-2.0

//! `usrss`: Unconditionally Secure Robust Secret Sharing.
//!
//! Splits a byte-string into `n` shares such that any `k` reconstruct it
//! and fewer than `k` reveal nothing ([`usrss_cryptography::shamir`]),
//! wrapped in a Cevallos-style information-checking layer
//! ([`information_checking`]) so holders can detect (and tolerate up to
//! `t < k/3`) corrupted or dishonest co-holders before reconstructing.
//!
//! The public entry point is [`engine::CryptoEngine`]:
//!
//! ```
//! use usrss::engine::{CryptoEngine, MacBackend};
//! use usrss_cryptography::random::RngSource;
//!
//! let engine = CryptoEngine::with_defaults(3, 5, MacBackend::HmacSha256).unwrap();
//! let mut rng = RngSource::os();
//! let shares = engine.share(b"correct horse battery staple", &mut rng).unwrap();
//! let secret = engine.reconstruct(&shares[..3]).unwrap();
//! assert_eq!(secret, b"correct horse battery staple");
//! ```

pub mod engine;
pub mod error;
pub mod information_checking;
pub mod share;

pub use engine::{CryptoEngine, MacBackend};
pub use error::UsrssError;
pub use share::VssShare;
