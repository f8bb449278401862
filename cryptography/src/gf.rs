// SPDX-License-Identifier: Apache-2.0

//! GF(2⁸) field arithmetic.
//!
//! This is the AES field: bytes interpreted as polynomials over GF(2),
//! reduced modulo the irreducible `x⁸ + x⁴ + x³ + x + 1` (`0x11B`).
//! Addition and subtraction are XOR; multiplication and inversion go
//! through log/antilog tables seeded from the generator `0x03`, built once
//! at first use.

use crate::error::CryptoError;
use std::sync::OnceLock;

const REDUCING_POLY: u16 = 0x11B;
const GENERATOR: u8 = 0x03;

struct Tables {
    log: [u8; 256],
    antilog: [u8; 512],
}

fn tables() -> &'static Tables {
    static TABLES: OnceLock<Tables> = OnceLock::new();
    TABLES.get_or_init(|| {
        let mut log = [0u8; 256];
        let mut antilog = [0u8; 512];

        let mut x: u16 = 1;
        for i in 0..255u16 {
            antilog[i as usize] = x as u8;
            log[x as usize] = i as u8;
            x <<= 1;
            if x & 0x100 != 0 {
                x ^= REDUCING_POLY;
            }
        }
        // duplicate the cycle so `antilog[log[a] + log[b]]` never needs a
        // modulo on the lookup itself.
        for i in 255..510 {
            antilog[i] = antilog[i - 255];
        }

        Tables { log, antilog }
    })
}

/// Zero-sized handle for GF(2⁸) arithmetic. All operations are free
/// functions on `u8`; this type exists so call sites read as "a GF(2⁸)
/// element" and to give decoders/matrices a concrete field to be generic
/// over if a second field is ever added.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Gf256;

impl Gf256 {
    /// `a ⊕ b`. Addition and subtraction coincide in characteristic 2.
    #[inline]
    pub fn add(a: u8, b: u8) -> u8 {
        a ^ b
    }

    /// `a ⊖ b`, identical to [`Gf256::add`].
    #[inline]
    pub fn sub(a: u8, b: u8) -> u8 {
        a ^ b
    }

    /// Field multiplication via log/antilog tables. Short-circuits to zero
    /// when either operand is zero.
    #[inline]
    pub fn mult(a: u8, b: u8) -> u8 {
        if a == 0 || b == 0 {
            return 0;
        }
        let t = tables();
        let sum = t.log[a as usize] as usize + t.log[b as usize] as usize;
        t.antilog[sum]
    }

    /// Multiplicative inverse. Fails for `a = 0`, which has none.
    pub fn inverse(a: u8) -> Result<u8, CryptoError> {
        if a == 0 {
            return Err(CryptoError::InvalidParameters(
                "GF(2^8) zero has no multiplicative inverse".into(),
            ));
        }
        let t = tables();
        Ok(t.antilog[255 - t.log[a as usize] as usize])
    }

    /// `a / b`, i.e. `a * inverse(b)`.
    pub fn div(a: u8, b: u8) -> Result<u8, CryptoError> {
        Ok(Self::mult(a, Self::inverse(b)?))
    }

    /// Evaluates a polynomial `coeffs = [c0, c1, ..., cd]` (low-degree
    /// first, so `c0` is the constant term) at `x` via Horner's rule.
    pub fn evaluate_at(coeffs: &[u8], x: u8) -> u8 {
        let mut acc = 0u8;
        for &c in coeffs.iter().rev() {
            acc = Self::add(Self::mult(acc, x), c);
        }
        acc
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_is_xor_and_self_inverse() {
        for a in 0..=255u8 {
            for b in 0..=255u8 {
                assert_eq!(Gf256::add(a, b), a ^ b);
            }
            assert_eq!(Gf256::add(a, a), 0);
        }
    }

    #[test]
    fn mult_by_zero_is_zero() {
        for a in 0..=255u8 {
            assert_eq!(Gf256::mult(a, 0), 0);
            assert_eq!(Gf256::mult(0, a), 0);
        }
    }

    #[test]
    fn mult_identity() {
        for a in 0..=255u8 {
            assert_eq!(Gf256::mult(a, 1), a);
        }
    }

    #[test]
    fn mult_commutative_and_associative() {
        let vals = [1u8, 2, 3, 7, 42, 100, 200, 255];
        for &a in &vals {
            for &b in &vals {
                assert_eq!(Gf256::mult(a, b), Gf256::mult(b, a));
                for &c in &vals {
                    assert_eq!(
                        Gf256::mult(Gf256::mult(a, b), c),
                        Gf256::mult(a, Gf256::mult(b, c))
                    );
                }
            }
        }
    }

    #[test]
    fn distributivity() {
        let vals = [1u8, 5, 9, 17, 33, 65, 129, 254];
        for &a in &vals {
            for &b in &vals {
                for &c in &vals {
                    assert_eq!(
                        Gf256::mult(a, Gf256::add(b, c)),
                        Gf256::add(Gf256::mult(a, b), Gf256::mult(a, c))
                    );
                }
            }
        }
    }

    #[test]
    fn inverse_round_trips_for_nonzero() {
        for a in 1..=255u8 {
            let inv = Gf256::inverse(a).unwrap();
            assert_eq!(Gf256::mult(a, inv), 1);
        }
    }

    #[test]
    fn inverse_of_zero_fails() {
        assert!(Gf256::inverse(0).is_err());
    }

    #[test]
    fn evaluate_at_matches_naive_horner() {
        let coeffs = [5u8, 3, 9, 200];
        for x in 0..=255u8 {
            let mut expected = 0u8;
            for &c in coeffs.iter().rev() {
                expected = Gf256::add(Gf256::mult(expected, x), c);
            }
            assert_eq!(Gf256::evaluate_at(&coeffs, x), expected);
        }
    }

    #[test]
    fn evaluate_at_zero_is_constant_term() {
        let coeffs = [77u8, 1, 2, 3];
        assert_eq!(Gf256::evaluate_at(&coeffs, 0), 77);
    }
}
