// SPDX-License-Identifier: Apache-2.0

//! The plain `ShamirShare` and its canonical wire format.

use crate::error::CryptoError;
use zeroize::Zeroize;

/// One holder's share of a secret: a non-zero x-coordinate and the
/// per-byte polynomial evaluations at that x.
#[derive(Debug, Clone, PartialEq, Eq, Zeroize, serde::Serialize, serde::Deserialize)]
pub struct ShamirShare {
    #[zeroize(skip)]
    id: u8,
    y: Vec<u8>,
}

impl ShamirShare {
    /// Builds a share. Fails with [`CryptoError::InvalidParameters`] if
    /// `id == 0` — `x = 0` is reserved for the secret itself.
    pub fn new(id: u8, y: Vec<u8>) -> Result<Self, CryptoError> {
        if id == 0 {
            return Err(CryptoError::InvalidParameters(
                "share id must be non-zero".into(),
            ));
        }
        Ok(Self { id, y })
    }

    pub fn id(&self) -> u8 {
        self.id
    }

    pub fn y(&self) -> &[u8] {
        &self.y
    }

    pub fn len(&self) -> usize {
        self.y.len()
    }

    pub fn is_empty(&self) -> bool {
        self.y.is_empty()
    }

    /// Canonical wire encoding: `[u8 id][u32 length BE][length bytes y]`.
    pub fn serialize(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(1 + 4 + self.y.len());
        out.push(self.id);
        out.extend_from_slice(&(self.y.len() as u32).to_be_bytes());
        out.extend_from_slice(&self.y);
        out
    }

    /// Parses the encoding produced by [`ShamirShare::serialize`], and the
    /// number of bytes consumed.
    pub fn parse(buf: &[u8]) -> Result<(Self, usize), CryptoError> {
        if buf.len() < 5 {
            return Err(CryptoError::InvalidParameters(
                "share encoding shorter than the 5-byte header".into(),
            ));
        }
        let id = buf[0];
        let len = u32::from_be_bytes([buf[1], buf[2], buf[3], buf[4]]) as usize;
        let end = 5 + len;
        if buf.len() < end {
            return Err(CryptoError::InvalidParameters(
                "share encoding truncated before declared length".into(),
            ));
        }
        let share = ShamirShare::new(id, buf[5..end].to_vec())?;
        Ok((share, end))
    }
}
