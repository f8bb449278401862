// SPDX-License-Identifier: Apache-2.0

//! [`VssShare`]: a plain [`ShamirShare`] plus the cross-MAC material the
//! information-checking layer attaches so holders can validate each
//! other's shares before reconstruction.

use crate::error::UsrssError;
use usrss_cryptography::error::CryptoError;
use usrss_cryptography::ShamirShare;
use zeroize::Zeroize;

/// A verifiable share: one holder's [`ShamirShare`] together with the two
/// peer-keyed mappings the Cevallos tagging protocol produces.
///
/// `macs[j]` and `keys[j]` are dense arrays indexed by `peer_id - 1` for
/// `peer_id` in `1..=n` (not by position in whatever slice of shares a
/// caller happens to be holding). Diagonal entries (`j == this holder's
/// id - 1`) are zero-filled and carry no meaning; see
/// [`spec.md`][crate] §4.H.
#[derive(Debug, Clone, PartialEq, Eq, Zeroize, serde::Serialize, serde::Deserialize)]
pub struct VssShare {
    inner: ShamirShare,
    /// `macs[j]` = the tag this holder computed over its own share for
    /// peer `j + 1` to verify.
    macs: Vec<Vec<u8>>,
    /// `keys[j]` = the MAC key peer `j + 1` gave this holder, so this
    /// holder can verify peer `j + 1`'s claimed share.
    keys: Vec<Vec<u8>>,
}

impl VssShare {
    /// Builds a verifiable share from its plain share and the two
    /// peer-keyed mappings. Fails if `macs` and `keys` don't have equal
    /// length, or if any row's entries aren't uniformly sized.
    pub fn new(inner: ShamirShare, macs: Vec<Vec<u8>>, keys: Vec<Vec<u8>>) -> Result<Self, UsrssError> {
        if macs.len() != keys.len() {
            return Err(UsrssError::InvalidParameters(CryptoError::InvalidParameters(
                format!("macs has {} entries but keys has {}", macs.len(), keys.len()),
            )));
        }
        if let Some(tag_len) = macs.first().map(Vec::len) {
            if macs.iter().any(|m| m.len() != tag_len) {
                return Err(UsrssError::InvalidParameters(CryptoError::InvalidParameters(
                    "macs entries have inconsistent length".into(),
                )));
            }
        }
        if let Some(key_len) = keys.first().map(Vec::len) {
            if keys.iter().any(|k| k.len() != key_len) {
                return Err(UsrssError::InvalidParameters(CryptoError::InvalidParameters(
                    "keys entries have inconsistent length".into(),
                )));
            }
        }
        Ok(Self { inner, macs, keys })
    }

    pub fn inner(&self) -> &ShamirShare {
        &self.inner
    }

    pub fn macs(&self) -> &[Vec<u8>] {
        &self.macs
    }

    pub fn keys(&self) -> &[Vec<u8>] {
        &self.keys
    }

    /// The total number of holders this share was tagged against.
    pub fn n(&self) -> usize {
        self.macs.len()
    }

    /// Canonical wire encoding: the plain share's encoding followed by
    /// `[u8 n][macs: n * tag_len][keys: n * key_len]`. `tag_len` and
    /// `key_len` are derived from the share itself, not stored — both
    /// sides of a wire exchange already agree on the MAC configuration.
    pub fn serialize(&self) -> Vec<u8> {
        let mut out = self.inner.serialize();
        out.push(self.n() as u8);
        for mac in &self.macs {
            out.extend_from_slice(mac);
        }
        for key in &self.keys {
            out.extend_from_slice(key);
        }
        out
    }

    /// Parses the encoding produced by [`VssShare::serialize`]. The
    /// caller must supply `tag_len`/`key_len` since the wire format
    /// doesn't self-describe them (they're fixed by the information
    /// checking configuration, not per-share data).
    pub fn parse(buf: &[u8], tag_len: usize, key_len: usize) -> Result<(Self, usize), UsrssError> {
        let (inner, mut offset) = ShamirShare::parse(buf).map_err(UsrssError::InvalidParameters)?;
        let n = *buf.get(offset).ok_or_else(|| {
            UsrssError::InvalidParameters(CryptoError::InvalidParameters(
                "VSS share encoding truncated before peer count".into(),
            ))
        })? as usize;
        offset += 1;

        let macs_len = n * tag_len;
        let keys_len = n * key_len;
        if buf.len() < offset + macs_len + keys_len {
            return Err(UsrssError::InvalidParameters(CryptoError::InvalidParameters(
                "VSS share encoding truncated before declared mac/key material".into(),
            )));
        }

        let macs = buf[offset..offset + macs_len]
            .chunks_exact(tag_len.max(1))
            .take(n)
            .map(<[u8]>::to_vec)
            .collect();
        offset += macs_len;

        let keys = buf[offset..offset + keys_len]
            .chunks_exact(key_len.max(1))
            .take(n)
            .map(<[u8]>::to_vec)
            .collect();
        offset += keys_len;

        Ok((VssShare::new(inner, macs, keys)?, offset))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn share(id: u8) -> ShamirShare {
        ShamirShare::new(id, vec![1, 2, 3]).unwrap()
    }

    #[test]
    fn mismatched_macs_keys_length_rejected() {
        let macs = vec![vec![0u8; 4]; 3];
        let keys = vec![vec![0u8; 8]; 2];
        assert!(VssShare::new(share(1), macs, keys).is_err());
    }

    #[test]
    fn serialize_parse_round_trip() {
        let macs = vec![vec![1u8; 4], vec![2u8; 4], vec![0u8; 4]];
        let keys = vec![vec![9u8; 8], vec![0u8; 8], vec![7u8; 8]];
        let vss = VssShare::new(share(2), macs, keys).unwrap();

        let bytes = vss.serialize();
        let (parsed, consumed) = VssShare::parse(&bytes, 4, 8).unwrap();
        assert_eq!(parsed, vss);
        assert_eq!(consumed, bytes.len());
    }

    #[test]
    fn parse_rejects_truncated_mac_material() {
        let macs = vec![vec![1u8; 4], vec![2u8; 4]];
        let keys = vec![vec![9u8; 8], vec![3u8; 8]];
        let vss = VssShare::new(share(3), macs, keys).unwrap();
        let bytes = vss.serialize();
        assert!(VssShare::parse(&bytes[..bytes.len() - 1], 4, 8).is_err());
    }
}
