// SPDX-License-Identifier: Apache-2.0

//! Cevallos-style unconditionally-secure robust secret sharing (USRSS): a
//! MAC-based information-checking (IC) layer that lets `n` share holders
//! validate each other's shares before reconstruction, tolerating up to
//! `t < k/3` malicious holders without any computational assumption.
//!
//! **Tagging** (run once, at split time): for every ordered pair of
//! holders `(i, j)` with `i != j`, the dealer draws a fresh random MAC
//! key `k_{i->j}`, tags holder `i`'s share with it, gives the tag to
//! holder `i` and the key to holder `j`. Holder `j` can later use that
//! key to check whether whatever share holder `i` presents at
//! reconstruction time is the one the dealer actually handed out.
//!
//! **Validation** (run at reconstruct time): a share is accepted if a
//! majority of the other presented shares' holders can verify its tag.

use crate::error::UsrssError;
use crate::share::VssShare;
use usrss_cryptography::mac::{MacHelper, ShortenedMacHelper};
use usrss_cryptography::random::RandomSource;
use usrss_cryptography::share::ShamirShare;

/// Computes the information-checking tag length, in bytes, that bounds a
/// forger's success probability over a `max_data_len`-byte secret at
/// `1 / 2^security_bits` (spec §4.H): `ceil((E + log2(D) + log2(k)) / 8)`.
/// `max_data_len` and `k` are floored at 1 and 2 respectively so the log
/// is always defined.
pub fn ic_tag_len_bits(security_bits: u32, max_data_len: usize, k: usize) -> usize {
    let d_bits = (max_data_len.max(1) as f64).log2();
    let k_bits = (k.max(2) as f64).log2();
    let total_bits = security_bits as f64 + d_bits + k_bits;
    ((total_bits / 8.0).ceil() as usize).max(1)
}

/// The Cevallos information-checking protocol, parameterized by a MAC
/// backend and the number of holders `n`.
pub struct InformationChecking {
    mac: ShortenedMacHelper<Box<dyn MacHelper>>,
    n: usize,
}

impl InformationChecking {
    /// Builds the IC layer for `n` holders. `mac` is the unshortened MAC
    /// backend (HMAC-SHA256 or Poly1305); its tags are truncated to the
    /// length the `(security_bits, max_data_len, k)` formula demands,
    /// clamped to the backend's native tag length (truncating further
    /// than the backend supports isn't possible; the backend's own tag
    /// length then bounds the forgery probability instead).
    pub fn new(
        mac: Box<dyn MacHelper>,
        n: usize,
        k: usize,
        max_data_len: usize,
        security_bits: u32,
    ) -> Result<Self, UsrssError> {
        let wanted = ic_tag_len_bits(security_bits, max_data_len, k);
        let tag_len = wanted.min(mac.tag_len());
        let shortened = ShortenedMacHelper::new(mac, tag_len)?;
        Ok(Self { mac: shortened, n })
    }

    /// Tags every share in `shares` (which must number exactly `n`, in
    /// holder-id order `1..=n`) with cross-MACs against every other
    /// holder, per the tagging protocol in spec §4.H.
    pub fn create_tags<R: RandomSource>(
        &self,
        shares: &[ShamirShare],
        rng: &mut R,
    ) -> Result<Vec<VssShare>, UsrssError> {
        if shares.len() != self.n {
            return Err(UsrssError::InvalidParameters(
                usrss_cryptography::error::CryptoError::InvalidParameters(format!(
                    "information checking configured for {} holders, got {} shares",
                    self.n,
                    shares.len()
                )),
            ));
        }

        let key_len = self.mac.key_len();
        let tag_len = self.mac.tag_len();
        let n = self.n;

        // macs[i][j] = tag holder i presents for peer j to verify.
        // keys[j][i] = key holder j uses to verify holder i's tag.
        // Diagonal entries stay zero-filled; they're don't-care per spec.
        let mut macs = vec![vec![vec![0u8; tag_len]; n]; n];
        let mut keys = vec![vec![vec![0u8; key_len]; n]; n];

        for (i, share_i) in shares.iter().enumerate() {
            let data = share_i.serialize();
            for j in 0..n {
                if i == j {
                    continue;
                }
                let mut key = vec![0u8; key_len];
                rng.fill_bytes(&mut key);
                let tag = self.mac.compute_mac(&data, &key)?;
                macs[i][j] = tag;
                keys[j][i] = key;
            }
        }

        shares
            .iter()
            .enumerate()
            .map(|(i, s)| VssShare::new(s.clone(), macs[i].clone(), keys[i].clone()))
            .collect()
    }

    /// Validates `shares` and returns the accepted subset, per spec §4.H:
    /// a share is accepted if at least `ceil(m/2)` of the other `m - 1`
    /// presented holders can verify its tag (`m = shares.len()`). This
    /// assumes at most `t < k/3` of the presented holders are corrupt.
    pub fn check_shares(&self, shares: &[VssShare]) -> Vec<VssShare> {
        let m = shares.len();
        if m == 0 {
            return Vec::new();
        }
        let threshold = m.div_ceil(2);

        let mut accepted = Vec::new();
        for (i, holder) in shares.iter().enumerate() {
            let holder_id = holder.inner().id() as usize;
            let data = holder.inner().serialize();

            let mut accept_count = 0usize;
            for (j, peer) in shares.iter().enumerate() {
                if i == j {
                    continue;
                }
                let peer_id = peer.inner().id() as usize;
                let Some(key) = peer.keys().get(holder_id - 1) else {
                    continue;
                };
                let Some(tag) = holder.macs().get(peer_id - 1) else {
                    continue;
                };
                if self.mac.verify_mac(&data, key, tag).unwrap_or(false) {
                    accept_count += 1;
                }
            }

            if accept_count >= threshold {
                accepted.push(holder.clone());
            }
        }
        accepted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use usrss_cryptography::mac::HmacSha256Helper;
    use usrss_cryptography::random::RngSource;
    use usrss_cryptography::shamir::ShamirPss;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rng(seed: u64) -> RngSource<ChaCha8Rng> {
        RngSource::new(ChaCha8Rng::seed_from_u64(seed))
    }

    fn ic(n: usize, k: usize) -> InformationChecking {
        InformationChecking::new(Box::new(HmacSha256Helper), n, k, 4 * 1024 * 1024, 128).unwrap()
    }

    #[test]
    fn tag_len_grows_with_security_param_and_stays_in_range() {
        let small = ic_tag_len_bits(32, 1024, 3);
        let large = ic_tag_len_bits(128, 1024, 3);
        assert!(large > small);
        assert!(large <= 32);
    }

    #[test]
    fn tag_len_never_zero_for_tiny_inputs() {
        assert!(ic_tag_len_bits(1, 1, 2) >= 1);
    }

    #[test]
    fn honest_shares_all_accepted() {
        let pss = ShamirPss::new(3, 4).unwrap();
        let plain = pss.split(b"A5", &mut rng(1)).unwrap();
        let checker = ic(4, 3);
        let tagged = checker.create_tags(&plain, &mut rng(1)).unwrap();

        let accepted = checker.check_shares(&tagged);
        assert_eq!(accepted.len(), 4);
    }

    #[test]
    fn mutated_share_is_rejected() {
        let pss = ShamirPss::new(3, 4).unwrap();
        let plain = pss.split(b"A5", &mut rng(2)).unwrap();
        let checker = ic(4, 3);
        let mut tagged = checker.create_tags(&plain, &mut rng(2)).unwrap();

        let mutated_y: Vec<u8> = tagged[0].inner().y().iter().map(|b| b ^ 0xFF).collect();
        let mutated_inner = ShamirShare::new(tagged[0].inner().id(), mutated_y).unwrap();
        tagged[0] = VssShare::new(
            mutated_inner,
            tagged[0].macs().to_vec(),
            tagged[0].keys().to_vec(),
        )
        .unwrap();

        let accepted = checker.check_shares(&tagged);
        assert_eq!(accepted.len(), 3);
        assert!(accepted.iter().all(|s| s.inner().id() != tagged[0].inner().id() || s.inner().y() != tagged[0].inner().y()));
    }

    #[test]
    fn two_mutated_shares_drop_below_threshold() {
        let pss = ShamirPss::new(3, 4).unwrap();
        let plain = pss.split(b"A5", &mut rng(3)).unwrap();
        let checker = ic(4, 3);
        let mut tagged = checker.create_tags(&plain, &mut rng(3)).unwrap();

        for idx in [0usize, 1] {
            let mutated_y: Vec<u8> = tagged[idx].inner().y().iter().map(|b| b ^ 0xFF).collect();
            let mutated_inner = ShamirShare::new(tagged[idx].inner().id(), mutated_y).unwrap();
            tagged[idx] = VssShare::new(
                mutated_inner,
                tagged[idx].macs().to_vec(),
                tagged[idx].keys().to_vec(),
            )
            .unwrap();
        }

        let accepted = checker.check_shares(&tagged);
        assert!(accepted.len() < 3);
    }
}
