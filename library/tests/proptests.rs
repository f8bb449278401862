// SPDX-License-Identifier: Apache-2.0

//! Property-based round-trip tests for the `CryptoEngine` façade, over
//! arbitrary secrets, share counts, thresholds and seeds.

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use usrss::engine::{CryptoEngine, MacBackend};
use usrss_cryptography::random::RngSource;

proptest! {
    #[test]
    fn share_then_reconstruct_round_trips(
        secret in prop::collection::vec(any::<u8>(), 1..48),
        n in 2usize..9,
        seed in any::<u64>(),
    ) {
        let k = 2 + (seed as usize % (n - 1));
        let engine = CryptoEngine::with_defaults(k, n, MacBackend::HmacSha256).unwrap();
        let mut rng = RngSource::new(ChaCha8Rng::seed_from_u64(seed));
        let shares = engine.share(&secret, &mut rng).unwrap();

        let recovered = engine.reconstruct(&shares[..k]).unwrap();
        prop_assert_eq!(recovered, secret);
    }
}
