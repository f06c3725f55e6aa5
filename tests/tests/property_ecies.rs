//! Property-based tests for the ECIES engine

use nistecies_pke::{Curve, EciesEngine, EciesEnvelope, Error, RawPrivateKey};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn curve() -> impl Strategy<Value = Curve> {
    prop::sample::select(Curve::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn roundtrip_preserves_plaintext(
        curve in curve(),
        seed in any::<u64>(),
        plaintext in prop::collection::vec(any::<u8>(), 0..512),
        shared_info in prop::option::of(prop::collection::vec(any::<u8>(), 0..32)),
    ) {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let engine = EciesEngine::default();
        let recipient = RawPrivateKey::generate(curve, &mut rng).unwrap();

        let envelope = engine
            .encrypt(&plaintext, &recipient.public_key(), shared_info.as_deref(), &mut rng)
            .unwrap();
        let decrypted = engine.decrypt(&envelope, &recipient, shared_info.as_deref()).unwrap();

        prop_assert_eq!(decrypted, plaintext);
    }

    #[test]
    fn envelope_length_is_point_plus_message_plus_tag(
        curve in curve(),
        seed in any::<u64>(),
        len in 0usize..300,
    ) {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let recipient = RawPrivateKey::generate(curve, &mut rng).unwrap();
        let envelope = EciesEngine::default()
            .encrypt(&vec![0xa5; len], &recipient.public_key(), None, &mut rng)
            .unwrap();

        prop_assert_eq!(envelope.len(), curve.point_len() + len + 16);
        prop_assert_eq!(envelope.len(), EciesEnvelope::len_for(curve, len));
        prop_assert_eq!(envelope[0], 0x04);
    }

    #[test]
    fn any_flipped_bit_after_the_point_is_rejected(
        curve in curve(),
        seed in any::<u64>(),
        plaintext in prop::collection::vec(any::<u8>(), 1..64),
        position in any::<prop::sample::Index>(),
        bit in 0u8..8,
    ) {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let engine = EciesEngine::default();
        let recipient = RawPrivateKey::generate(curve, &mut rng).unwrap();
        let mut envelope = engine
            .encrypt(&plaintext, &recipient.public_key(), None, &mut rng)
            .unwrap();

        let body = envelope.len() - curve.point_len();
        let index = curve.point_len() + position.index(body);
        envelope[index] ^= 1 << bit;

        prop_assert!(matches!(
            engine.decrypt(&envelope, &recipient, None),
            Err(Error::AuthenticationFailed)
        ));
    }

    #[test]
    fn short_envelopes_are_rejected_before_any_crypto(
        curve in curve(),
        seed in any::<u64>(),
        len in 0usize..81,
    ) {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let recipient = RawPrivateKey::generate(curve, &mut rng).unwrap();
        let is_too_short = matches!(
            EciesEngine::default().decrypt(&vec![0u8; len], &recipient, None),
            Err(Error::EnvelopeTooShort { .. })
        );
        prop_assert!(is_too_short);
    }
}
