//! End-to-end tests through the public API

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use nistecies_api::Pke;
use nistecies_pke::ecies::{extract_private_key, extract_public_key, ContainerKind};
use nistecies_pke::{
    AlgorithmSuite, Curve, EciesEngine, EciesP256, EciesP384, EciesP521, Error,
};
use nistecies_tests::init_test_logging;
use rand::rngs::OsRng;
use serde::Deserialize;

const MESSAGE: &[u8] = b"This is a test message.";

const P256_SPKI_B64: &str = "MFkwEwYHKoZIzj0CAQYIKoZIzj0DAQcDQgAEF76RH73+dY+wXA+qIPcyNJcdDRy+yaC+TLCPhPc/E5sY3UhhdafWq3/5zoPEvI2TWLfLbJ1HxC9b2+7u/LzbCQ==";
const P256_SEC1_B64: &str = "MHcCAQEEIAAjAhkvTylSQB/J+VhXaYhEWbgMEMu17eJmtVkQIPa3oAoGCCqGSM49AwEHoUQDQgAEF76RH73+dY+wXA+qIPcyNJcdDRy+yaC+TLCPhPc/E5sY3UhhdafWq3/5zoPEvI2TWLfLbJ1HxC9b2+7u/LzbCQ==";
const P256_PKCS8_B64: &str = "MIGHAgEAMBMGByqGSM49AgEGCCqGSM49AwEHBG0wawIBAQQgACMCGS9PKVJAH8n5WFdpiERZuAwQy7Xt4ma1WRAg9rehRANCAAQXvpEfvf51j7BcD6og9zI0lx0NHL7JoL5MsI+E9z8TmxjdSGF1p9arf/nOg8S8jZNYt8tsnUfEL1vb7u78vNsJ";
const P256_ENVELOPE_B64: &str = "BL6kRmBjyCw28WHZZ+dEUGFDIfhZv6zxQ7Qx9+344aJzj590cAapupv3N4YDiTbkpiWhNXqYD4w4V1IHwNTC3U/71YZg91rezbEjeXGiQmuMMh7W64KhyIR5mHW0Uu/vUJmwZqS7f8c=";

fn b64(text: &str) -> Vec<u8> {
    STANDARD.decode(text).expect("valid base64")
}

#[test]
fn test_p256_base64_scenario() {
    init_test_logging();
    assert!(P256_SPKI_B64.starts_with("MFkwEwYHKoZI"));

    let engine = EciesEngine::default();
    let envelope = engine
        .encrypt_to_container(MESSAGE, &b64(P256_SPKI_B64), &mut OsRng)
        .unwrap();
    assert_eq!(envelope.len(), 104);

    let sec1 = b64(P256_SEC1_B64);
    assert_eq!(engine.decrypt_with_container(&envelope, &sec1).unwrap(), MESSAGE);

    let pkcs8 = b64(P256_PKCS8_B64);
    assert_eq!(engine.decrypt_with_container(&envelope, &pkcs8).unwrap(), MESSAGE);
}

#[test]
fn test_p256_pinned_envelope_decrypts() {
    let envelope = b64(P256_ENVELOPE_B64);
    assert_eq!(envelope.len(), 104);
    let plaintext = EciesEngine::default()
        .decrypt_with_container(&envelope, &b64(P256_SEC1_B64))
        .unwrap();
    assert_eq!(plaintext, MESSAGE);
}

#[test]
fn test_extraction_agrees_across_containers() {
    let public = extract_public_key(&b64(P256_SPKI_B64)).unwrap();
    let from_sec1 = extract_private_key(&b64(P256_SEC1_B64)).unwrap();
    let from_pkcs8 = extract_private_key(&b64(P256_PKCS8_B64)).unwrap();

    assert_eq!(public.curve(), Curve::P256);
    assert_eq!(from_sec1.as_bytes(), from_pkcs8.as_bytes());
    assert_eq!(from_sec1.public_key(), public);
    assert_eq!(from_sec1.as_bytes().len(), 65 + 32);
}

#[test]
fn test_container_lengths_are_pinned() {
    let expected = [
        (Curve::P256, [91, 121, 138]),
        (Curve::P384, [120, 167, 185]),
        (Curve::P521, [158, 223, 241]),
    ];
    for (curve, [spki, sec1, pkcs8]) in expected {
        assert_eq!(curve.container_len(ContainerKind::SubjectPublicKeyInfo), spki);
        assert_eq!(curve.container_len(ContainerKind::Sec1), sec1);
        assert_eq!(curve.container_len(ContainerKind::Pkcs8), pkcs8);
    }
}

#[test]
fn test_unrecognized_length_rejected() {
    let container = [0x30u8; 100];
    assert!(matches!(
        extract_public_key(&container),
        Err(Error::UnrecognizedKeyLength { actual: 100 })
    ));
    assert!(matches!(
        extract_private_key(&container),
        Err(Error::UnrecognizedKeyLength { actual: 100 })
    ));
}

#[test]
fn test_malformed_container_of_known_length() {
    let mut spki = b64(P256_SPKI_B64);
    spki[0] = 0x31;
    assert!(matches!(
        extract_public_key(&spki),
        Err(Error::MalformedKeyContainer(_))
    ));

    let garbage = vec![0xffu8; 121];
    assert!(matches!(
        extract_private_key(&garbage),
        Err(Error::MalformedKeyContainer(_))
    ));
}

#[test]
fn test_cross_curve_decryption_fails() {
    let envelope = b64(P256_ENVELOPE_B64);
    let (_, p384_secret) = EciesP384::keypair(&mut OsRng).unwrap();
    let result = EciesEngine::default().decrypt(&envelope, p384_secret.as_raw(), None);
    assert!(result.is_err());
}

fn pke_roundtrip<P: Pke<Ciphertext = Vec<u8>>>() {
    let (pk, sk) = P::keypair(&mut OsRng).unwrap();
    let ciphertext = P::encrypt(&pk, MESSAGE, Some(b"integration"), &mut OsRng).unwrap();
    assert_eq!(P::decrypt(&sk, &ciphertext, Some(b"integration")).unwrap(), MESSAGE);
    assert!(P::decrypt(&sk, &ciphertext, None).is_err());
}

#[test]
fn test_typed_schemes_through_pke_trait() {
    pke_roundtrip::<EciesP256>();
    pke_roundtrip::<EciesP384>();
    pke_roundtrip::<EciesP521>();

    assert_eq!(EciesP256::name(), "ECIES-P256-X963-SHA384-AES128GCM");
    assert_eq!(EciesP521::name(), "ECIES-P521-X963-SHA384-AES128GCM");
}

#[derive(Debug, Deserialize)]
struct Config {
    ecies: AlgorithmSuite,
}

#[test]
fn test_suite_from_toml() {
    let config: Config = toml::from_str(
        r#"
        [ecies]
        kdf-hash = "sha384"
        kdf-scheme = "x963"
        aead = "aes128-gcm"
        iv-variant = "variable"
        "#,
    )
    .unwrap();
    assert_eq!(config.ecies, AlgorithmSuite::default());
    assert_eq!(
        config.ecies.name(),
        "ECIES-Cofactor-VariableIV-X963-SHA384-AES128GCM"
    );

    let engine = EciesEngine::new(config.ecies);
    let envelope = engine
        .encrypt_to_container(MESSAGE, &b64(P256_SPKI_B64), &mut OsRng)
        .unwrap();
    assert_eq!(engine.decrypt_with_container(&envelope, &b64(P256_SEC1_B64)).unwrap(), MESSAGE);
}

#[test]
fn test_suite_config_rejects_unknown_values() {
    let unknown_aead = toml::from_str::<Config>(
        r#"
        [ecies]
        kdf-hash = "sha384"
        kdf-scheme = "x963"
        aead = "aes256-gcm"
        iv-variant = "variable"
        "#,
    );
    assert!(unknown_aead.is_err());

    let unknown_field = toml::from_str::<Config>(
        r#"
        [ecies]
        kdf-hash = "sha384"
        kdf-scheme = "x963"
        aead = "aes128-gcm"
        iv-variant = "variable"
        compress = true
        "#,
    );
    assert!(unknown_field.is_err());
}

#[test]
fn test_suite_from_name() {
    let suite: AlgorithmSuite = "ECIES-Cofactor-VariableIV-X963-SHA384-AES128GCM"
        .parse()
        .unwrap();
    assert_eq!(suite, AlgorithmSuite::default());

    assert!(matches!(
        "ECIES-HKDF-SHA256-AES256GCM".parse::<AlgorithmSuite>(),
        Err(Error::UnsupportedAlgorithm(_))
    ));
}
