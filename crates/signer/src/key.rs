//! Private key material and its textual encodings.
//!
//! # Accepted encodings
//!
//! All textual forms are hex, optionally prefixed with `0x`:
//!
//! | Form | Length | Algorithm |
//! |------|--------|-----------|
//! | raw | 32 bytes | Ed25519 (or ECDSA via [`PrivateKey::from_str_ecdsa`]) |
//! | DER (PKCS#8) | `302e020100300506032b657004220420` + 32 bytes | Ed25519 |
//! | DER (PKCS#8) | `3030020100300706052b8104000a04220420` + 32 bytes | ECDSA secp256k1 |
//!
//! Key bytes live in a [`Zeroizing`] buffer and are wiped on drop. `Debug`
//! never prints them and there is no `Display` impl.

use std::fmt;
use std::str::FromStr;

use rand_core::{OsRng, RngCore};
use zeroize::Zeroizing;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Length of an Ed25519 seed or secp256k1 scalar.
const KEY_LEN: usize = 32;

/// PKCS#8 prefix for an Ed25519 private key.
const ED25519_DER_PREFIX: [u8; 16] = [
    0x30, 0x2e, 0x02, 0x01, 0x00, 0x30, 0x05, 0x06, 0x03, 0x2b, 0x65, 0x70, 0x04, 0x22, 0x04, 0x20,
];

/// PKCS#8 prefix for a secp256k1 private key.
const ECDSA_DER_PREFIX: [u8; 18] = [
    0x30, 0x30, 0x02, 0x01, 0x00, 0x30, 0x07, 0x06, 0x05, 0x2b, 0x81, 0x04, 0x00, 0x0a, 0x04, 0x22,
    0x04, 0x20,
];

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Errors returned when decoding private key material.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyError {
    /// The input was empty or whitespace.
    Empty,
    /// The input is not valid hex.
    InvalidHex,
    /// The decoded bytes have a length no supported encoding uses.
    InvalidLength(usize),
    /// The bytes carry a DER prefix for a different or unknown algorithm.
    UnsupportedEncoding,
    /// The secp256k1 scalar is zero or not below the curve order.
    InvalidScalar,
}

impl fmt::Display for KeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "private key is empty"),
            Self::InvalidHex => write!(f, "private key is not valid hex"),
            Self::InvalidLength(n) => write!(f, "unsupported private key length: {n} bytes"),
            Self::UnsupportedEncoding => write!(f, "unsupported private key encoding"),
            Self::InvalidScalar => write!(f, "invalid secp256k1 private key scalar"),
        }
    }
}

impl std::error::Error for KeyError {}

// ---------------------------------------------------------------------------
// KeyAlgorithm
// ---------------------------------------------------------------------------

/// Signature algorithm a private key belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAlgorithm {
    Ed25519,
    EcdsaSecp256k1,
}

impl fmt::Display for KeyAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ed25519 => write!(f, "ed25519"),
            Self::EcdsaSecp256k1 => write!(f, "ecdsa-secp256k1"),
        }
    }
}

// ---------------------------------------------------------------------------
// PrivateKey
// ---------------------------------------------------------------------------

/// A private key: algorithm tag plus 32 bytes of secret material.
#[derive(Clone, PartialEq, Eq)]
pub struct PrivateKey {
    algorithm: KeyAlgorithm,
    bytes: Zeroizing<[u8; KEY_LEN]>,
}

impl PrivateKey {
    /// Generates a fresh key from the OS random number generator.
    pub fn generate(algorithm: KeyAlgorithm) -> Self {
        let mut bytes = Zeroizing::new([0u8; KEY_LEN]);
        match algorithm {
            KeyAlgorithm::Ed25519 => OsRng.fill_bytes(&mut bytes[..]),
            KeyAlgorithm::EcdsaSecp256k1 => {
                let secret = k256::SecretKey::random(&mut OsRng);
                bytes.copy_from_slice(&secret.to_bytes());
            }
        }
        Self { algorithm, bytes }
    }

    /// Builds an Ed25519 key from a raw 32-byte seed.
    ///
    /// # Errors
    ///
    /// Returns [`KeyError::InvalidLength`] unless `bytes` is 32 bytes long.
    pub fn from_bytes_ed25519(bytes: &[u8]) -> Result<Self, KeyError> {
        Ok(Self {
            algorithm: KeyAlgorithm::Ed25519,
            bytes: to_key_bytes(bytes)?,
        })
    }

    /// Builds a secp256k1 key from a raw 32-byte scalar.
    ///
    /// # Errors
    ///
    /// Returns [`KeyError::InvalidLength`] for a wrong length and
    /// [`KeyError::InvalidScalar`] if the scalar is out of range.
    pub fn from_bytes_ecdsa(bytes: &[u8]) -> Result<Self, KeyError> {
        let bytes = to_key_bytes(bytes)?;
        k256::SecretKey::from_slice(&bytes[..]).map_err(|_| KeyError::InvalidScalar)?;
        Ok(Self {
            algorithm: KeyAlgorithm::EcdsaSecp256k1,
            bytes,
        })
    }

    /// Decodes a PKCS#8 DER-encoded key, detecting the algorithm from its prefix.
    ///
    /// # Errors
    ///
    /// Returns [`KeyError::UnsupportedEncoding`] if neither known prefix
    /// matches.
    pub fn from_der(der: &[u8]) -> Result<Self, KeyError> {
        if let Some(raw) = der.strip_prefix(&ED25519_DER_PREFIX[..]) {
            return Self::from_bytes_ed25519(raw);
        }
        if let Some(raw) = der.strip_prefix(&ECDSA_DER_PREFIX[..]) {
            return Self::from_bytes_ecdsa(raw);
        }
        Err(KeyError::UnsupportedEncoding)
    }

    /// Parses a hex-encoded key, detecting the algorithm.
    ///
    /// Raw 32-byte input is treated as Ed25519; DER input carries its own
    /// algorithm.
    ///
    /// # Errors
    ///
    /// Returns a [`KeyError`] describing why the input could not be decoded.
    pub fn parse(s: &str) -> Result<Self, KeyError> {
        let bytes = decode_hex(s)?;
        if bytes.len() == KEY_LEN {
            Self::from_bytes_ed25519(&bytes)
        } else {
            Self::from_der(&bytes)
        }
    }

    /// Parses a hex-encoded Ed25519 key (raw or DER).
    pub fn from_str_ed25519(s: &str) -> Result<Self, KeyError> {
        let bytes = decode_hex(s)?;
        if bytes.len() == KEY_LEN {
            return Self::from_bytes_ed25519(&bytes);
        }
        match bytes.strip_prefix(&ED25519_DER_PREFIX[..]) {
            Some(raw) => Self::from_bytes_ed25519(raw),
            None => Err(KeyError::UnsupportedEncoding),
        }
    }

    /// Parses a hex-encoded secp256k1 key (raw or DER).
    pub fn from_str_ecdsa(s: &str) -> Result<Self, KeyError> {
        let bytes = decode_hex(s)?;
        if bytes.len() == KEY_LEN {
            return Self::from_bytes_ecdsa(&bytes);
        }
        match bytes.strip_prefix(&ECDSA_DER_PREFIX[..]) {
            Some(raw) => Self::from_bytes_ecdsa(raw),
            None => Err(KeyError::UnsupportedEncoding),
        }
    }

    /// Returns the key's algorithm.
    pub const fn algorithm(&self) -> KeyAlgorithm {
        self.algorithm
    }

    /// Returns the raw 32 secret bytes.
    ///
    /// Intended for protocol executors that sign transactions.
    pub fn secret_bytes(&self) -> &[u8; KEY_LEN] {
        &self.bytes
    }

    /// Encodes the key as PKCS#8 DER.
    pub fn to_der(&self) -> Zeroizing<Vec<u8>> {
        let prefix: &[u8] = match self.algorithm {
            KeyAlgorithm::Ed25519 => &ED25519_DER_PREFIX,
            KeyAlgorithm::EcdsaSecp256k1 => &ECDSA_DER_PREFIX,
        };
        let mut der = Zeroizing::new(Vec::with_capacity(prefix.len() + KEY_LEN));
        der.extend_from_slice(prefix);
        der.extend_from_slice(&self.bytes[..]);
        der
    }

    /// Encodes the key as lowercase DER hex. Round-trips through [`PrivateKey::parse`].
    pub fn to_der_hex(&self) -> Zeroizing<String> {
        Zeroizing::new(hex::encode(self.to_der().as_slice()))
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey")
            .field("algorithm", &self.algorithm)
            .finish_non_exhaustive()
    }
}

impl FromStr for PrivateKey {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn decode_hex(s: &str) -> Result<Zeroizing<Vec<u8>>, KeyError> {
    let s = s.trim();
    let s = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    if s.is_empty() {
        return Err(KeyError::Empty);
    }
    hex::decode(s)
        .map(Zeroizing::new)
        .map_err(|_| KeyError::InvalidHex)
}

fn to_key_bytes(bytes: &[u8]) -> Result<Zeroizing<[u8; KEY_LEN]>, KeyError> {
    if bytes.len() != KEY_LEN {
        return Err(KeyError::InvalidLength(bytes.len()));
    }
    let mut out = Zeroizing::new([0u8; KEY_LEN]);
    out.copy_from_slice(bytes);
    Ok(out)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const ED25519_RAW: &str = "db484b828e64b2d8f12ce3c0a0e93a0b8cce7af1bb8f39c97732394482538e10";
    const ED25519_DER: &str = "302e020100300506032b657004220420db484b828e64b2d8f12ce3c0a0e93a0b8cce7af1bb8f39c97732394482538e10";
    const ECDSA_RAW: &str = "0101010101010101010101010101010101010101010101010101010101010101";
    const ECDSA_DER: &str = "3030020100300706052b8104000a042204200101010101010101010101010101010101010101010101010101010101010101";

    #[test]
    fn raw_hex_defaults_to_ed25519() {
        let key = PrivateKey::parse(ED25519_RAW).unwrap();
        assert_eq!(key.algorithm(), KeyAlgorithm::Ed25519);
        assert_eq!(hex::encode(key.secret_bytes()), ED25519_RAW);
    }

    #[test]
    fn der_detects_algorithm() {
        let ed = PrivateKey::parse(ED25519_DER).unwrap();
        assert_eq!(ed.algorithm(), KeyAlgorithm::Ed25519);
        assert_eq!(ed, PrivateKey::parse(ED25519_RAW).unwrap());

        let ec = PrivateKey::parse(ECDSA_DER).unwrap();
        assert_eq!(ec.algorithm(), KeyAlgorithm::EcdsaSecp256k1);
    }

    #[test]
    fn explicit_ecdsa_accepts_raw() {
        let key = PrivateKey::from_str_ecdsa(ECDSA_RAW).unwrap();
        assert_eq!(key.algorithm(), KeyAlgorithm::EcdsaSecp256k1);
        assert_eq!(key, PrivateKey::parse(ECDSA_DER).unwrap());
    }

    #[test]
    fn algorithm_specific_parsers_reject_other_der() {
        assert_eq!(
            PrivateKey::from_str_ed25519(ECDSA_DER),
            Err(KeyError::UnsupportedEncoding)
        );
        assert_eq!(
            PrivateKey::from_str_ecdsa(ED25519_DER),
            Err(KeyError::UnsupportedEncoding)
        );
    }

    #[test]
    fn same_bytes_different_algorithm_are_not_equal() {
        let ed = PrivateKey::from_str_ed25519(ECDSA_RAW).unwrap();
        let ec = PrivateKey::from_str_ecdsa(ECDSA_RAW).unwrap();
        assert_ne!(ed, ec);
    }

    #[test]
    fn accepts_0x_prefix_and_whitespace() {
        let key = PrivateKey::parse(&format!("  0x{ED25519_DER} ")).unwrap();
        assert_eq!(key.algorithm(), KeyAlgorithm::Ed25519);
    }

    #[test]
    fn empty_rejected() {
        assert_eq!(PrivateKey::parse(""), Err(KeyError::Empty));
        assert_eq!(PrivateKey::parse("0x"), Err(KeyError::Empty));
        assert_eq!(PrivateKey::parse("   "), Err(KeyError::Empty));
    }

    #[test]
    fn invalid_hex_rejected() {
        assert_eq!(PrivateKey::parse("not-a-key"), Err(KeyError::InvalidHex));
        assert_eq!(PrivateKey::parse("abc"), Err(KeyError::InvalidHex));
    }

    #[test]
    fn unknown_der_prefix_rejected() {
        assert_eq!(
            PrivateKey::parse(&"ab".repeat(48)),
            Err(KeyError::UnsupportedEncoding)
        );
    }

    #[test]
    fn truncated_der_rejected() {
        let truncated = &ED25519_DER[..ED25519_DER.len() - 2];
        assert_eq!(PrivateKey::parse(truncated), Err(KeyError::InvalidLength(31)));
    }

    #[test]
    fn out_of_range_scalar_rejected() {
        assert_eq!(
            PrivateKey::from_str_ecdsa(&"00".repeat(32)),
            Err(KeyError::InvalidScalar)
        );
        assert_eq!(
            PrivateKey::from_str_ecdsa(&"ff".repeat(32)),
            Err(KeyError::InvalidScalar)
        );
    }

    #[test]
    fn der_hex_roundtrip() {
        for algorithm in [KeyAlgorithm::Ed25519, KeyAlgorithm::EcdsaSecp256k1] {
            let key = PrivateKey::generate(algorithm);
            let encoded = key.to_der_hex();
            let parsed = PrivateKey::parse(&encoded).unwrap();
            assert_eq!(parsed, key);
        }
    }

    #[test]
    fn generated_keys_differ() {
        let a = PrivateKey::generate(KeyAlgorithm::Ed25519);
        let b = PrivateKey::generate(KeyAlgorithm::Ed25519);
        assert_ne!(a, b);
    }

    #[test]
    fn debug_redacts_secret() {
        let key = PrivateKey::parse(ED25519_RAW).unwrap();
        let debug = format!("{key:?}");
        assert!(debug.contains("Ed25519"));
        assert!(!debug.contains("db484b"));
    }
}
