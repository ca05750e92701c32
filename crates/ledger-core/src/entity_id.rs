//! Entity identifiers: `shard.realm.num` with an optional checksum.
//!
//! Accounts and tokens share one textual form:
//!
//! | Form | Example |
//! |------|---------|
//! | plain | `0.0.1234` |
//! | with checksum | `0.0.1234-vfmkw` |
//!
//! The checksum is five lowercase letters derived from the address and the
//! network's ledger id. Parsing only checks its shape; use
//! [`AccountId::validate_checksum`] / [`TokenId::validate_checksum`] to
//! verify it against a [`Network`]. Equality and hashing ignore the checksum.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::Network;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Number of letters in an address checksum.
const CHECKSUM_LEN: usize = 5;

/// 26^3, modulus for the digit hash.
const P3: u64 = 17_576;

/// 26^5, modulus for the final checksum.
const P5: u64 = 11_881_376;

/// Multiplier applied before encoding the checksum.
const M: u64 = 1_000_003;

/// Polynomial weight.
const W: u64 = 31;

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Errors that can occur when parsing or validating entity identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntityIdError {
    /// The input was empty or whitespace.
    Empty,

    /// The address did not have exactly three `.`-separated components.
    WrongComponentCount(usize),

    /// A component was not a base-10 unsigned integer.
    InvalidNumber(String),

    /// The `-checksum` suffix was not five lowercase ASCII letters.
    InvalidChecksumFormat(String),

    /// The checksum does not match the address on the given network.
    ChecksumMismatch {
        /// Checksum computed for the network.
        expected: String,
        /// Checksum carried by the identifier.
        actual: String,
    },
}

impl fmt::Display for EntityIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "entity id is empty"),
            Self::WrongComponentCount(n) => {
                write!(f, "expected shard.realm.num, found {n} component(s)")
            }
            Self::InvalidNumber(part) => write!(f, "invalid entity id component: {part:?}"),
            Self::InvalidChecksumFormat(c) => write!(f, "invalid checksum format: {c:?}"),
            Self::ChecksumMismatch { expected, actual } => {
                write!(f, "checksum mismatch: expected {expected}, found {actual}")
            }
        }
    }
}

impl std::error::Error for EntityIdError {}

// ---------------------------------------------------------------------------
// EntityId (shared representation)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy)]
struct EntityId {
    shard: u64,
    realm: u64,
    num: u64,
    checksum: Option<[u8; CHECKSUM_LEN]>,
}

impl EntityId {
    const fn new(shard: u64, realm: u64, num: u64) -> Self {
        Self {
            shard,
            realm,
            num,
            checksum: None,
        }
    }

    fn parse(s: &str) -> Result<Self, EntityIdError> {
        if s.trim().is_empty() {
            return Err(EntityIdError::Empty);
        }

        let (address, checksum) = match s.split_once('-') {
            Some((address, checksum)) => (address, Some(parse_checksum(checksum)?)),
            None => (s, None),
        };

        let mut parts = [0u64; 3];
        let mut count = 0;
        for part in address.split('.') {
            if count < 3 {
                parts[count] = parse_component(part)?;
            }
            count += 1;
        }
        if count != 3 {
            return Err(EntityIdError::WrongComponentCount(count));
        }

        Ok(Self {
            shard: parts[0],
            realm: parts[1],
            num: parts[2],
            checksum,
        })
    }

    fn checksum_for(&self, network: Network) -> String {
        let address = format!("{}.{}.{}", self.shard, self.realm, self.num);
        let letters = compute_checksum(network.ledger_id(), &address);
        letters.iter().map(|&b| b as char).collect()
    }

    fn validate_checksum(&self, network: Network) -> Result<(), EntityIdError> {
        let Some(actual) = self.checksum else {
            return Ok(());
        };
        let expected = self.checksum_for(network);
        if expected.as_bytes() == actual {
            Ok(())
        } else {
            Err(EntityIdError::ChecksumMismatch {
                expected,
                actual: actual.iter().map(|&b| b as char).collect(),
            })
        }
    }

    fn key(&self) -> (u64, u64, u64) {
        (self.shard, self.realm, self.num)
    }
}

impl PartialEq for EntityId {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for EntityId {}

impl Hash for EntityId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl PartialOrd for EntityId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for EntityId {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.shard, self.realm, self.num)
    }
}

fn parse_component(part: &str) -> Result<u64, EntityIdError> {
    // `u64::from_str` accepts a leading `+`, which is not a valid address.
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(EntityIdError::InvalidNumber(part.to_owned()));
    }
    part.parse()
        .map_err(|_| EntityIdError::InvalidNumber(part.to_owned()))
}

fn parse_checksum(s: &str) -> Result<[u8; CHECKSUM_LEN], EntityIdError> {
    let bytes = s.as_bytes();
    if bytes.len() != CHECKSUM_LEN || !bytes.iter().all(u8::is_ascii_lowercase) {
        return Err(EntityIdError::InvalidChecksumFormat(s.to_owned()));
    }
    let mut out = [0u8; CHECKSUM_LEN];
    out.copy_from_slice(bytes);
    Ok(out)
}

/// Computes the five-letter address checksum for `address` (`shard.realm.num`)
/// on the ledger identified by `ledger_id`.
fn compute_checksum(ledger_id: &[u8], address: &str) -> [u8; CHECKSUM_LEN] {
    let mut sd0 = 0u64;
    let mut sd1 = 0u64;
    let mut sd = 0u64;
    for (i, c) in address.bytes().enumerate() {
        let digit = if c == b'.' { 10 } else { u64::from(c - b'0') };
        sd = (W * sd + digit) % P3;
        if i % 2 == 0 {
            sd0 = (sd0 + digit) % 11;
        } else {
            sd1 = (sd1 + digit) % 11;
        }
    }

    // Ledger id followed by six zero bytes.
    let mut sh = 0u64;
    for &b in ledger_id.iter().chain([0u8; 6].iter()) {
        sh = (W * sh + u64::from(b)) % P5;
    }

    let len = address.len() as u64;
    let c = ((((len % 5) * 11 + sd0) * 11 + sd1) * P3 + sd + sh) % P5;
    let mut cp = (c * M) % P5;

    let mut out = [0u8; CHECKSUM_LEN];
    for slot in out.iter_mut().rev() {
        *slot = b'a' + (cp % 26) as u8;
        cp /= 26;
    }
    out
}

// ---------------------------------------------------------------------------
// AccountId
// ---------------------------------------------------------------------------

/// Identifier of a ledger account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AccountId(EntityId);

impl AccountId {
    /// Creates an account id from its components.
    pub const fn new(shard: u64, realm: u64, num: u64) -> Self {
        Self(EntityId::new(shard, realm, num))
    }

    /// Parses `shard.realm.num` with an optional `-checksum` suffix.
    ///
    /// # Errors
    ///
    /// Returns an [`EntityIdError`] if the input is empty, does not have
    /// three numeric components, or carries a malformed checksum.
    pub fn parse(s: &str) -> Result<Self, EntityIdError> {
        EntityId::parse(s).map(Self)
    }

    pub const fn shard(&self) -> u64 {
        self.0.shard
    }

    pub const fn realm(&self) -> u64 {
        self.0.realm
    }

    pub const fn num(&self) -> u64 {
        self.0.num
    }

    /// Returns the checksum carried by the parsed text, if any.
    pub fn checksum(&self) -> Option<&str> {
        self.0
            .checksum
            .as_ref()
            .and_then(|c| std::str::from_utf8(c).ok())
    }

    /// Formats the id with the checksum for `network` appended.
    pub fn to_string_with_checksum(&self, network: Network) -> String {
        format!("{}-{}", self.0, self.0.checksum_for(network))
    }

    /// Verifies the parsed checksum against `network`.
    ///
    /// Ids without a checksum always validate.
    pub fn validate_checksum(&self, network: Network) -> Result<(), EntityIdError> {
        self.0.validate_checksum(network)
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for AccountId {
    type Err = EntityIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// ---------------------------------------------------------------------------
// TokenId
// ---------------------------------------------------------------------------

/// Identifier of a token created on the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TokenId(EntityId);

impl TokenId {
    /// Creates a token id from its components.
    pub const fn new(shard: u64, realm: u64, num: u64) -> Self {
        Self(EntityId::new(shard, realm, num))
    }

    /// Parses `shard.realm.num` with an optional `-checksum` suffix.
    ///
    /// # Errors
    ///
    /// Returns an [`EntityIdError`] on malformed input.
    pub fn parse(s: &str) -> Result<Self, EntityIdError> {
        EntityId::parse(s).map(Self)
    }

    pub const fn shard(&self) -> u64 {
        self.0.shard
    }

    pub const fn realm(&self) -> u64 {
        self.0.realm
    }

    pub const fn num(&self) -> u64 {
        self.0.num
    }

    /// Formats the id with the checksum for `network` appended.
    pub fn to_string_with_checksum(&self, network: Network) -> String {
        format!("{}-{}", self.0, self.0.checksum_for(network))
    }

    /// Verifies the parsed checksum against `network`.
    pub fn validate_checksum(&self, network: Network) -> Result<(), EntityIdError> {
        self.0.validate_checksum(network)
    }
}

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for TokenId {
    type Err = EntityIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_plain_account_id() {
        let id = AccountId::parse("0.0.1234").unwrap();
        assert_eq!((id.shard(), id.realm(), id.num()), (0, 0, 1234));
        assert_eq!(id.checksum(), None);
        assert_eq!(id.to_string(), "0.0.1234");
    }

    #[test]
    fn parse_nonzero_shard_and_realm() {
        let id = TokenId::parse("1.2.3").unwrap();
        assert_eq!(id, TokenId::new(1, 2, 3));
    }

    #[test]
    fn empty_rejected() {
        assert_eq!(AccountId::parse(""), Err(EntityIdError::Empty));
        assert_eq!(AccountId::parse("   "), Err(EntityIdError::Empty));
    }

    #[test]
    fn wrong_component_count_rejected() {
        assert_eq!(
            AccountId::parse("0.1234"),
            Err(EntityIdError::WrongComponentCount(2))
        );
        assert_eq!(
            TokenId::parse("0.0.0.1"),
            Err(EntityIdError::WrongComponentCount(4))
        );
    }

    #[test]
    fn non_numeric_component_rejected() {
        assert!(matches!(
            AccountId::parse("0.0.abc"),
            Err(EntityIdError::InvalidNumber(_))
        ));
        assert!(matches!(
            AccountId::parse("0.0.+5"),
            Err(EntityIdError::InvalidNumber(_))
        ));
        assert!(matches!(
            AccountId::parse("0..5"),
            Err(EntityIdError::InvalidNumber(_))
        ));
        assert!(matches!(
            AccountId::parse("0.0.99999999999999999999999"),
            Err(EntityIdError::InvalidNumber(_))
        ));
    }

    #[test]
    fn malformed_checksum_rejected() {
        assert!(matches!(
            AccountId::parse("0.0.5-ABCDE"),
            Err(EntityIdError::InvalidChecksumFormat(_))
        ));
        assert!(matches!(
            AccountId::parse("0.0.5-abc"),
            Err(EntityIdError::InvalidChecksumFormat(_))
        ));
    }

    #[test]
    fn checksum_roundtrip_validates() {
        let id = AccountId::new(0, 0, 1234);
        for network in Network::ALL {
            let text = id.to_string_with_checksum(network);
            let parsed = AccountId::parse(&text).unwrap();
            assert_eq!(parsed, id);
            assert_eq!(parsed.checksum().map(str::len), Some(CHECKSUM_LEN));
            parsed.validate_checksum(network).unwrap();
        }
    }

    #[test]
    fn checksum_differs_between_networks() {
        let id = TokenId::new(0, 0, 42);
        let mainnet = id.to_string_with_checksum(Network::Mainnet);
        let testnet = id.to_string_with_checksum(Network::Testnet);
        assert_ne!(mainnet, testnet);

        let parsed = TokenId::parse(&mainnet).unwrap();
        assert!(matches!(
            parsed.validate_checksum(Network::Testnet),
            Err(EntityIdError::ChecksumMismatch { .. })
        ));
    }

    #[test]
    fn id_without_checksum_always_validates() {
        let id = AccountId::parse("0.0.7").unwrap();
        id.validate_checksum(Network::Mainnet).unwrap();
    }

    #[test]
    fn equality_ignores_checksum() {
        let plain = AccountId::parse("0.0.1234").unwrap();
        let with = AccountId::parse(&plain.to_string_with_checksum(Network::Testnet)).unwrap();
        assert_eq!(plain, with);

        let mut set = std::collections::HashSet::new();
        set.insert(plain);
        assert!(set.contains(&with));
    }

    #[test]
    fn ordering_is_numeric() {
        let mut ids = vec![
            TokenId::new(0, 0, 10),
            TokenId::new(0, 0, 9),
            TokenId::new(0, 1, 0),
        ];
        ids.sort();
        assert_eq!(
            ids,
            vec![
                TokenId::new(0, 0, 9),
                TokenId::new(0, 0, 10),
                TokenId::new(0, 1, 0)
            ]
        );
    }

    #[test]
    fn from_str_trait() {
        let id: TokenId = "0.0.5005".parse().unwrap();
        assert_eq!(id, TokenId::new(0, 0, 5005));
    }

    #[test]
    fn error_display() {
        assert_eq!(EntityIdError::Empty.to_string(), "entity id is empty");
        assert_eq!(
            EntityIdError::WrongComponentCount(2).to_string(),
            "expected shard.realm.num, found 2 component(s)"
        );
    }
}
