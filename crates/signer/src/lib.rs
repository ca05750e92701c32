//! Key material for the token SDK.
//!
//! This crate provides:
//!
//! - [`PrivateKey`] -- Ed25519 / ECDSA secp256k1 key material with hex and
//!   PKCS#8 DER parsing
//! - [`KeyAlgorithm`] -- the algorithm tag carried by every key
//! - [`KeyError`] -- why a textual key could not be decoded
//! - [`Account`] -- an [`AccountId`](ledger_core::AccountId) paired with its key
//!
//! # Design
//!
//! Signing itself belongs to the protocol executor. This crate only decodes,
//! validates and holds keys: secp256k1 scalars are range-checked with `k256`,
//! and every key buffer is zeroized on drop.

mod account;
mod key;

pub use account::Account;
pub use key::{KeyAlgorithm, KeyError, PrivateKey};
