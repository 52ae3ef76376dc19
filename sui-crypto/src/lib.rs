//! Cryptography core of the Sui wallet SDK.
//!
//! This crate covers the two deterministic building blocks every Sui
//! key pair starts from:
//!
//! * validation of the hierarchical deterministic (HD) derivation path
//!   schemes of the SDK, see [`bip::path`](./bip/path/index.html);
//! * derivation of the BIP39 seed from a mnemonic phrase, see
//!   [`bip::bip39`](./bip/bip39/index.html).
//!
//! Child key derivation, signing and address formatting consume the
//! values produced here and live outside of this crate.

#[cfg(test)]
#[macro_use]
extern crate quickcheck;

pub mod bip;
pub mod util;

#[cfg(feature = "generic-serialization")]
mod serde;
