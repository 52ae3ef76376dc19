//! BIP (Bitcoin Improvement Proposal) and SLIP related material, as
//! reused by the Sui key derivation schemes.

pub mod bip39;
pub mod path;
