//! BIP39 seed derivation
//!
//! turns a mnemonic phrase into the 64 bytes seed every Sui key pair
//! is derived from, following the BIP39 key stretching (PBKDF2 with
//! HMAC-SHA512, 2048 iterations). The wallet does not support user
//! passphrases: the salt is the fixed string `mnemonic`.
//!
//! The mnemonic phrase is treated as opaque text here. Word list and
//! checksum validation belong to the mnemonic generation library, and
//! inputs are expected to be UTF-8 NFKD normalized already.
//!
//! For more details about the protocol, see
//! [Bitcoin Improvement Proposal 39](https://github.com/bitcoin/bips/blob/master/bip-0039.mediawiki)
//!
//! # Example
//!
//! ```
//! use sui_crypto::bip::bip39::{mnemonic_to_seed, mnemonic_to_seed_hex};
//!
//! let mnemonics = "mimic left ask vacant toast follow bitter join diamond gate attend obey";
//!
//! // the root material of a key pair
//! let seed = mnemonic_to_seed(mnemonics);
//! assert_eq!(seed.as_ref().len(), 64);
//!
//! // the same seed, rendered as 128 lowercase hexadecimal symbols
//! let seed_hex = mnemonic_to_seed_hex(mnemonics);
//! assert_eq!(seed_hex.len(), 128);
//! ```
//!

use cryptoxide::hmac::Hmac;
use cryptoxide::pbkdf2::pbkdf2;
use cryptoxide::sha2::Sha512;
use std::{error, fmt, ops::Deref, result};

use crate::util::{hex, securemem};

/// the expected size of a seed, in bytes.
pub const SEED_SIZE: usize = 64;

/// number of iterations of the PBKDF2 key stretching.
const ITERATIONS: u32 = 2048;

/// salt of the key stretching. BIP39 defines it as the string
/// `mnemonic` followed by the passphrase, and the wallet always uses an
/// empty passphrase.
const SALT: &'static [u8] = b"mnemonic";

/// Error regarding seed construction
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
pub enum Error {
    /// the Seed is of invalid size. The parameter is the given seed size,
    /// the expected seed size is [`SEED_SIZE`](./constant.SEED_SIZE.html).
    InvalidSeedSize(usize),
}
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            &Error::InvalidSeedSize(sz) => write!(
                f,
                "Invalid Seed Size, expected {} bytes, but received {} bytes.",
                SEED_SIZE, sz
            ),
        }
    }
}
impl error::Error for Error {}

/// convenient Alias to wrap up operations that may return
/// an [`Error`](./enum.Error.html).
pub type Result<T> = result::Result<T, Error>;

/// A BIP39 `Seed` object, the root material a Sui key pair is derived
/// from.
///
/// The bytes are zeroed when the value is dropped.
pub struct Seed([u8; SEED_SIZE]);
impl Seed {
    /// create a Seed by taking ownership of the given array
    ///
    /// # Example
    ///
    /// ```
    /// use sui_crypto::bip::bip39::{Seed, SEED_SIZE};
    ///
    /// let bytes = [0u8;SEED_SIZE];
    /// let seed  = Seed::from_bytes(bytes);
    ///
    /// assert!(seed.as_ref().len() == SEED_SIZE);
    /// ```
    pub fn from_bytes(buf: [u8; SEED_SIZE]) -> Self {
        Seed(buf)
    }

    /// create a Seed by copying the given slice into a new array
    ///
    /// # Example
    ///
    /// ```
    /// use sui_crypto::bip::bip39::{Seed, SEED_SIZE};
    ///
    /// let bytes = [0u8;SEED_SIZE];
    /// let wrong = [0u8;31];
    ///
    /// assert!(Seed::from_slice(&wrong[..]).is_err());
    /// assert!(Seed::from_slice(&bytes[..]).is_ok());
    /// ```
    ///
    /// # Error
    ///
    /// This constructor may fail if the given slice's length is not
    /// compatible to define a `Seed` (see [`SEED_SIZE`](./constant.SEED_SIZE.html)).
    ///
    pub fn from_slice(buf: &[u8]) -> Result<Self> {
        if buf.len() != SEED_SIZE {
            return Err(Error::InvalidSeedSize(buf.len()));
        }
        let mut v = [0u8; SEED_SIZE];
        v[..].clone_from_slice(buf);
        Ok(Seed::from_bytes(v))
    }

    /// derive the seed from the given mnemonic phrase with the key
    /// stretching of BIP39 and an empty passphrase.
    ///
    /// The derivation is deterministic and accepts any phrase, the
    /// checksum of the words is not verified here.
    ///
    /// # Example
    ///
    /// ```
    /// use sui_crypto::bip::bip39::{Seed, SEED_SIZE};
    ///
    /// let mnemonics = "mimic left ask vacant toast follow bitter join diamond gate attend obey";
    ///
    /// let seed = Seed::from_mnemonics(mnemonics);
    ///
    /// assert!(seed.as_ref().len() == SEED_SIZE);
    /// ```
    ///
    pub fn from_mnemonics(mnemonics: &str) -> Self {
        let mut mac = Hmac::new(Sha512::new(), mnemonics.as_bytes());
        let mut result = [0; SEED_SIZE];
        pbkdf2(&mut mac, SALT, ITERATIONS, &mut result);
        Self::from_bytes(result)
    }
}
impl PartialEq for Seed {
    fn eq(&self, other: &Self) -> bool {
        self.0.as_ref() == other.0.as_ref()
    }
}
impl fmt::Debug for Seed {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", hex::encode(self.as_ref()))
    }
}
impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", hex::encode(self.as_ref()))
    }
}
impl AsRef<[u8]> for Seed {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
impl Deref for Seed {
    type Target = [u8];
    fn deref(&self) -> &Self::Target {
        self.as_ref()
    }
}
impl Drop for Seed {
    fn drop(&mut self) {
        securemem::zero(&mut self.0);
    }
}

/// derive the [`Seed`](./struct.Seed.html) of the given mnemonic
/// phrase, with an empty passphrase.
///
/// # Example
///
/// ```
/// use sui_crypto::bip::bip39::mnemonic_to_seed;
///
/// let seed = mnemonic_to_seed("mimic left ask vacant toast follow bitter join diamond gate attend obey");
///
/// assert_eq!(seed.as_ref().len(), 64);
/// ```
pub fn mnemonic_to_seed(mnemonics: &str) -> Seed {
    Seed::from_mnemonics(mnemonics)
}

/// derive the seed of the given mnemonic phrase and render it in
/// hexadecimal: 128 lowercase symbols, without separator or prefix.
///
/// # Example
///
/// ```
/// use sui_crypto::bip::bip39::{mnemonic_to_seed, mnemonic_to_seed_hex};
/// use sui_crypto::util::hex;
///
/// let mnemonics = "mimic left ask vacant toast follow bitter join diamond gate attend obey";
///
/// let seed_hex = mnemonic_to_seed_hex(mnemonics);
///
/// assert_eq!(seed_hex, hex::encode(mnemonic_to_seed(mnemonics).as_ref()));
/// ```
pub fn mnemonic_to_seed_hex(mnemonics: &str) -> String {
    hex::encode(mnemonic_to_seed(mnemonics).as_ref())
}

#[cfg(test)]
mod test {
    use super::*;

    const MNEMONICS: &'static str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";
    const SEED_HEX: &'static str = "5eb00bbddcf069084889a8ab9155568165f5c453ccb85e70811aaed6f6da5fc19a5ac40b389cd370d086206dec8aa6c43daea6690f20ad3d8d48b2d2ce9e38e4";

    #[test]
    fn reference_seed() {
        let seed_ref =
            Seed::from_slice(&hex::decode(SEED_HEX).unwrap()).expect("decode seed from hex");

        assert_eq!(seed_ref, Seed::from_mnemonics(MNEMONICS));
    }

    #[test]
    fn reference_seed_hex() {
        assert_eq!(mnemonic_to_seed_hex(MNEMONICS), SEED_HEX);
    }

    #[test]
    fn empty_phrase_derives() {
        // the phrase is opaque text, even the empty string stretches
        // into a full size seed
        assert_eq!(mnemonic_to_seed("").as_ref().len(), SEED_SIZE);
    }

    #[test]
    fn invalid_seed_size() {
        assert_eq!(
            Seed::from_slice(&[0u8; 31]).unwrap_err(),
            Error::InvalidSeedSize(31)
        );
        assert_eq!(
            Seed::from_slice(&[0u8; 65]).unwrap_err(),
            Error::InvalidSeedSize(65)
        );
    }

    #[test]
    fn seed_displays_as_hex() {
        let seed = Seed::from_mnemonics(MNEMONICS);
        assert_eq!(format!("{}", seed), SEED_HEX);
        assert_eq!(format!("{:?}", seed), SEED_HEX);
    }

    quickcheck! {
        fn derivation_is_deterministic(phrase: String) -> bool {
            Seed::from_mnemonics(&phrase) == Seed::from_mnemonics(&phrase)
        }

        fn seed_hex_is_the_rendered_seed(phrase: String) -> bool {
            mnemonic_to_seed_hex(&phrase) == hex::encode(mnemonic_to_seed(&phrase).as_ref())
        }

        fn seed_hex_shape(phrase: String) -> bool {
            let seed_hex = mnemonic_to_seed_hex(&phrase);
            seed_hex.len() == 2 * SEED_SIZE
                && seed_hex.bytes().all(|b| match b {
                    b'0'..=b'9' | b'a'..=b'f' => true,
                    _ => false,
                })
        }
    }
}
