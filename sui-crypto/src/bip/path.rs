//! Sui derivation paths
//!
//! provides the validation of the two derivation path schemes used by
//! the Sui wallet, both anchored on the Sui coin type (784):
//!
//! * the fully hardened, SLIP-0010 scheme of Ed25519 key pairs,
//!   `m/44'/784'/<account>'/<change>'/<address>'`;
//! * the BIP32 scheme of Secp256k1 key pairs,
//!   `m/54'/784'/<account>'/<change>/<address>`, where the change and
//!   address levels are left soft.
//!
//! validation is a whole string match: a stray character, a missing
//! level or a hardening mark on the wrong level rejects the path. An
//! accepted path can be kept as a [`HardenedPath`] or a [`Bip32Path`]
//! so that downstream derivation does not need to re-validate it.
//!
//! [`HardenedPath`]: ./struct.HardenedPath.html
//! [`Bip32Path`]: ./struct.Bip32Path.html
//!
//! # Example
//!
//! ```
//! use sui_crypto::bip::path::{is_valid_hardened_path, is_valid_bip32_path};
//!
//! assert!(is_valid_hardened_path("m/44'/784'/0'/0'/0'"));
//! assert!(is_valid_bip32_path("m/54'/784'/0'/0/0"));
//!
//! // hardening marks on the wrong levels
//! assert!(!is_valid_hardened_path("m/44'/784'/0'/0/0"));
//! assert!(!is_valid_bip32_path("m/54'/784'/0'/0/0'"));
//! ```

use std::{error, fmt, ops::Deref, result, str};

/// a Sui derivation path has a specific number of levels, the master
/// symbol excluded
pub const PATH_LENGTH: usize = 5;
/// purpose of the fully hardened (Ed25519) scheme
pub const ED25519_PURPOSE: u32 = 44;
/// purpose of the BIP32 (Secp256k1) scheme
pub const SECP256K1_PURPOSE: u32 = 54;
/// the coin type of Sui, as registered in SLIP-0044
pub const SUI_COIN_TYPE: u32 = 784;

/// derivation path of the first address of the Ed25519 scheme
pub const DEFAULT_ED25519_PATH: &'static str = "m/44'/784'/0'/0'/0'";
/// derivation path of the first address of the Secp256k1 scheme
pub const DEFAULT_SECP256K1_PATH: &'static str = "m/54'/784'/0'/0/0";

/// Error relating to the validation of a derivation path
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
pub enum Error {
    /// this means the given path does not start with the master
    /// symbol `m`.
    MissingMasterSymbol,

    /// this means the given path has an incompatible number of levels
    /// for Sui derivation. The parameter contains the number of levels
    /// received, the master symbol excluded. See `PATH_LENGTH`.
    InvalidLength(usize),

    /// this means the purpose level is not the hardened purpose of the
    /// scheme the path was validated against. The parameter contains
    /// the expected purpose.
    InvalidPurpose(u32),

    /// this means the coin type level is not the hardened Sui coin
    /// type. See `SUI_COIN_TYPE`.
    InvalidCoinType,

    /// this means the level at the given depth is missing its hardening
    /// mark. The purpose level is at depth 1.
    ExpectedHardened(usize),

    /// this means the level at the given depth carries a hardening mark
    /// the scheme does not allow. The purpose level is at depth 1.
    UnexpectedHardened(usize),

    /// this means the level at the given depth is not a run of decimal
    /// digits, the hardening mark excluded. The purpose level is at
    /// depth 1.
    InvalidIndex(usize),
}
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            &Error::MissingMasterSymbol => {
                write!(f, "Missing master symbol `m` at the start of the path")
            }
            &Error::InvalidLength(given) => write!(
                f,
                "Invalid length, expecting {} levels but received {}",
                PATH_LENGTH, given
            ),
            &Error::InvalidPurpose(expected) => {
                write!(f, "Invalid purpose, expecting the hardened level {}'", expected)
            }
            &Error::InvalidCoinType => write!(
                f,
                "Invalid coin type, expecting the hardened level {}'",
                SUI_COIN_TYPE
            ),
            &Error::ExpectedHardened(depth) => write!(
                f,
                "Invalid level at depth {}, expecting a hardened index",
                depth
            ),
            &Error::UnexpectedHardened(depth) => write!(
                f,
                "Invalid level at depth {}, expecting a non hardened index",
                depth
            ),
            &Error::InvalidIndex(depth) => write!(
                f,
                "Invalid level at depth {}, expecting a run of decimal digits",
                depth
            ),
        }
    }
}
impl error::Error for Error {}

pub type Result<T> = result::Result<T, Error>;

/// check the level is the canonical decimal rendering of the given
/// value, hardened. The match is textual: `044'` is not a valid
/// rendering of the purpose 44.
fn is_fixed_level(level: &str, value: u32) -> bool {
    level.ends_with('\'') && level[..level.len() - 1] == value.to_string()
}

/// check the level is a hardened (or soft) run of decimal digits. The
/// run is not bounded nor converted to an integer: `00'` and indices
/// beyond 2^32 are all within the grammar.
fn check_index(level: &str, depth: usize, hardened: bool) -> Result<()> {
    let digits = if hardened {
        if !level.ends_with('\'') {
            return Err(Error::ExpectedHardened(depth));
        }
        &level[..level.len() - 1]
    } else {
        if level.ends_with('\'') {
            return Err(Error::UnexpectedHardened(depth));
        }
        level
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::InvalidIndex(depth));
    }
    Ok(())
}

fn check_path(path: &str, purpose: u32, hardened_tail: bool) -> Result<()> {
    let mut levels = path.split('/');
    if levels.next() != Some("m") {
        return Err(Error::MissingMasterSymbol);
    }
    let levels: Vec<&str> = levels.collect();
    if levels.len() != PATH_LENGTH {
        return Err(Error::InvalidLength(levels.len()));
    }
    if !is_fixed_level(levels[0], purpose) {
        return Err(Error::InvalidPurpose(purpose));
    }
    if !is_fixed_level(levels[1], SUI_COIN_TYPE) {
        return Err(Error::InvalidCoinType);
    }
    check_index(levels[2], 3, true)?;
    check_index(levels[3], 4, hardened_tail)?;
    check_index(levels[4], 5, hardened_tail)?;
    Ok(())
}

/// check the given path against the fully hardened (Ed25519) scheme,
/// `m/44'/784'/<account>'/<change>'/<address>'`.
///
/// # Example
///
/// ```
/// use sui_crypto::bip::path::is_valid_hardened_path;
///
/// assert!(is_valid_hardened_path("m/44'/784'/3'/0'/14'"));
///
/// assert!(!is_valid_hardened_path("m/44'/784'/3'/0/14"));
/// assert!(!is_valid_hardened_path("m/54'/784'/3'/0'/14'"));
/// ```
pub fn is_valid_hardened_path(path: &str) -> bool {
    HardenedPath::validate(path).is_ok()
}

/// check the given path against the BIP32 (Secp256k1) scheme,
/// `m/54'/784'/<account>'/<change>/<address>`.
///
/// # Example
///
/// ```
/// use sui_crypto::bip::path::is_valid_bip32_path;
///
/// assert!(is_valid_bip32_path("m/54'/784'/3'/0/14"));
///
/// assert!(!is_valid_bip32_path("m/54'/784'/3'/0'/14'"));
/// assert!(!is_valid_bip32_path("m/44'/784'/3'/0/14"));
/// ```
pub fn is_valid_bip32_path(path: &str) -> bool {
    Bip32Path::validate(path).is_ok()
}

/// RAII for a validated, fully hardened Ed25519 derivation path. This
/// guarantees the string has been checked against the scheme's grammar,
/// so that downstream key derivation can consume it without validating
/// it again.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone)]
pub struct HardenedPath(String);
impl HardenedPath {
    /// create a `HardenedPath` from the given `String`, validating the
    /// path against the fully hardened scheme.
    ///
    /// # Example
    ///
    /// ```
    /// use sui_crypto::bip::path::{Error, HardenedPath};
    ///
    /// let path = HardenedPath::new("m/44'/784'/0'/0'/0'".to_owned())
    ///     .expect("a fully hardened derivation path");
    /// assert_eq!(path.as_ref(), "m/44'/784'/0'/0'/0'");
    ///
    /// // the change level must be hardened too
    /// let err = HardenedPath::new("m/44'/784'/0'/0/0'".to_owned());
    /// assert_eq!(err, Err(Error::ExpectedHardened(4)));
    /// ```
    ///
    /// # Error
    ///
    /// This function may fail if the given string strays anywhere from
    /// `m/44'/784'/<account>'/<change>'/<address>'`.
    ///
    pub fn new(path: String) -> Result<Self> {
        Self::validate(&path)?;
        Ok(HardenedPath(path))
    }

    /// check the given string against the fully hardened scheme without
    /// taking ownership of it.
    pub fn validate(path: &str) -> Result<()> {
        check_path(path, ED25519_PURPOSE, true)
    }

    /// build the canonical path for the given account, change and
    /// address indices. Every level of the result is hardened.
    ///
    /// # Example
    ///
    /// ```
    /// use sui_crypto::bip::path::HardenedPath;
    ///
    /// let path = HardenedPath::from_indexes(2, 0, 14);
    ///
    /// assert_eq!(path.as_ref(), "m/44'/784'/2'/0'/14'");
    /// ```
    pub fn from_indexes(account: u32, change: u32, address: u32) -> Self {
        HardenedPath(format!(
            "m/{}'/{}'/{}'/{}'/{}'",
            ED25519_PURPOSE, SUI_COIN_TYPE, account, change, address
        ))
    }
}
impl Deref for HardenedPath {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        self.0.deref()
    }
}
impl AsRef<str> for HardenedPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
impl fmt::Display for HardenedPath {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl str::FromStr for HardenedPath {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> {
        Self::validate(s)?;
        Ok(HardenedPath(s.to_owned()))
    }
}

/// RAII for a validated, BIP32 style Secp256k1 derivation path. This
/// guarantees the string has been checked against the scheme's grammar:
/// hardened down to the account level, soft change and address levels.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone)]
pub struct Bip32Path(String);
impl Bip32Path {
    /// create a `Bip32Path` from the given `String`, validating the
    /// path against the Secp256k1 scheme.
    ///
    /// # Example
    ///
    /// ```
    /// use sui_crypto::bip::path::{Bip32Path, Error};
    ///
    /// let path = Bip32Path::new("m/54'/784'/0'/0/0".to_owned())
    ///     .expect("a BIP32 derivation path");
    /// assert_eq!(path.as_ref(), "m/54'/784'/0'/0/0");
    ///
    /// // the address level must stay soft
    /// let err = Bip32Path::new("m/54'/784'/0'/0/0'".to_owned());
    /// assert_eq!(err, Err(Error::UnexpectedHardened(5)));
    /// ```
    ///
    /// # Error
    ///
    /// This function may fail if the given string strays anywhere from
    /// `m/54'/784'/<account>'/<change>/<address>`.
    ///
    pub fn new(path: String) -> Result<Self> {
        Self::validate(&path)?;
        Ok(Bip32Path(path))
    }

    /// check the given string against the Secp256k1 scheme without
    /// taking ownership of it.
    pub fn validate(path: &str) -> Result<()> {
        check_path(path, SECP256K1_PURPOSE, false)
    }

    /// build the canonical path for the given account, change and
    /// address indices. The account level of the result is hardened,
    /// the change and address levels are soft.
    ///
    /// # Example
    ///
    /// ```
    /// use sui_crypto::bip::path::Bip32Path;
    ///
    /// let path = Bip32Path::from_indexes(2, 0, 14);
    ///
    /// assert_eq!(path.as_ref(), "m/54'/784'/2'/0/14");
    /// ```
    pub fn from_indexes(account: u32, change: u32, address: u32) -> Self {
        Bip32Path(format!(
            "m/{}'/{}'/{}'/{}/{}",
            SECP256K1_PURPOSE, SUI_COIN_TYPE, account, change, address
        ))
    }
}
impl Deref for Bip32Path {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        self.0.deref()
    }
}
impl AsRef<str> for Bip32Path {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
impl fmt::Display for Bip32Path {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl str::FromStr for Bip32Path {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> {
        Self::validate(s)?;
        Ok(Bip32Path(s.to_owned()))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn accepts_hardened_paths() {
        assert!(is_valid_hardened_path("m/44'/784'/0'/0'/0'"));
        assert!(is_valid_hardened_path("m/44'/784'/2'/1'/5'"));
        assert!(is_valid_hardened_path("m/44'/784'/123'/456'/789'"));
        // indices are runs of digits, not machine integers
        assert!(is_valid_hardened_path("m/44'/784'/00'/000'/0'"));
        assert!(is_valid_hardened_path(
            "m/44'/784'/18446744073709551616'/0'/0'"
        ));
    }

    #[test]
    fn accepts_bip32_paths() {
        assert!(is_valid_bip32_path("m/54'/784'/0'/0/0"));
        assert!(is_valid_bip32_path("m/54'/784'/2'/1/5"));
        assert!(is_valid_bip32_path("m/54'/784'/00'/000/0"));
        assert!(is_valid_bip32_path("m/54'/784'/0'/0/18446744073709551616"));
    }

    #[test]
    fn rejects_misplaced_hardening() {
        // soft change and address levels belong to the Secp256k1 scheme
        assert!(!is_valid_hardened_path("m/44'/784'/0'/0/0"));
        assert!(!is_valid_hardened_path("m/44'/784'/0'/0'/0"));
        assert!(!is_valid_hardened_path("m/44'/784'/0'/0/0'"));
        assert!(!is_valid_hardened_path("m/44'/784'/0/0'/0'"));
        // hardened change and address levels belong to the Ed25519 scheme
        assert!(!is_valid_bip32_path("m/54'/784'/0'/0'/0'"));
        assert!(!is_valid_bip32_path("m/54'/784'/0'/0'/0"));
        assert!(!is_valid_bip32_path("m/54'/784'/0'/0/0'"));
        assert!(!is_valid_bip32_path("m/54'/784'/0/0/0"));
    }

    #[test]
    fn rejects_foreign_schemes() {
        // the purposes are not interchangeable
        assert!(!is_valid_hardened_path("m/54'/784'/0'/0'/0'"));
        assert!(!is_valid_bip32_path("m/44'/784'/0'/0/0"));
        // the coin type is pinned to Sui
        assert!(!is_valid_hardened_path("m/44'/1'/0'/0'/0'"));
        assert!(!is_valid_hardened_path("m/44'/785'/0'/0'/0'"));
        assert!(!is_valid_bip32_path("m/54'/1'/0'/0/0"));
        // the fixed levels are matched textually and hardened
        assert!(!is_valid_hardened_path("m/044'/784'/0'/0'/0'"));
        assert!(!is_valid_hardened_path("m/44'/0784'/0'/0'/0'"));
        assert!(!is_valid_hardened_path("m/44/784'/0'/0'/0'"));
        assert!(!is_valid_hardened_path("m/44'/784/0'/0'/0'"));
    }

    #[test]
    fn rejects_malformed_paths() {
        for &path in [
            "",
            "m",
            "m/",
            "44'/784'/0'/0'/0'",
            "M/44'/784'/0'/0'/0'",
            "m/44'/784'/0'/0'",
            "m/44'/784'/0'/0'/0'/0'",
            "m/44'/784'/0'/0'/0'/",
            "m/44'/784'//0'/0'",
            "m/44'/784'/a'/0'/0'",
            "m/44'/784'/0x0'/0'/0'",
            "m/44'/784'/'/0'/0'",
            "m/44'/784'/0'/0'/0''",
            "m/44'/784'/ 0'/0'/0'",
            " m/44'/784'/0'/0'/0'",
            "m/44'/784'/0'/0'/0' ",
            "m/44'/784'/-1'/0'/0'",
            "m/44'/784'/٣'/0'/0'",
        ]
        .iter()
        {
            assert!(!is_valid_hardened_path(path), "accepted {:?}", path);
            assert!(!is_valid_bip32_path(path), "accepted {:?}", path);
        }
    }

    #[test]
    fn reports_the_offending_level() {
        assert_eq!(HardenedPath::validate(""), Err(Error::MissingMasterSymbol));
        assert_eq!(HardenedPath::validate("m"), Err(Error::InvalidLength(0)));
        assert_eq!(
            HardenedPath::validate("m/44'/784'"),
            Err(Error::InvalidLength(2))
        );
        assert_eq!(
            HardenedPath::validate("m/54'/784'/0'/0'/0'"),
            Err(Error::InvalidPurpose(ED25519_PURPOSE))
        );
        assert_eq!(
            Bip32Path::validate("m/44'/784'/0'/0/0"),
            Err(Error::InvalidPurpose(SECP256K1_PURPOSE))
        );
        assert_eq!(
            HardenedPath::validate("m/44'/785'/0'/0'/0'"),
            Err(Error::InvalidCoinType)
        );
        assert_eq!(
            HardenedPath::validate("m/44'/784'/0/0'/0'"),
            Err(Error::ExpectedHardened(3))
        );
        assert_eq!(
            HardenedPath::validate("m/44'/784'/0'/0'/0"),
            Err(Error::ExpectedHardened(5))
        );
        assert_eq!(
            Bip32Path::validate("m/54'/784'/0'/0'/0"),
            Err(Error::UnexpectedHardened(4))
        );
        assert_eq!(
            HardenedPath::validate("m/44'/784'/x'/0'/0'"),
            Err(Error::InvalidIndex(3))
        );
        assert_eq!(
            HardenedPath::validate("m/44'/784'/0'/0'/0''"),
            Err(Error::InvalidIndex(5))
        );
    }

    #[test]
    fn narrows_only_valid_strings() {
        let path: HardenedPath = "m/44'/784'/0'/0'/0'".parse().unwrap();
        assert_eq!(path.as_ref(), "m/44'/784'/0'/0'/0'");
        assert_eq!(
            HardenedPath::new("m/44'/784'/0'/0/0".to_owned()),
            Err(Error::ExpectedHardened(4))
        );

        let path: Bip32Path = "m/54'/784'/0'/0/0".parse().unwrap();
        assert_eq!(path.to_string(), "m/54'/784'/0'/0/0");
        assert!("m/54'/784'/0'/0/0'".parse::<Bip32Path>().is_err());
    }

    #[test]
    fn default_paths_are_valid() {
        assert!(is_valid_hardened_path(DEFAULT_ED25519_PATH));
        assert!(!is_valid_bip32_path(DEFAULT_ED25519_PATH));
        assert!(is_valid_bip32_path(DEFAULT_SECP256K1_PATH));
        assert!(!is_valid_hardened_path(DEFAULT_SECP256K1_PATH));
    }

    #[test]
    fn canonical_renderings() {
        assert_eq!(
            HardenedPath::from_indexes(2, 1, 5).as_ref(),
            "m/44'/784'/2'/1'/5'"
        );
        assert_eq!(Bip32Path::from_indexes(2, 1, 5).as_ref(), "m/54'/784'/2'/1/5");
    }

    quickcheck! {
        fn from_indexes_is_hardened_valid(account: u32, change: u32, address: u32) -> bool {
            is_valid_hardened_path(&HardenedPath::from_indexes(account, change, address))
        }

        fn from_indexes_is_bip32_valid(account: u32, change: u32, address: u32) -> bool {
            is_valid_bip32_path(&Bip32Path::from_indexes(account, change, address))
        }

        fn schemes_do_not_overlap(account: u32, change: u32, address: u32) -> bool {
            let hardened = HardenedPath::from_indexes(account, change, address);
            let bip32 = Bip32Path::from_indexes(account, change, address);
            !is_valid_bip32_path(&hardened) && !is_valid_hardened_path(&bip32)
        }
    }
}
