use crate::bip::path::{Bip32Path, HardenedPath};
use serde::{
    de::{Deserialize, Deserializer, Error, Visitor},
    ser::{Serialize, Serializer},
};
use std::fmt;
use std::str::FromStr;

impl Serialize for HardenedPath {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_ref())
    }
}

impl Serialize for Bip32Path {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_ref())
    }
}

struct HardenedPathVisitor;
impl<'de> Visitor<'de> for HardenedPathVisitor {
    type Value = HardenedPath;

    fn expecting(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "Expecting a fully hardened Sui derivation path")
    }

    fn visit_str<'a, E>(self, v: &'a str) -> Result<Self::Value, E>
    where
        E: Error,
    {
        match Self::Value::from_str(v) {
            Err(err) => Err(E::custom(err)),
            Ok(path) => Ok(path),
        }
    }
}

struct Bip32PathVisitor;
impl<'de> Visitor<'de> for Bip32PathVisitor {
    type Value = Bip32Path;

    fn expecting(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "Expecting a BIP32 Sui derivation path")
    }

    fn visit_str<'a, E>(self, v: &'a str) -> Result<Self::Value, E>
    where
        E: Error,
    {
        match Self::Value::from_str(v) {
            Err(err) => Err(E::custom(err)),
            Ok(path) => Ok(path),
        }
    }
}

impl<'de> Deserialize<'de> for HardenedPath {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(HardenedPathVisitor)
    }
}

impl<'de> Deserialize<'de> for Bip32Path {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(Bip32PathVisitor)
    }
}
