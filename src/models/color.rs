use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Single brightness byte, carried on the wire as two hex digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ColorValue(u8);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid color value {0:?}: expected two hex digits")]
pub struct InvalidColorValue(pub String);

impl ColorValue {
    pub const OFF: ColorValue = ColorValue(0x00);
    pub const FULL: ColorValue = ColorValue(0xff);

    pub fn new(level: u8) -> Self {
        ColorValue(level)
    }

    pub fn level(&self) -> u8 {
        self.0
    }

    pub fn is_off(&self) -> bool {
        self.0 == 0
    }

    /// Always two lowercase hex digits, so 5 becomes "05".
    pub fn to_hex(&self) -> String {
        hex::encode([self.0])
    }

    /// Accepts either case, but only exactly two digits.
    pub fn from_hex(value: &str) -> Result<Self, InvalidColorValue> {
        let mut byte = [0u8; 1];
        hex::decode_to_slice(value, &mut byte).map_err(|_| InvalidColorValue(value.to_string()))?;
        Ok(ColorValue(byte[0]))
    }
}

impl From<u8> for ColorValue {
    fn from(level: u8) -> Self {
        ColorValue(level)
    }
}

impl FromStr for ColorValue {
    type Err = InvalidColorValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ColorValue::from_hex(s)
    }
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02x}", self.0)
    }
}

impl Serialize for ColorValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for ColorValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        ColorValue::from_hex(&raw).map_err(serde::de::Error::custom)
    }
}
