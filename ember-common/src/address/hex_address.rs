use serde::{Deserialize, Serialize};

use super::errors::AddressError;

pub const HEX_PREFIX: &str = "0x";

/// Byte length of an EVM account address.
pub const ETH_ADDRESS_LENGTH: usize = 20;

/// Returns whether `value` is `0x` followed by exactly `length` hex-encoded bytes.
///
/// Only the character set and the length are checked. Case is irrelevant and
/// no normalization happens, so `" 0xab"` or `"0XAB"` are rejected.
pub fn is_valid_address(value: &str, length: usize) -> bool {
    validate_address(value, length).is_ok()
}

/// Same predicate as [`is_valid_address`], reporting the first rule that fails.
///
/// The format (`^0x[0-9A-Fa-f]*$`) is checked before the length.
pub fn validate_address(value: &str, length: usize) -> Result<(), AddressError> {
    let body = value
        .strip_prefix(HEX_PREFIX)
        .ok_or(AddressError::MissingPrefix)?;

    if let Some((offset, character)) = body.char_indices().find(|(_, c)| !c.is_ascii_hexdigit()) {
        return Err(AddressError::InvalidCharacter {
            index: HEX_PREFIX.len() + offset,
            character,
        });
    }

    let expected = expected_len(length)?;
    if value.len() != expected {
        return Err(AddressError::InvalidLength {
            expected,
            actual: value.len(),
        });
    }

    Ok(())
}

// Two characters of prefix plus two per byte.
fn expected_len(length: usize) -> Result<usize, AddressError> {
    length
        .checked_mul(2)
        .and_then(|n| n.checked_add(HEX_PREFIX.len()))
        .ok_or(AddressError::LengthOverflow(length))
}

/// A string already known to be a well-formed `0x` hex address.
///
/// Serde goes through [`TryFrom<String>`], so deserialized values are held to
/// [`ETH_ADDRESS_LENGTH`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexAddress(String);

impl HexAddress {
    pub fn parse(value: impl Into<String>, length: usize) -> Result<Self, AddressError> {
        let value = value.into();
        validate_address(&value, length)?;
        Ok(HexAddress(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of bytes encoded after the prefix.
    pub fn byte_len(&self) -> usize {
        (self.0.len() - HEX_PREFIX.len()) / 2
    }

    /// Decodes the hex body into raw bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>, AddressError> {
        Ok(hex::decode(&self.0[HEX_PREFIX.len()..])?)
    }
}

impl TryFrom<&str> for HexAddress {
    type Error = AddressError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        HexAddress::parse(s, ETH_ADDRESS_LENGTH)
    }
}

impl TryFrom<String> for HexAddress {
    type Error = AddressError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        HexAddress::parse(s, ETH_ADDRESS_LENGTH)
    }
}

impl From<HexAddress> for String {
    fn from(address: HexAddress) -> Self {
        address.0
    }
}

impl std::ops::Deref for HexAddress {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Display for HexAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
