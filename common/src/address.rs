use std::{fmt, str::FromStr};

use serde::{de::Error as _, Deserialize, Deserializer, Serialize, Serializer};

use crate::{
    config::{EXPLORER_URL, SHORT_ADDRESS_PREFIX_LEN, SHORT_ADDRESS_SUFFIX_LEN},
    error::AddressError,
};

pub const ADDRESS_SIZE: usize = 20;

/// LUKSO (EVM) account or contract address
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Address([u8; ADDRESS_SIZE]);

impl Address {
    pub const fn new(bytes: [u8; ADDRESS_SIZE]) -> Self {
        Self(bytes)
    }

    pub const fn zero() -> Self {
        Self([0; ADDRESS_SIZE])
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0; ADDRESS_SIZE]
    }

    pub fn as_bytes(&self) -> &[u8; ADDRESS_SIZE] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }

    /// `0x1234...abcd` form used in lists and headers
    pub fn short(&self) -> String {
        shorten_address(&self.to_hex())
    }

    /// Block explorer page of this account or contract
    pub fn explorer_url(&self) -> String {
        format!("{}/address/{}", EXPLORER_URL, self)
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .ok_or(AddressError::MissingPrefix)?;

        if digits.len() != ADDRESS_SIZE * 2 {
            return Err(AddressError::InvalidLength {
                expected: ADDRESS_SIZE * 2,
                got: digits.len(),
            });
        }

        let mut bytes = [0u8; ADDRESS_SIZE];
        hex::decode_to_slice(digits, &mut bytes).map_err(|_| AddressError::InvalidHex)?;
        Ok(Self(bytes))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.to_hex())
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(D::Error::custom)
    }
}

/// Shorten an address to `0x1234...abcd`.
///
/// Values too short to shorten are returned as is.
pub fn shorten_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= SHORT_ADDRESS_PREFIX_LEN + SHORT_ADDRESS_SUFFIX_LEN {
        return address.to_string();
    }

    let prefix: String = chars[..SHORT_ADDRESS_PREFIX_LEN].iter().collect();
    let suffix: String = chars[chars.len() - SHORT_ADDRESS_SUFFIX_LEN..].iter().collect();
    format!("{}...{}", prefix, suffix)
}
