//!
//! The numeric quantity accepted in configuration files.
//!

use std::str::FromStr;

use serde::Deserialize;
use serde::Deserializer;

///
/// The numeric quantity accepted in configuration files.
///
/// Accepts YAML integers, decimal strings and `0x`- or `0X`-prefixed hexadecimal
/// strings. Underscores are ignored, so `5_000_000` is a valid quantity.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Quantity(pub web3::types::U256);

impl Quantity {
    ///
    /// Returns the inner value.
    ///
    pub fn as_u256(&self) -> web3::types::U256 {
        self.0
    }
}

impl From<u64> for Quantity {
    fn from(value: u64) -> Self {
        Self(web3::types::U256::from(value))
    }
}

impl FromStr for Quantity {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let cleaned = value.trim().replace('_', "");
        let hex_digits = cleaned
            .strip_prefix("0x")
            .or_else(|| cleaned.strip_prefix("0X"));
        let (digits, radix) = match hex_digits {
            Some(digits) => (digits, 16),
            None => (cleaned.as_str(), 10),
        };
        if digits.is_empty() {
            anyhow::bail!("Invalid quantity `{value}`: no digits");
        }

        web3::types::U256::from_str_radix(digits, radix)
            .map(Self)
            .map_err(|error| anyhow::anyhow!("Invalid quantity `{value}`: {error:?}"))
    }
}

impl std::fmt::Display for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for Quantity {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct QuantityVisitor;

        impl<'de> serde::de::Visitor<'de> for QuantityVisitor {
            type Value = Quantity;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("a non-negative integer, a decimal string or a hex string")
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(Quantity::from(value))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                u64::try_from(value)
                    .map(Quantity::from)
                    .map_err(|_| E::custom(format!("negative quantity `{value}`")))
            }

            fn visit_u128<E>(self, value: u128) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Quantity::from_str(&value.to_string()).map_err(E::custom)
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Quantity::from_str(value).map_err(E::custom)
            }
        }

        deserializer.deserialize_any(QuantityVisitor)
    }
}
