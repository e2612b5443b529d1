//! # Core Chain Entities
//!
//! Primitive chain types with the serialization the node speaks.
//!
//! - `Address` / `Hash` serialize as `0x`-prefixed lowercase hex.
//! - [`Quantity`] accepts hex strings, decimal strings and JSON numbers, and
//!   always serializes back as a `0x` hex quantity.

use primitive_types::U256 as PrimitiveU256;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

pub use primitive_types::{H160 as Address, H256 as Hash, U256};

/// Block height.
pub type BlockNumber = u64;

/// Integer quantity that tolerates every shape the node uses for big
/// integers: `"0x.."` hex, decimal text and bare JSON numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
pub struct Quantity(pub U256);

impl Quantity {
    pub const ZERO: Quantity = Quantity(PrimitiveU256::zero());

    #[inline]
    pub fn inner(&self) -> &U256 {
        &self.0
    }

    #[inline]
    pub fn into_inner(self) -> U256 {
        self.0
    }

    /// Lossless `u64` view, `None` when the value is wider.
    pub fn to_u64(&self) -> Option<u64> {
        if self.0.bits() <= 64 {
            Some(self.0.low_u64())
        } else {
            None
        }
    }
}

impl From<u64> for Quantity {
    fn from(v: u64) -> Self {
        Quantity(U256::from(v))
    }
}

impl From<U256> for Quantity {
    fn from(v: U256) -> Self {
        Quantity(v)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:x}", self.0)
    }
}

impl Serialize for Quantity {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("0x{:x}", self.0))
    }
}

/// Key serde_json uses for a number carried as text.
const JSON_NUMBER_TOKEN: &str = "$serde_json::private::Number";

/// Exact decimal integer; fractions, exponents and signs are rejected.
fn parse_integer_text<E: de::Error>(text: &str) -> Result<Quantity, E> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(de::Error::invalid_value(
            de::Unexpected::Str(text),
            &"a non-negative integer",
        ));
    }
    PrimitiveU256::from_dec_str(text)
        .map(Quantity)
        .map_err(|_| de::Error::custom(format!("quantity {} does not fit in 256 bits", text)))
}

impl<'de> Deserialize<'de> for Quantity {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct QuantityVisitor;

        impl<'de> de::Visitor<'de> for QuantityVisitor {
            type Value = Quantity;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a hex string starting with 0x, a decimal string or a number")
            }

            fn visit_str<E>(self, value: &str) -> Result<Quantity, E>
            where
                E: de::Error,
            {
                if let Some(hex_str) = value
                    .strip_prefix("0x")
                    .or_else(|| value.strip_prefix("0X"))
                {
                    if hex_str.is_empty() {
                        return Ok(Quantity::ZERO);
                    }
                    PrimitiveU256::from_str_radix(hex_str, 16)
                        .map(Quantity)
                        .map_err(|_| de::Error::custom("invalid hex string for quantity"))
                } else {
                    PrimitiveU256::from_dec_str(value)
                        .map(Quantity)
                        .map_err(|_| de::Error::custom("invalid decimal string for quantity"))
                }
            }

            fn visit_u64<E>(self, value: u64) -> Result<Quantity, E>
            where
                E: de::Error,
            {
                Ok(Quantity::from(value))
            }

            fn visit_u128<E>(self, value: u128) -> Result<Quantity, E>
            where
                E: de::Error,
            {
                Ok(Quantity(U256::from(value)))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Quantity, E>
            where
                E: de::Error,
            {
                u64::try_from(value)
                    .map(Quantity::from)
                    .map_err(|_| de::Error::invalid_value(de::Unexpected::Signed(value), &self))
            }

            // Reached from a parsed `Value` only when the float's shortest
            // rendering is the number's source text, so that text is parsed.
            fn visit_f64<E>(self, value: f64) -> Result<Quantity, E>
            where
                E: de::Error,
            {
                if !value.is_finite() || value < 0.0 || value.fract() != 0.0 {
                    return Err(de::Error::invalid_value(de::Unexpected::Float(value), &self));
                }
                parse_integer_text(&value.to_string())
            }

            // serde_json with `arbitrary_precision` hands numbers outside the
            // native ranges over as a one-entry map holding the source text.
            fn visit_map<A>(self, mut map: A) -> Result<Quantity, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                match map.next_key::<String>()? {
                    Some(key) if key == JSON_NUMBER_TOKEN => {
                        let text: String = map.next_value()?;
                        parse_integer_text(&text)
                    }
                    _ => Err(de::Error::invalid_type(de::Unexpected::Map, &self)),
                }
            }
        }

        deserializer.deserialize_any(QuantityVisitor)
    }
}

/// Block tags accepted by state queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlockTag {
    #[default]
    Latest,
    Earliest,
    Pending,
}

impl BlockTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockTag::Latest => "latest",
            BlockTag::Earliest => "earliest",
            BlockTag::Pending => "pending",
        }
    }
}

/// Block selector for state queries: a concrete height or a tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockId {
    Number(BlockNumber),
    Tag(BlockTag),
}

impl Default for BlockId {
    fn default() -> Self {
        BlockId::Tag(BlockTag::Latest)
    }
}

impl From<BlockNumber> for BlockId {
    fn from(n: BlockNumber) -> Self {
        BlockId::Number(n)
    }
}

impl From<BlockTag> for BlockId {
    fn from(tag: BlockTag) -> Self {
        BlockId::Tag(tag)
    }
}

impl Serialize for BlockId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            BlockId::Number(n) => serializer.serialize_str(&format!("0x{:x}", n)),
            BlockId::Tag(tag) => serializer.serialize_str(tag.as_str()),
        }
    }
}
