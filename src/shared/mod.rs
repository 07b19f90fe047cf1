//! Shared newtypes and utilities used across all domain modules.
//!
//! These types are serialization-transparent: they serialize/deserialize identically
//! to the raw format the backend sends, so they can be used directly in wire types
//! without conversion overhead.

pub mod price;
pub mod refresh;
pub mod serde_util;

pub use price::{parse_decimal, parse_f64};
pub use refresh::{LoadStatus, RefreshSequence, RefreshTicket};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

// ─── Symbol ──────────────────────────────────────────────────────────────────

/// Newtype for trading symbols (e.g. `"BTCUSD"`, `"ETHBTC"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Symbol(String);

impl Symbol {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Symbol {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Symbol {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for Symbol {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Symbol {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Symbol(s))
    }
}

// ─── CategoryToken ───────────────────────────────────────────────────────────

/// Currency code used both as a filter facet and as the symbol formatting anchor.
///
/// Matching is literal and case-sensitive, so tokens should use the server's
/// casing (uppercase codes).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryToken(String);

impl CategoryToken {
    /// Segment titles offered by the ticker list, in display order.
    pub const DEFAULTS: [&'static str; 3] = ["BTC", "ETH", "USD"];

    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The default category set, in display order.
    pub fn defaults() -> Vec<CategoryToken> {
        Self::DEFAULTS.iter().map(|s| CategoryToken::from(*s)).collect()
    }
}

impl Default for CategoryToken {
    fn default() -> Self {
        Self(Self::DEFAULTS[0].to_string())
    }
}

impl std::fmt::Display for CategoryToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CategoryToken {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for CategoryToken {
    fn from(s: String) -> Self {
        Self(s)
    }
}

// ─── Period ──────────────────────────────────────────────────────────────────

/// Candle bucket size accepted by the candles endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Period {
    #[serde(rename = "M1")]
    Minute1,
    #[serde(rename = "M3")]
    Minute3,
    #[serde(rename = "M5")]
    Minute5,
    #[serde(rename = "M15")]
    Minute15,
    #[default]
    #[serde(rename = "M30")]
    Minute30,
    #[serde(rename = "H1")]
    Hour1,
    #[serde(rename = "H4")]
    Hour4,
    #[serde(rename = "D1")]
    Day1,
    #[serde(rename = "D7")]
    Day7,
    #[serde(rename = "1M")]
    Month1,
}

impl Period {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Minute1 => "M1",
            Self::Minute3 => "M3",
            Self::Minute5 => "M5",
            Self::Minute15 => "M15",
            Self::Minute30 => "M30",
            Self::Hour1 => "H1",
            Self::Hour4 => "H4",
            Self::Day1 => "D1",
            Self::Day7 => "D7",
            Self::Month1 => "1M",
        }
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned when parsing an unknown period code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPeriod(pub String);

impl std::fmt::Display for UnknownPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unknown candle period: {}", self.0)
    }
}

impl std::error::Error for UnknownPeriod {}

impl FromStr for Period {
    type Err = UnknownPeriod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "M1" => Ok(Self::Minute1),
            "M3" => Ok(Self::Minute3),
            "M5" => Ok(Self::Minute5),
            "M15" => Ok(Self::Minute15),
            "M30" => Ok(Self::Minute30),
            "H1" => Ok(Self::Hour1),
            "H4" => Ok(Self::Hour4),
            "D1" => Ok(Self::Day1),
            "D7" => Ok(Self::Day7),
            "1M" => Ok(Self::Month1),
            other => Err(UnknownPeriod(other.to_string())),
        }
    }
}
