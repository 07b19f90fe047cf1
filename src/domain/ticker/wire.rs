//! Wire types for the ticker endpoint (REST).

use serde::{Deserialize, Serialize};

/// One object of the `GET /public/ticker/` array.
///
/// Every numeric field is a decimal string. Only `symbol` and `volume` are
/// guaranteed; the rest may be absent or `null` for pairs without trades.
/// Unknown fields (`ask`, `bid`, `open`, `volumeQuote`, `timestamp`) are ignored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TickerResponse {
    pub symbol: String,
    #[serde(default)]
    pub last: Option<String>,
    pub volume: String,
    #[serde(default)]
    pub low: Option<String>,
    #[serde(default)]
    pub high: Option<String>,
}

/// REST response for the full ticker list.
pub type TickersResponse = Vec<TickerResponse>;
