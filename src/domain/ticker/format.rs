//! Display formatting for ticker rows and the ticker detail header.

use super::Ticker;
use crate::shared::CategoryToken;
use serde::{Deserialize, Serialize};

/// Separator inserted between base and quote currency.
pub const SEPARATOR: char = '/';

/// Price label used when the ticker has no last trade.
pub const UNKNOWN_PRICE: &str = "Unknown";

/// Insert [`SEPARATOR`] at the category boundary.
///
/// `BTCUSD` under `BTC` becomes `BTC/USD`; `ETHBTC` under `BTC` becomes
/// `ETH/BTC`. The prefix check wins when both ends match. A symbol matching
/// neither end, or an empty category, is returned unchanged.
pub fn format_symbol(symbol: &str, category: &CategoryToken) -> String {
    let token = category.as_str();
    if token.is_empty() {
        return symbol.to_string();
    }

    let split_at = if symbol.starts_with(token) {
        token.len()
    } else if symbol.ends_with(token) {
        symbol.len() - token.len()
    } else {
        return symbol.to_string();
    };

    let mut formatted = String::with_capacity(symbol.len() + 1);
    formatted.push_str(&symbol[..split_at]);
    formatted.push(SEPARATOR);
    formatted.push_str(&symbol[split_at..]);
    formatted
}

/// Remove the first separator, undoing [`format_symbol`].
pub fn strip_separator(formatted: &str) -> String {
    formatted.replacen(SEPARATOR, "", 1)
}

/// `"Vol 24 {volume} USD"`.
pub fn volume_label(volume: &str) -> String {
    format!("Vol 24 {} USD", volume)
}

/// One row of the ticker list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickerRow {
    pub display_symbol: String,
    pub display_volume: String,
    pub display_price: String,
}

impl TickerRow {
    pub fn new(ticker: &Ticker, category: &CategoryToken) -> Self {
        Self {
            display_symbol: format_symbol(ticker.symbol().as_str(), category),
            display_volume: volume_label(ticker.volume()),
            display_price: ticker.last().unwrap_or(UNKNOWN_PRICE).to_string(),
        }
    }
}

/// Header data for the per-symbol detail screen.
///
/// Optional stats stay optional; the presentation layer shows an empty label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickerDetail {
    pub title: String,
    pub last: Option<String>,
    pub volume: String,
    pub low: Option<String>,
    pub high: Option<String>,
}

impl TickerDetail {
    pub fn new(ticker: &Ticker, category: &CategoryToken) -> Self {
        Self {
            title: format_symbol(ticker.symbol().as_str(), category),
            last: ticker.last().map(str::to_string),
            volume: ticker.volume().to_string(),
            low: ticker.low().map(str::to_string),
            high: ticker.high().map(str::to_string),
        }
    }
}
