//! Conversions from wire types to domain types for tickers.

use super::wire::TickerResponse;
use super::Ticker;
use crate::shared::Symbol;

impl From<TickerResponse> for Ticker {
    fn from(t: TickerResponse) -> Self {
        Self {
            symbol: Symbol::from(t.symbol),
            last: t.last,
            volume: t.volume,
            low: t.low,
            high: t.high,
        }
    }
}
