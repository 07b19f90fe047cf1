//! Conversions from wire types to domain types for candles.

use super::wire::CandleResponse;
use super::CandlePoint;

impl From<CandleResponse> for CandlePoint {
    fn from(c: CandleResponse) -> Self {
        Self {
            timestamp: c.timestamp,
            close: c.close,
        }
    }
}
