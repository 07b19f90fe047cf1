//! Candles sub-client — per-symbol close price history.

use crate::client::HitbtcClient;
use crate::domain::candle::{CandlePoint, ChartSeries};
use crate::error::FetchError;
use crate::shared::Period;

/// Sub-client for candle operations.
pub struct Candles<'a> {
    pub(crate) client: &'a HitbtcClient,
}

impl<'a> Candles<'a> {
    /// Fetch the candle series for `symbol`, oldest first. An empty list is a
    /// successful result for a symbol without trades in range.
    pub async fn get(&self, symbol: &str, period: Period) -> Result<Vec<CandlePoint>, FetchError> {
        let resp = self.client.http.get_candles(symbol, period).await?;
        Ok(resp.into_iter().map(CandlePoint::from).collect())
    }

    /// Same as [`get`](Self::get) with the client's configured period.
    pub async fn get_default(&self, symbol: &str) -> Result<Vec<CandlePoint>, FetchError> {
        self.get(symbol, self.client.period).await
    }

    /// Fetch and convert to a chart series in one step. Unparseable closes are
    /// dropped from the series.
    pub async fn series(&self, symbol: &str, period: Period) -> Result<ChartSeries, FetchError> {
        let candles = self.get(symbol, period).await?;
        Ok(ChartSeries::from_candles(&candles))
    }
}
