//! Candle chart state container — app-owned, SDK-provided update logic.

use super::chart::{chart_description, ChartSeries};
use super::CandlePoint;
use crate::error::FetchError;
use crate::shared::{LoadStatus, Period, RefreshSequence, RefreshTicket, Symbol};

/// Chart screen state for one symbol.
///
/// The app owns instances of this type. The SDK provides update methods.
#[derive(Debug, Clone)]
pub struct CandleChart {
    symbol: Symbol,
    period: Period,
    title: String,
    candles: Vec<CandlePoint>,
    series: ChartSeries,
    status: LoadStatus,
    sequence: RefreshSequence,
}

impl CandleChart {
    /// `title` is the formatted symbol shown in the chart description.
    pub fn new(symbol: Symbol, period: Period, title: impl Into<String>) -> Self {
        Self {
            symbol,
            period,
            title: title.into(),
            candles: Vec::new(),
            series: ChartSeries::default(),
            status: LoadStatus::Loading,
            sequence: RefreshSequence::new(),
        }
    }

    pub fn begin_refresh(&mut self) -> RefreshTicket {
        self.status = LoadStatus::Loading;
        self.sequence.begin()
    }

    /// Apply a candle fetch result. Returns `false` if it was stale.
    pub fn apply(
        &mut self,
        ticket: RefreshTicket,
        result: Result<Vec<CandlePoint>, FetchError>,
    ) -> bool {
        if !self.sequence.accept(ticket) {
            tracing::debug!(symbol = %self.symbol, ticket = ticket.value(), "Dropping stale candle refresh");
            return false;
        }

        match result {
            Ok(candles) => {
                self.series = ChartSeries::from_candles(&candles);
                self.candles = candles;
                self.status = LoadStatus::Ready;
            }
            Err(e) => {
                tracing::warn!(symbol = %self.symbol, error = %e, "Candle refresh failed");
                self.status = LoadStatus::Failed;
            }
        }
        if self.sequence.in_flight() {
            self.status = LoadStatus::Loading;
        }
        true
    }

    pub fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    pub fn period(&self) -> Period {
        self.period
    }

    pub fn status(&self) -> LoadStatus {
        self.status
    }

    pub fn candles(&self) -> &[CandlePoint] {
        &self.candles
    }

    pub fn series(&self) -> &ChartSeries {
        &self.series
    }

    pub fn description(&self) -> String {
        chart_description(&self.title)
    }
}
