//! Candle domain — per-symbol close price history and chart series.

pub mod chart;
#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod state;
pub mod wire;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use chart::{ChartPoint, ChartSeries};
pub use state::CandleChart;

/// One time bucket of a candle series. Only the close price is kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandlePoint {
    /// Bucket start, when the server sent one.
    pub timestamp: Option<DateTime<Utc>>,
    /// Close price as a decimal string.
    pub close: String,
}

impl CandlePoint {
    pub fn new(close: impl Into<String>) -> Self {
        Self {
            timestamp: None,
            close: close.into(),
        }
    }
}
