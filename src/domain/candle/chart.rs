//! Line chart series built from candle close prices.

use super::CandlePoint;
use crate::error::DecodeError;
use crate::shared::parse_f64;
use serde::{Deserialize, Serialize};

/// Legend label for the close price line.
pub const SERIES_LABEL: &str = "Close price";

/// `"Last {title} price chart"`.
pub fn chart_description(title: &str) -> String {
    format!("Last {} price chart", title)
}

/// One plotted point. `x` is the candle's index in the fetched series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub x: f64,
    pub y: f64,
}

/// Ordered numeric sequence ready for a line chart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    points: Vec<ChartPoint>,
    dropped: usize,
}

impl ChartSeries {
    /// Parse every close price. Unparseable points are dropped and logged;
    /// the remaining points keep their original index as `x`.
    pub fn from_candles(candles: &[CandlePoint]) -> Self {
        let mut points = Vec::with_capacity(candles.len());
        let mut dropped = 0;

        for (i, candle) in candles.iter().enumerate() {
            match parse_f64("close", &candle.close) {
                Ok(y) => points.push(ChartPoint { x: i as f64, y }),
                Err(e) => {
                    tracing::warn!(index = i, error = %e, "Dropping candle with unparseable close");
                    dropped += 1;
                }
            }
        }

        Self { points, dropped }
    }

    /// Strict variant: the first unparseable close fails the whole series.
    pub fn try_from_candles(candles: &[CandlePoint]) -> Result<Self, DecodeError> {
        let points = candles
            .iter()
            .enumerate()
            .map(|(i, c)| {
                parse_f64("close", &c.close).map(|y| ChartPoint { x: i as f64, y })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { points, dropped: 0 })
    }

    pub fn points(&self) -> &[ChartPoint] {
        &self.points
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.y)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Nothing to plot. Not an error.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of candles skipped because their close did not parse.
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// Lowest and highest value, for axis scaling.
    pub fn y_range(&self) -> Option<(f64, f64)> {
        let mut values = self.values();
        let first = values.next()?;
        Some(values.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))))
    }

    pub fn last(&self) -> Option<f64> {
        self.points.last().map(|p| p.y)
    }
}
