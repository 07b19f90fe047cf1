//! Ticker domain — market snapshots, category filtering, symbol formatting.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod filter;
pub mod format;
pub mod state;
pub mod wire;

pub use filter::{filter_by_category, search_within};
pub use format::{format_symbol, TickerDetail, TickerRow};
pub use state::TickerBoard;

use crate::shared::Symbol;
use serde::{Deserialize, Serialize};

/// A market stats snapshot for one trading symbol.
///
/// Decimal fields are kept as the strings the server sent. `None` means the
/// field was absent or `null`, which is distinct from `Some("")`. Fields are
/// read-only after decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticker {
    symbol: Symbol,
    last: Option<String>,
    volume: String,
    low: Option<String>,
    high: Option<String>,
}

impl Ticker {
    pub fn new(symbol: impl Into<Symbol>, volume: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            last: None,
            volume: volume.into(),
            low: None,
            high: None,
        }
    }

    pub fn with_last(mut self, last: impl Into<String>) -> Self {
        self.last = Some(last.into());
        self
    }

    pub fn with_range(mut self, low: impl Into<String>, high: impl Into<String>) -> Self {
        self.low = Some(low.into());
        self.high = Some(high.into());
        self
    }

    pub fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    pub fn last(&self) -> Option<&str> {
        self.last.as_deref()
    }

    pub fn volume(&self) -> &str {
        &self.volume
    }

    pub fn low(&self) -> Option<&str> {
        self.low.as_deref()
    }

    pub fn high(&self) -> Option<&str> {
        self.high.as_deref()
    }
}
