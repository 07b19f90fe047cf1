//! High-level client — `HitbtcClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder and accessor methods. There is no cache:
//! every call goes to the network.

use crate::domain::candle::client::Candles;
use crate::domain::ticker::client::Tickers;
use crate::error::FetchError;
use crate::http::HitbtcHttp;
use crate::shared::Period;

use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::domain::candle::client::Candles as CandlesClient;
pub use crate::domain::ticker::client::Tickers as TickersClient;

/// The primary entry point of the SDK.
///
/// Provides nested sub-client accessors for each domain:
/// `client.tickers()`, `client.candles()`.
#[derive(Debug, Clone)]
pub struct HitbtcClient {
    pub(crate) http: HitbtcHttp,
    /// Candle bucket used by `candles().get_default()`.
    pub(crate) period: Period,
}

impl HitbtcClient {
    pub fn builder() -> HitbtcClientBuilder {
        HitbtcClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn tickers(&self) -> Tickers<'_> {
        Tickers { client: self }
    }

    pub fn candles(&self) -> Candles<'_> {
        Candles { client: self }
    }

    pub fn http(&self) -> &HitbtcHttp {
        &self.http
    }

    pub fn period(&self) -> Period {
        self.period
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone)]
pub struct HitbtcClientBuilder {
    base_url: String,
    timeout: Duration,
    period: Period,
}

impl Default for HitbtcClientBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::network::DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(crate::network::DEFAULT_TIMEOUT_SECS),
            period: Period::default(),
        }
    }
}

impl HitbtcClientBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn period(mut self, period: Period) -> Self {
        self.period = period;
        self
    }

    pub fn build(self) -> Result<HitbtcClient, FetchError> {
        Ok(HitbtcClient {
            http: HitbtcHttp::with_timeout(&self.base_url, self.timeout)?,
            period: self.period,
        })
    }
}
