//! Low-level HTTP client — `HitbtcHttp`.
//!
//! One method per API endpoint. Returns wire types (conversion to domain types
//! happens at the sub-client boundary). No retries: a failed request is
//! reported once and recovery is a manual refresh.

use crate::domain::candle::wire::CandlesResponse;
use crate::domain::ticker::wire::TickersResponse;
use crate::error::{FetchError, TransportError};
use crate::network::{CANDLES_PATH, DEFAULT_TIMEOUT_SECS, TICKER_PATH};
use crate::shared::serde_util::decode_json;
use crate::shared::Period;

use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Low-level HTTP client for the HitBTC public REST API.
#[derive(Debug, Clone)]
pub struct HitbtcHttp {
    base_url: String,
    client: Client,
}

impl HitbtcHttp {
    pub fn new(base_url: &str) -> Result<Self, TransportError> {
        Self::with_timeout(base_url, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    #[cfg_attr(target_arch = "wasm32", allow(unused_variables, unused_mut))]
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, TransportError> {
        let mut builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        {
            builder = builder.timeout(timeout).pool_max_idle_per_host(4);
        }

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: builder.build()?,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ── Tickers ──────────────────────────────────────────────────────────

    pub fn tickers_url(&self) -> String {
        format!("{}{}", self.base_url, TICKER_PATH)
    }

    pub async fn get_tickers(&self) -> Result<TickersResponse, FetchError> {
        self.get(&self.tickers_url()).await
    }

    // ── Candles ──────────────────────────────────────────────────────────

    /// The symbol is percent-encoded; it is not otherwise validated.
    pub fn candles_url(&self, symbol: &str, period: Period) -> String {
        format!(
            "{}{}{}?period={}",
            self.base_url,
            CANDLES_PATH,
            urlencoding::encode(symbol),
            period.as_str()
        )
    }

    pub async fn get_candles(
        &self,
        symbol: &str,
        period: Period,
    ) -> Result<CandlesResponse, FetchError> {
        self.get(&self.candles_url(symbol, period)).await
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        tracing::debug!(url, "GET");

        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| transport_error(url, e))?;
        let status = resp.status();

        if !status.is_success() {
            let status_code = status.as_u16();
            let body = resp.text().await.unwrap_or_default();
            tracing::warn!(url, status = status_code, "Request returned non-success status");
            return Err(TransportError::Status {
                status: status_code,
                body,
            }
            .into());
        }

        let body = resp.bytes().await.map_err(|e| transport_error(url, e))?;
        Ok(decode_json(url, &body)?)
    }
}

fn transport_error(url: &str, e: reqwest::Error) -> FetchError {
    tracing::warn!(url, error = %e, "Request failed");
    if e.is_timeout() {
        TransportError::Timeout.into()
    } else {
        TransportError::Request(e).into()
    }
}
