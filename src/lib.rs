//! # HitBTC Ticker SDK
//!
//! Data layer for a live crypto ticker list with per-symbol price charts,
//! backed by the public HitBTC REST API.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Newtypes, decimal parsing, domain slices (`ticker`, `candle`)
//!    with filtering, symbol formatting and app-owned state containers
//! 2. **HTTP API** — `HitbtcHttp`, one method per endpoint, no retries
//! 3. **High-Level Client** — `HitbtcClient` with nested sub-clients
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use hitbtc_ticker::prelude::*;
//!
//! let client = HitbtcClient::builder().build()?;
//!
//! let mut board = TickerBoard::new(CategoryToken::from("BTC"));
//! let ticket = board.begin_refresh();
//! board.apply(ticket, client.tickers().all().await);
//!
//! for row in board.rows() {
//!     println!("{} {} {}", row.display_symbol, row.display_price, row.display_volume);
//! }
//!
//! let candles = client.candles().get("ETHBTC", Period::Minute30).await?;
//! let series = ChartSeries::from_candles(&candles);
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes used across all domains.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions, state.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network URL constants.
pub mod network;

// ── Layer 2: HTTP API ────────────────────────────────────────────────────────

/// Low-level HTTP client.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `HitbtcClient` — the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{CategoryToken, LoadStatus, Period, RefreshTicket, Symbol};

    // Domain types — ticker
    pub use crate::domain::ticker::filter::{category_view, search_view};
    pub use crate::domain::ticker::format::strip_separator;
    pub use crate::domain::ticker::{
        filter_by_category, format_symbol, search_within, Ticker, TickerBoard, TickerDetail,
        TickerRow,
    };

    // Domain types — candle
    pub use crate::domain::candle::chart::{chart_description, SERIES_LABEL};
    pub use crate::domain::candle::{CandleChart, CandlePoint, ChartPoint, ChartSeries};

    // Errors
    pub use crate::error::{DecodeError, FetchError, TransportError};

    // Network
    pub use crate::network::DEFAULT_API_URL;

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{CandlesClient, HitbtcClient, HitbtcClientBuilder, TickersClient};
    #[cfg(feature = "http")]
    pub use crate::http::HitbtcHttp;
}
