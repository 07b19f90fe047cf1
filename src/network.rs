//! Network URL constants for the HitBTC public API.

/// Default REST API base URL (API v2).
pub const DEFAULT_API_URL: &str = "https://api.hitbtc.com/api/2";

/// Ticker list path, relative to the base URL.
pub const TICKER_PATH: &str = "/public/ticker/";

/// Candle path prefix, relative to the base URL. The symbol follows.
pub const CANDLES_PATH: &str = "/public/candles/";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
