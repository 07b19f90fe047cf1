//! Wire types for the candles endpoint (REST).

use crate::shared::serde_util::lenient_timestamp;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One object of the `GET /public/candles/{symbol}` array.
///
/// Only `close` is required. A `timestamp` that is not RFC 3339 decodes as
/// `None` rather than failing the series. `open`, `min`, `max`, `volume` and
/// `volumeQuote` are ignored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CandleResponse {
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub timestamp: Option<DateTime<Utc>>,
    pub close: String,
}

/// REST response for a candle series, oldest first.
pub type CandlesResponse = Vec<CandleResponse>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::serde_util::decode_json;

    #[test]
    fn test_decode_candle() {
        let json = r#"{
            "timestamp": "2020-02-17T10:30:00.000Z",
            "open": "0.020913",
            "close": "0.020574",
            "min": "0.020388",
            "max": "0.021084",
            "volume": "1834.2",
            "volumeQuote": "37.9"
        }"#;
        let c: CandleResponse = serde_json::from_str(json).unwrap();
        assert_eq!(c.close, "0.020574");
        assert_eq!(
            c.timestamp.unwrap().to_rfc3339(),
            "2020-02-17T10:30:00+00:00"
        );
    }

    #[test]
    fn test_decode_close_only() {
        let c: CandleResponse = serde_json::from_str(r#"{"close": "1"}"#).unwrap();
        assert!(c.timestamp.is_none());
    }

    #[test]
    fn test_odd_timestamp_does_not_fail_series() {
        let json = r#"[
            {"timestamp": 1581935400000, "close": "0.0205"},
            {"timestamp": "not a date", "close": "0.0206"},
            {"timestamp": "2020-02-17T10:30:00.000Z", "close": "0.0207"}
        ]"#;
        let list: CandlesResponse = decode_json("test", json.as_bytes()).unwrap();
        assert_eq!(list.len(), 3);
        assert!(list[0].timestamp.is_none());
        assert!(list[1].timestamp.is_none());
        assert!(list[2].timestamp.is_some());
        assert_eq!(list[0].close, "0.0205");
    }

    #[test]
    fn test_empty_array_is_valid() {
        let list: CandlesResponse = decode_json("test", b"[]").unwrap();
        assert!(list.is_empty());
    }

    #[test]
    fn test_missing_close_is_decode_error() {
        let json = r#"[{"timestamp": "2020-02-17T10:30:00.000Z", "open": "1"}]"#;
        assert!(decode_json::<CandlesResponse>("test", json.as_bytes()).is_err());
    }

    #[test]
    fn test_order_preserved() {
        let json = r#"[{"close": "3"}, {"close": "1"}, {"close": "2"}]"#;
        let list: CandlesResponse = decode_json("test", json.as_bytes()).unwrap();
        let closes: Vec<&str> = list.iter().map(|c| c.close.as_str()).collect();
        assert_eq!(closes, vec!["3", "1", "2"]);
    }
}
