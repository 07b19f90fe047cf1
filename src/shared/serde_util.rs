//! Custom serde helpers for backend wire formats.

use crate::error::DecodeError;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

/// Decode a response body, logging the serde diagnostic on failure.
///
/// `context` names the endpoint in the log line (e.g. the request URL).
pub fn decode_json<T: DeserializeOwned>(context: &str, body: &[u8]) -> Result<T, DecodeError> {
    serde_json::from_slice::<T>(body).map_err(|e| {
        tracing::warn!(
            context,
            line = e.line(),
            column = e.column(),
            error = %e,
            "Failed to decode response body"
        );
        DecodeError::Json(e)
    })
}

/// Optional RFC 3339 timestamp that never fails the surrounding record.
///
/// Use with `#[serde(default, deserialize_with = "lenient_timestamp")]`.
/// Any value that is not an RFC 3339 string (a number, a malformed string)
/// becomes `None` and is logged.
pub fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(s)) => match DateTime::parse_from_rfc3339(&s) {
            Ok(dt) => Some(dt.with_timezone(&Utc)),
            Err(e) => {
                tracing::warn!(value = %s, error = %e, "Ignoring unparseable timestamp");
                None
            }
        },
        Some(other) => {
            tracing::warn!(value = %other, "Ignoring non-string timestamp");
            None
        }
    })
}
