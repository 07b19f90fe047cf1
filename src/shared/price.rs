//! Price utilities: parse the decimal strings the API sends.
//!
//! Every numeric field arrives as a JSON string (`"0.034950"`). Parsing is
//! always fallible here, never forced.

use crate::error::DecodeError;
use rust_decimal::prelude::*;

/// Parse a decimal string, accepting plain (`"12.5"`) and scientific
/// (`"1.2e-7"`) notation. Surrounding whitespace is ignored.
pub fn parse_decimal(field: &'static str, value: &str) -> Result<Decimal, DecodeError> {
    let trimmed = value.trim();
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| DecodeError::InvalidNumber {
            field,
            value: value.to_string(),
        })
}

/// Parse a decimal string straight to `f64` for plotting.
pub fn parse_f64(field: &'static str, value: &str) -> Result<f64, DecodeError> {
    parse_decimal(field, value)?
        .to_f64()
        .ok_or_else(|| DecodeError::InvalidNumber {
            field,
            value: value.to_string(),
        })
}
