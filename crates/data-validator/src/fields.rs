//! Field Extraction Helpers

use crate::error::ValidationError;
use serde_json::Value;

/// Wire name of the latitude field
pub const LATITUDE: &str = "Latitude";
/// Wire name of the longitude field
pub const LONGITUDE: &str = "Longitude";
/// Wire name of the PM10 field
pub const PM10: &str = "PM10";
/// Wire name of the PM2.5 field
pub const PM25: &str = "PM2.5";

/// Parse a raw request body.
///
/// An empty body is treated as JSON `null` so it reports missing fields
/// rather than a syntax error.
pub fn parse_body(bytes: &[u8]) -> Result<Value, ValidationError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }
    serde_json::from_slice(bytes).map_err(|e| ValidationError::InvalidFormat(e.to_string()))
}

/// Read an optional numeric field.
///
/// Absent and `null` both yield `None`. Numbers and numeric strings are
/// accepted; anything else, or a non-finite value, is rejected.
pub(crate) fn optional_number(
    body: &Value,
    field: &'static str,
) -> Result<Option<f64>, ValidationError> {
    let value = match body.get(field) {
        None | Some(Value::Null) => return Ok(None),
        Some(value) => value,
    };

    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    match parsed {
        Some(v) if v.is_finite() => Ok(Some(v)),
        _ => Err(ValidationError::NotANumber { field }),
    }
}
