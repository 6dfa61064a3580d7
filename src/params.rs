//! Query and path parameter parsing.
//!
//! Each parser takes the raw (possibly absent) text and the message to report
//! when it does not parse. A missing parameter is treated like an empty one,
//! so it fails the same way a malformed value does.

use chrono::{DateTime, FixedOffset};
use serde::Deserialize;

use crate::error::{AppError, AppResult};

/// Query string as decoded `(key, value)` pairs, in request order.
///
/// Decoding into pairs cannot fail: repeated keys are kept and invalid
/// percent-escapes are replaced lossily, so malformed input always reaches the
/// field parsers below and is reported as a JSON error.
#[derive(Debug, Default, Deserialize)]
#[serde(transparent)]
pub struct QueryPairs(Vec<(String, String)>);

impl QueryPairs {
    /// First value given for `key`; later repeats are ignored.
    pub fn first(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Free text: absent means empty.
    pub fn text(&self, key: &str) -> String {
        self.first(key).unwrap_or_default().to_string()
    }
}

pub const ID_MSG: &str = "id debe ser un número entero";
pub const PRECIO_MSG: &str = "precio debe ser un número";
pub const STOCK_MSG: &str = "stock debe ser un número entero";
pub const PUBLICADO_MSG: &str = "publicado debe ser true o false";
pub const FECHA_MSG: &str = "fechaDeCreacion debe estar en formato RFC3339";
pub const MIN_MSG: &str = "min debe ser un número entero";
pub const MAX_MSG: &str = "max debe ser un número entero";
pub const CANTIDAD_MSG: &str = "cantidad debe ser un número entero";

fn bad(msg: &str) -> AppError {
    AppError::BadRequest(msg.to_string())
}

pub fn int(raw: Option<&str>, msg: &str) -> AppResult<i64> {
    raw.unwrap_or_default().parse().map_err(|_| bad(msg))
}

/// Finite floats only: `NaN` and infinities have no JSON encoding.
pub fn float(raw: Option<&str>, msg: &str) -> AppResult<f64> {
    match raw.unwrap_or_default().parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(bad(msg)),
    }
}

/// Accepts the usual spellings: `1 t T TRUE true True` and their false twins.
pub fn boolean(raw: Option<&str>, msg: &str) -> AppResult<bool> {
    match raw.unwrap_or_default() {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(bad(msg)),
    }
}

pub fn rfc3339(raw: Option<&str>, msg: &str) -> AppResult<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(raw.unwrap_or_default()).map_err(|_| bad(msg))
}
