use chrono::{DateTime, FixedOffset, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// One catalog record as stored in `productos.json`.
///
/// Field names follow the wire format of the backing file. Nothing here is
/// validated beyond what JSON decoding requires: `id` and `codigo` are
/// expected to be unique but duplicates are tolerated (lookups take the first).
/// A missing or `null` field decodes to its zero value; only a value of the
/// wrong type is rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub nombre: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub precio: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub stock: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub codigo: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub publicado: bool,
    /// Keeps the offset it was written with so echoes round-trip exactly.
    #[serde(default = "zero_time", deserialize_with = "null_as_zero_time")]
    pub fecha_de_creacion: DateTime<FixedOffset>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

fn null_as_zero_time<'de, D>(deserializer: D) -> Result<DateTime<FixedOffset>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<DateTime<FixedOffset>>::deserialize(deserializer).map(|t| t.unwrap_or_else(zero_time))
}

/// `0001-01-01T00:00:00Z`, the creation time of a record that has none.
pub fn zero_time() -> DateTime<FixedOffset> {
    NaiveDate::from_ymd_opt(1, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive).fixed_offset())
        .unwrap_or_default()
}

// ── Response payloads ────────────────────────────────────────────────────────

/// Body returned by `GET /buy`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseSummary {
    pub nombre: String,
    pub cantidad: i64,
    #[serde(rename = "precioTotal")]
    pub precio_total: f64,
}
