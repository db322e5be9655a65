//! JSON encoding of the layout model.
//!
//! Every value type derives `serde` traits; the helpers here add what plain `serde_json` calls
//! lack: decode errors become [`LayoutError::Format`] naming the dotted path of the offending
//! field, and non-finite numbers are rejected on encode instead of being written as `null`.
//!
//! Decoding never substitutes defaults: a missing key, a value of the wrong type or an
//! out-of-range number is an error.

use std::fmt;

use serde::{Serialize, Serializer, de::DeserializeOwned};
use serde_json::Value;

use crate::foundation::error::{LayoutError, LayoutResult, ROOT_FIELD};

/// Encode `value` as a JSON tree.
pub fn encode<T: Serialize + ?Sized>(value: &T) -> LayoutResult<Value> {
    serde_path_to_error::serialize(value, serde_json::value::Serializer).map_err(path_error)
}

/// Decode a JSON tree into `T`.
pub fn decode<T: DeserializeOwned>(value: &Value) -> LayoutResult<T> {
    serde_path_to_error::deserialize(value).map_err(path_error)
}

/// Parse JSON text and decode it into `T`.
pub fn from_json_str<T: DeserializeOwned>(text: &str) -> LayoutResult<T> {
    let value: Value =
        serde_json::from_str(text).map_err(|e| LayoutError::format(ROOT_FIELD, e.to_string()))?;
    decode(&value)
}

/// Encode `value` as compact JSON text.
pub fn to_json_string<T: Serialize + ?Sized>(value: &T) -> LayoutResult<String> {
    encode(value).map(|v| v.to_string())
}

fn path_error<E: fmt::Display>(err: serde_path_to_error::Error<E>) -> LayoutError {
    let field = if err.path().iter().next().is_none() {
        ROOT_FIELD.to_string()
    } else {
        err.path().to_string()
    };
    LayoutError::format(field, err.into_inner().to_string())
}

/// Serialize a coordinate. Integral values are written as JSON integers so integer input
/// round-trips unchanged.
pub(crate) fn number<S: Serializer>(v: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    const EXACT_INT: f64 = 9_007_199_254_740_992.0; // 2^53
    if !v.is_finite() {
        return Err(serde::ser::Error::custom(format!(
            "cannot encode non-finite number {v}"
        )));
    }
    if v.fract() == 0.0 && v.abs() < EXACT_INT {
        serializer.serialize_i64(*v as i64)
    } else {
        serializer.serialize_f64(*v)
    }
}

pub(crate) fn optional_number<S: Serializer>(
    v: &Option<f64>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match v {
        Some(v) => number(v, serializer),
        None => serializer.serialize_none(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/codec/json.rs"]
mod tests;
