//! JSON objects as dynamic records.
//!
//! The runtime counterpart of [`Tableify`](super::Tableify): headers are the
//! object keys in document order, cells are looked up by header name.

use crate::errors::{AppError, AppResult};
use crate::value::Value;
use serde_json::{Map, Value as Json};

fn as_object(record: &Json) -> AppResult<&Map<String, Json>> {
    record.as_object().ok_or_else(|| {
        AppError::InvalidInput(format!("given record is not an object: {}", kind(record)))
    })
}

/// Keys of a JSON object, in document order.
pub fn headers_of(record: &Json) -> AppResult<Vec<String>> {
    Ok(as_object(record)?.keys().cloned().collect())
}

/// Cells of a JSON object for the given headers. Missing keys become `Nil`.
pub fn values_of(record: &Json, headers: &[String]) -> AppResult<Vec<Value>> {
    let object = as_object(record)?;
    Ok(headers
        .iter()
        .map(|h| object.get(h).map(to_value).unwrap_or(Value::Nil))
        .collect())
}

/// Elements of a JSON array.
pub fn elements_of(list: &Json) -> AppResult<&[Json]> {
    list.as_array().map(Vec::as_slice).ok_or_else(|| {
        AppError::InvalidInput(format!("given value is not an array: {}", kind(list)))
    })
}

pub fn to_value(json: &Json) -> Value {
    match json {
        Json::Null => Value::Nil,
        Json::Bool(b) => Value::Bool(*b),
        Json::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::Int(i)
            } else if let Some(u) = n.as_u64() {
                Value::UInt(u)
            } else {
                Value::F64(n.as_f64().unwrap_or(f64::NAN))
            }
        }
        Json::String(s) => Value::Str(s.clone()),
        // nested structures are shown as compact JSON
        other => Value::Str(other.to_string()),
    }
}

fn kind(json: &Json) -> &'static str {
    match json {
        Json::Null => "null",
        Json::Bool(_) => "bool",
        Json::Number(_) => "number",
        Json::String(_) => "string",
        Json::Array(_) => "array",
        Json::Object(_) => "object",
    }
}
