//! JSON documents as returned by [`HttpGetClient::fetch_json`](crate::net::HttpGetClient::fetch_json).
//!
//! A document is usually a container at the top level: either an object
//! (string keys, unique, order irrelevant) or an array (ordered). Any other
//! valid JSON value (`42`, `"42"`, `true`, `null`) is kept as a scalar.
//! Nested values can be anything JSON allows.
use std::fmt;

use serde_json::{Map, Value};

use crate::errors::DecodeError;

/// Decoded response body.
#[derive(Debug, Clone, PartialEq)]
pub enum JsonDocument {
    /// `{ ... }` at the top level
    Object(Map<String, Value>),
    /// `[ ... ]` at the top level
    Array(Vec<Value>),
    /// String, number, boolean or `null` at the top level
    Scalar(Value),
}

impl JsonDocument {
    pub fn as_object(&self) -> Option<&Map<String, Value>> {
        match self {
            JsonDocument::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            JsonDocument::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn into_value(self) -> Value {
        match self {
            JsonDocument::Object(map) => Value::Object(map),
            JsonDocument::Array(items) => Value::Array(items),
            JsonDocument::Scalar(value) => value,
        }
    }
}

impl From<JsonDocument> for Value {
    fn from(doc: JsonDocument) -> Self {
        doc.into_value()
    }
}

impl From<Value> for JsonDocument {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => JsonDocument::Object(map),
            Value::Array(items) => JsonDocument::Array(items),
            scalar => JsonDocument::Scalar(scalar),
        }
    }
}

impl fmt::Display for JsonDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            JsonDocument::Object(map) => serde_json::to_string(map),
            JsonDocument::Array(items) => serde_json::to_string(items),
            JsonDocument::Scalar(value) => serde_json::to_string(value),
        }
        .map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

/// Decodes a raw response body.
///
/// The bytes must be strict UTF-8 (no lossy replacement) and contain a single
/// JSON value, optionally surrounded by whitespace.
pub fn decode(body: &[u8]) -> Result<JsonDocument, DecodeError> {
    let text = std::str::from_utf8(body)?;
    let value: Value = serde_json::from_str(text)?;
    Ok(JsonDocument::from(value))
}
