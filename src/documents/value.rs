//! Loosely-typed field values and lenient deserialization helpers.
//!
//! Backend payloads are produced by an LLM extraction pipeline, so any field
//! may arrive as a string, a list, an object, or not at all. Loading never
//! fails on a malformed field; shape problems are logged and normalized.

use std::collections::HashMap;

use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};
use serde_json::{Map, Number, Value};
use sha2::{Digest, Sha256};
use tracing::{debug, warn};

use crate::core::types::{RecordKey, SourceReference};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Number(Number),
    Flag(bool),
    List(Vec<Value>),
    Object(Map<String, Value>),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text.as_str()),
            _ => None,
        }
    }
}

/// A record from one of the document arrays, with the identity and
/// provenance data every table row needs.
#[derive(Debug, Clone, PartialEq)]
pub struct Record<T> {
    pub key: RecordKey,
    pub raw: Value,
    pub created_at: Option<String>,
    pub references: Vec<SourceReference>,
    pub fields: T,
}

pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

pub(crate) fn lenient_records<'de, D, T>(deserializer: D) -> Result<Vec<Record<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(records_from_value(value))
}

pub(crate) fn lenient_values<'de, D>(deserializer: D) -> Result<Vec<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => items,
        Value::Null => Vec::new(),
        other => {
            warn!(kind = value_kind(&other), "expected array, wrapping single value");
            vec![other]
        }
    })
}

pub(crate) fn lenient_object<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    if !value.is_object() {
        if !value.is_null() {
            warn!(kind = value_kind(&value), "expected object, ignoring value");
        }
        return Ok(None);
    }
    match serde_json::from_value(value) {
        Ok(parsed) => Ok(Some(parsed)),
        Err(err) => {
            warn!(error = %err, "object did not match expected shape, ignoring value");
            Ok(None)
        }
    }
}

pub(crate) fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => text,
        Value::Null => String::new(),
        other => {
            debug!(kind = value_kind(&other), "expected text, using empty string");
            String::new()
        }
    })
}

/// Numbers pass through and numeric strings are parsed; anything else reads
/// as `0.0`.
pub(crate) fn lenient_confidence<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let confidence = match Value::deserialize(deserializer)? {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(confidence.filter(|value| value.is_finite()).unwrap_or(0.0))
}

pub(crate) fn lenient_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(number) => number
            .as_u64()
            .or_else(|| number.as_f64().filter(|v| *v > 0.0).map(|v| v as u64))
            .unwrap_or(0),
        Value::String(text) => text.trim().parse().unwrap_or(0),
        _ => 0,
    })
}

pub fn records_from_value<T: DeserializeOwned>(value: Value) -> Vec<Record<T>> {
    let items = match value {
        Value::Array(items) => items,
        Value::Null => return Vec::new(),
        other => {
            warn!(
                kind = value_kind(&other),
                "expected array of records, treating as empty"
            );
            return Vec::new();
        }
    };

    // Occurrences so far of each canonical record text.
    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut records = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        if !item.is_object() {
            warn!(index, kind = value_kind(&item), "skipping non-object record");
            continue;
        }
        let fields: T = match serde_json::from_value(item.clone()) {
            Ok(fields) => fields,
            Err(err) => {
                warn!(index, error = %err, "skipping record that failed to parse");
                continue;
            }
        };

        let canonical = item.to_string();
        let ordinal = match seen.get_mut(&canonical) {
            Some(count) => {
                *count += 1;
                *count
            }
            None => {
                seen.insert(canonical.clone(), 0);
                0
            }
        };

        records.push(Record {
            key: record_key(&canonical, ordinal),
            created_at: item
                .get("created_at")
                .and_then(Value::as_str)
                .map(ToString::to_string),
            references: references_from_value(item.get("source_references")),
            raw: item,
            fields,
        });
    }
    records
}

/// Parses a `source_references` array, dropping entries that are not
/// reference objects.
pub fn references_from_value(value: Option<&Value>) -> Vec<SourceReference> {
    let Some(Value::Array(items)) = value else {
        return Vec::new();
    };
    items
        .iter()
        .filter(|item| item.is_object())
        .filter_map(|item| match serde_json::from_value(item.clone()) {
            Ok(reference) => Some(reference),
            Err(err) => {
                debug!(error = %err, "dropping malformed source reference");
                None
            }
        })
        .collect()
}

pub fn checksum_text(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    format!("{:x}", hasher.finalize())
}

fn record_key(canonical: &str, ordinal: usize) -> RecordKey {
    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    hasher.update(ordinal.to_le_bytes());
    let digest = format!("{:x}", hasher.finalize());
    RecordKey(format!("r-{}", &digest[..16]))
}
