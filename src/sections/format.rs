//! Display normalization for record fields.
//!
//! Every table cell goes through [`normalize`]; sections never format values
//! on their own.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use schemars::JsonSchema;
use serde::Serialize;
use serde_json::Value;

use crate::documents::FieldValue;

pub const MISSING_VALUE: &str = "-";
pub const MISSING_DATE: &str = "Not set";
pub const DEFAULT_SEPARATOR: &str = "; ";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CellValue {
    Text { value: String },
    List { items: Vec<String> },
    Missing,
    /// Absent date; displays as [`MISSING_DATE`].
    Unset,
}

impl CellValue {
    pub fn display(&self, separator: &str) -> String {
        match self {
            Self::Text { value } => value.clone(),
            Self::List { items } => items.join(separator),
            Self::Missing => MISSING_VALUE.to_string(),
            Self::Unset => MISSING_DATE.to_string(),
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing | Self::Unset)
    }
}

pub fn normalize(value: Option<&FieldValue>) -> CellValue {
    let Some(value) = value else {
        return CellValue::Missing;
    };
    match value {
        FieldValue::Text(text) => text_cell(text),
        FieldValue::Number(number) => CellValue::Text {
            value: number.to_string(),
        },
        FieldValue::Flag(flag) => CellValue::Text {
            value: flag.to_string(),
        },
        FieldValue::List(items) => {
            let items: Vec<String> = items.iter().filter_map(list_item_text).collect();
            if items.is_empty() {
                CellValue::Missing
            } else {
                CellValue::List { items }
            }
        }
        FieldValue::Object(map) => CellValue::Text {
            value: Value::Object(map.clone()).to_string(),
        },
    }
}

/// Normalizes and flattens a field to a single display string.
pub fn display_text(value: Option<&FieldValue>, separator: &str) -> String {
    normalize(value).display(separator)
}

/// Like [`display_text`] but substitutes a section-specific fallback sentence
/// for missing values.
pub fn text_or(value: Option<&FieldValue>, fallback: &str) -> String {
    match normalize(value) {
        CellValue::Missing | CellValue::Unset => fallback.to_string(),
        other => other.display(DEFAULT_SEPARATOR),
    }
}

/// Items of a list-valued field, or the single value wrapped in a list.
pub fn list_items(value: Option<&FieldValue>) -> Vec<String> {
    match normalize(value) {
        CellValue::List { items } => items,
        CellValue::Text { value } => vec![value],
        CellValue::Missing | CellValue::Unset => Vec::new(),
    }
}

/// Renders a free-form list entry (assumption, process, license) that may be a
/// string or an object.
pub fn list_item_text(item: &Value) -> Option<String> {
    match item {
        Value::Null => None,
        Value::String(text) => {
            let trimmed = text.trim();
            (!trimmed.is_empty()).then(|| text.clone())
        }
        Value::Object(map) => ["text", "description", "name"]
            .iter()
            .find_map(|key| map.get(*key).and_then(Value::as_str))
            .map(ToString::to_string)
            .or_else(|| Some(item.to_string())),
        other => Some(other.to_string()),
    }
}

/// Formats a backend timestamp like `Jan 5, 2024, 03:30 PM`.
pub fn format_datetime(raw: Option<&str>) -> String {
    let Some(raw) = raw.map(str::trim).filter(|value| !value.is_empty()) else {
        return MISSING_DATE.to_string();
    };
    parse_datetime(raw)
        .map(|value| value.format("%b %-d, %Y, %I:%M %p").to_string())
        .unwrap_or_else(|| raw.to_string())
}

/// Date cell for a timestamp field. Absent, blank and empty values are
/// [`CellValue::Unset`]; non-text values fall back to [`normalize`].
pub fn date_cell(value: Option<&FieldValue>) -> CellValue {
    match value {
        Some(FieldValue::Text(text)) if !text.trim().is_empty() => CellValue::Text {
            value: format_datetime(Some(text)),
        },
        other => match normalize(other) {
            CellValue::Missing => CellValue::Unset,
            cell => cell,
        },
    }
}

fn parse_datetime(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(value) = DateTime::parse_from_rfc3339(raw) {
        return Some(value.naive_local());
    }
    for pattern in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(value) = NaiveDateTime::parse_from_str(raw, pattern) {
            return Some(value);
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

fn text_cell(text: &str) -> CellValue {
    if text.trim().is_empty() {
        CellValue::Missing
    } else {
        CellValue::Text {
            value: text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn field(value: Value) -> FieldValue {
        serde_json::from_value(value).expect("field value")
    }

    #[test]
    fn joins_lists_with_separator() {
        let value = field(json!(["Login via SAML", "Session timeout 30min"]));
        assert_eq!(
            display_text(Some(&value), "; "),
            "Login via SAML; Session timeout 30min"
        );
    }

    #[test]
    fn missing_and_blank_values_use_placeholder() {
        assert_eq!(display_text(None, ", "), "-");
        assert_eq!(display_text(Some(&field(json!("   "))), ", "), "-");
        assert_eq!(display_text(Some(&field(json!([]))), ", "), "-");
        assert_eq!(display_text(Some(&field(json!([null, ""]))), ", "), "-");
    }

    #[test]
    fn normalization_is_idempotent() {
        let samples = [
            json!("plain"),
            json!(["a", "b"]),
            json!(""),
            json!(42),
            json!({"text": "x"}),
            json!([{"name": "Sales"}, "Service"]),
        ];
        for sample in samples {
            let once = display_text(Some(&field(sample)), "; ");
            let twice = display_text(Some(&FieldValue::Text(once.clone())), "; ");
            assert_eq!(once, twice);
        }
        let absent = display_text(None, "; ");
        assert_eq!(display_text(Some(&FieldValue::Text(absent.clone())), "; "), absent);
    }

    #[test]
    fn object_list_items_prefer_text_fields() {
        assert_eq!(list_item_text(&json!({"description": "d"})), Some("d".to_string()));
        assert_eq!(list_item_text(&json!({"count": 2})), Some("{\"count\":2}".to_string()));
    }

    #[test]
    fn formats_backend_timestamps() {
        assert_eq!(format_datetime(None), "Not set");
        assert_eq!(format_datetime(Some("")), "Not set");
        assert_eq!(
            format_datetime(Some("2024-01-05 15:30:00")),
            "Jan 5, 2024, 03:30 PM"
        );
        assert_eq!(
            format_datetime(Some("2024-03-18T09:05:00Z")),
            "Mar 18, 2024, 09:05 AM"
        );
        assert_eq!(format_datetime(Some("someday")), "someday");
    }

    #[test]
    fn absent_dates_are_unset_and_read_not_set() {
        for value in [None, Some(field(json!("  "))), Some(field(json!([])))] {
            let cell = date_cell(value.as_ref());
            assert_eq!(cell, CellValue::Unset);
            assert!(cell.is_missing());
            assert_eq!(cell.display(DEFAULT_SEPARATOR), "Not set");
        }
        assert_eq!(
            date_cell(Some(&field(json!("2024-01-05 15:30:00")))),
            CellValue::Text {
                value: "Jan 5, 2024, 03:30 PM".to_string()
            }
        );
    }
}
