use std::borrow::Cow;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A loosely structured product record as stored in the source collection.
///
/// Source data is hand-entered, so the normalized fields are kept as raw
/// [`Value`]s: a dimension may arrive as `"45cm"` or as the number `45`,
/// and both must round-trip to the output file unchanged. Fields the
/// converter does not know about pass through in `extra`, in their
/// original order.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    /// Current identifier; replaced by the generated composite code.
    #[serde(default)]
    pub id: Value,
    /// Identifier the record had before conversion. Absent until the
    /// record has been converted at least once.
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub old_id: Value,
    /// Free-text category label.
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub category: Value,
    /// Free-text color description, possibly a comma-separated list.
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub color: Value,
    /// Free-text length, may carry units.
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub length: Value,
    /// Free-text width, may carry units.
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub width: Value,
    /// Free-text height, may carry units.
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub height: Value,
    /// Mixed alphanumeric base identifier; only digits are used.
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub base_code: Value,
    /// Unrecognized fields, passed through unchanged.
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

/// One row of the conversion report, parallel to the input collection.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportEntry {
    /// 1-based position of the record in the input sequence.
    #[serde(default)]
    pub no: usize,
    /// Identifier before conversion.
    #[serde(default)]
    pub old_id: String,
    /// Generated composite code.
    #[serde(default)]
    pub new_id: String,
    /// Category label as found in the record.
    #[serde(default)]
    pub category: String,
    /// Color description as found in the record.
    #[serde(default)]
    pub color: String,
    /// Raw length/width/height joined with `x`, e.g. `45cmx20x`.
    #[serde(default)]
    pub dimensions: String,
}

/// Loose text view of a JSON value, the way dict-shaped source data is
/// read: strings as-is, numbers and bools via their decimal rendering,
/// everything else (null, arrays, objects) as empty text.
pub fn value_text(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(text) => Cow::Borrowed(text),
        Value::Number(num) => Cow::Owned(num.to_string()),
        Value::Bool(flag) => Cow::Owned(flag.to_string()),
        _ => Cow::Borrowed(""),
    }
}
