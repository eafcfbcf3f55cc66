//! JSON interop for field values
//!
//! Field values travel as plain JSON scalars. The two kinds JSON has no
//! scalar for use a one-key tagged object:
//!
//! | Field value | JSON |
//! |---|---|
//! | `Null` | `null` |
//! | `Bool(b)` | `true` / `false` |
//! | `Number(n)` | number (`null` when not finite) |
//! | `Text(s)` | string |
//! | `Date(Some(d))` | `{"$date": "2024-01-01T00:00:00Z"}` |
//! | `Date(None)` | `{"$date": null}` |
//! | `File(Some(f))` | `{"$file": {"name": "cv.pdf", "size": 1024}}` |
//! | `File(None)` | `{"$file": null}` |

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};

use crate::error::RuleError;
use crate::schema::FormValues;
use crate::value::{FieldValue, FileHandle, format_date};

const DATE_TAG: &str = "$date";
const FILE_TAG: &str = "$file";

impl FieldValue {
    /// Converts a JSON value for `field`. Arrays and untagged objects are
    /// rejected.
    pub fn from_json(field: &str, value: Value) -> Result<Self, RuleError> {
        match value {
            Value::Null => Ok(Self::Null),
            Value::Bool(b) => Ok(Self::Bool(b)),
            Value::Number(n) => n
                .as_f64()
                .map(Self::Number)
                .ok_or_else(|| RuleError::unsupported(field, format!("number {n} out of range"))),
            Value::String(s) => Ok(Self::Text(s)),
            Value::Array(_) => Err(RuleError::unsupported(field, "arrays are not field values")),
            Value::Object(map) => tagged_from_json(field, map),
        }
    }

    /// Converts to the JSON form in the module table.
    #[must_use]
    pub fn to_json(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

fn tagged_from_json(field: &str, mut map: Map<String, Value>) -> Result<FieldValue, RuleError> {
    if map.len() != 1 {
        return Err(RuleError::unsupported(
            field,
            "objects must have exactly one `$date` or `$file` key",
        ));
    }

    if let Some(date) = map.remove(DATE_TAG) {
        return match date {
            Value::Null => Ok(FieldValue::Date(None)),
            Value::String(s) => Ok(FieldValue::date_from_rfc3339(&s)),
            other => Err(RuleError::unsupported(
                field,
                format!("`$date` must be a string or null, got {}", json_kind(&other)),
            )),
        };
    }

    if let Some(file) = map.remove(FILE_TAG) {
        return match file {
            Value::Null => Ok(FieldValue::File(None)),
            Value::Object(obj) => file_from_json(field, &obj).map(|f| FieldValue::File(Some(f))),
            other => Err(RuleError::unsupported(
                field,
                format!("`$file` must be an object or null, got {}", json_kind(&other)),
            )),
        };
    }

    Err(RuleError::unsupported(
        field,
        "objects must have exactly one `$date` or `$file` key",
    ))
}

fn file_from_json(field: &str, obj: &Map<String, Value>) -> Result<FileHandle, RuleError> {
    let name = obj
        .get("name")
        .and_then(Value::as_str)
        .ok_or_else(|| RuleError::unsupported(field, "`$file.name` must be a string"))?;
    let size = obj.get("size").and_then(Value::as_u64).unwrap_or(0);

    let mut handle = FileHandle::new(name, size);
    if let Some(media_type) = obj.get("media_type").and_then(Value::as_str) {
        handle = handle.with_media_type(media_type);
    }
    Ok(handle)
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Null => serializer.serialize_none(),
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Number(n) if n.is_finite() => serializer.serialize_f64(*n),
            Self::Number(_) => serializer.serialize_none(),
            Self::Text(s) => serializer.serialize_str(s),
            Self::Date(date) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry(DATE_TAG, &date.as_ref().map(format_date))?;
                map.end()
            }
            Self::File(file) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry(FILE_TAG, &file.as_ref().map(FileJson::from))?;
                map.end()
            }
        }
    }
}

#[derive(serde::Serialize)]
struct FileJson<'a> {
    name: &'a str,
    size: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    media_type: Option<&'a str>,
}

impl<'a> From<&'a FileHandle> for FileJson<'a> {
    fn from(file: &'a FileHandle) -> Self {
        Self {
            name: &file.name,
            size: file.size,
            media_type: file.media_type.as_deref(),
        }
    }
}

impl FormValues {
    /// Reads a JSON object of `field -> value`.
    pub fn from_json(value: Value) -> Result<Self, RuleError> {
        let Value::Object(map) = value else {
            return Err(RuleError::NotAnObject(json_kind(&value)));
        };

        let mut values = Self::new();
        for (name, value) in map {
            let value = FieldValue::from_json(&name, value)?;
            values.set(name, value);
        }
        Ok(values)
    }

    /// Parses a JSON document of `field -> value`.
    pub fn from_json_str(input: &str) -> Result<Self, RuleError> {
        let value: Value = serde_json::from_str(input)
            .map_err(|e| RuleError::unsupported("<document>", e.to_string()))?;
        Self::from_json(value)
    }
}

impl Serialize for FormValues {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (name, value) in self.iter() {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
