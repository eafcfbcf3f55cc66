//! Field values
//!
//! A form field holds one of a small, closed set of value kinds. Rules
//! dispatch on the [`ValueKind`] tag to decide whether they apply, so a
//! string rule handed a number simply passes.

use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};

// ============================================================================
// VALUE KIND
// ============================================================================

/// The tag of a [`FieldValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// No value.
    Null,
    /// `true` / `false`.
    Bool,
    /// A double-precision number.
    Number,
    /// A string.
    Text,
    /// A date instant (valid or not).
    Date,
    /// A file handle slot.
    File,
}

impl ValueKind {
    /// Lowercase name used in messages (`string`, `number`, ...).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool => "boolean",
            Self::Number => "number",
            Self::Text => "string",
            Self::Date => "date",
            Self::File => "file",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// FILE HANDLE
// ============================================================================

/// Metadata of a file chosen in a file input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileHandle {
    /// File name as reported by the picker.
    pub name: String,
    /// Size in bytes.
    pub size: u64,
    /// Media type, when known.
    pub media_type: Option<String>,
}

impl FileHandle {
    /// Creates a handle with a name and size.
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
            media_type: None,
        }
    }

    /// Sets the media type.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_media_type(mut self, media_type: impl Into<String>) -> Self {
        self.media_type = Some(media_type.into());
        self
    }
}

// ============================================================================
// FIELD VALUE
// ============================================================================

/// The current value of one form field.
///
/// Equality follows SameValueZero: `NaN` equals `NaN` and `0.0` equals
/// `-0.0`. This is the comparison `one_of` / `not_one_of` use.
#[derive(Debug, Clone, Default)]
pub enum FieldValue {
    /// Empty / absent.
    #[default]
    Null,
    /// Checkbox-style value.
    Bool(bool),
    /// Numeric input.
    Number(f64),
    /// Text input.
    Text(String),
    /// Date input. `None` is a date that failed to parse (an invalid date).
    Date(Option<DateTime<Utc>>),
    /// File input; `None` when nothing is selected.
    File(Option<FileHandle>),
}

impl FieldValue {
    /// Parses an RFC 3339 timestamp into a date value; unparseable input
    /// yields the invalid date rather than an error.
    #[must_use]
    pub fn date_from_rfc3339(input: &str) -> Self {
        Self::Date(
            DateTime::parse_from_rfc3339(input)
                .ok()
                .map(|dt| dt.with_timezone(&Utc)),
        )
    }

    /// The tag of this value.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Null => ValueKind::Null,
            Self::Bool(_) => ValueKind::Bool,
            Self::Number(_) => ValueKind::Number,
            Self::Text(_) => ValueKind::Text,
            Self::Date(_) => ValueKind::Date,
            Self::File(_) => ValueKind::File,
        }
    }

    /// Truthiness as a form would judge "has a value".
    ///
    /// `Null`, `false`, `""`, `0`, `-0`, `NaN` and an empty file slot are
    /// falsy. Every date, valid or not, is truthy.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Bool(b) => *b,
            Self::Number(n) => *n != 0.0 && !n.is_nan(),
            Self::Text(s) => !s.is_empty(),
            Self::Date(_) => true,
            Self::File(file) => file.is_some(),
        }
    }

    /// The string payload, if this is text.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// The numeric payload, if this is a number.
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The instant, if this is a valid date.
    #[must_use]
    pub const fn as_date(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Date(date) => *date,
            _ => None,
        }
    }

    /// Returns `true` for [`FieldValue::Null`].
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl PartialEq for FieldValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => a == b || (a.is_nan() && b.is_nan()),
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::Date(a), Self::Date(b)) => a == b,
            (Self::File(a), Self::File(b)) => a == b,
            _ => false,
        }
    }
}

/// Renders numbers the way a browser would print them in a message.
pub(crate) fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_owned()
    } else if n.is_infinite() {
        if n > 0.0 { "Infinity" } else { "-Infinity" }.to_owned()
    } else if n == 0.0 {
        "0".to_owned()
    } else {
        n.to_string()
    }
}

pub(crate) fn format_date(date: &DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null | Self::File(None) => Ok(()),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => f.write_str(&format_number(*n)),
            Self::Text(s) => f.write_str(s),
            Self::Date(Some(date)) => f.write_str(&format_date(date)),
            Self::Date(None) => f.write_str("Invalid Date"),
            Self::File(Some(file)) => f.write_str(&file.name),
        }
    }
}

// ============================================================================
// CONVERSIONS
// ============================================================================

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for FieldValue {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<DateTime<Utc>> for FieldValue {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Date(Some(value))
    }
}

impl From<FileHandle> for FieldValue {
    fn from(value: FileHandle) -> Self {
        Self::File(Some(value))
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

macro_rules! number_from {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for FieldValue {
                fn from(value: $ty) -> Self {
                    Self::Number(value as f64)
                }
            }
        )*
    };
}

number_from!(i8, i16, i32, i64, u8, u16, u32, u64, usize, isize, f32);

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;

    #[rstest]
    #[case::null(FieldValue::Null, false)]
    #[case::empty_text(FieldValue::from(""), false)]
    #[case::text(FieldValue::from("x"), true)]
    #[case::zero(FieldValue::from(0), false)]
    #[case::negative_zero(FieldValue::from(-0.0), false)]
    #[case::nan(FieldValue::from(f64::NAN), false)]
    #[case::number(FieldValue::from(7), true)]
    #[case::false_(FieldValue::from(false), false)]
    #[case::true_(FieldValue::from(true), true)]
    #[case::invalid_date(FieldValue::Date(None), true)]
    #[case::no_file(FieldValue::File(None), false)]
    #[case::file(FieldValue::from(FileHandle::new("cv.pdf", 10)), true)]
    fn truthiness(#[case] value: FieldValue, #[case] truthy: bool) {
        assert_eq!(value.is_truthy(), truthy);
    }

    #[test]
    fn same_value_zero_equality() {
        assert_eq!(FieldValue::from(f64::NAN), FieldValue::from(f64::NAN));
        assert_eq!(FieldValue::from(0.0), FieldValue::from(-0.0));
        assert_ne!(FieldValue::from(1), FieldValue::from("1"));
    }

    #[test]
    fn option_conversion() {
        assert!(FieldValue::from(None::<&str>).is_null());
        assert_eq!(FieldValue::from(Some(3)), FieldValue::Number(3.0));
    }

    #[test]
    fn display_forms() {
        assert_eq!(FieldValue::from(1).to_string(), "1");
        assert_eq!(FieldValue::from(1.5).to_string(), "1.5");
        assert_eq!(FieldValue::from(f64::INFINITY).to_string(), "Infinity");
        assert_eq!(FieldValue::Null.to_string(), "");
        assert_eq!(FieldValue::Date(None).to_string(), "Invalid Date");

        let date = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(FieldValue::from(date).to_string(), "2024-01-02T03:04:05Z");
    }

    #[test]
    fn parse_dates() {
        assert!(FieldValue::date_from_rfc3339("2024-05-01T00:00:00+02:00")
            .as_date()
            .is_some());
        assert_eq!(FieldValue::date_from_rfc3339("yesterday"), FieldValue::Date(None));
        assert_eq!(FieldValue::date_from_rfc3339("yesterday").kind(), ValueKind::Date);
    }
}
