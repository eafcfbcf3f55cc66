//! Error types
//!
//! Two kinds of failure live here:
//!
//! - [`ValidationError`] is *data*: a rule rejected a value. It carries the
//!   human-readable message shown next to the field plus a stable code and
//!   parameters for programmatic handling.
//! - [`RuleError`] is a construction failure: a pattern that does not
//!   compile, or a JSON document that cannot be read as field values.
//!
//! All string fields of [`ValidationError`] use `Cow<'static, str>` so the
//! default messages of parameterless rules never allocate.

use std::borrow::Cow;
use std::fmt;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A rule failure for one field value.
///
/// # Examples
///
/// ```
/// use forma_validator::ValidationError;
///
/// let error = ValidationError::new("min_length", "Must be at least 3 characters")
///     .with_field("name")
///     .with_param("min", "3");
///
/// assert_eq!(error.param("min"), Some("3"));
/// assert_eq!(error.to_string(), "[name] min_length: Must be at least 3 characters");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Stable error code, e.g. `required`, `min_length`, `email`.
    pub code: Cow<'static, str>,

    /// Human-readable message. Either the rule's default or the caller's
    /// override.
    pub message: Cow<'static, str>,

    /// Name of the field the error belongs to, set by the schema.
    pub field: Option<Cow<'static, str>>,

    /// Ordered rule parameters, e.g. `[("min", "3")]`.
    pub params: Vec<(Cow<'static, str>, Cow<'static, str>)>,
}

impl ValidationError {
    /// Creates a new validation error with a code and message.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            field: None,
            params: Vec::new(),
        }
    }

    /// Sets the field name for this error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, field: impl Into<Cow<'static, str>>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Adds a parameter to the error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Replaces the message, keeping code and params.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = message.into();
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| &**v)
    }

    /// The human-readable message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(field) = &self.field {
            write!(f, "[{}] {}: {}", field, self.code, self.message)
        } else {
            write!(f, "{}: {}", self.code, self.message)
        }
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// RULE ERROR
// ============================================================================

/// Failure to build rules or read field values.
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    /// A pattern string did not compile.
    #[error("invalid pattern `{pattern}`: {source}")]
    InvalidPattern {
        /// The rejected pattern source.
        pattern: String,
        /// Compilation error from the regex engine.
        #[source]
        source: regex::Error,
    },

    /// Field values must be supplied as a JSON object.
    #[error("expected a JSON object of field values, got {0}")]
    NotAnObject(&'static str),

    /// A JSON value has no field-value equivalent.
    #[error("unsupported value for field `{field}`: {reason}")]
    UnsupportedValue {
        /// Field whose value was rejected.
        field: String,
        /// What was wrong with it.
        reason: String,
    },
}

impl RuleError {
    pub(crate) fn unsupported(field: &str, reason: impl Into<String>) -> Self {
        Self::UnsupportedValue {
            field: field.to_owned(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_without_field() {
        let error = ValidationError::new("required", "This field is required");
        assert_eq!(error.to_string(), "required: This field is required");
    }

    #[test]
    fn with_message_keeps_code_and_params() {
        let error = ValidationError::new("min", "Value must be at least 1")
            .with_param("min", "1")
            .with_message("Too young");

        assert_eq!(error.code, "min");
        assert_eq!(error.message(), "Too young");
        assert_eq!(error.param("min"), Some("1"));
        assert_eq!(error.param("max"), None);
    }

    #[test]
    fn invalid_pattern_display() {
        let source = regex::Regex::new("(").unwrap_err();
        let error = RuleError::InvalidPattern {
            pattern: "(".into(),
            source,
        };
        assert!(error.to_string().starts_with("invalid pattern `(`"));
    }
}
