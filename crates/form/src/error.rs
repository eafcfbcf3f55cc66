//! Error types for form handling

use forma_validator::ValueKind;

/// Result alias for controller operations.
pub type FormResult<T> = Result<T, FormError>;

/// Failures surfaced by the form controller.
#[derive(Debug, thiserror::Error)]
pub enum FormError {
    /// Submission was withheld because at least one field failed.
    #[error("submission withheld: {} field(s) failed validation: {}", fields.len(), fields.join(", "))]
    Invalid {
        /// Names of the failing fields, in schema order.
        fields: Vec<String>,
    },

    /// A value of the wrong kind was written to a field.
    #[error("field `{field}` expects a {expected} value, got {actual}")]
    TypeMismatch {
        /// Field name.
        field: &'static str,
        /// Kind the field stores.
        expected: ValueKind,
        /// Kind that was supplied.
        actual: ValueKind,
    },

    /// Controller configuration could not be read.
    #[error("invalid form configuration: {0}")]
    Config(#[from] serde_json::Error),
}

impl FormError {
    /// Returns `true` for a withheld submission.
    #[must_use]
    pub const fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid { .. })
    }

    /// Failing field names of a withheld submission.
    #[must_use]
    pub fn invalid_fields(&self) -> &[String] {
        match self {
            Self::Invalid { fields } => fields,
            _ => &[],
        }
    }
}
