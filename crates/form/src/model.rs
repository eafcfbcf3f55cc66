//! Typed form models
//!
//! A form is a plain struct whose fields are named by a `Copy` enum. The
//! controller never iterates struct members reflectively; it walks
//! [`FormField::ALL`] and goes through [`FormModel::value`] /
//! [`FormModel::set_value`].

use std::borrow::Cow;
use std::fmt::Debug;
use std::hash::Hash;

use forma_validator::{FieldSource, FieldValue, FormValues, ValueKind};

use crate::error::{FormError, FormResult};

/// The closed set of fields of one form.
pub trait FormField: Copy + Eq + Hash + Debug + 'static {
    /// Every field, in display order.
    const ALL: &'static [Self];

    /// Name used as the schema key.
    fn name(self) -> &'static str;

    /// Looks a field up by name.
    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|field| field.name() == name)
    }
}

/// Values of one form.
pub trait FormModel: Clone {
    /// The field enum.
    type Field: FormField;

    /// Current value of `field`.
    fn value(&self, field: Self::Field) -> FieldValue;

    /// Stores `value` into `field`, rejecting the wrong kind.
    fn set_value(&mut self, field: Self::Field, value: FieldValue) -> FormResult<()>;

    /// Snapshot of every field keyed by name.
    fn snapshot(&self) -> FormValues {
        Self::Field::ALL
            .iter()
            .map(|&field| (field.name(), self.value(field)))
            .collect()
    }
}

/// Borrows a model as a [`FieldSource`] for schema validation.
#[derive(Debug)]
pub struct ModelSource<'a, M>(pub &'a M);

impl<M: FormModel> FieldSource for ModelSource<'_, M> {
    fn field_value(&self, name: &str) -> Option<Cow<'_, FieldValue>> {
        M::Field::from_name(name).map(|field| Cow::Owned(self.0.value(field)))
    }
}

// ============================================================================
// SETTER HELPERS
// ============================================================================

fn mismatch<F: FormField>(field: F, expected: ValueKind, value: &FieldValue) -> FormError {
    FormError::TypeMismatch {
        field: field.name(),
        expected,
        actual: value.kind(),
    }
}

/// Unwraps text for `field`; `Null` becomes the empty string.
pub fn expect_text<F: FormField>(field: F, value: FieldValue) -> FormResult<String> {
    match value {
        FieldValue::Text(s) => Ok(s),
        FieldValue::Null => Ok(String::new()),
        other => Err(mismatch(field, ValueKind::Text, &other)),
    }
}

/// Unwraps a boolean for `field`; `Null` becomes `false`.
pub fn expect_bool<F: FormField>(field: F, value: FieldValue) -> FormResult<bool> {
    match value {
        FieldValue::Bool(b) => Ok(b),
        FieldValue::Null => Ok(false),
        other => Err(mismatch(field, ValueKind::Bool, &other)),
    }
}

/// Unwraps an optional number for `field`.
///
/// Text is parsed the way a number input reports it: blank is `None`,
/// anything unparseable is `NaN`.
pub fn expect_number<F: FormField>(field: F, value: FieldValue) -> FormResult<Option<f64>> {
    match value {
        FieldValue::Number(n) => Ok(Some(n)),
        FieldValue::Null => Ok(None),
        FieldValue::Text(s) if s.trim().is_empty() => Ok(None),
        FieldValue::Text(s) => Ok(Some(s.trim().parse().unwrap_or(f64::NAN))),
        other => Err(mismatch(field, ValueKind::Number, &other)),
    }
}
