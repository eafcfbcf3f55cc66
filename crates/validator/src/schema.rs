//! Field validation maps
//!
//! A [`FormSchema`] associates field names with [`RuleChain`]s and
//! validates a snapshot of field values in one pass. It is a pure function
//! of `(schema, values)`: every call returns a fresh [`ValidationResult`].

use std::borrow::Cow;
use std::collections::HashMap;
use std::hash::BuildHasher;

use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::chain::RuleChain;
use crate::error::ValidationError;
use crate::value::FieldValue;

// ============================================================================
// FIELD SOURCE
// ============================================================================

/// Read access to the current value of each field.
///
/// Returning `None` means the field is absent from the snapshot; the schema
/// validates it as [`FieldValue::Null`].
pub trait FieldSource {
    /// Looks up the current value of `name`.
    fn field_value(&self, name: &str) -> Option<Cow<'_, FieldValue>>;
}

impl<S: BuildHasher> FieldSource for HashMap<String, FieldValue, S> {
    fn field_value(&self, name: &str) -> Option<Cow<'_, FieldValue>> {
        self.get(name).map(Cow::Borrowed)
    }
}

impl<S: BuildHasher> FieldSource for IndexMap<String, FieldValue, S> {
    fn field_value(&self, name: &str) -> Option<Cow<'_, FieldValue>> {
        self.get(name).map(Cow::Borrowed)
    }
}

impl<T: FieldSource + ?Sized> FieldSource for &T {
    fn field_value(&self, name: &str) -> Option<Cow<'_, FieldValue>> {
        (**self).field_value(name)
    }
}

// ============================================================================
// FORM VALUES
// ============================================================================

/// An ordered snapshot of field values keyed by name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormValues {
    values: IndexMap<String, FieldValue>,
}

impl FormValues {
    /// Creates an empty snapshot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a value, builder style.
    #[must_use = "builder methods must be chained or built"]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.set(name, value);
        self
    }

    /// Sets a value, returning the previous one.
    pub fn set(
        &mut self,
        name: impl Into<String>,
        value: impl Into<FieldValue>,
    ) -> Option<FieldValue> {
        self.values.insert(name.into(), value.into())
    }

    /// Removes a value, keeping the order of the rest.
    pub fn remove(&mut self, name: &str) -> Option<FieldValue> {
        self.values.shift_remove(name)
    }

    /// The value of `name`, if present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.values.get(name)
    }

    /// Number of fields in the snapshot.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` when the snapshot holds no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl FieldSource for FormValues {
    fn field_value(&self, name: &str) -> Option<Cow<'_, FieldValue>> {
        self.values.get(name).map(Cow::Borrowed)
    }
}

impl<K: Into<String>, V: Into<FieldValue>> FromIterator<(K, V)> for FormValues {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

// ============================================================================
// VALIDATION RESULT
// ============================================================================

/// Per-field outcome of one validation pass, in schema order.
///
/// Every field the schema declares has an entry: `None` when it passed,
/// `Some(error)` when it failed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationResult {
    fields: IndexMap<String, Option<ValidationError>>,
}

impl ValidationResult {
    /// Creates an empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the outcome for `name`, returning the previous outcome.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        outcome: Option<ValidationError>,
    ) -> Option<Option<ValidationError>> {
        self.fields.insert(name.into(), outcome)
    }

    /// Clears the error of `name` while keeping its entry.
    pub fn clear(&mut self, name: &str) {
        if let Some(outcome) = self.fields.get_mut(name) {
            *outcome = None;
        }
    }

    /// Returns `true` when no field has an error.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.fields.values().all(Option::is_none)
    }

    /// Returns `true` when `name` has an entry, failed or not.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// The error of `name`, if it failed.
    #[must_use]
    pub fn error(&self, name: &str) -> Option<&ValidationError> {
        self.fields.get(name).and_then(Option::as_ref)
    }

    /// The message of `name`, if it failed.
    #[must_use]
    pub fn message(&self, name: &str) -> Option<&str> {
        self.error(name).map(ValidationError::message)
    }

    /// Iterates the failing fields only.
    pub fn errors(&self) -> impl Iterator<Item = (&str, &ValidationError)> {
        self.fields
            .iter()
            .filter_map(|(name, outcome)| outcome.as_ref().map(|e| (name.as_str(), e)))
    }

    /// Number of failing fields.
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.fields.values().filter(|o| o.is_some()).count()
    }

    /// Names of the failing fields, in schema order.
    #[must_use]
    pub fn failed_fields(&self) -> Vec<String> {
        self.errors().map(|(name, _)| name.to_owned()).collect()
    }

    /// Iterates every entry.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&ValidationError>)> {
        self.fields
            .iter()
            .map(|(name, outcome)| (name.as_str(), outcome.as_ref()))
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` when there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Flattens to `name -> message-or-none`.
    #[must_use]
    pub fn to_messages(&self) -> IndexMap<String, Option<String>> {
        self.iter()
            .map(|(name, error)| (name.to_owned(), error.map(|e| e.message().to_owned())))
            .collect()
    }
}

impl Serialize for ValidationResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, error) in self.iter() {
            map.serialize_entry(name, &error.map(ValidationError::message))?;
        }
        map.end()
    }
}

// ============================================================================
// FORM SCHEMA
// ============================================================================

/// Field name to [`RuleChain`] map.
///
/// # Examples
///
/// ```
/// use forma_validator::prelude::*;
///
/// let schema = FormSchema::new()
///     .field("name", rules().required().min_length(3))
///     .field("email", rules().email());
///
/// let values = FormValues::new()
///     .with("name", "Al")
///     .with("email", "x@y.com");
///
/// let result = schema.validate(&values);
/// assert_eq!(result.message("name"), Some("Must be at least 3 characters"));
/// assert_eq!(result.message("email"), None);
/// assert!(!result.is_valid());
/// ```
#[derive(Debug, Clone, Default)]
pub struct FormSchema {
    fields: IndexMap<Cow<'static, str>, RuleChain>,
}

impl FormSchema {
    /// Creates a schema with no fields.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a field, builder style. Redeclaring a name replaces its
    /// chain in place.
    #[must_use = "builder methods must be chained or built"]
    pub fn field(mut self, name: impl Into<Cow<'static, str>>, chain: RuleChain) -> Self {
        self.insert(name, chain);
        self
    }

    /// Declares or replaces a field, returning the old chain.
    pub fn insert(
        &mut self,
        name: impl Into<Cow<'static, str>>,
        chain: RuleChain,
    ) -> Option<RuleChain> {
        self.fields.insert(name.into(), chain)
    }

    /// Drops a field; later validations no longer report it.
    pub fn remove(&mut self, name: &str) -> Option<RuleChain> {
        self.fields.shift_remove(name)
    }

    /// The chain for `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&RuleChain> {
        self.fields.get(name)
    }

    /// Returns `true` when `name` is declared.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Number of declared fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` when no field is declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Declared field names, in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(|name| &**name)
    }

    /// Iterates `(name, chain)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RuleChain)> {
        self.fields.iter().map(|(name, chain)| (&**name, chain))
    }

    /// Validates every declared field against `values`.
    ///
    /// Values for undeclared fields are ignored. Declared fields missing
    /// from `values` are checked as [`FieldValue::Null`].
    pub fn validate<V: FieldSource + ?Sized>(&self, values: &V) -> ValidationResult {
        let mut result = ValidationResult {
            fields: IndexMap::with_capacity(self.fields.len()),
        };

        for (name, chain) in &self.fields {
            let outcome = Self::run(name, chain, values);
            result.fields.insert(name.to_string(), outcome);
        }

        tracing::debug!(
            fields = result.len(),
            failed = result.error_count(),
            "form validated"
        );
        result
    }

    /// Validates one declared field. Returns `None` when `name` is not in
    /// the schema, otherwise the field's outcome.
    pub fn validate_field<V: FieldSource + ?Sized>(
        &self,
        name: &str,
        values: &V,
    ) -> Option<Option<ValidationError>> {
        let (name, chain) = self.fields.get_key_value(name)?;
        Some(Self::run(name, chain, values))
    }

    fn run<V: FieldSource + ?Sized>(
        name: &Cow<'static, str>,
        chain: &RuleChain,
        values: &V,
    ) -> Option<ValidationError> {
        let value = values
            .field_value(name)
            .unwrap_or(Cow::Owned(FieldValue::Null));
        let outcome = chain
            .first_error(&value)
            .map(|error| error.with_field(name.clone()));

        tracing::trace!(
            field = %name,
            code = outcome.as_ref().map(|e| &*e.code),
            "field validated"
        );
        outcome
    }
}

impl<N: Into<Cow<'static, str>>> FromIterator<(N, RuleChain)> for FormSchema {
    fn from_iter<I: IntoIterator<Item = (N, RuleChain)>>(iter: I) -> Self {
        let mut schema = Self::new();
        for (name, chain) in iter {
            schema.insert(name, chain);
        }
        schema
    }
}

// ============================================================================
// TESTS
// ============================================================================
