//! Core trait for the validation system

use crate::error::ValidationError;

/// The trait implemented by everything that can reject a value.
///
/// A single [`Rule`](crate::Rule) and a whole [`RuleChain`](crate::RuleChain)
/// both implement it over [`FieldValue`](crate::FieldValue), so callers can
/// hold either behind the same bound.
///
/// # Examples
///
/// ```
/// use forma_validator::{FieldValue, Validate, ValidationError};
///
/// struct NotBlank;
///
/// impl Validate for NotBlank {
///     type Input = FieldValue;
///
///     fn validate(&self, input: &FieldValue) -> Result<(), ValidationError> {
///         match input {
///             FieldValue::Text(s) if s.trim().is_empty() => {
///                 Err(ValidationError::new("not_blank", "Must not be blank"))
///             }
///             _ => Ok(()),
///         }
///     }
/// }
///
/// assert!(NotBlank.validate(&"  ".into()).is_err());
/// assert!(NotBlank.is_valid(&"x".into()));
/// ```
pub trait Validate {
    /// The type of input being validated.
    type Input: ?Sized;

    /// Validates the input value.
    ///
    /// * `Ok(())` if validation succeeds
    /// * `Err(ValidationError)` describing the first failure otherwise
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;

    /// Returns `true` when [`validate`](Self::validate) succeeds.
    fn is_valid(&self, input: &Self::Input) -> bool {
        self.validate(input).is_ok()
    }
}

impl<V: Validate + ?Sized> Validate for &V {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        (**self).validate(input)
    }
}
