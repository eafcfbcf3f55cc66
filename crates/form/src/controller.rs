//! Form state controller
//!
//! Owns the values, error state and touched set of one form and decides,
//! per [`FormConfig`], when the schema runs. Errors are only *visible* for
//! fields the user has left at least once.

use std::collections::HashSet;

use forma_validator::{FieldValue, FormSchema, FormValues, ValidationError, ValidationResult};

use crate::config::FormConfig;
use crate::error::{FormError, FormResult};
use crate::model::{FormField, FormModel, ModelSource};

/// Drives one form through change, blur and submit.
#[derive(Debug, Clone)]
pub struct FormController<M: FormModel> {
    initial: M,
    values: M,
    schema: FormSchema,
    errors: ValidationResult,
    touched: HashSet<M::Field>,
    config: FormConfig,
    submit_count: usize,
}

impl<M: FormModel> FormController<M> {
    /// Creates a controller starting from `initial` with the default
    /// configuration.
    #[must_use]
    pub fn new(initial: M, schema: FormSchema) -> Self {
        Self {
            values: initial.clone(),
            initial,
            schema,
            errors: ValidationResult::new(),
            touched: HashSet::new(),
            config: FormConfig::default(),
            submit_count: 0,
        }
    }

    /// Replaces the configuration.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_config(mut self, config: FormConfig) -> Self {
        self.config = config;
        self
    }

    // ========================================================================
    // EVENTS
    // ========================================================================

    /// Stores a new value for `field`.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::TypeMismatch`] when the model rejects the value
    /// kind. The stored value and error state are left untouched.
    pub fn handle_change(&mut self, field: M::Field, value: impl Into<FieldValue>) -> FormResult<()> {
        self.values.set_value(field, value.into())?;

        if self.config.clear_error_on_change {
            self.errors.clear(field.name());
        }
        if self.config.validate_on_change {
            self.refresh(field);
        }
        Ok(())
    }

    /// Marks `field` touched and, when configured, refreshes its error.
    ///
    /// Other fields keep whatever error they currently display.
    pub fn handle_blur(&mut self, field: M::Field) {
        self.touched.insert(field);

        if self.config.validate_on_blur {
            self.refresh(field);
        }
        tracing::debug!(
            field = field.name(),
            error = self.errors.message(field.name()),
            "field blurred"
        );
    }

    /// Validates every field and calls `on_submit` only if all pass.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::Invalid`] naming the failing fields; `on_submit`
    /// is not called in that case.
    pub fn handle_submit<R>(&mut self, on_submit: impl FnOnce(&M) -> R) -> FormResult<R> {
        self.submit_count += 1;
        self.errors = self.schema.validate(&ModelSource(&self.values));

        if self.config.touch_all_on_submit {
            self.touched.extend(M::Field::ALL.iter().copied());
        }

        if !self.errors.is_valid() {
            let fields = self.errors.failed_fields();
            tracing::debug!(
                attempt = self.submit_count,
                failed = fields.len(),
                "submit withheld"
            );
            return Err(FormError::Invalid { fields });
        }

        tracing::debug!(attempt = self.submit_count, "submit accepted");
        let output = on_submit(&self.values);
        if self.config.reset_on_submit {
            self.reset();
        }
        Ok(output)
    }

    /// Restores the initial values and clears errors and touched state.
    /// The submit count is kept.
    pub fn reset(&mut self) {
        self.values = self.initial.clone();
        self.errors = ValidationResult::new();
        self.touched.clear();
    }

    /// Marks `field` touched without validating.
    pub fn touch(&mut self, field: M::Field) {
        self.touched.insert(field);
    }

    fn refresh(&mut self, field: M::Field) {
        let name = field.name();
        let result = self.schema.validate(&ModelSource(&self.values));
        if result.contains(name) {
            self.errors.insert(name, result.error(name).cloned());
        }
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    /// Current values.
    #[must_use]
    pub fn values(&self) -> &M {
        &self.values
    }

    /// Current values keyed by field name.
    #[must_use]
    pub fn snapshot(&self) -> FormValues {
        self.values.snapshot()
    }

    /// Current error state, as of the last validation.
    #[must_use]
    pub fn errors(&self) -> &ValidationResult {
        &self.errors
    }

    /// Error of `field` as of the last validation, touched or not.
    #[must_use]
    pub fn error(&self, field: M::Field) -> Option<&ValidationError> {
        self.errors.error(field.name())
    }

    /// Message to display for `field`: its error, once it has been touched.
    #[must_use]
    pub fn visible_error(&self, field: M::Field) -> Option<&str> {
        if self.is_touched(field) {
            self.errors.message(field.name())
        } else {
            None
        }
    }

    /// Returns `true` once `field` has been blurred or a submit touched it.
    #[must_use]
    pub fn is_touched(&self, field: M::Field) -> bool {
        self.touched.contains(&field)
    }

    /// Runs the schema against the current values without recording the
    /// outcome.
    #[must_use]
    pub fn validate(&self) -> ValidationResult {
        self.schema.validate(&ModelSource(&self.values))
    }

    /// Returns `true` when the current values pass every rule.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.validate().is_valid()
    }

    /// Returns `true` when any value differs from the initial one.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        M::Field::ALL
            .iter()
            .any(|&field| self.values.value(field) != self.initial.value(field))
    }

    /// Number of submit attempts, successful or not.
    #[must_use]
    pub fn submit_count(&self) -> usize {
        self.submit_count
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    /// The schema in use.
    #[must_use]
    pub fn schema(&self) -> &FormSchema {
        &self.schema
    }

    /// Mutable schema, for forms whose fields come and go.
    ///
    /// Errors of removed fields stay until the next validation.
    pub fn schema_mut(&mut self) -> &mut FormSchema {
        &mut self.schema
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::expect_text;
    use forma_validator::rules;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum Field {
        User,
        Pass,
    }

    impl FormField for Field {
        const ALL: &'static [Self] = &[Self::User, Self::Pass];

        fn name(self) -> &'static str {
            match self {
                Self::User => "user",
                Self::Pass => "pass",
            }
        }
    }

    #[derive(Debug, Clone, Default)]
    struct Login {
        user: String,
        pass: String,
    }

    impl FormModel for Login {
        type Field = Field;

        fn value(&self, field: Field) -> FieldValue {
            match field {
                Field::User => self.user.as_str().into(),
                Field::Pass => self.pass.as_str().into(),
            }
        }

        fn set_value(&mut self, field: Field, value: FieldValue) -> FormResult<()> {
            let text = expect_text(field, value)?;
            match field {
                Field::User => self.user = text,
                Field::Pass => self.pass = text,
            }
            Ok(())
        }
    }

    fn controller() -> FormController<Login> {
        let schema = FormSchema::new()
            .field("user", rules().required())
            .field("pass", rules().min_length(8));
        FormController::new(Login::default(), schema)
    }

    #[test]
    fn errors_hidden_until_touched() {
        let mut form = controller();
        assert!(form.handle_submit(|_| ()).is_err());

        assert!(form.error(Field::User).is_some());
        assert_eq!(form.visible_error(Field::User), None);

        form.touch(Field::User);
        assert_eq!(form.visible_error(Field::User), Some("This field is required"));
    }

    #[test]
    fn blur_without_validation_only_touches() {
        let mut form = controller().with_config(FormConfig {
            validate_on_blur: false,
            ..FormConfig::default()
        });
        form.handle_blur(Field::User);
        assert!(form.is_touched(Field::User));
        assert!(form.errors().is_empty());
    }

    #[test]
    fn change_with_validation_updates_error() {
        let mut form = controller().with_config(FormConfig::eager());
        form.handle_change(Field::Pass, "short").unwrap();
        assert_eq!(form.error(Field::Pass).map(|e| &*e.code), Some("min_length"));

        form.handle_change(Field::Pass, "long enough").unwrap();
        assert!(form.error(Field::Pass).is_none());
        assert!(!form.errors().contains("user"));
    }

    #[test]
    fn dirty_tracks_initial_values() {
        let mut form = controller();
        assert!(!form.is_dirty());
        form.handle_change(Field::User, "neo").unwrap();
        assert!(form.is_dirty());
        form.reset();
        assert!(!form.is_dirty());
    }
}
