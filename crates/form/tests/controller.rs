//! Controller behaviour over a small registration form.

use forma_form::prelude::*;
use forma_validator::{FieldValue, FormSchema, ValueKind, rules};
use pretty_assertions::assert_eq;
use rstest::{fixture, rstest};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Field {
    Name,
    Age,
    Terms,
}

impl FormField for Field {
    const ALL: &'static [Self] = &[Self::Name, Self::Age, Self::Terms];

    fn name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Age => "age",
            Self::Terms => "terms",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
struct Registration {
    name: String,
    age: Option<f64>,
    terms: bool,
}

impl FormModel for Registration {
    type Field = Field;

    fn value(&self, field: Field) -> FieldValue {
        match field {
            Field::Name => self.name.as_str().into(),
            Field::Age => self.age.into(),
            Field::Terms => self.terms.into(),
        }
    }

    fn set_value(&mut self, field: Field, value: FieldValue) -> FormResult<()> {
        match field {
            Field::Name => self.name = expect_text(field, value)?,
            Field::Age => self.age = expect_number(field, value)?,
            Field::Terms => self.terms = expect_bool(field, value)?,
        }
        Ok(())
    }
}

fn schema() -> FormSchema {
    FormSchema::new()
        .field(
            "name",
            rules()
                .required()
                .with_message("Name is required")
                .min_length(3)
                .is_alphabetic(),
        )
        .field("age", rules().integer().min(18.0))
        .field(
            "terms",
            rules().required().with_message("Please accept the terms"),
        )
}

#[fixture]
fn form() -> FormController<Registration> {
    FormController::new(Registration::default(), schema())
}

fn fill(form: &mut FormController<Registration>) {
    form.handle_change(Field::Name, "Alice").unwrap();
    form.handle_change(Field::Age, 30).unwrap();
    form.handle_change(Field::Terms, true).unwrap();
}

#[rstest]
fn blur_refreshes_only_the_blurred_field(mut form: FormController<Registration>) {
    form.handle_blur(Field::Name);
    assert_eq!(form.visible_error(Field::Name), Some("Name is required"));
    assert!(!form.errors().contains("terms"));

    // Fixing the name and blurring another field keeps the stale name error.
    form.handle_change(Field::Name, "Alice").unwrap();
    form.handle_blur(Field::Terms);
    assert_eq!(form.visible_error(Field::Name), Some("Name is required"));
    assert_eq!(form.visible_error(Field::Terms), Some("Please accept the terms"));

    form.handle_blur(Field::Name);
    assert_eq!(form.visible_error(Field::Name), None);
}

#[rstest]
fn submit_is_withheld_while_invalid(mut form: FormController<Registration>) {
    form.handle_change(Field::Name, "Al").unwrap();

    let mut called = false;
    let err = form.handle_submit(|_| called = true).unwrap_err();

    assert!(!called);
    assert_eq!(err.invalid_fields(), ["name", "terms"]);
    assert_eq!(form.submit_count(), 1);
    assert_eq!(form.error(Field::Name).map(|e| &*e.code), Some("min_length"));
    // Not touched yet, so nothing is displayed.
    assert_eq!(form.visible_error(Field::Name), None);
}

#[rstest]
fn submit_touches_all_when_configured(form: FormController<Registration>) {
    let mut form = form.with_config(FormConfig {
        touch_all_on_submit: true,
        ..FormConfig::default()
    });
    assert!(form.handle_submit(|_| ()).is_err());

    assert!(Field::ALL.iter().all(|&f| form.is_touched(f)));
    assert_eq!(form.visible_error(Field::Name), Some("Name is required"));
    assert_eq!(form.visible_error(Field::Age), None);
}

#[rstest]
fn valid_submit_hands_over_values(mut form: FormController<Registration>) {
    fill(&mut form);
    assert!(form.is_valid());

    let submitted = form.handle_submit(Registration::clone).unwrap();
    assert_eq!(
        submitted,
        Registration {
            name: "Alice".into(),
            age: Some(30.0),
            terms: true,
        }
    );
    assert!(form.errors().is_valid());
    assert_eq!(form.errors().len(), 3);
}

#[rstest]
fn reset_on_submit_restores_initial_values(form: FormController<Registration>) {
    let mut form = form.with_config(FormConfig {
        reset_on_submit: true,
        ..FormConfig::default()
    });
    fill(&mut form);
    form.handle_blur(Field::Name);

    form.handle_submit(|_| ()).unwrap();

    assert_eq!(form.values(), &Registration::default());
    assert!(!form.is_touched(Field::Name));
    assert!(form.errors().is_empty());
    assert_eq!(form.submit_count(), 1);
}

#[rstest]
fn clear_error_on_change(form: FormController<Registration>) {
    let mut form = form.with_config(FormConfig {
        clear_error_on_change: true,
        ..FormConfig::default()
    });
    form.handle_blur(Field::Name);
    assert!(form.error(Field::Name).is_some());

    form.handle_change(Field::Name, "x").unwrap();
    assert!(form.error(Field::Name).is_none());
    assert!(form.errors().contains("name"));
}

#[rstest]
fn number_field_parses_text_input(mut form: FormController<Registration>) {
    form.handle_change(Field::Age, "17").unwrap();
    form.handle_blur(Field::Age);
    assert_eq!(form.visible_error(Field::Age), Some("Value must be at least 18"));

    form.handle_change(Field::Age, "17.5").unwrap();
    form.handle_blur(Field::Age);
    assert_eq!(form.visible_error(Field::Age), Some("Value must be an integer"));

    form.handle_change(Field::Age, "").unwrap();
    form.handle_blur(Field::Age);
    assert_eq!(form.visible_error(Field::Age), None);
}

#[rstest]
fn type_mismatch_leaves_value(mut form: FormController<Registration>) {
    form.handle_change(Field::Terms, true).unwrap();
    let err = form.handle_change(Field::Terms, "yes").unwrap_err();

    assert!(matches!(
        err,
        FormError::TypeMismatch {
            field: "terms",
            expected: ValueKind::Bool,
            actual: ValueKind::Text,
        }
    ));
    assert!(form.values().terms);
}

#[rstest]
fn dynamic_fields_join_the_next_validation(mut form: FormController<Registration>) {
    fill(&mut form);
    form.schema_mut().insert("nickname", rules().required());

    // `nickname` is not part of the model, so it is validated as null.
    let err = form.handle_submit(|_| ()).unwrap_err();
    assert_eq!(err.invalid_fields(), ["nickname"]);

    form.schema_mut().remove("nickname");
    assert!(form.handle_submit(|_| ()).is_ok());
    assert_eq!(form.submit_count(), 2);
}
