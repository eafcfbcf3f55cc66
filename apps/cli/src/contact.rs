//! The demo contact form.

use forma_form::{FormField, FormModel, FormResult, expect_bool, expect_text};
use forma_validator::{FieldValue, FormSchema, rules, schema};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Url,
    Name,
    Email,
    Phone,
    Job,
    Gender,
    Address,
}

impl FormField for ContactField {
    const ALL: &'static [Self] = &[
        Self::Url,
        Self::Name,
        Self::Email,
        Self::Phone,
        Self::Job,
        Self::Gender,
        Self::Address,
    ];

    fn name(self) -> &'static str {
        match self {
            Self::Url => "url",
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Job => "job",
            Self::Gender => "gender",
            Self::Address => "address",
        }
    }
}

/// Values of the contact form. `job` is a checkbox.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub url: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub job: bool,
    pub gender: String,
    pub address: String,
}

impl FormModel for ContactForm {
    type Field = ContactField;

    fn value(&self, field: ContactField) -> FieldValue {
        match field {
            ContactField::Url => self.url.as_str().into(),
            ContactField::Name => self.name.as_str().into(),
            ContactField::Email => self.email.as_str().into(),
            ContactField::Phone => self.phone.as_str().into(),
            ContactField::Job => self.job.into(),
            ContactField::Gender => self.gender.as_str().into(),
            ContactField::Address => self.address.as_str().into(),
        }
    }

    fn set_value(&mut self, field: ContactField, value: FieldValue) -> FormResult<()> {
        let slot = match field {
            ContactField::Job => {
                self.job = expect_bool(field, checkbox(value))?;
                return Ok(());
            }
            ContactField::Url => &mut self.url,
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Phone => &mut self.phone,
            ContactField::Gender => &mut self.gender,
            ContactField::Address => &mut self.address,
        };
        *slot = expect_text(field, value)?;
        Ok(())
    }
}

/// Maps the text a checkbox can be given on the command line to a boolean.
/// Anything else is passed through for the type check to reject.
fn checkbox(value: FieldValue) -> FieldValue {
    match value.as_text().map(str::to_ascii_lowercase).as_deref() {
        Some("true" | "on" | "yes" | "1") => FieldValue::Bool(true),
        Some("false" | "off" | "no" | "0" | "") => FieldValue::Bool(false),
        _ => value,
    }
}

pub fn schema() -> FormSchema {
    schema! {
        "url" => rules().url(),
        "name" => rules()
            .required().with_message("Name is required")
            .min_length(3).with_message("Name must be at least 3 characters")
            .max_length(12).with_message("Name cannot exceed 12 characters")
            .is_alphabetic().with_message("Name can only contain letters"),
        "email" => rules().email(),
        "address" => rules()
            .min_length(12).with_message("Address must be at least 12 characters")
            .max_length(50).with_message("Address cannot exceed 50 characters"),
        "phone" => rules()
            .required().with_message("Phone is required")
            .min_length(10).with_message("Phone must be at least 10 digits")
            .max_length(10).with_message("Phone cannot exceed 10 digits"),
        "gender" => rules().required().with_message("Gender is required"),
    }
}
