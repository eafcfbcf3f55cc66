//! # forma-form
//!
//! Typed form state on top of [`forma_validator`].
//!
//! A form is a model struct plus a field enum. [`FormController`] keeps the
//! current values, the last validation result and which fields have been
//! touched, and gates submission on validity.
//!
//! ```rust
//! use forma_form::prelude::*;
//! use forma_validator::{FieldValue, FormSchema, rules};
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
//! enum Field {
//!     Name,
//! }
//!
//! impl FormField for Field {
//!     const ALL: &'static [Self] = &[Self::Name];
//!
//!     fn name(self) -> &'static str {
//!         "name"
//!     }
//! }
//!
//! #[derive(Debug, Clone, Default)]
//! struct Signup {
//!     name: String,
//! }
//!
//! impl FormModel for Signup {
//!     type Field = Field;
//!
//!     fn value(&self, _: Field) -> FieldValue {
//!         self.name.as_str().into()
//!     }
//!
//!     fn set_value(&mut self, field: Field, value: FieldValue) -> FormResult<()> {
//!         self.name = expect_text(field, value)?;
//!         Ok(())
//!     }
//! }
//!
//! let schema = FormSchema::new().field("name", rules().required().min_length(3));
//! let mut form = FormController::new(Signup::default(), schema);
//!
//! form.handle_change(Field::Name, "Al")?;
//! form.handle_blur(Field::Name);
//! assert_eq!(form.visible_error(Field::Name), Some("Must be at least 3 characters"));
//!
//! form.handle_change(Field::Name, "Alice")?;
//! let name = form.handle_submit(|values| values.name.clone())?;
//! assert_eq!(name, "Alice");
//! # Ok::<(), FormError>(())
//! ```

pub mod config;
pub mod controller;
pub mod error;
pub mod model;

pub use config::FormConfig;
pub use controller::FormController;
pub use error::{FormError, FormResult};
pub use model::{FormField, FormModel, ModelSource, expect_bool, expect_number, expect_text};

/// Common imports for defining and driving forms.
pub mod prelude {
    pub use crate::{
        FormConfig, FormController, FormError, FormField, FormModel, FormResult, expect_bool,
        expect_number, expect_text,
    };
}
