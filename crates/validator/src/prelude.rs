//! Prelude module for convenient imports.
//!
//! `use forma_validator::prelude::*;` brings in the builder entry point,
//! the schema types and the [`Validate`] trait.
//!
//! ```
//! use forma_validator::prelude::*;
//!
//! let age = rules().required().integer().min(1.0).max(120.0);
//! assert!(age.validate(&FieldValue::from(45)).is_ok());
//! ```

pub use crate::chain::{RuleChain, rules};
pub use crate::error::{RuleError, ValidationError};
pub use crate::rule::{Rule, RuleKind};
pub use crate::schema::{FieldSource, FormSchema, FormValues, ValidationResult};
pub use crate::traits::Validate;
pub use crate::value::{FieldValue, FileHandle, ValueKind};
