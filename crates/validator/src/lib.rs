//! # forma-validator
//!
//! Declarative, chainable validation rules for form fields.
//!
//! ## Quick Start
//!
//! ```rust
//! use forma_validator::prelude::*;
//!
//! let schema = FormSchema::new()
//!     .field("name", rules().required().min_length(3))
//!     .field("email", rules().email())
//!     .field("age", rules().min(1.0).max(120.0));
//!
//! let values = FormValues::new()
//!     .with("name", "Al")
//!     .with("email", "x@y.com")
//!     .with("age", 150);
//!
//! let result = schema.validate(&values);
//! assert_eq!(result.message("name"), Some("Must be at least 3 characters"));
//! assert_eq!(result.message("email"), None);
//! assert_eq!(result.message("age"), Some("Value must be no more than 120"));
//! ```
//!
//! ## Building Blocks
//!
//! - [`FieldValue`]: the tagged value of one field (text, number, boolean,
//!   date, file, null)
//! - [`Rule`] / [`RuleKind`]: one constraint and its message
//! - [`RuleChain`]: ordered rules for one field, first failure wins
//! - [`FormSchema`]: field name to chain map producing a [`ValidationResult`]
//!
//! Rules only inspect the value kinds they are defined for: `min_length`
//! on a number, or `min` on a string, passes.

pub mod chain;
pub mod error;
pub mod json;
mod macros;
pub mod prelude;
pub mod rule;
pub mod schema;
pub mod traits;
pub mod value;

pub use chain::{RuleChain, rules};
pub use error::{RuleError, ValidationError};
pub use rule::{Rule, RuleKind};
pub use schema::{FieldSource, FormSchema, FormValues, ValidationResult};
pub use traits::Validate;
pub use value::{FieldValue, FileHandle, ValueKind};
