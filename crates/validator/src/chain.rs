//! Rule chains
//!
//! A [`RuleChain`] is the ordered list of rules for one field. Building is a
//! consuming fluent API; evaluation walks the rules in declaration order and
//! stops at the first failure, so a field reports at most one message per
//! pass.
//!
//! ```
//! use forma_validator::prelude::*;
//!
//! let name = rules()
//!     .required()
//!     .with_message("Name is required")
//!     .min_length(3)
//!     .max_length(12)
//!     .is_alphabetic();
//!
//! assert_eq!(
//!     name.first_error(&"".into()).map(|e| e.message.into_owned()),
//!     Some("Name is required".to_owned())
//! );
//! assert!(name.validate(&"Alice".into()).is_ok());
//! ```

use std::borrow::Cow;

use chrono::{DateTime, Utc};
use regex::Regex;

use crate::error::{RuleError, ValidationError};
use crate::rule::{Rule, RuleKind};
use crate::traits::Validate;
use crate::value::{FieldValue, ValueKind};

/// Starts an empty [`RuleChain`].
#[must_use]
pub fn rules() -> RuleChain {
    RuleChain::new()
}

/// Ordered, short-circuiting list of rules for one field.
///
/// An empty chain accepts every value.
#[derive(Debug, Clone, Default)]
pub struct RuleChain {
    rules: Vec<Rule>,
}

impl RuleChain {
    /// Creates an empty chain.
    #[must_use]
    pub const fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Appends a prebuilt rule.
    #[must_use = "builder methods must be chained or built"]
    pub fn rule(mut self, rule: impl Into<Rule>) -> Self {
        self.rules.push(rule.into());
        self
    }

    /// Overrides the message of the most recently added rule.
    ///
    /// Does nothing on an empty chain.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        if let Some(last) = self.rules.pop() {
            self.rules.push(last.with_message(message));
        }
        self
    }

    /// Fails on falsy values: null, `""`, `0`, `false`, no file.
    pub fn required(self) -> Self {
        self.rule(RuleKind::Required)
    }

    /// Text must have at least `min` characters.
    pub fn min_length(self, min: usize) -> Self {
        self.rule(RuleKind::MinLength(min))
    }

    /// Text must have at most `max` characters.
    pub fn max_length(self, max: usize) -> Self {
        self.rule(RuleKind::MaxLength(max))
    }

    /// Value must be of the given kind.
    pub fn type_of(self, expected: ValueKind) -> Self {
        self.rule(RuleKind::TypeOf(expected))
    }

    /// Text must contain a match of `pattern`.
    pub fn matches(self, pattern: Regex) -> Self {
        self.rule(RuleKind::Matches(pattern))
    }

    /// Like [`matches`](Self::matches), compiling `pattern` first.
    pub fn try_matches(self, pattern: &str) -> Result<Self, RuleError> {
        Ok(self.rule(RuleKind::matches(pattern)?))
    }

    /// Value must equal one of `allowed`.
    pub fn one_of<I>(self, allowed: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<FieldValue>,
    {
        self.rule(RuleKind::OneOf(allowed.into_iter().map(Into::into).collect()))
    }

    /// Value must equal none of `disallowed`.
    pub fn not_one_of<I>(self, disallowed: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<FieldValue>,
    {
        self.rule(RuleKind::NotOneOf(
            disallowed.into_iter().map(Into::into).collect(),
        ))
    }

    /// Text must be ASCII letters only; the empty string passes.
    pub fn is_alphabetic(self) -> Self {
        self.rule(RuleKind::Alphabetic)
    }

    /// Text must look like `local@domain.tld`.
    pub fn email(self) -> Self {
        self.rule(RuleKind::Email)
    }

    /// Text must be a URL with a TLD of six or more characters.
    pub fn url(self) -> Self {
        self.rule(RuleKind::Url)
    }

    /// Text must be a UUID in `8-4-4-4-12` hex groups.
    pub fn uuid(self) -> Self {
        self.rule(RuleKind::Uuid)
    }

    /// Number must be a whole number.
    pub fn integer(self) -> Self {
        self.rule(RuleKind::Integer)
    }

    /// Number must be greater than zero.
    pub fn positive(self) -> Self {
        self.rule(RuleKind::Positive)
    }

    /// Number must be less than zero.
    pub fn negative(self) -> Self {
        self.rule(RuleKind::Negative)
    }

    /// Number must be at least `min`.
    pub fn min(self, min: f64) -> Self {
        self.rule(RuleKind::Min(min))
    }

    /// Number must be at most `max`.
    pub fn max(self, max: f64) -> Self {
        self.rule(RuleKind::Max(max))
    }

    /// Value must be a valid date.
    pub fn date(self) -> Self {
        self.rule(RuleKind::Date)
    }

    /// Date must not be earlier than `min`.
    pub fn min_date(self, min: DateTime<Utc>) -> Self {
        self.rule(RuleKind::MinDate(min))
    }

    /// Date must not be later than `max`.
    pub fn max_date(self, max: DateTime<Utc>) -> Self {
        self.rule(RuleKind::MaxDate(max))
    }

    /// Returns the first failing rule's error, in declaration order.
    #[must_use]
    pub fn first_error(&self, value: &FieldValue) -> Option<ValidationError> {
        self.rules.iter().find_map(|rule| rule.apply(value))
    }

    /// The rules, in declaration order.
    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Error codes of the rules, in declaration order.
    pub fn codes(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.iter().map(Rule::code)
    }

    /// Number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns `true` for a chain with no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Validate for RuleChain {
    type Input = FieldValue;

    fn validate(&self, input: &FieldValue) -> Result<(), ValidationError> {
        self.first_error(input).map_or(Ok(()), Err)
    }
}

impl FromIterator<Rule> for RuleChain {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
