//! Rules: one constraint plus its failure message
//!
//! Every rule kind is a variant of [`RuleKind`]. A kind declares which
//! [`ValueKind`]s it inspects; any other value passes untouched. Only
//! `required`, `type_of`, `one_of`, `not_one_of` and `date` look at every
//! value.

use std::borrow::Cow;
use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;

use crate::error::{RuleError, ValidationError};
use crate::traits::Validate;
use crate::value::{FieldValue, ValueKind, format_date, format_number};

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

// Host, then a dot, then a TLD part of at least six `[a-z.]` chars, then an
// optional path.
static URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(https?://)?([0-9a-z.-]+)\.([a-z.]{6,})([/0-9A-Za-z_ .-]*)*/?$").unwrap()
});

static UUID_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$").unwrap()
});

static ALPHABETIC_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-zA-Z]*$").unwrap());

// ============================================================================
// RULE KIND
// ============================================================================

/// The constraint a [`Rule`] checks, with its parameters.
#[derive(Debug, Clone)]
pub enum RuleKind {
    /// Value must be truthy (see [`FieldValue::is_truthy`]).
    Required,
    /// Text must have at least this many characters.
    MinLength(usize),
    /// Text must have at most this many characters.
    MaxLength(usize),
    /// Value must be of this kind.
    TypeOf(ValueKind),
    /// Text must contain a match of the pattern.
    Matches(Regex),
    /// Value must equal one of these.
    OneOf(Vec<FieldValue>),
    /// Value must equal none of these.
    NotOneOf(Vec<FieldValue>),
    /// Text must consist of ASCII letters only.
    Alphabetic,
    /// Text must look like an email address.
    Email,
    /// Text must look like a URL.
    Url,
    /// Text must be a hyphen-grouped UUID.
    Uuid,
    /// Number must have no fractional part.
    Integer,
    /// Number must be greater than zero.
    Positive,
    /// Number must be less than zero.
    Negative,
    /// Number must be at least this.
    Min(f64),
    /// Number must be at most this.
    Max(f64),
    /// Value must be a valid date.
    Date,
    /// Date must not be earlier than this.
    MinDate(DateTime<Utc>),
    /// Date must not be later than this.
    MaxDate(DateTime<Utc>),
}

impl RuleKind {
    /// Compiles a pattern for [`RuleKind::Matches`].
    pub fn matches(pattern: &str) -> Result<Self, RuleError> {
        Regex::new(pattern)
            .map(Self::Matches)
            .map_err(|source| RuleError::InvalidPattern {
                pattern: pattern.to_owned(),
                source,
            })
    }

    /// Stable error code reported by this kind.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::MinLength(_) => "min_length",
            Self::MaxLength(_) => "max_length",
            Self::TypeOf(_) => "type_of",
            Self::Matches(_) => "matches",
            Self::OneOf(_) => "one_of",
            Self::NotOneOf(_) => "not_one_of",
            Self::Alphabetic => "alphabetic",
            Self::Email => "email",
            Self::Url => "url",
            Self::Uuid => "uuid",
            Self::Integer => "integer",
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Min(_) => "min",
            Self::Max(_) => "max",
            Self::Date => "date",
            Self::MinDate(_) => "min_date",
            Self::MaxDate(_) => "max_date",
        }
    }

    /// Whether this kind inspects values of `kind` at all.
    #[must_use]
    pub const fn applies_to(&self, kind: ValueKind) -> bool {
        match self {
            Self::Required | Self::TypeOf(_) | Self::OneOf(_) | Self::NotOneOf(_) | Self::Date => {
                true
            }
            Self::MinLength(_)
            | Self::MaxLength(_)
            | Self::Matches(_)
            | Self::Alphabetic
            | Self::Email
            | Self::Url
            | Self::Uuid => matches!(kind, ValueKind::Text),
            Self::Integer | Self::Positive | Self::Negative | Self::Min(_) | Self::Max(_) => {
                matches!(kind, ValueKind::Number)
            }
            Self::MinDate(_) | Self::MaxDate(_) => matches!(kind, ValueKind::Date),
        }
    }

    /// Returns `true` when `value` satisfies this constraint.
    ///
    /// Values outside [`applies_to`](Self::applies_to) always pass, and so
    /// do invalid dates for the date bounds.
    #[must_use]
    pub fn passes(&self, value: &FieldValue) -> bool {
        if !self.applies_to(value.kind()) {
            return true;
        }

        match (self, value) {
            (Self::Required, v) => v.is_truthy(),
            (Self::TypeOf(expected), v) => v.kind() == *expected,
            (Self::OneOf(allowed), v) => allowed.contains(v),
            (Self::NotOneOf(disallowed), v) => !disallowed.contains(v),
            (Self::Date, v) => v.as_date().is_some(),

            (Self::MinLength(min), FieldValue::Text(s)) => s.chars().count() >= *min,
            (Self::MaxLength(max), FieldValue::Text(s)) => s.chars().count() <= *max,
            (Self::Matches(pattern), FieldValue::Text(s)) => pattern.is_match(s),
            (Self::Alphabetic, FieldValue::Text(s)) => ALPHABETIC_REGEX.is_match(s),
            (Self::Email, FieldValue::Text(s)) => EMAIL_REGEX.is_match(s),
            (Self::Url, FieldValue::Text(s)) => URL_REGEX.is_match(s),
            (Self::Uuid, FieldValue::Text(s)) => UUID_REGEX.is_match(s),

            (Self::Integer, FieldValue::Number(n)) => n.is_finite() && n.fract() == 0.0,
            // NaN compares false both ways, so it passes the bound checks.
            (Self::Positive, FieldValue::Number(n)) => n.is_nan() || *n > 0.0,
            (Self::Negative, FieldValue::Number(n)) => n.is_nan() || *n < 0.0,
            (Self::Min(min), FieldValue::Number(n)) => n.is_nan() || n >= min,
            (Self::Max(max), FieldValue::Number(n)) => n.is_nan() || n <= max,

            (Self::MinDate(min), FieldValue::Date(date)) => date.is_none_or(|d| d >= *min),
            (Self::MaxDate(max), FieldValue::Date(date)) => date.is_none_or(|d| d <= *max),

            _ => true,
        }
    }

    /// The message used when no override is set.
    #[must_use]
    pub fn default_message(&self) -> Cow<'static, str> {
        match self {
            Self::Required => "This field is required".into(),
            Self::MinLength(min) => format!("Must be at least {min} characters").into(),
            Self::MaxLength(max) => format!("Must be {max} characters or less").into(),
            Self::TypeOf(expected) => format!("Must be of type {expected}").into(),
            Self::Matches(pattern) => format!("Must match pattern: /{}/", pattern.as_str()).into(),
            Self::OneOf(allowed) => format!("Value must be one of: {}", join(allowed)).into(),
            Self::NotOneOf(disallowed) => {
                format!("Value cannot be one of: {}", join(disallowed)).into()
            }
            Self::Alphabetic => "Only alphabets are allowed".into(),
            Self::Email => "Invalid email format".into(),
            Self::Url => "Invalid URL format".into(),
            Self::Uuid => "Invalid UUID format".into(),
            Self::Integer => "Value must be an integer".into(),
            Self::Positive => "Value must be a positive number".into(),
            Self::Negative => "Value must be a negative number".into(),
            Self::Min(min) => format!("Value must be at least {}", format_number(*min)).into(),
            Self::Max(max) => format!("Value must be no more than {}", format_number(*max)).into(),
            Self::Date => "Invalid date".into(),
            Self::MinDate(min) => format!("Date must be after {}", format_date(min)).into(),
            Self::MaxDate(max) => format!("Date must be before {}", format_date(max)).into(),
        }
    }

    fn params(&self) -> Vec<(Cow<'static, str>, Cow<'static, str>)> {
        let param = |key: &'static str, value: String| (Cow::Borrowed(key), Cow::Owned(value));
        match self {
            Self::MinLength(min) => vec![param("min", min.to_string())],
            Self::MaxLength(max) => vec![param("max", max.to_string())],
            Self::TypeOf(expected) => vec![param("expected", expected.to_string())],
            Self::Matches(pattern) => vec![param("pattern", pattern.as_str().to_owned())],
            Self::OneOf(values) | Self::NotOneOf(values) => vec![param("values", join(values))],
            Self::Min(min) => vec![param("min", format_number(*min))],
            Self::Max(max) => vec![param("max", format_number(*max))],
            Self::MinDate(min) => vec![param("min", format_date(min))],
            Self::MaxDate(max) => vec![param("max", format_date(max))],
            _ => Vec::new(),
        }
    }
}

fn join(values: &[FieldValue]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

// ============================================================================
// RULE
// ============================================================================

/// A [`RuleKind`] with an optional override message.
///
/// # Examples
///
/// ```
/// use forma_validator::{FieldValue, Rule, RuleKind};
///
/// let rule = Rule::new(RuleKind::MinLength(3));
/// let error = rule.apply(&"ab".into()).unwrap();
/// assert_eq!(error.message(), "Must be at least 3 characters");
///
/// let rule = rule.with_message("Too short");
/// assert_eq!(rule.apply(&"ab".into()).unwrap().message(), "Too short");
/// assert!(rule.apply(&FieldValue::Number(1.0)).is_none());
/// ```
#[derive(Debug, Clone)]
pub struct Rule {
    kind: RuleKind,
    message: Option<Cow<'static, str>>,
}

impl Rule {
    /// Creates a rule that reports the kind's default message.
    #[must_use]
    pub const fn new(kind: RuleKind) -> Self {
        Self {
            kind,
            message: None,
        }
    }

    /// Replaces the failure message.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// The constraint checked by this rule.
    #[must_use]
    pub const fn kind(&self) -> &RuleKind {
        &self.kind
    }

    /// Shorthand for `self.kind().code()`.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// The override message, if any.
    #[must_use]
    pub fn override_message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Checks `value`, returning the failure if it is rejected.
    #[must_use]
    pub fn apply(&self, value: &FieldValue) -> Option<ValidationError> {
        if self.kind.passes(value) {
            return None;
        }

        let message = self
            .message
            .clone()
            .unwrap_or_else(|| self.kind.default_message());
        let mut error = ValidationError::new(self.kind.code(), message);
        error.params = self.kind.params();
        Some(error)
    }
}

impl From<RuleKind> for Rule {
    fn from(kind: RuleKind) -> Self {
        Self::new(kind)
    }
}

impl Validate for Rule {
    type Input = FieldValue;

    fn validate(&self, input: &FieldValue) -> Result<(), ValidationError> {
        self.apply(input).map_or(Ok(()), Err)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;

    fn message(kind: RuleKind, value: impl Into<FieldValue>) -> Option<String> {
        Rule::new(kind)
            .apply(&value.into())
            .map(|e| e.message.into_owned())
    }

    #[rstest]
    #[case::empty(FieldValue::from(""), true)]
    #[case::null(FieldValue::Null, true)]
    #[case::false_(FieldValue::from(false), true)]
    #[case::zero(FieldValue::from(0), true)]
    #[case::text(FieldValue::from("x"), false)]
    #[case::true_(FieldValue::from(true), false)]
    fn required(#[case] value: FieldValue, #[case] fails: bool) {
        let result = message(RuleKind::Required, value);
        assert_eq!(result.is_some(), fails);
        if fails {
            assert_eq!(result.as_deref(), Some("This field is required"));
        }
    }

    #[test]
    fn length_bounds() {
        assert_eq!(
            message(RuleKind::MinLength(3), "ab").as_deref(),
            Some("Must be at least 3 characters")
        );
        assert_eq!(message(RuleKind::MinLength(3), "abc"), None);
        assert_eq!(
            message(RuleKind::MaxLength(2), "abc").as_deref(),
            Some("Must be 2 characters or less")
        );
        // Counted in characters, not bytes.
        assert_eq!(message(RuleKind::MaxLength(2), "éé"), None);
    }

    #[test]
    fn string_rules_skip_other_kinds() {
        for kind in [
            RuleKind::MinLength(10),
            RuleKind::Email,
            RuleKind::Url,
            RuleKind::Uuid,
            RuleKind::Alphabetic,
            RuleKind::matches("^x$").unwrap(),
        ] {
            assert_eq!(message(kind.clone(), 5), None, "{kind:?}");
            assert_eq!(message(kind, FieldValue::Null), None);
        }
    }

    #[test]
    fn number_rules_skip_text() {
        for kind in [
            RuleKind::Integer,
            RuleKind::Positive,
            RuleKind::Negative,
            RuleKind::Min(10.0),
            RuleKind::Max(-10.0),
        ] {
            assert_eq!(message(kind, "3"), None);
        }
    }

    #[test]
    fn type_of() {
        assert_eq!(message(RuleKind::TypeOf(ValueKind::Text), "a"), None);
        assert_eq!(
            message(RuleKind::TypeOf(ValueKind::Text), 1).as_deref(),
            Some("Must be of type string")
        );
        assert_eq!(
            message(RuleKind::TypeOf(ValueKind::Number), FieldValue::Null).as_deref(),
            Some("Must be of type number")
        );
    }

    #[test]
    fn matches_is_a_search() {
        let kind = RuleKind::matches(r"\d+").unwrap();
        assert_eq!(message(kind.clone(), "abc123"), None);
        assert_eq!(
            message(kind, "abc").as_deref(),
            Some(r"Must match pattern: /\d+/")
        );
    }

    #[test]
    fn matches_rejects_bad_pattern() {
        assert!(matches!(
            RuleKind::matches("(unclosed"),
            Err(RuleError::InvalidPattern { .. })
        ));
    }

    #[test]
    fn membership() {
        let colors = vec![FieldValue::from("red"), FieldValue::from("blue")];
        assert_eq!(message(RuleKind::OneOf(colors.clone()), "red"), None);
        assert_eq!(
            message(RuleKind::OneOf(colors.clone()), "green").as_deref(),
            Some("Value must be one of: red, blue")
        );
        assert_eq!(message(RuleKind::NotOneOf(colors.clone()), "green"), None);
        assert_eq!(
            message(RuleKind::NotOneOf(colors), "blue").as_deref(),
            Some("Value cannot be one of: red, blue")
        );
    }

    #[test]
    fn membership_does_not_type_guard() {
        let allowed = vec![FieldValue::from("1")];
        assert!(message(RuleKind::OneOf(allowed), 1).is_some());
        let nan = vec![FieldValue::from(f64::NAN)];
        assert!(message(RuleKind::NotOneOf(nan), f64::NAN).is_some());
    }

    #[rstest]
    #[case("abcXYZ", true)]
    #[case("", true)]
    #[case("abc1", false)]
    #[case("ab c", false)]
    #[case("é", false)]
    fn alphabetic(#[case] input: &str, #[case] ok: bool) {
        assert_eq!(message(RuleKind::Alphabetic, input).is_none(), ok);
    }

    #[rstest]
    #[case("a@b.com", true)]
    #[case("first.last@sub.example.org", true)]
    #[case("a@b", false)]
    #[case("a b@c.com", false)]
    #[case("@b.com", false)]
    #[case("", false)]
    fn email(#[case] input: &str, #[case] ok: bool) {
        assert_eq!(message(RuleKind::Email, input).is_none(), ok);
    }

    #[rstest]
    #[case("https://example.company", true)]
    #[case("example.network/path/to", true)]
    #[case("http://my-site.travel.co/", true)]
    #[case("https://example.com", false)]
    #[case("not a url", false)]
    fn url_requires_long_tld(#[case] input: &str, #[case] ok: bool) {
        assert_eq!(message(RuleKind::Url, input).is_none(), ok, "{input}");
    }

    #[rstest]
    #[case("123e4567-e89b-12d3-a456-426614174000", true)]
    #[case("123E4567-E89B-12D3-A456-426614174000", true)]
    #[case("123e4567e89b12d3a456426614174000", false)]
    #[case("123e4567-e89b-12d3-a456-42661417400g", false)]
    fn uuid(#[case] input: &str, #[case] ok: bool) {
        assert_eq!(message(RuleKind::Uuid, input).is_none(), ok);
    }

    #[test]
    fn numeric_rules() {
        assert_eq!(message(RuleKind::Integer, 4), None);
        assert_eq!(
            message(RuleKind::Integer, 4.5).as_deref(),
            Some("Value must be an integer")
        );
        assert!(message(RuleKind::Integer, f64::NAN).is_some());
        assert!(message(RuleKind::Integer, f64::INFINITY).is_some());

        assert!(message(RuleKind::Positive, 0).is_some());
        assert_eq!(message(RuleKind::Positive, 0.1), None);
        assert!(message(RuleKind::Negative, 0).is_some());
        assert_eq!(message(RuleKind::Negative, -3), None);
        assert_eq!(message(RuleKind::Positive, f64::NAN), None);

        assert_eq!(
            message(RuleKind::Min(1.0), 0).as_deref(),
            Some("Value must be at least 1")
        );
        assert_eq!(message(RuleKind::Min(1.0), 1), None);
        assert_eq!(
            message(RuleKind::Max(120.0), 150).as_deref(),
            Some("Value must be no more than 120")
        );
        assert_eq!(message(RuleKind::Max(120.0), 120), None);
    }

    #[test]
    fn date_rules() {
        let jan = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let feb = Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap();

        assert_eq!(message(RuleKind::Date, jan), None);
        assert_eq!(
            message(RuleKind::Date, FieldValue::Date(None)).as_deref(),
            Some("Invalid date")
        );
        // `date` applies to every kind.
        assert!(message(RuleKind::Date, "2024-01-01").is_some());

        assert_eq!(
            message(RuleKind::MinDate(feb), jan).as_deref(),
            Some("Date must be after 2024-02-01T00:00:00Z")
        );
        assert_eq!(message(RuleKind::MinDate(jan), feb), None);
        assert_eq!(
            message(RuleKind::MaxDate(jan), feb).as_deref(),
            Some("Date must be before 2024-01-01T00:00:00Z")
        );
        assert_eq!(message(RuleKind::MaxDate(jan), FieldValue::Date(None)), None);
    }

    #[test]
    fn error_carries_code_and_params() {
        let error = Rule::new(RuleKind::Min(18.0))
            .with_message("Too young")
            .apply(&FieldValue::from(12))
            .unwrap();
        assert_eq!(error.code, "min");
        assert_eq!(error.message(), "Too young");
        assert_eq!(error.param("min"), Some("18"));
    }
}
