//! Declaration macros.
//!
//! - [`schema!`]: declare a [`FormSchema`](crate::FormSchema) field by field
//! - [`chain!`]: concatenate rules into a [`RuleChain`](crate::RuleChain)

// ============================================================================
// SCHEMA MACRO
// ============================================================================

/// Declares a [`FormSchema`](crate::FormSchema) in field order.
///
/// ```
/// use forma_validator::{prelude::*, schema};
///
/// let schema = schema! {
///     "name" => rules().required().min_length(3),
///     "email" => rules().email(),
/// };
///
/// assert_eq!(schema.names().collect::<Vec<_>>(), ["name", "email"]);
/// ```
#[macro_export]
macro_rules! schema {
    () => {
        $crate::FormSchema::new()
    };
    ($($name:expr => $chain:expr),+ $(,)?) => {{
        let mut schema = $crate::FormSchema::new();
        $(
            schema.insert($name, $chain);
        )+
        schema
    }};
}

// ============================================================================
// CHAIN MACRO
// ============================================================================

/// Builds a [`RuleChain`](crate::RuleChain) from rule kinds or rules, in
/// order.
///
/// ```
/// use forma_validator::{chain, FieldValue, RuleKind, Validate};
///
/// let zip = chain![RuleKind::Required, RuleKind::MinLength(5), RuleKind::MaxLength(5)];
/// assert!(zip.validate(&FieldValue::from("12345")).is_ok());
/// ```
#[macro_export]
macro_rules! chain {
    () => {
        $crate::RuleChain::new()
    };
    ($($rule:expr),+ $(,)?) => {
        $crate::RuleChain::new()$(.rule($rule))+
    };
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use crate::{FieldValue, FormValues, Rule, RuleKind, Validate, rules};

    #[test]
    fn schema_macro_keeps_order() {
        let schema = schema! {
            "phone" => rules().required(),
            "address" => rules().min_length(12),
        };
        assert_eq!(schema.names().collect::<Vec<_>>(), ["phone", "address"]);

        let result = schema.validate(&FormValues::new());
        assert_eq!(result.failed_fields(), ["phone"]);
    }

    #[test]
    fn empty_schema_macro() {
        let schema = schema!();
        assert!(schema.is_empty());
        assert!(schema.validate(&FormValues::new()).is_valid());
    }

    #[test]
    fn chain_macro_mixes_kinds_and_rules() {
        let chain = chain![
            RuleKind::Required,
            Rule::new(RuleKind::Alphabetic).with_message("Letters only"),
        ];
        assert_eq!(chain.len(), 2);
        let err = chain.validate(&FieldValue::from("abc1")).unwrap_err();
        assert_eq!(err.message(), "Letters only");
    }
}
