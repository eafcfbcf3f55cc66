//! Controller configuration

use serde::{Deserialize, Serialize};

use crate::error::FormResult;

/// When the controller validates and what it does with the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Run validation when a field loses focus.
    pub validate_on_blur: bool,

    /// Revalidate a field every time its value changes.
    pub validate_on_change: bool,

    /// Drop a field's error as soon as its value changes.
    pub clear_error_on_change: bool,

    /// Mark every field touched on submit so all errors become visible.
    pub touch_all_on_submit: bool,

    /// Restore the initial values after a successful submit.
    pub reset_on_submit: bool,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            validate_on_blur: true,
            validate_on_change: false,
            clear_error_on_change: false,
            touch_all_on_submit: false,
            reset_on_submit: false,
        }
    }
}

impl FormConfig {
    /// Parses a configuration from JSON. Missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::Config`](crate::FormError::Config) when the
    /// text is not a valid configuration object.
    pub fn from_json(text: &str) -> FormResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Validates eagerly: on every change and on blur, with all errors
    /// shown after submit.
    #[must_use]
    pub fn eager() -> Self {
        Self {
            validate_on_change: true,
            touch_all_on_submit: true,
            ..Self::default()
        }
    }
}
