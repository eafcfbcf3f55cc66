//! Logging setup errors

/// Result alias for logger setup.
pub type LogResult<T> = Result<T, LogError>;

/// Failures while installing the global subscriber.
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    /// The level string is not a valid filter directive.
    #[error("invalid log filter `{filter}`: {reason}")]
    Filter {
        /// The rejected filter string.
        filter: String,
        /// Parser message.
        reason: String,
    },

    /// A global subscriber is already installed.
    #[error("failed to install logger: {0}")]
    Init(String),

    /// Unknown output format name.
    #[error("unknown log format `{0}` (expected pretty, compact or json)")]
    Format(String),
}
