//! # forma-log
//!
//! `tracing` subscriber setup for forma binaries. Library crates only emit
//! events; a binary calls [`init`] once at startup.
//!
//! ```no_run
//! use forma_log::{LogConfig, Format};
//!
//! let config = LogConfig::from_env().with_format(Format::Json);
//! forma_log::init(&config)?;
//! # Ok::<(), forma_log::LogError>(())
//! ```

mod builder;
pub mod config;
pub mod error;

pub use builder::{build_filter, init, init_from_env};
pub use config::{Format, LOG_ENV, LOG_FORMAT_ENV, LogConfig};
pub use error::{LogError, LogResult};
