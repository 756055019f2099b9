//! Logging setup and error exposure policy for glaze front ends.
//!
//! - **Logging**: installs a `tracing` subscriber with a level and format
//! - **Environment**: development, test or production, and what each may
//!   show a caller when something fails

pub mod environment;
pub mod logging;

pub use environment::{Environment, ENV_VAR, INTERNAL_ERROR_MESSAGE};
pub use logging::{init, LogConfig, LogFormat, LogLevel, LoggingError};
