//! Deployment environment.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::logging::LogLevel;

/// Environment variable selecting the deployment environment.
pub const ENV_VAR: &str = "GLAZE_ENV";

/// What production callers see instead of an error's details.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Deployment environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Test,
    Production,
}

impl Environment {
    /// Read from `GLAZE_ENV`, defaulting to development.
    pub fn from_env() -> Self {
        std::env::var(ENV_VAR)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_default()
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }

    /// Log level used when none is configured.
    pub fn default_log_level(&self) -> LogLevel {
        if self.is_production() {
            LogLevel::Warn
        } else {
            LogLevel::Debug
        }
    }

    /// The message a caller may see for an error.
    pub fn public_message(&self, error: &dyn std::error::Error) -> String {
        if self.is_production() {
            INTERNAL_ERROR_MESSAGE.to_string()
        } else {
            error.to_string()
        }
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "test" => Ok(Environment::Test),
            "production" | "prod" => Ok(Environment::Production),
            other => Err(format!("unknown environment: {}", other)),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Test => write!(f, "test"),
            Self::Production => write!(f, "production"),
        }
    }
}
