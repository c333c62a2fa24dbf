//! Error types for the CLI application.
//!
//! Every command handler returns [`CliError`]; engine errors are folded in
//! through `From` conversions so handlers can use `?` throughout.

use std::fmt;

use dealkit_engine::errors::{DealError, LoadError, ValidationError};

use crate::config::ConfigError;

/// Custom error type for CLI operations.
#[derive(Debug)]
pub enum CliError {
    /// I/O error (stdout/stderr writes, runtime startup)
    Io(std::io::Error),

    /// Configuration error
    Config(String),

    /// Deck lookup failed
    Load(LoadError),

    /// Deck definition rejected while building cards
    Validation(ValidationError),

    /// Dealing preconditions violated
    Deal(DealError),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(e) => write!(f, "I/O error: {}", e),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::Load(e) => write!(f, "{}", e),
            CliError::Validation(e) => write!(f, "Invalid deck: {}", e),
            CliError::Deal(e) => write!(f, "Cannot deal: {}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io(e) => Some(e),
            CliError::Load(e) => Some(e),
            CliError::Validation(e) => Some(e),
            CliError::Deal(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(error: std::io::Error) -> Self {
        CliError::Io(error)
    }
}

impl From<LoadError> for CliError {
    fn from(error: LoadError) -> Self {
        CliError::Load(error)
    }
}

impl From<ValidationError> for CliError {
    fn from(error: ValidationError) -> Self {
        CliError::Validation(error)
    }
}

impl From<DealError> for CliError {
    fn from(error: DealError) -> Self {
        CliError::Deal(error)
    }
}

impl From<ConfigError> for CliError {
    fn from(error: ConfigError) -> Self {
        CliError::Config(error.to_string())
    }
}
