use thiserror::Error;

use crate::config::ConfigError;

/// Error types for ownership resolution
#[derive(Debug, Clone, Error)]
pub enum DeedTraceError {
    #[error("No property matched {0}")]
    NotFound(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Invalid property record {id}: {reason}")]
    InvalidRecord { id: String, reason: String },

    #[error("Failed to load property data from {source_name}: {message}")]
    DataSource { source_name: String, message: String },

    #[error("Invalid selection: {0}")]
    InvalidSelection(String),
}

/// Result type for deedtrace operations
pub type DeedTraceResult<T> = Result<T, DeedTraceError>;

impl From<ConfigError> for DeedTraceError {
    fn from(err: ConfigError) -> Self {
        DeedTraceError::InvalidConfiguration(err.to_string())
    }
}

/// Recoverable vs. non-recoverable errors
pub trait RecoverableError {
    fn is_recoverable(&self) -> bool;
    fn recovery_strategy(&self) -> Option<String>;
}

impl RecoverableError for DeedTraceError {
    fn is_recoverable(&self) -> bool {
        matches!(
            self,
            DeedTraceError::NotFound(_) | DeedTraceError::InvalidSelection(_)
        )
    }

    fn recovery_strategy(&self) -> Option<String> {
        match self {
            DeedTraceError::NotFound(_) => {
                Some("Widen the tolerance or try a shorter address fragment".to_string())
            }
            DeedTraceError::InvalidSelection(_) => {
                Some("Pick a sibling listed in the current portfolio".to_string())
            }
            _ => None,
        }
    }
}
