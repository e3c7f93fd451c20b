//! Engine error types
//!
//! Only input validation can fail. Every rule downstream of validation is
//! total over finite inputs, so once a `ParameterSet` exists the pipeline
//! always produces a complete report.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// A required reading was absent from the request
    #[error("Missing parameter: {name}")]
    MissingParameter { name: &'static str },

    /// A reading was present but not a finite number
    #[error("Invalid parameter value for {name}: {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

impl EngineError {
    /// Wire name of the offending parameter
    pub fn parameter(&self) -> &'static str {
        match self {
            EngineError::MissingParameter { name } => name,
            EngineError::InvalidParameter { name, .. } => name,
        }
    }
}
