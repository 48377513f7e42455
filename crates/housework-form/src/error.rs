//! Error types for the done-housework dialog

use thiserror::Error;

use crate::form::ValidationErrors;
use crate::session::Phase;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// Submission blocked by a field rule
    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    /// Submit attempted outside the idle phase
    #[error("Dialog is not idle: {0:?}")]
    NotIdle(Phase),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid form configuration: {0}")]
    Parse(#[from] serde_json::Error),
}
