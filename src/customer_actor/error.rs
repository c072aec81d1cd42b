//! Error types for the Customer actor.

use thiserror::Error;

use crate::framework::FrameworkError;

/// Errors that can occur during customer operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CustomerError {
    /// The batch could not be recorded. Nothing from the batch was kept.
    #[error("Customer persistence failure: {0}")]
    PersistenceFailure(String),

    /// The customer data provided is invalid.
    #[error("Invalid customer: {0}")]
    Validation(String),
}

impl From<FrameworkError> for CustomerError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::EntityError(inner) => match inner.downcast::<CustomerError>() {
                Ok(err) => *err,
                Err(other) => CustomerError::Validation(other.to_string()),
            },
            FrameworkError::EmptyBatch => CustomerError::Validation("batch is empty".to_string()),
            other => CustomerError::PersistenceFailure(other.to_string()),
        }
    }
}
