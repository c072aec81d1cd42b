//! Error types for the Product actor.

use thiserror::Error;

use crate::framework::FrameworkError;

/// Errors that can occur during product operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    /// The batch could not be recorded: a duplicate UPC or an unreachable store.
    /// Nothing from the batch was kept.
    #[error("Product persistence failure: {0}")]
    PersistenceFailure(String),

    /// The product data provided is invalid.
    #[error("Invalid product: {0}")]
    Validation(String),
}

impl From<FrameworkError> for ProductError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::EntityError(inner) => match inner.downcast::<ProductError>() {
                Ok(err) => *err,
                Err(other) => ProductError::Validation(other.to_string()),
            },
            FrameworkError::EmptyBatch => ProductError::Validation("batch is empty".to_string()),
            other => ProductError::PersistenceFailure(other.to_string()),
        }
    }
}
