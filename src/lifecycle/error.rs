//! Errors that stop the system from starting or shutting down cleanly.

use thiserror::Error;

use crate::config::ConfigError;
use crate::customer_actor::CustomerError;
use crate::product_actor::ProductError;

#[derive(Debug, Error)]
pub enum SystemError {
    #[error(transparent)]
    Product(#[from] ProductError),

    #[error(transparent)]
    Customer(#[from] CustomerError),

    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Shutdown failed: {0}")]
    Shutdown(String),
}
